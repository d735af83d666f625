// --- File: crates/bookify_common/src/http.rs ---

pub mod client;
