// --- File: crates/bookify_zoom/src/lib.rs ---
// Declare modules within this crate
pub mod auth;
#[cfg(test)]
mod auth_test;
pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod routes;
