// --- File: crates/bookify_common/src/error.rs ---

/// A trait for converting errors to HTTP status codes.
///
/// Integration crates implement this on their error enums so handlers can map
/// a failure to a response status in one place instead of matching at every
/// call site.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}
