//! Request handler module
//!
//! Responsible for request routing dispatch: the site root maps to the
//! entrypoint file, everything else is resolved across the ordered
//! search subdirectories.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
