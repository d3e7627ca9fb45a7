//! HTTP protocol layer module
//!
//! Protocol-level helpers (MIME detection, response building) decoupled
//! from the file-resolution logic in `handler`.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_file_response, build_options_response,
};
