//! HTTP protocol layer module
//!
//! Content-type inference and response builders, decoupled from the
//! dispatch and file-access logic.

pub mod mime;
pub mod response;

pub use response::{
    build_405_response, build_error_response, build_file_response, build_html_response,
};
