//! Request handler module
//!
//! Request routing dispatch plus the static file delegate it falls back to.

pub mod router;
pub mod static_files;

pub use router::{dispatch, handle_request, RequestContext};
