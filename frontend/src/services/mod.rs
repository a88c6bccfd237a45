//! Backend services.
//!
//! # Services
//!
//! - [`upload`] - Multipart uploads and output-folder lookup against the
//!   conversion server

pub mod upload;

pub use upload::*;
