//! UI Components for the ASD2CSV application.
//!
//! # Layout Components
//! - [`Header`] - App name and output folder
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Convert or merge section
//! - [`DropZone`] - Drag & drop area with hidden file picker
//! - [`ProgressBar`] - Upload progress indicator

mod header;
mod hero;
mod upload;
mod dropzone;
mod progress;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use dropzone::*;
pub use progress::*;
pub use footer::*;
