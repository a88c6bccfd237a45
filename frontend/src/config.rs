//! Application configuration.
//!
//! Centralized configuration for the ASD2CSV frontend.
//! The UI is served by the conversion server itself, so every path is
//! resolved against the page origin.

/// Backend API base URL.
///
/// Empty means "same origin as the page".
pub const API_BASE_URL: &str = "";

/// Application name, used for the document title.
pub const APP_NAME: &str = "ASD2CSV";

/// Endpoint converting `.asd` uploads into CSV files.
pub const CONVERT_ENDPOINT: &str = "/convert";

/// Endpoint merging several CSV uploads into one file.
pub const MERGE_ENDPOINT: &str = "/merge";

/// Endpoint reporting where the server writes its output.
pub const OUTPUT_INFO_ENDPOINT: &str = "/output-info";

/// Multipart field carrying each `.asd` file.
pub const CONVERT_FIELD: &str = "asd_files";

/// Multipart field carrying each `.csv` file.
pub const MERGE_FIELD: &str = "csv_files";

/// Delay before a status message is wiped (in milliseconds).
pub const STATUS_CLEAR_DELAY_MS: u32 = 3000;

/// Output folder shown when the server cannot tell us its own.
pub const DEFAULT_OUTPUT_FOLDER: &str = "output/";
