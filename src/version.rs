// Version information for the Retouch Node

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-placeholder-smoothing-2026-10-19";

/// Semantic version number
pub const VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

/// Build date
pub const BUILD_DATE: &str = "2026-10-19";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "multipart-upload",
    "raw-body-upload",
    "smooth-more-5x5",
    "median-3x3",
    "jpeg-output",
    "upload-size-cap",
    "strict-status-codes",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Retouch Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}
