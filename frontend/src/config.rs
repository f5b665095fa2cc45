//! Application configuration.
//!
//! Centralized configuration for the Resume Roast frontend.
//! The backend is served from the same origin, so the endpoint is a
//! relative path.

/// Roast endpoint (multipart POST, field `file`).
pub const ROAST_ENDPOINT: &str = "/roast";

/// Multipart field name expected by the backend.
pub const UPLOAD_FIELD: &str = "file";

/// Accepted file types for the native picker.
pub const ACCEPTED_FILE_TYPES: &str = ".pdf,application/pdf";

/// Period of the loading text rotation (in milliseconds).
pub const LOADING_MESSAGE_PERIOD_MS: u32 = 3_000;

/// Placeholder lines shown while waiting for the backend, in display order.
pub const LOADING_MESSAGES: [&str; 6] = [
    "Scanning for typos...",
    "Judging your font choices...",
    "Laughing at your 'Skills' section...",
    "Consulting the Roast Master...",
    "Preparing emotional damage...",
    "Generating brutally honest feedback...",
];

/// Submit button label when idle.
pub const SUBMIT_LABEL_IDLE: &str = "ROAST ME";

/// Submit button label while a request is in flight.
pub const SUBMIT_LABEL_BUSY: &str = "ROASTING...";

/// Alert shown when submitting without a file.
pub const NO_FILE_MESSAGE: &str = "Please upload a PDF first!";

/// Alert shown when the backend cannot be reached or answers garbage.
pub const BACKEND_UNAVAILABLE_MESSAGE: &str = "Something went wrong. The Roast Master is sleeping.";

/// Critique shown when the backend omits one.
pub const MISSING_CRITIQUE: &str = "No roast generated.";

/// Score colors.
pub const SCORE_COLOR_LOW: &str = "#ff4b4b";
pub const SCORE_COLOR_MID: &str = "#ffa500";
pub const SCORE_COLOR_HIGH: &str = "#2ea043";

/// Drop zone border colors.
pub const DROP_ZONE_BORDER_ACTIVE: &str = "#ff4b4b";
pub const DROP_ZONE_BORDER_IDLE: &str = "#30363d";
