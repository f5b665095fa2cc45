//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Selection Types** - the file picked by the user
//! - **API Types** - Backend response structures
//! - **Display Types** - score coloring
//! - **Error Types** - Frontend error handling

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use web_sys::File;

use crate::config::{MISSING_CRITIQUE, SCORE_COLOR_HIGH, SCORE_COLOR_LOW, SCORE_COLOR_MID};

// =============================================================================
// Selection Types
// =============================================================================

/// The single file currently chosen for upload.
///
/// Replaced on every new selection, whether it came from the picker or a drop.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    /// File name as reported by the browser
    pub name: String,
    /// Browser file handle (the payload)
    pub file: File,
}

impl SelectedFile {
    pub fn new(file: File) -> Self {
        Self { name: file.name(), file }
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response from `POST /roast`.
///
/// The backend answers either an error object or a full report; there is no
/// tag, so the shape decides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoastResult {
    /// `{ "error": "...", "details": "..." }`
    Failure {
        error: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    /// `{ "rating": 7, "roast_critique": "...", "professional_suggestions": [...] }`
    Report(RoastReport),
}

/// A successful roast.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoastReport {
    /// Score out of 10
    #[serde(deserialize_with = "deserialize_rating")]
    pub rating: f64,
    /// The roast itself
    #[serde(default = "missing_critique")]
    pub roast_critique: String,
    /// Actionable fixes, in display order
    #[serde(default)]
    pub professional_suggestions: Vec<String>,
}

impl RoastReport {
    /// Score as displayed, e.g. `"7/10"`.
    pub fn score_text(&self) -> String {
        format!("{}/10", self.rating)
    }

    /// Critique wrapped in literal quotes.
    pub fn quoted_critique(&self) -> String {
        format!("\"{}\"", self.roast_critique)
    }

    pub fn tone(&self) -> ScoreTone {
        ScoreTone::from_rating(self.rating)
    }
}

fn missing_critique() -> String {
    MISSING_CRITIQUE.to_string()
}

/// Accepts `7`, `7.5`, `"7"` and `"7/10"`.
fn deserialize_rating<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRating {
        Number(f64),
        Text(String),
    }

    match RawRating::deserialize(deserializer)? {
        RawRating::Number(value) => Ok(value),
        RawRating::Text(text) => parse_rating_text(&text)
            .ok_or_else(|| de::Error::custom(format!("invalid rating: {:?}", text))),
    }
}

fn parse_rating_text(text: &str) -> Option<f64> {
    text.split('/')
        .next()?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

// =============================================================================
// Display Types
// =============================================================================

/// Score color band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTone {
    /// Below 5
    Red,
    /// 5 up to (not including) 8
    Orange,
    /// 8 and above
    Green,
}

impl ScoreTone {
    pub fn from_rating(rating: f64) -> Self {
        if rating < 5.0 {
            ScoreTone::Red
        } else if rating < 8.0 {
            ScoreTone::Orange
        } else {
            ScoreTone::Green
        }
    }

    /// CSS color value.
    pub fn color(&self) -> &'static str {
        match self {
            ScoreTone::Red => SCORE_COLOR_LOW,
            ScoreTone::Orange => SCORE_COLOR_MID,
            ScoreTone::Green => SCORE_COLOR_HIGH,
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Nothing to submit.
    Validation(String),
    /// Request could not be built or sent.
    Network(String),
    /// Response body was not a roast result.
    Parse(String),
    /// Browser API call failed.
    Dom(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AppError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
