//! UI Components for the Resume Roast application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadWidget`] - PDF selection (picker or drag & drop) and submission
//! - [`ResultsSection`] - Score, critique and suggestions

mod hero;
mod upload;
mod results;
mod footer;

pub use hero::*;
pub use upload::*;
pub use results::*;
pub use footer::*;
