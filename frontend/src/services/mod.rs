//! Backend and browser services.
//!
//! # Services
//!
//! - [`roast`] - PDF upload to the roast backend
//! - [`ticker`] - Rotating loading text timer
//! - [`dom`] - Small browser helpers (alerts, scrolling)

pub mod roast;
pub mod ticker;
pub mod dom;

pub use roast::*;
pub use ticker::*;
