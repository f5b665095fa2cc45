//! Resume Roast - Frontend Rust/Leptos Application
//!
//! A WebAssembly upload widget: pick or drop a PDF resume, send it to the
//! backend's `/roast` endpoint and render the returned score, critique and
//! suggestions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadWidget (drop zone, submit button, loader)        │
//! │  └── ResultsSection (hidden until a roast arrives)          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Response model, score tones, errors
//! - [`state`] - Widget state machine and loading text cycle
//! - [`components`] - UI components
//! - [`services`] - Backend communication and browser helpers

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Selection
    SelectedFile,
    // API
    RoastResult, RoastReport,
    // Display
    ScoreTone,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{LoadingCycle, SubmitGuard, WidgetState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the application.
///
/// Exported so the module can also be started from plain JavaScript.
#[wasm_bindgen]
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Resume Roast - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Resume Roast Master"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <UploadWidget/>
        </div>

        <Footer/>
    }
}
