//! Upload widget state.
//!
//! Everything the widget displays is derived from a single [`WidgetState`]
//! held in one reactive signal. The component only wires DOM events to the
//! transitions below:
//!
//! ```text
//! Idle ──begin_submit──▶ Submitting ──complete──▶ (Report | Failure | Error)
//!   ▲                                                        │
//!   └──────────────────────── end_submit ◀───────────────────┘
//! ```

use crate::config::{
    BACKEND_UNAVAILABLE_MESSAGE, LOADING_MESSAGES, NO_FILE_MESSAGE, SUBMIT_LABEL_BUSY,
    SUBMIT_LABEL_IDLE,
};
use crate::types::{AppError, AppResult, RoastReport, RoastResult};

// =============================================================================
// Widget State
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetState {
    file_name: Option<String>,
    submitting: bool,
    loading_text: Option<&'static str>,
    report: Option<RoastReport>,
}

impl WidgetState {
    /// Record a new selection. Stale results are hidden.
    ///
    /// Refused while a request is in flight, so a late report can never be
    /// shown next to a file it was not made for.
    pub fn select(&mut self, name: impl Into<String>) -> bool {
        if self.submitting {
            return false;
        }
        self.file_name = Some(name.into());
        self.report = None;
        true
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        self.file_name.is_some() && !self.submitting
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Enter the submitting phase.
    ///
    /// Fails without touching anything when no file has been selected or a
    /// request is already in flight.
    pub fn begin_submit(&mut self) -> AppResult<()> {
        if self.file_name.is_none() {
            return Err(AppError::Validation(NO_FILE_MESSAGE.to_string()));
        }
        if self.submitting {
            return Err(AppError::Validation("A roast is already in progress".to_string()));
        }

        self.submitting = true;
        self.loading_text = None;
        self.report = None;
        Ok(())
    }

    /// Ignored outside the submitting phase so a late timer tick cannot
    /// resurrect the loader.
    pub fn show_loading_text(&mut self, text: &'static str) {
        if self.submitting {
            self.loading_text = Some(text);
        }
    }

    pub fn loading_text(&self) -> Option<&'static str> {
        self.loading_text
    }

    pub fn loader_visible(&self) -> bool {
        self.submitting
    }

    /// Apply the outcome of the request.
    ///
    /// Returns the alert to show, if any.
    pub fn complete(&mut self, outcome: AppResult<RoastResult>) -> Option<String> {
        match outcome {
            Ok(RoastResult::Report(report)) => {
                log::info!("🔥 Roast received: {}", report.score_text());
                self.report = Some(report);
                None
            }
            Ok(RoastResult::Failure { error, details }) => {
                match details {
                    Some(details) => log::warn!("⚠️ Backend error: {} ({})", error, details),
                    None => log::warn!("⚠️ Backend error: {}", error),
                }
                Some(format!("Error: {}", error))
            }
            Err(e) => {
                log::error!("❌ Roast request failed: {}", e);
                Some(BACKEND_UNAVAILABLE_MESSAGE.to_string())
            }
        }
    }

    /// Back to idle. Safe to call more than once.
    pub fn end_submit(&mut self) {
        self.submitting = false;
        self.loading_text = None;
    }

    pub fn report(&self) -> Option<&RoastReport> {
        self.report.as_ref()
    }

    pub fn results_visible(&self) -> bool {
        self.report.is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            SUBMIT_LABEL_BUSY
        } else {
            SUBMIT_LABEL_IDLE
        }
    }
}

// =============================================================================
// Loading Text
// =============================================================================

/// Endless cycle over [`LOADING_MESSAGES`], starting at the first one.
#[derive(Clone, Debug, Default)]
pub struct LoadingCycle {
    next: usize,
}

impl LoadingCycle {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for LoadingCycle {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        let message = LOADING_MESSAGES[self.next];
        self.next = (self.next + 1) % LOADING_MESSAGES.len();
        Some(message)
    }
}

// =============================================================================
// Release Guard
// =============================================================================

/// Runs its release closure exactly once when dropped.
///
/// Held across the request so the submit control comes back on every exit
/// path, early returns included.
pub struct SubmitGuard<F: FnOnce()> {
    release: Option<F>,
}

impl<F: FnOnce()> SubmitGuard<F> {
    pub fn new(release: F) -> Self {
        Self {
            release: Some(release),
        }
    }
}

impl<F: FnOnce()> Drop for SubmitGuard<F> {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn report(rating: f64) -> RoastReport {
        RoastReport {
            rating,
            roast_critique: "Bad".to_string(),
            professional_suggestions: vec!["Fix spacing".to_string()],
        }
    }

    fn submitting_state() -> WidgetState {
        let mut state = WidgetState::default();
        state.select("resume.pdf");
        state.begin_submit().unwrap();
        state
    }

    #[test]
    fn test_initial_state() {
        let state = WidgetState::default();
        assert!(!state.can_submit());
        assert!(!state.loader_visible());
        assert!(!state.results_visible());
        assert_eq!(state.submit_label(), SUBMIT_LABEL_IDLE);
    }

    #[test]
    fn test_submit_without_file_is_rejected() {
        let mut state = WidgetState::default();
        let err = state.begin_submit().unwrap_err();
        assert_eq!(err, AppError::Validation(NO_FILE_MESSAGE.to_string()));
        assert!(!state.is_submitting());
        assert_eq!(state, WidgetState::default());
    }

    #[test]
    fn test_selection_enables_submit_and_hides_results() {
        let mut state = submitting_state();
        state.complete(Ok(RoastResult::Report(report(3.0))));
        state.end_submit();
        assert!(state.results_visible());

        state.select("other.pdf");
        assert_eq!(state.file_name(), Some("other.pdf"));
        assert!(state.can_submit());
        assert!(!state.results_visible());
    }

    #[test]
    fn test_selection_ignored_while_submitting() {
        let mut state = WidgetState::default();
        state.select("old.pdf");
        state.begin_submit().unwrap();

        assert!(!state.select("new.pdf"));
        assert_eq!(state.file_name(), Some("old.pdf"));

        let mut old = report(4.0);
        old.roast_critique = "old".to_string();
        state.complete(Ok(RoastResult::Report(old)));
        state.end_submit();

        assert_eq!(state.file_name(), Some("old.pdf"));
        assert_eq!(state.report().map(|r| r.roast_critique.as_str()), Some("old"));

        assert!(state.select("new.pdf"));
        assert_eq!(state.file_name(), Some("new.pdf"));
        assert!(!state.results_visible());
    }

    #[test]
    fn test_begin_submit_disables_control() {
        let mut state = submitting_state();
        assert!(!state.can_submit());
        assert!(state.loader_visible());
        assert_eq!(state.submit_label(), SUBMIT_LABEL_BUSY);
        assert!(state.begin_submit().is_err());
    }

    #[test]
    fn test_successful_roast() {
        let mut state = submitting_state();
        let alert = state.complete(Ok(RoastResult::Report(report(3.0))));
        state.end_submit();

        assert_eq!(alert, None);
        let shown = state.report().unwrap();
        assert_eq!(shown.score_text(), "3/10");
        assert_eq!(shown.professional_suggestions, vec!["Fix spacing".to_string()]);
        assert!(state.can_submit());
        assert_eq!(state.submit_label(), SUBMIT_LABEL_IDLE);
    }

    #[test]
    fn test_backend_error_keeps_results_hidden() {
        let mut state = submitting_state();
        let alert = state.complete(Ok(RoastResult::Failure {
            error: "File too large".to_string(),
            details: None,
        }));
        state.end_submit();

        assert!(alert.unwrap().contains("File too large"));
        assert!(!state.results_visible());
        assert!(state.can_submit());
        assert_eq!(state.submit_label(), SUBMIT_LABEL_IDLE);
    }

    #[test]
    fn test_transport_error_shows_generic_message() {
        let mut state = submitting_state();
        let alert = state.complete(Err(AppError::Network("connection refused".to_string())));
        state.end_submit();

        assert_eq!(alert.as_deref(), Some(BACKEND_UNAVAILABLE_MESSAGE));
        assert!(!state.results_visible());
        assert!(!state.loader_visible());
        assert!(state.can_submit());
    }

    #[test]
    fn test_previous_results_hidden_while_submitting() {
        let mut state = submitting_state();
        state.complete(Ok(RoastResult::Report(report(9.0))));
        state.end_submit();

        state.begin_submit().unwrap();
        assert!(!state.results_visible());
    }

    #[test]
    fn test_loading_text_only_while_submitting() {
        let mut state = WidgetState::default();
        state.show_loading_text(LOADING_MESSAGES[0]);
        assert_eq!(state.loading_text(), None);

        let mut state = submitting_state();
        state.show_loading_text(LOADING_MESSAGES[2]);
        assert_eq!(state.loading_text(), Some(LOADING_MESSAGES[2]));

        state.end_submit();
        assert_eq!(state.loading_text(), None);
        state.show_loading_text(LOADING_MESSAGES[3]);
        assert_eq!(state.loading_text(), None);
    }

    #[test]
    fn test_loading_cycle_wraps_in_order() {
        let shown: Vec<_> = LoadingCycle::new().take(LOADING_MESSAGES.len() * 2 + 1).collect();

        for (i, message) in shown.iter().enumerate() {
            assert_eq!(*message, LOADING_MESSAGES[i % LOADING_MESSAGES.len()]);
        }
    }

    #[test]
    fn test_guard_releases_once_on_drop() {
        let released = Rc::new(Cell::new(0));
        {
            let released = released.clone();
            let _guard = SubmitGuard::new(move || released.set(released.get() + 1));
        }
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_guard_releases_on_early_return() {
        fn fallible(released: Rc<Cell<bool>>) -> AppResult<()> {
            let _guard = SubmitGuard::new(move || released.set(true));
            Err::<(), _>(AppError::Parse("bad body".to_string()))?;
            Ok(())
        }

        let released = Rc::new(Cell::new(false));
        assert!(fallible(released.clone()).is_err());
        assert!(released.get());
    }
}
