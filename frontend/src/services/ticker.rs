//! Rotating loading text.

use gloo_timers::callback::Interval;

use crate::state::LoadingCycle;

/// Repeating timer that feeds [`LoadingCycle`] lines to a callback.
///
/// The first line is delivered immediately, then one line per period.
/// There is no explicit stop: dropping the ticker cancels the timer.
pub struct LoadingTicker {
    _interval: Interval,
}

impl LoadingTicker {
    pub fn start(period_ms: u32, mut on_text: impl FnMut(&'static str) + 'static) -> Self {
        let mut cycle = LoadingCycle::new();
        if let Some(first) = cycle.next() {
            on_text(first);
        }

        let interval = Interval::new(period_ms, move || {
            if let Some(text) = cycle.next() {
                on_text(text);
            }
        });

        Self { _interval: interval }
    }
}
