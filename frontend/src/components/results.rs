//! Roast results: score, critique and suggestions.

use leptos::*;

use crate::services::dom;
use crate::types::RoastReport;

/// Hidden until a report arrives; scrolls itself into view when it does.
#[component]
pub fn ResultsSection(report: Memo<Option<RoastReport>>) -> impl IntoView {
    let container = create_node_ref::<html::Div>();

    create_effect(move |_| {
        if report.with(Option::is_none) {
            return;
        }
        if let Some(container) = container.get() {
            // Wait for the section to be laid out before scrolling
            request_animation_frame(move || dom::scroll_into_view_smooth(&container));
        }
    });

    view! {
        <div
            id="results-area"
            class="results-area"
            class:hidden=move || report.with(Option::is_none)
            style:display=move || if report.with(Option::is_none) { "none" } else { "block" }
            node_ref=container
        >
            <div class="score-card">
                <span class="score-label">"RATING"</span>
                <div
                    id="rating-score"
                    class="rating-score"
                    style:color=move || report.with(|r| r.as_ref().map(|r| r.tone().color())).unwrap_or_default()
                >
                    {move || report.with(|r| r.as_ref().map(RoastReport::score_text)).unwrap_or_default()}
                </div>
            </div>

            <div class="roast-card">
                <h3>"💀 The Critique"</h3>
                <p id="roast-content" class="roast-content">
                    {move || report.with(|r| r.as_ref().map(RoastReport::quoted_critique)).unwrap_or_default()}
                </p>
            </div>

            <div class="advice-card">
                <h3>"✨ Professional Fixes"</h3>
                <ul id="advice-list" class="advice-list">
                    {move || report.with(|r| {
                        r.as_ref()
                            .map(|r| r.professional_suggestions.clone())
                            .unwrap_or_default()
                            .into_iter()
                            .map(|tip| view! { <li>{tip}</li> })
                            .collect_view()
                    })}
                </ul>
            </div>
        </div>
    }
}
