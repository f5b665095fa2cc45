//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"🔥 Resume Roast Master"</h1>
            <p class="subtitle">
                "Upload your resume as a PDF. "
                "Get a brutally honest score, a roast, and the fixes that actually matter."
            </p>
        </div>
    }
}
