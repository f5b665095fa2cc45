//! PDF upload widget with drag & drop support.
//!
//! Handles file selection, the roast request, the rotating loading text,
//! and hands the result to [`ResultsSection`].

use leptos::*;
use web_sys::{DragEvent, Event, FileList, HtmlInputElement};

use crate::components::ResultsSection;
use crate::config::{
    ACCEPTED_FILE_TYPES, DROP_ZONE_BORDER_ACTIVE, DROP_ZONE_BORDER_IDLE,
    LOADING_MESSAGE_PERIOD_MS, ROAST_ENDPOINT,
};
use crate::services::{dom, roast_resume, LoadingTicker};
use crate::state::{SubmitGuard, WidgetState};
use crate::types::{AppError, SelectedFile};

#[component]
pub fn UploadWidget() -> impl IntoView {
    let state = create_rw_signal(WidgetState::default());
    let selected = create_rw_signal(None::<SelectedFile>);
    let (drag_active, set_drag_active) = create_signal(false);
    let ticker = store_value(None::<LoadingTicker>);
    let file_input = create_node_ref::<html::Input>();

    let report = create_memo(move |_| state.with(|s| s.report().cloned()));

    // Leaving the page mid-request must not leave the timer running
    on_cleanup(move || {
        ticker.try_update_value(Option::take);
    });

    // Shared by the picker and the drop zone; only the first file counts
    let select_file = move |files: Option<FileList>| {
        let Some(file) = files.and_then(|files| files.get(0)) else {
            return;
        };
        let file = SelectedFile::new(file);

        if !state.try_update(|s| s.select(file.name.clone())).unwrap_or(false) {
            log::warn!("⏳ Ignoring {} while a roast is in progress", file.name);
            return;
        }
        log::info!("📄 File selected: {}", file.name);
        selected.set(Some(file));
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        select_file(input.files());
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
        select_file(ev.data_transfer().and_then(|transfer| transfer.files()));
    };

    let on_submit = move |_| {
        let Some(begun) = state.try_update(WidgetState::begin_submit) else {
            log::warn!("Submit ignored: upload widget already disposed");
            return;
        };
        if let Err(e) = begun {
            match e {
                AppError::Validation(msg) => dom::alert(&msg),
                other => log::error!("❌ Cannot start roast: {}", other),
            }
            return;
        }

        let Some(selected_file) = selected.get_untracked() else {
            state.update(WidgetState::end_submit);
            return;
        };

        // Dropping the ticker cancels it: once here when the response is in,
        // and again on every exit path through the guard
        let guard = SubmitGuard::new(move || {
            ticker.try_update_value(Option::take);
            state.try_update(WidgetState::end_submit);
        });

        ticker.set_value(Some(LoadingTicker::start(
            LOADING_MESSAGE_PERIOD_MS,
            move |text| {
                state.try_update(|s| s.show_loading_text(text));
            },
        )));

        log::info!("🔥 Roasting {}...", selected_file.name);

        spawn_local(async move {
            let _guard = guard;

            let outcome = roast_resume(&selected_file.file, ROAST_ENDPOINT).await;

            ticker.try_update_value(Option::take);

            if let Some(message) = state.try_update(|s| s.complete(outcome)).flatten() {
                dom::alert(&message);
            }
        });
    };

    view! {
        <div class="upload-widget">
            <div
                id="drop-zone"
                class="drop-zone"
                class:dragover=move || drag_active.get()
                style:border-color=move || {
                    if drag_active.get() { DROP_ZONE_BORDER_ACTIVE } else { DROP_ZONE_BORDER_IDLE }
                }
                on:click=open_picker
                on:dragenter=on_drag_over
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <div class="upload-icon">"📄"</div>
                <p id="file-label" class="file-label">
                    {move || if state.with(|s| s.file_name().is_some()) {
                        "File Selected:"
                    } else {
                        "Drop your resume here"
                    }}
                </p>
                <p id="file-name" class="file-name">
                    {move || state
                        .with(|s| s.file_name().map(str::to_string))
                        .unwrap_or_else(|| "or click to browse (PDF only)".to_string())}
                </p>
            </div>

            <input
                type="file"
                id="pdf-file"
                accept=ACCEPTED_FILE_TYPES
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />

            <button
                id="roast-btn"
                class="roast-btn"
                prop:disabled=move || !state.with(WidgetState::can_submit)
                on:click=on_submit
            >
                {move || state.with(WidgetState::submit_label)}
            </button>

            <div
                id="loader"
                class="loader"
                style:display=move || {
                    if state.with(WidgetState::loader_visible) { "block" } else { "none" }
                }
            >
                <div class="spinner"></div>
                <p id="loading-text" class="loading-text">
                    {move || state.with(WidgetState::loading_text).unwrap_or_default()}
                </p>
            </div>
        </div>

        <ResultsSection report=report/>
    }
}
