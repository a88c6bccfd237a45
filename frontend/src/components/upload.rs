//! Convert / merge section: drop zone, action button, progress and status.
//!
//! The status text is wiped [`STATUS_CLEAR_DELAY_MS`] after it appears. Only
//! the latest timer is kept; replacing it drops (cancels) the previous one.

use gloo_timers::callback::Timeout;
use leptos::*;
use web_sys::File;

use crate::components::{DropZone, ProgressBar};
use crate::services::HttpBackend;
use crate::state::{Section, SectionKind, SectionView, UploadController};
use crate::STATUS_CLEAR_DELAY_MS;

/// Controller wired to the real server, with each section in a signal.
pub type AppController = UploadController<HttpBackend, RwSignal<Section<File>>>;

#[component]
pub fn UploadSection(kind: SectionKind, controller: AppController) -> impl IntoView {
    let section = *controller.section(kind);
    let pending_clear = store_value(None::<Timeout>);

    let view_of = move |f: fn(&SectionView) -> String| move || section.with(|s| f(s.view()));

    let on_files = {
        let controller = controller.clone();
        Callback::new(move |files: Vec<File>| controller.set_files(kind, files))
    };

    let on_action = move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            let Some(ticket) = controller.run(kind).await else {
                return;
            };
            let timeout = Timeout::new(STATUS_CLEAR_DELAY_MS, move || {
                controller.clear_status(ticket);
            });
            pending_clear.set_value(Some(timeout));
        });
    };

    let picker_generation = Signal::derive(move || section.with(|s| s.view().picker_generation));
    let progress = Signal::derive(move || section.with(|s| s.view().progress));
    let action_disabled = move || !section.with(|s| s.view().action_enabled);

    view! {
        <section class="upload-card" id=kind.dom_id("Section")>
            <h2>{kind.title()}</h2>

            <DropZone kind=kind on_files=on_files picker_generation=picker_generation/>

            <div class="selected" id=kind.dom_id("Selected")>
                {view_of(|v| v.selected_label.clone())}
            </div>

            <button
                id=kind.dom_id("Btn")
                class="action-button"
                disabled=action_disabled
                on:click=on_action
            >
                {kind.action_label()}
            </button>

            <ProgressBar id=kind.dom_id("Progress") progress=progress/>

            <div class="status" id=kind.dom_id("Status")>
                {view_of(|v| v.status.clone())}
            </div>
        </section>
    }
}
