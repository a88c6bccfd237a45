//! Drag & drop zone with a hidden file picker.
//!
//! Dropped files and picked files go through the same callback. The picker
//! is emptied whenever `picker_generation` changes.

use leptos::*;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

use crate::state::SectionKind;

fn files_from_list(list: FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[component]
pub fn DropZone(
    kind: SectionKind,
    on_files: Callback<Vec<File>>,
    #[prop(into)] picker_generation: Signal<u32>,
) -> impl IntoView {
    let (highlighted, set_highlighted) = create_signal(false);
    let input_ref = create_node_ref::<html::Input>();

    create_effect(move |_| {
        picker_generation.get();
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    });

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_highlighted.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_highlighted.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_highlighted.set(false);

        let files = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(files_from_list)
            .unwrap_or_default();
        log::debug!("{} file(s) dropped on {}", files.len(), kind.slug());
        on_files.call(files);
    };

    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        on_files.call(input.files().map(files_from_list).unwrap_or_default());
    };

    // Clicking anywhere in the zone opens the picker
    let open_picker = move |_| {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    view! {
        <div
            id=kind.dom_id("Drop")
            class="dropzone"
            class:highlight=move || highlighted.get()
            on:click=open_picker
            on:dragenter=on_drag_over
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <div class="dropzone-text">{kind.hint()}</div>
            <input
                type="file"
                id=kind.dom_id("Input")
                accept=kind.extension()
                multiple=true
                style="display:none"
                node_ref=input_ref
                on:change=on_change
            />
        </div>
    }
}
