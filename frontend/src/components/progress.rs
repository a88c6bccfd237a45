use leptos::*;

use crate::state::Progress;

#[component]
pub fn ProgressBar(id: String, #[prop(into)] progress: Signal<Progress>) -> impl IntoView {
    view! {
        <div class="progress-bar">
            <div
                id=id
                class=move || progress.get().css_class()
                style:width=move || progress.get().width()
            ></div>
        </div>
    }
}
