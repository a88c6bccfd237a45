//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"ASD to CSV"</h1>
            <p class="subtitle">
                "Convert ASD spectrometer files to CSV, or merge several CSV exports into one file. "
                "Results are written to the output folder shown above."
            </p>
        </div>
    }
}
