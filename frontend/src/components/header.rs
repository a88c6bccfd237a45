use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Header(output_path: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">{APP_NAME}</a>
            </div>
            <div class="header-right">
                <span class="output-label">"Output folder: "</span>
                // Stays "…" until /output-info has answered (or failed)
                <code id="outputPath">
                    {move || output_path.get().unwrap_or_else(|| "…".to_string())}
                </code>
            </div>
        </header>
    }
}
