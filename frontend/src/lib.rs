//! ASD2CSV - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for converting `.asd` spectrometer files to CSV
//! and merging CSV files. All processing happens on the server; this crate
//! only selects, uploads and reports.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (output folder)                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (convert .asd)                           │
//! │  └── UploadSection (merge .csv)                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Wire types and errors
//! - [`state`] - DOM-free selection state machine and upload controller
//! - [`components`] - UI components (Header, UploadSection, DropZone, ...)
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    ServerReply, UploadReply, OutputInfo,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{
    NamedFile, Phase, Progress, Section, SectionKind, SectionStore, SectionView, StatusTicket,
    UploadController, UploadOutcome,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount [`App`].
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 ASD2CSV - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let controller: AppController = UploadController::new(
        HttpBackend::new(API_BASE_URL),
        create_rw_signal(Section::new(SectionKind::Convert)),
        create_rw_signal(Section::new(SectionKind::Merge)),
    );
    let (output_path, set_output_path) = create_signal(None::<String>);

    // Fetched once; never fails, falls back to the default folder
    {
        let controller = controller.clone();
        spawn_local(async move {
            set_output_path.set(Some(controller.load_output_path().await));
        });
    }

    view! {
        <Header output_path=output_path/>

        <div class="container">
            <Hero/>
            <UploadSection kind=SectionKind::Convert controller=controller.clone()/>
            <UploadSection kind=SectionKind::Merge controller=controller/>
        </div>

        <Footer/>
    }
}
