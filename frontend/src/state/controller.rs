//! The upload controller: both sections, the backend, and the async actions.

use super::section::{StatusTicket, UploadOutcome};
use super::selection::SectionKind;
use super::SectionStore;
use crate::config::DEFAULT_OUTPUT_FOLDER;
use crate::services::Backend;

/// Mediates between file selection gestures, the two upload actions and
/// their feedback.
///
/// `S` is where each section lives: a reactive signal in the app, a
/// `RefCell` in tests.
#[derive(Clone, Debug)]
pub struct UploadController<B, S> {
    backend: B,
    convert: S,
    merge: S,
}

impl<B, S> UploadController<B, S>
where
    B: Backend,
    S: SectionStore<B::File>,
{
    /// `convert` and `merge` must hold sections of the matching kind.
    pub fn new(backend: B, convert: S, merge: S) -> Self {
        Self {
            backend,
            convert,
            merge,
        }
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    pub fn section(&self, kind: SectionKind) -> &S {
        match kind {
            SectionKind::Convert => &self.convert,
            SectionKind::Merge => &self.merge,
        }
    }

    pub fn set_files(&self, kind: SectionKind, candidates: Vec<B::File>) {
        self.section(kind).update_section(|s| s.set_files(candidates));
    }

    pub fn set_convert_files(&self, candidates: Vec<B::File>) {
        self.set_files(SectionKind::Convert, candidates);
    }

    pub fn set_merge_files(&self, candidates: Vec<B::File>) {
        self.set_files(SectionKind::Merge, candidates);
    }

    /// Upload the current selection of `kind`.
    ///
    /// Returns `None` without touching the network when the section has
    /// nothing to upload; otherwise the ticket of the status now on screen.
    pub async fn run(&self, kind: SectionKind) -> Option<StatusTicket> {
        let store = self.section(kind);
        let job = store.update_section(|s| s.begin_upload()).flatten()?;

        log::info!("📤 Uploading {} file(s) to {}", job.files.len(), kind.endpoint());

        let result = self
            .backend
            .post_files(kind.endpoint(), kind.field_name(), &job.files)
            .await;
        let status = result.as_ref().map(|reply| reply.status).ok();
        let outcome = UploadOutcome::from_result(kind, result);

        match (outcome.succeeded, status) {
            (true, _) => log::info!("✅ {}", outcome.message),
            (false, Some(code)) => {
                log::warn!("❌ {} upload failed (HTTP {}): {}", kind.slug(), code, outcome.message)
            }
            (false, None) => log::warn!("❌ {} upload failed: {}", kind.slug(), outcome.message),
        }

        store.update_section(|s| s.finish_upload(job.generation, &outcome))
    }

    pub async fn do_convert(&self) -> Option<StatusTicket> {
        self.run(SectionKind::Convert).await
    }

    pub async fn do_merge(&self) -> Option<StatusTicket> {
        self.run(SectionKind::Merge).await
    }

    /// Auto-clear callback: wipes the status unless a newer one replaced it.
    pub fn clear_status(&self, ticket: StatusTicket) -> bool {
        self.section(ticket.kind())
            .update_section(|s| s.clear_status(ticket))
            .unwrap_or(false)
    }

    /// Output folder reported by the server, or the default on any failure.
    pub async fn load_output_path(&self) -> String {
        match self.backend.fetch_output_info().await {
            Ok(info) => match info.output_folder.filter(|p| !p.is_empty()) {
                Some(path) => path,
                None => {
                    log::warn!("output-info returned no folder, using default");
                    DEFAULT_OUTPUT_FOLDER.to_string()
                }
            },
            Err(e) => {
                log::warn!("Failed to load output folder: {}", e);
                DEFAULT_OUTPUT_FOLDER.to_string()
            }
        }
    }
}
