//! Per-section state machine.
//!
//! A [`Section`] owns one file selection and the values the page shows for
//! it (label, button, progress, status). It moves through
//! `Empty -> Selected -> Uploading -> Empty`; a new drop or pick may happen
//! in any phase.
//!
//! Every `set_files` bumps a selection generation. An upload snapshots the
//! generation it started from and only resets the section if nothing was
//! selected in the meantime, so a newer selection is never wiped by an older
//! request.

use super::selection::{filter_files, selection_label, NamedFile, SectionKind};
use crate::types::{AppResult, UploadReply};

/// Progress bar state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Progress {
    /// Empty bar (0%)
    #[default]
    Idle,
    /// Upload in flight, animated
    Indeterminate,
}

impl Progress {
    pub fn css_class(self) -> &'static str {
        match self {
            Progress::Idle => "progress-fill",
            Progress::Indeterminate => "progress-fill indeterminate",
        }
    }

    pub fn width(self) -> &'static str {
        match self {
            // The animation comes from the class alone
            Progress::Idle | Progress::Indeterminate => "0%",
        }
    }
}

/// Lifecycle of one selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Selected,
    Uploading,
}

/// What the page renders for a section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionView {
    pub selected_label: String,
    pub action_enabled: bool,
    pub status: String,
    pub progress: Progress,
    /// Incremented each time the file input must drop its chosen files.
    pub picker_generation: u32,
}

/// Identifies one displayed status so its auto-clear can be invalidated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusTicket {
    kind: SectionKind,
    epoch: u64,
}

impl StatusTicket {
    pub fn kind(&self) -> SectionKind {
        self.kind
    }
}

/// Files snapshotted for one request.
#[derive(Clone, Debug)]
pub struct UploadJob<F> {
    pub generation: u64,
    pub files: Vec<F>,
}

/// Text to display once an upload has completed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadOutcome {
    pub succeeded: bool,
    pub message: String,
}

impl UploadOutcome {
    /// Pick the best message out of a reply.
    ///
    /// A 2xx reply with a message shows it; anything else falls back to the
    /// body's `message`, then `error`, then the section's generic text.
    pub fn from_result(kind: SectionKind, result: AppResult<UploadReply>) -> Self {
        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                log::warn!("{} request failed: {}", kind.endpoint(), e);
                return Self {
                    succeeded: false,
                    message: kind.fallback_message().to_string(),
                };
            }
        };

        if reply.ok {
            if let Some(message) = reply.body.message() {
                return Self {
                    succeeded: true,
                    message: message.to_string(),
                };
            }
        }

        let message = reply
            .body
            .message()
            .or_else(|| reply.body.error())
            .unwrap_or_else(|| kind.fallback_message())
            .to_string();

        Self {
            succeeded: false,
            message,
        }
    }
}

/// One upload section (convert or merge).
#[derive(Clone, Debug)]
pub struct Section<F> {
    kind: SectionKind,
    files: Vec<F>,
    phase: Phase,
    generation: u64,
    status_epoch: u64,
    view: SectionView,
}

impl<F: NamedFile + Clone> Section<F> {
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            files: Vec::new(),
            phase: Phase::Empty,
            generation: 0,
            status_epoch: 0,
            view: SectionView::default(),
        }
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn view(&self) -> &SectionView {
        &self.view
    }

    /// Replace the selection with the accepted subset of `candidates`.
    pub fn set_files(&mut self, candidates: Vec<F>) {
        self.files = filter_files(self.kind, candidates);
        self.generation += 1;

        let ready = self.files.len() >= self.kind.min_files();
        self.phase = if ready { Phase::Selected } else { Phase::Empty };
        self.view.selected_label = selection_label(self.files.len());
        self.view.action_enabled = ready;

        self.status_epoch += 1;
        self.view.status.clear();
        self.view.progress = Progress::Idle;
    }

    /// Start an upload, or `None` when the section is not `Selected`.
    pub fn begin_upload(&mut self) -> Option<UploadJob<F>> {
        if self.phase != Phase::Selected || self.files.len() < self.kind.min_files() {
            return None;
        }

        self.phase = Phase::Uploading;
        self.view.action_enabled = false;
        self.view.progress = Progress::Indeterminate;
        self.view.selected_label.clear();

        Some(UploadJob {
            generation: self.generation,
            files: self.files.clone(),
        })
    }

    /// Show the outcome of the upload started at `generation`.
    ///
    /// The selection, picker, progress bar and button are reset only if the
    /// selection is still the one that was uploaded.
    pub fn finish_upload(&mut self, generation: u64, outcome: &UploadOutcome) -> StatusTicket {
        let ticket = self.show_status(outcome.message.clone());

        if generation == self.generation {
            self.files.clear();
            self.phase = Phase::Empty;
            self.view.picker_generation = self.view.picker_generation.wrapping_add(1);
            self.view.progress = Progress::Idle;
            self.view.action_enabled = false;
        } else {
            log::debug!(
                "{} selection changed during upload, keeping the new one",
                self.kind.slug()
            );
        }

        ticket
    }

    /// Clear the status text if `ticket` is still the latest one shown.
    pub fn clear_status(&mut self, ticket: StatusTicket) -> bool {
        if ticket.kind != self.kind || ticket.epoch != self.status_epoch {
            return false;
        }
        self.view.status.clear();
        true
    }

    fn show_status(&mut self, text: String) -> StatusTicket {
        self.status_epoch += 1;
        self.view.status = text;
        StatusTicket {
            kind: self.kind,
            epoch: self.status_epoch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::{files, MockFile};
    use crate::types::{AppError, ServerReply};

    fn reply(ok: bool, status: u16, json: &str) -> AppResult<UploadReply> {
        Ok(UploadReply {
            ok,
            status,
            body: ServerReply::parse(json),
        })
    }

    fn outcome(message: &str) -> UploadOutcome {
        UploadOutcome {
            succeeded: true,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_convert_selection_enables_action() {
        let mut section = Section::new(SectionKind::Convert);
        section.set_files(files(&["a.asd", "b.txt", "c.ASD"]));

        assert_eq!(section.files(), &[MockFile("a.asd"), MockFile("c.ASD")]);
        assert_eq!(section.phase(), Phase::Selected);
        assert_eq!(section.view().selected_label, "2 file(s) selected");
        assert!(section.view().action_enabled);
    }

    #[test]
    fn test_single_csv_keeps_merge_disabled() {
        let mut section = Section::new(SectionKind::Merge);
        section.set_files(files(&["x.csv"]));

        assert_eq!(section.files(), &[MockFile("x.csv")]);
        assert_eq!(section.phase(), Phase::Empty);
        assert_eq!(section.view().selected_label, "1 file(s) selected");
        assert!(!section.view().action_enabled);
        assert!(section.begin_upload().is_none());
    }

    #[test]
    fn test_no_matching_files_clears_label() {
        let mut section = Section::new(SectionKind::Convert);
        section.set_files(files(&["a.asd"]));
        section.set_files(files(&["readme.md"]));

        assert!(section.files().is_empty());
        assert_eq!(section.view().selected_label, "");
        assert!(!section.view().action_enabled);
    }

    #[test]
    fn test_setter_resets_status_and_progress() {
        let mut section = Section::new(SectionKind::Convert);
        section.set_files(files(&["a.asd"]));
        let job = section.begin_upload().unwrap();
        assert_eq!(section.view().progress, Progress::Indeterminate);

        section.finish_upload(job.generation, &outcome("1 file(s) processed successfully."));
        assert!(!section.view().status.is_empty());

        section.set_files(files(&["b.asd"]));
        assert_eq!(section.view().status, "");
        assert_eq!(section.view().progress, Progress::Idle);
    }

    #[test]
    fn test_merge_setter_resets_status_and_progress() {
        let mut section = Section::new(SectionKind::Merge);
        section.set_files(files(&["a.csv", "b.csv"]));
        let job = section.begin_upload().unwrap();
        assert_eq!(section.view().progress, Progress::Indeterminate);

        // A drop while the request is in flight
        section.set_files(files(&["c.csv"]));
        assert_eq!(section.view().status, "");
        assert_eq!(section.view().progress, Progress::Idle);

        section.finish_upload(job.generation, &outcome("2 file(s) merged successfully."));
        assert_eq!(section.view().status, "2 file(s) merged successfully.");

        section.set_files(files(&["x.csv", "y.csv"]));
        assert_eq!(section.view().status, "");
        assert_eq!(section.view().progress, Progress::Idle);
        assert!(section.view().action_enabled);
    }

    #[test]
    fn test_begin_upload_marks_uploading() {
        let mut section = Section::new(SectionKind::Merge);
        section.set_files(files(&["a.csv", "b.csv"]));

        let job = section.begin_upload().unwrap();
        assert_eq!(job.files.len(), 2);
        assert_eq!(section.phase(), Phase::Uploading);
        assert!(!section.view().action_enabled);
        assert_eq!(section.view().selected_label, "");
        assert_eq!(section.view().progress, Progress::Indeterminate);

        // The button is disabled; a second start is refused.
        assert!(section.begin_upload().is_none());
    }

    #[test]
    fn test_finish_upload_resets_section() {
        let mut section = Section::new(SectionKind::Convert);
        section.set_files(files(&["a.asd", "b.asd"]));
        let job = section.begin_upload().unwrap();

        section.finish_upload(job.generation, &outcome("2 file(s) processed successfully."));

        assert!(section.files().is_empty());
        assert_eq!(section.phase(), Phase::Empty);
        assert!(!section.view().action_enabled);
        assert_eq!(section.view().progress, Progress::Idle);
        assert_eq!(section.view().picker_generation, 1);
        assert_eq!(section.view().status, "2 file(s) processed successfully.");
    }

    #[test]
    fn test_selection_during_upload_survives_completion() {
        let mut section = Section::new(SectionKind::Convert);
        section.set_files(files(&["a.asd"]));
        let job = section.begin_upload().unwrap();

        section.set_files(files(&["b.asd", "c.asd"]));
        section.finish_upload(job.generation, &outcome("1 file(s) processed successfully."));

        assert_eq!(section.files(), &[MockFile("b.asd"), MockFile("c.asd")]);
        assert_eq!(section.phase(), Phase::Selected);
        assert!(section.view().action_enabled);
        assert_eq!(section.view().picker_generation, 0);
        assert_eq!(section.view().status, "1 file(s) processed successfully.");
    }

    #[test]
    fn test_stale_clear_does_not_wipe_newer_status() {
        let mut section = Section::new(SectionKind::Convert);

        section.set_files(files(&["a.asd"]));
        let job = section.begin_upload().unwrap();
        let first = section.finish_upload(job.generation, &outcome("first"));

        section.set_files(files(&["b.asd"]));
        let job = section.begin_upload().unwrap();
        let second = section.finish_upload(job.generation, &outcome("second"));

        assert!(!section.clear_status(first));
        assert_eq!(section.view().status, "second");
        assert!(section.clear_status(second));
        assert_eq!(section.view().status, "");
    }

    #[test]
    fn test_ticket_from_other_section_is_ignored() {
        let mut convert: Section<MockFile> = Section::new(SectionKind::Convert);
        let mut merge: Section<MockFile> = Section::new(SectionKind::Merge);

        convert.set_files(files(&["a.asd"]));
        let job = convert.begin_upload().unwrap();
        let ticket = convert.finish_upload(job.generation, &outcome("done"));

        merge.set_files(files(&["a.csv", "b.csv"]));
        let job = merge.begin_upload().unwrap();
        merge.finish_upload(job.generation, &outcome("merged"));

        assert_eq!(ticket.kind(), SectionKind::Convert);
        assert!(!merge.clear_status(ticket));
        assert_eq!(merge.view().status, "merged");
    }

    #[test]
    fn test_outcome_success_message() {
        let result = reply(true, 200, r#"{"ok": true, "message": "2 file(s) processed successfully."}"#);
        let outcome = UploadOutcome::from_result(SectionKind::Convert, result);
        assert!(outcome.succeeded);
        assert_eq!(outcome.message, "2 file(s) processed successfully.");
    }

    #[test]
    fn test_outcome_server_error() {
        let result = reply(false, 500, r#"{"error": "disk full"}"#);
        let outcome = UploadOutcome::from_result(SectionKind::Merge, result);
        assert!(!outcome.succeeded);
        assert_eq!(outcome.message, "disk full");
    }

    #[test]
    fn test_outcome_prefers_message_over_error() {
        let result = reply(false, 400, r#"{"ok": false, "message": "Select at least 2 CSV files to merge.", "error": "x"}"#);
        let outcome = UploadOutcome::from_result(SectionKind::Merge, result);
        assert_eq!(outcome.message, "Select at least 2 CSV files to merge.");
    }

    #[test]
    fn test_outcome_survives_malformed_fields() {
        let result = reply(true, 200, r#"{"ok": 1, "message": "2 file(s) processed successfully."}"#);
        let outcome = UploadOutcome::from_result(SectionKind::Convert, result);
        assert!(outcome.succeeded);
        assert_eq!(outcome.message, "2 file(s) processed successfully.");

        let result = reply(false, 400, r#"{"message": "Merge failed: x", "error": {"code": 3}}"#);
        let outcome = UploadOutcome::from_result(SectionKind::Merge, result);
        assert_eq!(outcome.message, "Merge failed: x");
    }

    #[test]
    fn test_outcome_fallbacks() {
        let ok_without_message = reply(true, 200, "{}");
        let outcome = UploadOutcome::from_result(SectionKind::Convert, ok_without_message);
        assert!(!outcome.succeeded);
        assert_eq!(outcome.message, "Conversion failed.");

        let not_json = reply(false, 502, "<html>Bad Gateway</html>");
        let outcome = UploadOutcome::from_result(SectionKind::Merge, not_json);
        assert_eq!(outcome.message, "Merge failed.");

        let transport = Err(AppError::Network("offline".into()));
        let outcome = UploadOutcome::from_result(SectionKind::Convert, transport);
        assert_eq!(outcome.message, "Conversion failed.");
    }

    #[test]
    fn test_outcome_ignores_empty_message() {
        let result = Ok(UploadReply {
            ok: false,
            status: 500,
            body: ServerReply {
                message: Some(String::new()),
                error: Some("boom".into()),
            },
        });
        let outcome = UploadOutcome::from_result(SectionKind::Convert, result);
        assert_eq!(outcome.message, "boom");
    }

    #[test]
    fn test_progress_rendering() {
        assert_eq!(Progress::default(), Progress::Idle);
        assert_eq!(Progress::Idle.width(), "0%");
        assert_eq!(Progress::Indeterminate.width(), "0%");
        assert!(Progress::Indeterminate.css_class().contains("indeterminate"));
    }
}
