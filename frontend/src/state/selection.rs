//! File selection filtering for the convert and merge sections.

use crate::config::{CONVERT_ENDPOINT, CONVERT_FIELD, MERGE_ENDPOINT, MERGE_FIELD};

/// Anything the user can drop or pick that carries a file name.
pub trait NamedFile {
    /// File name as reported by the browser (no directory part).
    fn file_name(&self) -> String;
}

impl NamedFile for web_sys::File {
    fn file_name(&self) -> String {
        web_sys::File::name(self)
    }
}

/// The two independent upload sections of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// `.asd` files converted to CSV
    Convert,
    /// Two or more `.csv` files merged into one
    Merge,
}

impl SectionKind {
    /// Required (lowercase) file extension, dot included.
    pub fn extension(self) -> &'static str {
        match self {
            SectionKind::Convert => ".asd",
            SectionKind::Merge => ".csv",
        }
    }

    /// Minimum number of matching files before the action is available.
    pub fn min_files(self) -> usize {
        match self {
            SectionKind::Convert => 1,
            SectionKind::Merge => 2,
        }
    }

    /// Upload endpoint path.
    pub fn endpoint(self) -> &'static str {
        match self {
            SectionKind::Convert => CONVERT_ENDPOINT,
            SectionKind::Merge => MERGE_ENDPOINT,
        }
    }

    /// Multipart field name, repeated once per file.
    pub fn field_name(self) -> &'static str {
        match self {
            SectionKind::Convert => CONVERT_FIELD,
            SectionKind::Merge => MERGE_FIELD,
        }
    }

    /// Status shown when neither the server nor the transport gave a message.
    pub fn fallback_message(self) -> &'static str {
        match self {
            SectionKind::Convert => "Conversion failed.",
            SectionKind::Merge => "Merge failed.",
        }
    }

    /// Prefix of every DOM id belonging to the section.
    pub fn slug(self) -> &'static str {
        match self {
            SectionKind::Convert => "convert",
            SectionKind::Merge => "merge",
        }
    }

    /// DOM id such as `convertBtn` or `mergeStatus`.
    pub fn dom_id(self, suffix: &str) -> String {
        format!("{}{}", self.slug(), suffix)
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Convert => "Convert ASD to CSV",
            SectionKind::Merge => "Merge CSV files",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            SectionKind::Convert => "Drop .asd files here or click to browse",
            SectionKind::Merge => "Drop two or more .csv files here or click to browse",
        }
    }

    pub fn action_label(self) -> &'static str {
        match self {
            SectionKind::Convert => "Convert",
            SectionKind::Merge => "Merge",
        }
    }

    /// Case-insensitive extension check.
    pub fn accepts(self, name: &str) -> bool {
        !name.is_empty() && name.to_lowercase().ends_with(self.extension())
    }
}

/// Keep only the candidates `kind` accepts, preserving their order.
pub fn filter_files<F: NamedFile>(kind: SectionKind, candidates: impl IntoIterator<Item = F>) -> Vec<F> {
    candidates
        .into_iter()
        .filter(|file| kind.accepts(&file.file_name()))
        .collect()
}

/// Label shown under a drop zone; empty when nothing is selected.
pub fn selection_label(count: usize) -> String {
    if count == 0 {
        String::new()
    } else {
        format!("{} file(s) selected", count)
    }
}
