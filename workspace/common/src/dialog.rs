//! Draft-then-commit state of a modal edit dialog.

use crate::model::Record;

/// Edit dialog for one record kind.
///
/// The draft only exists while the dialog is open; closing it, by save or by
/// cancel, drops the draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditDialog<T> {
    #[default]
    Closed,
    Editing { draft: T },
}

impl<T: Record> EditDialog<T> {
    /// Opens the dialog seeded with a copy of `record`.
    pub fn open(record: &T) -> Self {
        Self::Editing {
            draft: record.clone(),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn draft(&self) -> Option<&T> {
        match self {
            Self::Editing { draft } => Some(draft),
            Self::Closed => None,
        }
    }

    /// Applies a single-field edit to the draft. A closed dialog stays closed.
    pub fn update(&self, field: T::Field) -> Self {
        match self {
            Self::Editing { draft } => Self::Editing {
                draft: draft.with_field(field),
            },
            Self::Closed => Self::Closed,
        }
    }

    /// Replaces the record matching the draft's id in `records`.
    ///
    /// Returns `None` when the dialog is closed. A draft whose record has been
    /// removed meanwhile yields the collection unchanged.
    pub fn commit(&self, records: &[T]) -> Option<Vec<T>> {
        let draft = self.draft()?;
        Some(
            records
                .iter()
                .map(|record| {
                    if record.id() == draft.id() {
                        draft.clone()
                    } else {
                        record.clone()
                    }
                })
                .collect(),
        )
    }
}
