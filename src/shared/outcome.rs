//! Result of one market-data fetch, keeping "empty" apart from "failed".

use crate::error::SdkError;

/// Outcome of a single market-data request.
///
/// List refreshes treat `Empty` as a failure; history fetches treat it as
/// "no data". Keeping the variants separate lets each caller decide.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    /// The request succeeded and returned at least one record.
    Loaded(Vec<T>),
    /// The request succeeded with no records.
    Empty,
    /// Transport, status or decode failure.
    Failed(SdkError),
}

impl<T> FetchOutcome<T> {
    /// Wrap a successful response, mapping an empty vector to `Empty`.
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            FetchOutcome::Empty
        } else {
            FetchOutcome::Loaded(items)
        }
    }

    pub fn from_result(result: Result<Vec<T>, SdkError>) -> Self {
        match result {
            Ok(items) => Self::from_items(items),
            Err(err) => FetchOutcome::Failed(err),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchOutcome::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }

    pub fn len(&self) -> usize {
        match self {
            FetchOutcome::Loaded(items) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fail-soft view: the records, or an empty vector on any failure.
    pub fn into_items(self) -> Vec<T> {
        match self {
            FetchOutcome::Loaded(items) => items,
            FetchOutcome::Empty | FetchOutcome::Failed(_) => Vec::new(),
        }
    }
}
