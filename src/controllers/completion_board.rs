use crate::core::exhibit_kinds::ExhibitKind;
use crate::core::ports::completion::CompletionPort;
use std::collections::BTreeSet;
use std::sync::Mutex;
use tracing::info;

/// Remembers which exhibits currently show their "completed" marker.
#[derive(Debug, Default)]
pub struct CompletionBoard {
    completed: Mutex<BTreeSet<ExhibitKind>>,
}

impl CompletionBoard {
    #[must_use]
    pub fn is_completed(&self, exhibit: ExhibitKind) -> bool {
        self.completed
            .lock()
            .map(|completed| completed.contains(&exhibit))
            .unwrap_or(false)
    }

    /// Marked exhibits in catalogue order.
    #[must_use]
    pub fn completed(&self) -> Vec<ExhibitKind> {
        self.completed
            .lock()
            .map(|completed| completed.iter().copied().collect())
            .unwrap_or_default()
    }
}

impl CompletionPort for CompletionBoard {
    fn announce(&self, exhibit: ExhibitKind) {
        if let Ok(mut completed) = self.completed.lock() {
            if completed.insert(exhibit) {
                info!(%exhibit, "completion marker shown");
            }
        }
    }

    fn withdraw(&self, exhibit: ExhibitKind) {
        if let Ok(mut completed) = self.completed.lock() {
            completed.remove(&exhibit);
        }
    }
}
