use crate::core::exhibit_kinds::ExhibitKind;

/// Collaborator that shows or clears the "completed" marker for an exhibit.
pub trait CompletionPort: Send + Sync {
    /// Fired once per run, only on natural completion.
    fn announce(&self, exhibit: ExhibitKind);

    fn withdraw(&self, exhibit: ExhibitKind);
}
