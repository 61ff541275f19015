use crate::core::animator::AdvanceReport;
use crate::core::exhibit_kinds::ExhibitKind;
use crate::core::ports::completion::CompletionPort;
use crate::core::ports::render_adapter::RenderAdapter;
use crate::core::timing::StepTiming;
use std::sync::Arc;
use std::time::Duration;

/// Surface shared by every exhibit driver.
///
/// Elements exist only while the exhibit is visible: `show` builds them and
/// `hide` tears the exhibit down to Idle, destroying them.
pub trait Visualizer {
    fn kind(&self) -> ExhibitKind;

    fn show(&mut self, adapter: &mut dyn RenderAdapter);

    fn hide(&mut self, adapter: &mut dyn RenderAdapter);

    /// Begins a run. Refused (returning `false`) unless visible and Idle.
    fn start(&mut self) -> bool;

    /// Idempotent. Halts in-flight transitions on this exhibit's elements.
    fn stop(&mut self, adapter: &mut dyn RenderAdapter);

    /// Stops, restores the original state and rebuilds elements if visible.
    fn reset(&mut self, adapter: &mut dyn RenderAdapter);

    fn advance(&mut self, elapsed: Duration, adapter: &mut dyn RenderAdapter) -> AdvanceReport;

    fn is_visible(&self) -> bool;

    fn is_running(&self) -> bool;

    fn set_completion_port(&mut self, port: Arc<dyn CompletionPort>);

    /// Takes effect from the next phase onward. Continuous exhibits ignore it.
    fn set_timing(&mut self, _timing: StepTiming) {}
}
