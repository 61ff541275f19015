use crate::core::data::colour::Colour;
use crate::core::data::element::{ElementDescriptor, ElementId, TransitionId};
use glam::Vec3;
use std::time::Duration;

/// Rendering collaborator the drivers call into. Drivers never touch
/// geometry directly; they only hold the handles this port hands out.
pub trait RenderAdapter {
    fn create_element(&mut self, descriptor: ElementDescriptor) -> ElementId;

    /// Removes the element together with any transition still driving it.
    fn destroy_element(&mut self, id: ElementId);

    fn set_colour(&mut self, id: ElementId, colour: Colour);

    /// Starts a timed move to `target`; the returned handle reports when
    /// the element has arrived.
    fn move_to(&mut self, id: ElementId, target: Vec3, duration: Duration) -> TransitionId;

    /// Starts a timed vertical move relative to the element's current height.
    fn lift_by(&mut self, id: ElementId, delta_y: f32, duration: Duration) -> TransitionId;

    /// Snaps the element to `position` with an optional facing direction.
    fn place(&mut self, id: ElementId, position: Vec3, heading: Option<Vec3>);

    /// Cancelled and unknown transitions count as finished.
    fn is_finished(&self, transition: TransitionId) -> bool;

    /// Halts every transition driving `id`, leaving it where it currently is.
    fn cancel_transitions(&mut self, id: ElementId);
}
