use crate::core::data::colour::Colour;
use glam::Vec3;
use std::fmt;

/// Opaque handle to a visual element owned by a render adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Completion handle for a timed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element#{}", self.0)
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transition#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementShape {
    /// Upright box standing on its base, centred on its position.
    Bar { width: f32, height: f32 },
    /// Flat disk seen edge-on.
    Disk { radius: f32, thickness: f32 },
    /// Flocking agent; drawn along its heading.
    Agent { length: f32 },
}

/// Everything a render adapter needs to materialise a new element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementDescriptor {
    pub value: i32,
    pub shape: ElementShape,
    pub position: Vec3,
    pub colour: Colour,
}
