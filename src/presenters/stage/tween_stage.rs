use crate::core::data::colour::Colour;
use crate::core::data::element::{ElementDescriptor, ElementId, ElementShape, TransitionId};
use crate::core::ports::render_adapter::RenderAdapter;
use crate::presenters::stage::tween::{Easing, Tween};
use glam::Vec3;
use std::collections::BTreeMap;
use std::time::Duration;

/// Current state of one element on the stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageElement {
    pub shape: ElementShape,
    pub value: i32,
    pub position: Vec3,
    pub colour: Colour,
    pub heading: Option<Vec3>,
}

/// Software scene implementing the render port.
///
/// Moves become eased tweens that only progress when the host calls
/// `advance`. An element has at most one tween; starting a new one replaces
/// the old, which then reports finished.
#[derive(Debug)]
pub struct TweenStage {
    next_element: u64,
    next_transition: u64,
    elements: BTreeMap<ElementId, StageElement>,
    tweens: BTreeMap<TransitionId, Tween>,
    move_easing: Easing,
    lift_easing: Easing,
}

impl Default for TweenStage {
    fn default() -> Self {
        Self::new()
    }
}

impl TweenStage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_element: 0,
            next_transition: 0,
            elements: BTreeMap::new(),
            tweens: BTreeMap::new(),
            move_easing: Easing::Power2InOut,
            lift_easing: Easing::Power2Out,
        }
    }

    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&StageElement> {
        self.elements.get(&id)
    }

    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &StageElement)> {
        self.elements.iter().map(|(&id, element)| (id, element))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }

    /// Progresses every tween. Returns `true` when anything moved.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.tweens.is_empty() {
            return false;
        }

        for tween in self.tweens.values_mut() {
            let position = tween.advance(elapsed);
            if let Some(element) = self.elements.get_mut(&tween.element) {
                element.position = position;
            }
        }
        self.tweens.retain(|_, tween| !tween.is_complete());

        true
    }

    fn start_tween(
        &mut self,
        id: ElementId,
        target: Vec3,
        duration: Duration,
        easing: Easing,
    ) -> TransitionId {
        self.next_transition += 1;
        let transition = TransitionId(self.next_transition);

        self.tweens.retain(|_, tween| tween.element != id);
        let Some(element) = self.elements.get_mut(&id) else {
            return transition;
        };

        if duration.is_zero() {
            element.position = target;
            return transition;
        }

        self.tweens.insert(
            transition,
            Tween::new(transition, id, element.position, target, duration, easing),
        );
        transition
    }
}

impl RenderAdapter for TweenStage {
    fn create_element(&mut self, descriptor: ElementDescriptor) -> ElementId {
        self.next_element += 1;
        let id = ElementId(self.next_element);

        self.elements.insert(
            id,
            StageElement {
                shape: descriptor.shape,
                value: descriptor.value,
                position: descriptor.position,
                colour: descriptor.colour,
                heading: None,
            },
        );

        id
    }

    fn destroy_element(&mut self, id: ElementId) {
        self.elements.remove(&id);
        self.tweens.retain(|_, tween| tween.element != id);
    }

    fn set_colour(&mut self, id: ElementId, colour: Colour) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.colour = colour;
        }
    }

    fn move_to(&mut self, id: ElementId, target: Vec3, duration: Duration) -> TransitionId {
        self.start_tween(id, target, duration, self.move_easing)
    }

    fn lift_by(&mut self, id: ElementId, delta_y: f32, duration: Duration) -> TransitionId {
        let target = self
            .elements
            .get(&id)
            .map_or(Vec3::ZERO, |element| element.position + Vec3::Y * delta_y);

        self.start_tween(id, target, duration, self.lift_easing)
    }

    fn place(&mut self, id: ElementId, position: Vec3, heading: Option<Vec3>) {
        self.tweens.retain(|_, tween| tween.element != id);

        if let Some(element) = self.elements.get_mut(&id) {
            element.position = position;
            if heading.is_some() {
                element.heading = heading;
            }
        }
    }

    fn is_finished(&self, transition: TransitionId) -> bool {
        !self.tweens.contains_key(&transition)
    }

    fn cancel_transitions(&mut self, id: ElementId) {
        self.tweens.retain(|_, tween| tween.element != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(stage: &mut TweenStage, position: Vec3) -> ElementId {
        stage.create_element(ElementDescriptor {
            value: 3,
            shape: ElementShape::Bar {
                width: 0.3,
                height: 1.0,
            },
            position,
            colour: Colour::WHITE,
        })
    }

    #[test]
    fn move_finishes_after_its_duration() {
        let mut stage = TweenStage::new();
        let id = bar(&mut stage, Vec3::ZERO);

        let transition = stage.move_to(id, Vec3::new(1.0, 0.0, 0.0), Duration::from_millis(500));
        stage.advance(Duration::from_millis(250));

        assert!(!stage.is_finished(transition));
        let midway = stage.element(id).unwrap().position.x;
        assert!(midway > 0.0 && midway < 1.0);

        stage.advance(Duration::from_millis(250));
        assert!(stage.is_finished(transition));
        assert_eq!(stage.element(id).unwrap().position, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn lift_is_relative_to_the_current_height() {
        let mut stage = TweenStage::new();
        let id = bar(&mut stage, Vec3::new(0.0, 0.5, 0.0));

        stage.lift_by(id, 3.0, Duration::from_millis(300));
        stage.advance(Duration::from_secs(1));

        assert_eq!(stage.element(id).unwrap().position, Vec3::new(0.0, 3.5, 0.0));
    }

    #[test]
    fn zero_duration_moves_snap_immediately() {
        let mut stage = TweenStage::new();
        let id = bar(&mut stage, Vec3::ZERO);

        let transition = stage.move_to(id, Vec3::ONE, Duration::ZERO);

        assert!(stage.is_finished(transition));
        assert_eq!(stage.element(id).unwrap().position, Vec3::ONE);
        assert_eq!(stage.active_tweens(), 0);
    }

    #[test]
    fn cancel_leaves_the_element_where_it_is() {
        let mut stage = TweenStage::new();
        let id = bar(&mut stage, Vec3::ZERO);
        let transition = stage.move_to(id, Vec3::new(4.0, 0.0, 0.0), Duration::from_secs(1));
        stage.advance(Duration::from_millis(500));
        let stopped_at = stage.element(id).unwrap().position;

        stage.cancel_transitions(id);
        stage.advance(Duration::from_secs(1));

        assert!(stage.is_finished(transition));
        assert_eq!(stage.element(id).unwrap().position, stopped_at);
    }

    #[test]
    fn a_new_move_replaces_the_previous_one() {
        let mut stage = TweenStage::new();
        let id = bar(&mut stage, Vec3::ZERO);
        let first = stage.move_to(id, Vec3::X, Duration::from_secs(1));

        let second = stage.move_to(id, Vec3::Y, Duration::from_secs(1));

        assert!(stage.is_finished(first));
        assert!(!stage.is_finished(second));
        assert_eq!(stage.active_tweens(), 1);
    }

    #[test]
    fn destroy_drops_the_element_and_its_tweens() {
        let mut stage = TweenStage::new();
        let id = bar(&mut stage, Vec3::ZERO);
        let transition = stage.move_to(id, Vec3::X, Duration::from_secs(1));

        stage.destroy_element(id);

        assert!(stage.is_empty());
        assert!(stage.is_finished(transition));
        assert!(!stage.advance(Duration::from_secs(1)));
    }

    #[test]
    fn unknown_elements_are_ignored() {
        let mut stage = TweenStage::new();

        let transition = stage.move_to(ElementId(42), Vec3::X, Duration::from_secs(1));
        stage.set_colour(ElementId(42), Colour::BLACK);

        assert!(stage.is_finished(transition));
        assert!(stage.is_empty());
    }

    #[test]
    fn place_sets_position_and_heading() {
        let mut stage = TweenStage::new();
        let id = bar(&mut stage, Vec3::ZERO);

        stage.place(id, Vec3::new(1.0, 2.0, 3.0), Some(Vec3::Z));

        let element = stage.element(id).unwrap();
        assert_eq!(element.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(element.heading, Some(Vec3::Z));
    }
}
