use crate::core::data::colour::Colour;
use crate::core::data::element::{ElementDescriptor, ElementId, TransitionId};
use crate::core::ports::render_adapter::RenderAdapter;
use glam::Vec3;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum AdapterCall {
    Create(ElementId),
    Destroy(ElementId),
    SetColour(ElementId, Colour),
    MoveTo(ElementId, Vec3, Duration),
    LiftBy(ElementId, f32, Duration),
    Place(ElementId, Vec3),
    Cancel(ElementId),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockElement {
    pub descriptor: ElementDescriptor,
    pub position: Vec3,
    pub colour: Colour,
    pub heading: Option<Vec3>,
}

#[derive(Default)]
struct MockState {
    next_element: u64,
    next_transition: u64,
    elements: BTreeMap<ElementId, MockElement>,
    pending: HashMap<TransitionId, ElementId>,
    calls: Vec<AdapterCall>,
}

/// Records every call and jumps elements straight to their targets.
///
/// By default transitions finish the moment they start; a holding adapter
/// keeps them pending until `finish` or `finish_all`.
#[derive(Default)]
pub struct MockRenderAdapter {
    hold: bool,
    state: Mutex<MockState>,
}

impl MockRenderAdapter {
    pub fn holding_transitions() -> Self {
        Self {
            hold: true,
            state: Mutex::new(MockState::default()),
        }
    }

    pub fn finish(&self, transition: TransitionId) {
        self.state.lock().unwrap().pending.remove(&transition);
    }

    pub fn finish_all(&self) {
        self.state.lock().unwrap().pending.clear();
    }

    pub fn pending_count(&self) -> usize {
        self.state.lock().unwrap().pending.len()
    }

    pub fn calls(&self) -> Vec<AdapterCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn take_calls(&self) -> Vec<AdapterCall> {
        std::mem::take(&mut self.state.lock().unwrap().calls)
    }

    pub fn live_elements(&self) -> Vec<ElementId> {
        self.state.lock().unwrap().elements.keys().copied().collect()
    }

    pub fn element(&self, id: ElementId) -> Option<MockElement> {
        self.state.lock().unwrap().elements.get(&id).copied()
    }

    pub fn colour_of(&self, id: ElementId) -> Option<Colour> {
        self.element(id).map(|element| element.colour)
    }

    pub fn position_of(&self, id: ElementId) -> Option<Vec3> {
        self.element(id).map(|element| element.position)
    }

    fn start_transition(&mut self, id: ElementId, target: Vec3) -> TransitionId {
        let hold = self.hold;
        let state = self.state.get_mut().unwrap();
        state.next_transition += 1;
        let transition = TransitionId(state.next_transition);

        if let Some(element) = state.elements.get_mut(&id) {
            element.position = target;
        }
        if hold {
            state.pending.insert(transition, id);
        }

        transition
    }
}

impl RenderAdapter for MockRenderAdapter {
    fn create_element(&mut self, descriptor: ElementDescriptor) -> ElementId {
        let state = self.state.get_mut().unwrap();
        state.next_element += 1;
        let id = ElementId(state.next_element);

        state.elements.insert(
            id,
            MockElement {
                descriptor,
                position: descriptor.position,
                colour: descriptor.colour,
                heading: None,
            },
        );
        state.calls.push(AdapterCall::Create(id));

        id
    }

    fn destroy_element(&mut self, id: ElementId) {
        let state = self.state.get_mut().unwrap();
        state.elements.remove(&id);
        state.pending.retain(|_, element| *element != id);
        state.calls.push(AdapterCall::Destroy(id));
    }

    fn set_colour(&mut self, id: ElementId, colour: Colour) {
        let state = self.state.get_mut().unwrap();
        if let Some(element) = state.elements.get_mut(&id) {
            element.colour = colour;
        }
        state.calls.push(AdapterCall::SetColour(id, colour));
    }

    fn move_to(&mut self, id: ElementId, target: Vec3, duration: Duration) -> TransitionId {
        self.state
            .get_mut()
            .unwrap()
            .calls
            .push(AdapterCall::MoveTo(id, target, duration));
        self.start_transition(id, target)
    }

    fn lift_by(&mut self, id: ElementId, delta_y: f32, duration: Duration) -> TransitionId {
        let target = self
            .position_of(id)
            .map_or(Vec3::ZERO, |position| position + Vec3::Y * delta_y);
        self.state
            .get_mut()
            .unwrap()
            .calls
            .push(AdapterCall::LiftBy(id, delta_y, duration));
        self.start_transition(id, target)
    }

    fn place(&mut self, id: ElementId, position: Vec3, heading: Option<Vec3>) {
        let state = self.state.get_mut().unwrap();
        if let Some(element) = state.elements.get_mut(&id) {
            element.position = position;
            element.heading = heading;
        }
        state.calls.push(AdapterCall::Place(id, position));
    }

    fn is_finished(&self, transition: TransitionId) -> bool {
        !self.state.lock().unwrap().pending.contains_key(&transition)
    }

    fn cancel_transitions(&mut self, id: ElementId) {
        let state = self.state.get_mut().unwrap();
        state.pending.retain(|_, element| *element != id);
        state.calls.push(AdapterCall::Cancel(id));
    }
}
