use crate::core::data::element::{ElementDescriptor, ElementId, ElementShape, TransitionId};
use crate::core::ports::render_adapter::RenderAdapter;
use crate::core::puzzle::layout::TowerLayout;
use crate::core::puzzle::moves::Peg;
use crate::core::puzzle::tower::{DiskId, TowerState};
use std::time::Duration;
use tracing::warn;

/// Side effects of one disk move. The moving disk stays on top of `from`
/// until `Transfer` commits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleAction {
    Raise { from: Peg, duration: Duration },
    Carry { from: Peg, to: Peg, duration: Duration },
    Lower { from: Peg, to: Peg, duration: Duration },
    Transfer { from: Peg, to: Peg },
}

/// Tower state plus the element of every disk and of the static scenery.
#[derive(Debug, Clone)]
pub struct TowerBoard {
    tower: TowerState,
    start: Peg,
    disks: Vec<ElementId>,
    scenery: Vec<ElementId>,
    layout: TowerLayout,
}

impl TowerBoard {
    #[must_use]
    pub fn new(disk_count: usize, start: Peg, layout: TowerLayout) -> Self {
        Self {
            tower: TowerState::new(disk_count, start),
            start,
            disks: Vec::new(),
            scenery: Vec::new(),
            layout,
        }
    }

    #[must_use]
    pub fn tower(&self) -> &TowerState {
        &self.tower
    }

    #[must_use]
    pub fn layout(&self) -> &TowerLayout {
        &self.layout
    }

    #[must_use]
    pub fn disk_element(&self, disk: DiskId) -> Option<ElementId> {
        self.disks.get(disk.0).copied()
    }

    #[must_use]
    pub fn has_elements(&self) -> bool {
        !self.disks.is_empty() || !self.scenery.is_empty()
    }

    /// Number of elements this board creates when built.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.tower.disk_count() + 2 * Peg::ALL.len()
    }

    /// Creates the bases, poles and one element per disk at its current level.
    pub fn build(&mut self, adapter: &mut dyn RenderAdapter) {
        if self.has_elements() {
            return;
        }

        let disk_count = self.tower.disk_count();
        let base_radius = self.layout.disk_radius(0, disk_count) + self.layout.radius_step;

        for peg in Peg::ALL {
            self.scenery.push(adapter.create_element(ElementDescriptor {
                value: 0,
                shape: ElementShape::Disk {
                    radius: base_radius,
                    thickness: self.layout.base_thickness,
                },
                position: self.layout.base_position(peg),
                colour: self.layout.base_colour,
            }));
            self.scenery.push(adapter.create_element(ElementDescriptor {
                value: 0,
                shape: ElementShape::Bar {
                    width: self.layout.disk_thickness / 2.0,
                    height: self.layout.pole_height,
                },
                position: self.layout.pole_position(peg),
                colour: self.layout.pole_colour,
            }));
        }

        let mut disks = vec![ElementId(0); disk_count];
        for peg in Peg::ALL {
            for (level, &disk) in self.tower.stack(peg).iter().enumerate() {
                disks[disk.0] = adapter.create_element(ElementDescriptor {
                    value: i32::try_from(disk.0).unwrap_or(i32::MAX),
                    shape: ElementShape::Disk {
                        radius: self.layout.disk_radius(disk.0, disk_count),
                        thickness: self.layout.disk_thickness,
                    },
                    position: self.layout.rest_position(peg, level),
                    colour: self.layout.disk_colour(disk.0),
                });
            }
        }
        self.disks = disks;
    }

    pub fn teardown(&mut self, adapter: &mut dyn RenderAdapter) {
        for id in self.disks.drain(..).chain(self.scenery.drain(..)) {
            adapter.destroy_element(id);
        }
    }

    pub fn halt(&self, adapter: &mut dyn RenderAdapter) {
        for &id in &self.disks {
            adapter.cancel_transitions(id);
        }
    }

    /// Every disk back on the start peg. Elements are left alone.
    pub fn restore(&mut self) {
        self.tower = TowerState::new(self.tower.disk_count(), self.start);
    }

    pub fn apply(
        &mut self,
        action: PuzzleAction,
        adapter: &mut dyn RenderAdapter,
        started: &mut Vec<TransitionId>,
    ) {
        match action {
            PuzzleAction::Raise { from, duration } => {
                if let Some(id) = self.moving_element(from) {
                    let target = self.layout.carry_position(from);
                    started.push(adapter.move_to(id, target, duration));
                }
            }
            PuzzleAction::Carry { from, to, duration } => {
                if let Some(id) = self.moving_element(from) {
                    let target = self.layout.carry_position(to);
                    started.push(adapter.move_to(id, target, duration));
                }
            }
            PuzzleAction::Lower { from, to, duration } => {
                if let Some(id) = self.moving_element(from) {
                    let target = self.layout.rest_position(to, self.tower.height(to));
                    started.push(adapter.move_to(id, target, duration));
                }
            }
            PuzzleAction::Transfer { from, to } => {
                if let Err(error) = self.tower.transfer(from, to) {
                    warn!(%error, "illegal disk move skipped");
                }
            }
        }
    }

    fn moving_element(&self, from: Peg) -> Option<ElementId> {
        self.tower.top(from).and_then(|disk| self.disk_element(disk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ports::mock_render_adapter::MockRenderAdapter;

    #[test]
    fn build_places_disks_largest_at_the_bottom() {
        let mut adapter = MockRenderAdapter::default();
        let mut board = TowerBoard::new(3, Peg::Left, TowerLayout::default());

        board.build(&mut adapter);

        assert_eq!(adapter.live_elements().len(), board.element_count());
        let bottom = adapter.position_of(board.disk_element(DiskId(0)).unwrap()).unwrap();
        let top = adapter.position_of(board.disk_element(DiskId(2)).unwrap()).unwrap();
        assert!(top.y > bottom.y);
        assert_eq!(bottom.x, board.layout().peg_x(Peg::Left));
    }

    #[test]
    fn lowering_targets_the_destination_stack_height() {
        let mut adapter = MockRenderAdapter::default();
        let mut board = TowerBoard::new(2, Peg::Left, TowerLayout::default());
        board.build(&mut adapter);
        let mut started = Vec::new();
        board.apply(
            PuzzleAction::Transfer {
                from: Peg::Left,
                to: Peg::Right,
            },
            &mut adapter,
            &mut started,
        );

        board.apply(
            PuzzleAction::Lower {
                from: Peg::Left,
                to: Peg::Right,
                duration: Duration::from_millis(300),
            },
            &mut adapter,
            &mut started,
        );

        let largest = board.disk_element(DiskId(0)).unwrap();
        assert_eq!(
            adapter.position_of(largest),
            Some(board.layout().rest_position(Peg::Right, 1))
        );
        assert_eq!(started.len(), 1);
    }

    #[test]
    fn illegal_transfer_leaves_the_tower_untouched() {
        let mut adapter = MockRenderAdapter::default();
        let mut board = TowerBoard::new(2, Peg::Left, TowerLayout::default());
        let mut started = Vec::new();

        board.apply(
            PuzzleAction::Transfer {
                from: Peg::Middle,
                to: Peg::Right,
            },
            &mut adapter,
            &mut started,
        );

        assert_eq!(board.tower(), &TowerState::new(2, Peg::Left));
    }

    #[test]
    fn teardown_destroys_every_element() {
        let mut adapter = MockRenderAdapter::default();
        let mut board = TowerBoard::new(4, Peg::Left, TowerLayout::default());
        board.build(&mut adapter);

        board.teardown(&mut adapter);

        assert!(adapter.live_elements().is_empty());
        assert!(!board.has_elements());
    }
}
