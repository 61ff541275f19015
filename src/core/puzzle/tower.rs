use crate::core::puzzle::moves::{Move, Peg};
use thiserror::Error;

/// Disk identifier; `DiskId(0)` is the largest disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiskId(pub usize);

impl DiskId {
    #[must_use]
    pub fn is_smaller_than(self, other: Self) -> bool {
        self.0 > other.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TowerError {
    #[error("no disk to take from the {0} peg")]
    EmptyPeg(Peg),
    #[error("disk {} cannot rest on smaller disk {} on the {peg} peg", disk.0, below.0)]
    LargerOnSmaller { disk: DiskId, below: DiskId, peg: Peg },
}

/// Three stacks of disks, bottom first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TowerState {
    pegs: [Vec<DiskId>; 3],
    disk_count: usize,
}

impl TowerState {
    /// Every disk stacked on `start`, largest at the bottom.
    #[must_use]
    pub fn new(disk_count: usize, start: Peg) -> Self {
        let mut pegs: [Vec<DiskId>; 3] = Default::default();
        pegs[start.index()] = (0..disk_count).map(DiskId).collect();

        Self { pegs, disk_count }
    }

    #[must_use]
    pub fn disk_count(&self) -> usize {
        self.disk_count
    }

    #[must_use]
    pub fn stack(&self, peg: Peg) -> &[DiskId] {
        &self.pegs[peg.index()]
    }

    #[must_use]
    pub fn top(&self, peg: Peg) -> Option<DiskId> {
        self.pegs[peg.index()].last().copied()
    }

    #[must_use]
    pub fn height(&self, peg: Peg) -> usize {
        self.pegs[peg.index()].len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }

    /// Moves the top disk of `from` onto `to`, refusing illegal moves
    /// without changing anything.
    pub fn transfer(&mut self, from: Peg, to: Peg) -> Result<DiskId, TowerError> {
        let disk = self.top(from).ok_or(TowerError::EmptyPeg(from))?;

        if let Some(below) = self.top(to) {
            if from != to && !disk.is_smaller_than(below) {
                return Err(TowerError::LargerOnSmaller {
                    disk,
                    below,
                    peg: to,
                });
            }
        }

        self.pegs[from.index()].pop();
        self.pegs[to.index()].push(disk);

        Ok(disk)
    }

    /// Every stack has its largest disk at the bottom.
    #[must_use]
    pub fn is_well_ordered(&self) -> bool {
        self.pegs
            .iter()
            .all(|stack| stack.windows(2).all(|pair| pair[1].is_smaller_than(pair[0])))
    }

    #[must_use]
    pub fn is_solved_on(&self, peg: Peg) -> bool {
        self.height(peg) == self.disk_count && self.is_well_ordered()
    }
}

/// Replays `moves` from a full `start` peg, failing on the first illegal one.
pub fn replay_moves(
    disk_count: usize,
    start: Peg,
    moves: &[Move],
) -> Result<TowerState, TowerError> {
    let mut tower = TowerState::new(disk_count, start);

    for mv in moves {
        tower.transfer(mv.from, mv.to)?;
    }

    Ok(tower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::puzzle::moves::compute_moves;

    #[test]
    fn new_tower_stacks_every_disk_on_start() {
        let tower = TowerState::new(4, Peg::Left);

        assert_eq!(tower.height(Peg::Left), 4);
        assert_eq!(tower.top(Peg::Left), Some(DiskId(3)));
        assert_eq!(tower.total(), 4);
        assert!(tower.is_well_ordered());
    }

    #[test]
    fn transfer_refuses_larger_on_smaller() {
        let mut tower = TowerState::new(2, Peg::Left);
        tower.transfer(Peg::Left, Peg::Middle).unwrap();

        let error = tower.transfer(Peg::Left, Peg::Middle).unwrap_err();

        assert_eq!(
            error,
            TowerError::LargerOnSmaller {
                disk: DiskId(0),
                below: DiskId(1),
                peg: Peg::Middle
            }
        );
        assert_eq!(tower.height(Peg::Left), 1);
        assert!(tower.is_well_ordered());
    }

    #[test]
    fn transfer_from_empty_peg_fails() {
        let mut tower = TowerState::new(1, Peg::Left);

        assert_eq!(
            tower.transfer(Peg::Right, Peg::Left),
            Err(TowerError::EmptyPeg(Peg::Right))
        );
    }

    #[test]
    fn computed_moves_are_always_legal_and_solve_the_puzzle() {
        for disks in 1..=8 {
            let moves = compute_moves(disks, Peg::Left, Peg::Right, Peg::Middle);
            let mut tower = TowerState::new(disks, Peg::Left);

            for mv in &moves {
                tower.transfer(mv.from, mv.to).unwrap();
                assert!(tower.is_well_ordered());
                assert_eq!(tower.total(), disks);
            }

            assert!(tower.is_solved_on(Peg::Right), "{disks} disks");
        }
    }

    #[test]
    fn replay_reports_the_first_illegal_move() {
        let moves = [
            Move {
                from: Peg::Left,
                to: Peg::Right,
            },
            Move {
                from: Peg::Left,
                to: Peg::Right,
            },
        ];

        assert!(matches!(
            replay_moves(3, Peg::Left, &moves),
            Err(TowerError::LargerOnSmaller { .. })
        ));
    }
}
