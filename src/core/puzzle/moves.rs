use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Peg {
    Left,
    Middle,
    Right,
}

impl Peg {
    pub const ALL: [Self; 3] = [Self::Left, Self::Middle, Self::Right];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Peg,
    pub to: Peg,
}

/// Optimal move list for transferring `disks` disks from `from` to `to`.
///
/// Always `2^disks - 1` moves long.
#[must_use]
pub fn compute_moves(disks: usize, from: Peg, to: Peg, aux: Peg) -> Vec<Move> {
    let capacity = u32::try_from(disks)
        .ok()
        .and_then(|disks| 1usize.checked_shl(disks))
        .map_or(0, |count| count - 1);
    let mut moves = Vec::with_capacity(capacity);

    push_moves(disks, from, to, aux, &mut moves);
    moves
}

fn push_moves(disks: usize, from: Peg, to: Peg, aux: Peg, moves: &mut Vec<Move>) {
    if disks == 0 {
        return;
    }
    if disks == 1 {
        moves.push(Move { from, to });
        return;
    }

    push_moves(disks - 1, from, aux, to, moves);
    moves.push(Move { from, to });
    push_moves(disks - 1, aux, to, from, moves);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_count_is_two_to_the_n_minus_one() {
        for disks in 0..=10 {
            let moves = compute_moves(disks, Peg::Left, Peg::Right, Peg::Middle);

            assert_eq!(moves.len(), (1 << disks) - 1, "{disks} disks");
        }
    }

    #[test]
    fn single_disk_moves_directly() {
        assert_eq!(
            compute_moves(1, Peg::Left, Peg::Right, Peg::Middle),
            vec![Move {
                from: Peg::Left,
                to: Peg::Right
            }]
        );
    }

    #[test]
    fn two_disks_go_through_the_auxiliary_peg() {
        let moves = compute_moves(2, Peg::Left, Peg::Right, Peg::Middle);

        assert_eq!(
            moves,
            vec![
                Move {
                    from: Peg::Left,
                    to: Peg::Middle
                },
                Move {
                    from: Peg::Left,
                    to: Peg::Right
                },
                Move {
                    from: Peg::Middle,
                    to: Peg::Right
                },
            ]
        );
    }

    #[test]
    fn peg_indices_match_all() {
        for (index, peg) in Peg::ALL.iter().enumerate() {
            assert_eq!(peg.index(), index);
        }
    }
}
