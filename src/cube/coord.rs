use crate::prelude::*;

use std::collections::VecDeque;

/// Positions of the four D-layer edges, one coordinate per edge in
/// `0..24`: `2 * slot + flip`. This is all the cross search needs to know
/// about a cube.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CrossCoord([u8; 4]);

pub const CROSS_EDGES: [Edge; 4] = [Edge::Dr, Edge::Df, Edge::Dl, Edge::Db];

const EDGE_COORDS: usize = 24;

impl From<&Cube> for CrossCoord {
    fn from(cube: &Cube) -> Self {
        CrossCoord(CROSS_EDGES.map(|piece| {
            let (slot, flip) = cube.locate_edge(piece);
            edge_coord(slot, flip)
        }))
    }
}

impl super::CubeLike for CrossCoord {
    fn solved() -> Self {
        CrossCoord(CROSS_EDGES.map(|e| edge_coord(e, 0)))
    }

    fn apply(self, move_: Move) -> Self {
        CrossCoord(self.0.map(|c| TABLES.transition.get(c, move_)))
    }
}

impl CrossCoord {
    pub fn init_tables() {
        lazy_static::initialize(&TABLES);
    }

    pub fn is_solved(&self) -> bool {
        *self == Self::solved()
    }

    /// The most moves any single cross edge needs to get home. Never more
    /// than the length of a real cross solution.
    pub fn lower_bound(&self) -> u8 {
        self.0
            .iter()
            .zip(&TABLES.distance)
            .map(|(&c, distance)| distance[c as usize])
            .max()
            .unwrap_or(0)
    }
}

fn edge_coord(slot: Edge, flip: u8) -> u8 {
    2 * slot.index() as u8 + flip
}

lazy_static::lazy_static! {
    static ref TABLES: CrossTables = CrossTables::init();
}

struct CrossTables {
    transition: TransitionTable,
    distance: [[u8; EDGE_COORDS]; 4],
}

impl CrossTables {
    fn init() -> Self {
        let mut transition = TransitionTable::default();
        transition.populate_with("edge_position", |cube| {
            let (slot, flip) = cube.locate_edge(Edge::Ur);
            edge_coord(slot, flip)
        });

        let distance = CROSS_EDGES.map(|e| transition.distances_from(edge_coord(e, 0)));

        CrossTables {
            transition,
            distance,
        }
    }
}

/// Where a single edge coordinate goes under each move. The same table
/// serves every edge, since where an edge goes depends only on where it is.
struct TransitionTable([[Option<u8>; 18]; EDGE_COORDS]);

impl Default for TransitionTable {
    fn default() -> Self {
        TransitionTable([[None; 18]; EDGE_COORDS])
    }
}

impl TransitionTable {
    fn populate_with(&mut self, name: &str, f: impl Fn(&Cube) -> u8) {
        let start = std::time::Instant::now();
        log::info!("Populating transition table {}", name);

        let mut to_expand = VecDeque::new();
        to_expand.push_back(Cube::solved());

        while let Some(from) = to_expand.pop_front() {
            for m in Move::all() {
                let to = from.apply(m);

                if self.insert(f(&from), m, f(&to)) {
                    to_expand.push_back(to);
                }
            }
        }

        assert!(
            self.0.iter().flatten().all(Option::is_some),
            "transition table {} has unreachable entries",
            name
        );
        log::info!(
            "Finished populating transition table {}, took {:?}",
            name,
            start.elapsed()
        );
    }

    fn get(&self, from: u8, move_: Move) -> u8 {
        self.0[from as usize][move_.index()].unwrap_or(from)
    }

    fn insert(&mut self, from: u8, move_: Move, to: u8) -> bool {
        let entry = &mut self.0[from as usize][move_.index()];
        match entry {
            None => {
                *entry = Some(to);
                true
            }
            Some(existing) => {
                assert_eq!(*existing, to);
                false
            }
        }
    }

    /// Breadth-first move distance from `home` to every coordinate.
    fn distances_from(&self, home: u8) -> [u8; EDGE_COORDS] {
        let mut distance = [u8::MAX; EDGE_COORDS];
        distance[home as usize] = 0;

        let mut frontier = VecDeque::from([home]);
        while let Some(from) = frontier.pop_front() {
            for m in Move::all() {
                let to = self.get(from, m);
                if distance[to as usize] == u8::MAX {
                    distance[to as usize] = distance[from as usize] + 1;
                    frontier.push_back(to);
                }
            }
        }
        distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_cube_has_solved_coord() {
        let coord = CrossCoord::from(&Cube::solved());
        assert!(coord.is_solved());
        assert_eq!(coord.lower_bound(), 0);
    }

    #[test]
    fn u_turns_leave_the_cross_alone() {
        for moves in ["U", "U2 U'", "U R U' R' U2"] {
            assert!(CrossCoord::from(&cube_with_moves(moves)).is_solved(), "{}", moves);
        }
    }

    #[test]
    fn side_turns_break_the_cross() {
        for moves in ["F", "R U R' U' F"] {
            assert!(!CrossCoord::from(&cube_with_moves(moves)).is_solved(), "{}", moves);
        }
    }

    #[test]
    fn single_turn_bound_is_one() {
        for m in Move::all() {
            let coord = CrossCoord::solved().apply(m);
            if m.face == Face::Up {
                assert_eq!(coord.lower_bound(), 0);
            } else {
                assert_eq!(coord.lower_bound(), 1, "after {}", m);
            }
        }
    }

    #[test]
    fn every_edge_is_at_most_three_moves_from_home() {
        for distances in &TABLES.distance {
            assert!(distances.iter().all(|&d| d <= 3));
            assert_eq!(distances.iter().filter(|&&d| d == 0).count(), 1);
        }
    }

    #[quickcheck]
    fn tracks_the_full_cube(moves: Vec<Move>) -> bool {
        let cube = Cube::solved().apply_all(moves.clone());
        CrossCoord::solved().apply_all(moves) == CrossCoord::from(&cube)
    }
}
