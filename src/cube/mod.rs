use crate::prelude::*;

pub mod coord;
mod cubie;
mod surface;

pub use coord::{CrossCoord, CROSS_EDGES};
pub use cubie::{Corner, CubieCube as Cube, Edge, InvariantViolation};
pub use surface::{corner_stickers, edge_stickers, Facelets};

/// Anything a move sequence can be applied to: the full cube, or a
/// reduced coordinate view of it used by the searches.
pub trait CubeLike: Sized + Clone + core::fmt::Debug + Eq {
    fn solved() -> Self;
    fn apply(self, move_: Move) -> Self;

    fn apply_all(self, moves: impl IntoIterator<Item = Move>) -> Self {
        moves.into_iter().fold(self, |cube, m| cube.apply(m))
    }
}

/// Faces in facelet order (U, R, F, D, L, B). The cross is built on `Down`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, enum_iterator::Sequence,
)]
pub enum Face {
    Up,
    Right,
    Front,
    Down,
    Left,
    Back,
}

impl Face {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Back => 'B',
        }
    }

    pub fn from_letter(c: char) -> Option<Face> {
        Some(match c {
            'U' => Face::Up,
            'R' => Face::Right,
            'F' => Face::Front,
            'D' => Face::Down,
            'L' => Face::Left,
            'B' => Face::Back,
            _ => return None,
        })
    }

    /// Sticker colour in the white-bottom, green-front scheme.
    pub fn colour(self) -> &'static str {
        match self {
            Face::Up => "yellow",
            Face::Right => "red",
            Face::Front => "green",
            Face::Down => "white",
            Face::Left => "orange",
            Face::Back => "blue",
        }
    }

    pub fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    pub fn same_axis(a: Face, b: Face) -> bool {
        a == b || a.opposite() == b
    }
}

impl core::fmt::Display for Face {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

pub fn all_faces() -> impl Iterator<Item = Face> {
    enum_iterator::all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_is_solved() {
        assert_eq!(Cube::solved(), Cube::solved());
        assert!(Cube::solved().is_solved());
    }

    #[test]
    fn single_move_is_not_solved() {
        assert_ne!(Cube::solved().apply("F2".parse().unwrap()), Cube::solved());
    }

    #[test]
    fn faces_in_facelet_order() {
        let letters: String = all_faces().map(Face::letter).collect();
        assert_eq!(letters, "URFDLB");
    }

    #[test]
    fn opposite_is_an_involution() {
        for face in all_faces() {
            assert_eq!(face.opposite().opposite(), face);
            assert!(Face::same_axis(face, face.opposite()));
            assert_eq!(Face::from_letter(face.letter()), Some(face));
        }
    }
}
