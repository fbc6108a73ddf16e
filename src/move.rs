use crate::prelude::*;

/// One of the 18 face-turn generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, enum_iterator::Sequence)]
pub enum Direction {
    Single,
    Double,
    Reverse,
}

impl Direction {
    /// Clockwise quarter turns, 1..=3.
    pub fn quarter_turns(self) -> u8 {
        match self {
            Direction::Single => 1,
            Direction::Double => 2,
            Direction::Reverse => 3,
        }
    }

    pub fn from_quarter_turns(turns: u8) -> Option<Direction> {
        match turns % 4 {
            1 => Some(Direction::Single),
            2 => Some(Direction::Double),
            3 => Some(Direction::Reverse),
            _ => None,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Direction::Single => "",
            Direction::Double => "2",
            Direction::Reverse => "'",
        }
    }
}

impl Move {
    pub const fn new(face: Face, direction: Direction) -> Move {
        Move { face, direction }
    }

    pub fn all() -> impl Iterator<Item = Move> {
        all_faces().flat_map(|face| {
            enum_iterator::all::<Direction>().map(move |direction| Move { face, direction })
        })
    }

    /// Parses a whitespace-separated sequence of the 18 generator tokens.
    pub fn parse_sequence(s: &str) -> Result<Vec<Move>, SolveError> {
        s.split_whitespace().map(|s| s.parse()).collect()
    }

    /// Dense index in `0..18`, face-major, matching `Move::all()`.
    pub fn index(self) -> usize {
        self.face.index() * 3 + self.direction as usize
    }

    pub fn reverse(self) -> Move {
        let direction = match self.direction {
            Direction::Single => Direction::Reverse,
            Direction::Reverse => Direction::Single,
            Direction::Double => Direction::Double,
        };
        Move { direction, ..self }
    }

    /// Whether `self` is worth trying directly after `previous` in a search.
    /// Same-face pairs always collapse; opposite faces commute, so only one
    /// ordering of them is explored.
    pub fn could_follow(&self, previous: &Move) -> bool {
        if self.face == previous.face {
            return false;
        }
        !(Face::same_axis(self.face, previous.face) && self.face < previous.face)
    }
}

impl core::str::FromStr for Move {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Move, SolveError> {
        let invalid = || SolveError::InvalidMoveToken {
            token: s.to_string(),
        };

        let mut chars = s.chars();
        let face = chars.next().and_then(Face::from_letter).ok_or_else(invalid)?;

        let direction = match chars.next() {
            None => Direction::Single,
            Some('\'') => Direction::Reverse,
            Some('2') => Direction::Double,
            Some(_) => return Err(invalid()),
        };

        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(Move { face, direction })
    }
}

impl core::fmt::Display for Move {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}{}", self.face, self.direction.suffix())
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Move {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Move {
        use rand::Rng;

        let all = Move::all().collect::<Vec<_>>();
        all[g.gen_range(0, all.len())]
    }
}
