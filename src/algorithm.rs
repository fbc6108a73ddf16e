use crate::prelude::*;

use smallvec::SmallVec;

/// An ordered sequence of face turns. Concatenation is associative and the
/// empty algorithm is the identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Algorithm(SmallVec<[Move; 24]>);

impl Algorithm {
    pub fn new() -> Algorithm {
        Algorithm::default()
    }

    /// Parses the 18 generator tokens only; anything else is an
    /// `InvalidMoveToken`.
    pub fn parse(s: &str) -> Result<Algorithm, SolveError> {
        s.split_whitespace().map(|t| t.parse()).collect()
    }

    /// Parses standard cubing notation including wide turns (`r`), slice
    /// turns (`M E S`) and whole-cube rotations (`x y z`), rewriting them as
    /// face turns relative to fixed centres. The result is simplified.
    pub fn parse_notation(s: &str) -> Result<Algorithm, SolveError> {
        let mut frame = Frame::identity();
        let mut out = Algorithm::new();

        for token in s.split_whitespace() {
            let invalid = || SolveError::InvalidMoveToken {
                token: token.to_string(),
            };

            let mut chars = token.chars();
            let base = chars.next().ok_or_else(invalid)?;
            let turns = match (chars.next(), chars.next()) {
                (None, _) => 1,
                (Some('2'), None) => 2,
                (Some('\''), None) => 3,
                _ => return Err(invalid()),
            };

            if let Some(face) = Face::from_letter(base) {
                out.push_turns(frame.physical(face), turns);
                continue;
            }

            match notation_token(base).ok_or_else(invalid)? {
                Token::Rotation(axis, sense) => frame.rotate(axis, sense * turns),
                Token::Wide(face, axis, sense) => {
                    out.push_turns(frame.physical(face), turns);
                    frame.rotate(axis, sense * turns);
                }
                Token::Slice(first, second, axis, sense) => {
                    out.push_turns(frame.physical(first), turns);
                    out.push_turns(frame.physical(second), 3 * turns);
                    frame.rotate(axis, sense * turns);
                }
            }
        }

        Ok(out.simplified())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.0.iter().copied()
    }

    pub fn push(&mut self, move_: Move) {
        self.0.push(move_);
    }

    /// `self` followed by `other`.
    pub fn then(mut self, other: &Algorithm) -> Algorithm {
        self.0.extend(other.iter());
        self
    }

    pub fn inverse(&self) -> Algorithm {
        self.0.iter().rev().map(|m| m.reverse()).collect()
    }

    /// Merges runs of turns on the same face; a run that adds up to a full
    /// turn disappears, which can expose a new run to merge.
    pub fn simplified(&self) -> Algorithm {
        let mut out = Algorithm::new();
        for m in self.iter() {
            out.push_turns(m.face, m.direction.quarter_turns());
        }
        out
    }

    fn push_turns(&mut self, face: Face, turns: u8) {
        let mut turns = turns % 4;
        if let Some(last) = self.0.last() {
            if last.face == face {
                turns = (turns + last.direction.quarter_turns()) % 4;
                self.0.pop();
            }
        }
        if let Some(direction) = Direction::from_quarter_turns(turns) {
            self.0.push(Move { face, direction });
        }
    }
}

impl core::str::FromStr for Algorithm {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Algorithm, SolveError> {
        Algorithm::parse(s)
    }
}

impl FromIterator<Move> for Algorithm {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Algorithm {
        Algorithm(iter.into_iter().collect())
    }
}

impl IntoIterator for Algorithm {
    type Item = Move;
    type IntoIter = smallvec::IntoIter<[Move; 24]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = Move;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, Move>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl Extend<Move> for Algorithm {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl serde::Serialize for Algorithm {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<Vec<Move>> for Algorithm {
    fn from(moves: Vec<Move>) -> Algorithm {
        moves.into_iter().collect()
    }
}

impl core::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for (i, m) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", m)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
    Z,
}

enum Token {
    /// Whole-cube rotation; `sense` is 1 or 3 quarter turns per written turn.
    Rotation(Axis, u8),
    /// Wide turn: the opposite face turned the same way, plus a rotation.
    Wide(Face, Axis, u8),
    /// Slice turn: two outer faces plus a rotation.
    Slice(Face, Face, Axis, u8),
}

fn notation_token(c: char) -> Option<Token> {
    use Axis::*;
    use Face::*;

    Some(match c {
        'x' => Token::Rotation(X, 1),
        'y' => Token::Rotation(Y, 1),
        'z' => Token::Rotation(Z, 1),
        'r' => Token::Wide(Left, X, 1),
        'l' => Token::Wide(Right, X, 3),
        'u' => Token::Wide(Down, Y, 1),
        'd' => Token::Wide(Up, Y, 3),
        'f' => Token::Wide(Back, Z, 1),
        'b' => Token::Wide(Front, Z, 3),
        // M follows L, E follows D, S follows F.
        'M' => Token::Slice(Right, Left, X, 3),
        'E' => Token::Slice(Up, Down, Y, 3),
        'S' => Token::Slice(Back, Front, Z, 1),
        _ => return None,
    })
}

/// Which physical face currently sits in each logical position after the
/// rotations seen so far.
struct Frame([Face; 6]);

impl Frame {
    fn identity() -> Frame {
        Frame([
            Face::Up,
            Face::Right,
            Face::Front,
            Face::Down,
            Face::Left,
            Face::Back,
        ])
    }

    fn physical(&self, logical: Face) -> Face {
        self.0[logical.index()]
    }

    fn rotate(&mut self, axis: Axis, turns: u8) {
        for _ in 0..turns % 4 {
            let previous = self.0;
            for face in all_faces() {
                self.0[face.index()] = previous[rotation_source(axis, face).index()];
            }
        }
    }
}

/// The logical face that moves into `target`'s position on one clockwise
/// quarter rotation about `axis`.
fn rotation_source(axis: Axis, target: Face) -> Face {
    use Face::*;

    match (axis, target) {
        (Axis::X, Up) => Front,
        (Axis::X, Back) => Up,
        (Axis::X, Down) => Back,
        (Axis::X, Front) => Down,
        (Axis::Y, Left) => Front,
        (Axis::Y, Back) => Left,
        (Axis::Y, Right) => Back,
        (Axis::Y, Front) => Right,
        (Axis::Z, Right) => Up,
        (Axis::Z, Down) => Right,
        (Axis::Z, Left) => Down,
        (Axis::Z, Up) => Left,
        (_, face) => face,
    }
}
