use crate::prelude::*;

use thiserror::Error;

/// Corner slots, and the corner pieces that belong in them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, enum_iterator::Sequence,
)]
pub enum Corner {
    Urf,
    Ufl,
    Ulb,
    Ubr,
    Dfr,
    Dlf,
    Dbl,
    Drb,
}

/// Edge slots, and the edge pieces that belong in them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, enum_iterator::Sequence,
)]
pub enum Edge {
    Ur,
    Uf,
    Ul,
    Ub,
    Dr,
    Df,
    Dl,
    Db,
    Fr,
    Fl,
    Bl,
    Br,
}

impl Corner {
    /// The U-layer slots, in slot order.
    pub const TOP: [Corner; 4] = [Corner::Urf, Corner::Ufl, Corner::Ulb, Corner::Ubr];

    pub fn all() -> impl Iterator<Item = Corner> {
        enum_iterator::all()
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl Edge {
    pub const TOP: [Edge; 4] = [Edge::Ur, Edge::Uf, Edge::Ul, Edge::Ub];

    pub fn all() -> impl Iterator<Item = Edge> {
        enum_iterator::all()
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Cubie-level cube state. `cp[i]` is the corner piece sitting in slot `i`
/// and `co[i]` its twist (0..3, 0 when its U/D sticker faces U or D);
/// likewise `ep`/`eo` for edges with flips in 0..2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubieCube {
    cp: [Corner; 8],
    co: [u8; 8],
    ep: [Edge; 12],
    eo: [u8; 12],
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("corner slots do not hold a permutation of the eight corners")]
    CornerPermutation,
    #[error("edge slots do not hold a permutation of the twelve edges")]
    EdgePermutation,
    #[error("orientation value out of range")]
    OrientationRange,
    #[error("corner twist sums to {0} (mod 3)")]
    CornerTwist(u8),
    #[error("edge flip sums to {0} (mod 2)")]
    EdgeFlip(u8),
    #[error("corner and edge permutation parities differ")]
    Parity,
}

impl super::CubeLike for CubieCube {
    fn solved() -> CubieCube {
        SOLVED
    }

    fn apply(self, move_: Move) -> CubieCube {
        self.multiply(&MOVE_TABLE[move_.index()])
    }
}

const SOLVED: CubieCube = {
    use Corner::*;
    use Edge::*;

    CubieCube {
        cp: [Urf, Ufl, Ulb, Ubr, Dfr, Dlf, Dbl, Drb],
        co: [0; 8],
        ep: [Ur, Uf, Ul, Ub, Dr, Df, Dl, Db, Fr, Fl, Bl, Br],
        eo: [0; 12],
    }
};

impl CubieCube {
    /// Builds a state from raw parts, refusing anything a legal cube could
    /// not reach.
    pub fn from_parts(
        cp: [Corner; 8],
        co: [u8; 8],
        ep: [Edge; 12],
        eo: [u8; 12],
    ) -> Result<CubieCube, InvariantViolation> {
        let cube = CubieCube { cp, co, ep, eo };
        cube.check_invariants()?;
        Ok(cube)
    }

    pub fn is_solved(&self) -> bool {
        *self == SOLVED
    }

    /// Raw permutation and orientation arrays, the inverse of `from_parts`.
    pub fn parts(&self) -> ([Corner; 8], [u8; 8], [Edge; 12], [u8; 12]) {
        (self.cp, self.co, self.ep, self.eo)
    }

    /// The piece in corner slot `slot` and its twist.
    pub fn corner_at(&self, slot: Corner) -> (Corner, u8) {
        (self.cp[slot.index()], self.co[slot.index()])
    }

    /// The piece in edge slot `slot` and its flip.
    pub fn edge_at(&self, slot: Edge) -> (Edge, u8) {
        (self.ep[slot.index()], self.eo[slot.index()])
    }

    /// Where corner piece `piece` currently sits, and its twist there.
    pub fn locate_corner(&self, piece: Corner) -> (Corner, u8) {
        Corner::all()
            .find(|slot| self.cp[slot.index()] == piece)
            .map(|slot| (slot, self.co[slot.index()]))
            .unwrap_or((piece, 0))
    }

    /// Where edge piece `piece` currently sits, and its flip there.
    pub fn locate_edge(&self, piece: Edge) -> (Edge, u8) {
        Edge::all()
            .find(|slot| self.ep[slot.index()] == piece)
            .map(|slot| (slot, self.eo[slot.index()]))
            .unwrap_or((piece, 0))
    }

    pub fn corner_solved(&self, c: Corner) -> bool {
        self.corner_at(c) == (c, 0)
    }

    pub fn edge_solved(&self, e: Edge) -> bool {
        self.edge_at(e) == (e, 0)
    }

    /// `self` followed by `other`, both read as transformations of the
    /// solved cube.
    pub fn multiply(&self, other: &CubieCube) -> CubieCube {
        let mut out = *self;
        for i in 0..8 {
            let from = other.cp[i].index();
            out.cp[i] = self.cp[from];
            out.co[i] = (self.co[from] + other.co[i]) % 3;
        }
        for i in 0..12 {
            let from = other.ep[i].index();
            out.ep[i] = self.ep[from];
            out.eo[i] = (self.eo[from] + other.eo[i]) % 2;
        }
        out
    }

    pub fn inverse(&self) -> CubieCube {
        let mut out = *self;
        for i in 0..8 {
            let piece = self.cp[i].index();
            out.cp[piece] = SOLVED.cp[i];
            out.co[piece] = (3 - self.co[i]) % 3;
        }
        for i in 0..12 {
            let piece = self.ep[i].index();
            out.ep[piece] = SOLVED.ep[i];
            out.eo[piece] = self.eo[i];
        }
        out
    }

    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if !is_permutation(&self.cp.map(Corner::index)) {
            return Err(InvariantViolation::CornerPermutation);
        }
        if !is_permutation(&self.ep.map(Edge::index)) {
            return Err(InvariantViolation::EdgePermutation);
        }
        if self.co.iter().any(|&o| o > 2) || self.eo.iter().any(|&o| o > 1) {
            return Err(InvariantViolation::OrientationRange);
        }

        let twist = self.co.iter().sum::<u8>() % 3;
        if twist != 0 {
            return Err(InvariantViolation::CornerTwist(twist));
        }
        let flip = self.eo.iter().sum::<u8>() % 2;
        if flip != 0 {
            return Err(InvariantViolation::EdgeFlip(flip));
        }

        if parity(&self.cp.map(Corner::index)) != parity(&self.ep.map(Edge::index)) {
            return Err(InvariantViolation::Parity);
        }
        Ok(())
    }
}

fn is_permutation(p: &[usize]) -> bool {
    let mut seen = [false; 12];
    p.iter().all(|&i| i < p.len() && !std::mem::replace(&mut seen[i], true))
}

/// Permutation parity, `true` for odd.
fn parity(p: &[usize]) -> bool {
    let inversions = (0..p.len())
        .flat_map(|i| (i + 1..p.len()).map(move |j| (i, j)))
        .filter(|&(i, j)| p[i] > p[j])
        .count();
    inversions % 2 == 1
}

lazy_static::lazy_static! {
    static ref MOVE_TABLE: [CubieCube; 18] = build_move_table();
}

fn build_move_table() -> [CubieCube; 18] {
    let mut table = [SOLVED; 18];
    for face in all_faces() {
        let quarter = quarter_turn(face);
        let mut current = quarter;
        for direction in enum_iterator::all::<Direction>() {
            table[Move::new(face, direction).index()] = current;
            current = current.multiply(&quarter);
        }
    }
    table
}

/// Clockwise quarter turn of each face, as the state it produces from solved.
fn quarter_turn(face: Face) -> CubieCube {
    use Corner::*;
    use Edge::*;

    match face {
        Face::Up => CubieCube {
            cp: [Ubr, Urf, Ufl, Ulb, Dfr, Dlf, Dbl, Drb],
            co: [0, 0, 0, 0, 0, 0, 0, 0],
            ep: [Ub, Ur, Uf, Ul, Dr, Df, Dl, Db, Fr, Fl, Bl, Br],
            eo: [0; 12],
        },
        Face::Right => CubieCube {
            cp: [Dfr, Ufl, Ulb, Urf, Drb, Dlf, Dbl, Ubr],
            co: [2, 0, 0, 1, 1, 0, 0, 2],
            ep: [Fr, Uf, Ul, Ub, Br, Df, Dl, Db, Dr, Fl, Bl, Ur],
            eo: [0; 12],
        },
        Face::Front => CubieCube {
            cp: [Ufl, Dlf, Ulb, Ubr, Urf, Dfr, Dbl, Drb],
            co: [1, 2, 0, 0, 2, 1, 0, 0],
            ep: [Ur, Fl, Ul, Ub, Dr, Fr, Dl, Db, Uf, Df, Bl, Br],
            eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
        },
        Face::Down => CubieCube {
            cp: [Urf, Ufl, Ulb, Ubr, Dlf, Dbl, Drb, Dfr],
            co: [0, 0, 0, 0, 0, 0, 0, 0],
            ep: [Ur, Uf, Ul, Ub, Df, Dl, Db, Dr, Fr, Fl, Bl, Br],
            eo: [0; 12],
        },
        Face::Left => CubieCube {
            cp: [Urf, Ulb, Dbl, Ubr, Dfr, Ufl, Dlf, Drb],
            co: [0, 1, 2, 0, 0, 2, 1, 0],
            ep: [Ur, Uf, Bl, Ub, Dr, Df, Fl, Db, Fr, Ul, Dl, Br],
            eo: [0; 12],
        },
        Face::Back => CubieCube {
            cp: [Urf, Ufl, Ubr, Drb, Dfr, Dlf, Ulb, Dbl],
            co: [0, 0, 1, 2, 0, 0, 2, 1],
            ep: [Ur, Uf, Ul, Br, Dr, Df, Dl, Bl, Fr, Fl, Ub, Db],
            eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
        },
    }
}
