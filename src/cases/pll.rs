use crate::prelude::*;

use std::collections::HashMap;

use super::{auf, case_state, compile};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    enum_iterator::Sequence,
    serde::Serialize,
)]
pub enum PllCase {
    Aa,
    Ab,
    E,
    F,
    Ga,
    Gb,
    Gc,
    Gd,
    H,
    Ja,
    Jb,
    Na,
    Nb,
    Ra,
    Rb,
    T,
    Ua,
    Ub,
    V,
    Y,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PllGroup {
    CornersOnly,
    EdgesOnly,
    CornersAndEdges,
}

/// Which pieces sit in the four U-layer corner and edge slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PllSignature {
    corners: [Corner; 4],
    edges: [Edge; 4],
}

impl PllSignature {
    pub fn of(cube: &Cube) -> PllSignature {
        PllSignature {
            corners: Corner::TOP.map(|c| cube.corner_at(c).0),
            edges: Edge::TOP.map(|e| cube.edge_at(e).0),
        }
    }
}

impl PllCase {
    pub fn all() -> impl Iterator<Item = PllCase> {
        enum_iterator::all()
    }

    pub fn init_tables() {
        lazy_static::initialize(&RECOGNITION);
    }

    /// The case matching `signature` with no U turn first, and how many
    /// quarter turns of U finish the cube after its algorithm.
    pub fn recognize(signature: &PllSignature) -> Option<(PllCase, u8)> {
        RECOGNITION.get(signature).copied()
    }

    pub fn name(self) -> String {
        format!("{:?}-perm", self)
    }

    pub fn group(self) -> PllGroup {
        use PllCase::*;

        match self {
            Aa | Ab | E => PllGroup::CornersOnly,
            H | Z | Ua | Ub => PllGroup::EdgesOnly,
            _ => PllGroup::CornersAndEdges,
        }
    }

    pub fn notation(self) -> &'static str {
        use PllCase::*;

        match self {
            Aa => "x R' U R' D2 R U' R' D2 R2 x'",
            Ab => "x R2 D2 R U R' D2 R U' R x'",
            E => "x' R U' R' D R U R' D' R U R' D R U' R' D' x",
            F => "R' U' F' R U R' U' R' F R2 U' R' U' R U R' U R",
            Ga => "R2 U R' U R' U' R U' R2 U' D R' U R D'",
            Gb => "R' U' R U D' R2 U R' U R U' R U' R2 D",
            Gc => "R2 U' R U' R U R' U R2 U D' R U' R' D",
            Gd => "R U R' U' D R2 U' R U' R' U R' U R2 D'",
            H => "M2 U M2 U2 M2 U M2",
            Ja => "R' U L' U2 R U' R' U2 R L",
            Jb => "R U R' F' R U R' U' R' F R2 U' R'",
            Na => "R U R' U R U R' F' R U R' U' R' F R2 U' R' U2 R U' R'",
            Nb => "R' U R U' R' F' U' F R U R' F R' F' R U' R",
            Ra => "R U' R' U' R U R D R' U' R D' R' U2 R'",
            Rb => "R2 F R U R U' R' F' R U2 R' U2 R",
            T => "R U R' U' R' F R2 U' R' U' R U R' F'",
            Ua => "M2 U M U2 M' U M2",
            Ub => "M2 U' M U2 M' U' M2",
            V => "R' U R' U' y R' F' R2 U' R' U R' F R F",
            Y => "F R U' R' U' R U R' F' R U R' U' R' F R F'",
            Z => "M' U M2 U M2 U M' U2 M2",
        }
    }

    pub fn algorithm(self) -> &'static Algorithm {
        &ALGORITHMS[self as usize]
    }
}

lazy_static::lazy_static! {
    static ref ALGORITHMS: Vec<Algorithm> = PllCase::all()
        .map(|case| compile("PLL", case.name(), case.notation()))
        .collect();

    /// Each case under each closing U turn. A pattern reached by several
    /// keeps the first case that produced it.
    static ref RECOGNITION: HashMap<PllSignature, (PllCase, u8)> = {
        let start = std::time::Instant::now();
        let mut map = HashMap::new();
        for case in PllCase::all() {
            for post in 0..4 {
                let mut full = case.algorithm().clone();
                full.extend(auf(post));
                map.entry(PllSignature::of(&case_state(&full)))
                    .or_insert((case, post));
            }
        }
        log::info!("Built PLL recognition table, took {:?}", start.elapsed());
        map
    };
}
