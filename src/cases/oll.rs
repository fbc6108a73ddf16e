use crate::prelude::*;

use std::collections::HashMap;

use super::{case_state, compile};

/// OLL case number, 1 to 57.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct OllCaseId(u8);

impl OllCaseId {
    pub fn number(self) -> u8 {
        self.0
    }

    pub fn case(self) -> Option<&'static OllCase> {
        (self.0 as usize).checked_sub(1).and_then(|i| CASES.get(i))
    }
}

impl std::fmt::Display for OllCaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "OLL {}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OllGroup {
    Dot,
    Ocll,
    TShape,
    Square,
    CShape,
    WShape,
    CornersOriented,
    PShape,
    IShape,
    Fish,
    KnightMove,
    Awkward,
    LShape,
    Lightning,
}

impl OllGroup {
    pub fn label(self) -> &'static str {
        match self {
            OllGroup::Dot => "dot",
            OllGroup::Ocll => "OCLL",
            OllGroup::TShape => "T-shape",
            OllGroup::Square => "square",
            OllGroup::CShape => "C-shape",
            OllGroup::WShape => "W-shape",
            OllGroup::CornersOriented => "corners oriented",
            OllGroup::PShape => "P-shape",
            OllGroup::IShape => "I-shape",
            OllGroup::Fish => "fish",
            OllGroup::KnightMove => "knight move",
            OllGroup::Awkward => "awkward",
            OllGroup::LShape => "L-shape",
            OllGroup::Lightning => "lightning bolt",
        }
    }
}

#[derive(Debug)]
pub struct OllCase {
    pub id: OllCaseId,
    pub group: OllGroup,
    pub notation: &'static str,
    pub algorithm: Algorithm,
}

/// Orientation of the four U-layer corners and edges, read slot by slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OllSignature {
    corners: [u8; 4],
    edges: [u8; 4],
}

impl OllSignature {
    pub fn of(cube: &Cube) -> OllSignature {
        OllSignature {
            corners: Corner::TOP.map(|c| cube.corner_at(c).1),
            edges: Edge::TOP.map(|e| cube.edge_at(e).1),
        }
    }

    pub fn is_oriented(&self) -> bool {
        self.corners == [0; 4] && self.edges == [0; 4]
    }
}

impl OllCase {
    pub fn all() -> &'static [OllCase] {
        &CASES
    }

    pub fn init_tables() {
        lazy_static::initialize(&RECOGNITION);
    }

    /// The case whose pattern is exactly `signature`, with no U turn.
    pub fn recognize(signature: &OllSignature) -> Option<&'static OllCase> {
        RECOGNITION.get(signature).map(|&i| &CASES[i])
    }

    /// Common name where the case has one, otherwise its group.
    pub fn name(&self) -> &'static str {
        match self.id.0 {
            21 => "H",
            22 => "Pi",
            23 => "Headlights",
            24 => "Chameleon",
            25 => "Bowtie",
            26 => "Anti-Sune",
            27 => "Sune",
            _ => self.group.label(),
        }
    }

    pub fn description(&self) -> String {
        format!("{} ({})", self.id, self.name())
    }
}

lazy_static::lazy_static! {
    static ref CASES: Vec<OllCase> = TABLE
        .iter()
        .zip(1..)
        .map(|(&(group, notation), n)| {
            let id = OllCaseId(n);
            OllCase { id, group, notation, algorithm: compile("OLL", id, notation) }
        })
        .collect();

    static ref RECOGNITION: HashMap<OllSignature, usize> = {
        let start = std::time::Instant::now();
        let mut map = HashMap::new();
        for (i, case) in CASES.iter().enumerate() {
            let signature = OllSignature::of(&case_state(&case.algorithm));
            if let Some(other) = map.insert(signature, i) {
                panic!("{} and {} share a pattern", CASES[other].id, case.id);
            }
        }
        log::info!("Built OLL recognition table, took {:?}", start.elapsed());
        map
    };
}

const TABLE: [(OllGroup, &str); 57] = {
    use OllGroup::*;
    [
        (Dot, "R U2 R2 F R F' U2 R' F R F'"),
        (Dot, "F R U R' U' F' f R U R' U' f'"),
        (Dot, "f R U R' U' f' U' F R U R' U' F'"),
        (Dot, "f R U R' U' f' U F R U R' U' F'"),
        (Square, "r' U2 R U R' U r"),
        (Square, "r U2 R' U' R U' r'"),
        (Lightning, "r U R' U R U2 r'"),
        (Lightning, "r' U' R U' R' U2 r"),
        (Fish, "R U R' U' R' F R2 U R' U' F'"),
        (Fish, "R U R' U R' F R F' R U2 R'"),
        (Lightning, "r U R' U R' F R F' R U2 r'"),
        (Lightning, "M' R' U' R U' R' U2 R U' R r'"),
        (KnightMove, "F U R U' R2 F' R U R U' R'"),
        (KnightMove, "R' F R U R' F' R F U' F'"),
        (KnightMove, "r' U' r R' U' R U r' U r"),
        (KnightMove, "r U r' R U R' U' r U' r'"),
        (Dot, "R U R' U R' F R F' U2 R' F R F'"),
        (Dot, "r U R' U R U2 r2 U' R U' R' U2 r"),
        (Dot, "r' R U R U R' U' M' R' F R F'"),
        (Dot, "r U R' U' M2 U R U' R' U' M'"),
        (Ocll, "R U2 R' U' R U R' U' R U' R'"),
        (Ocll, "R U2 R2 U' R2 U' R2 U2 R"),
        (Ocll, "R2 D' R U2 R' D R U2 R"),
        (Ocll, "r U R' U' r' F R F'"),
        (Ocll, "F' r U R' U' r' F R"),
        (Ocll, "R U2 R' U' R U' R'"),
        (Ocll, "R U R' U R U2 R'"),
        (CornersOriented, "r U R' U' M U R U' R'"),
        (Awkward, "R U R' U' R U' R' F' U' F R U R'"),
        (Awkward, "F R' F R2 U' R' U' R U R' F2"),
        (PShape, "R' U' F U R U' R' F' R"),
        (PShape, "L U F' U' L' U L F L'"),
        (TShape, "R U R' U' R' F R F'"),
        (CShape, "R U R2 U' R' F R U R U' F'"),
        (Fish, "R U2 R2 F R F' R U2 R'"),
        (WShape, "L' U' L U' L' U L U L F' L' F"),
        (Fish, "F R' F' R U R U' R'"),
        (WShape, "R U R' U R U' R' U' R' F R F'"),
        (Lightning, "L F' L' U' L U F U' L'"),
        (Lightning, "R' F R U R' U' F' U R"),
        (Awkward, "R U R' U R U2 R' F R U R' U' F'"),
        (Awkward, "R' U' R U' R' U2 R F R U R' U' F'"),
        (PShape, "F' U' L' U L F"),
        (PShape, "F U R U' R' F'"),
        (TShape, "F R U R' U' F'"),
        (CShape, "R' U' R' F R F' U R"),
        (LShape, "R' U' R' F R F' R' F R F' U R"),
        (LShape, "F R U R' U' R U R' U' F'"),
        (LShape, "r U' r2 U r2 U r2 U' r"),
        (LShape, "r' U r2 U' r2 U' r2 U r'"),
        (IShape, "F U R U' R' U R U' R' F'"),
        (IShape, "R U R' U R U' B U' B' R'"),
        (LShape, "r' U' R U' R' U R U' R' U2 r"),
        (LShape, "r U R' U R U' R' U R U2 r'"),
        (IShape, "R' F R U R U' R2 F' R2 U' R' U R U R'"),
        (IShape, "r' U' r U' R' U R U' R' U R r' U r"),
        (CornersOriented, "R U R' U' M' U R U' r'"),
    ]
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifty_seven_cases_in_order() {
        assert_eq!(OllCase::all().len(), 57);
        for (case, n) in OllCase::all().iter().zip(1..) {
            assert_eq!(case.id.number(), n);
        }
    }

    #[test]
    fn algorithms_keep_first_two_layers() {
        for case in OllCase::all() {
            let cube = Cube::solved().apply_all(&case.algorithm);
            assert!(is_f2l_solved(&cube), "{} disturbs F2L", case.id);
        }
    }

    #[test]
    fn each_case_recognises_its_own_pattern() {
        for case in OllCase::all() {
            let signature = OllSignature::of(&case_state(&case.algorithm));
            assert!(!signature.is_oriented());
            assert_eq!(OllCase::recognize(&signature).map(|c| c.id), Some(case.id));
        }
    }

    #[test]
    fn every_orientation_is_a_case_up_to_auf() {
        let mut seen = 0;
        for cube in last_layer_orientation_states() {
            let signature = OllSignature::of(&cube);
            if signature.is_oriented() {
                continue;
            }
            let found = (0..4).any(|k| {
                let turned = cube.apply_all(auf(k));
                OllCase::recognize(&OllSignature::of(&turned)).is_some()
            });
            assert!(found, "no case for {:?}", signature);
            seen += 1;
        }
        assert_eq!(seen, 215);
    }

    #[test]
    fn names() {
        assert_eq!(OllCase::all()[26].description(), "OLL 27 (Sune)");
        assert_eq!(OllCase::all()[44].description(), "OLL 45 (T-shape)");
        assert_eq!(OllCase::all()[0].name(), "dot");
    }
}
