use crate::prelude::*;

use std::collections::HashMap;

use super::{case_state, compile};

/// The four first-two-layer slots, named by their middle-layer edge.
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
#[serde(rename_all = "UPPERCASE")]
pub enum Slot {
    Fr,
    Fl,
    Bl,
    Br,
}

impl Slot {
    pub fn all() -> impl Iterator<Item = Slot> {
        enum_iterator::all()
    }

    pub fn corner(self) -> Corner {
        match self {
            Slot::Fr => Corner::Dfr,
            Slot::Fl => Corner::Dlf,
            Slot::Bl => Corner::Dbl,
            Slot::Br => Corner::Drb,
        }
    }

    pub fn edge(self) -> Edge {
        match self {
            Slot::Fr => Edge::Fr,
            Slot::Fl => Edge::Fl,
            Slot::Bl => Edge::Bl,
            Slot::Br => Edge::Br,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Slot::Fr => "FR",
            Slot::Fl => "FL",
            Slot::Bl => "BL",
            Slot::Br => "BR",
        }
    }

    /// Rotation that brings this slot to the front-right, where the case
    /// algorithms are written.
    fn frame(self) -> &'static str {
        match self {
            Slot::Fr => "",
            Slot::Fl => "y'",
            Slot::Bl => "y2",
            Slot::Br => "y",
        }
    }

    pub fn holding_corner(corner: Corner) -> Option<Slot> {
        Slot::all().find(|s| s.corner() == corner)
    }

    pub fn holding_edge(edge: Edge) -> Option<Slot> {
        Slot::all().find(|s| s.edge() == edge)
    }

    pub fn is_solved(self, cube: &Cube) -> bool {
        cube.corner_solved(self.corner()) && cube.edge_solved(self.edge())
    }

    /// `R U R'` seen from this slot: lifts whatever it holds into the U
    /// layer without touching the cross or the other slots.
    pub fn extraction(self) -> &'static Algorithm {
        &EXTRACTIONS[self as usize]
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Where a slot's corner and edge are, with their twist and flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairConfig {
    pub corner: Corner,
    pub twist: u8,
    pub edge: Edge,
    pub flip: u8,
}

impl PairConfig {
    pub fn of(cube: &Cube, slot: Slot) -> PairConfig {
        let (corner, twist) = cube.locate_corner(slot.corner());
        let (edge, flip) = cube.locate_edge(slot.edge());
        PairConfig {
            corner,
            twist,
            edge,
            flip,
        }
    }

    /// Corner and edge sit side by side with matching stickers, so they can
    /// be inserted as one block.
    pub fn is_paired(&self, slot: Slot) -> bool {
        let corner = corner_stickers(self.corner, slot.corner(), self.twist);
        edge_stickers(self.edge, slot.edge(), self.flip)
            .iter()
            .all(|sticker| corner.contains(sticker))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct F2lCaseId(u8);

impl std::fmt::Display for F2lCaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "F2L {}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum F2lGroup {
    BothOnTop,
    CornerInSlot,
    EdgeInSlot,
    BothInSlot,
}

impl F2lGroup {
    fn of(config: &PairConfig, slot: Slot) -> F2lGroup {
        match (config.corner == slot.corner(), config.edge == slot.edge()) {
            (false, false) => F2lGroup::BothOnTop,
            (true, false) => F2lGroup::CornerInSlot,
            (false, true) => F2lGroup::EdgeInSlot,
            (true, true) => F2lGroup::BothInSlot,
        }
    }
}

#[derive(Debug)]
pub struct F2lCase {
    pub id: F2lCaseId,
    pub group: F2lGroup,
    pub notation: &'static str,
    /// Whether the pair starts already joined.
    pub paired: bool,
    /// Face turns for the front-right slot.
    pub algorithm: Algorithm,
    pub description: String,
}

impl F2lCase {
    pub fn all() -> &'static [F2lCase] {
        &CASES
    }

    pub fn init_tables() {
        lazy_static::initialize(&RECOGNITION);
        lazy_static::initialize(&EXTRACTIONS);
    }

    /// The case matching `config` in `slot`, and its algorithm turned to
    /// face that slot.
    pub fn recognize(
        slot: Slot,
        config: &PairConfig,
    ) -> Option<(&'static F2lCase, &'static Algorithm)> {
        RECOGNITION
            .get(&(slot, *config))
            .map(|(i, algorithm)| (&CASES[*i], algorithm))
    }
}

fn describe(config: &PairConfig, slot: Slot) -> String {
    let corner = match (config.corner == slot.corner(), config.twist) {
        (true, 0) => "corner oriented",
        (false, 0) => "white up",
        (_, 1) => "white twisted clockwise",
        _ => "white twisted counter-clockwise",
    };
    let edge = match config.flip {
        0 => "edge oriented",
        _ => "edge flipped",
    };
    if config.is_paired(slot) {
        format!("paired, {}, {}", corner, edge)
    } else {
        format!("{}, {}", corner, edge)
    }
}

lazy_static::lazy_static! {
    static ref CASES: Vec<F2lCase> = TABLE
        .iter()
        .zip(1..)
        .map(|(&notation, n)| {
            let id = F2lCaseId(n);
            let algorithm = compile("F2L", id, notation);
            let config = PairConfig::of(&case_state(&algorithm), Slot::Fr);
            F2lCase {
                id,
                group: F2lGroup::of(&config, Slot::Fr),
                notation,
                paired: config.is_paired(Slot::Fr),
                description: describe(&config, Slot::Fr),
                algorithm,
            }
        })
        .collect();

    static ref RECOGNITION: HashMap<(Slot, PairConfig), (usize, Algorithm)> = {
        let start = std::time::Instant::now();
        let mut map = HashMap::new();
        for slot in Slot::all() {
            for (i, case) in CASES.iter().enumerate() {
                let notation = format!("{} {}", slot.frame(), case.notation);
                let algorithm = compile("F2L", case.id, &notation);
                let config = PairConfig::of(&case_state(&algorithm), slot);
                if map.insert((slot, config), (i, algorithm)).is_some() {
                    panic!("{} repeats a pattern in slot {}", case.id, slot);
                }
            }
        }
        log::info!("Built F2L recognition table, took {:?}", start.elapsed());
        map
    };

    static ref EXTRACTIONS: Vec<Algorithm> = Slot::all()
        .map(|slot| compile("F2L", slot, &format!("{} R U R'", slot.frame())))
        .collect();
}

/// Front-right slot algorithms, grouped by where the pair starts.
const TABLE: [&str; 41] = [
    // both pieces in the U layer
    "F' U F",
    "F' U' F",
    "R U R'",
    "R U' R'",
    "F' U' F R U R'",
    "R U R' F' U' F",
    "F' U F U' F' U' F",
    "F' U F U2 R U R'",
    "F' U' F U2 F' U F",
    "F' U2 F U F' U' F",
    "F' U2 F U' F' U F",
    "F' U2 F U' R U R'",
    "F' U2 F U2 F' U F",
    "R U R' U2 R U' R'",
    "R U' R' U F' U' F",
    "R U' R' U R U R'",
    "R U' R' U' R U R'",
    "R U' R' U2 F' U' F",
    "R U2 R' U F' U' F",
    "R U2 R' U R U' R'",
    "R U2 R' U' R U R'",
    "R U2 R' U2 R U' R'",
    "R U R' F' U F R U R'",
    "R U R' F' U2 F R U R'",
    // corner in the slot
    "F' U F R U R'",
    "F' U2 F R U2 R'",
    "R U' R' F' U' F",
    "R U2 R' F' U2 F",
    "F' U F U R U' R'",
    "R U R' U' F' U' F",
    // edge in the slot
    "F' U2 F R U R'",
    "F' U' F U R U' R'",
    "R U R' U2 R U R'",
    "R U' R' U' F' U' F",
    "R U' R' U2 R U' R'",
    "R U' R' U F' U' F R U R'",
    // both in the slot
    "F' U F R U' R' U2 R U R'",
    "R U' R' U2 R U R' F' U' F",
    "F' U F U' R U2 R' U2 R U' R'",
    "R U' R' U R U2 R' U R U' R'",
    "R U' R' U' R U R' U2 R U' R'",
];
