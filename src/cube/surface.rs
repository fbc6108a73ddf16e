use crate::prelude::*;

/// Sticker view of a cube: 54 facelets in `URFDLB` order, each face read
/// row by row from its top-left as seen from outside the cube. Each facelet
/// holds the face whose centre colour it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facelets([Face; 54]);

/// Facelet indices of each corner slot, U/D sticker first, then clockwise.
const CORNER_FACELETS: [[usize; 3]; 8] = [
    [8, 9, 20],
    [6, 18, 38],
    [0, 36, 47],
    [2, 45, 11],
    [29, 26, 15],
    [27, 44, 24],
    [33, 53, 42],
    [35, 17, 51],
];

const EDGE_FACELETS: [[usize; 2]; 12] = [
    [5, 10],
    [7, 19],
    [3, 37],
    [1, 46],
    [32, 16],
    [28, 25],
    [30, 43],
    [34, 52],
    [23, 12],
    [21, 41],
    [50, 39],
    [48, 14],
];

const CORNER_COLOURS: [[Face; 3]; 8] = {
    use Face::*;
    [
        [Up, Right, Front],
        [Up, Front, Left],
        [Up, Left, Back],
        [Up, Back, Right],
        [Down, Front, Right],
        [Down, Left, Front],
        [Down, Back, Left],
        [Down, Right, Back],
    ]
};

const EDGE_COLOURS: [[Face; 2]; 12] = {
    use Face::*;
    [
        [Up, Right],
        [Up, Front],
        [Up, Left],
        [Up, Back],
        [Down, Right],
        [Down, Front],
        [Down, Left],
        [Down, Back],
        [Front, Right],
        [Front, Left],
        [Back, Left],
        [Back, Right],
    ]
};

/// `(face, colour)` of each sticker of corner `piece` sitting in `slot`
/// with `twist`.
pub fn corner_stickers(slot: Corner, piece: Corner, twist: u8) -> [(Face, Face); 3] {
    std::array::from_fn(|n| {
        (
            CORNER_COLOURS[slot.index()][(n + twist as usize) % 3],
            CORNER_COLOURS[piece.index()][n],
        )
    })
}

pub fn edge_stickers(slot: Edge, piece: Edge, flip: u8) -> [(Face, Face); 2] {
    std::array::from_fn(|n| {
        (
            EDGE_COLOURS[slot.index()][(n + flip as usize) % 2],
            EDGE_COLOURS[piece.index()][n],
        )
    })
}

impl From<&Cube> for Facelets {
    fn from(cube: &Cube) -> Facelets {
        let mut facelets = [Face::Up; 54];
        for face in all_faces() {
            facelets[face.index() * 9 + 4] = face;
        }

        for slot in Corner::all() {
            let (piece, twist) = cube.corner_at(slot);
            for n in 0..3 {
                let at = CORNER_FACELETS[slot.index()][(n + twist as usize) % 3];
                facelets[at] = CORNER_COLOURS[piece.index()][n];
            }
        }
        for slot in Edge::all() {
            let (piece, flip) = cube.edge_at(slot);
            for n in 0..2 {
                let at = EDGE_FACELETS[slot.index()][(n + flip as usize) % 2];
                facelets[at] = EDGE_COLOURS[piece.index()][n];
            }
        }

        Facelets(facelets)
    }
}

impl Facelets {
    pub fn face(&self, face: Face) -> &[Face] {
        &self.0[face.index() * 9..face.index() * 9 + 9]
    }

    /// The 54-character `URFDLB` facelet string.
    pub fn to_facelet_string(&self) -> String {
        self.0.iter().map(|f| f.letter()).collect()
    }

    fn row(&self, face: Face, row: usize) -> String {
        self.face(face)[row * 3..row * 3 + 3]
            .iter()
            .map(|f| f.letter())
            .collect()
    }
}

/// Unfolded net: U on top, then L F R B side by side, then D.
impl std::fmt::Display for Facelets {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in 0..3 {
            writeln!(f, "    {}", self.row(Face::Up, row))?;
        }

        for row in 0..3 {
            for face in [Face::Left, Face::Front, Face::Right, Face::Back] {
                write!(f, "{} ", self.row(face, row))?;
            }
            writeln!(f)?;
        }

        for row in 0..3 {
            writeln!(f, "    {}", self.row(Face::Down, row))?;
        }

        Ok(())
    }
}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", Facelets::from(self))
    }
}
