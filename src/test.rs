use crate::prelude::*;

use quickcheck::Arbitrary;

pub fn cube_with_moves(moves: &str) -> Cube {
    Cube::solved().apply_all(Move::parse_sequence(moves).unwrap())
}

/// Up to 30 random face turns.
#[derive(Clone, Debug)]
pub struct Scramble(pub Vec<Move>);

impl Scramble {
    pub fn algorithm(&self) -> Algorithm {
        Algorithm::from(self.0.clone())
    }
}

impl Arbitrary for Scramble {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Scramble {
        use rand::Rng;

        let len = g.gen_range(0, 31);
        Scramble((0..len).map(|_| Move::arbitrary(g)).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Scramble>> {
        Box::new(self.0.shrink().map(Scramble))
    }
}

fn parity(p: &[usize]) -> bool {
    (0..p.len())
        .flat_map(|i| (i + 1..p.len()).map(move |j| (i, j)))
        .filter(|&(i, j)| p[i] > p[j])
        .count()
        % 2
        == 1
}

fn permutations_of_four() -> Vec<[usize; 4]> {
    let mut out = Vec::new();
    for a in 0..4 {
        for b in (0..4).filter(|&b| b != a) {
            for c in (0..4).filter(|&c| c != a && c != b) {
                out.push([a, b, c, 6 - a - b - c]);
            }
        }
    }
    out
}

/// Every orientation of the last layer over a solved F2L: 27 corner
/// twists times 8 edge flips.
pub fn last_layer_orientation_states() -> Vec<Cube> {
    let (cp, _, ep, _) = Cube::solved().parts();
    let mut out = Vec::new();

    for twists in 0..27u8 {
        for flips in 0..8u8 {
            let mut co = [0; 8];
            co[0] = twists % 3;
            co[1] = twists / 3 % 3;
            co[2] = twists / 9;
            co[3] = (6 - co[0] - co[1] - co[2]) % 3;

            let mut eo = [0; 12];
            eo[0] = flips & 1;
            eo[1] = flips >> 1 & 1;
            eo[2] = flips >> 2 & 1;
            eo[3] = (eo[0] + eo[1] + eo[2]) % 2;

            out.push(Cube::from_parts(cp, co, ep, eo).unwrap());
        }
    }
    out
}

/// Every permutation of the last layer with all pieces oriented.
pub fn last_layer_permutation_states() -> Vec<Cube> {
    let (solved_cp, co, solved_ep, eo) = Cube::solved().parts();
    let mut out = Vec::new();

    for corners in permutations_of_four() {
        for edges in permutations_of_four() {
            if parity(&corners) != parity(&edges) {
                continue;
            }
            let mut cp = solved_cp;
            let mut ep = solved_ep;
            for i in 0..4 {
                cp[i] = solved_cp[corners[i]];
                ep[i] = solved_ep[edges[i]];
            }
            out.push(Cube::from_parts(cp, co, ep, eo).unwrap());
        }
    }
    out
}

/// Every placement of `slot`'s corner and edge among the U layer and the
/// slot itself, with the cross and the other slots solved. Twist, flip and
/// parity are balanced with other U-layer pieces.
pub fn f2l_pair_states(slot: Slot) -> Vec<Cube> {
    let (solved_cp, _, solved_ep, _) = Cube::solved().parts();
    let corner_spots = Corner::TOP.iter().copied().chain([slot.corner()]);
    let mut out = Vec::new();

    for corner_at in corner_spots {
        for twist in 0..3 {
            let edge_spots = Edge::TOP.iter().copied().chain([slot.edge()]);
            for edge_at in edge_spots {
                for flip in 0..2 {
                    let (mut cp, mut ep) = (solved_cp, solved_ep);
                    let (mut co, mut eo) = ([0; 8], [0; 12]);
                    let mut swaps = 0;

                    if corner_at != slot.corner() {
                        cp.swap(corner_at.index(), slot.corner().index());
                        swaps += 1;
                    }
                    co[corner_at.index()] = twist;
                    let balance = Corner::TOP.iter().find(|&&c| c != corner_at).unwrap();
                    co[balance.index()] = (3 - twist) % 3;

                    if edge_at != slot.edge() {
                        ep.swap(edge_at.index(), slot.edge().index());
                        swaps += 1;
                    }
                    eo[edge_at.index()] = flip;
                    let others = Edge::TOP
                        .iter()
                        .filter(|&&e| e != edge_at)
                        .map(|e| e.index())
                        .collect::<Vec<_>>();
                    eo[others[0]] = flip;

                    if swaps % 2 == 1 {
                        ep.swap(others[0], others[1]);
                        eo.swap(others[0], others[1]);
                    }

                    out.push(Cube::from_parts(cp, co, ep, eo).unwrap());
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_counts() {
        assert_eq!(last_layer_orientation_states().len(), 216);
        assert_eq!(last_layer_permutation_states().len(), 288);
        for slot in Slot::all() {
            let states = f2l_pair_states(slot);
            assert_eq!(states.len(), 150);
            assert_eq!(states.iter().filter(|c| c.is_solved()).count(), 1);
        }
    }
}
