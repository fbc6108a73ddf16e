use crate::prelude::*;

/// Iterative-deepening depth-first search over any `CubeLike`, bounded by
/// `max_depth` and pruned by an optimistic `lower_bound` on the moves still
/// needed. Returns a shortest sequence reaching `is_goal`.
pub struct BoundedSearch<C, G, H> {
    is_goal: G,
    lower_bound: H,
    nodes: u64,
    _cube: core::marker::PhantomData<C>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    pub moves: Algorithm,
    pub nodes: u64,
}

impl<C, G, H> BoundedSearch<C, G, H>
where
    C: CubeLike,
    G: Fn(&C) -> bool,
    H: Fn(&C) -> u8,
{
    pub fn new(is_goal: G, lower_bound: H) -> Self {
        BoundedSearch {
            is_goal,
            lower_bound,
            nodes: 0,
            _cube: core::marker::PhantomData,
        }
    }

    pub fn run(mut self, start: &C, max_depth: u8) -> Option<Found> {
        let mut stack = Vec::new();
        for depth in 0..=max_depth {
            if self.find_solution(depth, start, &mut stack) {
                return Some(Found {
                    moves: stack.into_iter().collect(),
                    nodes: self.nodes,
                });
            }
            log::trace!("no solution at depth {} after {} nodes", depth, self.nodes);
        }
        None
    }

    fn find_solution(&mut self, remaining_moves: u8, cube: &C, stack: &mut Vec<Move>) -> bool {
        self.nodes += 1;

        if (self.lower_bound)(cube) > remaining_moves {
            return false;
        }
        if remaining_moves == 0 {
            return (self.is_goal)(cube);
        }

        let last_move = stack.last().copied();
        for move_ in Move::all() {
            if let Some(last) = last_move {
                if !move_.could_follow(&last) {
                    continue;
                }
            }

            stack.push(move_);
            if self.find_solution(remaining_moves - 1, &cube.clone().apply(move_), stack) {
                return true;
            }
            stack.pop();
        }
        false
    }
}

/// Bounded search with no pruning beyond the depth limit.
pub fn iddfs<C: CubeLike>(
    start: &C,
    max_depth: u8,
    is_goal: impl Fn(&C) -> bool,
) -> Option<Found> {
    BoundedSearch::new(is_goal, |_: &C| 0).run(start, max_depth)
}
