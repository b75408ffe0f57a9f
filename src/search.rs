use pathfinding::directed::astar::astar;
use pathfinding::directed::dijkstra::dijkstra;

use crate::heuristic::Heuristic;
use crate::layout::Layout;
use crate::moves::{MoveBuffer, MoveGen};
use crate::state::State;

/// Which engine orders the frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Best-first on accumulated cost plus the lower-bound estimate. The
    /// estimate never overshoots for room depths up to 4, so the answer stays
    /// optimal while the deep instances get much faster.
    #[default]
    AStar,
    /// Plain uniform-cost search. Slower, but optimal no matter what the
    /// estimate does, so it doubles as the reference in tests.
    Dijkstra,
}

pub struct Solver {
    layout: Layout,
    strategy: Strategy,
}

impl Default for Solver {
    fn default() -> Solver {
        Solver::new(Layout::default(), Strategy::default())
    }
}

impl Solver {
    pub fn new(layout: Layout, strategy: Strategy) -> Solver {
        Solver { layout, strategy }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Searches for the cheapest move sequence that sorts `start`.
    ///
    /// Returns how many states were expanded, how many successors were
    /// generated, and — when a goal is reachable — one cheapest path with its
    /// total cost. `None` means the frontier ran dry: the instance is
    /// unsolvable, which is an answer, not an error.
    pub fn solve(&self, start: &State) -> (usize, usize, Option<(Vec<State>, u32)>) {
        start.assert_well_formed();

        let move_gen = MoveGen::new(&self.layout);
        let mut visited = 0;
        let mut generated = 0;

        let successors = |state: &State| {
            let mut buffer = MoveBuffer::new();

            move_gen.successors(state, &mut buffer);

            visited += 1;
            generated += buffer.len();

            buffer.into_iter()
        };

        let result = match self.strategy {
            Strategy::Dijkstra => dijkstra(start, successors, |state: &State| state.is_goal()),
            Strategy::AStar => {
                let heuristic = Heuristic::new(&self.layout);

                astar(
                    start,
                    successors,
                    |state: &State| heuristic.estimate(state),
                    |state: &State| state.is_goal(),
                )
            }
        };

        (visited, generated, result)
    }
}
