use crate::layout::Layout;
use crate::state::{State, ROOM_COUNT};

/// Lower-bound estimate of the cost still needed to sort a state, used to
/// order the A* frontier. Each token contributes independently:
///
/// - in the corridor: the horizontal walk to its home entrance (the descent
///   is deliberately left out, so corridor congestion can only make the true
///   cost larger, never the estimate);
/// - home and not covering a stranger: nothing;
/// - home but covering a stranger: one round trip out of its slot and back;
/// - in the wrong room: the climb out plus the walk between entrances.
pub struct Heuristic<'l> {
    layout: &'l Layout,
}

impl<'l> Heuristic<'l> {
    pub fn new(layout: &'l Layout) -> Heuristic<'l> {
        Heuristic { layout }
    }

    pub fn estimate(&self, state: &State) -> u32 {
        let mut total = 0;

        for (column, token) in state
            .corridor()
            .iter()
            .enumerate()
            .filter_map(|(column, slot)| slot.map(|token| (column, token)))
        {
            let home = self.layout.entrance(token.home_room());

            total += column.abs_diff(home) as u32 * self.layout.unit_cost(token);
        }

        for room in 0..ROOM_COUNT {
            let entrance = self.layout.entrance(room);
            let slots = state.room(room);

            for (depth, token) in slots
                .iter()
                .enumerate()
                .filter_map(|(depth, slot)| slot.map(|token| (depth, token)))
            {
                let unit = self.layout.unit_cost(token);

                if token.home_room() == room {
                    let covers_stranger = slots[depth + 1..]
                        .iter()
                        .flatten()
                        .any(|deeper| deeper.home_room() != room);

                    if covers_stranger {
                        total += 2 * (depth as u32 + 1) * unit;
                    }
                } else {
                    let home = self.layout.entrance(token.home_room());

                    total += (depth + 1 + entrance.abs_diff(home)) as u32 * unit;
                }
            }
        }

        total
    }
}
