use smallvec::SmallVec;

use crate::layout::Layout;
use crate::state::{State, ROOM_COUNT};

/// Successor buffer. 32 inline slots cover the worst case of a depth-4
/// instance without spilling for typical states.
pub type MoveBuffer = SmallVec<[(State, u32); 32]>;

/// Enumerates every legal move out of a state, paired with its cost.
pub struct MoveGen<'l> {
    layout: &'l Layout,
}

impl<'l> MoveGen<'l> {
    pub fn new(layout: &'l Layout) -> MoveGen<'l> {
        MoveGen { layout }
    }

    /// All legal (successor, cost) pairs from `state`, in a fixed order:
    /// room exits left to right, then corridor entries left to right. The
    /// order carries no meaning, it just keeps traces reproducible.
    pub fn successors(&self, state: &State, out: &mut MoveBuffer) {
        out.clear();
        self.room_exits(state, out);
        self.room_entries(state, out);
    }

    fn room_exits(&self, state: &State, out: &mut MoveBuffer) {
        for room in 0..ROOM_COUNT {
            let column = state.room(room);

            // only the shallowest occupied slot is unburied
            let Some((depth, token)) = column
                .iter()
                .enumerate()
                .find_map(|(depth, slot)| slot.map(|token| (depth, token)))
            else {
                continue;
            };

            // leaving is only useful for a stranger, or for a token sitting
            // on top of one; a settled token must never be displaced
            let settled = token.home_room() == room
                && column[depth + 1..]
                    .iter()
                    .flatten()
                    .all(|deeper| deeper.home_room() == room);

            if settled {
                continue;
            }

            let entrance = self.layout.entrance(room);

            for target in self.layout.rest_columns() {
                if !corridor_clear(state, entrance, target) {
                    continue;
                }

                let steps = (depth + 1 + entrance.abs_diff(target)) as u32;

                out.push((
                    state.with_room_to_corridor(room, depth, target),
                    steps * self.layout.unit_cost(token),
                ));
            }
        }
    }

    fn room_entries(&self, state: &State, out: &mut MoveBuffer) {
        for (column, token) in state
            .corridor()
            .iter()
            .enumerate()
            .filter_map(|(column, slot)| slot.map(|token| (column, token)))
        {
            let room = token.home_room();

            // monotonic fill: a room only ever accepts its own type
            let foreign_free = state
                .room(room)
                .iter()
                .flatten()
                .all(|occupant| occupant.home_room() == room);

            if !foreign_free {
                continue;
            }

            let Some(depth) = state.room(room).iter().rposition(Option::is_none) else {
                continue;
            };

            let entrance = self.layout.entrance(room);

            if !corridor_clear(state, column, entrance) {
                continue;
            }

            let steps = (column.abs_diff(entrance) + depth + 1) as u32;

            out.push((
                state.with_corridor_to_room(column, room, depth),
                steps * self.layout.unit_cost(token),
            ));
        }
    }
}

/// True when every corridor column on the straight path from `from` to `to`
/// is empty, the destination included and the origin excluded.
fn corridor_clear(state: &State, from: usize, to: usize) -> bool {
    let span = if from < to { from + 1..=to } else { to..=from - 1 };

    state.corridor()[span].iter().all(Option::is_none)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse::parse_diagram;
    use crate::state::{RoomColumn, Slot, Token, CORRIDOR_LEN};

    const SCRAMBLED: &str = "
#############
#...........#
###B#C#B#D###
  #A#D#C#A#
  #########
";

    fn successors_of(state: &State) -> Vec<(State, u32)> {
        let layout = Layout::default();
        let mut buffer = MoveBuffer::new();

        MoveGen::new(&layout).successors(state, &mut buffer);
        buffer.into_vec()
    }

    fn sparse_state(
        corridor_tokens: &[(usize, Token)],
        rooms: [RoomSpec; ROOM_COUNT],
    ) -> State {
        let mut corridor: [Slot; CORRIDOR_LEN] = [None; CORRIDOR_LEN];

        for (column, token) in corridor_tokens {
            corridor[*column] = Some(*token);
        }

        State::new(
            corridor,
            rooms.map(|spec| spec.iter().copied().collect::<RoomColumn>()),
        )
    }

    type RoomSpec = [Slot; 2];

    const EMPTY: RoomSpec = [None, None];

    #[test]
    fn enumeration_is_deterministic() {
        let state = parse_diagram(SCRAMBLED).unwrap();

        assert_eq!(successors_of(&state), successors_of(&state));
    }

    #[test]
    fn buried_tokens_never_move() {
        // D is under C in room 1; every successor must leave it there
        let state = sparse_state(&[], [EMPTY, [Some(Token::C), Some(Token::D)], EMPTY, EMPTY]);
        let successors = successors_of(&state);

        assert!(!successors.is_empty());

        for (next, _) in &successors {
            assert_eq!(next.room(1)[1], Some(Token::D));
        }
    }

    #[test]
    fn rooms_with_foreigners_accept_nobody() {
        // A waits in the corridor while a B squats at the bottom of room 0
        let state = sparse_state(
            &[(0, Token::A)],
            [[None, Some(Token::B)], EMPTY, EMPTY, EMPTY],
        );

        for (next, _) in successors_of(&state) {
            assert_eq!(next.corridor()[0], Some(Token::A));
            assert!(next.room(0).iter().all(|slot| *slot != Some(Token::A)));
        }
    }

    #[test]
    fn settled_tokens_are_never_displaced() {
        let state = sparse_state(&[], [[Some(Token::A), Some(Token::A)], EMPTY, EMPTY, EMPTY]);

        assert!(successors_of(&state).is_empty());
    }

    #[test]
    fn entrance_columns_are_never_destinations() {
        let layout = Layout::default();
        let state = parse_diagram(SCRAMBLED).unwrap();

        for (next, _) in successors_of(&state) {
            for (column, slot) in next.corridor().iter().enumerate() {
                assert!(slot.is_none() || !layout.is_entrance(column));
            }
        }
    }

    #[test]
    fn exit_costs_scale_with_distance_and_depth() {
        let state = parse_diagram(SCRAMBLED).unwrap();
        let successors = successors_of(&state);

        // B leaves room 0 (depth 0, entrance 2) for column 0: 3 steps at 10
        let expected = state.with_room_to_corridor(0, 0, 0);
        let cost = successors
            .iter()
            .find_map(|(next, cost)| (*next == expected).then_some(*cost));

        assert_eq!(cost, Some(30));
    }

    #[test]
    fn entry_targets_the_deepest_empty_slot() {
        let state = sparse_state(&[(0, Token::A)], [EMPTY, EMPTY, EMPTY, EMPTY]);
        let successors = successors_of(&state);

        // 2 corridor steps plus a 2-deep descent, at unit cost 1
        let expected = state.with_corridor_to_room(0, 0, 1);

        assert_eq!(successors, vec![(expected, 4)]);
    }

    #[test]
    fn blocked_corridor_paths_are_rejected() {
        // B at column 1 blocks A's way to room 0; B itself can reach room 1
        let state = sparse_state(&[(0, Token::A), (1, Token::B)], [EMPTY; ROOM_COUNT]);

        let successors = successors_of(&state);

        assert!(!successors.is_empty());

        for (next, _) in &successors {
            assert_eq!(next.corridor()[0], Some(Token::A));
        }
    }
}
