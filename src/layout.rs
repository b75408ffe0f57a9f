use crate::state::{Token, CORRIDOR_LEN, ROOM_COUNT};

/// Immutable board geometry and cost tables, shared by the move generator and
/// the heuristic. Kept as injected configuration rather than process-wide
/// statics so alternative tables stay possible in tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    entrances: [usize; ROOM_COUNT],
    unit_costs: [u32; ROOM_COUNT],
}

impl Default for Layout {
    fn default() -> Layout {
        Layout {
            entrances: [2, 4, 6, 8],
            unit_costs: [1, 10, 100, 1000],
        }
    }
}

impl Layout {
    pub fn new(entrances: [usize; ROOM_COUNT], unit_costs: [u32; ROOM_COUNT]) -> Layout {
        assert!(
            entrances.iter().all(|column| *column < CORRIDOR_LEN),
            "entrance columns must lie inside the corridor"
        );
        assert!(
            unit_costs.iter().all(|cost| *cost > 0),
            "unit costs must be strictly positive"
        );

        Layout {
            entrances,
            unit_costs,
        }
    }

    /// The corridor column directly above `room`. A transit cell only, never
    /// a resting position.
    pub fn entrance(&self, room: usize) -> usize {
        self.entrances[room]
    }

    pub fn is_entrance(&self, column: usize) -> bool {
        self.entrances.contains(&column)
    }

    /// The corridor columns a token may stop in, left to right.
    pub fn rest_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CORRIDOR_LEN).filter(|column| !self.is_entrance(*column))
    }

    /// Cost of one step for one token of this type.
    pub fn unit_cost(&self, token: Token) -> u32 {
        self.unit_costs[token.index()]
    }
}
