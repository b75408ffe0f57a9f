use std::fmt::{self, Display, Write};

use itertools::Itertools;
use smallvec::SmallVec;

pub const CORRIDOR_LEN: usize = 11;
pub const ROOM_COUNT: usize = 4;

/// One movable token. Its discriminant doubles as the index of its home room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    A,
    B,
    C,
    D,
}

impl Token {
    pub const ALL: [Token; ROOM_COUNT] = [Token::A, Token::B, Token::C, Token::D];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn home_room(self) -> usize {
        self as usize
    }

    pub fn from_char(c: char) -> Option<Token> {
        match c {
            'A' => Some(Token::A),
            'B' => Some(Token::B),
            'C' => Some(Token::C),
            'D' => Some(Token::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

pub type Slot = Option<Token>;

/// One room column, slot 0 nearest the corridor. The depth is a runtime
/// property of the instance; 4 covers the common cases inline.
pub type RoomColumn = SmallVec<[Slot; 4]>;

/// Full occupancy of the corridor and the four rooms.
///
/// The derived `Hash`/`Eq` over the slot codes is the canonical key: two
/// physically identical arrangements are one search node no matter which move
/// sequence produced them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct State {
    corridor: [Slot; CORRIDOR_LEN],
    rooms: [RoomColumn; ROOM_COUNT],
}

impl State {
    pub fn new(corridor: [Slot; CORRIDOR_LEN], rooms: [RoomColumn; ROOM_COUNT]) -> State {
        let depth = rooms[0].len();

        assert!(
            depth > 0 && rooms.iter().all(|room| room.len() == depth),
            "rooms must share one non-zero depth"
        );

        State { corridor, rooms }
    }

    pub fn depth(&self) -> usize {
        self.rooms[0].len()
    }

    pub fn corridor(&self) -> &[Slot; CORRIDOR_LEN] {
        &self.corridor
    }

    pub fn room(&self, room: usize) -> &[Slot] {
        &self.rooms[room]
    }

    /// True iff every room is its home letter repeated depth times.
    pub fn is_goal(&self) -> bool {
        self.rooms.iter().enumerate().all(|(index, room)| {
            let home = Token::ALL[index];

            room.iter().all(|slot| *slot == Some(home))
        })
    }

    pub fn token_counts(&self) -> [usize; ROOM_COUNT] {
        let mut counts = [0; ROOM_COUNT];

        for token in self
            .corridor
            .iter()
            .chain(self.rooms.iter().flat_map(|room| room.iter()))
            .flatten()
        {
            counts[token.index()] += 1;
        }

        counts
    }

    /// Tokens are conserved: every type must appear exactly depth times.
    /// A violation means the caller handed over a malformed instance, and
    /// searching it would silently produce a wrong cost.
    pub fn assert_well_formed(&self) {
        let depth = self.depth();
        let counts = self.token_counts();

        assert!(
            counts == [depth; ROOM_COUNT],
            "token counts {counts:?} do not match room depth {depth}"
        );
    }

    pub(crate) fn with_room_to_corridor(&self, room: usize, depth: usize, column: usize) -> State {
        let mut next = self.clone();

        next.corridor[column] = next.rooms[room][depth].take();
        next
    }

    pub(crate) fn with_corridor_to_room(&self, column: usize, room: usize, depth: usize) -> State {
        let mut next = self.clone();

        next.rooms[room][depth] = next.corridor[column].take();
        next
    }
}

fn slot_char(slot: Slot) -> char {
    slot.map_or('.', Token::as_char)
}

impl Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..CORRIDOR_LEN + 2 {
            f.write_char('#')?;
        }

        f.write_str("\n#")?;

        for slot in &self.corridor {
            f.write_char(slot_char(*slot))?;
        }

        f.write_str("#\n")?;

        for depth in 0..self.depth() {
            let row = self
                .rooms
                .iter()
                .map(|room| slot_char(room[depth]))
                .join("#");

            if depth == 0 {
                writeln!(f, "###{row}###")?;
            } else {
                writeln!(f, "  #{row}#")?;
            }
        }

        write!(f, "  {}", "#".repeat(2 * ROOM_COUNT + 1))
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use smallvec::smallvec;

    use super::*;
    use crate::parse::parse_diagram;

    const SCRAMBLED: &str = "
#############
#...........#
###B#C#B#D###
  #A#D#C#A#
  #########
";

    const SORTED: &str = "
#############
#...........#
###A#B#C#D###
  #A#B#C#D#
  #########
";

    #[test]
    fn goal_predicate() {
        assert!(!parse_diagram(SCRAMBLED).unwrap().is_goal());
        assert!(parse_diagram(SORTED).unwrap().is_goal());
    }

    #[test]
    fn goal_requires_home_letters_in_every_room() {
        // two rooms swapped wholesale: counts are fine, placement is not
        let swapped = "
#############
#...........#
###B#A#C#D###
  #B#A#C#D#
  #########
";

        assert!(!parse_diagram(swapped).unwrap().is_goal());
    }

    #[test]
    fn display_round_trips_the_diagram() {
        let state = parse_diagram(SCRAMBLED).unwrap();

        assert_eq!(state.to_string(), SCRAMBLED.trim());
    }

    #[test]
    fn token_counts_match_depth() {
        let state = parse_diagram(SCRAMBLED).unwrap();

        assert_eq!(state.token_counts(), [2, 2, 2, 2]);
        state.assert_well_formed();
    }

    #[test]
    #[should_panic(expected = "token counts")]
    fn malformed_counts_fail_fast() {
        let mut corridor = [None; CORRIDOR_LEN];

        corridor[0] = Some(Token::A);

        let state = State::new(
            corridor,
            [
                smallvec![Some(Token::A)],
                smallvec![Some(Token::B)],
                smallvec![Some(Token::C)],
                smallvec![Some(Token::D)],
            ],
        );

        state.assert_well_formed();
    }

    #[test]
    fn canonical_key_ignores_history() {
        let start = parse_diagram(SCRAMBLED).unwrap();

        // the same two exits in either order end in identical occupancy
        let b_then_d = start
            .with_room_to_corridor(0, 0, 0)
            .with_room_to_corridor(3, 0, 9);
        let d_then_b = start
            .with_room_to_corridor(3, 0, 9)
            .with_room_to_corridor(0, 0, 0);

        assert_eq!(b_then_d, d_then_b);

        let mut keys = HashSet::new();

        assert!(keys.insert(b_then_d));
        assert!(!keys.insert(d_then_b));
        assert!(keys.insert(start));
    }
}
