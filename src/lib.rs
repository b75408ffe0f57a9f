//! Minimum-cost sorting of typed tokens into their home rooms.
//!
//! Four rooms of fixed depth hang off an 11-slot corridor. Each room is home
//! to one token type, and each type pays a different price per step (A = 1,
//! B = 10, C = 100, D = 1000 by default). A token may climb out of a room
//! into any free non-entrance corridor column, and may later descend into its
//! own room, provided no stranger is inside and the corridor path is clear.
//! [`solve`] returns the cheapest total cost that puts every token home, or
//! `None` when no legal sequence exists.

pub mod heuristic;
pub mod layout;
pub mod moves;
pub mod parse;
pub mod search;
pub mod state;

pub use crate::layout::Layout;
pub use crate::parse::{parse_diagram, ParseError};
pub use crate::search::{Solver, Strategy};
pub use crate::state::{State, Token};

/// Minimum total cost to sort `state`, with the default layout and engine.
/// `None` means the goal is unreachable.
pub fn solve(state: &State) -> Option<u32> {
    let (_, _, result) = Solver::default().solve(state);

    result.map(|(_, cost)| cost)
}
