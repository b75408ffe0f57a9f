use std::error::Error;
use std::fmt;

use crate::state::{RoomColumn, Slot, State, Token, CORRIDOR_LEN, ROOM_COUNT};

/// Why a textual diagram was rejected before reaching the solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    MissingRows {
        found: usize,
    },
    RowTooShort {
        row: usize,
        len: usize,
        expected: usize,
    },
    UnexpectedChar {
        row: usize,
        column: usize,
        found: char,
    },
    TokenCount {
        token: Token,
        found: usize,
        expected: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingRows { found } => {
                write!(f, "diagram has {found} rows, at least 4 are required")
            }
            ParseError::RowTooShort { row, len, expected } => {
                write!(f, "row {row} has {len} characters, expected at least {expected}")
            }
            ParseError::UnexpectedChar { row, column, found } => {
                write!(f, "unexpected {found:?} at row {row}, column {column}")
            }
            ParseError::TokenCount {
                token,
                found,
                expected,
            } => {
                write!(
                    f,
                    "found {found} {token:?} tokens, expected exactly {expected}"
                )
            }
        }
    }
}

impl Error for ParseError {}

// room r's cell sits at text column 3 + 2r in every room row
fn room_text_column(room: usize) -> usize {
    3 + 2 * room
}

fn parse_slot(row: usize, column: usize, found: char) -> Result<Slot, ParseError> {
    match found {
        '.' => Ok(None),
        _ => Token::from_char(found).map(Some).ok_or(ParseError::UnexpectedChar {
            row,
            column,
            found,
        }),
    }
}

/// Builds the initial state from a puzzle diagram: a wall row, the corridor
/// row, one row per room depth, and a closing wall row. The frame characters
/// are not themselves validated (the cell offsets are fixed), but every cell
/// must be `.` or a token letter and each token type must occur exactly
/// depth times.
pub fn parse_diagram(input: &str) -> Result<State, ParseError> {
    let rows: Vec<Vec<char>> = input.trim().lines().map(|line| line.chars().collect()).collect();

    if rows.len() < 4 {
        return Err(ParseError::MissingRows { found: rows.len() });
    }

    let depth = rows.len() - 3;
    let corridor_row = &rows[1];

    if corridor_row.len() < CORRIDOR_LEN + 2 {
        return Err(ParseError::RowTooShort {
            row: 1,
            len: corridor_row.len(),
            expected: CORRIDOR_LEN + 2,
        });
    }

    let mut corridor: [Slot; CORRIDOR_LEN] = [None; CORRIDOR_LEN];

    for (column, slot) in corridor.iter_mut().enumerate() {
        *slot = parse_slot(1, column + 1, corridor_row[column + 1])?;
    }

    let mut rooms: [RoomColumn; ROOM_COUNT] = Default::default();

    for room_depth in 0..depth {
        let row_index = 2 + room_depth;
        let row = &rows[row_index];
        let expected = room_text_column(ROOM_COUNT - 1) + 1;

        if row.len() < expected {
            return Err(ParseError::RowTooShort {
                row: row_index,
                len: row.len(),
                expected,
            });
        }

        for (room, slots) in rooms.iter_mut().enumerate() {
            let column = room_text_column(room);

            slots.push(parse_slot(row_index, column, row[column])?);
        }
    }

    let state = State::new(corridor, rooms);
    let counts = state.token_counts();

    for (index, found) in counts.into_iter().enumerate() {
        if found != depth {
            return Err(ParseError::TokenCount {
                token: Token::ALL[index],
                found,
                expected: depth,
            });
        }
    }

    Ok(state)
}
