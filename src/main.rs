use std::io::{self, Read};

use anyhow::Context;

use roomsort::{parse_diagram, Solver};

// Reads one puzzle diagram from stdin and prints the minimum sorting cost,
// or "unreachable" when no legal move sequence reaches the goal. Search
// statistics go to stderr so the stdout contract stays a single line.
fn main() -> anyhow::Result<()> {
    let mut input = String::new();

    io::stdin()
        .read_to_string(&mut input)
        .context("reading the puzzle diagram from stdin")?;

    let state = parse_diagram(&input).context("invalid puzzle diagram")?;
    let (visited, generated, result) = Solver::default().solve(&state);

    eprintln!("Visited {} states (generated {} total).", visited, generated);

    match result {
        Some((_, cost)) => println!("{}", cost),
        None => println!("unreachable"),
    }

    Ok(())
}
