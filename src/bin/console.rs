//! Terminal presentation adapter for the match engine.
//!
//! Reads two player names, then (row, col) moves in 1-based matrix
//! notation, re-rendering the board after every event.

use anyhow::{Context, Result};
use noughts::{Match, MatchSnapshot, Roster};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn prompt(out: &mut impl Write, input: &mut impl BufRead, label: &str) -> Result<String> {
    write!(out, "{}", label)?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("Reading input")?;
    Ok(line.trim().to_string())
}

fn parse_move(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

fn render(out: &mut impl Write, game: &Match) -> Result<()> {
    let snap = MatchSnapshot::capture(game);
    writeln!(out, "\n{}", snap.render())?;
    writeln!(out, "{}", snap.status_line())?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    writeln!(out, "Tic-tac-toe")?;
    let first = prompt(&mut out, &mut input, "Player X name: ")?;
    let second = prompt(&mut out, &mut input, "Player O name: ")?;

    let mut roster = Roster::new();
    roster.create_players([first, second]);

    let mut game = Match::new();
    game.start_game(&roster)?;

    loop {
        render(&mut out, &game)?;

        if !game.in_progress() {
            let answer = prompt(&mut out, &mut input, "Play again? (y/n) ")?;
            if answer.eq_ignore_ascii_case("y") {
                game.restart_game()?;
                continue;
            }
            break;
        }

        let line = prompt(&mut out, &mut input, "Move (row col, 1-3 each): ")?;
        if line.eq_ignore_ascii_case("q") {
            break;
        }
        match parse_move(&line) {
            Some((row, col)) if (1..=3).contains(&row) && (1..=3).contains(&col) => {
                game.play_round(row, col)?;
            }
            _ => writeln!(out, "Enter a row and column between 1 and 3, or q to quit.")?,
        }
    }

    Ok(())
}
