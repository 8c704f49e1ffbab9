#![cfg(feature = "std")]

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::{
    board::Board,
    common::Square,
    entity::EntityKind,
    game::{GameEngine, Standing, TurnEvent},
    dice::Roll,
};

const COLUMNS: Square = 10;

fn marks(board: &Board) -> HashMap<Square, char> {
    let mut marks = HashMap::new();
    for e in board.entities() {
        let end = match e.kind() {
            EntityKind::Snake => 's',
            EntityKind::Ladder => 'l',
        };
        marks.entry(e.end()).or_insert(end);
    }
    // starts win over ends on shared squares
    for e in board.entities() {
        let start = match e.kind() {
            EntityKind::Snake => 'S',
            EntityKind::Ladder => 'L',
        };
        marks.insert(e.start(), start);
    }
    marks
}

/// Render the static layout as a grid, square 1 bottom-left, rows
/// alternating direction. `S`/`s` mark a snake's head and tail, `L`/`l` a
/// ladder's foot and top.
pub fn render_layout(board: &Board) -> String {
    let marks = marks(board);
    let size = board.size();
    let rows = size.div_ceil(COLUMNS);
    let mut out = String::new();
    let border = format!("+{}", "-----+".repeat(COLUMNS.min(size.max(1)) as usize));

    for row in (0..rows).rev() {
        let first = row * COLUMNS + 1;
        let last = (first + COLUMNS - 1).min(size);
        let mut squares: Vec<Square> = (first..=last).collect();
        if row % 2 == 1 {
            squares.reverse();
        }
        let _ = writeln!(out, "{}", border);
        out.push('|');
        for sq in squares {
            let mark = marks.get(&sq).copied().unwrap_or(' ');
            let _ = write!(out, "{:>4}{}|", sq, mark);
        }
        out.push('\n');
    }
    let _ = writeln!(out, "{}", border);
    let _ = writeln!(out, "Legend: S=snake head  s=snake tail  L=ladder foot  l=ladder top");
    out
}

/// Describe one turn in a single line.
pub fn describe_event(event: &TurnEvent) -> String {
    let mut line = format!("{} rolled {}", event.player, event.roll);
    if event.wasted {
        let _ = write!(
            line,
            ": {} is past the end, stays on {}",
            event.candidate, event.position
        );
    } else if let Some(hit) = &event.entity {
        let _ = write!(line, ": {} at {}, moves to {}", hit.label, hit.at, hit.to);
    } else {
        let _ = write!(line, ": moves {} -> {}", event.from, event.position);
    }
    if let Some(rank) = event.finished {
        let _ = write!(line, " and finishes in place {}", rank);
    }
    if event.streak_forfeit {
        let _ = write!(line, " (turn passes after {} bonus rolls in a row)", event.roll);
    } else if event.extra_turn_granted {
        let _ = write!(line, " (rolls again)");
    }
    line
}

pub fn print_event(event: &TurnEvent) {
    println!("{}", describe_event(event));
}

/// Print every player's square.
pub fn print_game_state<D: Roll>(engine: &GameEngine<D>) {
    println!("-------------game state-------------");
    for p in engine.players() {
        match p.rank() {
            Some(rank) => println!("{} is at {} (finished, place {})", p.id(), p.position(), rank),
            None => println!("{} is at {}", p.id(), p.position()),
        }
    }
    println!("------------------------------------");
}

pub fn print_standings(standings: &[Standing]) {
    println!("-------------final result-------------");
    for s in standings {
        match s.rank {
            Some(_) => println!("{}. {} (finished)", s.place, s.player),
            None => println!("{}. {} (on square {})", s.place, s.player, s.position),
        }
    }
}
