use snakes_ladders::{Dice, GameEngine, Layout, Rules, DEFAULT_DICE_SIDES};
use serde_json::json;

const TURN_LIMIT: usize = 100_000;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <players>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let players: usize = args[2].parse()?;

    let board = Layout::standard().board()?;
    let dice = Dice::seeded(DEFAULT_DICE_SIDES, seed)?;
    let mut engine = GameEngine::start(Rules::default(), board, dice, players)?;
    let events = engine.play_out(TURN_LIMIT)?;

    let result = json!({
        "seed": seed,
        "players": players,
        "turns": events.len(),
        "complete": engine.is_complete(),
        "winner": engine.winner().map(|p| p.to_string()),
        "standings": engine.standings(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
