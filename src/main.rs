#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use snakes_ladders::{
    init_logging, run_game,
    ui::{print_standings, render_layout},
    AutoTrigger, Dice, GameEngine, Layout, PromptTrigger, Rules, WinMode, DEFAULT_DICE_SIDES,
};

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use log::LevelFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Mode {
    /// Play until every player has finished.
    FullRanking,
    /// Stop at the first player to finish.
    FirstFinisher,
}

#[cfg(feature = "std")]
impl From<Mode> for WinMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::FullRanking => WinMode::FullRanking,
            Mode::FirstFinisher => WinMode::FirstFinisher,
        }
    }
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a game on this terminal.
    Play {
        #[arg(long, default_value_t = 2)]
        players: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_DICE_SIDES)]
        sides: u32,
        #[arg(long, value_enum, default_value_t = Mode::FullRanking)]
        mode: Mode,
        #[arg(long, default_value = "standard", help = "standard, sample, or a layout file")]
        layout: String,
        #[arg(long, help = "Roll without waiting for Enter")]
        auto: bool,
        #[arg(long, default_value_t = 10_000)]
        max_turns: usize,
        #[arg(long, help = "Print every player's square after each roll")]
        verbose: bool,
    },
    /// Print a board layout.
    Layout {
        #[arg(long, default_value = "standard")]
        layout: String,
    },
}

#[cfg(feature = "std")]
fn load_layout(name: &str) -> anyhow::Result<Layout> {
    if let Some(layout) = Layout::named(name) {
        return Ok(layout);
    }
    let text = std::fs::read_to_string(name)
        .with_context(|| format!("reading layout file {}", name))?;
    Ok(Layout::parse(&text)?)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            players,
            seed,
            sides,
            mode,
            layout,
            auto,
            max_turns,
            verbose,
        } => {
            let board = load_layout(&layout)?.board()?;
            let dice = match seed {
                Some(s) => {
                    println!("Using fixed seed: {} (game will be reproducible)", s);
                    Dice::seeded(sides, s)
                }
                None => Dice::from_entropy(sides),
            }?;
            let mut engine = GameEngine::start(Rules::new(mode.into()), board, dice, players)?;

            let done = if auto {
                run_game(&mut engine, &mut AutoTrigger, max_turns, verbose)?
            } else {
                run_game(&mut engine, &mut PromptTrigger::stdio(), max_turns, verbose)?
            };

            if done {
                if let Some(winner) = engine.winner() {
                    println!("\n{} has won the game!", winner);
                }
            } else {
                println!("\nGame stopped after {} turns.", engine.turns_taken());
            }
            print_standings(&engine.standings());
        }
        Commands::Layout { layout } => {
            let board = load_layout(&layout)?.board()?;
            print!("{}", render_layout(&board));
        }
    }
    Ok(())
}
