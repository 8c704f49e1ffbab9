#![cfg(feature = "std")]

//! Turn driver: waits for an outside trigger before each roll and reports
//! what happened.

use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::{
    common::{GameError, PlayerId},
    dice::Roll,
    game::{GamePhase, GameEngine, TurnOutcome},
    ui::{print_event, print_game_state},
};

/// Decides when the next roll happens.
pub trait TurnTrigger {
    /// Block until `player` should roll. `Ok(false)` stops the game.
    fn ready(&mut self, player: PlayerId) -> io::Result<bool>;
}

/// Rolls immediately, for unattended games.
pub struct AutoTrigger;

impl TurnTrigger for AutoTrigger {
    fn ready(&mut self, _player: PlayerId) -> io::Result<bool> {
        Ok(true)
    }
}

/// Asks the player to press Enter before each roll. `q` or end of input quits.
pub struct PromptTrigger<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptTrigger<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptTrigger<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TurnTrigger for PromptTrigger<R, W> {
    fn ready(&mut self, player: PlayerId) -> io::Result<bool> {
        write!(self.output, "{}, press Enter to roll the dice (q to quit): ", player)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        Ok(!line.trim().eq_ignore_ascii_case("q"))
    }
}

/// Drive `engine` until it completes, the trigger stops it, or `turn_limit`
/// rolls have been made. Returns whether the game completed.
pub fn run_game<D: Roll, T: TurnTrigger>(
    engine: &mut GameEngine<D>,
    trigger: &mut T,
    turn_limit: usize,
    show_state: bool,
) -> anyhow::Result<bool> {
    if engine.phase() == GamePhase::Setup {
        return Err(GameError::NotInitialized.into());
    }
    let mut turns = 0;
    while let Some(player) = engine.active_player() {
        if turns >= turn_limit {
            warn!("stopping after {} turns without a result", turns);
            return Ok(false);
        }
        if !trigger.ready(player)? {
            info!("game stopped before {} rolled", player);
            return Ok(false);
        }
        match engine.take_turn()? {
            TurnOutcome::Played(event) => {
                print_event(&event);
                if show_state {
                    print_game_state(engine);
                }
            }
            TurnOutcome::GameAlreadyComplete => break,
        }
        turns += 1;
    }
    Ok(engine.is_complete())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board::Board, config::Rules, dice::LoadedDice};
    use std::io::Cursor;

    #[test]
    fn prompt_reads_enter_and_quit() {
        let mut trigger = PromptTrigger::new(Cursor::new("\n  \nQ\n"), Vec::new());
        assert!(trigger.ready(PlayerId(0)).unwrap());
        assert!(trigger.ready(PlayerId(1)).unwrap());
        assert!(!trigger.ready(PlayerId(0)).unwrap());
        // end of input
        assert!(!trigger.ready(PlayerId(1)).unwrap());
        let shown = String::from_utf8(trigger.output).unwrap();
        assert!(shown.starts_with("Player 1, press Enter to roll the dice"));
    }

    #[test]
    fn auto_trigger_runs_to_completion() {
        let mut engine = GameEngine::start(
            Rules::default(),
            Board::new(5),
            LoadedDice::new(6, vec![4]).unwrap(),
            2,
        )
        .unwrap();
        let done = run_game(&mut engine, &mut AutoTrigger, 100, false).unwrap();
        assert!(done);
        assert_eq!(engine.ranks(), vec![Some(1), Some(2)]);
    }

    #[test]
    fn quitting_leaves_game_in_progress() {
        let mut engine = GameEngine::start(
            Rules::default(),
            Board::new(50),
            LoadedDice::new(6, vec![1]).unwrap(),
            2,
        )
        .unwrap();
        let mut trigger = PromptTrigger::new(Cursor::new("\nq\n"), Vec::new());
        let done = run_game(&mut engine, &mut trigger, 100, false).unwrap();
        assert!(!done);
        assert_eq!(engine.turns_taken(), 1);
        assert_eq!(engine.phase(), GamePhase::InProgress);
    }

    #[test]
    fn running_before_setup_fails() {
        let mut engine: GameEngine<LoadedDice> = GameEngine::default();
        assert!(run_game(&mut engine, &mut AutoTrigger, 10, false).is_err());
    }
}
