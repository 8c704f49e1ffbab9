//! Turn engine: selects the active player, rolls, moves, ranks and rotates.

use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, info, trace};

use crate::{
    board::{Board, Landing},
    common::{ConfigIssue, GameError, PlayerId, Square},
    config::{Rules, WinMode, START_SQUARE},
    dice::{Dice, Roll},
    entity::{Entity, EntityKind},
    player::Player,
};

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    Setup,
    InProgress,
    Complete,
}

/// The snake or ladder a player triggered during a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityHit {
    pub kind: EntityKind,
    pub label: String,
    /// Square the player landed on.
    pub at: Square,
    /// Square the player was moved to.
    pub to: Square,
}

impl From<&Entity> for EntityHit {
    fn from(e: &Entity) -> Self {
        EntityHit {
            kind: e.kind(),
            label: String::from(e.label()),
            at: e.start(),
            to: e.end(),
        }
    }
}

/// Everything that happened during one roll.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnEvent {
    pub player: PlayerId,
    pub roll: u32,
    pub from: Square,
    pub candidate: Square,
    /// Position after the turn.
    pub position: Square,
    pub entity: Option<EntityHit>,
    /// The roll would have left the board, so the player stayed put.
    pub wasted: bool,
    /// Rank assigned if the player reached the last square this turn.
    pub finished: Option<u32>,
    pub turn_rotated: bool,
    pub extra_turn_granted: bool,
    /// The bonus face came up once too often in a row and the extra roll was lost.
    pub streak_forfeit: bool,
    pub game_complete: bool,
}

/// Result of asking the engine for the next turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Played(TurnEvent),
    /// The game had already ended; nothing changed.
    GameAlreadyComplete,
}

impl TurnOutcome {
    pub fn event(&self) -> Option<&TurnEvent> {
        match self {
            TurnOutcome::Played(e) => Some(e),
            TurnOutcome::GameAlreadyComplete => None,
        }
    }

    pub fn into_event(self) -> Option<TurnEvent> {
        match self {
            TurnOutcome::Played(e) => Some(e),
            TurnOutcome::GameAlreadyComplete => None,
        }
    }
}

/// One line of the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Standing {
    pub player: PlayerId,
    /// Leaderboard place. Unfinished players on the same square share a place.
    pub place: u32,
    pub rank: Option<u32>,
    pub position: Square,
}

/// Serializable view of a game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub board_size: Square,
    pub players: Vec<Player>,
    pub active: Option<PlayerId>,
    pub bonus_streak: u32,
    pub finished_count: u32,
    pub turns: u64,
}

/// Core game logic holding the board, the dice and every player.
pub struct GameEngine<D = Dice> {
    rules: Rules,
    phase: GamePhase,
    board: Board,
    dice: Option<D>,
    players: Vec<Player>,
    turn_index: usize,
    bonus_streak: u32,
    finished_count: u32,
    turns: u64,
}

impl<D: Roll> GameEngine<D> {
    /// Create an engine in setup; nothing can be played until [`initialize`](Self::initialize).
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            phase: GamePhase::Setup,
            board: Board::new(0),
            dice: None,
            players: Vec::new(),
            turn_index: 0,
            bonus_streak: 0,
            finished_count: 0,
            turns: 0,
        }
    }

    /// Create and initialize in one step.
    pub fn start(
        rules: Rules,
        board: Board,
        dice: D,
        player_count: usize,
    ) -> Result<Self, GameError> {
        let mut engine = Self::new(rules);
        engine.initialize(board, dice, player_count)?;
        Ok(engine)
    }

    /// Seat `player_count` players on the start square and move to `InProgress`.
    /// On error the engine is left untouched in setup.
    pub fn initialize(
        &mut self,
        board: Board,
        dice: D,
        player_count: usize,
    ) -> Result<(), GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::AlreadyInitialized);
        }
        if player_count == 0 {
            return Err(ConfigIssue::NoPlayers.into());
        }
        if dice.sides() < 2 {
            return Err(ConfigIssue::TooFewSides(dice.sides()).into());
        }
        if board.size() <= START_SQUARE {
            return Err(ConfigIssue::BoardTooSmall(board.size()).into());
        }

        info!(
            "starting game: {} players, board of {}, d{}, {:?}",
            player_count,
            board.size(),
            dice.sides(),
            self.rules.win_mode
        );
        self.board = board;
        self.dice = Some(dice);
        self.players = (0..player_count).map(|i| Player::new(PlayerId(i))).collect();
        self.turn_index = 0;
        self.bonus_streak = 0;
        self.finished_count = 0;
        self.turns = 0;
        self.phase = GamePhase::InProgress;
        Ok(())
    }

    /// Index of the first unfinished player at or after `from`, wrapping around.
    fn next_unfinished(&self, from: usize) -> Option<usize> {
        let n = self.players.len();
        (0..n)
            .map(|offset| (from + offset) % n)
            .find(|&i| !self.players[i].is_finished())
    }

    fn advance_turn(&mut self) {
        let n = self.players.len();
        if let Some(next) = self.next_unfinished((self.turn_index + 1) % n) {
            trace!("turn passes from {} to {}", PlayerId(self.turn_index), PlayerId(next));
            self.turn_index = next;
        }
    }

    fn win_condition_met(&self) -> bool {
        match self.rules.win_mode {
            WinMode::FirstFinisher => self.finished_count >= 1,
            WinMode::FullRanking => self.finished_count as usize == self.players.len(),
        }
    }

    /// Play one roll for the active player.
    ///
    /// Returns [`GameError::NotInitialized`] before setup has completed and
    /// [`TurnOutcome::GameAlreadyComplete`] once the game is over.
    pub fn take_turn(&mut self) -> Result<TurnOutcome, GameError> {
        match self.phase {
            GamePhase::Setup => return Err(GameError::NotInitialized),
            GamePhase::Complete => return Ok(TurnOutcome::GameAlreadyComplete),
            GamePhase::InProgress => {}
        }
        let Some(idx) = self.next_unfinished(self.turn_index) else {
            self.phase = GamePhase::Complete;
            return Ok(TurnOutcome::GameAlreadyComplete);
        };
        self.turn_index = idx;
        let id = PlayerId(idx);

        let roll = self.dice.as_mut().ok_or(GameError::NotInitialized)?.roll();
        let from = self.players[idx].position();
        let candidate = from.saturating_add(roll);

        let (position, entity, wasted) = match self.board.resolve_landing(candidate) {
            Landing::Overshoot => (from, None, true),
            Landing::Square(sq) => (sq, None, false),
            Landing::Entity(e) => (e.end(), Some(EntityHit::from(e)), false),
        };
        match &entity {
            Some(hit) => debug!(
                "{} rolled {}: {} at {}, {} -> {}",
                id, roll, hit.label, hit.at, from, position
            ),
            None if wasted => debug!("{} rolled {}: {} overshoots, stays on {}", id, roll, candidate, from),
            None => debug!("{} rolled {}: {} -> {}", id, roll, from, position),
        }

        let player = &mut self.players[idx];
        player.set_position(position);
        let mut finished = None;
        if self.board.is_terminal(position) && !player.is_finished() {
            let rank = self.finished_count + 1;
            player.set_rank(rank);
            self.finished_count = rank;
            finished = Some(rank);
            info!("{} reached square {} and finished in place {}", id, position, rank);
        }

        let mut extra_turn_granted = false;
        let mut streak_forfeit = false;
        if finished.is_some() {
            self.bonus_streak = 0;
        } else if roll == self.rules.bonus_face {
            self.bonus_streak += 1;
            if self.bonus_streak >= self.rules.bonus_streak_limit {
                debug!("{} rolled {} {}s in a row, turn passes", id, self.bonus_streak, roll);
                self.bonus_streak = 0;
                streak_forfeit = true;
            } else {
                extra_turn_granted = true;
            }
        } else {
            self.bonus_streak = 0;
        }
        let turn_rotated = !extra_turn_granted;
        if turn_rotated {
            self.advance_turn();
        } else {
            trace!("{} rolls again", id);
        }

        self.turns += 1;
        let game_complete = self.win_condition_met();
        if game_complete {
            self.phase = GamePhase::Complete;
            info!("game complete after {} turns", self.turns);
        }

        Ok(TurnOutcome::Played(TurnEvent {
            player: id,
            roll,
            from,
            candidate,
            position,
            entity,
            wasted,
            finished,
            turn_rotated,
            extra_turn_granted,
            streak_forfeit,
            game_complete,
        }))
    }

    /// Take turns until the game ends or `turn_limit` rolls have been made.
    pub fn play_out(&mut self, turn_limit: usize) -> Result<Vec<TurnEvent>, GameError> {
        let mut events = Vec::new();
        while events.len() < turn_limit {
            match self.take_turn()? {
                TurnOutcome::Played(event) => events.push(event),
                TurnOutcome::GameAlreadyComplete => break,
            }
        }
        Ok(events)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == GamePhase::Complete
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub fn positions(&self) -> Vec<Square> {
        self.players.iter().map(Player::position).collect()
    }

    pub fn ranks(&self) -> Vec<Option<u32>> {
        self.players.iter().map(Player::rank).collect()
    }

    /// The player who rolls next, or `None` outside of play.
    pub fn active_player(&self) -> Option<PlayerId> {
        if self.phase != GamePhase::InProgress {
            return None;
        }
        self.next_unfinished(self.turn_index).map(PlayerId)
    }

    /// Consecutive bonus faces rolled by the active player.
    pub fn bonus_streak(&self) -> u32 {
        self.bonus_streak
    }

    pub fn finished_count(&self) -> u32 {
        self.finished_count
    }

    pub fn turns_taken(&self) -> u64 {
        self.turns
    }

    /// First player to reach the last square.
    pub fn winner(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|p| p.rank() == Some(1))
            .map(Player::id)
    }

    /// Leaderboard: finished players by rank, then the rest by position,
    /// furthest first.
    pub fn standings(&self) -> Vec<Standing> {
        let mut ranked: Vec<&Player> = self.players.iter().filter(|p| p.rank().is_some()).collect();
        ranked.sort_by_key(|p| p.rank());
        let mut rest: Vec<&Player> = self.players.iter().filter(|p| p.rank().is_none()).collect();
        rest.sort_by(|a, b| b.position().cmp(&a.position()).then(a.id().cmp(&b.id())));

        let mut out: Vec<Standing> = ranked
            .into_iter()
            .map(|p| Standing {
                player: p.id(),
                place: p.rank().unwrap_or_default(),
                rank: p.rank(),
                position: p.position(),
            })
            .collect();

        let mut place = 0;
        let mut prev: Option<Square> = None;
        for (i, p) in rest.into_iter().enumerate() {
            if prev != Some(p.position()) {
                place = self.finished_count + i as u32 + 1;
            }
            prev = Some(p.position());
            out.push(Standing {
                player: p.id(),
                place,
                rank: None,
                position: p.position(),
            });
        }
        out
    }

    /// Generate a serializable snapshot of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            board_size: self.board.size(),
            players: self.players.clone(),
            active: self.active_player(),
            bonus_streak: self.bonus_streak,
            finished_count: self.finished_count,
            turns: self.turns,
        }
    }
}

impl<D: Roll> Default for GameEngine<D> {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}
