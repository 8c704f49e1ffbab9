use proptest::prelude::*;
use snakes_ladders::{
    Dice, GameEngine, Layout, Rules, TurnEvent, BONUS_FACE, DEFAULT_DICE_SIDES,
};

const TURN_LIMIT: usize = 100_000;

fn played_game(seed: u64, players: usize) -> (GameEngine, Vec<TurnEvent>) {
    let board = Layout::standard().board().unwrap();
    let dice = Dice::seeded(DEFAULT_DICE_SIDES, seed).unwrap();
    let mut engine = GameEngine::start(Rules::default(), board, dice, players).unwrap();
    let events = engine.play_out(TURN_LIMIT).unwrap();
    (engine, events)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn every_player_gets_a_distinct_rank(seed in any::<u64>(), players in 1usize..6) {
        let (engine, events) = played_game(seed, players);
        prop_assert!(engine.is_complete());
        prop_assert!(events.last().unwrap().game_complete);

        let mut ranks: Vec<u32> = engine.ranks().into_iter().map(|r| r.unwrap()).collect();
        ranks.sort();
        let expected: Vec<u32> = (1..=players as u32).collect();
        prop_assert_eq!(ranks, expected);
        prop_assert!(engine.positions().iter().all(|&p| p == 100));
    }

    #[test]
    fn moves_follow_the_board(seed in any::<u64>(), players in 1usize..6) {
        let (engine, events) = played_game(seed, players);
        let board = engine.board();
        for ev in &events {
            prop_assert!((1..=board.size()).contains(&ev.position));
            prop_assert_eq!(ev.candidate, ev.from + ev.roll);
            prop_assert_eq!(ev.turn_rotated, !ev.extra_turn_granted);
            if ev.wasted {
                prop_assert!(ev.candidate > board.size());
                prop_assert_eq!(ev.position, ev.from);
            }
            match &ev.entity {
                Some(hit) => {
                    prop_assert_eq!(hit.at, ev.candidate);
                    prop_assert_eq!(hit.to, ev.position);
                }
                None if !ev.wasted => prop_assert_eq!(ev.position, ev.candidate),
                None => {}
            }
        }
    }

    #[test]
    fn bonus_rolls_and_rotation(seed in any::<u64>(), players in 1usize..6) {
        let (_, events) = played_game(seed, players);
        let mut finished = 0usize;
        for (i, ev) in events.iter().enumerate() {
            if ev.extra_turn_granted {
                prop_assert_eq!(ev.roll, BONUS_FACE);
                prop_assert!(ev.finished.is_none());
                prop_assert!(!ev.streak_forfeit);
            }
            if ev.streak_forfeit {
                prop_assert_eq!(ev.roll, BONUS_FACE);
                prop_assert!(i >= 2);
                for prev in &events[i - 2..i] {
                    prop_assert_eq!(prev.player, ev.player);
                    prop_assert!(prev.extra_turn_granted);
                }
            }
            if ev.finished.is_some() {
                finished += 1;
            }

            let Some(next) = events.get(i + 1) else { continue };
            if ev.extra_turn_granted {
                prop_assert_eq!(next.player, ev.player);
            } else if ev.finished.is_some() || players - finished >= 2 {
                prop_assert_ne!(next.player, ev.player);
            }
        }
    }
}
