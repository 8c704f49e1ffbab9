#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use snakes_ladders::{
        run_game, ui::render_layout, AutoTrigger, Dice, GameEngine, Layout, PromptTrigger, Rules,
        TurnEvent,
    };
    use std::io::Cursor;

    fn events_for(seed: u64) -> Vec<TurnEvent> {
        let board = Layout::standard().board().unwrap();
        let dice = Dice::seeded(6, seed).unwrap();
        let mut engine = GameEngine::start(Rules::default(), board, dice, 3).unwrap();
        engine.play_out(100_000).unwrap()
    }

    #[test]
    fn test_fixed_seed_replays_the_same_game() {
        assert_eq!(events_for(12345), events_for(12345));
    }

    #[test]
    fn test_different_seeds_diverge() {
        let rolls = |seed| -> Vec<u32> { events_for(seed).iter().map(|e| e.roll).collect() };
        assert_ne!(rolls(1), rolls(2));
    }

    #[test]
    fn test_auto_driver_completes_game() {
        let board = Layout::sample().board().unwrap();
        let dice = Dice::seeded(6, 7).unwrap();
        let mut engine = GameEngine::start(Rules::default(), board, dice, 2).unwrap();
        let done = run_game(&mut engine, &mut AutoTrigger, 100_000, false).unwrap();
        assert!(done);
        assert!(engine.winner().is_some());
    }

    #[test]
    fn test_prompt_driver_stops_on_quit() {
        let board = Layout::standard().board().unwrap();
        let dice = Dice::seeded(6, 7).unwrap();
        let mut engine = GameEngine::start(Rules::default(), board, dice, 2).unwrap();
        let mut out = Vec::new();
        let mut trigger = PromptTrigger::new(Cursor::new("\n\nq\n"), &mut out);
        let done = run_game(&mut engine, &mut trigger, 100, true).unwrap();
        assert!(!done);
        assert_eq!(engine.turns_taken(), 2);

        let prompts = String::from_utf8(out).unwrap();
        assert_eq!(prompts.matches("press Enter").count(), 3);
    }

    #[test]
    fn test_layout_file_builds_a_board() {
        let text = "# a tiny board\nboard 12\nsnake 11 3\nladder 2 9\n";
        let board = Layout::parse(text).unwrap().board().unwrap();
        assert_eq!(board.size(), 12);
        assert_eq!(board.entities().count(), 2);
        let grid = render_layout(&board);
        assert!(grid.contains("  11S|"));
        assert!(grid.contains("   9l|"));
    }
}
