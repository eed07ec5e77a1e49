//! Leaderboard tests fed by finished games.

mod common;

use hilo_grid::core::GameState;
use hilo_grid::leaderboard::{Leaderboard, ScoreEntry};
use hilo_grid::policy::{play_out, RandomPolicy};
use hilo_grid::GameConfig;

#[test]
fn test_finished_games_fill_board() {
    common::init_logging();
    let config = GameConfig::new().with_leaderboard_capacity(5);
    let mut board = Leaderboard::from_config(&config);

    for seed in 0..12u64 {
        let mut game = GameState::new(config.clone().with_seed(seed)).unwrap();
        let result = play_out(&mut game, &mut RandomPolicy::new(seed)).unwrap();

        let qualifies = board.qualifies(result.score);
        let rank = board.insert(ScoreEntry::new(format!("p{seed}"), result.score, "2024-06-01"));
        assert_eq!(qualifies, rank.is_some());
    }

    assert_eq!(board.len(), 5);
    let scores: Vec<_> = board.entries().iter().map(|e| e.score).collect();
    let mut sorted = scores.clone();
    sorted.sort_unstable();
    assert_eq!(scores, sorted);
}

#[test]
fn test_board_survives_json() {
    let mut board = Leaderboard::default();
    for (name, score) in [("ana", 14), ("", 2), ("cy", 30)] {
        board.insert(ScoreEntry::new(name, score, "2024-06-02"));
    }

    let json = board.to_json().unwrap();
    let restored = Leaderboard::from_json(&json, board.capacity()).unwrap();

    assert_eq!(restored, board);
    assert_eq!(restored.best().map(|e| e.display_name()), Some("Anonymous"));
}
