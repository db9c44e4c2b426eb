mod common;

use common::{FailingStore, RecordingStore, init_logs};
use lib_session::{GameSession, LifeOutcome, MemoryStore, SessionCfg};

#[test]
fn fresh_session_without_stored_value() {
    init_logs();
    let session = GameSession::new(RecordingStore::new());

    assert_eq!(session.score(), 0);
    assert_eq!(session.high_score(), 0);
    assert_eq!(session.lives(), 3);
    assert!(session.store().writes.is_empty());
}

#[test]
fn fresh_session_with_garbage_stored_value() {
    init_logs();
    for garbage in ["", "abc", "NaN", "12abc", "-7"] {
        let session = GameSession::new(RecordingStore::with_entry("highScore", garbage));

        assert_eq!(session.high_score(), 0, "stored value {garbage:?}");
        assert_eq!(session.score(), 0);
        assert_eq!(session.lives(), 3);
    }
}

#[test]
fn fresh_session_picks_up_stored_high_score() {
    init_logs();
    let session = GameSession::new(RecordingStore::with_entry("highScore", "120"));

    assert_eq!(session.high_score(), 120);
    assert_eq!(session.score(), 0);
}

#[test]
fn beating_the_high_score_writes_once() {
    init_logs();
    let mut session = GameSession::new(RecordingStore::with_entry("highScore", "30"));
    session.increment_score(45);

    assert_eq!(session.high_score(), 45);
    assert_eq!(
        session.store().writes,
        vec![("highScore".to_owned(), "45".to_owned())]
    );
}

#[test]
fn no_write_without_a_record() {
    init_logs();
    let mut session = GameSession::new(RecordingStore::with_entry("highScore", "100"));
    session.increment_score(40);
    session.increment_score(60);

    assert_eq!(session.score(), 100);
    assert_eq!(session.high_score(), 100);
    assert!(session.store().writes.is_empty());
}

#[test]
fn last_life_resets_the_game() {
    init_logs();
    let mut session = GameSession::new(RecordingStore::new());
    session.increment_score(70);
    session.reset_life_cycle();
    session.reset_life_cycle();
    assert_eq!(session.lives(), 1);

    assert_eq!(session.reset_life_cycle(), LifeOutcome::GameReset);
    assert_eq!(session.lives(), 3);
    assert_eq!(session.score(), 0);
    assert_eq!(session.high_score(), 70);
}

#[test]
fn losing_a_life_keeps_the_score() {
    init_logs();
    let mut session = GameSession::new(RecordingStore::new());
    session.increment_score(25);
    session.reset_life_cycle();
    assert_eq!(session.lives(), 2);

    assert_eq!(
        session.reset_life_cycle(),
        LifeOutcome::LifeLost { remaining: 1 }
    );
    assert_eq!(session.score(), 25);
}

#[test]
fn life_resets_never_touch_the_store() {
    init_logs();
    let mut session = GameSession::new(RecordingStore::new());
    session.increment_score(10);
    for _ in 0..7 {
        session.reset_life_cycle();
    }

    assert_eq!(session.store().written_values(), vec!["10"]);
}

#[test]
fn full_round() {
    init_logs();
    let mut session = GameSession::new(RecordingStore::new());

    session.increment_score(50);
    assert_eq!((session.score(), session.high_score()), (50, 50));
    assert_eq!(session.store().written_values(), vec!["50"]);

    session.increment_score(10);
    assert_eq!((session.score(), session.high_score()), (60, 60));
    assert_eq!(session.store().written_values(), vec!["50", "60"]);

    assert_eq!(
        session.reset_life_cycle(),
        LifeOutcome::LifeLost { remaining: 2 }
    );
    assert_eq!((session.lives(), session.score()), (2, 60));

    assert_eq!(
        session.reset_life_cycle(),
        LifeOutcome::LifeLost { remaining: 1 }
    );
    assert_eq!((session.lives(), session.score()), (1, 60));

    assert_eq!(session.reset_life_cycle(), LifeOutcome::GameReset);
    assert_eq!((session.lives(), session.score()), (3, 0));

    assert_eq!(session.high_score(), 60);
    assert_eq!(session.store().writes.len(), 2);
}

#[test]
fn negative_points_are_allowed() {
    init_logs();
    let mut session = GameSession::new(RecordingStore::new());
    session.increment_score(20);
    session.increment_score(-50);

    assert_eq!(session.score(), -30);
    assert_eq!(session.high_score(), 20);
    assert_eq!(session.store().written_values(), vec!["20"]);
}

#[test]
fn failing_store_does_not_block_the_update() {
    init_logs();
    let mut session = GameSession::new(FailingStore::default());
    session.increment_score(15);
    session.increment_score(5);

    assert_eq!(session.score(), 20);
    assert_eq!(session.high_score(), 20);
    assert_eq!(session.store().attempts, 2);
}

#[test]
fn custom_cfg_is_honoured() {
    init_logs();
    let cfg = SessionCfg::from_ron("(max_lives: 5, high_score_key: \"best\")").unwrap();
    let store: MemoryStore = [("best", "8"), ("highScore", "900")].into_iter().collect();
    let mut session = GameSession::with_cfg(cfg, store);

    assert_eq!(session.lives(), 5);
    assert_eq!(session.high_score(), 8);
    assert_eq!(session.cfg().high_score_key, "best");

    session.increment_score(9);
    let store = session.into_store();
    assert_eq!(lib_session::KvStore::get(&store, "best").as_deref(), Some("9"));
    assert_eq!(lib_session::KvStore::get(&store, "highScore").as_deref(), Some("900"));
}

#[test]
fn borrowed_store_keeps_writes() {
    init_logs();
    let mut store = RecordingStore::new();
    {
        let mut session = GameSession::new(&mut store);
        session.increment_score(3);
    }

    assert_eq!(store.written_values(), vec!["3"]);
}
