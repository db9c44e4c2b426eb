use log::{debug, info, warn};

use crate::{KvStore, SessionCfg, parse_high_score};

/// What happened after a life got taken away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifeOutcome {
    /// The player still has lives left.
    LifeLost { remaining: i32 },
    /// The lives ran out. Score and lives are back to their
    /// starting values.
    GameReset,
}

/// The score, the high score and the lives of the current play
/// session.
///
/// The high score is read from the store once at construction and
/// written back every time it gets beaten. Writes are best-effort:
/// a failing store never stops the in-memory state from updating.
pub struct GameSession<S> {
    score: i64,
    high_score: i64,
    lives: i32,
    cfg: SessionCfg,
    store: S,
}

impl<S: KvStore> GameSession<S> {
    pub fn new(store: S) -> Self {
        Self::with_cfg(SessionCfg::default(), store)
    }

    pub fn with_cfg(mut cfg: SessionCfg, store: S) -> Self {
        if cfg.max_lives < 1 {
            warn!("max_lives is {}, using 1 instead", cfg.max_lives);
            cfg.max_lives = 1;
        }

        let stored = store.get(&cfg.high_score_key);
        let high_score = parse_high_score(stored.as_deref());
        info!("Loaded high score: {high_score}");

        Self {
            score: 0,
            high_score,
            lives: cfg.max_lives,
            cfg,
            store,
        }
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn high_score(&self) -> i64 {
        self.high_score
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn cfg(&self) -> &SessionCfg {
        &self.cfg
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Add `points` to the score. Negative amounts are accepted.
    /// Beating the high score persists the new value.
    pub fn increment_score(&mut self, points: i64) {
        self.score = self.score.saturating_add(points);
        if self.score <= self.high_score {
            return;
        }

        self.high_score = self.score;
        debug!("New high score: {}", self.high_score);

        let value = self.high_score.to_string();
        if let Err(e) = self.store.set(&self.cfg.high_score_key, &value) {
            warn!("Failed to persist the high score: {e:#}");
        }
    }

    /// Take one life away. Running out of lives starts a new game:
    /// the score goes back to zero and the lives get refilled.
    /// The high score is left alone.
    pub fn reset_life_cycle(&mut self) -> LifeOutcome {
        self.lives -= 1;
        if self.lives > 0 {
            return LifeOutcome::LifeLost {
                remaining: self.lives,
            };
        }

        self.score = 0;
        self.lives = self.cfg.max_lives;

        LifeOutcome::GameReset
    }
}

impl<S> std::fmt::Debug for GameSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("score", &self.score)
            .field("high_score", &self.high_score)
            .field("lives", &self.lives)
            .field("cfg", &self.cfg)
            .finish_non_exhaustive()
    }
}
