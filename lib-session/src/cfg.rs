use std::path::Path;

use anyhow::Context;

pub const DEFAULT_MAX_LIVES: i32 = 3;
pub const DEFAULT_HIGH_SCORE_KEY: &str = "highScore";

/// Tunables of a [crate::GameSession]. Every field is optional
/// in the RON source and falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SessionCfg {
    /// The amount of lives a fresh game starts with.
    pub max_lives: i32,
    /// The store key the high score lives under.
    pub high_score_key: String,
}

impl Default for SessionCfg {
    fn default() -> Self {
        Self {
            max_lives: DEFAULT_MAX_LIVES,
            high_score_key: DEFAULT_HIGH_SCORE_KEY.to_owned(),
        }
    }
}

impl SessionCfg {
    pub fn from_ron(src: &str) -> anyhow::Result<Self> {
        let cfg = ron::from_str(src)?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("reading session config {path:?}"))?;

        Self::from_ron(&src).with_context(|| format!("parsing session config {path:?}"))
    }
}
