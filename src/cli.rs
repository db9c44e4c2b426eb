use std::path::PathBuf;

use clap::Parser;
use lib_session::SessionCfg;
use log::{info, warn};

const DEFAULT_STORE_PATH: &str = "highscore.ron";

/// A tiny score keeping toy that remembers your best run.
#[derive(Parser, Debug)]
pub struct Args {
    /// RON file with session settings (starting lives, store key).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Where to keep the high score. Ignored in the browser.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_STORE_PATH)]
    pub store: PathBuf,
}

impl Args {
    /// Load the session config, falling back to the defaults
    /// if there is none or it can't be read.
    pub fn session_cfg(&self) -> SessionCfg {
        let Some(path) = &self.config else {
            return SessionCfg::default();
        };

        match SessionCfg::load(path) {
            Ok(cfg) => {
                info!("Using session config {path:?}");
                cfg
            }
            Err(e) => {
                warn!("Falling back to the default session config: {e:#}");
                SessionCfg::default()
            }
        }
    }
}
