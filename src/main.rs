use clap::Parser;
use debug::{init_on_screen_log, LogOverlay};
use lib_session::{GameSession, LifeOutcome, PlatformStore};
use log::{error, info};
use macroquad::prelude::*;
use macroquad::miniquad::window::set_window_size;
use ui::Ui;

mod cli;
mod debug;
mod ui;

const POINTS_PER_HIT: i64 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Start,
    Active,
    Paused,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "High Score".to_owned(),
        high_dpi: true,
        window_width: 960,
        window_height: 540,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(e) = run().await {
        let msg = failure_message(&e);
        // The on-screen log is gone once the loop stops
        eprintln!("{msg}");
        error!("{msg}");
    }
}

fn failure_message(e: &anyhow::Error) -> String {
    format!("Driver exited with error:\n{e:?}")
}

#[cfg(not(target_family = "wasm"))]
fn open_store(args: &cli::Args) -> PlatformStore {
    PlatformStore::open(&args.store)
}

#[cfg(target_family = "wasm")]
fn open_store(_args: &cli::Args) -> PlatformStore {
    PlatformStore::new()
}

async fn run() -> anyhow::Result<()> {
    init_on_screen_log()?;

    let args = cli::Args::parse();
    info!("Project version: {}", env!("CARGO_PKG_VERSION"));

    let cfg = args.session_cfg();
    let mut session = GameSession::with_cfg(cfg, open_store(&args));
    let ui = Ui::new();
    let log_overlay = LogOverlay::new(ui.log_origin());

    let mut state = AppState::Start;
    let mut fullscreen = window_conf().fullscreen;

    // Save old size as leaving fullscreen will give window a different size
    // This value is our best bet as macroquad doesn't allow us to get window size
    let old_size = (window_conf().window_width, window_conf().window_height);

    info!("Done loading");

    loop {
        let ui_model = ui.update(state);

        if ui_model.fullscreen_toggle_requested() {
            // NOTE: macroquad does not update window config when it goes fullscreen
            set_fullscreen(!fullscreen);

            if fullscreen {
                set_window_size(old_size.0 as u32, old_size.1 as u32);
            }

            fullscreen = !fullscreen;
        }

        match state {
            AppState::Start if ui_model.confirmation_detected() => {
                info!("Starting the game");
                state = AppState::Active;
            }
            AppState::Paused if ui_model.pause_requested() => {
                info!("Unpausing");
                state = AppState::Active;
            }
            AppState::Active if ui_model.pause_requested() => {
                info!("Pausing");
                state = AppState::Paused;
            }
            AppState::Active => {
                if ui_model.confirmation_detected() {
                    session.increment_score(POINTS_PER_HIT);
                }

                if ui_model.life_loss_requested() {
                    match session.reset_life_cycle() {
                        LifeOutcome::LifeLost { remaining } => {
                            info!("Life lost, {remaining} left")
                        }
                        LifeOutcome::GameReset => info!("Out of lives, starting over"),
                    }
                }
            }
            _ => (),
        }

        clear_background(Color::from_hex(0x151515));
        ui.draw(ui_model, &session);
        log_overlay.draw();

        next_frame().await
    }
}
