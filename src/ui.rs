use lib_session::GameSession;
use macroquad::prelude::*;

use crate::AppState;
use crate::debug::{LOG_CAP, LOG_FONT_SIZE};

const MAIN_FONT_SIZE: f32 = 32.0;
const HINT_FONT_SIZE: f32 = 16.0;
const HUD_X: f32 = 32.0;
const HUD_Y: f32 = 96.0;
const HUD_LINES: usize = 3;
const LOG_GAP: f32 = 32.0;

static START_TEXT: &str = "Press Space to start";
static PAUSE_TEXT: &str = "Paused";
static CONTROLS_HINT: &str = "Space / Click: +10 points    X: lose a life    Escape: pause";

#[derive(Clone, Copy, Debug)]
pub struct UiModel {
    state: AppState,
    confirmation_detected: bool,
    life_loss_requested: bool,
    pause_requested: bool,
    fullscreen_toggle_requested: bool,
}

impl UiModel {
    pub fn confirmation_detected(&self) -> bool {
        self.confirmation_detected
    }

    pub fn life_loss_requested(&self) -> bool {
        self.life_loss_requested
    }

    pub fn pause_requested(&self) -> bool {
        self.pause_requested
    }

    pub fn fullscreen_toggle_requested(&self) -> bool {
        self.fullscreen_toggle_requested
    }
}

pub struct Ui;

impl Ui {
    pub fn new() -> Self {
        Self
    }

    /// Where the log overlay goes: under the HUD, clear of the score lines.
    pub fn log_origin(&self) -> Vec2 {
        vec2(HUD_X, hud_bottom() + LOG_GAP)
    }

    pub fn update(&self, state: AppState) -> UiModel {
        UiModel {
            state,
            confirmation_detected: is_key_pressed(KeyCode::Space)
                || is_mouse_button_pressed(MouseButton::Left),
            life_loss_requested: is_key_pressed(KeyCode::X),
            pause_requested: is_key_pressed(KeyCode::Escape),
            fullscreen_toggle_requested: is_key_pressed(KeyCode::F11),
        }
    }

    pub fn draw<S>(&self, model: UiModel, session: &GameSession<S>)
    where
        S: lib_session::KvStore,
    {
        set_default_camera();

        let lines = [
            format!("Score: {}", session.score()),
            format!("High score: {}", session.high_score()),
            format!("Lives: {}/{}", session.lives(), session.cfg().max_lives),
        ];
        for (idx, line) in lines.iter().enumerate() {
            draw_text(
                line,
                HUD_X,
                HUD_Y + (idx as f32) * MAIN_FONT_SIZE,
                MAIN_FONT_SIZE,
                YELLOW,
            );
        }

        match model.state {
            AppState::Start => self.draw_centered(START_TEXT, MAIN_FONT_SIZE),
            AppState::Paused => self.draw_centered(PAUSE_TEXT, MAIN_FONT_SIZE),
            AppState::Active => (),
        }

        draw_text(
            CONTROLS_HINT,
            HUD_X,
            screen_height() - HINT_FONT_SIZE,
            HINT_FONT_SIZE,
            WHITE,
        );
    }

    fn draw_centered(&self, text: &str, size: f32) {
        let dims = measure_text(text, None, size as u16, 1.0);
        draw_text(
            text,
            (screen_width() - dims.width) / 2.0,
            (screen_height() + dims.height) / 2.0,
            size,
            WHITE,
        );
    }
}

fn hud_bottom() -> f32 {
    HUD_Y + ((HUD_LINES - 1) as f32) * MAIN_FONT_SIZE
}
