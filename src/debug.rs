use std::collections::VecDeque;
use std::sync::{LazyLock, Mutex};

use log::{Level, Log, Metadata, Record};
use macroquad::prelude::*;

pub const LOG_FONT_SIZE: f32 = 16.0;
pub const LOG_CAP: usize = 12;
const LOG_LINE_LIFE: f32 = 3.0;

#[derive(Clone, Debug)]
struct LogLine {
    color: Color,
    text: String,
    time: f32,
}

/// The last [LOG_CAP] log lines, oldest first.
#[derive(Debug, Default)]
struct LogHistory {
    lines: VecDeque<LogLine>,
}

impl LogHistory {
    fn push(&mut self, text: String, color: Color, time: f32) {
        if self.lines.len() == LOG_CAP {
            self.lines.pop_front();
        }
        self.lines.push_back(LogLine { color, text, time });
    }

    /// Lines that are still young enough to be shown at `now`.
    fn recent(&self, now: f32) -> impl Iterator<Item = &LogLine> {
        self.lines
            .iter()
            .filter(move |line| line.time + LOG_LINE_LIFE >= now)
    }
}

static LOG_HISTORY: LazyLock<Mutex<LogHistory>> =
    LazyLock::new(|| Mutex::new(LogHistory::default()));

struct OnScreenLog;

static ON_SCREEN_LOG: OnScreenLog = OnScreenLog;

impl Log for OnScreenLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let color = match record.level() {
            Level::Error => RED,
            Level::Warn => YELLOW,
            Level::Info => GREEN,
            Level::Debug => WHITE,
            Level::Trace => GRAY,
        };

        if let Ok(mut history) = LOG_HISTORY.lock() {
            history.push(record.args().to_string(), color, get_time() as f32);
        }
    }

    fn flush(&self) { /* NOOP */ }
}

pub fn init_on_screen_log() -> anyhow::Result<()> {
    log::set_logger(&ON_SCREEN_LOG)?;
    log::set_max_level(log::STATIC_MAX_LEVEL);
    Ok(())
}

/// Draws the recent log lines, oldest on top, starting at `origin`.
pub struct LogOverlay {
    origin: Vec2,
}

impl LogOverlay {
    pub fn new(origin: Vec2) -> Self {
        Self { origin }
    }

    pub fn draw(&self) {
        set_default_camera();

        let Ok(history) = LOG_HISTORY.lock() else {
            return;
        };

        let now = get_time() as f32;
        for (idx, line) in history.recent(now).enumerate() {
            draw_text(
                &line.text,
                self.origin.x,
                self.origin.y + (idx as f32) * LOG_FONT_SIZE,
                LOG_FONT_SIZE,
                line.color,
            );
        }
    }
}
