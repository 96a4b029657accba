use glint_engine::core::{App, AppControl};
use glint_engine::engine::FrameStats;
use glint_engine::gfx::PresentStatus;
use glint_engine::input::{InputEvent, Key};
use glint_engine::settings::{EngineHandle, HexColor, MIN_SPEED, RenderConfig, ShapeKind};

/// Particle count step for the arrow keys.
pub const COUNT_STEP: u32 = 10;

/// Speed step for `+`/`-`.
pub const SPEED_STEP: f32 = 0.1;

/// Colors `C` cycles through.
pub const PALETTE: [HexColor; 7] = [
    HexColor::from_rgb(0xff, 0x00, 0x00),
    HexColor::from_rgb(0x00, 0xff, 0x00),
    HexColor::from_rgb(0x00, 0x00, 0xff),
    HexColor::from_rgb(0xff, 0xff, 0x00),
    HexColor::from_rgb(0xff, 0x00, 0xff),
    HexColor::from_rgb(0x00, 0xff, 0xff),
    HexColor::from_rgb(0xff, 0xff, 0xff),
];

const HELP: &str =
    "keys: Up/Down count, 1/2/3 shape, C color, +/- speed, I cursor, Space pulse, Esc quit";

/// What a key press asks of the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Update(RenderConfig),
    Pulse,
    Exit,
    Ignore,
}

/// Maps one key press onto the current configuration.
pub fn apply_key(key: Key, config: &RenderConfig) -> Action {
    let count = config.particle_count();
    let next = match key {
        Key::ArrowUp => config.clone().with_particle_count(count.saturating_add(COUNT_STEP)),
        Key::ArrowDown => config.clone().with_particle_count(count.saturating_sub(COUNT_STEP)),

        Key::Digit1 => config.clone().with_shape_kind(ShapeKind::Circle),
        Key::Digit2 => config.clone().with_shape_kind(ShapeKind::Square),
        Key::Digit3 => config.clone().with_shape_kind(ShapeKind::Triangle),

        Key::C => config.clone().with_color(next_color(config.color())),

        Key::Plus | Key::Minus => {
            let delta = if key == Key::Plus { SPEED_STEP } else { -SPEED_STEP };
            match config.clone().with_speed(step_speed(config.speed(), delta)) {
                Ok(next) => next,
                Err(e) => {
                    log::warn!("speed change rejected: {e}");
                    return Action::Ignore;
                }
            }
        }

        Key::I => config
            .clone()
            .with_cursor_interaction(!config.cursor_interaction()),

        Key::Space => return Action::Pulse,
        Key::Escape => return Action::Exit,
        _ => return Action::Ignore,
    };

    if next == *config {
        Action::Ignore
    } else {
        Action::Update(next)
    }
}

fn next_color(current: HexColor) -> HexColor {
    let next = PALETTE
        .iter()
        .position(|c| *c == current)
        .map_or(0, |i| (i + 1) % PALETTE.len());
    PALETTE[next]
}

/// Steps speed by `delta`, rounded to one decimal and floored at the minimum.
fn step_speed(speed: f32, delta: f32) -> f32 {
    (((speed + delta) * 10.0).round() / 10.0).max(MIN_SPEED)
}

/// Keyboard control surface for a windowed engine.
#[derive(Debug, Default)]
pub struct ControlPanel {
    frames: u64,
    skipped: u64,
}

impl ControlPanel {
    /// How often frame stats are logged.
    const REPORT_EVERY: u64 = 300;

    pub fn new() -> Self {
        Self::default()
    }
}

impl App for ControlPanel {
    fn on_start(&mut self, handle: &EngineHandle) {
        log::info!("studio started: {}", handle.config());
        log::info!("{HELP}");
    }

    fn on_input(&mut self, event: &InputEvent, handle: &EngineHandle) -> AppControl {
        let Some(key) = event.pressed_key() else {
            return AppControl::Continue;
        };

        match apply_key(key, &handle.config()) {
            Action::Update(config) => {
                log::info!("config: {config}");
                handle.update_config(config);
            }
            Action::Pulse => handle.trigger_pulse(),
            Action::Exit => return AppControl::Exit,
            Action::Ignore => {}
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, stats: &FrameStats) -> AppControl {
        self.frames += 1;
        if stats.present == PresentStatus::Skipped {
            self.skipped += 1;
        }
        if self.frames % Self::REPORT_EVERY == 0 {
            log::debug!(
                "{} frames ({} skipped), last: {} draws, dt={:.4}s",
                self.frames,
                self.skipped,
                stats.draw_calls,
                stats.time.dt
            );
        }
        AppControl::Continue
    }
}
