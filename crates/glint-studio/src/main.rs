mod controls;
mod headless;

use anyhow::{Context, Result, bail};

use glint_engine::device::GpuInit;
use glint_engine::engine::EngineOptions;
use glint_engine::logging::{LoggingConfig, init_logging};
use glint_engine::settings::RenderConfig;
use glint_engine::window::{Runtime, RuntimeConfig};

use controls::ControlPanel;

enum Mode {
    Window,
    Headless(u64),
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Mode> {
    match args.next().as_deref() {
        None => Ok(Mode::Window),
        Some("--headless") => {
            let frames = args
                .next()
                .context("--headless needs a frame count")?
                .parse()
                .context("frame count must be a non-negative integer")?;
            Ok(Mode::Headless(frames))
        }
        Some(other) => {
            bail!("unknown argument `{other}` (usage: glint-studio [--headless <frames>])")
        }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RenderConfig::default();
    let options = EngineOptions::default();

    match parse_args(std::env::args().skip(1))? {
        Mode::Window => Runtime::run(
            RuntimeConfig {
                title: "Glint Studio".to_string(),
                ..Default::default()
            },
            GpuInit::default(),
            options,
            config,
            ControlPanel::new(),
        ),
        Mode::Headless(frames) => {
            let report = headless::run(frames, config, options)?;
            log::info!(
                "headless run done: {} frames, {} draws, {} commands",
                report.frames,
                report.draw_calls,
                report.commands
            );
            Ok(())
        }
    }
}
