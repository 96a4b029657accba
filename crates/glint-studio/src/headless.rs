use anyhow::{Context, Result};

use glint_engine::engine::{EngineOptions, RenderEngine};
use glint_engine::gfx::{GfxCommand, HeadlessSurface};
use glint_engine::schedule::FrameQueue;
use glint_engine::settings::RenderConfig;

/// Surface size for headless runs.
pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 600;

/// Totals of a headless run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessReport {
    pub frames: u64,
    pub draw_calls: u64,
    pub commands: u64,
}

/// Drives the engine on an off-screen surface for `frames` frames.
pub fn run(frames: u64, config: RenderConfig, options: EngineOptions) -> Result<HeadlessReport> {
    let mut engine = RenderEngine::initialize(
        HeadlessSurface::new(WIDTH, HEIGHT),
        FrameQueue::new(),
        config,
        options,
    )
    .context("headless engine failed to start")?;

    let mut report = HeadlessReport::default();
    engine.context_mut().take_commands();

    while report.frames < frames {
        let Some(due) = engine.scheduler_mut().take_due() else {
            log::warn!("no frame scheduled after {} frames", report.frames);
            break;
        };
        let Some(stats) = engine.run_frame(due) else {
            break;
        };

        let commands = engine.context_mut().take_commands();
        let uploaded: usize = commands
            .iter()
            .map(|c| match c {
                GfxCommand::BufferData { data, .. } => data.len(),
                _ => 0,
            })
            .sum();

        log::info!(
            "frame {}: {} draws, {} vertices, {} floats uploaded, {:?}",
            stats.time.frame_index,
            stats.draw_calls,
            stats.vertices,
            uploaded,
            stats.present
        );

        report.frames += 1;
        report.draw_calls += u64::from(stats.draw_calls);
        report.commands += commands.len() as u64;
    }

    engine.teardown();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_engine::gfx::ShaderSources;

    #[test]
    fn runs_requested_frames() {
        let config = RenderConfig::default().with_particle_count(5);
        let options = EngineOptions {
            seed: Some(1),
            ..Default::default()
        };

        let report = run(3, config, options).unwrap();
        assert_eq!(report.frames, 3);
        assert_eq!(report.draw_calls, 15);
        assert!(report.commands > 15);
    }

    #[test]
    fn zero_frames_is_a_no_op() {
        let report = run(0, RenderConfig::default(), EngineOptions::default()).unwrap();
        assert_eq!(report, HeadlessReport::default());
    }

    #[test]
    fn broken_shader_fails_to_start() {
        let shaders = ShaderSources::new("not wgsl", glint_engine::gfx::FRAGMENT_SHADER);
        let options = EngineOptions {
            shaders,
            ..Default::default()
        };
        assert!(run(1, RenderConfig::default(), options).is_err());
    }
}
