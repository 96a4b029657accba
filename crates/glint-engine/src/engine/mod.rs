//! The render engine.
//!
//! `RenderEngine` owns a graphics context, the single solid-color program and
//! one geometry buffer. Every frame it draws `particle_count` rectangles of the
//! configured color at random positions, then asks its scheduler for the next
//! frame. The loop ends on `teardown` (or drop, or context loss).

mod error;
mod options;
mod stats;

pub use error::GraphicsError;
pub use options::EngineOptions;
pub use stats::FrameStats;

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::coords::{Rect, VERTICES_PER_RECT, Vec2, plan_resize};
use crate::gfx::{
    BufferId, GraphicsContext, PresentStatus, ProgramId, ShaderSources, ShaderStage, Surface,
    UniformValue,
};
use crate::paint::Color;
use crate::schedule::{AnimationHandle, FrameScheduler};
use crate::settings::{EngineHandle, RenderConfig, ShapeKind};
use crate::time::FrameClock;

/// Vertex input fed from the geometry buffer.
pub const POSITION_ATTRIBUTE: &str = "position";
/// `vec2` backing width/height uniform.
pub const RESOLUTION_UNIFORM: &str = "resolution";
/// `vec4` normalized RGBA uniform.
pub const COLOR_UNIFORM: &str = "color";

/// GPU objects owned by a live engine.
#[derive(Debug, Copy, Clone)]
struct Resources {
    program: ProgramId,
    geometry: BufferId,
    position_location: u32,
}

impl Resources {
    fn create<C: GraphicsContext>(
        ctx: &mut C,
        sources: &ShaderSources,
    ) -> Result<Self, GraphicsError> {
        let vertex = ctx
            .compile_shader(ShaderStage::Vertex, &sources.vertex)
            .map_err(GraphicsError::ShaderCompileError)?;

        let fragment = match ctx.compile_shader(ShaderStage::Fragment, &sources.fragment) {
            Ok(id) => id,
            Err(log) => {
                ctx.delete_shader(vertex);
                return Err(GraphicsError::ShaderCompileError(log));
            }
        };

        // Stages are not needed once the program exists (or failed to).
        let linked = ctx.link_program(vertex, fragment);
        ctx.delete_shader(vertex);
        ctx.delete_shader(fragment);
        let program = linked.map_err(GraphicsError::ProgramLinkError)?;

        let Some(position_location) = ctx.attribute_location(program, POSITION_ATTRIBUTE) else {
            ctx.delete_program(program);
            return Err(GraphicsError::ProgramLinkError(format!(
                "vertex stage has no `{POSITION_ATTRIBUTE}` input"
            )));
        };

        let geometry = ctx.create_buffer();

        Ok(Self {
            program,
            geometry,
            position_location,
        })
    }

    fn release<C: GraphicsContext>(self, ctx: &mut C) {
        ctx.delete_buffer(self.geometry);
        ctx.delete_program(self.program);
    }
}

/// Per-frame rectangle renderer bound to one surface.
pub struct RenderEngine<C: GraphicsContext, S: FrameScheduler> {
    context: C,
    scheduler: S,
    handle: EngineHandle,

    /// `None` once torn down.
    resources: Option<Resources>,
    pending: Option<AnimationHandle>,

    clock: FrameClock,
    rng: SmallRng,
    rect_size: f32,

    noted_shape: Option<ShapeKind>,
}

impl<C: GraphicsContext, S: FrameScheduler> RenderEngine<C, S> {
    /// Creates the context, builds the program and schedules the first frame.
    ///
    /// Failures are logged and returned; no frame is scheduled in that case.
    pub fn initialize<T>(
        surface: T,
        mut scheduler: S,
        config: RenderConfig,
        options: EngineOptions,
    ) -> Result<Self, GraphicsError>
    where
        T: Surface<Context = C>,
    {
        let mut context = surface.create_context().map_err(|e| {
            log::error!("graphics context unavailable: {e:#}");
            GraphicsError::ContextUnavailable
        })?;

        let resources = Resources::create(&mut context, &options.shaders).inspect_err(|e| {
            log::error!("render engine setup failed: {e}");
        })?;

        let rng = match options.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let backing = context.backing_size();
        log::info!(
            "render engine ready: {}x{} backing, {}",
            backing.width,
            backing.height,
            config
        );

        let pending = Some(scheduler.request_frame());

        Ok(Self {
            context,
            scheduler,
            handle: EngineHandle::new(config),
            resources: Some(resources),
            pending,
            clock: FrameClock::new(),
            rng,
            rect_size: options.rect_size,
            noted_shape: None,
        })
    }

    /// A handle for pushing configuration and pulses from elsewhere.
    pub fn handle(&self) -> EngineHandle {
        self.handle.clone()
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> Arc<RenderConfig> {
        self.handle.config()
    }

    /// Replaces the configuration the next frame renders with.
    pub fn update_config(&self, config: RenderConfig) {
        self.handle.update_config(config);
    }

    /// Requests the one-shot pulse on the next frame.
    pub fn trigger_pulse(&self) {
        self.handle.trigger_pulse();
    }

    /// `false` after teardown or context loss.
    pub fn is_running(&self) -> bool {
        self.resources.is_some()
    }

    /// The handle of the frame currently scheduled, if any.
    pub fn pending_frame(&self) -> Option<AnimationHandle> {
        self.pending
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Runs the frame scheduled under `handle`.
    ///
    /// Returns `None` without touching the context when `handle` is not the
    /// live one (stale or cancelled) or the engine is torn down.
    pub fn run_frame(&mut self, handle: AnimationHandle) -> Option<FrameStats> {
        if self.pending != Some(handle) {
            log::trace!("ignoring frame {} (not scheduled)", handle.id());
            return None;
        }
        self.pending = None;
        let res = self.resources?;

        // Both reads happen once, before any drawing.
        let config = self.handle.config();
        let pulsed = self.handle.take_pulse();

        let time = self.clock.tick();
        if pulsed {
            log::info!("pulse on frame {}", time.frame_index);
        }
        self.note_shape(config.shape_kind());

        let resized = self.sync_backing_size();
        let size = self.context.backing_size();
        let (width, height) = size.as_f32();

        let ctx = &mut self.context;
        ctx.begin_frame();
        ctx.set_viewport(0, 0, size.width, size.height);
        ctx.clear(Color::transparent().to_array());

        ctx.use_program(res.program);
        ctx.set_uniform(RESOLUTION_UNIFORM, UniformValue::Vec2([width, height]));
        ctx.set_uniform(
            COLOR_UNIFORM,
            UniformValue::Vec4(config.color().to_color().to_array()),
        );
        ctx.bind_buffer(res.geometry);
        ctx.vertex_attrib_pointer(res.position_location, 2);

        // One upload + one draw per rectangle. Batching all rectangles into a
        // single upload is the scaling path for large counts.
        let mut draw_calls = 0u32;
        if size.is_empty() {
            log::trace!("backing store is empty; skipping geometry");
        } else {
            let extent = Vec2::splat(self.rect_size);
            for _ in 0..config.particle_count() {
                let origin = Vec2::new(
                    self.rng.gen_range(0.0..width),
                    self.rng.gen_range(0.0..height),
                );
                let rect = Rect::from_origin_size(origin, extent);
                ctx.buffer_data(&rect.triangle_vertices());
                ctx.draw_triangles(0, VERTICES_PER_RECT);
                draw_calls += 1;
            }
        }

        let present = ctx.end_frame();

        let stats = FrameStats {
            time,
            draw_calls,
            vertices: draw_calls * VERTICES_PER_RECT,
            resized,
            pulsed,
            present,
        };

        match present {
            PresentStatus::Lost => {
                log::error!(
                    "graphics context lost on frame {}; stopping",
                    time.frame_index
                );
                self.teardown();
            }
            PresentStatus::Skipped => {
                log::debug!("frame {} skipped by surface", time.frame_index);
                self.pending = Some(self.scheduler.request_frame());
            }
            PresentStatus::Presented => {
                log::trace!(
                    "frame {}: {} draws, dt={:.4}s",
                    time.frame_index,
                    draw_calls,
                    time.dt
                );
                self.pending = Some(self.scheduler.request_frame());
            }
        }

        Some(stats)
    }

    /// Cancels the scheduled frame and releases the program and buffer.
    ///
    /// Safe to call repeatedly; later calls do nothing.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if let Some(res) = self.resources.take() {
            res.release(&mut self.context);
            log::info!("render engine torn down");
        }
    }

    fn sync_backing_size(&mut self) -> bool {
        let backing = self.context.backing_size();
        let display = self.context.display_size();
        match plan_resize(backing, display) {
            Some(next) => {
                log::debug!(
                    "resizing backing store {}x{} -> {}x{}",
                    backing.width,
                    backing.height,
                    next.width,
                    next.height
                );
                self.context.resize_backing(next);
                true
            }
            None => false,
        }
    }

    fn note_shape(&mut self, shape: ShapeKind) {
        if shape != ShapeKind::Square && self.noted_shape != Some(shape) {
            log::debug!("shape `{shape}` is drawn as a rectangle");
            self.noted_shape = Some(shape);
        }
    }
}

impl<C: GraphicsContext, S: FrameScheduler> Drop for RenderEngine<C, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::SurfaceSize;
    use crate::gfx::{GfxCommand, HeadlessContext, HeadlessSurface};
    use crate::schedule::FrameQueue;
    use crate::settings::HexColor;

    type Engine = RenderEngine<HeadlessContext, FrameQueue>;

    fn options() -> EngineOptions {
        EngineOptions {
            seed: Some(7),
            ..EngineOptions::default()
        }
    }

    fn config(count: u32, color: &str) -> RenderConfig {
        RenderConfig::default()
            .with_particle_count(count)
            .with_color(HexColor::parse(color).unwrap())
    }

    fn engine(width: u32, height: u32, config: RenderConfig) -> Engine {
        let surface = HeadlessSurface::new(width, height);
        RenderEngine::initialize(surface, FrameQueue::new(), config, options())
            .unwrap()
    }

    /// Fires the scheduled frame, returning its stats and the commands it issued.
    fn step(engine: &mut Engine) -> Option<(FrameStats, Vec<GfxCommand>)> {
        engine.context_mut().take_commands();
        let handle = engine.scheduler_mut().take_due()?;
        let stats = engine.run_frame(handle)?;
        Some((stats, engine.context_mut().take_commands()))
    }

    fn draws(cmds: &[GfxCommand]) -> Vec<(u32, u32)> {
        cmds.iter()
            .filter_map(|c| match c {
                GfxCommand::DrawTriangles { first, count } => Some((*first, *count)),
                _ => None,
            })
            .collect()
    }

    fn uniform(cmds: &[GfxCommand], name: &str) -> Option<UniformValue> {
        cmds.iter().rev().find_map(|c| match c {
            GfxCommand::Uniform { name: n, value } if n == name => Some(*value),
            _ => None,
        })
    }

    fn uploads(cmds: &[GfxCommand]) -> Vec<Vec<f32>> {
        cmds.iter()
            .filter_map(|c| match c {
                GfxCommand::BufferData { data, .. } => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    // ── frame contents ────────────────────────────────────────────────────

    #[test]
    fn first_frame_end_to_end() {
        let green = HexColor::parse("#00FF00").unwrap();
        let cfg = RenderConfig::new(3, ShapeKind::Circle, green, 1.0, false).unwrap();
        let mut e = engine(800, 600, cfg);
        let (stats, cmds) = step(&mut e).unwrap();

        assert!(cmds.contains(&GfxCommand::Clear([0.0, 0.0, 0.0, 0.0])));
        assert_eq!(
            uniform(&cmds, COLOR_UNIFORM),
            Some(UniformValue::Vec4([0.0, 1.0, 0.0, 1.0]))
        );
        assert_eq!(
            uniform(&cmds, RESOLUTION_UNIFORM),
            Some(UniformValue::Vec2([800.0, 600.0]))
        );
        assert_eq!(draws(&cmds), vec![(0, 6); 3]);
        assert_eq!(stats.draw_calls, 3);
        assert_eq!(stats.vertices, 18);

        for data in uploads(&cmds) {
            assert_eq!(data.len(), 12);
            let (x, y) = (data[0], data[1]);
            assert!((0.0..800.0).contains(&x), "x={x}");
            assert!((0.0..600.0).contains(&y), "y={y}");
            // 10×10: far corner is the last vertex.
            assert_eq!((data[10], data[11]), (x + 10.0, y + 10.0));
        }
    }

    #[test]
    fn frame_order_is_clear_then_draws() {
        let mut e = engine(100, 100, config(1, "#ffffff"));
        let (_, cmds) = step(&mut e).unwrap();
        let pos = |pred: &dyn Fn(&GfxCommand) -> bool| cmds.iter().position(|c| pred(c)).unwrap();

        let begin = pos(&|c| *c == GfxCommand::BeginFrame);
        let viewport = pos(&|c| matches!(c, GfxCommand::Viewport { .. }));
        let clear = pos(&|c| matches!(c, GfxCommand::Clear(_)));
        let upload = pos(&|c| matches!(c, GfxCommand::BufferData { .. }));
        let draw = pos(&|c| matches!(c, GfxCommand::DrawTriangles { .. }));
        let end = pos(&|c| matches!(c, GfxCommand::EndFrame(_)));

        assert!(begin < viewport && viewport < clear && clear < upload);
        assert!(upload < draw && draw < end);
        assert!(cmds.contains(&GfxCommand::Viewport {
            x: 0,
            y: 0,
            width: 100,
            height: 100
        }));
    }

    #[test]
    fn n_particles_n_draws_every_frame() {
        let mut e = engine(640, 480, config(250, "#123456"));
        for _ in 0..3 {
            let (stats, cmds) = step(&mut e).unwrap();
            assert_eq!(draws(&cmds).len(), 250);
            assert!(draws(&cmds).iter().all(|&(_, count)| count == 6));
            assert_eq!(uploads(&cmds).len(), 250);
            assert_eq!(stats.draw_calls, 250);
        }
    }

    #[test]
    fn zero_particles_still_clears() {
        let mut e = engine(640, 480, config(0, "#123456"));
        let (stats, cmds) = step(&mut e).unwrap();
        assert!(draws(&cmds).is_empty());
        assert!(cmds.iter().any(|c| matches!(c, GfxCommand::Clear(_))));
        assert_eq!(stats.present, PresentStatus::Presented);
    }

    #[test]
    fn geometry_buffer_is_reused() {
        let mut e = engine(640, 480, config(5, "#123456"));
        step(&mut e).unwrap();
        step(&mut e).unwrap();
        let created = e
            .context()
            .commands()
            .iter()
            .filter(|c| matches!(c, GfxCommand::CreateBuffer(_)))
            .count();
        assert_eq!(created, 0);
        assert_eq!(e.context().live_buffers(), 1);
    }

    #[test]
    fn seeded_placement_is_deterministic() {
        let mut a = engine(800, 600, config(4, "#ff0000"));
        let mut b = engine(800, 600, config(4, "#ff0000"));
        let (_, ca) = step(&mut a).unwrap();
        let (_, cb) = step(&mut b).unwrap();
        assert_eq!(uploads(&ca), uploads(&cb));
    }

    // ── configuration ─────────────────────────────────────────────────────

    #[test]
    fn update_config_applies_on_next_frame() {
        let mut e = engine(800, 600, config(2, "#ff0000"));
        step(&mut e).unwrap();

        e.update_config(config(5, "#0000ff"));
        let (stats, cmds) = step(&mut e).unwrap();
        assert_eq!(stats.draw_calls, 5);
        assert_eq!(
            uniform(&cmds, COLOR_UNIFORM),
            Some(UniformValue::Vec4([0.0, 0.0, 1.0, 1.0]))
        );
    }

    #[test]
    fn last_update_before_frame_wins() {
        let mut e = engine(800, 600, config(2, "#ff0000"));
        let h = e.handle();
        h.update_config(config(9, "#00ff00"));
        h.update_config(config(4, "#ffffff"));
        let (stats, cmds) = step(&mut e).unwrap();
        assert_eq!(stats.draw_calls, 4);
        assert_eq!(
            uniform(&cmds, COLOR_UNIFORM),
            Some(UniformValue::Vec4([1.0, 1.0, 1.0, 1.0]))
        );
    }

    #[test]
    fn unused_fields_do_not_change_output() {
        let base = config(3, "#336699");
        let variant = base
            .clone()
            .with_shape_kind(ShapeKind::Triangle)
            .with_speed(4.0)
            .unwrap()
            .with_cursor_interaction(false);

        let mut a = engine(800, 600, base);
        let mut b = engine(800, 600, variant);
        let (_, ca) = step(&mut a).unwrap();
        let (_, cb) = step(&mut b).unwrap();
        assert_eq!(ca, cb);
    }

    // ── pulse ─────────────────────────────────────────────────────────────

    #[test]
    fn pulse_is_observed_by_one_frame() {
        let mut e = engine(800, 600, config(1, "#ff0000"));
        e.trigger_pulse();
        let pulsed: Vec<bool> = (0..4).map(|_| step(&mut e).unwrap().0.pulsed).collect();
        assert_eq!(pulsed, vec![true, false, false, false]);
    }

    #[test]
    fn pulse_between_frames_lands_on_next() {
        let mut e = engine(800, 600, config(1, "#ff0000"));
        assert!(!step(&mut e).unwrap().0.pulsed);
        e.handle().trigger_pulse();
        assert!(step(&mut e).unwrap().0.pulsed);
        assert!(!step(&mut e).unwrap().0.pulsed);
    }

    // ── sizing ────────────────────────────────────────────────────────────

    #[test]
    fn display_resize_updates_backing_once() {
        let mut e = engine(800, 600, config(1, "#ff0000"));
        step(&mut e).unwrap();

        e.context_mut().set_display_size(SurfaceSize::new(1024, 768));
        let mut resizes = 0;
        let mut flags = Vec::new();
        for _ in 0..3 {
            let (stats, cmds) = step(&mut e).unwrap();
            resizes += cmds
                .iter()
                .filter(|c| matches!(c, GfxCommand::ResizeBacking(_)))
                .count();
            flags.push(stats.resized);
            assert_eq!(
                uniform(&cmds, RESOLUTION_UNIFORM),
                Some(UniformValue::Vec2([1024.0, 768.0]))
            );
        }
        assert_eq!(flags, vec![true, false, false]);
        assert_eq!(resizes, 1);
        assert_eq!(e.context().backing_size(), SurfaceSize::new(1024, 768));
    }

    #[test]
    fn default_backing_tracks_display_on_first_frame() {
        let surface = HeadlessSurface::new(400, 300).with_backing(SurfaceSize::new(300, 150));
        let cfg = config(1, "#ff0000");
        let mut e: Engine = RenderEngine::initialize(surface, FrameQueue::new(), cfg, options())
            .unwrap();
        let (stats, cmds) = step(&mut e).unwrap();
        assert!(stats.resized);
        let resized = GfxCommand::ResizeBacking(SurfaceSize::new(400, 300));
        assert!(cmds.contains(&resized));
    }

    #[test]
    fn zero_display_keeps_backing_and_skips_geometry() {
        let surface = HeadlessSurface::new(0, 0);
        let cfg = config(3, "#ff0000");
        let mut e: Engine = RenderEngine::initialize(surface, FrameQueue::new(), cfg, options())
            .unwrap();
        let (stats, cmds) = step(&mut e).unwrap();
        assert!(!stats.resized);
        assert!(draws(&cmds).is_empty());
        assert!(e.pending_frame().is_some());
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn teardown_stops_frames() {
        let mut e = engine(800, 600, config(3, "#ff0000"));
        step(&mut e).unwrap();
        let scheduled = e.pending_frame().unwrap();

        e.teardown();
        e.context_mut().take_commands();

        assert!(!e.is_running());
        assert_eq!(e.scheduler_mut().take_due(), None);
        assert!(e.run_frame(scheduled).is_none());
        assert!(draws(e.context().commands()).is_empty());
    }

    #[test]
    fn teardown_releases_resources_once() {
        let mut e = engine(800, 600, config(1, "#ff0000"));
        assert_eq!(e.context().live_programs(), 1);
        e.teardown();
        assert_eq!(e.context().live_programs(), 0);
        assert_eq!(e.context().live_buffers(), 0);

        let before = e.context().commands().len();
        e.teardown();
        assert_eq!(e.context().commands().len(), before);
    }

    #[test]
    fn teardown_before_first_frame() {
        let mut e = engine(800, 600, config(1, "#ff0000"));
        e.teardown();
        assert!(step(&mut e).is_none());
    }

    #[test]
    fn stale_handle_is_ignored() {
        let mut e = engine(800, 600, config(1, "#ff0000"));
        assert!(e.run_frame(AnimationHandle::new(999)).is_none());
        assert!(step(&mut e).is_some());
    }

    #[test]
    fn shaders_released_after_link() {
        let e = engine(800, 600, config(1, "#ff0000"));
        assert_eq!(e.context().live_shaders(), 0);
    }

    #[test]
    fn lost_context_tears_down() {
        let mut e = engine(800, 600, config(1, "#ff0000"));
        e.context_mut().fail_next_present(PresentStatus::Lost);
        let (stats, _) = step(&mut e).unwrap();
        assert_eq!(stats.present, PresentStatus::Lost);
        assert!(!e.is_running());
        assert!(e.pending_frame().is_none());
        assert_eq!(e.context().live_programs(), 0);
    }

    #[test]
    fn skipped_present_keeps_running() {
        let mut e = engine(800, 600, config(1, "#ff0000"));
        e.context_mut().fail_next_present(PresentStatus::Skipped);
        let (stats, _) = step(&mut e).unwrap();
        assert_eq!(stats.present, PresentStatus::Skipped);
        assert!(step(&mut e).is_some());
    }

    // ── initialization failures ───────────────────────────────────────────

    fn init_with(
        surface: HeadlessSurface,
        shaders: ShaderSources,
    ) -> Result<Engine, GraphicsError> {
        let options = EngineOptions {
            shaders,
            ..options()
        };
        RenderEngine::initialize(surface, FrameQueue::new(), RenderConfig::default(), options)
    }

    #[test]
    fn unavailable_context() {
        let err = init_with(HeadlessSurface::unavailable(), ShaderSources::default()).err();
        assert_eq!(err, Some(GraphicsError::ContextUnavailable));
    }

    #[test]
    fn vertex_compile_error() {
        let shaders = ShaderSources::new("@vertex fn vs_main( {", crate::gfx::FRAGMENT_SHADER);
        let err = init_with(HeadlessSurface::new(8, 8), shaders).err();
        assert!(matches!(
            err,
            Some(GraphicsError::ShaderCompileError(log)) if !log.is_empty()
        ));
    }

    #[test]
    fn fragment_compile_error() {
        let shaders = ShaderSources::new(crate::gfx::VERTEX_SHADER, "@fragment fn fs_main() -> {");
        let err = init_with(HeadlessSurface::new(8, 8), shaders).err();
        assert!(matches!(err, Some(GraphicsError::ShaderCompileError(_))));
    }

    #[test]
    fn link_error() {
        let fragment = r#"
            @fragment
            fn fs_main(@location(0) uv: vec2<f32>) -> @location(0) vec4<f32> {
                return vec4<f32>(uv, 0.0, 1.0);
            }
        "#;
        let shaders = ShaderSources::new(crate::gfx::VERTEX_SHADER, fragment);
        let err = init_with(HeadlessSurface::new(8, 8), shaders).err();
        assert!(matches!(
            err,
            Some(GraphicsError::ProgramLinkError(log)) if log.contains("uv")
        ));
    }

    #[test]
    fn missing_position_attribute_is_link_error() {
        let vertex = r#"
            @vertex
            fn vs_main(@location(0) corner: vec2<f32>) -> @builtin(position) vec4<f32> {
                return vec4<f32>(corner, 0.0, 1.0);
            }
        "#;
        let shaders = ShaderSources::new(vertex, crate::gfx::FRAGMENT_SHADER);
        let err = init_with(HeadlessSurface::new(8, 8), shaders).err();
        assert!(matches!(
            err,
            Some(GraphicsError::ProgramLinkError(log)) if log.contains("position")
        ));
    }

    #[test]
    fn failed_init_schedules_nothing() {
        let mut scheduler = FrameQueue::new();
        let shaders = ShaderSources::new("not wgsl", crate::gfx::FRAGMENT_SHADER);
        let options = EngineOptions {
            shaders,
            ..options()
        };
        {
            let result: Result<RenderEngine<HeadlessContext, &mut FrameQueue>, _> =
                RenderEngine::initialize(
                    HeadlessSurface::new(8, 8),
                    &mut scheduler,
                    RenderConfig::default(),
                    options,
                );
            assert!(result.is_err());
        }
        assert_eq!(scheduler.pending(), None);
    }
}
