use crate::gfx::ShaderSources;

/// Construction-time engine parameters.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Edge length of each drawn rectangle, in pixels.
    pub rect_size: f32,

    /// Seed for rectangle placement. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Program sources. Defaults to the built-in solid-color program.
    pub shaders: ShaderSources,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            rect_size: 10.0,
            seed: None,
            shaders: ShaderSources::default(),
        }
    }
}
