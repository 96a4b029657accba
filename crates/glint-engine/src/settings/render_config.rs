use std::fmt;
use std::str::FromStr;

use super::{ConfigError, HexColor};

/// Lowest accepted animation speed.
pub const MIN_SPEED: f32 = 0.1;

/// Shape selected in the control surface.
///
/// The renderer draws every kind as a rectangle; the value is carried so a
/// shape model can branch on it later.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    #[default]
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle];

    pub const fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownShape(s.to_string()))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete settings snapshot consumed by one render frame.
///
/// Fields are private so the invariants (`speed >= MIN_SPEED`, well-formed
/// color) hold for every value in circulation. Edits produce a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    particle_count: u32,
    shape_kind: ShapeKind,
    color: HexColor,
    speed: f32,
    cursor_interaction: bool,
}

impl RenderConfig {
    pub fn new(
        particle_count: u32,
        shape_kind: ShapeKind,
        color: HexColor,
        speed: f32,
        cursor_interaction: bool,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            particle_count,
            shape_kind,
            color,
            speed: check_speed(speed)?,
            cursor_interaction,
        })
    }

    #[inline]
    pub fn particle_count(&self) -> u32 {
        self.particle_count
    }

    #[inline]
    pub fn shape_kind(&self) -> ShapeKind {
        self.shape_kind
    }

    #[inline]
    pub fn color(&self) -> HexColor {
        self.color
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn cursor_interaction(&self) -> bool {
        self.cursor_interaction
    }

    /// Each rectangle stages 48 bytes of vertex data per frame. On wgpu the
    /// frame's geometry must fit one device buffer (`max_buffer_size`, 256 MiB
    /// by default, about 5.5 million rectangles); rectangles past that limit
    /// are not drawn.
    pub fn with_particle_count(mut self, particle_count: u32) -> Self {
        self.particle_count = particle_count;
        self
    }

    pub fn with_shape_kind(mut self, shape_kind: ShapeKind) -> Self {
        self.shape_kind = shape_kind;
        self
    }

    pub fn with_color(mut self, color: HexColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Result<Self, ConfigError> {
        self.speed = check_speed(speed)?;
        Ok(self)
    }

    pub fn with_cursor_interaction(mut self, enabled: bool) -> Self {
        self.cursor_interaction = enabled;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            particle_count: 100,
            shape_kind: ShapeKind::Circle,
            color: HexColor::default(),
            speed: 1.0,
            cursor_interaction: true,
        }
    }
}

impl fmt::Display for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count={} shape={} color={} speed={:.1} cursor={}",
            self.particle_count, self.shape_kind, self.color, self.speed, self.cursor_interaction
        )
    }
}

fn check_speed(speed: f32) -> Result<f32, ConfigError> {
    // Written negated so NaN is rejected too.
    if !(speed >= MIN_SPEED) {
        return Err(ConfigError::SpeedTooLow(speed));
    }
    Ok(speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_control_panel() {
        let c = RenderConfig::default();
        assert_eq!(c.particle_count(), 100);
        assert_eq!(c.shape_kind(), ShapeKind::Circle);
        assert_eq!(c.color().to_string(), "#ff0000");
        assert_eq!(c.speed(), 1.0);
        assert!(c.cursor_interaction());
    }

    #[test]
    fn speed_floor_is_inclusive() {
        assert!(RenderConfig::default().with_speed(MIN_SPEED).is_ok());
        assert_eq!(
            RenderConfig::default().with_speed(0.05),
            Err(ConfigError::SpeedTooLow(0.05))
        );
    }

    #[test]
    fn nan_speed_rejected() {
        assert!(RenderConfig::default().with_speed(f32::NAN).is_err());
    }

    #[test]
    fn new_validates_speed() {
        let err = RenderConfig::new(1, ShapeKind::Square, HexColor::default(), 0.0, false);
        assert_eq!(err, Err(ConfigError::SpeedTooLow(0.0)));
    }

    #[test]
    fn zero_particles_allowed() {
        assert_eq!(
            RenderConfig::default().with_particle_count(0).particle_count(),
            0
        );
    }

    #[test]
    fn shape_parse() {
        assert_eq!("circle".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
        assert_eq!("Triangle".parse::<ShapeKind>(), Ok(ShapeKind::Triangle));
        assert_eq!(
            "hexagon".parse::<ShapeKind>(),
            Err(ConfigError::UnknownShape("hexagon".into()))
        );
    }

    #[test]
    fn builders_replace_single_fields() {
        let base = RenderConfig::default();
        let next = base
            .clone()
            .with_shape_kind(ShapeKind::Square)
            .with_cursor_interaction(false);
        assert_eq!(next.shape_kind(), ShapeKind::Square);
        assert!(!next.cursor_interaction());
        assert_eq!(next.particle_count(), base.particle_count());
        assert_eq!(next.color(), base.color());
    }
}
