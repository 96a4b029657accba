use super::SurfaceSize;

/// Decides whether the backing store must be resized to track the display size.
///
/// Returns `None` when the sizes already match, or when the display size has
/// zero area (surfaces cannot be configured at 0×0; the previous backing store
/// is kept until the host reports a usable size again).
pub fn plan_resize(backing: SurfaceSize, display: SurfaceSize) -> Option<SurfaceSize> {
    if display.is_empty() || backing == display {
        None
    } else {
        Some(display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(w: u32, h: u32) -> SurfaceSize {
        SurfaceSize::new(w, h)
    }

    #[test]
    fn unchanged_is_noop() {
        assert_eq!(plan_resize(s(800, 600), s(800, 600)), None);
    }

    #[test]
    fn grown_display_resizes() {
        assert_eq!(plan_resize(s(800, 600), s(1024, 768)), Some(s(1024, 768)));
    }

    #[test]
    fn single_axis_change_resizes() {
        assert_eq!(plan_resize(s(800, 600), s(800, 601)), Some(s(800, 601)));
    }

    #[test]
    fn zero_area_display_is_deferred() {
        assert_eq!(plan_resize(s(800, 600), s(0, 600)), None);
        assert_eq!(plan_resize(s(800, 600), s(0, 0)), None);
    }

    #[test]
    fn first_real_size_after_zero_backing() {
        assert_eq!(plan_resize(s(0, 0), s(640, 480)), Some(s(640, 480)));
    }
}
