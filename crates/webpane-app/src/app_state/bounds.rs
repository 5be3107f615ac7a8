//! Coordinate conversion between screen bounds and wry rects.

use webpane_common::Bounds;
use winit::window::Window;

// =============================================================================
// COORDINATE CONVERSION
// =============================================================================

/// Convert `Bounds` (f64 logical coords) to a wry `Rect`.
pub fn bounds_to_wry(bounds: &Bounds) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(bounds.x, bounds.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(bounds.width, bounds.height)),
    }
}

/// Logical bounds of the window's content area.
pub fn window_bounds(window: &Window) -> Bounds {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    Bounds::from_size(size.width, size.height)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_convert_to_logical_rect() {
        let bounds = Bounds {
            x: 10.0,
            y: 20.0,
            width: 800.0,
            height: 600.0,
        };
        let rect = bounds_to_wry(&bounds);

        match rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.x - 10.0).abs() < f64::EPSILON);
                assert!((pos.y - 20.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }
        match rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 800.0).abs() < f64::EPSILON);
                assert!((size.height - 600.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }

    #[test]
    fn empty_bounds_convert_to_zero_rect() {
        let rect = bounds_to_wry(&Bounds::default());
        match rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!(size.width.abs() < f64::EPSILON);
                assert!(size.height.abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }
}
