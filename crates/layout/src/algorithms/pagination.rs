use tripsheet_types::Rect;

/// Tolerance for floating point drift when accumulating line heights.
pub const EPSILON: f32 = 0.01;

pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Checks whether a slice of `height` fits below `cursor_y`.
///
/// * `cursor_y`: The current Y position relative to the top of `bounds`.
/// * `height`: The height the next slice needs.
/// * `bounds`: The content area of the page.
pub fn check_fit(cursor_y: f32, height: f32, bounds: Rect) -> BreakAnalysis {
    let available = (bounds.height - cursor_y).max(0.0);
    BreakAnalysis {
        should_break: height > available + EPSILON,
        remaining_height: available,
    }
}

/// Whether a slice of `height` fits on a page with nothing else on it.
pub fn fits_empty_page(height: f32, bounds: Rect) -> bool {
    !check_fit(0.0, height, bounds).should_break
}
