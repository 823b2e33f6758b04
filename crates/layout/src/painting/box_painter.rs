use crate::elements::{LayoutElement, PositionedElement, RectElement};
use tripsheet_types::{Color, Rect};

/// A filled rectangle covering `bounds`.
pub fn fill(bounds: Rect, color: Color) -> PositionedElement {
    PositionedElement {
        x: bounds.x,
        y: bounds.y,
        width: bounds.width,
        height: bounds.height,
        element: LayoutElement::Rectangle(RectElement { fill: color }),
    }
}

/// A horizontal rule drawn along the inside of the bottom edge of `bounds`.
pub fn rule_below(bounds: Rect, color: Color, thickness: f32) -> PositionedElement {
    let thickness = thickness.min(bounds.height);
    fill(
        Rect::new(bounds.x, bounds.bottom() - thickness, bounds.width, thickness),
        color,
    )
}
