use tripsheet_types::Color;

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Color components as the three operands of `rg`/`RG`.
pub fn color_operands(color: Color) -> [f32; 3] {
    color.to_unit_rgb()
}
