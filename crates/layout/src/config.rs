use tripsheet_types::Color;

/// Geometry of the event card: the colored header bar and the detail table
/// below it. All lengths are in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMetrics {
    pub header_padding_x: f32,
    pub header_padding_y: f32,
    pub detail_padding_x: f32,
    pub detail_padding_y: f32,
    /// Share of the card width given to the label column. The value
    /// column takes the rest.
    pub label_column_ratio: f32,
    pub details_background: Color,
    pub rule_color: Color,
    pub rule_thickness: f32,
    /// Separator appended to each detail label.
    pub label_suffix: &'static str,
}

impl Default for CardMetrics {
    fn default() -> Self {
        Self {
            header_padding_x: 12.0,
            header_padding_y: 8.0,
            detail_padding_x: 12.0,
            detail_padding_y: 4.0,
            label_column_ratio: 1.2 / 6.5,
            details_background: Color::rgb(0xf8, 0xf9, 0xfa),
            rule_color: Color::rgb(0xe0, 0xe0, 0xe0),
            rule_thickness: 0.5,
            label_suffix: ":",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutConfig {
    pub card: CardMetrics,
}
