use ratatui::layout::Rect;

/// A box `percent_x`% as wide as `area` and `height` rows tall, centered in
/// `area` and clipped to it.
pub fn centered_box(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (area.width as u32 * percent_x as u32 / 100).max(1) as u16;
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
