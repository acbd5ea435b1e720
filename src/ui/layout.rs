use ratatui::layout::Rect;

/// Split the frame into header, body, and footer bands.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Carve the controls row off the bottom of the body.
pub fn split_body(body: Rect) -> (Rect, Rect) {
    let controls_height = 3.min(body.height);
    let picture = Rect {
        height: body.height.saturating_sub(controls_height),
        ..body
    };
    let controls = Rect {
        y: body.y + body.height.saturating_sub(controls_height),
        height: controls_height,
        ..body
    };
    (picture, controls)
}
