use std::sync::Arc;

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::transform::TransformIntent;
use crate::ui::app::App;
use crate::ui::canvas::PictureView;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, split_body};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT};

/// The four buttons in display order.
const BUTTONS: [(TransformIntent, &str); 4] = [
    (TransformIntent::RotateLeft, "← Rotate Left"),
    (TransformIntent::RotateRight, "→ Rotate Right"),
    (TransformIntent::IncreaseOpacity, "↑ Opacity +"),
    (TransformIntent::DecreaseOpacity, "↓ Opacity -"),
];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let (picture_area, controls_area) = split_body(body);

    frame.render_widget(Header::new().widget(app), header);

    frame.render_widget(Clear, picture_area);
    if let Some(slot) = app.picture() {
        frame.render_widget(
            PictureView::new(Arc::clone(slot), *app.transform()),
            picture_area,
        );
    }

    frame.render_widget(controls(app.active_button()), controls_area);
    frame.render_widget(Footer::new().widget(footer), footer);
}

/// The button row, with the most recent press highlighted.
fn controls(active: Option<TransformIntent>) -> Paragraph<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (index, (intent, label)) in BUTTONS.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        let mut style = Style::default().fg(HEADER_TEXT);
        if active == Some(*intent) {
            style = style.bg(ACTIVE_HIGHLIGHT);
        }
        spans.push(Span::styled(format!("[ {label} ]"), style));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
