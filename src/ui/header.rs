use crate::picture::PictureStatus;
use crate::ui::app::App;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let (dot, dot_style) = match app.picture_status() {
            PictureStatus::Ready => ("●", Style::default().fg(STATUS_OK)),
            PictureStatus::Loading => ("◌", Style::default().fg(STATUS_PENDING)),
            PictureStatus::Failed => ("●", Style::default().fg(STATUS_ERROR)),
        };

        let transform = app.transform();
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(dot, dot_style),
            Span::styled("  ", text_style),
            Span::styled("spinfade", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("rotation {:.0}°", transform.rotation_degrees),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("alpha {:.1}", transform.alpha), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
