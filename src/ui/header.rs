use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title bar; the marker switches to the accent color while a draft exists.
    pub fn widget(&self, editing: bool) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let marker_style = Style::default().fg(if editing { ACCENT } else { STATUS_OK });
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", marker_style),
            Span::styled("  ", text_style),
            Span::styled("Region Selector", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(if editing { "editing" } else { "saved" }, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
