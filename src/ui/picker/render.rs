use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::picker::state::{PickerState, MAX_VISIBLE_ROWS};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};

const PICKER_WIDTH: u16 = 64;

/// Draw the select list on top of the settings dialog.
pub fn render_picker(frame: &mut Frame, area: Rect, picker: &PickerState) {
    let filtered = picker.filtered();
    let inner_width = PICKER_WIDTH.saturating_sub(2) as usize;

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Search: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(picker.query.clone(), Style::default().fg(HEADER_TEXT)),
            Span::styled("_", Style::default().fg(ACCENT)),
        ]),
        Line::from(""),
    ];

    if filtered.is_empty() {
        lines.push(Line::from(Span::styled(
            " No matches",
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let offset = picker.scroll_offset();
    for (idx, option) in filtered
        .iter()
        .enumerate()
        .skip(offset)
        .take(MAX_VISIBLE_ROWS)
    {
        let label: String = option.label.chars().take(inner_width.saturating_sub(3)).collect();
        let mut line = Line::from(vec![
            Span::raw(if idx == picker.highlighted { " > " } else { "   " }),
            Span::styled(label, Style::default().fg(HEADER_TEXT)),
        ]);
        if idx == picker.highlighted {
            line = line.style(
                Style::default()
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            );
        }
        lines.push(line);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            " {}/{}  Enter: Select  Esc: Back",
            filtered.len(),
            picker.options.len()
        ),
        Style::default().fg(MUTED_TEXT),
    )));

    let height = lines.len().saturating_add(2) as u16;
    let popup = centered_rect_by_size(area, PICKER_WIDTH, height);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", picker.field.label()),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
