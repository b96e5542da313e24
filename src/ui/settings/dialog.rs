use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::settings::SettingsField;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::settings::state::{DialogFocus, SettingsDialogState};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR,
};

const DIALOG_WIDTH: u16 = 72;
const LABEL_WIDTH: usize = 10;

pub fn render_settings_dialog(frame: &mut Frame, area: Rect, state: &SettingsDialogState) {
    let SettingsDialogState::Visible {
        draft,
        focus,
        confirm_discard,
        ..
    } = state
    else {
        return;
    };

    let dirty = state.dirty_fields();
    let value_width = (DIALOG_WIDTH as usize).saturating_sub(LABEL_WIDTH + 10);
    let mut lines = vec![Line::from("")];

    for field in SettingsField::ALL {
        let focused = *focus == DialogFocus::Field(field);
        let marker = if dirty.contains(&field) { "*" } else { " " };
        let value: String = draft.display(field).chars().take(value_width).collect();
        let mut line = Line::from(vec![
            Span::raw(if focused { " > " } else { "   " }),
            Span::styled(
                format!("{:<width$}", field.label(), width = LABEL_WIDTH),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(value, Style::default().fg(HEADER_TEXT)),
            Span::styled(format!(" {}", marker), Style::default().fg(ACCENT)),
        ]);
        if focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("   "),
        button("Save", *focus == DialogFocus::Save),
        Span::raw("  "),
        button("Cancel", *focus == DialogFocus::Cancel),
    ]));
    lines.push(Line::from(""));

    if *confirm_discard {
        lines.push(Line::from(Span::styled(
            " Unsaved changes. Press Esc again to discard.",
            Style::default().fg(STATUS_ERROR),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            " Up/Down: Move  Enter: Choose  Ctrl+S: Save  Esc: Cancel",
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let height = lines.len().saturating_add(2) as u16;
    let popup = centered_rect_by_size(area, DIALOG_WIDTH, height);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(
            " Select your region, currency and language. ",
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn button(label: &str, focused: bool) -> Span<'static> {
    let text = format!("[ {} ]", label);
    if focused {
        Span::styled(
            text,
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(text, Style::default().fg(HEADER_TEXT))
    }
}
