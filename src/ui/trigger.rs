//! The button that shows the committed selection and opens the dialog.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::info;

use crate::settings::SettingsStore;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};

#[derive(Debug, Clone)]
struct Memo {
    revision: u64,
    label: String,
}

/// Button label memoized on the store's commit revision.
///
/// Draft edits, focus moves and dialog open/close never touch the store's
/// revision, so they never rebuild the label.
#[derive(Debug, Default)]
pub struct TriggerButton {
    memo: Option<Memo>,
    render_count: u64,
}

impl TriggerButton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the label if the committed settings changed since the last
    /// render. Returns the current label.
    pub fn render(&mut self, store: &SettingsStore) -> &str {
        let revision = store.revision();
        if self.memo.as_ref().map(|memo| memo.revision) != Some(revision) {
            self.render_count += 1;
            info!(
                render_count = self.render_count,
                "Render count of button is: {}",
                self.render_count
            );
            self.memo = Some(Memo {
                revision,
                label: store.get().summary(),
            });
        }
        self.label()
    }

    /// Last rendered label; empty before the first render.
    pub fn label(&self) -> &str {
        self.memo.as_ref().map(|memo| memo.label.as_str()).unwrap_or("")
    }

    /// Number of times the label has been rebuilt.
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    pub fn widget(&self, focused: bool) -> Paragraph<'static> {
        let border = if focused { ACCENT } else { GLOBAL_BORDER };
        let mut text_style = Style::default().fg(HEADER_TEXT);
        if focused {
            text_style = text_style.add_modifier(Modifier::BOLD);
        }
        Paragraph::new(Line::from(self.label().to_string()))
            .style(text_style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_render_counts_once() {
        let store = SettingsStore::default();
        let mut button = TriggerButton::new();
        assert_eq!(button.label(), "");
        button.render(&store);
        button.render(&store);
        assert_eq!(button.render_count(), 1);
        assert_eq!(
            button.label(),
            "United States of America - (USD - US Dollar - en)"
        );
    }

    #[test]
    fn rerenders_after_commit() {
        let mut store = SettingsStore::default();
        let mut button = TriggerButton::new();
        button.render(&store);

        let mut draft = store.get().clone();
        draft.currency = "EUR - Euro".into();
        store.commit(draft);

        assert_eq!(
            button.render(&store),
            "United States of America - (EUR - Euro - en)"
        );
        assert_eq!(button.render_count(), 2);
    }
}
