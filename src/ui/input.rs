use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::picker::PickerIntent;

/// Route a key press to the topmost layer: picker, dialog, or main screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.is_picker_open() {
        handle_picker_key(app, key);
        return;
    }

    if app.is_dialog_open() {
        handle_dialog_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.open_dialog(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.save_dialog();
        return;
    }

    match key.code {
        KeyCode::Esc => app.request_close_dialog(),
        KeyCode::Up | KeyCode::BackTab => app.focus_prev(),
        KeyCode::Down | KeyCode::Tab => app.focus_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused(),
        _ => {}
    }
}

fn handle_picker_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Esc => {
            app.close_picker();
            return;
        }
        KeyCode::Enter => {
            app.picker_select();
            return;
        }
        KeyCode::Up => PickerIntent::MoveUp,
        KeyCode::Down => PickerIntent::MoveDown,
        KeyCode::PageUp => PickerIntent::PageUp,
        KeyCode::PageDown => PickerIntent::PageDown,
        KeyCode::Home => PickerIntent::Home,
        KeyCode::End => PickerIntent::End,
        KeyCode::Backspace => PickerIntent::Backspace,
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            PickerIntent::Input(ch)
        }
        _ => return,
    };
    app.picker_input(intent);
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            handle_key(app, press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn enter_opens_dialog() {
        let mut app = App::default();
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.is_dialog_open());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::default();
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.is_dialog_open());
    }

    #[test]
    fn q_quits_only_on_main_screen() {
        let mut app = App::default();
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn search_and_pick_country_then_save() {
        let mut app = App::default();
        handle_key(&mut app, press(KeyCode::Enter)); // open dialog
        handle_key(&mut app, press(KeyCode::Enter)); // open country picker
        type_str(&mut app, "germany");
        handle_key(&mut app, press(KeyCode::Enter)); // select
        assert!(!app.is_picker_open());
        assert_eq!(app.dialog().draft().map(|d| d.country.code.as_str()), Some("DE"));
        assert_eq!(app.settings().country.code, "US");

        handle_key(&mut app, ctrl('s'));
        assert!(!app.is_dialog_open());
        assert_eq!(app.settings().country.code, "DE");
    }

    #[test]
    fn picker_escape_keeps_draft() {
        let mut app = App::default();
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Down)); // currency
        handle_key(&mut app, press(KeyCode::Enter));
        type_str(&mut app, "eur");
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.is_dialog_open());
        assert!(!app.is_picker_open());
        assert!(!app.dialog().is_dirty());
    }

    #[test]
    fn escape_twice_discards_dirty_draft() {
        let mut app = App::default();
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Enter));
        type_str(&mut app, "france");
        handle_key(&mut app, press(KeyCode::Enter));

        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.is_dialog_open());
        assert!(app.dialog().confirm_discard());

        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.is_dialog_open());
        assert_eq!(app.settings().country.code, "US");
    }
}
