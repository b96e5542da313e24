//! Frame rendering against ratatui's in-memory backend.

mod common;

use common::*;
use crossterm::event::KeyCode;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use region_selector::ui::input::handle_key;
use region_selector::ui::render::draw;
use region_selector::ui::App;

fn render(app: &mut App) -> String {
    app.render_trigger();
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn main_screen_shows_committed_selection() {
    let mut app = make_app();
    let screen = render(&mut app);
    assert!(screen.contains("United States of America - (USD - US Dollar - en)"));
    assert!(screen.contains("Enter: Open settings"));
    assert!(!screen.contains("Select your region"));
}

#[test]
fn dialog_shows_draft_and_buttons() {
    let mut app = make_app();
    app.open_dialog();
    app.on_picker_change(currency("EUR"));
    let screen = render(&mut app);

    assert!(screen.contains("Select your region, currency and language."));
    assert!(screen.contains("EUR - Euro"));
    assert!(screen.contains("[ Save ]"));
    assert!(screen.contains("[ Cancel ]"));
    // The button keeps showing the committed value while the draft differs.
    assert!(screen.contains("(USD - US Dollar - en)"));
}

#[test]
fn picker_overlay_lists_matches() {
    let mut app = make_app();
    handle_key(&mut app, press_key(KeyCode::Enter));
    handle_key(&mut app, press_key(KeyCode::Enter));
    for ch in "spain".chars() {
        handle_key(&mut app, press_key(KeyCode::Char(ch)));
    }
    let screen = render(&mut app);

    assert!(screen.contains("Search: spain"));
    assert!(screen.contains("Spain (ES)"));
    assert!(!screen.contains("Japan (JP)"));
}

#[test]
fn confirm_discard_hint_is_shown() {
    let mut app = make_app();
    app.open_dialog();
    app.on_picker_change(language("fr"));
    app.request_close_dialog();
    let screen = render(&mut app);
    assert!(screen.contains("Press Esc again to discard."));
}

#[test]
fn rendering_frames_does_not_bump_render_count() {
    let mut app = make_app();
    let before = app.trigger().render_count();
    render(&mut app);
    app.open_dialog();
    render(&mut app);
    app.cancel_dialog();
    render(&mut app);
    assert_eq!(app.trigger().render_count(), before);
}
