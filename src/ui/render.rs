use crate::ui::app::App;
use crate::ui::footer::{Footer, FooterMode};
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::picker::render_picker;
use crate::ui::settings::render_settings_dialog;
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use ratatui::Frame;

/// Minimum width of the trigger button, borders included.
const BUTTON_MIN_WIDTH: u16 = 24;

/// Draw one frame. Call [`App::render_trigger`] first so the button label is current.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.is_dialog_open()), header);
    frame.render_widget(Clear, body);

    // Top of the body, above the centered dialog.
    let button_row = Rect {
        y: body.y.saturating_add(1).min(body.bottom()),
        height: body.height.saturating_sub(1).min(3),
        ..body
    };
    let label_width = app.trigger().label().chars().count() as u16;
    let button_area = centered_rect_by_size(
        button_row,
        label_width.saturating_add(4).max(BUTTON_MIN_WIDTH),
        3,
    );
    frame.render_widget(app.trigger().widget(!app.is_dialog_open()), button_area);

    let mode = if app.is_picker_open() {
        FooterMode::Picker
    } else if app.is_dialog_open() {
        FooterMode::Dialog
    } else {
        FooterMode::Main
    };
    frame.render_widget(Footer::new().widget(footer, mode), footer);

    render_settings_dialog(frame, body, app.dialog());
    if let Some(picker) = app.picker() {
        render_picker(frame, body, picker);
    }
}
