use crate::app::{AddField, App};
use crate::ui::draw_text_input;
use crate::ui::layout::calculate_add_chunks;
use ratatui::{layout::Rect, Frame};

pub fn draw_add(f: &mut Frame, app: &App, area: Rect) {
    let layout = calculate_add_chunks(area);

    draw_text_input(
        f,
        &app.add.source,
        layout.source_area,
        "Word",
        "[English word...]",
        app.add.focus == AddField::Source,
    );
    draw_text_input(
        f,
        &app.add.target,
        layout.target_area,
        "Translation",
        "[Japanese translation...]",
        app.add.focus == AddField::Target,
    );
}
