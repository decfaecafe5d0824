use crate::app::App;
use crate::ui::learn::draw_notice;
use crate::utils::truncate_string;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub const EMPTY_LIST_MESSAGE: &str = "No words";

pub fn draw_list(f: &mut Frame, app: &App, area: Rect) {
    if app.store.is_empty() {
        return draw_notice(f, area, EMPTY_LIST_MESSAGE);
    }

    let width = area.width.saturating_sub(12) as usize;
    let items: Vec<ListItem> = app
        .store
        .words()
        .iter()
        .enumerate()
        .map(|(i, pair)| {
            let checkbox = if app.list.checked.contains(&i) {
                "[x]"
            } else {
                "[ ]"
            };
            let label = format!("{} - {}", pair.source_text, pair.target_text);
            let style = if app.list.checked.contains(&i) {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(format!(
                "{} {:>3}. {}",
                checkbox,
                i + 1,
                truncate_string(&label, width)
            ))
            .style(style)
        })
        .collect();

    let title = format!(
        "Words ({}) - {} selected",
        app.store.len(),
        app.list.checked.len()
    );
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default().with_selected(Some(app.list.selected));
    f.render_stateful_widget(list, area, &mut state);
}
