pub mod layout;
mod add;
mod learn;
mod list;

pub use add::draw_add;
pub use layout::{calculate_add_chunks, calculate_app_chunks, calculate_learn_chunks};
pub use learn::{draw_learn, EMPTY_STORE_MESSAGE, LOADING_MESSAGE};
pub use list::{draw_list, EMPTY_LIST_MESSAGE};

use crate::app::App;
use crate::input::TextInput;
use crate::models::{MessageKind, Mode};
use crate::quiz::{LearnFocus, LearnState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub(crate) fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Renders the whole screen: mode tabs, the active panel, status and help.
pub fn draw_app(f: &mut Frame, app: &App) {
    let layout = calculate_app_chunks(f.area());

    draw_tabs(f, app.mode, layout.tabs_area);

    match app.mode {
        Mode::Learn => draw_learn(f, app, layout.body_area),
        Mode::List => draw_list(f, app, layout.body_area),
        Mode::Add => draw_add(f, app, layout.body_area),
    }

    draw_status(f, app, layout.status_area);
    draw_help(f, app, layout.help_area);
}

fn draw_tabs(f: &mut Frame, mode: Mode, area: Rect) {
    let titles: Vec<Line> = Mode::all()
        .iter()
        .map(|m| Line::from(format!("{} {}", m.shortcut(), m.title())))
        .collect();
    let selected = Mode::all().iter().position(|m| *m == mode).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Vocab Cards v0.1.0"),
        )
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.message {
        Some(message) => {
            let color = match message.kind {
                MessageKind::Info => Color::White,
                MessageKind::Success => Color::Green,
                MessageKind::Warning => Color::Yellow,
                MessageKind::Error => Color::Red,
            };
            let prefix = match message.kind {
                MessageKind::Success => "✓ ",
                MessageKind::Warning | MessageKind::Error => "⚠ ",
                MessageKind::Info => "",
            };
            (
                format!("{}{}", prefix, message.text),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => (
            format!("{} words", app.store.len()),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let status = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

fn help_keys(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut keys = vec![("F1/F2/F3", "Mode")];
    match app.mode {
        Mode::Learn => match &app.learn {
            LearnState::Asking(question) if question.focus == LearnFocus::NextButton => {
                keys.push(("Enter", "Next question"));
            }
            LearnState::Asking(_) => {
                keys.push(("Enter", "Check"));
                keys.push(("Ctrl+N", "Skip"));
            }
            LearnState::Empty | LearnState::Loading => {
                keys.push(("Ctrl+N", "Next question"));
            }
        },
        Mode::List => {
            keys.push(("↑/↓", "Navigate"));
            keys.push(("Space", "Select"));
            keys.push(("d", "Delete selected"));
        }
        Mode::Add => {
            keys.push(("Tab", "Switch field"));
            keys.push(("Enter", "Add"));
        }
    }
    keys.push(("Esc/Ctrl+C", "Quit"));
    keys
}

fn draw_help(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (key, action) in help_keys(app) {
        spans.push(Span::styled(key, key_style()));
        spans.push(Span::from(format!(" {}  ", action)));
    }

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

/// Bordered single-line field; places the terminal cursor when `focused`.
pub(crate) fn draw_text_input(
    f: &mut Frame,
    input: &TextInput,
    area: Rect,
    title: &str,
    placeholder: &str,
    focused: bool,
) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let cursor_col = input.cursor_display_column();
    let scroll_x = cursor_col.saturating_sub(inner_width.saturating_sub(1));

    let content = if input.is_empty() {
        Paragraph::new(placeholder).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(input.value()).scroll((0, scroll_x as u16))
    };

    let border_style = if focused {
        key_style()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    f.render_widget(
        content.block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title.to_string()),
        ),
        area,
    );

    if focused {
        let cursor_x = area.x + 1 + (cursor_col - scroll_x) as u16;
        f.set_cursor_position((cursor_x, area.y + 1));
    }
}
