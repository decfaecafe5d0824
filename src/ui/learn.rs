use crate::app::App;
use crate::models::Verdict;
use crate::quiz::{LearnFocus, LearnState};
use crate::ui::layout::{calculate_learn_chunks, calculate_notice_chunks};
use crate::ui::{draw_text_input, key_style};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const EMPTY_STORE_MESSAGE: &str = "No words yet. Press F3 to add some.";
pub const LOADING_MESSAGE: &str = "Loading starter words...";

pub fn draw_learn(f: &mut Frame, app: &App, area: Rect) {
    let question = match &app.learn {
        LearnState::Asking(question) => question,
        LearnState::Empty => return draw_learn_notice(f, area, EMPTY_STORE_MESSAGE),
        LearnState::Loading => return draw_learn_notice(f, area, LOADING_MESSAGE),
    };

    let layout = calculate_learn_chunks(area);

    let prompt = Paragraph::new(question.pair.source_text.as_str())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Translate  (streak: {})", app.streak.value())),
        );
    f.render_widget(prompt, layout.prompt_area);

    draw_text_input(
        f,
        &question.input,
        layout.answer_area,
        "Your answer",
        "[Type your answer here...]",
        question.focus == LearnFocus::Answer && !question.is_judged(),
    );

    let mut result = Text::default();
    match &question.verdict {
        Some(Verdict::Correct) => {
            result.push_line(Line::from(Span::styled(
                "✓ Correct!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        Some(Verdict::Incorrect { expected }) => {
            result.push_line(Line::from(Span::styled(
                "✗ Not quite.",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            result.push_line(Line::from(""));
            result.push_line(Line::from(vec![
                Span::from("Correct answer: "),
                Span::styled(
                    expected.as_str(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        None => {}
    }

    let result = Paragraph::new(result)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Result"));
    f.render_widget(result, layout.result_area);

    draw_next_control(f, layout.next_area, question.focus == LearnFocus::NextButton);
}

/// No question to ask, but the next-question control stays on screen.
fn draw_learn_notice(f: &mut Frame, area: Rect, text: &str) {
    let layout = calculate_notice_chunks(area);
    draw_notice(f, layout.notice_area, text);
    draw_next_control(f, layout.next_area, false);
}

fn draw_next_control(f: &mut Frame, area: Rect, focused: bool) {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let button = Paragraph::new("Next question ▶")
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(
            if focused {
                key_style()
            } else {
                Style::default().fg(Color::DarkGray)
            },
        ));
    f.render_widget(button, area);
}

pub(crate) fn draw_notice(f: &mut Frame, area: Rect, text: &str) {
    let notice = Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(notice, area);
}
