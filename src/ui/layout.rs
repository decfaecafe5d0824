use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub tabs_area: Rect,
    pub body_area: Rect,
    pub status_area: Rect,
    pub help_area: Rect,
}

pub struct LearnLayout {
    pub prompt_area: Rect,
    pub answer_area: Rect,
    pub result_area: Rect,
    pub next_area: Rect,
}

pub struct NoticeLayout {
    pub notice_area: Rect,
    pub next_area: Rect,
}

pub struct AddLayout {
    pub source_area: Rect,
    pub target_area: Rect,
}

pub fn calculate_app_chunks(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    AppLayout {
        tabs_area: chunks[0],
        body_area: chunks[1],
        status_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_learn_chunks(area: Rect) -> LearnLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    LearnLayout {
        prompt_area: chunks[0],
        answer_area: chunks[1],
        result_area: chunks[2],
        next_area: chunks[3],
    }
}

pub fn calculate_notice_chunks(area: Rect) -> NoticeLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    NoticeLayout {
        notice_area: chunks[0],
        next_area: chunks[1],
    }
}

pub fn calculate_add_chunks(area: Rect) -> AddLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    AddLayout {
        source_area: chunks[0],
        target_area: chunks[1],
    }
}
