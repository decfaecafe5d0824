use crate::config::Config;
use crate::input::TextInput;
use crate::logger;
use crate::models::{Mode, StatusMessage, Streak, WordPair};
use crate::quiz::{pick_question, LearnFocus, LearnState};
use crate::seed::SeedEvent;
use crate::store::WordStore;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;
use std::time::Instant;

#[derive(Debug, Default)]
pub struct ListState {
    pub selected: usize,
    pub checked: BTreeSet<usize>,
}

impl ListState {
    fn reset(&mut self, len: usize) {
        self.checked.clear();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddField {
    #[default]
    Source,
    Target,
}

#[derive(Debug, Default)]
pub struct AddState {
    pub source: TextInput,
    pub target: TextInput,
    pub focus: AddField,
}

impl AddState {
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            AddField::Source => &mut self.source,
            AddField::Target => &mut self.target,
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            AddField::Source => AddField::Target,
            AddField::Target => AddField::Source,
        };
    }

    fn clear(&mut self) {
        self.source.clear();
        self.target.clear();
        self.focus = AddField::Source;
    }
}

/// All mutable application state. Handlers take `&mut App`; nothing is global.
#[derive(Debug)]
pub struct App {
    pub config: Config,
    pub store: WordStore,
    pub streak: Streak,
    pub mode: Mode,
    pub learn: LearnState,
    pub list: ListState,
    pub add: AddState,
    pub message: Option<StatusMessage>,
    pub pending_list_switch: Option<Instant>,
    pub seeding: bool,
    pub should_quit: bool,
    rng: StdRng,
}

impl App {
    pub fn new(config: Config, store: WordStore) -> Self {
        Self::with_rng(config, store, StdRng::from_entropy())
    }

    pub fn with_rng(config: Config, store: WordStore, rng: StdRng) -> Self {
        let mut app = Self {
            config,
            store,
            streak: Streak::default(),
            mode: Mode::Learn,
            learn: LearnState::Empty,
            list: ListState::default(),
            add: AddState::default(),
            message: None,
            pending_list_switch: None,
            seeding: false,
            should_quit: false,
            rng,
        };
        app.enter_learn();
        app
    }

    /// Marks the external seed fetch as in flight.
    pub fn begin_seeding(&mut self) {
        self.seeding = true;
        if self.mode == Mode::Learn && self.store.is_empty() {
            self.learn = LearnState::Loading;
        }
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.pending_list_switch = None;
        self.message = None;
        self.mode = mode;
        match mode {
            Mode::Learn => self.enter_learn(),
            Mode::List => self.list.reset(self.store.len()),
            Mode::Add => self.add.clear(),
        }
        logger::log(&format!("Switched to {} mode", mode.title()));
    }

    fn enter_learn(&mut self) {
        self.learn = match pick_question(&self.store, &mut self.rng) {
            Some(question) => LearnState::Asking(question),
            None if self.seeding => LearnState::Loading,
            None => LearnState::Empty,
        };
    }

    pub fn next_question(&mut self) {
        if self.mode.shows_next_control() {
            self.message = None;
            self.enter_learn();
        }
    }

    pub fn submit_answer(&mut self) {
        if let LearnState::Asking(question) = &mut self.learn
            && !question.is_judged()
        {
            let correct = question
                .submit(&mut self.streak)
                .is_some_and(|verdict| verdict.is_correct());
            logger::log(&format!(
                "Answered '{}': {} (streak {})",
                question.pair.source_text,
                if correct { "correct" } else { "incorrect" },
                self.streak.value()
            ));
        }
    }

    pub fn select_next(&mut self) {
        if self.list.selected + 1 < self.store.len() {
            self.list.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.list.selected = self.list.selected.saturating_sub(1);
    }

    pub fn toggle_checked(&mut self) {
        if self.store.is_empty() {
            return;
        }
        let index = self.list.selected;
        if !self.list.checked.remove(&index) {
            self.list.checked.insert(index);
        }
    }

    pub fn delete_selected(&mut self) {
        if self.list.checked.is_empty() {
            self.message = Some(StatusMessage::warning("Select at least one word to delete."));
            return;
        }

        let indices: Vec<usize> = self.list.checked.iter().copied().collect();
        match self.store.remove_by_indices(&indices) {
            Ok(removed) => {
                logger::log(&format!("Deleted {} words", removed));
                self.message = Some(StatusMessage::success(format!(
                    "Deleted {} word{}.",
                    removed,
                    if removed == 1 { "" } else { "s" }
                )));
            }
            Err(e) => {
                self.message = Some(StatusMessage::error(format!("Could not delete: {}", e)));
            }
        }
        self.list.reset(self.store.len());
    }

    pub fn submit_add(&mut self, now: Instant) {
        let pair = match WordPair::validated(self.add.source.value(), self.add.target.value()) {
            Ok(pair) => pair,
            Err(e) => {
                self.message = Some(StatusMessage::warning(e.to_string()));
                return;
            }
        };

        let label = format!("{} - {}", pair.source_text, pair.target_text);
        match self.store.append(pair) {
            Ok(()) => {
                logger::log(&format!("Added word {}", label));
                self.add.clear();
                self.message = Some(StatusMessage::success("Word added!"));
                self.pending_list_switch = Some(now + self.config.add_to_list_delay);
            }
            Err(e) => {
                self.message = Some(StatusMessage::error(format!("Could not save: {}", e)));
            }
        }
    }

    /// Fires the deferred switch to the list after a successful add.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.pending_list_switch
            && now >= deadline
        {
            self.set_mode(Mode::List);
        }
    }

    pub fn on_seed_event(&mut self, event: SeedEvent) {
        self.seeding = false;
        match self.store.apply_fetched_seed(event.into_result(), "seed worker") {
            Ok(0) => {}
            Ok(count) => {
                self.message = Some(StatusMessage::info(format!(
                    "Loaded {} starter words.",
                    count
                )));
            }
            Err(e) => {
                self.message = Some(StatusMessage::error(format!(
                    "Could not save starter words: {}",
                    e
                )));
            }
        }

        if self.mode == Mode::Learn && !matches!(self.learn, LearnState::Asking(_)) {
            self.enter_learn();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::F(n @ 1..=3) => {
                self.set_mode(Mode::all()[usize::from(n - 1)]);
                return;
            }
            KeyCode::Char('n') if ctrl => {
                self.next_question();
                return;
            }
            _ => {}
        }

        match self.mode {
            Mode::Learn => self.handle_learn_key(key),
            Mode::List => self.handle_list_key(key),
            Mode::Add => self.handle_add_key(key, now),
        }
    }

    fn handle_learn_key(&mut self, key: KeyEvent) {
        let focus = match &self.learn {
            LearnState::Asking(question) => question.focus,
            _ => return,
        };

        match (focus, key.code) {
            (LearnFocus::Answer, KeyCode::Enter) => self.submit_answer(),
            (LearnFocus::Answer, code) => {
                if let LearnState::Asking(question) = &mut self.learn {
                    edit_text(&mut question.input, code, key.modifiers);
                }
            }
            (LearnFocus::NextButton, KeyCode::Enter | KeyCode::Char(' ')) => self.next_question(),
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Char(' ') => self.toggle_checked(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            _ => {}
        }
    }

    fn handle_add_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.add.toggle_focus()
            }
            KeyCode::Enter => self.submit_add(now),
            code => edit_text(self.add.focused_input(), code, key.modifiers),
        }
    }
}

fn edit_text(input: &mut TextInput, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}
