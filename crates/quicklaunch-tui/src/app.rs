//! Application state and key handling for the TUI.

use crossterm::event::{KeyCode, KeyModifiers};
use quicklaunch_core::{Command, Outcome, Palette};
use tracing::debug;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Command(Command),
    InsertChar(char),
    DeleteChar,
    ClearQuery,
    Exit,
    Ignore,
}

/// Translate a key press. Pure, so it can be tested without a terminal.
#[must_use]
pub fn map_key(code: KeyCode, modifiers: KeyModifiers) -> InputAction {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);

    match code {
        KeyCode::Esc => InputAction::Exit,
        KeyCode::Char('c') if ctrl => InputAction::Exit,
        KeyCode::Down => InputAction::Command(Command::MoveDown),
        KeyCode::Char('j' | 'n') if ctrl => InputAction::Command(Command::MoveDown),
        KeyCode::Up => InputAction::Command(Command::MoveUp),
        KeyCode::Char('k' | 'p') if ctrl => InputAction::Command(Command::MoveUp),
        KeyCode::Right | KeyCode::PageDown => InputAction::Command(Command::PageNext),
        KeyCode::Left | KeyCode::PageUp => InputAction::Command(Command::PagePrev),
        KeyCode::Enter => InputAction::Command(Command::Activate),
        KeyCode::Backspace => InputAction::DeleteChar,
        KeyCode::Char('u') if ctrl => InputAction::ClearQuery,
        KeyCode::Char(c) if !ctrl && !alt => InputAction::InsertChar(c),
        _ => InputAction::Ignore,
    }
}

/// Main application state
pub struct App {
    pub palette: Palette,
    pub placeholder: String,
    pub status_message: Option<String>,
    pub should_quit: bool,
    pub close_on_launch: bool,
}

impl App {
    pub fn new(palette: Palette, close_on_launch: bool) -> Self {
        Self {
            palette,
            placeholder: "Search applications...".to_string(),
            status_message: None,
            should_quit: false,
            close_on_launch,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let action = map_key(code, modifiers);
        debug!("Key {code:?} ({modifiers:?}) -> {action:?}");
        self.handle_action(action);
    }

    pub fn handle_action(&mut self, action: InputAction) {
        match action {
            InputAction::Exit => self.should_quit = true,
            InputAction::Command(Command::Activate) => self.activate(),
            InputAction::Command(command) => {
                self.palette.apply(command);
                self.status_message = None;
            }
            InputAction::InsertChar(c) => {
                let mut query = self.palette.query().to_string();
                query.push(c);
                self.update_query(&query);
            }
            InputAction::DeleteChar => {
                let mut query = self.palette.query().to_string();
                if query.pop().is_some() {
                    self.update_query(&query);
                }
            }
            InputAction::ClearQuery => self.update_query(""),
            InputAction::Ignore => {}
        }
    }

    fn update_query(&mut self, query: &str) {
        self.palette.set_query(query);
        self.status_message = None;
    }

    fn activate(&mut self) {
        let Some(name) = self
            .palette
            .page_view()
            .selected_item()
            .map(|item| item.key.clone())
        else {
            return;
        };

        match self.palette.apply(Command::Activate) {
            Outcome::Activated { launched: true, .. } if self.close_on_launch => {
                self.should_quit = true;
            }
            Outcome::Activated { launched: true, .. } => {
                self.status_message = Some(format!("Launched {name}"));
            }
            Outcome::Activated { launched: false, .. } => {
                self.status_message = Some(format!("Failed to launch {name}"));
            }
            Outcome::Moved | Outcome::Ignored => {}
        }
    }
}
