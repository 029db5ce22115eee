//! Application state and event handling for student-form

use crate::config::Config;
use crate::form::{FormAction, FormState};
use crate::types::{FieldKey, Subject, TextField};
use crate::ui::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

/// Which control receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    ClassName,
    Percentage,
    Subjects,
    Reset,
    Submit,
}

impl Focus {
    pub fn all() -> &'static [Focus] {
        &[
            Focus::Name,
            Focus::ClassName,
            Focus::Percentage,
            Focus::Subjects,
            Focus::Reset,
            Focus::Submit,
        ]
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }

    pub fn text_field(&self) -> Option<TextField> {
        match self {
            Focus::Name => Some(TextField::Name),
            Focus::ClassName => Some(TextField::ClassName),
            Focus::Percentage => Some(TextField::Percentage),
            _ => None,
        }
    }

    fn for_key(key: FieldKey) -> Self {
        match key {
            FieldKey::Name => Focus::Name,
            FieldKey::ClassName => Focus::ClassName,
            FieldKey::Percentage => Focus::Percentage,
            FieldKey::Subjects => Focus::Subjects,
        }
    }
}

/// Main application state
pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub theme: Theme,
    pub form: FormState,
    pub focus: Focus,
    /// Highlighted entry in the subject grid (index into the catalog)
    pub subject_cursor: usize,
}

impl App {
    pub fn new(config: Config) -> Self {
        let theme = Theme::from_name(config.theme);
        Self {
            should_quit: false,
            config,
            theme,
            form: FormState::new(),
            focus: Focus::default(),
            subject_cursor: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global keys first
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('s') if ctrl => {
                self.try_submit();
                return Ok(());
            }
            KeyCode::Char('r') if ctrl => {
                self.reset();
                return Ok(());
            }
            KeyCode::F(2) => {
                self.cycle_theme();
                return Ok(());
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                return Ok(());
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                return Ok(());
            }
            _ => {}
        }

        if let Some(field) = self.focus.text_field() {
            self.handle_text_key(field, key, ctrl);
            return Ok(());
        }

        match self.focus {
            Focus::Subjects => self.handle_subjects_key(key),
            Focus::Reset => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.reset();
                }
            }
            Focus::Submit => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.try_submit();
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_text_key(&mut self, field: TextField, key: KeyEvent, ctrl: bool) {
        match key.code {
            KeyCode::Char(c) if !ctrl => {
                if field.accepts(c) {
                    let mut value = self.form.draft().field(field).to_string();
                    value.push(c);
                    self.form.dispatch(FormAction::UpdateField { field, value });
                }
            }
            KeyCode::Backspace => {
                let mut value = self.form.draft().field(field).to_string();
                if value.pop().is_some() {
                    self.form.dispatch(FormAction::UpdateField { field, value });
                }
            }
            KeyCode::Enter => self.try_submit(),
            _ => {}
        }
    }

    fn handle_subjects_key(&mut self, key: KeyEvent) {
        let count = Subject::all().len();
        match key.code {
            KeyCode::Left => {
                self.subject_cursor = (self.subject_cursor + count - 1) % count;
            }
            KeyCode::Right => {
                self.subject_cursor = (self.subject_cursor + 1) % count;
            }
            KeyCode::Char(' ') => {
                let subject = Subject::all()[self.subject_cursor];
                let included = !self.form.draft().subjects.contains(&subject);
                self.form.dispatch(FormAction::ToggleSubject {
                    label: subject.label().to_string(),
                    included,
                });
            }
            KeyCode::Enter => self.try_submit(),
            _ => {}
        }
    }

    /// Focus jumps to the first invalid field on failure.
    fn try_submit(&mut self) {
        match self.form.submit_if_enabled() {
            Some(Ok(_)) => self.focus = Focus::Name,
            Some(Err(errors)) => {
                if let Some((key, _)) = errors.iter().next() {
                    self.focus = Focus::for_key(key);
                }
            }
            None => {}
        }
    }

    fn reset(&mut self) {
        self.form.dispatch(FormAction::Reset);
        self.focus = Focus::Name;
        self.subject_cursor = 0;
    }

    fn cycle_theme(&mut self) {
        self.config.theme = self.config.theme.next();
        self.theme = Theme::from_name(self.config.theme);
        if let Err(e) = self.config.save() {
            warn!(error = %e, "could not save theme choice");
        }
    }
}
