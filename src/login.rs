// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Login and registration form.
//!
//! The form is plain input state; submitting it is left to the event
//! handlers, which own the authenticator.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tui_input::{Input, backend::crossterm::EventHandler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormMode {
    Login,
    Register,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FormAction {
    None,
    Submit,
    Quit,
}

const LOGIN_FIELDS: [&str; 2] = ["Username", "Password"];
const REGISTER_FIELDS: [&str; 4] = ["Username", "Email", "Password", "Confirm password"];

pub(crate) struct LoginForm {
    mode: FormMode,
    fields: Vec<Input>,
    focus: usize,
    pub(crate) error: Option<String>,
    pub(crate) notice: Option<String>,
}

impl LoginForm {
    pub(crate) fn new() -> Self {
        Self::with_mode(FormMode::Login)
    }

    fn with_mode(mode: FormMode) -> Self {
        let count = match mode {
            FormMode::Login => LOGIN_FIELDS.len(),
            FormMode::Register => REGISTER_FIELDS.len(),
        };

        Self {
            mode,
            fields: vec![Input::default(); count],
            focus: 0,
            error: None,
            notice: None,
        }
    }

    pub(crate) fn mode(&self) -> FormMode {
        self.mode
    }

    pub(crate) fn labels(&self) -> &'static [&'static str] {
        match self.mode {
            FormMode::Login => &LOGIN_FIELDS,
            FormMode::Register => &REGISTER_FIELDS,
        }
    }

    pub(crate) fn fields(&self) -> &[Input] {
        &self.fields
    }

    pub(crate) fn focus(&self) -> usize {
        self.focus
    }

    /// Whether the field at `index` holds a password and must be masked.
    pub(crate) fn is_secret(&self, index: usize) -> bool {
        self.labels()
            .get(index)
            .is_some_and(|label| label.starts_with("Password") || label.starts_with("Confirm"))
    }

    pub(crate) fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(Input::value).unwrap_or("")
    }

    /// Switches between the login and registration forms, clearing input.
    pub(crate) fn toggle_mode(&mut self) {
        let mode = match self.mode {
            FormMode::Login => FormMode::Register,
            FormMode::Register => FormMode::Login,
        };
        *self = Self::with_mode(mode);
    }

    /// Returns to an empty login form, keeping `notice` for display.
    pub(crate) fn reset_to_login(&mut self, notice: Option<String>) {
        *self = Self::with_mode(FormMode::Login);
        self.notice = notice;
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => return FormAction::Quit,
            (KeyCode::F(2), _) => self.toggle_mode(),
            (KeyCode::Char('r'), KeyModifiers::CONTROL) => self.toggle_mode(),
            (KeyCode::Tab, _) | (KeyCode::Down, _) => self.focus_next(),
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => self.focus_previous(),
            (KeyCode::Enter, _) => {
                if self.focus + 1 < self.fields.len() {
                    self.focus_next();
                } else {
                    return FormAction::Submit;
                }
            }
            _ => {
                if let Some(field) = self.fields.get_mut(self.focus) {
                    field.handle_event(&Event::Key(key));
                }
            }
        }

        FormAction::None
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    fn focus_previous(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(form: &mut LoginForm, text: &str) {
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn enter_moves_through_fields_then_submits() {
        let mut form = LoginForm::new();
        type_text(&mut form, "alice");
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormAction::None);
        type_text(&mut form, "secret1");

        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormAction::Submit);
        assert_eq!(form.value(0), "alice");
        assert_eq!(form.value(1), "secret1");
        assert!(form.is_secret(1));
        assert!(!form.is_secret(0));
    }

    #[test]
    fn toggling_clears_input() {
        let mut form = LoginForm::new();
        type_text(&mut form, "alice");

        form.handle_key(key(KeyCode::F(2)));

        assert_eq!(form.mode(), FormMode::Register);
        assert_eq!(form.fields().len(), 4);
        assert_eq!(form.value(0), "");
        assert!(form.is_secret(3));
    }

    #[test]
    fn focus_wraps() {
        let mut form = LoginForm::new();
        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.focus(), 1);
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focus(), 0);
    }
}
