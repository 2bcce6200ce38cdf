//! Login screen: email, password and the remember-me checkbox.

pub mod render;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::screens::Screen;
use crate::session::{self, Field, LoginErrors, LoginForm, User};
use crate::storage::KeyValueStore;

pub const FOCUS_EMAIL: u16 = 100;
pub const FOCUS_PASSWORD: u16 = 101;
pub const TOGGLE_REMEMBER: u16 = 102;
/// Handled by the shell, which owns the store.
pub const SUBMIT: u16 = 103;

pub struct LoginScreen {
    pub form: LoginForm,
    /// Errors from the last submit; cleared per field as it is edited.
    pub errors: LoginErrors,
}

impl LoginScreen {
    /// Fresh form, prefilled from remembered credentials.
    pub fn new(store: &dyn KeyValueStore) -> Self {
        Self {
            form: LoginForm::restore(store),
            errors: LoginErrors::default(),
        }
    }

    /// Try to log in with the current form.
    pub fn submit(&mut self, store: &mut dyn KeyValueStore) -> Option<User> {
        match session::login(store, &self.form) {
            Ok(user) => {
                self.errors = LoginErrors::default();
                Some(user)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    fn clear_focused_error(&mut self) {
        match self.form.focus {
            Field::Email => self.errors.email = None,
            Field::Password => self.errors.password = None,
            Field::RememberMe => {}
        }
    }
}

impl Screen for LoginScreen {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => {
                let changed = self.form.type_char(*c);
                if changed {
                    self.clear_focused_error();
                }
                changed
            }
            InputEvent::Backspace => {
                let changed = self.form.backspace();
                if changed {
                    self.clear_focused_error();
                }
                changed
            }
            InputEvent::Tab | InputEvent::Down => {
                self.form.next_field();
                true
            }
            InputEvent::Up => {
                // two steps forward is one step back in a cycle of three
                self.form.next_field();
                self.form.next_field();
                true
            }
            InputEvent::Click(FOCUS_EMAIL) => {
                self.form.focus = Field::Email;
                true
            }
            InputEvent::Click(FOCUS_PASSWORD) => {
                self.form.focus = Field::Password;
                true
            }
            InputEvent::Click(TOGGLE_REMEMBER) => {
                self.form.focus = Field::RememberMe;
                self.form.toggle_remember();
                true
            }
            _ => false,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(self, f, area, click_state);
    }
}
