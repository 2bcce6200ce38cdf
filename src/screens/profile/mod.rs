//! Perfil: avatar, account numbers, settings and logout.

pub mod render;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::screens::Screen;
use crate::session::User;

/// Logout itself (tap or `x`) is left to the shell.
pub struct ProfileScreen {
    pub user: User,
}

impl ProfileScreen {
    pub fn new(user: User) -> Self {
        Self { user }
    }
}

impl Screen for ProfileScreen {
    fn handle_input(&mut self, _event: &InputEvent) -> bool {
        false
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(self, f, area, click_state);
    }
}
