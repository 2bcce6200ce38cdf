//! Screen trait and the tabs of the main shell.

pub mod assessment;
pub mod courses;
pub mod home;
pub mod login;
pub mod profile;
pub mod progress;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};

/// Implemented by every tab's content.
pub trait Screen {
    /// Handle an input event. Returns true if the event was consumed; the
    /// shell only acts on events the screen leaves alone.
    fn handle_input(&mut self, event: &InputEvent) -> bool;

    /// Render into `area`, registering click targets as it goes.
    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Home,
    Courses,
    Progress,
    Assessment,
    Profile,
}

impl Tab {
    /// Drawer order. The bottom bar shows the first four.
    pub const ALL: [Tab; 5] = [
        Tab::Home,
        Tab::Courses,
        Tab::Progress,
        Tab::Assessment,
        Tab::Profile,
    ];

    pub const BOTTOM_BAR: usize = 4;

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Início",
            Tab::Courses => "Cursos",
            Tab::Progress => "Progresso",
            Tab::Assessment => "Autoavaliação",
            Tab::Profile => "Perfil",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Home => "🏠",
            Tab::Courses => "📚",
            Tab::Progress => "📈",
            Tab::Assessment => "📋",
            Tab::Profile => "👤",
        }
    }

    /// Shortcut key when the active screen does not consume it.
    pub fn key(self) -> char {
        match self {
            Tab::Home => 'h',
            Tab::Courses => 'c',
            Tab::Progress => 'p',
            Tab::Assessment => 'a',
            Tab::Profile => 'u',
        }
    }

    pub fn from_key(key: char) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.key() == key)
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        for (i, a) in Tab::ALL.iter().enumerate() {
            for b in &Tab::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
            }
        }
    }

    #[test]
    fn from_key_roundtrip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_key(tab.key()), Some(tab));
        }
        assert_eq!(Tab::from_key('z'), None);
    }

    #[test]
    fn bottom_bar_excludes_profile() {
        let shown: Vec<&str> = Tab::ALL[..Tab::BOTTOM_BAR].iter().map(|t| t.label()).collect();
        assert_eq!(shown, ["Início", "Cursos", "Progresso", "Autoavaliação"]);
        assert_eq!(Tab::Profile.index(), 4);
    }
}
