//! Progresso: weekly study chart, skills and achievements.

pub mod render;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::screens::Screen;
use crate::widgets::Scroll;

#[derive(Default)]
pub struct ProgressScreen {
    pub scroll: Scroll,
}

impl ProgressScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for ProgressScreen {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        let delta = match event {
            InputEvent::Up => -1,
            InputEvent::Down => 1,
            _ => return false,
        };
        let limit = render::content(0).len() as u16;
        self.scroll.step(delta, limit);
        true
    }

    // Nothing to tap on this screen.
    fn render(&self, f: &mut Frame, area: Rect, _click_state: &Rc<RefCell<ClickState>>) {
        render::render(self, f, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_scroll_keys_are_consumed() {
        let mut s = ProgressScreen::new();
        assert!(s.handle_input(&InputEvent::Down));
        assert_eq!(s.scroll.offset(), 1);
        assert!(!s.handle_input(&InputEvent::Key('p')));
        assert!(!s.handle_input(&InputEvent::Left));
    }
}
