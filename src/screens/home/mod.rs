//! Início: greeting, learning stats, interest area and courses in progress.

pub mod render;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::content::INTEREST_AREAS;
use crate::input::{ClickState, InputEvent};
use crate::screens::Screen;
use crate::session::User;
use crate::widgets::Scroll;

pub const AREA_BASE: u16 = 200; // +area index 0..4

pub struct HomeScreen {
    pub user: User,
    /// Index into `INTEREST_AREAS`.
    pub selected_area: usize,
    pub scroll: Scroll,
}

impl HomeScreen {
    pub fn new(user: User, selected_area: usize) -> Self {
        Self {
            user,
            selected_area: selected_area.min(INTEREST_AREAS.len() - 1),
            scroll: Scroll::default(),
        }
    }

    fn cycle_area(&mut self, forward: bool) {
        let n = INTEREST_AREAS.len();
        self.selected_area = if forward {
            (self.selected_area + 1) % n
        } else {
            (self.selected_area + n - 1) % n
        };
    }
}

impl Screen for HomeScreen {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Left => {
                self.cycle_area(false);
                true
            }
            InputEvent::Right => {
                self.cycle_area(true);
                true
            }
            InputEvent::Click(id)
                if (AREA_BASE..AREA_BASE + INTEREST_AREAS.len() as u16).contains(id) =>
            {
                self.selected_area = (id - AREA_BASE) as usize;
                true
            }
            InputEvent::Up | InputEvent::Down => {
                let delta = if *event == InputEvent::Up { -1 } else { 1 };
                let limit = render::content(self).len() as u16;
                self.scroll.step(delta, limit);
                true
            }
            _ => false,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(self, f, area, click_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> HomeScreen {
        HomeScreen::new(User::from_email("ana@x.com"), 0)
    }

    #[test]
    fn arrows_cycle_areas() {
        let mut s = screen();
        s.handle_input(&InputEvent::Left);
        assert_eq!(s.selected_area, INTEREST_AREAS.len() - 1);
        s.handle_input(&InputEvent::Right);
        s.handle_input(&InputEvent::Right);
        assert_eq!(s.selected_area, 1);
    }

    #[test]
    fn tap_selects_area() {
        let mut s = screen();
        assert!(s.handle_input(&InputEvent::Click(AREA_BASE + 3)));
        assert_eq!(INTEREST_AREAS[s.selected_area], "Sustentabilidade");
        assert!(!s.handle_input(&InputEvent::Click(AREA_BASE + 5)));
    }

    #[test]
    fn tab_keys_are_not_consumed() {
        let mut s = screen();
        for key in ['c', 'p', 'a', 'u', 'm'] {
            assert!(!s.handle_input(&InputEvent::Key(key)));
        }
    }

    #[test]
    fn restored_area_is_clamped() {
        let s = HomeScreen::new(User::from_email("ana@x.com"), 42);
        assert_eq!(s.selected_area, INTEREST_AREAS.len() - 1);
    }

    #[test]
    fn scroll_follows_the_drawn_limit() {
        let mut s = screen();
        let rows = render::content(&s).len() as u16;
        s.scroll.fit(rows, rows - 3);
        for _ in 0..20 {
            s.handle_input(&InputEvent::Down);
        }
        assert_eq!(s.scroll.offset(), 3);
        s.handle_input(&InputEvent::Up);
        assert_eq!(s.scroll.offset(), 2);
    }

    #[test]
    fn greeting_uses_name() {
        let s = screen();
        let first: String = render::content(&s).into_lines()[0]
            .spans
            .iter()
            .map(|sp| sp.content.as_ref())
            .collect();
        assert_eq!(first.trim(), "Olá, ana! 👋");
    }
}
