//! Cursos: the course catalogue with a category filter.

pub mod render;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::content::{filter_courses, COURSE_FILTERS};
use crate::input::{ClickState, InputEvent};
use crate::screens::Screen;
use crate::widgets::Scroll;

pub const FILTER_BASE: u16 = 300; // +filter index 0..4
pub const FILTER_PREV: u16 = 310;
pub const FILTER_NEXT: u16 = 311;

pub struct CoursesScreen {
    /// Index into `COURSE_FILTERS`.
    pub filter: usize,
    pub scroll: Scroll,
}

impl CoursesScreen {
    pub fn new(filter: usize) -> Self {
        Self {
            filter: filter.min(COURSE_FILTERS.len() - 1),
            scroll: Scroll::default(),
        }
    }

    fn set_filter(&mut self, filter: usize) {
        self.filter = filter;
        self.scroll.reset();
    }

    fn cycle_filter(&mut self, forward: bool) {
        let n = COURSE_FILTERS.len();
        let next = if forward {
            (self.filter + 1) % n
        } else {
            (self.filter + n - 1) % n
        };
        self.set_filter(next);
    }

    pub fn visible_count(&self) -> usize {
        filter_courses(self.filter).count()
    }
}

impl Screen for CoursesScreen {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Left | InputEvent::Click(FILTER_PREV) => {
                self.cycle_filter(false);
                true
            }
            InputEvent::Right | InputEvent::Click(FILTER_NEXT) => {
                self.cycle_filter(true);
                true
            }
            InputEvent::Click(id)
                if (FILTER_BASE..FILTER_BASE + COURSE_FILTERS.len() as u16).contains(id) =>
            {
                self.set_filter((id - FILTER_BASE) as usize);
                true
            }
            InputEvent::Up | InputEvent::Down => {
                let delta = if *event == InputEvent::Up { -1 } else { 1 };
                let limit = render::catalog_list(self.filter).len() as u16;
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

    #[test]
    fn tap_filter() {
        let mut s = CoursesScreen::new(0);
        assert_eq!(s.visible_count(), 6);
        assert!(s.handle_input(&InputEvent::Click(FILTER_BASE + 1)));
        assert_eq!(COURSE_FILTERS[s.filter], "Saúde Mental");
        assert_eq!(s.visible_count(), 3);
    }

    #[test]
    fn arrows_wrap_around() {
        let mut s = CoursesScreen::new(0);
        s.handle_input(&InputEvent::Left);
        assert_eq!(COURSE_FILTERS[s.filter], "Soft Skills");
        s.handle_input(&InputEvent::Click(FILTER_NEXT));
        assert_eq!(s.filter, 0);
    }

    #[test]
    fn changing_filter_resets_scroll() {
        let mut s = CoursesScreen::new(0);
        s.handle_input(&InputEvent::Down);
        s.handle_input(&InputEvent::Down);
        assert_eq!(s.scroll.offset(), 2);
        s.handle_input(&InputEvent::Right);
        assert_eq!(s.scroll.offset(), 0);
    }

    #[test]
    fn short_catalogue_does_not_scroll_once_drawn() {
        // Gestão has a single course, which fits a 20-row viewport.
        let mut s = CoursesScreen::new(3);
        let rows = render::catalog_list(s.filter).len() as u16;
        s.scroll.fit(rows, 20);
        assert!(s.handle_input(&InputEvent::Down));
        assert_eq!(s.scroll.offset(), 0);
    }

    #[test]
    fn restored_filter_is_clamped() {
        assert_eq!(CoursesScreen::new(99).filter, COURSE_FILTERS.len() - 1);
    }
}
