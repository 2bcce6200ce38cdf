//! Self-assessment screen: four questions, then personalised recommendations.

pub mod actions;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::screens::Screen;

use actions::*;
use state::{AssessmentState, OPTION_COUNT, QUESTION_COUNT};

pub struct AssessmentScreen {
    pub state: AssessmentState,
}

impl AssessmentScreen {
    pub fn new() -> Self {
        Self {
            state: AssessmentState::new(),
        }
    }

    /// Answer the question on screen with option `option` and move on.
    /// After the last question the answers are evaluated.
    fn choose(&mut self, option: usize) -> bool {
        let s = &mut self.state;
        let Some(&text) = s.question().options.get(option) else {
            return false;
        };
        if let Err(e) = s.engine.record_answer(s.current, text) {
            warn!("SkillUpPlus: answer not recorded: {e}");
            return true;
        }

        if s.current + 1 < QUESTION_COUNT {
            s.current += 1;
            return true;
        }

        match s.engine.recommendations() {
            Ok(recs) => {
                log!("SkillUpPlus: assessment complete ({} recommendations)", recs.len());
                s.results = Some(recs);
                s.scroll.reset();
            }
            // Unanswered earlier questions: go back to the first one.
            Err(e) => {
                warn!("SkillUpPlus: cannot build recommendations: {e}");
                if let Some(&first) = s.engine.answers().missing().first() {
                    s.current = first;
                }
            }
        }
        true
    }

    fn retry(&mut self) {
        self.state.engine.reset();
        self.state.current = 0;
        self.state.results = None;
        self.state.scroll.reset();
    }

    fn scroll_by(&mut self, delta: i32) {
        let limit = render::results_line_count(&self.state);
        self.state.scroll.step(delta, limit);
    }

    fn handle_key(&mut self, key: char) -> bool {
        if self.state.results.is_some() {
            return match key {
                'r' => {
                    self.retry();
                    true
                }
                _ => false,
            };
        }
        match key.to_digit(10) {
            Some(d @ 1..=5) => self.choose(d as usize - 1),
            _ => false,
        }
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        match action_id {
            id if self.state.results.is_none()
                && (OPTION_BASE..OPTION_BASE + OPTION_COUNT as u16).contains(&id) =>
            {
                self.choose((id - OPTION_BASE) as usize)
            }
            RETRY if self.state.results.is_some() => {
                self.retry();
                true
            }
            _ => false,
        }
    }
}

impl Screen for AssessmentScreen {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Click(id) => self.handle_click(*id),
            InputEvent::Up if self.state.results.is_some() => {
                self.scroll_by(-1);
                true
            }
            InputEvent::Down if self.state.results.is_some() => {
                self.scroll_by(1);
                true
            }
            _ => false,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}
