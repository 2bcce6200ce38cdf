//! Widgets that render and register their own tap targets.
//!
//! - [`TabBar`]: one-line tab strip (bottom navigation, category filters).
//! - [`ClickableList`]: lines paired with action IDs, wrap- and scroll-aware.
//! - [`Scroll`]: scroll offset kept within what the last draw showed.
//! - [`progress_bar`]: text bar used by course, skill and question progress.

use std::cell::Cell;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

// ── TabBar ─────────────────────────────────────────────────────

/// A row of labels separated by `separator`, each bound to an action ID.
///
/// ```ignore
/// TabBar::new("│")
///     .tab("Início", style(Tab::Home), TAB_HOME)
///     .tab("Cursos", style(Tab::Courses), TAB_COURSES)
///     .render(f, area, &mut cs);
/// ```
pub struct TabBar<'a> {
    tabs: Vec<(String, Style, u16)>,
    separator: &'a str,
    block: Option<Block<'a>>,
}

impl<'a> TabBar<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            tabs: Vec::new(),
            separator,
            block: None,
        }
    }

    pub fn tab(mut self, label: impl Into<String>, style: Style, action_id: u16) -> Self {
        self.tabs.push((label.into(), style, action_id));
        self
    }

    /// Borders shift the targets via `Block::inner`.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let separator_width = Line::from(self.separator).width() as u16;
        let mut spans = Vec::new();
        let mut widths = Vec::new();

        for (i, (label, style, action_id)) in self.tabs.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(self.separator, Style::default().fg(Color::DarkGray)));
            }
            let padded = format!(" {label} ");
            widths.push((Line::from(padded.as_str()).width() as u16, action_id));
            spans.push(Span::styled(padded, style));
        }

        let inner = self.block.as_ref().map_or(area, |b| b.inner(area));
        let mut paragraph = Paragraph::new(Line::from(spans));
        if let Some(block) = self.block {
            paragraph = paragraph.block(block);
        }
        f.render_widget(paragraph, area);

        // Full outer height keeps the strip easy to hit with a thumb.
        cs.register_tab_targets(
            &widths,
            separator_width,
            inner.x,
            area.y,
            inner.width,
            area.height.max(1),
        );
    }
}

// ── ClickableList ──────────────────────────────────────────────

/// Collects lines and remembers which of them are tappable, so targets
/// follow their line when lines are inserted above.
///
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push(Line::from("Catálogo"));
/// cl.push_clickable(Line::from(" [1] Mindfulness e Meditação"), COURSE_BASE);
/// cl.register_targets(area, &mut cs, 1, 1, scroll, inner_width);
/// f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
/// ```
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(index into lines, action_id)`
    actions: Vec<(usize, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        self.actions.push((self.lines.len(), action_id));
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Rows the lines occupy once wrapped to `inner_width`.
    pub fn visual_height(&self, inner_width: u16) -> u16 {
        if inner_width == 0 {
            return self.lines.len() as u16;
        }
        Paragraph::new(self.lines.clone())
            .wrap(Wrap { trim: false })
            .line_count(inner_width) as u16
    }

    /// Register a target on every visible row of every clickable line.
    ///
    /// * `top_offset` / `bottom_offset`: rows taken by borders or headers.
    /// * `scroll`: visual rows scrolled off the top.
    /// * `inner_width`: wrap width, or `0` when the paragraph does not wrap
    ///   (one line = one row).
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        scroll: u16,
        inner_width: u16,
    ) {
        let content_top = area.y + top_offset;
        let content_bottom = area.y + area.height.saturating_sub(bottom_offset);

        // Visual row where each logical line starts, plus its height.
        let mut spans = Vec::with_capacity(self.lines.len());
        let mut row = 0u16;
        for line in &self.lines {
            let width = line.width();
            let height = if inner_width == 0 || width <= inner_width as usize {
                1
            } else {
                width.div_ceil(inner_width as usize) as u16
            };
            spans.push((row, height));
            row += height;
        }

        for &(index, action_id) in &self.actions {
            let Some(&(start, height)) = spans.get(index) else {
                continue;
            };
            for visual in start..start + height {
                if visual < scroll {
                    continue;
                }
                let screen_row = content_top + (visual - scroll);
                if screen_row >= content_bottom {
                    break;
                }
                cs.add_row_target(area, screen_row, action_id);
            }
        }
    }
}

/// Largest scroll offset that still fills the viewport.
pub fn max_scroll(content_rows: u16, viewport_rows: u16) -> u16 {
    content_rows.saturating_sub(viewport_rows)
}

// ── Scroll ─────────────────────────────────────────────────────

/// Vertical offset of content taller than its viewport.
///
/// Input moves the offset with [`Scroll::step`]; every draw calls
/// [`Scroll::fit`], which records the real limit for the viewport and pulls
/// the offset back inside it. Until the first draw the logical line count
/// passed to `step` bounds the offset.
#[derive(Debug, Default)]
pub struct Scroll {
    offset: Cell<u16>,
    limit: Cell<Option<u16>>,
}

impl Scroll {
    pub fn offset(&self) -> u16 {
        self.offset.get()
    }

    pub fn step(&mut self, delta: i32, content_rows: u16) {
        let limit = self.limit.get().unwrap_or(content_rows);
        let next = (self.offset.get() as i32 + delta).clamp(0, limit as i32) as u16;
        self.offset.set(next);
    }

    /// Back to the top. The content is about to change, so the recorded
    /// limit is dropped as well.
    pub fn reset(&mut self) {
        self.offset.set(0);
        self.limit.set(None);
    }

    /// Called from render: clamp to [`max_scroll`] and return the offset to draw.
    pub fn fit(&self, content_rows: u16, viewport_rows: u16) -> u16 {
        let limit = max_scroll(content_rows, viewport_rows);
        let offset = self.offset.get().min(limit);
        self.limit.set(Some(limit));
        self.offset.set(offset);
        offset
    }
}

// ── progress_bar ───────────────────────────────────────────────

/// `width` cells of █/░ for a 0–100 percentage (values above 100 clamp).
pub fn progress_bar(percent: u16, width: u16) -> String {
    let filled = (percent.min(100) as u32 * width as u32 / 100) as usize;
    let empty = width as usize - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
