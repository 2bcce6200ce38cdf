//! Input plumbing shared by every screen: normalized events, tap targets,
//! and pixel → cell conversion.

use ratzilla::ratatui::layout::Rect;

/// Keyboard and pointer input after normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A printable key.
    Key(char),
    /// A tap on a registered target, carrying its action ID.
    Click(u16),
    Backspace,
    Enter,
    Tab,
    Esc,
    Left,
    Right,
    Up,
    Down,
}

/// A tappable cell rectangle and the action it triggers.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    pub rect: Rect,
    pub action_id: u16,
}

/// Targets registered by the last frame, plus the terminal size they were
/// laid out for. Rebuilt on every draw.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Make a whole row of `area` tappable. Rows outside `area` are ignored.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.add_click_target(Rect::new(area.x, row, area.width, 1), action_id);
        }
    }

    /// Lay out targets for a one-line tab strip.
    ///
    /// `tabs` holds `(label display width, action_id)` in render order, with
    /// `separator_width` columns between labels. Each tab owns its label and
    /// half of each neighbouring separator; the first and last tabs stretch
    /// to the edges of `total_width`, so the strip has no dead columns.
    pub fn register_tab_targets(
        &mut self,
        tabs: &[(u16, u16)],
        separator_width: u16,
        x: u16,
        y: u16,
        total_width: u16,
        height: u16,
    ) {
        if tabs.is_empty() || total_width == 0 {
            return;
        }

        let mut starts = Vec::with_capacity(tabs.len());
        let mut col = 0u16;
        for (i, &(width, _)) in tabs.iter().enumerate() {
            if i > 0 {
                col += separator_width;
            }
            starts.push(col);
            col += width;
        }

        let last = tabs.len() - 1;
        for (i, &(width, action_id)) in tabs.iter().enumerate() {
            let left = if i == 0 {
                0
            } else {
                let prev_end = starts[i - 1] + tabs[i - 1].0;
                prev_end + (starts[i] - prev_end) / 2
            };
            let right = if i == last {
                total_width
            } else {
                let end = starts[i] + width;
                end + (starts[i + 1] - end) / 2
            };
            let w = right.saturating_sub(left);
            if w > 0 {
                self.add_click_target(Rect::new(x + left, y, w, height), action_id);
            }
        }
    }

    /// Action under a cell. Targets registered later sit on top, so the
    /// drawer overlay wins over the screen beneath it.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            let inside = col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height;
            inside.then_some(t.action_id)
        })
    }
}

/// Phones in portrait land below this width.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}

/// Map a pixel offset inside the grid to a cell index along one axis.
fn pixel_to_cell(offset: f64, extent: f64, cells: u16) -> Option<u16> {
    if extent <= 0.0 || cells == 0 || offset < 0.0 {
        return None;
    }
    let cell = (offset / (extent / cells as f64)) as u16;
    (cell < cells).then_some(cell)
}

/// `click_y` is relative to the top of the grid element.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    pixel_to_cell(click_y, grid_height, terminal_rows)
}

/// `click_x` is relative to the left of the grid element.
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    pixel_to_cell(click_x, grid_width, terminal_cols)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hit_test ───────────────────────────────────────────────────

    #[test]
    fn hit_test_rows() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 10, 40, 1), 1);
        cs.add_click_target(Rect::new(0, 11, 40, 1), 2);

        assert_eq!(cs.hit_test(5, 10), Some(1));
        assert_eq!(cs.hit_test(5, 11), Some(2));
        assert_eq!(cs.hit_test(5, 12), None);
        assert_eq!(cs.hit_test(40, 10), None);
    }

    #[test]
    fn hit_test_tall_target() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(2, 5, 10, 3), 7);

        assert_eq!(cs.hit_test(2, 4), None);
        assert_eq!(cs.hit_test(2, 5), Some(7));
        assert_eq!(cs.hit_test(11, 7), Some(7));
        assert_eq!(cs.hit_test(1, 6), None);
        assert_eq!(cs.hit_test(2, 8), None);
    }

    #[test]
    fn hit_test_overlay_wins() {
        let mut cs = ClickState::new();
        // screen content first, drawer item on top of it
        cs.add_click_target(Rect::new(0, 5, 60, 1), 1);
        cs.add_click_target(Rect::new(0, 5, 24, 1), 2);

        assert_eq!(cs.hit_test(3, 5), Some(2));
        assert_eq!(cs.hit_test(30, 5), Some(1));
    }

    #[test]
    fn hit_test_after_clear() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 0, 10, 1), 1);
        cs.clear_targets();
        assert!(cs.targets.is_empty());
        assert_eq!(cs.hit_test(0, 0), None);
    }

    // ── add_row_target ─────────────────────────────────────────────

    #[test]
    fn row_target_spans_area_width() {
        let mut cs = ClickState::new();
        let area = Rect::new(4, 10, 30, 5);
        cs.add_row_target(area, 12, 99);

        assert_eq!(cs.hit_test(4, 12), Some(99));
        assert_eq!(cs.hit_test(33, 12), Some(99));
        assert_eq!(cs.hit_test(3, 12), None);
    }

    #[test]
    fn row_target_outside_area_is_dropped() {
        let mut cs = ClickState::new();
        let area = Rect::new(0, 10, 30, 5);
        cs.add_row_target(area, 9, 1);
        cs.add_row_target(area, 15, 2);
        assert!(cs.targets.is_empty());
    }

    // ── register_tab_targets ───────────────────────────────────────

    #[test]
    fn tab_targets_split_separators() {
        // " Início " (8) " Cursos " (8) " Progresso " (11), separator "│" (1)
        let mut cs = ClickState::new();
        cs.register_tab_targets(&[(8, 1), (8, 2), (11, 3)], 1, 0, 20, 60, 3);

        assert_eq!(cs.targets.len(), 3);
        assert_eq!(cs.hit_test(0, 20), Some(1));
        assert_eq!(cs.hit_test(7, 20), Some(1));
        assert_eq!(cs.hit_test(8, 21), Some(2));
        assert_eq!(cs.hit_test(16, 22), Some(2));
        assert_eq!(cs.hit_test(17, 20), Some(3));
        assert_eq!(cs.hit_test(59, 20), Some(3));
        assert_eq!(cs.hit_test(10, 23), None);
    }

    #[test]
    fn tab_targets_wide_separator() {
        // separator " │ " (3): first column goes left, the other two go right
        let mut cs = ClickState::new();
        cs.register_tab_targets(&[(6, 10), (6, 11)], 3, 0, 0, 40, 1);

        assert_eq!(cs.hit_test(6, 0), Some(10));
        assert_eq!(cs.hit_test(7, 0), Some(11));
        assert_eq!(cs.hit_test(39, 0), Some(11));
    }

    #[test]
    fn tab_targets_respect_offset() {
        let mut cs = ClickState::new();
        cs.register_tab_targets(&[(6, 10)], 1, 5, 3, 20, 1);
        assert_eq!(cs.hit_test(4, 3), None);
        assert_eq!(cs.hit_test(5, 3), Some(10));
        assert_eq!(cs.hit_test(24, 3), Some(10));
        assert_eq!(cs.hit_test(25, 3), None);
    }

    #[test]
    fn tab_targets_empty_or_zero_width() {
        let mut cs = ClickState::new();
        cs.register_tab_targets(&[], 1, 0, 0, 80, 1);
        cs.register_tab_targets(&[(6, 1)], 1, 0, 0, 0, 1);
        assert!(cs.targets.is_empty());
    }

    // ── layout / pixel conversion ──────────────────────────────────

    #[test]
    fn narrow_threshold() {
        assert!(is_narrow_layout(37));
        assert!(is_narrow_layout(59));
        assert!(!is_narrow_layout(60));
    }

    #[test]
    fn pixel_rows() {
        assert_eq!(pixel_y_to_row(0.0, 450.0, 30), Some(0));
        assert_eq!(pixel_y_to_row(14.9, 450.0, 30), Some(0));
        assert_eq!(pixel_y_to_row(15.0, 450.0, 30), Some(1));
        assert_eq!(pixel_y_to_row(449.0, 450.0, 30), Some(29));
        assert_eq!(pixel_y_to_row(450.0, 450.0, 30), None);
    }

    #[test]
    fn pixel_rows_reject_bad_input() {
        assert_eq!(pixel_y_to_row(-1.0, 450.0, 30), None);
        assert_eq!(pixel_y_to_row(10.0, 0.0, 30), None);
        assert_eq!(pixel_y_to_row(10.0, 450.0, 0), None);
    }

    #[test]
    fn pixel_cols() {
        assert_eq!(pixel_x_to_col(0.0, 370.0, 37), Some(0));
        assert_eq!(pixel_x_to_col(10.0, 370.0, 37), Some(1));
        assert_eq!(pixel_x_to_col(369.0, 370.0, 37), Some(36));
        assert_eq!(pixel_x_to_col(370.0, 370.0, 37), None);
    }

    #[test]
    fn tap_pipeline_on_phone_grid() {
        // 37x50 grid at 10x15 px cells; option rows at 9..=13, tab bar at 47..50
        let mut cs = ClickState::new();
        cs.terminal_cols = 37;
        cs.terminal_rows = 50;
        for (i, row) in (9..14).enumerate() {
            cs.add_click_target(Rect::new(0, row, 37, 1), 400 + i as u16);
        }
        cs.register_tab_targets(&[(8, 1), (8, 2), (11, 3)], 1, 0, 47, 37, 3);

        let tap = |px: f64, py: f64| {
            let col = pixel_x_to_col(px, 370.0, cs.terminal_cols)?;
            let row = pixel_y_to_row(py, 750.0, cs.terminal_rows)?;
            cs.hit_test(col, row)
        };
        assert_eq!(tap(100.0, 9.0 * 15.0 + 7.0), Some(400));
        assert_eq!(tap(100.0, 13.0 * 15.0 + 1.0), Some(404));
        assert_eq!(tap(5.0, 48.0 * 15.0), Some(1));
        assert_eq!(tap(360.0, 49.0 * 15.0), Some(3));
        assert_eq!(tap(100.0, 0.0), None);
    }
}
