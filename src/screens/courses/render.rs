//! Cursos rendering.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::content::{filter_courses, format_rating, format_thousands, COURSE_FILTERS};
use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{ClickableList, TabBar};

use super::{CoursesScreen, FILTER_BASE, FILTER_NEXT, FILTER_PREV};

pub fn render(
    screen: &CoursesScreen,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let is_narrow = is_narrow_layout(area.width);
    let borders = if is_narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_filters(screen, f, chunks[0], borders, is_narrow, click_state);
    render_catalog(screen, f, chunks[1], borders, is_narrow);
}

fn filter_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn render_filters(
    screen: &CoursesScreen,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    is_narrow: bool,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Catálogo de Cursos ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

    let mut cs = click_state.borrow_mut();
    // The five labels need ~63 columns; phones get a single cycling chip.
    if is_narrow {
        TabBar::new(" ")
            .tab("◀", Style::default().fg(Color::Yellow), FILTER_PREV)
            .tab(COURSE_FILTERS[screen.filter], filter_style(true), FILTER_NEXT)
            .tab("▶", Style::default().fg(Color::Yellow), FILTER_NEXT)
            .block(block)
            .render(f, area, &mut cs);
    } else {
        let mut bar = TabBar::new("│").block(block);
        for (i, label) in COURSE_FILTERS.iter().enumerate() {
            bar = bar.tab(*label, filter_style(i == screen.filter), FILTER_BASE + i as u16);
        }
        bar.render(f, area, &mut cs);
    }
}

/// Catalogue entries under `filter`, four lines each. Nothing here is tappable.
pub fn catalog_list(filter: usize) -> ClickableList<'static> {
    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        " Cuide da mente enquanto se desenvolve",
        Style::default().fg(Color::Gray),
    )));
    cl.push(Line::from(""));
    for course in filter_courses(filter) {
        cl.push(Line::from(vec![
            Span::raw(format!(" {} ", course.icon)),
            Span::styled(
                course.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", course.category),
                Style::default().fg(Color::Magenta),
            ),
        ]));
        cl.push(Line::from(Span::styled(
            format!("    {}", course.description),
            Style::default().fg(Color::Gray),
        )));
        cl.push(Line::from(vec![
            Span::styled(
                format!("    ⏱ {}", course.duration),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("  ⭐ {}", format_rating(course.rating)),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!("  {} alunos", format_thousands(course.students)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        cl.push(Line::from(""));
    }
    cl
}

fn render_catalog(
    screen: &CoursesScreen,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    is_narrow: bool,
) {
    let inner_width = if is_narrow {
        area.width
    } else {
        area.width.saturating_sub(2)
    };
    let cl = catalog_list(screen.filter);
    let scroll = screen
        .scroll
        .fit(cl.visual_height(inner_width), area.height.saturating_sub(2));

    let count = screen.visible_count();
    let widget = Paragraph::new(cl.into_lines())
        .block(
            Block::default()
                .borders(borders)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {count} cursos ")),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(widget, area);
}
