//! Shell rendering: header, active screen, bottom tab bar and drawer overlay.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::screens::{Screen, Tab};
use crate::widgets::{ClickableList, TabBar};

use super::actions::*;
use super::{App, MainShell, Route};

const DRAWER_WIDTH: u16 = 28;

pub fn render(app: &App, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    match &app.route {
        Route::Login(screen) => screen.render(f, area, click_state),
        Route::Main(shell) => render_main(shell, f, area, click_state),
    }
}

fn render_main(
    shell: &MainShell,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(8),    // Screen
            Constraint::Length(3), // Tab bar
        ])
        .split(area);

    render_header(shell, f, chunks[0], click_state);
    shell.active().render(f, chunks[1], click_state);
    render_tab_bar(shell, f, chunks[2], click_state);

    // Drawn last so its targets sit on top of the screen's.
    if shell.drawer_open {
        render_drawer(shell, f, area, click_state);
    }
}

fn render_header(
    shell: &MainShell,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let is_narrow = is_narrow_layout(area.width);
    let mut spans = vec![
        Span::styled(
            " ☰ ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "SkillUpPlus",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if !is_narrow {
        spans.push(Span::styled(
            "  Cuidando da Mente que Inova",
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.push(Span::styled(
        format!("  {}", shell.user.name),
        Style::default().fg(Color::Gray),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), area);

    // The whole header row opens the drawer, same as `m`.
    let mut cs = click_state.borrow_mut();
    cs.add_row_target(area, area.y, TOGGLE_DRAWER);
}

fn render_tab_bar(
    shell: &MainShell,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let is_narrow = is_narrow_layout(area.width);
    let borders = if is_narrow {
        Borders::TOP
    } else {
        Borders::ALL
    };

    let mut bar = TabBar::new("│").block(
        Block::default()
            .borders(borders)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    for (i, tab) in Tab::ALL[..Tab::BOTTOM_BAR].iter().enumerate() {
        let label = if is_narrow {
            tab.icon().to_string()
        } else {
            format!("{} {}", tab.icon(), tab.label())
        };
        let style = if *tab == shell.tab {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        bar = bar.tab(label, style, TAB_BASE + i as u16);
    }

    let mut cs = click_state.borrow_mut();
    bar.render(f, area, &mut cs);
}

fn render_drawer(
    shell: &MainShell,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let drawer = Rect::new(area.x, area.y, DRAWER_WIDTH.min(area.width), area.height);

    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        " 🧠 SkillUpPlus +230",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(Span::styled(
        format!(" {}", shell.user.email),
        Style::default().fg(Color::DarkGray),
    )));
    cl.push(Line::from(""));
    for (i, tab) in Tab::ALL.iter().enumerate() {
        let style = if *tab == shell.tab {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        cl.push_clickable(
            Line::from(Span::styled(format!(" {} {}", tab.icon(), tab.label()), style)),
            DRAWER_ITEM_BASE + i as u16,
        );
    }
    cl.push(Line::from(""));
    cl.push_clickable(
        Line::from(Span::styled(
            " [X] Sair",
            Style::default().fg(Color::Red),
        )),
        LOGOUT,
    );

    {
        let mut cs = click_state.borrow_mut();
        // Tapping beside the drawer closes it.
        cs.add_click_target(area, TOGGLE_DRAWER);
        cl.register_targets(drawer, &mut cs, 1, 1, 0, 0);
    }

    f.render_widget(Clear, drawer);
    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Menu "),
    );
    f.render_widget(widget, drawer);
}
