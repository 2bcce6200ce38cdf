//! Perfil rendering.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::app::actions::LOGOUT;
use crate::content::{PROFILE_STATS, SETTINGS};
use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

use super::ProfileScreen;

pub fn content(screen: &ProfileScreen) -> ClickableList<'_> {
    let user = &screen.user;
    let mut cl = ClickableList::new();
    cl.push(Line::from(vec![
        Span::styled(
            format!(" ( {} ) ", user.initial()),
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", user.name),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    cl.push(Line::from(Span::styled(
        format!("        {}", user.email),
        Style::default().fg(Color::Gray),
    )));
    cl.push(Line::from(""));

    let number = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(Color::Gray);
    cl.push(Line::from(vec![
        Span::styled(format!(" {}", PROFILE_STATS.courses), number),
        Span::styled(" Cursos   ", label),
        Span::styled(format!("{}h", PROFILE_STATS.hours), number),
        Span::styled(" Estudadas   ", label),
        Span::styled(PROFILE_STATS.certificates.to_string(), number),
        Span::styled(" Certificados", label),
    ]));
    cl.push(Line::from(""));

    cl.push(Line::from(Span::styled(
        " Configurações",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    for item in SETTINGS {
        cl.push(Line::from(Span::styled(
            format!("   {item}  ›"),
            Style::default().fg(Color::White),
        )));
    }
    cl.push(Line::from(""));

    cl.push_clickable(
        Line::from(vec![
            Span::styled(
                " [X] ",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("Sair da Conta", Style::default().fg(Color::Red)),
        ]),
        LOGOUT,
    );
    cl
}

pub fn render(
    screen: &ProfileScreen,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let borders = if is_narrow_layout(area.width) {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };

    let cl = content(screen);
    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);
    }
    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(borders)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                " Perfil ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(widget, area);
}
