//! Início rendering.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::content::{INTEREST_AREAS, IN_PROGRESS, STATS};
use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{progress_bar, ClickableList};

use super::{HomeScreen, AREA_BASE};

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        format!(" {text}"),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn stat<'a>(icon: &'a str, value: String, label: &'a str) -> Vec<Span<'a>> {
    vec![
        Span::raw(format!(" {icon} ")),
        Span::styled(
            value,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {label:<18}"), Style::default().fg(Color::Gray)),
    ]
}

/// Every line of the screen, in order.
pub fn content(screen: &HomeScreen) -> ClickableList<'_> {
    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        format!(" Olá, {}! 👋", screen.user.name),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(Span::styled(
        " Cuide da sua mente enquanto aprende",
        Style::default().fg(Color::Gray),
    )));
    cl.push(Line::from(""));

    cl.push(Line::from(
        [
            stat("🏆", STATS.courses_completed.to_string(), "Cursos Concluídos"),
            stat("⏱", format!("{}h", STATS.hours_learned), "Horas de Estudo"),
        ]
        .concat(),
    ));
    cl.push(Line::from(
        [
            stat("🧠", STATS.skills_acquired.to_string(), "Habilidades"),
            stat("⚡", format!("{} dias", STATS.week_streak), "Sequência"),
        ]
        .concat(),
    ));
    cl.push(Line::from(""));

    cl.push(heading("Área de Interesse"));
    for (i, area) in INTEREST_AREAS.iter().enumerate() {
        let selected = i == screen.selected_area;
        let (marker, style) = if selected {
            (
                "●",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("○", Style::default().fg(Color::White))
        };
        cl.push_clickable(
            Line::from(Span::styled(format!("   {marker} {area}"), style)),
            AREA_BASE + i as u16,
        );
    }
    cl.push(Line::from(Span::styled(
        "   ←/→ para trocar",
        Style::default().fg(Color::DarkGray),
    )));
    cl.push(Line::from(""));

    cl.push(heading("Seus Cursos em Andamento"));
    for course in &IN_PROGRESS {
        cl.push(Line::from(vec![
            Span::styled(
                format!("   {}", course.title),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  [{}]", course.category),
                Style::default().fg(Color::Magenta),
            ),
        ]));
        cl.push(Line::from(Span::styled(
            format!("   ⏱ {} · {}", course.hours, course.level),
            Style::default().fg(Color::DarkGray),
        )));
        cl.push(Line::from(vec![
            Span::styled(
                format!("   {}", progress_bar(course.progress, 20)),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!(" {}%", course.progress),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }
    cl
}

pub fn render(
    screen: &HomeScreen,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let is_narrow = is_narrow_layout(area.width);
    let (borders, inner_width) = if is_narrow {
        (Borders::TOP | Borders::BOTTOM, area.width)
    } else {
        (Borders::ALL, area.width.saturating_sub(2))
    };

    let cl = content(screen);
    let scroll = screen
        .scroll
        .fit(cl.visual_height(inner_width), area.height.saturating_sub(2));

    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, 1, 1, scroll, inner_width);
    }
    let widget = Paragraph::new(cl.into_lines())
        .block(
            Block::default()
                .borders(borders)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(
                    " Início ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(widget, area);
}
