//! Self-assessment rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::app::actions::TAB_BASE;
use crate::input::{is_narrow_layout, ClickState};
use crate::screens::Tab;
use crate::widgets::{progress_bar, ClickableList};

use super::actions::*;
use super::state::{AssessmentState, Priority, Recommendation, QUESTION_COUNT};

pub fn render(
    state: &AssessmentState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let borders = if is_narrow_layout(area.width) {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };
    match &state.results {
        None => render_question(state, f, area, borders, click_state),
        Some(results) => render_results(state, results, f, area, borders, click_state),
    }
}

fn inner_width(area: Rect, borders: Borders) -> u16 {
    if borders.contains(Borders::LEFT) {
        area.width.saturating_sub(2)
    } else {
        area.width
    }
}

// ── Question view ──────────────────────────────────────────────────────

/// Progress header, prompt and one tappable `[n]` line per option.
fn question_list(state: &AssessmentState, bar_width: u16) -> ClickableList<'static> {
    let question = state.question();
    let mut cl = ClickableList::new();
    cl.push(Line::from(vec![
        Span::styled(
            format!(" Pergunta {} de {}", state.current + 1, QUESTION_COUNT),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("  · {}", question.category.label()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    cl.push(Line::from(vec![
        Span::styled(
            format!(" {}", progress_bar(state.progress_percent(), bar_width)),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            format!(" {}%", state.progress_percent()),
            Style::default().fg(Color::Gray),
        ),
    ]));
    cl.push(Line::from(""));
    cl.push(Line::from(Span::styled(
        format!(" {}", question.prompt),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(""));

    let selected = state.engine.answers().get(state.current);
    for (i, option) in question.options.iter().enumerate() {
        let is_selected = selected == Some(*option);
        let label_style = if is_selected {
            Style::default().fg(Color::Black).bg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        cl.push_clickable(
            Line::from(vec![
                Span::styled(
                    format!(" [{}] ", i + 1),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*option, label_style),
            ]),
            OPTION_BASE + i as u16,
        );
    }
    cl
}

fn render_question(
    state: &AssessmentState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let width = inner_width(area, borders);
    let bar_width = width.saturating_sub(8).min(40);
    let cl = question_list(state, bar_width);

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Autoavaliação de Bem-estar ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, 1, 1, 0, width);
    }
    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

// ── Results view ───────────────────────────────────────────────────────

fn priority_style(priority: Priority) -> Style {
    match priority {
        Priority::High => Style::default().fg(Color::White).bg(Color::Red),
        Priority::Medium => Style::default().fg(Color::Black).bg(Color::Yellow),
    }
}

fn results_list(results: &[Recommendation]) -> ClickableList<'static> {
    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        " ✅ Autoavaliação Completa!",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(Span::styled(
        " Recomendações personalizadas para você",
        Style::default().fg(Color::Gray),
    )));
    cl.push(Line::from(""));

    let courses_tab = TAB_BASE + Tab::Courses.index() as u16;
    for rec in results {
        cl.push(Line::from(vec![
            Span::raw(format!(" {} ", rec.icon)),
            Span::styled(
                rec.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!(" {} ", rec.priority.label()), priority_style(rec.priority)),
        ]));
        cl.push(Line::from(Span::styled(
            format!("    {}", rec.description),
            Style::default().fg(Color::Gray),
        )));
        cl.push_clickable(
            Line::from(Span::styled(
                "    Ver Curso →",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            )),
            courses_tab,
        );
        cl.push(Line::from(""));
    }

    cl.push_clickable(
        Line::from(vec![
            Span::styled(
                " [R] ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("Refazer Avaliação", Style::default().fg(Color::White)),
        ]),
        RETRY,
    );
    cl
}

/// Logical lines of the results view; upper bound for its scroll offset.
pub fn results_line_count(state: &AssessmentState) -> u16 {
    state
        .results
        .as_deref()
        .map_or(0, |results| results_list(results).len() as u16)
}

fn render_results(
    state: &AssessmentState,
    results: &[Recommendation],
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let cl = results_list(results);
    let width = inner_width(area, borders);
    let viewport = area.height.saturating_sub(2);
    let scroll = state.scroll.fit(cl.visual_height(width), viewport);

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::Green))
        .title(Span::styled(
            " Resultado ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));

    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, 1, 1, scroll, width);
    }
    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(widget, area);
}
