//! Login screen rendering.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::session::{Field, FieldError, LoginForm};
use crate::widgets::ClickableList;

use super::{LoginScreen, FOCUS_EMAIL, FOCUS_PASSWORD, SUBMIT, TOGGLE_REMEMBER};

const FORM_WIDTH: u16 = 48;
const EMAIL_PLACEHOLDER: &str = "seu@email.com";
const PASSWORD_PLACEHOLDER: &str = "••••••••";

pub fn render(
    screen: &LoginScreen,
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

    // Centre a fixed-width column on wide screens.
    let column = if is_narrow {
        area
    } else {
        let side = area.width.saturating_sub(FORM_WIDTH) / 2;
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(side),
                Constraint::Length(FORM_WIDTH.min(area.width)),
                Constraint::Min(0),
            ])
            .split(area)[1]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(14)])
        .split(column);

    render_header(f, chunks[0], borders);
    render_form(screen, f, chunks[1], borders, click_state);
}

fn render_header(f: &mut Frame, area: Rect, borders: Borders) {
    let lines = vec![
        Line::from(Span::styled(
            "🧠 SkillUpPlus +230",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Cuidando da Mente que Inova",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "Requalificação com foco em bem-estar",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(borders)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(widget, area);
}

/// Text shown in an input box, and whether it is the placeholder.
fn field_text(form: &LoginForm, field: Field) -> (String, bool) {
    let (value, placeholder) = match field {
        Field::Email => (form.email.clone(), EMAIL_PLACEHOLDER),
        Field::Password => ("•".repeat(form.password.chars().count()), PASSWORD_PLACEHOLDER),
        Field::RememberMe => return (String::new(), false),
    };
    if form.focus == field {
        (format!("{value}▏"), false)
    } else if value.is_empty() {
        (placeholder.to_string(), true)
    } else {
        (value, false)
    }
}

fn field_style(focused: bool, placeholder: bool) -> Style {
    if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else if placeholder {
        Style::default()
            .fg(Color::Gray)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::DIM | Modifier::ITALIC)
    } else {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}

fn input_line(form: &LoginForm, field: Field, box_width: usize) -> Line<'static> {
    let (text, placeholder) = field_text(form, field);
    Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!(" {text:<box_width$}"),
            field_style(form.focus == field, placeholder),
        ),
    ])
}

fn error_line(error: Option<FieldError>) -> Line<'static> {
    match error {
        Some(e) => Line::from(Span::styled(format!("   {e}"), Style::default().fg(Color::Red))),
        None => Line::from(""),
    }
}

fn render_form(
    screen: &LoginScreen,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let form = &screen.form;
    let box_width = area.width.saturating_sub(6) as usize;
    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(" Email", Style::default().fg(Color::Gray))));
    cl.push_clickable(input_line(form, Field::Email, box_width), FOCUS_EMAIL);
    cl.push(error_line(screen.errors.email));

    cl.push(Line::from(Span::styled(" Senha", Style::default().fg(Color::Gray))));
    cl.push_clickable(input_line(form, Field::Password, box_width), FOCUS_PASSWORD);
    cl.push(error_line(screen.errors.password));

    let checkbox = if form.remember_me { "☑" } else { "☐" };
    let checkbox_style = if form.focus == Field::RememberMe {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    cl.push_clickable(
        Line::from(Span::styled(
            format!("  {checkbox} Lembrar meus dados"),
            checkbox_style,
        )),
        TOGGLE_REMEMBER,
    );
    cl.push(Line::from(""));
    cl.push_clickable(
        Line::from(Span::styled(
            format!("  {:^width$}", "Entrar", width = box_width + 1),
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )),
        SUBMIT,
    );
    cl.push(Line::from(""));
    cl.push(Line::from(vec![
        Span::styled("  Não tem conta? ", Style::default().fg(Color::DarkGray)),
        Span::styled("Criar agora", Style::default().fg(Color::Cyan)),
    ]));
    cl.push(Line::from(Span::styled(
        "  Tab: próximo campo · Enter: entrar",
        Style::default().fg(Color::DarkGray),
    )));

    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, 1, 1, 0, 0);
    }
    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(borders)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Entrar "),
    );
    f.render_widget(widget, area);
}
