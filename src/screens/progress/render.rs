//! Progresso rendering.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::content::{bar_len, format_hours, ACHIEVEMENTS, SKILLS, WEEK};
use crate::input::is_narrow_layout;
use crate::widgets::progress_bar;

use super::ProgressScreen;

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {text}"),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Every line of the screen. `bar_width` is the room left for chart and
/// skill bars.
pub fn content(bar_width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            " Acompanhe sua evolução e bem-estar",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        heading("Horas de Estudo e Bem-estar"),
    ];

    for day in &WEEK {
        let len = bar_len(day.hours, bar_width) as usize;
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<4}", day.day), Style::default().fg(Color::Gray)),
            Span::raw(format!("{} ", day.mood)),
            Span::styled("▇".repeat(len), Style::default().fg(Color::Blue)),
            Span::styled(
                format!(" {}", format_hours(day.hours)),
                Style::default().fg(Color::White),
            ),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(heading("Suas Habilidades"));
    for skill in &SKILLS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}", skill.name),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  {}", skill.category),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}", progress_bar(skill.level, bar_width)),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!(" {}%", skill.level),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(heading("Conquistas MindCare"));
    for achievement in &ACHIEVEMENTS {
        lines.push(Line::from(vec![
            Span::raw(format!("  {} ", achievement.icon)),
            Span::styled(
                achievement.title,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", achievement.description),
            Style::default().fg(Color::Gray),
        )));
    }
    lines
}

pub fn render(screen: &ProgressScreen, f: &mut Frame, area: Rect) {
    let is_narrow = is_narrow_layout(area.width);
    let (borders, inner_width) = if is_narrow {
        (Borders::TOP | Borders::BOTTOM, area.width)
    } else {
        (Borders::ALL, area.width.saturating_sub(2))
    };
    // label (6) + mood (3) + value (6)
    let bar_width = inner_width.saturating_sub(16).min(30);

    let paragraph = Paragraph::new(content(bar_width)).wrap(Wrap { trim: false });
    let rows = paragraph.line_count(inner_width.max(1)) as u16;
    let scroll = screen.scroll.fit(rows, area.height.saturating_sub(2));

    let widget = paragraph
        .block(
            Block::default()
                .borders(borders)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(
                    " Seu Progresso ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .scroll((scroll, 0));
    f.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn busiest_day_fills_the_chart() {
        let lines = content(20);
        let thursday = lines.iter().map(text).find(|t| t.contains("Qui")).unwrap();
        assert_eq!(thursday.chars().filter(|&c| c == '▇').count(), 20);
        let sunday = lines.iter().map(text).find(|t| t.contains("Dom")).unwrap();
        assert_eq!(sunday.chars().filter(|&c| c == '▇').count(), 5);
    }

    #[test]
    fn lists_every_skill_and_achievement() {
        let all: String = content(10).iter().map(text).collect::<Vec<_>>().join("\n");
        for skill in &SKILLS {
            assert!(all.contains(skill.name));
        }
        for achievement in &ACHIEVEMENTS {
            assert!(all.contains(achievement.title));
        }
    }
}
