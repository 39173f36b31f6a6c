use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::timer::format_seconds;
use crate::tui::App;

pub fn draw_quiz(f: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let Some(question) = session.current_question() else {
        return;
    };

    let position = session.position();
    let total = session.total();
    let answered = session.is_answered();
    let selected = session.selected(position);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                app.title.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("    Question {} of {}", position + 1, total),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("    {}", session.participant().name),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        progress_dots(position, total),
        Line::from(""),
        timer_line(session.remaining_seconds(), answered),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", question.category.replace('-', " ").to_uppercase()),
            Style::default().fg(Color::Blue),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", question.question),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, option) in question.options.iter().enumerate() {
        lines.push(option_line(
            i,
            option,
            answered,
            selected,
            question.correct_answer,
            app.choice_cursor,
        ));
    }

    lines.push(Line::from(""));
    if answered {
        let verdict = if selected == Some(question.correct_answer) {
            Span::styled("  ✓ Correct", Style::default().fg(Color::Green))
        } else if selected.is_none() {
            Span::styled("  ⏱ Time's up", Style::default().fg(Color::Red))
        } else {
            Span::styled("  ✗ Incorrect", Style::default().fg(Color::Red))
        };
        lines.push(Line::from(verdict));
    } else {
        lines.push(Line::from(Span::styled(
            "  1-9 answer   arrows move   Enter select   Ctrl+Q quit",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn progress_dots(position: usize, total: usize) -> Line<'static> {
    let mut spans: Vec<Span> = vec![Span::raw("  ")];
    for i in 0..total {
        let (dot, color) = if i < position {
            ("●", Color::Green)
        } else if i == position {
            ("●", Color::Cyan)
        } else {
            ("○", Color::DarkGray)
        };
        spans.push(Span::styled(format!("{} ", dot), Style::default().fg(color)));
    }
    Line::from(spans)
}

fn timer_line(remaining: u32, answered: bool) -> Line<'static> {
    let style = if answered {
        Style::default().fg(Color::DarkGray)
    } else if remaining <= 5 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    Line::from(Span::styled(
        format!("  ⏱  {}", format_seconds(remaining)),
        style,
    ))
}

fn option_line(
    idx: usize,
    text: &str,
    answered: bool,
    selected: Option<usize>,
    correct: usize,
    cursor: usize,
) -> Line<'static> {
    let is_selected = selected == Some(idx);
    let is_correct = idx == correct;

    let (marker, style) = if answered {
        if is_correct {
            ("✓", Style::default().fg(Color::Green))
        } else if is_selected {
            ("✗", Style::default().fg(Color::Red))
        } else {
            (" ", Style::default().fg(Color::DarkGray))
        }
    } else if idx == cursor {
        ("▸", Style::default().fg(Color::Yellow))
    } else {
        (" ", Style::default().fg(Color::White))
    };

    Line::from(Span::styled(
        format!("  {} {}. {}", marker, idx + 1, text),
        style,
    ))
}
