use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::submit::Persistence;
use crate::tui::App;

pub fn draw_submitting(f: &mut Frame, area: Rect, _app: &App) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Submitting...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Sending your result to the collector..."),
        Line::from(""),
    ];

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(widget, area);
}

pub fn draw_results(f: &mut Frame, area: Rect, app: &App) {
    let Some(record) = app.record.as_ref() else {
        return;
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Quiz Complete",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Score: {} / {}  ({}%)",
                record.score, record.total_questions, record.percentage
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(score_message(record.percentage)),
        Line::from(""),
    ];

    match app.persistence.as_ref() {
        Some(Persistence::Saved { result_id }) => {
            lines.push(Line::from(Span::styled(
                "✓ Result saved",
                Style::default().fg(Color::Green),
            )));
            lines.push(Line::from(format!("Result ID: {}", result_id)));
        }
        Some(Persistence::Local { path, reason }) => {
            lines.push(Line::from(Span::styled(
                "⚠ Could not reach the results collector",
                Style::default().fg(Color::Yellow),
            )));
            lines.push(Line::from(reason.as_str()));
            lines.push(Line::from(""));
            lines.push(Line::from("Your result was saved locally:"));
            lines.push(Line::from(Span::styled(
                path.display().to_string(),
                Style::default().fg(Color::Cyan),
            )));
        }
        Some(Persistence::Unsaved { reason }) => {
            lines.push(Line::from(Span::styled(
                "✗ Result not saved",
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(reason.as_str()));
        }
        None => {}
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Exit",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn score_message(percentage: u32) -> &'static str {
    if percentage >= 90 {
        "Excellent! Outstanding performance!"
    } else if percentage >= 80 {
        "Great job! You have good cyber awareness!"
    } else if percentage >= 70 {
        "Good work! Keep learning about cybersecurity!"
    } else if percentage >= 60 {
        "Fair performance. Consider improving your cyber knowledge!"
    } else {
        "Needs improvement. Please study more about cybersecurity!"
    }
}
