use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::{App, FormFocus};

fn input_box<'a>(
    label: &'a str,
    value: &'a str,
    focused: bool,
    width: usize,
) -> Vec<Line<'a>> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };

    let padded = format!("{:<width$}", value, width = width);

    vec![
        Line::from(format!("  {}", label)),
        Line::from(vec![
            Span::raw("  ┌"),
            Span::raw("─".repeat(width)),
            Span::raw("┐"),
        ]),
        Line::from(vec![
            Span::raw("  │"),
            Span::styled(padded, style),
            Span::raw("│"),
        ]),
        Line::from(vec![
            Span::raw("  └"),
            Span::raw("─".repeat(width)),
            Span::raw("┘"),
        ]),
    ]
}

pub fn draw_registration(f: &mut Frame, area: Rect, app: &App) {
    let box_width = (area.width as usize).saturating_sub(10).min(48);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.title.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  Enter your details to start the quiz."),
        Line::from(""),
    ];

    lines.extend(input_box(
        "Full name",
        &app.form.name,
        app.form.focus == FormFocus::Name,
        box_width,
    ));
    lines.extend(input_box(
        "Roll number (e.g. 235UCS001)",
        &app.form.roll_no,
        app.form.focus == FormFocus::RollNo,
        box_width,
    ));
    lines.extend(input_box(
        "Mobile number",
        &app.form.mobile_no,
        app.form.focus == FormFocus::MobileNo,
        box_width,
    ));
    lines.extend(input_box(
        "Email",
        &app.form.email,
        app.form.focus == FormFocus::Email,
        box_width,
    ));

    let ok_style = if app.form.focus == FormFocus::Ok {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    let cancel_style = if app.form.focus == FormFocus::Cancel {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("        "),
        Span::styled("[ Start ]", ok_style),
        Span::raw("        "),
        Span::styled("[ Cancel ]", cancel_style),
    ]));
    lines.push(Line::from(""));

    if let Some(ref error) = app.form.error {
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Tab next field   Enter confirm   Esc quit",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, area);
}
