use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::app::{App, Mode};
use crate::store::TodoStore;

const LIST_HELP: &str =
    "a: add • e: edit • d: delete • space/enter: toggle • K/J: move • r: refresh • q: quit";
const INPUT_HELP: &str = "Enter to save • Esc to cancel";

pub fn draw<S: TodoStore>(frame: &mut Frame<'_>, app: &App<S>) {
    if let Some(err) = &app.error {
        let lines = vec![
            Line::from(Span::styled(
                format!("Error: {}", err),
                Style::default().fg(Color::Red),
            )),
            Line::default(),
            Line::from("Press q to quit."),
        ];
        frame.render_widget(Paragraph::new(lines), frame.area());
        return;
    }

    let [title_area, body_area, help_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let title = Span::styled(
        " TODOZ ",
        Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(125, 86, 244))
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Paragraph::new(Line::from(title)), title_area);

    match app.mode {
        Mode::List => draw_list(frame, body_area, app),
        Mode::Add => draw_input(frame, body_area, "Add new todo:", &app.input),
        Mode::Edit { .. } => draw_input(frame, body_area, "Edit todo:", &app.input),
    }

    let help = match app.mode {
        Mode::List => LIST_HELP,
        Mode::Add | Mode::Edit { .. } => INPUT_HELP,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(help, Style::default().fg(Color::DarkGray))),
        help_area,
    );
}

fn draw_list<S: TodoStore>(frame: &mut Frame<'_>, area: Rect, app: &App<S>) {
    if app.items.is_empty() {
        frame.render_widget(
            Paragraph::new("No todos yet. Press 'a' to add one!"),
            area,
        );
        return;
    }

    let mut lines = Vec::with_capacity(app.items.len());
    for (i, item) in app.items.iter().enumerate() {
        let selected = i == app.cursor;
        let cursor = if selected { ">" } else { " " };
        let checked = if item.done { "✓" } else { " " };

        let mut style = Style::default();
        if item.done {
            style = style.fg(Color::Cyan).add_modifier(Modifier::CROSSED_OUT);
        }
        if selected {
            style = style.add_modifier(Modifier::BOLD);
        }

        lines.push(Line::from(Span::styled(
            format!("{} [{}] {}", cursor, checked, item.text),
            style,
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_input(frame: &mut Frame<'_>, area: Rect, prompt: &str, input: &str) {
    let lines = vec![
        Line::from(prompt.to_string()),
        Line::from(vec![
            Span::raw("> "),
            Span::raw(input.to_string()),
            Span::styled("█", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
