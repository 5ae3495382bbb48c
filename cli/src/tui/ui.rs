use larder_core::{StatusKind, SOON_WINDOW_DAYS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::tui::app::{App, InputMode, Tone};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header / stats
            Constraint::Min(1),    // Graph + table
            Constraint::Length(3), // Input / message
            Constraint::Length(1), // Footer
        ])
        .split(size);

    draw_header(f, app, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[1]);

    draw_graph(f, app, content_chunks[0]);
    draw_food_table(f, app, content_chunks[1]);
    draw_input_line(f, app, main_chunks[2]);

    let footer = Paragraph::new("a: Add | d: Remove | c: Clear | j/k: Navigate | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);
}

fn kind_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Expired => Color::Red,
        // Due-today draws in the soon color, like the original pills.
        StatusKind::Today | StatusKind::Soon => Color::Yellow,
        StatusKind::Fresh => Color::Green,
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            "LARDER",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::raw(format!("{} foods", app.stats.total)),
        Span::raw(" · "),
        Span::styled(
            format!("{} expired", app.stats.expired),
            Style::default().fg(Color::Red),
        ),
        Span::raw(" · "),
        Span::styled(
            format!("{} safe", app.stats.safe()),
            Style::default().fg(Color::Green),
        ),
    ]);
    let header = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(header, area);
}

fn draw_graph(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Expiry timeline ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if app.rows.is_empty() {
        let empty = Paragraph::new("No foods yet. Add one and the expiry graph appears here.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    // Scale against the widest horizon, floored at one week.
    let max_abs_days = app
        .rows
        .iter()
        .map(|row| row.status.days_left.abs())
        .max()
        .unwrap_or(0)
        .max(SOON_WINDOW_DAYS);
    let bar_cells = area.width.saturating_sub(24).max(8) as usize;

    let lines: Vec<Line> = app
        .rows
        .iter()
        .map(|row| {
            let ratio = row.status.days_left.abs() as f64 / max_abs_days as f64;
            let filled = ((ratio * bar_cells as f64).round() as usize).clamp(1, bar_cells);
            Line::from(vec![
                Span::styled(
                    format!("{:<14.14}", row.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    "█".repeat(filled),
                    Style::default().fg(kind_color(row.status.kind)),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("{}d", row.status.days_left),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_food_table(f: &mut Frame, app: &mut App, area: Rect) {
    let rows: Vec<Row> = app
        .rows
        .iter()
        .map(|food| {
            Row::new(vec![
                Span::styled(
                    food.status.short,
                    Style::default().fg(kind_color(food.status.kind)),
                ),
                Span::raw(food.formatted_date.clone()),
                Span::raw(food.status.days_left.to_string()),
                Span::styled(
                    food.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),  // Status
            Constraint::Length(13), // Expiry date
            Constraint::Length(5),  // Days
            Constraint::Min(10),    // Name
        ],
    )
    .header(Row::new(vec!["Status", "Expiry", "Days", "Food"]).style(Style::default().fg(Color::Yellow)))
    .block(
        Block::default()
            .title(" Foods ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_input_line(f: &mut Frame, app: &App, area: Rect) {
    match app.input_mode {
        InputMode::Adding => {
            let input = Paragraph::new(app.input.as_str()).block(
                Block::default()
                    .title(" Add food: name then expiry code ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
            f.render_widget(input, area);
            f.set_cursor_position(Position::new(
                area.x + 1 + app.cursor_position as u16,
                area.y + 1,
            ));
        }
        InputMode::Normal => {
            let (text, style) = match &app.message {
                Some((text, Tone::Success)) => (text.as_str(), Style::default().fg(Color::Green)),
                Some((text, Tone::Error)) => (text.as_str(), Style::default().fg(Color::Red)),
                None => ("", Style::default().fg(Color::DarkGray)),
            };
            let message = Paragraph::new(text).style(style).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
            f.render_widget(message, area);
        }
    }
}
