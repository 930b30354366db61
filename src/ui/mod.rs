use std::sync::OnceLock;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

static THEME: OnceLock<Theme> = OnceLock::new();

fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::load)
}

fn accent() -> Color { theme().accent }
fn danger() -> Color { theme().danger }
fn inactive() -> Color { theme().inactive }
fn text() -> Color { theme().text }
fn text_dim() -> Color { theme().text_dim }
fn bg_selected() -> Color { theme().bg_selected }

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info line
            Constraint::Min(3),    // Links
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    draw_info_line(f, app, chunks[0]);
    draw_links(f, app, chunks[1]);
    draw_footer(f, chunks[2]);
}

fn draw_info_line(f: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(ref status) = app.status_message {
        let color = if status.starts_with("Error") { danger() } else { accent() };
        Line::from(Span::styled(status, Style::default().fg(color)))
    } else {
        let mut spans = vec![Span::styled(
            format!("{} links", app.links.len()),
            Style::default().fg(text_dim()),
        )];
        if app.omitted > 0 {
            spans.push(Span::styled(
                format!(" │ {} omitted (run `social-icons check`)", app.omitted),
                Style::default().fg(text_dim()),
            ));
        }
        Line::from(spans)
    };

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_links(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            " Social links ",
            Style::default().fg(accent()).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(inactive()));

    let rows: Vec<Row> = if app.links.is_empty() {
        vec![Row::new(vec![
            Span::raw(""),
            Span::raw(""),
            Span::styled("No links to show", Style::default().fg(text_dim())),
        ])]
    } else {
        app.links
            .iter()
            .enumerate()
            .map(|(i, link)| {
                let row_style = if i == app.selected {
                    Style::default().bg(bg_selected()).fg(text())
                } else {
                    Style::default()
                };

                Row::new(vec![
                    Span::styled(link.icon.glyph, Style::default().fg(Theme::glyph_color(link.icon))),
                    Span::styled(link.icon.name, Style::default().fg(text())),
                    Span::styled(&link.href, Style::default().fg(text())),
                    Span::styled(&link.class, Style::default().fg(text_dim())),
                ])
                .style(row_style)
            })
            .collect()
    };

    let header = Row::new(vec![
        Span::raw(""),
        Span::styled("Site", Style::default().fg(accent())),
        Span::styled("Url", Style::default().fg(accent())),
        Span::styled("Class", Style::default().fg(accent())),
    ]);

    let widths = [
        Constraint::Length(3),
        Constraint::Length(10),
        Constraint::Percentage(65),
        Constraint::Percentage(25),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let hints = [("↑↓/jk", "Nav"), ("Enter", "Open"), ("q", "Quit")];

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(*key, Style::default().fg(accent())),
                Span::styled(format!(" {} │ ", action), Style::default().fg(text_dim())),
            ]
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}
