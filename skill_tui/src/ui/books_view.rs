//! Books tab view

use super::{section_title, stat_line};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_book_list(f, app, chunks[0]);
    draw_totals(f, app, chunks[1]);
}

fn book_color(id: &str) -> Color {
    match id {
        "green" => Color::Green,
        "blue" => Color::Blue,
        "purple" => Color::Magenta,
        "legendary" => Color::Yellow,
        _ => Color::White,
    }
}

fn draw_book_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let selected = i == app.selected_book;
            let mut style = Style::default().fg(book_color(&item.id));
            if selected {
                style = style.add_modifier(Modifier::BOLD);
            }
            let prefix = if selected { "► " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{:16}", prefix, item.name), style),
                Span::styled(
                    format!("Lv {:>2}, {:>5.2}%", item.unit_level, item.unit_percent),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("   × {}", item.count),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Skill Books (+/- to change) "),
    );
    f.render_widget(list, area);
}

fn draw_totals(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let totals = app.upgrade_totals();
    let max_level = app.session.max_level().max(1);
    let ratio = (totals.level as f64 / max_level as f64).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Grandmaster Level "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{} / {}", totals.level, max_level));
    f.render_widget(gauge, chunks[0]);

    let coefficient = app.engine.config().constants.upgrade.scaling_coefficient;
    let listed: f64 = app.session.items().iter().map(|i| i.listed_percent()).sum();
    let lines = vec![
        section_title("Totals"),
        stat_line("Level", totals.level.to_string()),
        stat_line("Bonus", format!("{:.2}%", totals.bonus_percent)),
        stat_line("Listed on books", format!("{:.2}%", listed)),
        stat_line(
            "Applied to base damage",
            format!("{:.2}%", totals.bonus_percent * coefficient),
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Only add books you do not own yet;",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "owned books are already in the skill's base damage.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Upgrade "));
    f.render_widget(paragraph, chunks[1]);
}
