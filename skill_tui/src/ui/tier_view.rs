//! Tier conversion tab view

use super::{field_line, section_title};
use crate::app::{App, TierField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(area);

    let lines: Vec<Line> = TierField::all()
        .iter()
        .enumerate()
        .map(|(i, field)| {
            field_line(
                field.label(),
                app.tier.get(*field),
                i == app.selected_tier_field,
            )
        })
        .collect();
    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Convert Skill Tier "),
    );
    f.render_widget(form, chunks[0]);

    let mut lines = vec![section_title("Converted Base Damage")];
    match &app.tier_result {
        None => lines.push(Line::from(Span::styled(
            "Press Enter to convert",
            Style::default().fg(Color::DarkGray),
        ))),
        Some(Ok(range)) => {
            lines.push(Line::from(Span::styled(
                format!("{:.0}", range),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                "Press a to use it as the calculator's base damage",
                Style::default().fg(Color::DarkGray),
            )));
        }
        Some(Err(e)) => lines.push(Line::from(Span::styled(
            format!("⚠ {}", e),
            Style::default().fg(Color::Red),
        ))),
    }

    let result =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Result "));
    f.render_widget(result, chunks[1]);
}
