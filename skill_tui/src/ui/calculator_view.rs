//! Calculator tab view

use super::{field_line, section_title, stat_line};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use skill_core::{Calculation, InputField};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(InputField::all().len() as u16 + 5), // Form
            Constraint::Min(0),                                     // Overview
        ])
        .split(chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(16),   // Results
            Constraint::Length(8), // Hit log
        ])
        .split(chunks[1]);

    draw_form(f, app, left[0]);
    draw_overview(f, app, left[1]);
    draw_results(f, app, right[0]);
    draw_hit_log(f, app, right[1]);
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = InputField::all()
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let label = if field.is_optional() {
                format!("{} (opt)", field.label())
            } else {
                field.label().to_string()
            };
            field_line(&label, app.form.get(*field), i == app.selected_field)
        })
        .collect();

    let onrush_selected = app.on_onrush_row();
    let checkbox = if app.form.onrush_active { "[x]" } else { "[ ]" };
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            if onrush_selected { "► " } else { "  " },
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("{} Onrush Active (+10% Crit Rate)", checkbox),
            if onrush_selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            },
        ),
    ]));

    let totals = app.upgrade_totals();
    lines.push(Line::from(Span::styled(
        format!(
            "  Grandmaster: level {} (+{:.2}%) from Books tab",
            totals.level, totals.bonus_percent
        ),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Build "));
    f.render_widget(paragraph, area);
}

fn draw_overview(f: &mut Frame, app: &App, area: Rect) {
    let overview = app.overview();
    let lines: Vec<Line> = overview
        .lines()
        .into_iter()
        .map(|(label, value)| stat_line(label, value))
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Combat Stats Overview "));
    f.render_widget(paragraph, area);
}

fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = match &app.outcome {
        None => vec![Line::from(Span::styled(
            "Press Enter to calculate",
            Style::default().fg(Color::DarkGray),
        ))],
        Some(Err(e)) => vec![Line::from(Span::styled(
            format!("⚠ {}", e),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))],
        Some(Ok(calc)) => {
            let mut lines = vec![section_title(match calc {
                Calculation::Full(_) => "Damage",
                Calculation::RatesOnly(_) => "Rates Only",
            })];
            lines.extend(calc.summary_lines().into_iter().map(|text| {
                let is_crit_line =
                    text.starts_with("Crit Damage:") || text.starts_with("Avg Hit (crit)");
                let style = if is_crit_line {
                    Style::default().fg(Color::Yellow)
                } else if text.starts_with("Expected Hit") {
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(Span::styled(text, style))
            }));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Zero enemy defense assumed",
                Style::default().fg(Color::DarkGray),
            )));
            lines
        }
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Results "));
    f.render_widget(paragraph, area);
}

fn draw_hit_log(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .hit_log
        .iter()
        .take(area.height.saturating_sub(2) as usize)
        .map(|line| {
            let style = if line.starts_with("CRIT!") {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(line.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Hits (r) "));
    f.render_widget(list, area);
}
