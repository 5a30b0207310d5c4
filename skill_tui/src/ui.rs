//! UI rendering

mod books_view;
mod calculator_view;
mod help_view;
mod tier_view;

use crate::app::{App, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Calculator => calculator_view::draw(f, app, chunks[1]),
        Tab::Books => books_view::draw(f, app, chunks[1]),
        Tab::Tier => tier_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("Tab", "Next tab"), ("^S/^O", "Save/Load"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Calculator => vec![
            ("↑/↓", "Field"),
            ("0-9 .", "Type"),
            ("Enter", "Calculate"),
            ("Space", "Onrush"),
            ("r", "Roll hit"),
        ],
        Tab::Books => vec![
            ("↑/↓", "Select book"),
            ("+/→", "Add"),
            ("-/←", "Remove"),
            ("x", "Reset"),
        ],
        Tab::Tier => vec![
            ("↑/↓", "Field"),
            ("Enter", "Convert"),
            ("a", "Apply to base"),
        ],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    // Status message replaces the tab keys while present
    if let Some(status) = &app.status {
        spans.push(Span::styled(
            status.clone(),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    } else {
        for (i, (key, desc)) in tab_keys.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                format!("[{}]", key),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}", desc),
                Style::default().fg(Color::White),
            ));
        }

        if !tab_keys.is_empty() {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Skill Damage Calculator "),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

/// One editable "label: value" row, highlighted when selected
pub fn field_line(label: &str, value: &str, selected: bool) -> Line<'static> {
    let prefix = if selected { "► " } else { "  " };
    let label_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let shown = if value.is_empty() && !selected {
        Span::styled("—", Style::default().fg(Color::DarkGray))
    } else if selected {
        Span::styled(format!("{}▏", value), Style::default().fg(Color::White))
    } else {
        Span::styled(value.to_string(), Style::default().fg(Color::White))
    };

    Line::from(vec![
        Span::styled(format!("{}{:30}", prefix, label), label_style),
        shown,
    ])
}

/// A read-only "label: value" row
pub fn stat_line(name: &str, value: String) -> Line<'static> {
    let color = if value == "--" { Color::DarkGray } else { Color::White };
    Line::from(vec![
        Span::styled(format!("{:26}", name), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

pub fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}
