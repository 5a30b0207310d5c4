//! Help tab view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        heading("═══ Important Notes ═══"),
        Line::from("  Results assume zero enemy defense (training dummy)."),
        Line::from("  Expect 700-1000 less damage on real enemies."),
        Line::from("  Treat the numbers as an estimate."),
        Line::from(""),
        heading("═══ How to Use ═══"),
        Line::from("  1. Fill in base skill damage and character stats."),
        Line::from("  2. Crit and Crit Damage are required; without base damage"),
        Line::from("     or AP only the rates are shown."),
        Line::from("  3. Add only the extra Grandmaster books you want to test;"),
        Line::from("     books you own are already in the base damage."),
        Line::from("  4. Balance Tweak scales all damage (empty = 1.0)."),
        Line::from(""),
        heading("═══ Skill Books ═══"),
    ];

    for book in &app.engine.config().books.books {
        lines.push(Line::from(format!(
            "  {:16} Level {:>2}, {:.2}%",
            book.name, book.unit_level, book.unit_percent
        )));
    }

    lines.extend([
        Line::from(""),
        heading("═══ Navigation ═══"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑ ↓", "Move between fields"),
        key_line("Backspace / Del", "Delete a character / clear field"),
        key_line("Ctrl+S / Ctrl+O", "Save / load session"),
        key_line("q / Esc / Ctrl+C", "Quit"),
    ]);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Help "));

    f.render_widget(paragraph, area);
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
