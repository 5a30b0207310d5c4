//! skill_tui - Interactive TUI for the skill damage calculator

mod app;
mod logging;
mod session;
mod ui;

use anyhow::{Context, Result};
use app::{App, Tab};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use skill_core::{DamageEngine, EngineConfig};
use std::io;
use std::path::PathBuf;

/// Directory with constants.toml / books.toml / grandmaster.toml overrides
const CONFIG_DIR_ENV: &str = "SKILL_CALC_CONFIG_DIR";
/// Where the session is saved
const SESSION_FILE_ENV: &str = "SKILL_CALC_SESSION";
const DEFAULT_SESSION_FILE: &str = "skill_session.json";

fn main() -> Result<()> {
    let _guard = logging::setup_logging()?;

    let config = match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) => {
            let dir = PathBuf::from(dir);
            EngineConfig::load_dir(&dir)
                .with_context(|| format!("loading config from {}", dir.display()))?
        }
        None => EngineConfig::default(),
    };
    let session_path = std::env::var_os(SESSION_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));

    let mut app = App::new(DamageEngine::new(config), session_path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        app.clear_status();

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => app.save_session(),
            (KeyCode::Char('o'), KeyModifiers::CONTROL) => app.load_session(),
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => break,
            (KeyCode::Tab, _) => app.next_tab(),
            (KeyCode::BackTab, _) => app.prev_tab(),
            (KeyCode::F(1), _) | (KeyCode::Char('?'), _) => app.set_tab(Tab::Help),
            (KeyCode::Up, _) => app.on_up(),
            (KeyCode::Down, _) => app.on_down(),
            (KeyCode::Left, _) => app.on_left(),
            (KeyCode::Right, _) => app.on_right(),
            (KeyCode::Enter, _) => app.on_enter(),
            (KeyCode::Backspace, _) => app.on_backspace(),
            (KeyCode::Delete, _) => app.clear_field(),
            (KeyCode::Char(' '), _) => app.on_space(),
            (KeyCode::Char('r'), _) => app.roll(),
            (KeyCode::Char('a'), _) if app.current_tab == Tab::Tier => app.apply_tier(),
            (KeyCode::Char('x'), _) if app.current_tab == Tab::Books => app.reset_books(),
            (KeyCode::Char(c), _) => {
                app.on_char(c);
            }
            _ => {}
        }
    }

    Ok(())
}
