//! socialhub-tui - TUI frontend for socialhub using Ratatui

pub mod app;
pub mod auth;
pub mod components;
pub mod sidebar;
pub mod tabs;
pub mod theme;
pub mod ui;

pub use app::{App, Tab};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use socialhub_core::{Access, Session};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Run the TUI application
///
/// `latency` is the simulated delay applied to settings saves; login and
/// registration use the session's own configured latency.
pub async fn run(session: Arc<Session>, latency: Duration) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, latency);
    let mut ui = ui::Ui::new();

    let result = run_loop(&mut terminal, &mut app, &mut ui).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("TUI exited");
    result
}

async fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, ui: &mut ui::Ui) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        // Finished logins and saves, then session changes
        app.poll_pending();
        app.poll_events();

        terminal.draw(|f| ui.render(f, app))?;

        // Handle input with timeout so spinners keep turning
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match app.access() {
                        Access::Pending => {
                            app.handle_key(key.code, key.modifiers, true);
                        }
                        Access::Redirect(_) => {
                            // Every printable key belongs to the form
                            if !app.handle_key(key.code, key.modifiers, true) {
                                app.handle_auth_key(key.code);
                            }
                        }
                        Access::Granted => {
                            let editing = ui.is_editing(app);
                            if !app.handle_key(key.code, key.modifiers, editing) {
                                ui.handle_tab_key(key.code, app);
                            }
                        }
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
