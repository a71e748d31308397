//! TUI application state and logic

use crate::game::{Controller, Statistics};
use crate::wordlists::{RandomPicker, WordPicker};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Instant;
use tracing::debug;

/// Application state
pub struct App<'a, P: WordPicker = RandomPicker> {
    pub controller: Controller<'a, P>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<'a, P: WordPicker> App<'a, P> {
    #[must_use]
    pub fn new(controller: Controller<'a, P>) -> Self {
        let stats = Statistics::new(controller.session().max_guesses());
        Self {
            controller,
            stats,
            should_quit: false,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Enter if self.controller.session().status().is_over() => self.new_game(),
            KeyCode::Enter => {
                if let Ok(submission) = self.controller.submit(now) {
                    self.stats.record(&submission);
                }
            }
            KeyCode::Backspace => {
                self.controller.delete_letter();
            }
            KeyCode::Char(ch) if !ctrl => {
                self.controller.type_letter(ch);
            }
            _ => {}
        }
    }

    fn new_game(&mut self) {
        debug!("new game requested");
        self.controller.reset();
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<P: WordPicker>(app: App<'_, P>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, P: WordPicker>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, P>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app, Instant::now()))?;

        // Wake up when the invalid flash is due even without input
        let ready = match app.controller.time_to_deadline(Instant::now()) {
            Some(timeout) => event::poll(timeout)?,
            None => true,
        };
        if ready && let Event::Key(key) = event::read()? {
            app.handle_key(key, Instant::now());
        }
        app.controller.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
