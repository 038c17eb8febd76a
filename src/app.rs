// App state and main event loop.
// Routes keyboard input to the selection controller and applies fetch completions each tick.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::ListState;

use popular::{Category, FetchClient, SelectionController};

use crate::ui;

const TICK: Duration = Duration::from_millis(100);

/// Main application state.
pub struct App<F: FetchClient> {
    /// Owns the session: selection, cache, error.
    pub controller: SelectionController<F>,
    /// Highlighted row in the repository list.
    pub list_state: ListState,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl<F: FetchClient> App<F> {
    pub fn new(controller: SelectionController<F>) -> Self {
        Self {
            controller,
            list_state: ListState::default(),
            should_quit: false,
        }
    }

    /// Main event loop. Must run inside a tokio runtime.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        self.controller.start();
        while !self.should_quit {
            self.controller.process_pending();
            let model = self.controller.render_model();
            if model.items.is_some() && self.list_state.selected().is_none() {
                self.list_state.select(Some(0));
            }
            terminal.draw(|frame| ui::draw(frame, &model, &mut self.list_state))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                self.select(self.controller.selected().next())
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
                self.select(self.controller.selected().prev())
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(category) = Category::ALL.get(index) {
                    self.select(*category);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            _ => {}
        }
    }

    fn select(&mut self, category: Category) {
        self.controller.select_category(category);
        self.list_state.select(None);
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.controller.render_model().item_count();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.list_state.select(Some(next as usize));
    }
}
