//! Main TUI application state and logic

use crate::config::Playback;
use crate::engine::{Intent, Outcome, SortSession, Status};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Longest time the loop blocks waiting for a key
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The main application state
pub struct App {
    /// The sort session being visualized
    pub session: SortSession,

    /// Autoplay timing
    pub playback: Playback,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time a step batch was taken in play mode
    pub last_play_time: Instant,
}

impl App {
    pub fn new(session: SortSession, playback: Playback) -> Self {
        App {
            session,
            playback,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_play_time: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick();

            // Wake up in time for the next autoplay batch
            let timeout = if self.session.status() == Status::Running {
                self.playback
                    .delay
                    .saturating_sub(self.last_play_time.elapsed())
                    .min(POLL_INTERVAL)
            } else {
                POLL_INTERVAL
            };

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance autoplay if it is due
    pub fn tick(&mut self) {
        if self.session.status() != Status::Running
            || self.last_play_time.elapsed() < self.playback.delay
        {
            return;
        }

        for _ in 0..self.playback.steps_per_tick {
            if self.session.step_forward().is_none() {
                break;
            }
        }
        self.last_play_time = Instant::now();

        self.status_message = if self.session.is_complete() {
            "Sorting complete".to_string()
        } else {
            "Playing...".to_string()
        };
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let view = self.session.projection();

        super::panes::render_info_pane(frame, chunks[0], &view, &self.playback);
        super::panes::render_bars_pane(frame, chunks[1], &view);
        super::panes::render_status_bar(frame, chunks[2], &self.status_message, &view);
    }

    /// Map a key to the intent it expresses
    pub fn intent_for(key: KeyEvent) -> Option<Intent> {
        let intent = match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Intent::Quit,
            KeyCode::Char(' ') => Intent::TogglePause,
            KeyCode::Right | KeyCode::Char('l') => Intent::StepForward,
            KeyCode::Left | KeyCode::Char('h') => Intent::StepBackward,
            KeyCode::Char('r') | KeyCode::Char('R') => Intent::Randomize,
            KeyCode::Backspace => Intent::Reset,
            KeyCode::Tab => Intent::NextAlgorithm,
            KeyCode::Enter => Intent::RunToEnd,
            KeyCode::Char('+') | KeyCode::Char('=') => Intent::IncreaseSize,
            KeyCode::Char('-') | KeyCode::Char('_') => Intent::DecreaseSize,
            KeyCode::Char(c @ '1'..='9') => {
                let digit = c.to_digit(10)? as usize;
                Intent::SelectAlgorithm(digit - 1)
            }
            _ => return None,
        };
        Some(intent)
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('f') => {
                self.playback.faster();
                self.status_message = format!("Delay {}ms", self.playback.delay.as_millis());
                return;
            }
            KeyCode::Char('s') => {
                self.playback.slower();
                self.status_message = format!("Delay {}ms", self.playback.delay.as_millis());
                return;
            }
            _ => {}
        }

        let Some(intent) = Self::intent_for(key) else {
            return;
        };

        // Manual stepping pauses autoplay
        if matches!(
            intent,
            Intent::StepForward | Intent::StepBackward | Intent::RunToEnd
        ) {
            self.session.set_paused(true);
        }

        let outcome = self.session.apply(intent);
        if intent == Intent::TogglePause && !self.session.is_paused() {
            // Play the first batch immediately
            self.last_play_time = Instant::now()
                .checked_sub(self.playback.delay)
                .unwrap_or_else(Instant::now);
        }
        self.status_message = self.describe(intent, &outcome);
        if outcome == Outcome::Quit {
            self.should_quit = true;
        }
    }

    fn describe(&self, intent: Intent, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Quit => "Quitting".to_string(),
            Outcome::Ignored(e) => format!("Ignored: {}", e),
            Outcome::Unchanged => match intent {
                Intent::StepForward | Intent::RunToEnd => "Sorting complete".to_string(),
                Intent::StepBackward => "Cannot step backward: at start".to_string(),
                Intent::IncreaseSize => "Already at maximum size".to_string(),
                Intent::DecreaseSize => "Already at minimum size".to_string(),
                _ => "Nothing to do".to_string(),
            },
            Outcome::Applied => match intent {
                Intent::StepForward if self.session.is_complete() => {
                    "Sorting complete".to_string()
                }
                Intent::StepForward => "Stepped forward".to_string(),
                Intent::StepBackward => "Stepped backward".to_string(),
                Intent::TogglePause if self.session.is_paused() => "Paused".to_string(),
                Intent::TogglePause => "Playing...".to_string(),
                Intent::Reset => "Reset".to_string(),
                Intent::Randomize => "Array shuffled".to_string(),
                Intent::NextAlgorithm | Intent::SelectAlgorithm(_) => {
                    format!("Selected {}", self.session.algorithm_name())
                }
                Intent::IncreaseSize | Intent::DecreaseSize => {
                    format!("Size {}", self.session.values().len())
                }
                Intent::RunToEnd => format!("Finished in {} steps", self.session.steps()),
                Intent::Quit => "Quitting".to_string(),
            },
        }
    }
}
