//! TUI module for stagebeat
//!
//! Shows every instrument's render state as the stage plays.

mod instruments;
mod transport;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};
use std::time::{Duration, Instant};

use stagebeat::{RenderState, Stage, TransportCommand};

use instruments::render_instruments;
use transport::render_transport;

/// Seconds skipped by the arrow keys
const SEEK_STEP: f64 = 2.0;

/// UI application state
pub struct UiApp {
    stage: Stage,
    /// Keypresses become commands here...
    commands: Producer<TransportCommand>,
    /// ...and the stage drains them here at the start of each frame
    receiver: Consumer<TransportCommand>,
    /// Latest frame's render states
    states: Vec<RenderState>,
    last_frame: Instant,
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        stage: Stage,
        commands: Producer<TransportCommand>,
        receiver: Consumer<TransportCommand>,
    ) -> Self {
        Self {
            stage,
            commands,
            receiver,
            states: Vec::new(),
            last_frame: Instant::now(),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            let now = Instant::now();
            let delta = now.duration_since(self.last_frame).as_secs_f32();
            self.last_frame = now;
            self.states = self.stage.frame(delta, &mut self.receiver);

            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        let now = self.stage.transport().time();
        let command = match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char(' ') => TransportCommand::TogglePause,
            KeyCode::Char('r') | KeyCode::Char('R') => TransportCommand::Restart,
            KeyCode::Left => TransportCommand::Seek(now - SEEK_STEP),
            KeyCode::Right => TransportCommand::Seek(now + SEEK_STEP),
            _ => return,
        };
        // A full queue drops the keypress
        let _ = self.commands.push(command);
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Transport bar
                Constraint::Min(6),    // Instruments
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        render_transport(frame, chunks[0], &self.stage);

        let block = Block::default().title(" Instruments ").borders(Borders::ALL);
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);
        render_instruments(frame, inner, &self.states);

        let help = Paragraph::new(" [Q] Quit  [Space] Play/Pause  [←/→] Seek  [R] Restart")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[2]);
    }
}
