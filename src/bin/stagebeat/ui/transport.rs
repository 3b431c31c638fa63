//! Transport bar widget - shows play state, position and drum kit

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use stagebeat::Stage;

pub fn render_transport(frame: &mut Frame, area: Rect, stage: &Stage) {
    let block = Block::default().title(" stagebeat ").borders(Borders::ALL);
    let transport = stage.transport();

    let paused = transport.is_paused();
    let play_symbol = if paused { "⏸" } else { "▶" };
    let play_state_str = if paused { "Paused" } else { "Playing" };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} {}  ", play_symbol, play_state_str),
            Style::default().fg(if paused { Color::Yellow } else { Color::Green }),
        ),
        Span::styled(
            format!("{:6.2}s / {:.2}s  ", transport.time(), transport.loop_at()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("Kit: {}  ", stage.current_kit()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{} instruments", stage.instrument_names().len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
