//! Instrument rows - visibility, main part angle and recoil per instrument

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use stagebeat::{scene::Vec3, RenderState};

const NAME_WIDTH: usize = 16;
const GAUGE_WIDTH: usize = 21;

/// Angle at which the gauge is full, in degrees
const GAUGE_RANGE: f32 = 90.0;

/// The component with the largest magnitude, sign kept
fn dominant(v: Vec3) -> f32 {
    [v.x, v.y, v.z]
        .into_iter()
        .fold(0.0f32, |best, c| if c.abs() > best.abs() { c } else { best })
}

/// A centered bar: left of center for negative angles, right for positive
fn gauge(degrees: f32) -> String {
    let half = (GAUGE_WIDTH / 2) as i32;
    let cells = ((degrees / GAUGE_RANGE).clamp(-1.0, 1.0) * half as f32).round() as i32;
    (-half..=half)
        .map(|i| match i {
            0 => '┃',
            i if (cells < 0 && i >= cells && i < 0) || (cells > 0 && i <= cells && i > 0) => '▓',
            _ => '░',
        })
        .collect()
}

pub fn render_instruments(frame: &mut Frame, area: Rect, states: &[RenderState]) {
    let lines: Vec<Line> = states
        .iter()
        .take(area.height as usize)
        .map(|state| {
            let main = state.parts.first();
            let angle = main.map_or(0.0, |p| dominant(p.rotation).to_degrees());
            let recoil = state
                .parts
                .iter()
                .map(|p| dominant(p.offset))
                .fold(0.0f32, |best, c| if c.abs() > best.abs() { c } else { best });

            let color = if state.visible { Color::White } else { Color::DarkGray };
            let marker = if state.visible { "●" } else { "○" };
            let part_name = main.map_or("", |p| p.name);

            Line::from(vec![
                Span::styled(
                    format!("{:<width$.width$} {} ", state.instrument, marker, width = NAME_WIDTH),
                    Style::default().fg(color),
                ),
                Span::styled(format!("{:<10.10}", part_name), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    gauge(angle),
                    Style::default().fg(if state.visible { Color::Cyan } else { Color::DarkGray }),
                ),
                Span::styled(format!(" {:>6.1}°", angle), Style::default().fg(color)),
                Span::styled(format!("  recoil {:>5.2}", recoil), Style::default().fg(Color::Magenta)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
