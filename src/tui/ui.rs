//! Countdown rendering.

use chrono::Duration;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use crate::core::{format_duration_mmss, Clock};
use crate::timer::Phase;

use super::CountdownApp;

/// Render the countdown screen.
pub fn render<C: Clock>(frame: &mut Frame<'_>, app: &CountdownApp<'_, '_, '_, C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .margin(1)
        .split(frame.area());

    let timer = app.timer();

    let (title, color) = match timer.phase() {
        Phase::Running => ("Focus session", Color::Cyan),
        Phase::Paused => ("Paused", Color::Yellow),
        Phase::Break => ("Break", Color::Green),
        Phase::Idle => ("Done", Color::DarkGray),
    };

    let header = Paragraph::new(title)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    let remaining = format_duration_mmss(Duration::seconds(i64::from(timer.seconds_remaining())));
    let clock = Paragraph::new(remaining)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(clock, chunks[1]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(timer.progress().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, chunks[2]);

    let mut hints = String::from("space pause/resume   q cancel");
    if app.warning_count() > 0 {
        hints.push_str(&format!("   ({} warning(s))", app.warning_count()));
    }
    let footer = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[3]);
}
