//! Stand-in rendering for views whose templates live outside this shell.

use crate::component::props::Props;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render a titled box listing the mount props.
pub fn placeholder(frame: &mut ratatui::Frame, area: Rect, title: &str, props: &Props) {
    let mut lines = vec![Line::from("")];
    if props.is_empty() {
        lines.push(Line::styled("(no props)", Style::default().fg(Color::DarkGray)));
    } else {
        for (key, value) in props.iter() {
            lines.push(Line::from(format!("{key}: {value}")));
        }
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    frame.render_widget(paragraph, area);
}
