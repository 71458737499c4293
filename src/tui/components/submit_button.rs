use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_glyph(frame_index: usize) -> &'static str {
    SPINNER_FRAMES[frame_index % SPINNER_FRAMES.len()]
}

/// The submit control. Stateless: label and enabled state come from `core::view`.
pub struct SubmitButton {
    pub label: &'static str,
    pub enabled: bool,
    pub spinner_frame: usize,
}

impl Component for SubmitButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (text, style) = if self.enabled {
            (
                format!("⏎ {}", self.label),
                Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD),
            )
        } else {
            (
                format!("{} {}", spinner_glyph(self.spinner_frame), self.label),
                Style::default().fg(Color::DarkGray),
            )
        };

        let button = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            );
        frame.render_widget(button, area);
    }
}
