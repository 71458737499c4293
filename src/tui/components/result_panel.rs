//! # ResultPanel Component
//!
//! Draws the `Panel` chosen by `core::view::render`: the idle prompt, a
//! spinner, an error box, or the joke itself.
//!
//! Lines are wrapped with `textwrap` before rendering so the block can be
//! centered vertically; ratatui's own wrapping would not tell us the
//! height up front.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::view::Panel;
use crate::jokes::JokePayload;
use crate::tui::component::Component;
use crate::tui::components::submit_button::spinner_glyph;

/// Horizontal padding inside the panel border, per side.
const PAD_H: u16 = 2;

pub struct ResultPanel<'a> {
    pub panel: &'a Panel,
    pub spinner_frame: usize,
}

impl<'a> ResultPanel<'a> {
    pub fn new(panel: &'a Panel, spinner_frame: usize) -> Self {
        Self { panel, spinner_frame }
    }

    /// Styled, wrapped lines for the current panel at the given text width.
    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        match self.panel {
            Panel::Prompt(prompt) => wrapped(prompt, width, Style::default().fg(Color::DarkGray)),
            Panel::Spinner => vec![Line::from(Span::styled(
                format!("{} fetching a joke", spinner_glyph(self.spinner_frame)),
                Style::default().fg(Color::Magenta),
            ))],
            Panel::Error(message) => wrapped(
                message,
                width,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Panel::Joke { greeting, joke } => {
                let mut lines = wrapped(
                    greeting,
                    width,
                    Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD),
                );
                lines.push(Line::from(""));
                match joke {
                    JokePayload::Single { text } => {
                        lines.extend(wrapped(text, width, Style::default()));
                    }
                    JokePayload::TwoPart { setup, punchline } => {
                        lines.extend(wrapped(setup, width, Style::default()));
                        lines.push(Line::from(""));
                        lines.extend(wrapped(
                            punchline,
                            width,
                            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
                        ));
                    }
                }
                lines
            }
        }
    }

    fn border_style(&self) -> Style {
        match self.panel {
            Panel::Error(_) => Style::default().fg(Color::Red),
            Panel::Joke { .. } => Style::default().fg(Color::LightMagenta),
            _ => Style::default().fg(Color::DarkGray),
        }
    }
}

fn wrapped(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    textwrap::wrap(text, usize::from(width.max(1)))
        .into_iter()
        .map(|segment| Line::from(Span::styled(segment.into_owned(), style)))
        .collect()
}

impl Component for ResultPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let text_width = inner.width.saturating_sub(PAD_H * 2);
        let lines = self.lines(text_width);
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).min(inner.height);

        let [text_area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(inner);
        let [text_area] = Layout::horizontal([Constraint::Length(text_width)])
            .flex(Flex::Center)
            .areas(text_area);

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    fn render_to_string(panel: &Panel) -> String {
        let backend = TestBackend::new(50, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                ResultPanel::new(panel, 0).render(f, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_single_joke_is_one_line() {
        let panel = Panel::Joke {
            greeting: "Hey Ada, here's a joke for you!".to_string(),
            joke: JokePayload::Single { text: "X".to_string() },
        };
        let lines = ResultPanel::new(&panel, 0).lines(40);
        assert_eq!(plain(&lines), vec!["Hey Ada, here's a joke for you!", "", "X"]);
    }

    #[test]
    fn test_two_part_joke_is_setup_then_punchline() {
        let panel = Panel::Joke {
            greeting: "Hey Ada, here's a joke for you!".to_string(),
            joke: JokePayload::TwoPart { setup: "S".to_string(), punchline: "D".to_string() },
        };
        let lines = ResultPanel::new(&panel, 0).lines(40);
        assert_eq!(plain(&lines), vec!["Hey Ada, here's a joke for you!", "", "S", "", "D"]);
    }

    #[test]
    fn test_long_lines_wrap_to_width() {
        let panel = Panel::Error("one two three four".to_string());
        let lines = ResultPanel::new(&panel, 0).lines(9);
        assert_eq!(plain(&lines), vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_render_error_panel() {
        let text = render_to_string(&Panel::Error("Please enter your name".to_string()));
        assert!(text.contains("Please enter your name"));
    }

    #[test]
    fn test_render_prompt() {
        let text = render_to_string(&Panel::Prompt("Your joke will appear here."));
        assert!(text.contains("Your joke will appear here."));
    }
}
