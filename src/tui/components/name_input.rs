//! # NameInput Component
//!
//! Single-line text field holding the user's name.
//!
//! ## Responsibilities
//!
//! - Capture text input, paste, and editing keys
//! - Emit `Changed` with the full text after every edit
//! - Emit `Submit` on Enter (validation happens in the core reducer)
//!
//! The buffer is internal state and is never cleared on submit: the name
//! persists across fetches. Horizontal scrolling keeps the cursor visible
//! when the name is wider than the field.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "What's your name?";
/// Left + right border.
const BORDER_OVERHEAD: u16 = 2;

/// High-level events emitted by the NameInput
#[derive(Debug, Clone, PartialEq)]
pub enum NameInputEvent {
    /// Text changed; carries the new full text.
    Changed(String),
    /// Cursor moved without changing text.
    CursorMoved,
    Submit,
}

pub struct NameInput {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// First visible display column
    scroll: usize,
}

impl Default for NameInput {
    fn default() -> Self {
        Self::new()
    }
}

impl NameInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            scroll: 0,
        }
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }

    /// Display column of the cursor within the whole buffer.
    fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].width()
    }

    /// Adjust `scroll` so the cursor stays within a field `width` columns wide.
    fn update_scroll(&mut self, width: usize) {
        if width == 0 {
            self.scroll = 0;
            return;
        }
        let col = self.cursor_column();
        if col < self.scroll {
            self.scroll = col;
        } else if col >= self.scroll + width {
            self.scroll = col + 1 - width;
        }
    }

    /// The slice of the buffer visible from `scroll`, at most `width` columns.
    fn visible_text(&self, width: usize) -> String {
        let mut col = 0;
        let mut out = String::new();
        for c in self.buffer.chars() {
            let w = c.width().unwrap_or(0);
            if col >= self.scroll {
                if col + w - self.scroll > width {
                    break;
                }
                out.push(c);
            }
            col += w;
        }
        out
    }

    fn changed(&self) -> Option<NameInputEvent> {
        Some(NameInputEvent::Changed(self.buffer.clone()))
    }
}

impl Component for NameInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = usize::from(area.width.saturating_sub(BORDER_OVERHEAD));
        self.update_scroll(inner_width);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Name");

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.visible_text(inner_width)).style(Style::default().fg(Color::Green))
        };

        frame.render_widget(paragraph.block(block), area);

        let offset = u16::try_from(self.cursor_column().saturating_sub(self.scroll))
            .unwrap_or(u16::MAX);
        let cursor_x = area.x.saturating_add(1).saturating_add(offset);
        frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
    }
}

impl EventHandler for NameInput {
    type Event = NameInputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                self.buffer.insert_str(self.cursor, text);
                self.cursor += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = self.prev_boundary();
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor == self.buffer.len() {
                    return None;
                }
                let next = self.next_boundary();
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = self.prev_boundary();
                NameInputEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = self.next_boundary();
                NameInputEvent::CursorMoved
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                NameInputEvent::CursorMoved
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                NameInputEvent::CursorMoved
            }),
            TuiEvent::Submit => Some(NameInputEvent::Submit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(input: &mut NameInput, s: &str) {
        for c in s.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_handle_input() {
        let mut input = NameInput::new();

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(NameInputEvent::Changed("a".to_string())));

        let res = input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(res, Some(NameInputEvent::Changed("ab".to_string())));

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(NameInputEvent::Changed("a".to_string())));
    }

    #[test]
    fn test_submit_keeps_buffer() {
        let mut input = NameInput::new();
        type_str(&mut input, "Ada");
        assert_eq!(input.handle_event(&TuiEvent::Submit), Some(NameInputEvent::Submit));
        assert_eq!(input.buffer, "Ada");
    }

    #[test]
    fn test_editing_in_the_middle_of_multibyte_text() {
        let mut input = NameInput::new();
        type_str(&mut input, "Zoë");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::InputChar('e'));
        assert_eq!(input.buffer, "Zoeë");

        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "Zoe");

        input.handle_event(&TuiEvent::CursorHome);
        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, None);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "oe");
    }

    #[test]
    fn test_cursor_at_bounds_emits_nothing() {
        let mut input = NameInput::new();
        assert_eq!(input.handle_event(&TuiEvent::CursorLeft), None);
        assert_eq!(input.handle_event(&TuiEvent::CursorEnd), None);
        type_str(&mut input, "x");
        assert_eq!(input.handle_event(&TuiEvent::CursorRight), None);
        assert_eq!(
            input.handle_event(&TuiEvent::CursorHome),
            Some(NameInputEvent::CursorMoved)
        );
    }

    #[test]
    fn test_scroll_keeps_cursor_visible() {
        let mut input = NameInput::new();
        type_str(&mut input, "abcdefghij");
        input.update_scroll(4);
        assert_eq!(input.scroll, 7);
        assert_eq!(input.visible_text(4), "hij");

        input.handle_event(&TuiEvent::CursorHome);
        input.update_scroll(4);
        assert_eq!(input.scroll, 0);
        assert_eq!(input.visible_text(4), "abcd");
    }

    #[test]
    fn test_huge_paste_renders_without_overflow() {
        let mut input = NameInput::new();
        input.handle_event(&TuiEvent::Paste("a".repeat(70_000)));
        assert_eq!(input.cursor_column(), 70_000);

        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        for _ in 0..2 {
            terminal
                .draw(|f| {
                    let area = f.area();
                    input.render(f, area);
                })
                .unwrap();
        }
        // 38 inner columns, cursor parked after the last char
        assert_eq!(input.scroll, 70_000 - 37);
        assert_eq!(input.visible_text(38), "a".repeat(37));

        // Wider than a u16 can count
        let mut input = NameInput::new();
        input.handle_event(&TuiEvent::Paste("a".repeat(usize::from(u16::MAX))));
        input.update_scroll(70);
        input.update_scroll(70);
        assert_eq!(input.scroll, usize::from(u16::MAX) + 1 - 70);
    }

    #[test]
    fn test_render_placeholder_then_text() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = NameInput::new();

        terminal
            .draw(|f| {
                let area = f.area();
                input.render(f, area);
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("What's your name?"));

        type_str(&mut input, "Ada");
        terminal
            .draw(|f| {
                let area = f.area();
                input.render(f, area);
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Ada"));
        assert!(!text.contains("What's your name?"));
    }
}
