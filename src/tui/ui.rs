use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::state::App;
use crate::core::view;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Header, ResultPanel, SubmitButton};

/// Widest the form grows on large terminals.
const MAX_FORM_WIDTH: u16 = 72;
const INPUT_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 18;
const FOOTER_TEXT: &str = "Powered by JokeAPI · Enter: get joke · Esc: quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let view = view::render(app);
    let form_area = centered_column(frame.area(), MAX_FORM_WIDTH);

    use Constraint::{Length, Min};
    let [header_area, _, form_row, _, panel_area, footer_area] = Layout::vertical([
        Length(Header::HEIGHT),
        Length(1),
        Length(INPUT_HEIGHT),
        Length(1),
        Min(5),
        Length(1),
    ])
    .areas(form_area);

    let [input_area, button_area] =
        Layout::horizontal([Min(10), Length(BUTTON_WIDTH)]).areas(form_row);

    Header.render(frame, header_area);
    tui.name_input.render(frame, input_area);

    SubmitButton {
        label: view.submit_label,
        enabled: view.submit_enabled,
        spinner_frame,
    }
    .render(frame, button_area);

    ResultPanel::new(&view.panel, spinner_frame).render(frame, panel_area);

    let footer = Paragraph::new(FOOTER_TEXT)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
