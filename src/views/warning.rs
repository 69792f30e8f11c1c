use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 7;

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [middle] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(middle);
    center
}

/// Modal popup drawn over the whole frame.
pub(crate) fn render_warning(frame: &mut Frame, message: &str) {
    let area = centered_rect(WIDTH, HEIGHT, frame.area());
    let text = vec![
        Line::from(message),
        Line::from(""),
        Line::from("Press Enter to dismiss").style(Style::default().fg(Color::DarkGray)),
    ];
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Warning")
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
