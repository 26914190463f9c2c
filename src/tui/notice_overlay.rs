use crate::app::{Notice, NoticeKind};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn render(f: &mut Frame, notice: &Notice) {
    let area = f.area();

    let width = 40u16.min(area.width);
    let height = 5u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay_area = Rect::new(x, y, width, height);

    f.render_widget(Clear, overlay_area);

    let (title, color) = match notice.kind {
        NoticeKind::Error => (" Error ", Color::Red),
        NoticeKind::Success => (" Done ", Color::Green),
    };
    let hints = Line::from(vec![
        Span::styled(
            "Enter",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ok ", Style::default().fg(Color::DarkGray)),
    ]);

    let block = Block::default()
        .title(title)
        .title_bottom(hints.centered())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black));

    let message = Line::from(Span::styled(
        notice.message.clone(),
        Style::default().fg(Color::White),
    ));

    let paragraph = Paragraph::new(vec![Line::from(""), message])
        .block(block)
        .wrap(Wrap { trim: true })
        .centered();
    f.render_widget(paragraph, overlay_area);
}
