use crate::app::AppState;
use crate::projector::SeverityFilter;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let filter_color = match state.filter {
        SeverityFilter::All => Color::White,
        SeverityFilter::Low => Color::Green,
        SeverityFilter::Medium => Color::Yellow,
        SeverityFilter::High => Color::Red,
    };

    let spans = vec![
        Span::styled(
            format!(" incidash v{} ", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(
            "AI Safety Incident Dashboard",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!("[{}]", state.filter.label()),
            Style::default().fg(filter_color),
        ),
        Span::styled(
            format!(" [{}]", state.sort.label()),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(
            format!(" {}/{}", state.visible_count(), state.store.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(header, area);
}
