use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::input::Mode;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let narrow = area.width < crate::app::NARROW_WIDTH_THRESHOLD;

    let hints: &[(&str, &str)] = match state.input_context().mode {
        Mode::Notice => &[("Enter/Esc", "dismiss")],
        Mode::Form if narrow => &[("Tab", "field"), ("Enter", "submit"), ("Esc", "close")],
        Mode::Form => &[
            ("Tab/↑↓", "field"),
            ("←/→", "severity"),
            ("Enter", "submit"),
            ("Esc", "close"),
        ],
        Mode::List if narrow => &[
            ("j/k", "nav"),
            ("Enter", "exp"),
            ("f", "filter"),
            ("s", "sort"),
            ("n", "new"),
            ("q", "quit"),
        ],
        Mode::List => &[
            ("↑↓/jk", "navigate"),
            ("Enter/Space", "expand"),
            ("f/F", "filter"),
            ("s", "sort"),
            ("n", "new incident"),
            ("q", "quit"),
        ],
    };

    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(" {desc}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}
