use crate::incident::Severity;
use crate::tui::list::severity_color;
use crate::tui::tail;
use crate::validator::{Draft, DraftField};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const LABEL_WIDTH: usize = 11;

pub fn render(f: &mut Frame, draft: &Draft, focus: DraftField) {
    let area = f.area();

    // 3 fields with a spacer between each, +2 border
    let width = overlay_width(area.width);
    let height = 7u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay_area = Rect::new(x, y, width, height);

    f.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Report New Incident ")
        .title_bottom(Line::from(" Enter submit  Esc close ").centered())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let value_max = (width as usize).saturating_sub(2 + LABEL_WIDTH + 2);
    let lines = vec![
        text_line(DraftField::Title, &draft.title, focus, value_max),
        Line::from(""),
        text_line(DraftField::Description, &draft.description, focus, value_max),
        Line::from(""),
        severity_line(draft.severity, focus == DraftField::Severity),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, overlay_area);
}

fn label(field: DraftField, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let marker = if focused { "›" } else { " " };
    Span::styled(format!("{marker}{:>w$}  ", field.label(), w = LABEL_WIDTH - 1), style)
}

fn text_line(field: DraftField, value: &str, focus: DraftField, max: usize) -> Line<'static> {
    let focused = field == focus;
    let mut spans = vec![label(field, focused)];
    if value.is_empty() && !focused {
        spans.push(Span::styled(
            field.label().to_string(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ));
    } else {
        // The newest characters stay visible while typing
        let shown = tail(value, max.saturating_sub(1));
        spans.push(Span::styled(shown, Style::default().fg(Color::White)));
    }
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn severity_line(current: Severity, focused: bool) -> Line<'static> {
    let mut spans = vec![label(DraftField::Severity, focused)];
    for s in Severity::ALL {
        let style = if s == current {
            Style::default()
                .fg(severity_color(s))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", s.label()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// 70% of the terminal, at least 40 columns, never wider than the terminal.
fn overlay_width(total: u16) -> u16 {
    let share = u16::try_from(u32::from(total) * 7 / 10).unwrap_or(u16::MAX);
    share.max(40).min(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn empty_unfocused_field_shows_placeholder() {
        let line = text_line(DraftField::Description, "", DraftField::Title, 30);
        assert!(text(&line).ends_with("Description"));
    }

    #[test]
    fn focused_field_shows_caret() {
        let line = text_line(DraftField::Title, "abc", DraftField::Title, 30);
        let s = text(&line);
        assert!(s.starts_with('›'));
        assert!(s.ends_with("abc▏"));
    }

    #[test]
    fn long_value_shows_tail() {
        let line = text_line(DraftField::Title, "0123456789", DraftField::Description, 5);
        assert!(text(&line).ends_with("6789"));
    }

    #[test]
    fn overlay_width_bounds() {
        assert_eq!(overlay_width(100), 70);
        assert_eq!(overlay_width(50), 40);
        assert_eq!(overlay_width(30), 30);
    }

    #[test]
    fn overlay_width_huge_terminal_does_not_overflow() {
        assert_eq!(overlay_width(u16::MAX), 45874);
        assert_eq!(overlay_width(9363), 6554);
    }

    #[test]
    fn severity_line_lists_all_levels() {
        let s = text(&severity_line(Severity::Medium, true));
        for sev in Severity::ALL {
            assert!(s.contains(sev.label()));
        }
    }
}
