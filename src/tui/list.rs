use crate::app::{AppState, QUICK_SELECT_MAX};
use crate::incident::{Incident, Severity};
use crate::projector::SeverityFilter;
use crate::tui::truncate;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const DETAIL_INDENT: &str = "      ";

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let view = state.visible();

    if view.is_empty() {
        let msg = if state.store.is_empty() {
            "No incidents reported yet. Press n to add one."
        } else {
            match state.filter {
                SeverityFilter::All => "No incidents",
                _ => "No incidents match the current filter",
            }
        };
        let para = Paragraph::new(msg)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::NONE));
        f.render_widget(para, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_span = (0, 0);
    for (i, incident) in view.iter().enumerate() {
        let start = lines.len();
        let expanded = state.is_expanded(incident.id);
        lines.extend(render_incident(
            incident,
            i,
            i == state.cursor,
            expanded,
            inner_width,
        ));
        if i == state.cursor {
            cursor_span = (start, lines.len());
        }
    }

    let offset = scroll_offset(cursor_span, area.height as usize);
    let visible: Vec<Line> = lines
        .into_iter()
        .skip(offset)
        .take(area.height as usize)
        .collect();

    let list = Paragraph::new(visible).block(Block::default().borders(Borders::NONE));
    f.render_widget(list, area);
}

/// First line to draw so the selected record's whole block is on screen
/// (or at least its first line, when the block is taller than the area).
fn scroll_offset((start, end): (usize, usize), height: usize) -> usize {
    if height == 0 || end <= height {
        0
    } else if end - start > height {
        start
    } else {
        end - height
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Low => Color::Green,
        Severity::Medium => Color::Yellow,
        Severity::High => Color::Red,
    }
}

fn render_incident(
    incident: &Incident,
    visual_idx: usize,
    is_selected: bool,
    expanded: bool,
    max_width: usize,
) -> Vec<Line<'static>> {
    let arrow = if expanded { "▼" } else { "▶" };
    let idx_label = if visual_idx < QUICK_SELECT_MAX {
        format!("{}", visual_idx + 1)
    } else {
        " ".to_string()
    };

    let prefix = format!("{idx_label}{arrow} ");
    let title_max = max_width.saturating_sub(UnicodeWidthStr::width(prefix.as_str()));
    let select_style = if is_selected {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(prefix, Style::default().fg(Color::DarkGray)),
            Span::styled(truncate(&incident.title, title_max), select_style),
        ]),
        Line::from(vec![
            Span::styled("   Severity: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                incident.severity.label(),
                Style::default()
                    .fg(severity_color(incident.severity))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" | Reported: {}", incident.reported_day()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    if expanded {
        let text_max = max_width.saturating_sub(DETAIL_INDENT.len());
        for text in incident.description.lines() {
            lines.push(Line::from(Span::styled(
                format!("{DETAIL_INDENT}{}", truncate(text, text_max)),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::incident::IncidentId;

    fn incident(description: &str) -> Incident {
        Incident {
            id: IncidentId(1),
            title: "Title".to_string(),
            description: description.to_string(),
            severity: Severity::High,
            reported_at: "2025-04-01T14:30:00Z".to_string(),
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn collapsed_incident_is_two_lines() {
        let lines = render_incident(&incident("body"), 0, false, false, 80);
        assert_eq!(lines.len(), 2);
        assert_eq!(text(&lines[0]), "1▶ Title");
        assert_eq!(text(&lines[1]), "   Severity: High | Reported: 2025-04-01");
    }

    #[test]
    fn expanded_incident_shows_description() {
        let lines = render_incident(&incident("first\nsecond"), 0, false, true, 80);
        assert_eq!(lines.len(), 4);
        assert!(text(&lines[0]).contains('▼'));
        assert_eq!(text(&lines[2]).trim(), "first");
        assert_eq!(text(&lines[3]).trim(), "second");
    }

    #[test]
    fn index_label_blank_past_quick_select() {
        let lines = render_incident(&incident("d"), QUICK_SELECT_MAX, false, false, 80);
        assert!(text(&lines[0]).starts_with(' '));
    }

    #[test]
    fn severity_colors() {
        assert_eq!(severity_color(Severity::Low), Color::Green);
        assert_eq!(severity_color(Severity::Medium), Color::Yellow);
        assert_eq!(severity_color(Severity::High), Color::Red);
    }

    #[test]
    fn scroll_offset_keeps_cursor_block_visible() {
        assert_eq!(scroll_offset((0, 2), 10), 0);
        assert_eq!(scroll_offset((8, 12), 10), 2);
        assert_eq!(scroll_offset((20, 40), 10), 20);
        assert_eq!(scroll_offset((4, 6), 0), 0);
    }
}
