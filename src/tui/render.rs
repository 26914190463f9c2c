use crate::app::{ActiveOverlay, AppState};
use crate::tui::{footer, form_overlay, header, list, notice_overlay};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Min(1),    // list
            Constraint::Length(2), // footer
        ])
        .split(f.area());

    header::render(f, chunks[0], state);
    list::render(f, chunks[1], state);
    footer::render(f, chunks[2], state);

    if let ActiveOverlay::Form(form) = &state.overlay {
        form_overlay::render(f, &state.draft, form.focus);
    }

    // Notices block everything else, so they draw last
    if let Some(notice) = &state.notice {
        notice_overlay::render(f, notice);
    }
}
