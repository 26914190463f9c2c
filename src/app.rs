//! Session state: the store, the draft, expansion and selections, plus the
//! transient UI bits (cursor, form focus, notice) the terminal needs.

use crate::expansion::ExpansionTracker;
use crate::incident::{Incident, IncidentId, Severity};
use crate::input::{Action, InputContext, Mode};
use crate::projector::{self, SeverityFilter, SortOrder};
use crate::store::RecordStore;
use crate::validator::{self, Draft, DraftField, ValidationError};
use chrono::{DateTime, Utc};

// UI constants
pub const QUICK_SELECT_MAX: usize = 9;
pub const NARROW_WIDTH_THRESHOLD: u16 = 60;

pub const NOTICE_FIELDS_REQUIRED: &str = "Please fill in all fields.";
pub const NOTICE_INCIDENT_ADDED: &str = "Incident added";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

/// Blocking message raised by a submit attempt. Input is ignored until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct FormOverlay {
    pub focus: DraftField,
}

#[derive(Debug, Clone, Default)]
pub enum ActiveOverlay {
    #[default]
    None,
    Form(FormOverlay),
}

pub struct AppState {
    pub store: RecordStore,
    pub draft: Draft,
    pub expansion: ExpansionTracker,
    pub filter: SeverityFilter,
    pub sort: SortOrder,

    // Position within the current projection
    pub cursor: usize,

    pub overlay: ActiveOverlay,
    pub notice: Option<Notice>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(store: RecordStore, filter: SeverityFilter, sort: SortOrder) -> Self {
        Self {
            store,
            draft: Draft::default(),
            expansion: ExpansionTracker::new(),
            filter,
            sort,
            cursor: 0,
            overlay: ActiveOverlay::None,
            notice: None,
            should_quit: false,
        }
    }

    /// The records to render, recomputed from scratch on every call.
    pub fn visible(&self) -> Vec<&Incident> {
        projector::project(self.store.records(), self.filter, self.sort)
    }

    /// Visible records as pretty JSON, in display order.
    pub fn visible_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.visible())
    }

    pub fn visible_count(&self) -> usize {
        self.store
            .records()
            .iter()
            .filter(|r| self.filter.matches(r.severity))
            .count()
    }

    pub fn is_expanded(&self, id: IncidentId) -> bool {
        self.expansion.is_expanded(id)
    }

    // --- List navigation ---

    pub fn move_cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.visible_count();
        if len > 0 && self.cursor < len - 1 {
            self.cursor += 1;
        }
    }

    /// Selects the nth visible row (1-indexed).
    pub fn quick_select(&mut self, n: usize) {
        if n >= 1 && n <= self.visible_count() {
            self.cursor = n - 1;
        }
    }

    pub fn current_id(&self) -> Option<IncidentId> {
        self.visible().get(self.cursor).map(|r| r.id)
    }

    pub fn toggle_expand(&mut self) {
        if let Some(id) = self.current_id() {
            self.toggle_expand_id(id);
        }
    }

    pub fn toggle_expand_id(&mut self, id: IncidentId) -> bool {
        let expanded = self.expansion.toggle(id);
        tracing::debug!("incident {id} expanded={expanded}");
        expanded
    }

    pub fn collapse_all(&mut self) {
        tracing::debug!("collapsing {} incidents", self.expansion.len());
        self.expansion.collapse_all();
    }

    // --- Selections ---

    pub fn set_filter(&mut self, filter: SeverityFilter) {
        let selected = self.current_id();
        self.filter = filter;
        tracing::debug!("filter set to {filter:?}");
        self.follow_selection(selected);
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.cycle());
    }

    pub fn cycle_filter_back(&mut self) {
        self.set_filter(self.filter.cycle_back());
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        let selected = self.current_id();
        self.sort = sort;
        tracing::debug!("sort set to {sort:?}");
        self.follow_selection(selected);
    }

    pub fn toggle_sort(&mut self) {
        self.set_sort(self.sort.toggle());
    }

    /// Keeps the cursor on `selected` if it is still visible, otherwise clamps it.
    fn follow_selection(&mut self, selected: Option<IncidentId>) {
        if let Some(pos) = selected.and_then(|id| self.position_of(id)) {
            self.cursor = pos;
            return;
        }
        let len = self.visible_count();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    fn position_of(&self, id: IncidentId) -> Option<usize> {
        self.visible().iter().position(|r| r.id == id)
    }

    // --- Submission form ---

    pub fn has_form(&self) -> bool {
        matches!(self.overlay, ActiveOverlay::Form(_))
    }

    pub fn open_form(&mut self) {
        if !self.has_form() {
            self.overlay = ActiveOverlay::Form(FormOverlay::default());
        }
    }

    /// Hides the form. The draft is kept for the next time it opens.
    pub fn close_form(&mut self) {
        self.overlay = ActiveOverlay::None;
    }

    pub fn form_focus(&self) -> Option<DraftField> {
        match &self.overlay {
            ActiveOverlay::Form(form) => Some(form.focus),
            ActiveOverlay::None => None,
        }
    }

    pub fn focus_next_field(&mut self) {
        if let ActiveOverlay::Form(ref mut form) = self.overlay {
            form.focus = form.focus.next();
        }
    }

    pub fn focus_prev_field(&mut self) {
        if let ActiveOverlay::Form(ref mut form) = self.overlay {
            form.focus = form.focus.prev();
        }
    }

    pub fn type_char(&mut self, c: char) {
        if let Some(field) = self.form_focus() {
            if let Some(text) = self.draft.field_mut(field) {
                text.push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.form_focus() {
            if let Some(text) = self.draft.field_mut(field) {
                text.pop();
            }
        }
    }

    pub fn set_draft_severity(&mut self, severity: Severity) {
        self.draft.severity = severity;
    }

    /// Validates the draft and, if it passes, commits it to the store.
    ///
    /// On rejection nothing but the notice changes. On success the draft is
    /// reset, the form closes and the cursor lands on the new record when it
    /// is visible under the current filter.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<IncidentId, ValidationError> {
        if let Err(e) = validator::validate(&self.draft) {
            tracing::debug!("submission rejected: {e}");
            self.notice = Some(Notice {
                kind: NoticeKind::Error,
                message: NOTICE_FIELDS_REQUIRED.to_string(),
            });
            return Err(e);
        }

        let selected = self.current_id();
        let id = self.store.add_record(&self.draft, now);
        tracing::info!(
            "incident {id} added (severity {}, {} records total)",
            self.draft.severity,
            self.store.len()
        );
        self.draft.reset();
        self.close_form();
        self.notice = Some(Notice {
            kind: NoticeKind::Success,
            message: NOTICE_INCIDENT_ADDED.to_string(),
        });
        match self.position_of(id) {
            Some(pos) => self.cursor = pos,
            None => self.follow_selection(selected),
        }
        Ok(id)
    }

    // --- Notice ---

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn notice_message(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.message.as_str())
    }

    // --- Input routing ---

    pub fn input_context(&self) -> InputContext {
        let mode = if self.notice.is_some() {
            Mode::Notice
        } else if self.has_form() {
            Mode::Form
        } else {
            Mode::List
        };
        InputContext {
            mode,
            focus: self.form_focus().unwrap_or_default(),
        }
    }

    /// Applies one mapped action. Everything here runs to completion before
    /// the next event is read.
    pub fn handle_action(&mut self, action: Action, now: DateTime<Utc>) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveUp => self.move_cursor_up(),
            Action::MoveDown => self.move_cursor_down(),
            Action::ToggleExpand => self.toggle_expand(),
            Action::CollapseAll => self.collapse_all(),
            Action::QuickSelect(n) => self.quick_select(n),
            Action::CycleFilter => self.cycle_filter(),
            Action::CycleFilterBack => self.cycle_filter_back(),
            Action::ToggleSort => self.toggle_sort(),
            Action::OpenForm => self.open_form(),
            Action::CloseForm => self.close_form(),
            Action::NextField => self.focus_next_field(),
            Action::PrevField => self.focus_prev_field(),
            Action::Input(c) => self.type_char(c),
            Action::Backspace => self.backspace(),
            Action::SeverityNext => self.set_draft_severity(self.draft.severity.next()),
            Action::SeverityPrev => self.set_draft_severity(self.draft.severity.prev()),
            Action::Submit => {
                let _ = self.submit(now);
            }
            Action::DismissNotice => self.dismiss_notice(),
            Action::None => {}
        }
    }
}
