use crate::validator::DraftField;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    ToggleExpand,
    CollapseAll,
    QuickSelect(usize),
    CycleFilter,
    CycleFilterBack,
    ToggleSort,
    OpenForm,
    CloseForm,
    NextField,
    PrevField,
    Input(char),
    Backspace,
    SeverityNext,
    SeverityPrev,
    Submit,
    DismissNotice,
    None,
}

/// What currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    List,
    Form,
    Notice,
}

/// Captures the UI state needed to interpret a key press.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    pub mode: Mode,
    pub focus: DraftField,
}

pub fn map_key(key: KeyEvent, ctx: &InputContext) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match ctx.mode {
        Mode::Notice => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q' | ' ') => Action::DismissNotice,
            _ => Action::None,
        },
        Mode::Form => map_form_key(key, ctx.focus),
        Mode::List => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
            KeyCode::Enter | KeyCode::Char(' ' | 'l') | KeyCode::Right => Action::ToggleExpand,
            KeyCode::Char('f') => Action::CycleFilter,
            KeyCode::Char('F') => Action::CycleFilterBack,
            KeyCode::Char('s') => Action::ToggleSort,
            KeyCode::Char('n') => Action::OpenForm,
            KeyCode::Char('c') => Action::CollapseAll,
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                Action::QuickSelect((c as u8 - b'0') as usize)
            }
            _ => Action::None,
        },
    }
}

fn map_form_key(key: KeyEvent, focus: DraftField) -> Action {
    match key.code {
        KeyCode::Esc => Action::CloseForm,
        KeyCode::Enter => Action::Submit,
        KeyCode::Tab | KeyCode::Down => Action::NextField,
        KeyCode::BackTab | KeyCode::Up => Action::PrevField,
        KeyCode::Right if focus == DraftField::Severity => Action::SeverityNext,
        KeyCode::Left if focus == DraftField::Severity => Action::SeverityPrev,
        KeyCode::Backspace if focus != DraftField::Severity => Action::Backspace,
        KeyCode::Char(c)
            if focus != DraftField::Severity
                && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Action::Input(c)
        }
        _ => Action::None,
    }
}
