//! Key event handlers for UI modes

use hdash_core::AppId;

use crate::dialog::Dialog;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, View};

/// Convert key events to messages based on current mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if let Some(dialog) = &state.dialog {
        return handle_key_dialog(dialog, key);
    }

    if state.form.editing.is_some() {
        return handle_key_editing(key);
    }

    if let Some(msg) = handle_key_global(state, key) {
        return Some(msg);
    }

    match state.view {
        View::Home => None,
        View::Logs => handle_key_logs(key),
        View::Settings => handle_key_settings(key),
    }
}

fn handle_key_dialog(dialog: &Dialog, key: InputKey) -> Option<Message> {
    match dialog {
        Dialog::Alert { .. } => match key {
            InputKey::Enter | InputKey::Esc | InputKey::Char(' ') | InputKey::Char('q') => {
                Some(Message::DialogDismiss)
            }
            _ => None,
        },
        Dialog::Confirm { .. } => match key {
            InputKey::Enter | InputKey::Char('y') | InputKey::Char('Y') => {
                Some(Message::DialogConfirm)
            }
            InputKey::Esc | InputKey::Char('n') | InputKey::Char('N') => {
                Some(Message::DialogDismiss)
            }
            _ => None,
        },
    }
}

fn handle_key_editing(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::EditInput(c)),
        InputKey::Backspace => Some(Message::EditBackspace),
        InputKey::Enter => Some(Message::EditCommit),
        InputKey::Esc => Some(Message::EditCancel),
        _ => None,
    }
}

fn handle_key_global(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),

        InputKey::Char('h') => Some(Message::SwitchView(View::Home)),
        InputKey::Char('l') => Some(Message::SwitchView(View::Logs)),
        // In the settings view `s` saves instead
        InputKey::Char('s') if state.view != View::Settings => {
            Some(Message::SwitchView(View::Settings))
        }
        InputKey::Tab => Some(Message::NextView),
        InputKey::BackTab => Some(Message::PreviousView),

        InputKey::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            Some(Message::SelectApp(AppId::from_index(index)))
        }
        InputKey::Char('[') => Some(Message::PreviousApp),
        InputKey::Char(']') => Some(Message::NextApp),

        InputKey::Char('T') => Some(Message::ToggleTheme),
        InputKey::Char('u') => Some(Message::OpenUserPage),

        _ => None,
    }
}

fn handle_key_logs(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('a') => Some(Message::ToggleAutoScroll),
        InputKey::Char('c') => Some(Message::ClearLogs),
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ScrollToBottom),
        _ => None,
    }
}

fn handle_key_settings(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('j') | InputKey::Down => Some(Message::FieldNext),
        InputKey::Char('k') | InputKey::Up => Some(Message::FieldPrevious),
        InputKey::Enter => Some(Message::FieldActivate),
        InputKey::Char(' ') => Some(Message::FieldToggle),
        InputKey::Char('s') => Some(Message::SaveSettings),
        InputKey::Char('R') => Some(Message::RequestReset),
        InputKey::Char('t') => Some(Message::TestConnection),
        _ => None,
    }
}
