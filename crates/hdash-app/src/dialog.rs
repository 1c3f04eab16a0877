//! Modal dialogs replacing the browser's alert/confirm

use crate::message::Message;

#[derive(Debug, Clone)]
pub enum Dialog {
    /// Informational; any dismiss key closes it
    Alert { title: String, message: String },
    /// Yes/no; `on_confirm` is dispatched only on confirmation
    Confirm {
        title: String,
        message: String,
        on_confirm: Box<Message>,
    },
}

impl Dialog {
    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        Dialog::Alert {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn confirm(title: impl Into<String>, message: impl Into<String>, on_confirm: Message) -> Self {
        Dialog::Confirm {
            title: title.into(),
            message: message.into(),
            on_confirm: Box::new(on_confirm),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Dialog::Alert { title, .. } | Dialog::Confirm { title, .. } => title,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Dialog::Alert { message, .. } | Dialog::Confirm { message, .. } => message,
        }
    }

    pub fn is_confirm(&self) -> bool {
        matches!(self, Dialog::Confirm { .. })
    }
}
