//! App/Tab selector: sole owner of the active app.

use hdash_core::AppId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppSelector {
    active: AppId,
}

impl AppSelector {
    pub fn new(initial: AppId) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> AppId {
        self.active
    }

    /// Make `app` active. Returns `false` (and changes nothing) if it
    /// already was.
    pub fn select(&mut self, app: AppId) -> bool {
        if self.active == app {
            return false;
        }
        self.active = app;
        true
    }
}
