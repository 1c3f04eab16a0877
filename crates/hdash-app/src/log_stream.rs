//! Log stream connection state machine
//!
//! Pure bookkeeping: which app the single stream belongs to, which phase it
//! is in and which connection generation is current. Side effects (opening
//! the socket, arming the retry timer) are issued by the handler as
//! [`crate::UpdateAction`]s.
//!
//! ```text
//!   Closed ──open(configured)──▶ Connecting ──opened──▶ Open
//!     ▲                              │                   │
//!     │                              └──────error────────┤
//!     │                                                  ▼
//!     └──retry due, app inactive/unconfigured──── Reconnecting
//!                                                        │
//!                         retry due, still active ───────┘──▶ Connecting
//! ```
//!
//! Every `open()` and `close()` bumps the generation, so events and timers
//! tagged with an older generation are ignored.

use hdash_core::AppId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamPhase {
    #[default]
    Closed,
    Connecting,
    Open,
    Reconnecting,
}

/// Connection label shown above the log pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamStatus {
    Connected,
    #[default]
    Disconnected,
}

impl StreamStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StreamStatus::Connected => "Connected",
            StreamStatus::Disconnected => "Disconnected",
        }
    }

    pub fn from_configured(configured: bool) -> Self {
        if configured {
            StreamStatus::Connected
        } else {
            StreamStatus::Disconnected
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogStreamState {
    phase: StreamPhase,
    app: Option<AppId>,
    generation: u64,
    pub status: StreamStatus,
}

impl LogStreamState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> StreamPhase {
        self.phase
    }

    /// App the current (or pending) connection belongs to
    pub fn app(&self) -> Option<AppId> {
        self.app
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Start a new connection for `app`. Refused (and the stream closed)
    /// when the app is not configured. Returns the new generation.
    pub fn open(&mut self, app: AppId, configured: bool) -> Option<u64> {
        if !configured {
            self.close();
            return None;
        }
        self.generation += 1;
        self.phase = StreamPhase::Connecting;
        self.app = Some(app);
        Some(self.generation)
    }

    /// Tear down whatever is running.
    pub fn close(&mut self) {
        self.generation += 1;
        self.phase = StreamPhase::Closed;
        self.app = None;
    }

    /// Transport accepted the connection. Returns `false` for stale events.
    pub fn on_opened(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) || self.phase != StreamPhase::Connecting {
            return false;
        }
        self.phase = StreamPhase::Open;
        self.status = StreamStatus::Connected;
        true
    }

    /// Whether a line tagged with `generation` should reach the pane.
    pub fn accepts_line(&self, generation: u64) -> bool {
        self.is_current(generation) && self.phase == StreamPhase::Open
    }

    /// Transport failed; returns the app to retry for, if the failure
    /// belongs to the current connection.
    pub fn on_error(&mut self, generation: u64) -> Option<AppId> {
        if !self.is_current(generation) {
            return None;
        }
        match self.phase {
            StreamPhase::Connecting | StreamPhase::Open => {
                self.phase = StreamPhase::Reconnecting;
                self.status = StreamStatus::Disconnected;
                self.app
            }
            _ => None,
        }
    }

    /// The retry delay elapsed. Reopens only if the stream's app is still
    /// the active one and still configured; otherwise drops to Closed.
    pub fn on_retry_due(&mut self, generation: u64, active: AppId, configured: bool) -> Option<u64> {
        if !self.is_current(generation) || self.phase != StreamPhase::Reconnecting {
            return None;
        }
        match self.app {
            Some(app) if app == active && configured => self.open(app, true),
            _ => {
                self.close();
                None
            }
        }
    }
}
