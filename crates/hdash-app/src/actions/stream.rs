//! Log stream task and reconnect timer

use std::sync::Arc;
use std::time::Duration;

use hdash_client::{ApiClient, LogStreamEvent};
use hdash_core::prelude::*;
use hdash_core::AppId;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;

/// Buffered events between the transport and the forwarder
const EVENT_BUFFER: usize = 256;

/// Handles of the background work behind the log pane. At most one stream
/// and one retry timer exist at a time.
#[derive(Debug, Default)]
pub struct StreamTasks {
    stream: Option<JoinHandle<()>>,
    retry: Option<JoinHandle<()>>,
}

impl StreamTasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a retry timer is still pending
    pub fn has_retry(&self) -> bool {
        self.retry.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub(super) fn set_stream(&mut self, handle: JoinHandle<()>) {
        self.abort_all();
        self.stream = Some(handle);
    }

    pub(super) fn set_retry(&mut self, handle: JoinHandle<()>) {
        if let Some(old) = self.retry.replace(handle) {
            old.abort();
        }
    }

    /// Abort the stream and any pending retry.
    pub fn abort_all(&mut self) {
        if let Some(handle) = self.stream.take() {
            handle.abort();
        }
        if let Some(handle) = self.retry.take() {
            handle.abort();
        }
    }
}

impl Drop for StreamTasks {
    fn drop(&mut self) {
        self.abort_all();
    }
}

/// Connect the log stream for `app`, tagging everything it reports with
/// `generation`. Ends with `StreamFailed` unless aborted first.
pub(super) fn spawn_log_stream<C>(
    app: AppId,
    generation: u64,
    client: Arc<C>,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    C: ApiClient + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let (event_tx, mut event_rx) = mpsc::channel(EVENT_BUFFER);
        let stream = client.stream_logs(app, event_tx);
        tokio::pin!(stream);

        let result = loop {
            tokio::select! {
                result = &mut stream => break result,
                Some(event) = event_rx.recv() => {
                    if let Err(e) = forward(&msg_tx, generation, event).await {
                        debug!("Log stream for {} stopped: {}", app, e);
                        return;
                    }
                }
            }
        };

        while let Ok(event) = event_rx.try_recv() {
            if let Err(e) = forward(&msg_tx, generation, event).await {
                debug!("Log stream for {} stopped: {}", app, e);
                return;
            }
        }

        match result {
            Ok(()) => debug!("Log stream for {} ended", app),
            Err(e) => {
                let _ = msg_tx
                    .send(Message::StreamFailed {
                        generation,
                        error: e.to_string(),
                    })
                    .await;
            }
        }
    })
}

/// Relay one transport event to the TEA loop.
pub(super) async fn forward(
    msg_tx: &mpsc::Sender<Message>,
    generation: u64,
    event: LogStreamEvent,
) -> Result<()> {
    let msg = match event {
        LogStreamEvent::Opened => Message::StreamOpened { generation },
        LogStreamEvent::Line(line) => Message::StreamLine { generation, line },
    };
    msg_tx.send(msg).await.map_err(|_| Error::ChannelClosed)
}

/// Send `ReconnectDue` after `delay`.
pub(super) fn spawn_reconnect_timer(
    generation: u64,
    delay: Duration,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = msg_tx.send(Message::ReconnectDue { generation }).await;
    })
}
