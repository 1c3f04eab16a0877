//! Process signal handling

use hdash_core::prelude::*;
use tokio::sync::mpsc;

use crate::message::Message;

/// Send `Message::Quit` on SIGINT, or on SIGTERM where supported.
pub fn spawn_signal_handler(msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        wait_for_shutdown().await;
        info!("Shutdown signal received");
        let _ = msg_tx.send(Message::Quit).await;
    });
}

#[cfg(unix)]
async fn wait_for_shutdown() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut term = match signal(SignalKind::terminate()) {
        Ok(term) => term,
        Err(e) => {
            warn!("Failed to install SIGTERM handler: {}", e);
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = term.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_shutdown() {
    let _ = tokio::signal::ctrl_c().await;
}
