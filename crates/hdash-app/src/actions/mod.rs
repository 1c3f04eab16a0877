//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use hdash_client::ApiClient;
use hdash_core::prelude::*;
use hdash_core::AppId;
use tokio::sync::mpsc;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::settings_form::SettingsSnapshot;

pub(super) mod browser;
pub mod stream;

pub use stream::StreamTasks;

/// Execute an action by spawning a background task
pub fn handle_action<C>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    client: &Arc<C>,
    tasks: &mut StreamTasks,
) where
    C: ApiClient + Send + Sync + 'static,
{
    match action {
        UpdateAction::LoadSettings { app } => {
            let client = Arc::clone(client);
            tokio::spawn(async move {
                let msg = match load_snapshot(client.as_ref(), app).await {
                    Ok(snapshot) => Message::SettingsLoaded { app, snapshot },
                    Err(e) => Message::SettingsLoadFailed {
                        app,
                        error: e.into(),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::SaveSettings { request } => {
            let client = Arc::clone(client);
            tokio::spawn(async move {
                let msg = match client.save_settings(&request).await {
                    Ok(resp) => Message::SettingsSaved {
                        request,
                        changes_made: resp.changes_made,
                    },
                    Err(e) => Message::SettingsSaveFailed {
                        app: request.app_type,
                        error: e.into(),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::ResetSettings { app } => {
            let client = Arc::clone(client);
            tokio::spawn(async move {
                let msg = match client.reset_settings(app).await {
                    Ok(()) => Message::ResetCompleted { app },
                    Err(e) => Message::ResetFailed {
                        app,
                        error: e.into(),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::TestConnection { request } => {
            let client = Arc::clone(client);
            tokio::spawn(async move {
                let result = client.test_connection(&request).await.map_err(Into::into);
                let _ = msg_tx
                    .send(Message::ConnectionTested {
                        app: request.app,
                        result,
                    })
                    .await;
            });
        }

        UpdateAction::RefreshConfiguredApps => {
            // Background refresh: failures are logged only
            let client = Arc::clone(client);
            tokio::spawn(async move {
                match client.configured_apps().await {
                    Ok(apps) => {
                        let _ = msg_tx.send(Message::ConfiguredAppsLoaded(apps)).await;
                    }
                    Err(e) => warn!("Error loading configured apps: {}", e),
                }
            });
        }

        UpdateAction::LoadTheme => {
            let client = Arc::clone(client);
            tokio::spawn(async move {
                match client.theme().await {
                    Ok(dark_mode) => {
                        let _ = msg_tx.send(Message::ThemeLoaded(dark_mode)).await;
                    }
                    Err(e) => warn!("Error loading theme: {}", e),
                }
            });
        }

        UpdateAction::SaveTheme { dark_mode } => {
            let client = Arc::clone(client);
            tokio::spawn(async move {
                if let Err(e) = client.set_theme(dark_mode).await {
                    warn!("Error saving theme: {}", e);
                }
            });
        }

        UpdateAction::OpenStream { app, generation } => {
            debug!("Opening log stream for {} (generation {})", app, generation);
            let handle = stream::spawn_log_stream(app, generation, Arc::clone(client), msg_tx);
            tasks.set_stream(handle);
        }

        UpdateAction::CloseStream => {
            debug!("Closing log stream");
            tasks.abort_all();
        }

        UpdateAction::ScheduleReconnect { generation, delay } => {
            let handle = stream::spawn_reconnect_timer(generation, delay, msg_tx);
            tasks.set_retry(handle);
        }

        UpdateAction::OpenInBrowser { url } => {
            info!("Opening {} in browser", url);
            if let Err(e) = browser::open_url_in_browser(&url) {
                warn!("Failed to open {}: {}", url, e);
            }
        }
    }
}

/// Fetch everything the settings panel for `app` shows.
async fn load_snapshot<C: ApiClient>(client: &C, app: AppId) -> Result<SettingsSnapshot> {
    let global = client.global_settings().await?;
    if app.is_primary() {
        return Ok(SettingsSnapshot::from_global(&global));
    }
    let resp = client.app_settings(app).await?;
    Ok(SettingsSnapshot::from_app(&resp))
}
