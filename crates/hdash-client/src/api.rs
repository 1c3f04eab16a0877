//! Huntarr backend API
//!
//! [`ApiClient`] is the seam the application layer talks through; the
//! production implementation is [`HttpApiClient`]. Every method resolves to
//! `Ok` only for a usable, successful reply:
//!
//! - transport failures, non-2xx statuses and undecodable bodies become
//!   [`Error::Network`] / [`Error::Http`] / [`Error::Json`]
//! - a decoded reply with `success: false` becomes [`Error::Application`]
//!   carrying the server's message

use std::time::Duration;

use futures_util::StreamExt;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tokio::sync::mpsc;
use url::Url;

use hdash_core::prelude::*;
use hdash_core::{AppId, ConfiguredApps};

use crate::protocol::{
    AppSettingsResponse, GlobalSettingsResponse, ResetRequest, SaveSettingsRequest,
    SaveSettingsResponse, StatusResponse, TestConnectionRequest, ThemeRequest, ThemeResponse,
};
use crate::sse::SseDecoder;

/// Connect timeout for every request, including the log stream.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// What the log stream task reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogStreamEvent {
    /// The server accepted the stream request
    Opened,
    /// One `data` payload
    Line(String),
}

/// Operations against a Huntarr backend.
#[trait_variant::make(ApiClient: Send)]
pub trait LocalApiClient {
    /// `GET /api/settings`
    async fn global_settings(&self) -> Result<GlobalSettingsResponse>;

    /// `GET /api/app-settings?app={app}`
    async fn app_settings(&self, app: AppId) -> Result<AppSettingsResponse>;

    /// `POST /api/settings`
    async fn save_settings(&self, request: &SaveSettingsRequest) -> Result<SaveSettingsResponse>;

    /// `POST /api/settings/reset`
    async fn reset_settings(&self, app: AppId) -> Result<()>;

    /// `GET /api/settings/theme`; a missing flag reads as light mode
    async fn theme(&self) -> Result<bool>;

    /// `POST /api/settings/theme`
    async fn set_theme(&self, dark_mode: bool) -> Result<()>;

    /// `POST /api/test-connection`
    async fn test_connection(&self, request: &TestConnectionRequest) -> Result<()>;

    /// `GET /api/configured-apps`
    async fn configured_apps(&self) -> Result<ConfiguredApps>;

    /// `GET /logs?app={app}`, forwarding events until the stream ends.
    ///
    /// Always returns `Err` when the connection fails or the server closes
    /// the stream. Returns `Ok(())` only when `tx` has been dropped.
    async fn stream_logs(&self, app: AppId, tx: mpsc::Sender<LogStreamEvent>) -> Result<()>;
}

/// [`ApiClient`] over HTTP using reqwest.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: Client,
    base: Url,
    timeout: Duration,
}

impl HttpApiClient {
    /// Build a client for `base_url`. `timeout` bounds every request except
    /// the log stream.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base = Url::parse(base_url.trim())
            .map_err(|e| Error::config(format!("invalid server URL '{base_url}': {e}")))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(transport)?;

        Ok(Self {
            http,
            base,
            timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolve an endpoint path (no leading slash) against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| Error::config(format!("invalid endpoint '{path}': {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        self.send_json(self.http.get(url)).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        self.send_json(self.http.post(url).json(body)).await
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.timeout(self.timeout).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
            });
        }
        let body = response.bytes().await.map_err(transport)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl ApiClient for HttpApiClient {
    async fn global_settings(&self) -> Result<GlobalSettingsResponse> {
        self.get_json(self.endpoint("api/settings")?).await
    }

    async fn app_settings(&self, app: AppId) -> Result<AppSettingsResponse> {
        let mut url = self.endpoint("api/app-settings")?;
        url.query_pairs_mut().append_pair("app", app.as_str());
        let resp: AppSettingsResponse = self.get_json(url).await?;
        if !resp.success {
            return Err(Error::application(resp.message));
        }
        Ok(resp)
    }

    async fn save_settings(&self, request: &SaveSettingsRequest) -> Result<SaveSettingsResponse> {
        let resp: SaveSettingsResponse = self.post_json("api/settings", request).await?;
        if !resp.success {
            return Err(Error::application(resp.message));
        }
        Ok(resp)
    }

    async fn reset_settings(&self, app: AppId) -> Result<()> {
        let resp: StatusResponse = self
            .post_json("api/settings/reset", &ResetRequest { app })
            .await?;
        check_status(resp)
    }

    async fn theme(&self) -> Result<bool> {
        let resp: ThemeResponse = self.get_json(self.endpoint("api/settings/theme")?).await?;
        Ok(resp.dark_mode.unwrap_or(false))
    }

    async fn set_theme(&self, dark_mode: bool) -> Result<()> {
        let url = self.endpoint("api/settings/theme")?;
        let response = self
            .http
            .post(url)
            .json(&ThemeRequest { dark_mode })
            .timeout(self.timeout)
            .send()
            .await
            .map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
            });
        }
        // Reply body is not interpreted
        Ok(())
    }

    async fn test_connection(&self, request: &TestConnectionRequest) -> Result<()> {
        let resp: StatusResponse = self.post_json("api/test-connection", request).await?;
        check_status(resp)
    }

    async fn configured_apps(&self) -> Result<ConfiguredApps> {
        self.get_json(self.endpoint("api/configured-apps")?).await
    }

    async fn stream_logs(&self, app: AppId, tx: mpsc::Sender<LogStreamEvent>) -> Result<()> {
        let mut url = self.endpoint("logs")?;
        url.query_pairs_mut().append_pair("app", app.as_str());

        debug!("Opening log stream {}", url);
        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "text/event-stream")
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
            });
        }

        if tx.send(LogStreamEvent::Opened).await.is_err() {
            return Ok(());
        }

        let mut decoder = SseDecoder::new();
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(transport)?;
            for event in decoder.feed(&chunk) {
                if tx.send(LogStreamEvent::Line(event.data)).await.is_err() {
                    debug!("Log stream receiver dropped for {}", app);
                    return Ok(());
                }
            }
        }

        Err(Error::stream("closed by server"))
    }
}

fn check_status(resp: StatusResponse) -> Result<()> {
    if resp.success {
        Ok(())
    } else {
        Err(Error::application(resp.message))
    }
}

fn transport(err: reqwest::Error) -> Error {
    Error::network(err.to_string())
}
