// SPDX-License-Identifier: GPL-3.0-or-later

use crate::api::common::Payload;
use crate::api::{BreezeClient, BreezeConfig};
use crate::live::protocol::{
    self, APP_KEY_HEADER, CHECKSUM_HEADER, SESSION_TOKEN_HEADER, Session, TIMESTAMP_HEADER,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::RequestBuilder;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct CustomerDetailsRequest<'a> {
    session_token: &'a str,
    app_key: &'a str,
}

/// Client for the Breeze REST api.
pub struct LiveClient {
    http: reqwest::Client,
    app_key: String,
    api_url: String,
    session: Option<Session>,
}

impl LiveClient {
    pub fn new(config: &BreezeConfig) -> Result<Self> {
        let mut header_map = HeaderMap::new();
        header_map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::ClientBuilder::new()
            .default_headers(header_map)
            .build()?;
        Ok(Self {
            http,
            app_key: config.app_key.clone(),
            api_url: config.api_url.clone(),
            session: None,
        })
    }

    /// Id of the authenticated user, once a session was generated.
    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.user_id.as_str())
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.api_url.trim_end_matches('/'))
    }

    fn session(&self) -> Result<&Session> {
        self.session
            .as_ref()
            .context("no active session, generate a session first")
    }

    fn customer_details_request(&self, api_session: &str) -> Result<RequestBuilder> {
        let body = serde_json::to_string(&CustomerDetailsRequest {
            session_token: api_session,
            app_key: &self.app_key,
        })?;
        Ok(self.http.get(self.url("customerdetails")).body(body))
    }

    fn signed_get(&self, session: &Session, endpoint: &str, body: String) -> RequestBuilder {
        let timestamp = protocol::format_timestamp(Utc::now());
        let checksum = protocol::checksum(&timestamp, &body, &session.api_secret);
        self.http
            .get(self.url(endpoint))
            .header(CHECKSUM_HEADER, checksum)
            .header(TIMESTAMP_HEADER, timestamp)
            .header(APP_KEY_HEADER, &self.app_key)
            .header(SESSION_TOKEN_HEADER, &session.session_token)
            .body(body)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Payload> {
        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Payload> {
        let envelope = self.send(request).await?;
        protocol::check_envelope(&envelope)?;
        Ok(envelope)
    }
}

#[async_trait]
impl BreezeClient for LiveClient {
    async fn generate_session(&mut self, api_secret: &str, session_token: &str) -> Result<()> {
        // Rejections come back as envelopes without a token, reported by parse_session
        let envelope = self.send(self.customer_details_request(session_token)?).await?;
        let session = protocol::parse_session(&envelope, api_secret, session_token)?;
        debug!(user_id = %session.user_id, "generated breeze session");
        self.session = Some(session);
        Ok(())
    }

    async fn get_customer_details(&self) -> Result<Payload> {
        let session = self.session()?;
        self.execute(self.customer_details_request(&session.api_session)?)
            .await
    }

    async fn get_funds(&self) -> Result<Payload> {
        let session = self.session()?;
        let request = self.signed_get(session, "funds", "{}".into());
        self.execute(request).await
    }
}
