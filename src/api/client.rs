// SPDX-License-Identifier: GPL-3.0-or-later

use crate::api::common::Payload;
use anyhow::Result;
use async_trait::async_trait;

/// A trait for instances of a brokerage client, which performs the remote calls against the
/// underlying Breeze service.
#[async_trait]
pub trait BreezeClient: Send + Sync {
    /// Authenticates with the given api secret and the session token obtained from the login flow.
    async fn generate_session(&mut self, api_secret: &str, session_token: &str) -> Result<()>;

    /// Returns the customer details document.
    async fn get_customer_details(&self) -> Result<Payload>;

    /// Returns the funds document.
    async fn get_funds(&self) -> Result<Payload>;
}

#[async_trait]
impl BreezeClient for Box<dyn BreezeClient> {
    async fn generate_session(&mut self, api_secret: &str, session_token: &str) -> Result<()> {
        (**self).generate_session(api_secret, session_token).await
    }

    async fn get_customer_details(&self) -> Result<Payload> {
        (**self).get_customer_details().await
    }

    async fn get_funds(&self) -> Result<Payload> {
        (**self).get_funds().await
    }
}
