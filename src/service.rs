// SPDX-License-Identifier: GPL-3.0-or-later

use crate::api::BreezeClient;
use crate::api::common::{CustomerDetails, Funds};
use crate::error::{Result, ServiceError};
use tracing::{debug, error, info};

/// Client facade that forwards data calls to the brokerage only once a session has been
/// established.
///
/// There is no way back to the uninitialized state: sessions are neither invalidated nor
/// refreshed. [BreezeService::establish_session] takes `&mut self`, so sharing one service
/// between tasks requires the caller to provide the locking.
pub struct BreezeService<C: BreezeClient> {
    client: C,
    initialized: bool,
}

impl<C: BreezeClient> BreezeService<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            initialized: false,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Generates a session with the brokerage. Every call reaches the remote service, even when a
    /// session already exists.
    pub async fn establish_session(
        &mut self,
        api_secret: &str,
        session_token: &str,
    ) -> Result<()> {
        match self.client.generate_session(api_secret, session_token).await {
            Ok(()) => {
                self.initialized = true;
                info!("breeze session established");
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "failed to generate session");
                Err(ServiceError::Upstream(err))
            }
        }
    }

    pub async fn fetch_customer_details(&self) -> Result<CustomerDetails> {
        self.check_initialized()?;
        self.client.get_customer_details().await.map_err(|err| {
            error!(error = %err, "failed to fetch customer details");
            ServiceError::Upstream(err)
        })
    }

    pub async fn fetch_funds(&self) -> Result<Funds> {
        self.check_initialized()?;
        self.client.get_funds().await.map_err(|err| {
            error!(error = %err, "failed to fetch funds");
            ServiceError::Upstream(err)
        })
    }

    fn check_initialized(&self) -> Result<()> {
        if !self.initialized {
            debug!("rejecting data call without a session");
            return Err(ServiceError::NotInitialized);
        }
        Ok(())
    }
}

#[cfg(feature = "live")]
impl BreezeService<crate::live::LiveClient> {
    /// Creates a service backed by the REST client. No request is sent until a session is
    /// established.
    pub fn from_config(config: &crate::api::BreezeConfig) -> anyhow::Result<Self> {
        Ok(Self::new(crate::live::LiveClient::new(config)?))
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_config(&crate::api::BreezeConfig::from_env()?)
    }
}
