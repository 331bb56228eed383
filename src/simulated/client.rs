// SPDX-License-Identifier: GPL-3.0-or-later

use crate::api::BreezeClient;
use crate::api::common::Payload;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulatedCall {
    GenerateSession,
    GetCustomerDetails,
    GetFunds,
}

/// An in-memory brokerage that accepts a single credential pair and serves fixed documents.
///
/// Every call received is counted, including rejected ones, so callers can check which remote
/// calls would have been made.
pub struct SimulatedClient {
    api_secret: String,
    session_token: String,
    customer_details: Payload,
    funds: Payload,
    session_key: Option<String>,
    generate_session_calls: AtomicUsize,
    get_customer_details_calls: AtomicUsize,
    get_funds_calls: AtomicUsize,
}

impl SimulatedClient {
    pub fn call_count(&self, call: SimulatedCall) -> usize {
        let counter = match call {
            SimulatedCall::GenerateSession => &self.generate_session_calls,
            SimulatedCall::GetCustomerDetails => &self.get_customer_details_calls,
            SimulatedCall::GetFunds => &self.get_funds_calls,
        };
        counter.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.call_count(SimulatedCall::GenerateSession)
            + self.call_count(SimulatedCall::GetCustomerDetails)
            + self.call_count(SimulatedCall::GetFunds)
    }

    /// Key of the current session, if one was generated.
    pub fn session_key(&self) -> Option<&str> {
        self.session_key.as_deref()
    }

    fn check_session(&self) -> Result<()> {
        if self.session_key.is_none() {
            anyhow::bail!("no active session")
        }
        Ok(())
    }
}

#[async_trait]
impl BreezeClient for SimulatedClient {
    async fn generate_session(&mut self, api_secret: &str, session_token: &str) -> Result<()> {
        self.generate_session_calls.fetch_add(1, Ordering::SeqCst);
        if api_secret != self.api_secret || session_token != self.session_token {
            anyhow::bail!("Could not authenticate credentials. Please check token and keys")
        }
        self.session_key = Some(Uuid::new_v4().to_string());
        Ok(())
    }

    async fn get_customer_details(&self) -> Result<Payload> {
        self.get_customer_details_calls.fetch_add(1, Ordering::SeqCst);
        self.check_session()?;
        Ok(self.customer_details.clone())
    }

    async fn get_funds(&self) -> Result<Payload> {
        self.get_funds_calls.fetch_add(1, Ordering::SeqCst);
        self.check_session()?;
        Ok(self.funds.clone())
    }
}

pub struct SimulatedClientBuilder {
    api_secret: String,
    session_token: String,
    customer_details: Payload,
    funds: Payload,
}

impl SimulatedClientBuilder {
    /// Creates a builder for a client that only accepts the given secret and session token.
    pub fn new(api_secret: &str, session_token: &str) -> Self {
        Self {
            api_secret: api_secret.into(),
            session_token: session_token.into(),
            customer_details: json!({
                "Success": {
                    "idirect_userid": "SIMULATED",
                    "idirect_user_name": "Simulated User",
                    "exg_status": { "NSE": "Y", "BSE": "Y", "FNO": "N" }
                },
                "Status": 200,
                "Error": null
            }),
            funds: json!({
                "Success": {
                    "bank_account": "000000000000",
                    "total_bank_balance": 100000.0,
                    "allocated_equity": 50000.0,
                    "unallocated_balance": "50000.0"
                },
                "Status": 200,
                "Error": null
            }),
        }
    }

    pub fn set_customer_details(mut self, customer_details: Payload) -> Self {
        self.customer_details = customer_details;
        self
    }

    pub fn set_funds(mut self, funds: Payload) -> Self {
        self.funds = funds;
        self
    }

    pub fn build(self) -> SimulatedClient {
        SimulatedClient {
            api_secret: self.api_secret,
            session_token: self.session_token,
            customer_details: self.customer_details,
            funds: self.funds,
            session_key: None,
            generate_session_calls: AtomicUsize::new(0),
            get_customer_details_calls: AtomicUsize::new(0),
            get_funds_calls: AtomicUsize::new(0),
        }
    }
}
