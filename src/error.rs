// SPDX-License-Identifier: GPL-3.0-or-later

/// Errors returned by [crate::BreezeService].
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A data call was made before a session was established.
    #[error("Breeze service not initialized")]
    NotInitialized,

    /// Error raised by the underlying client, passed through untouched.
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
