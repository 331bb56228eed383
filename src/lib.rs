// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod api;
pub mod error;
pub mod service;
pub mod simulated;

#[cfg(feature = "live")]
pub mod live;

pub use error::ServiceError;
pub use service::BreezeService;
