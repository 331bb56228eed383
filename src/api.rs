// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

pub use client::BreezeClient;
mod client;

pub mod common;

pub use config::BreezeConfig;
mod config;
