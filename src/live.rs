// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

pub use client::LiveClient;
mod client;

mod protocol;

#[cfg(test)]
pub(crate) mod test_server;
