// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

pub use client::SimulatedCall;
pub use client::SimulatedClient;
pub use client::SimulatedClientBuilder;
mod client;
