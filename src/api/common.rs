// SPDX-License-Identifier: GPL-3.0-or-later

use serde_json::Value;

/// An opaque JSON document as returned by the brokerage. No structure is assumed.
pub type Payload = Value;

pub type CustomerDetails = Payload;

pub type Funds = Payload;
