// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Wall-clock timestamps for response bodies

use chrono::Local;

/// Local date-time layout without offset, e.g. `2025-03-14T09:26:53.589793`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Current local time formatted for JSON responses
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
