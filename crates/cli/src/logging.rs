// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr, filtered by `SKI_LOG`.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let directive = crate::env::log_filter();
    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(crate::env::DEFAULT_LOG_FILTER));
    // A second init (e.g. in tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
