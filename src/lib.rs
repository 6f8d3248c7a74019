#![doc(test(attr(deny(warnings))))]

//! Allowance Core offers the ledger, accrual, and history primitives that
//! power a daily-allowance spending tracker's presentation layers.

pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod locale;
pub mod storage;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Allowance Core tracing initialized.");
    });
}
