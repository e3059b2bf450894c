#![allow(dead_code)]

pub mod proptest_prelude;
pub mod state_builder;

// Logging is auto-installed for every integration test binary
#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}
