pub mod config;
pub mod core;
pub mod fitting;
pub mod integration;
pub mod selectivity;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
