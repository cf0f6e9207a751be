// Test helper modules
pub mod fixtures;

pub use test_harness::TestHarness;
