#[path = "support/fakes.rs"]
pub mod fakes;

pub use harness::{SettingsHarness, context_for, create_settings_harness};
