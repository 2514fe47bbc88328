#[path = "support/fakes.rs"]
pub mod fakes;
#[path = "support/harness.rs"]
pub mod harness;

pub use harness::{PayrollHarness, create_payroll_harness, context_for};
