pub mod mocks;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use assertions::{expect_completed, ReportAssertion};
#[allow(unused_imports)]
pub use mocks::{Call, CallLog, RecordingClock, ScriptedDeckClient};
#[allow(unused_imports)]
pub use setup::{card, rank_in_every_suit, WatchSetup, WatchSetupBuilder};
