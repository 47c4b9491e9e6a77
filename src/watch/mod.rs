// Public API
pub use clock::{Clock, TokioClock};
pub use config::WatchConfig;
pub use session::{CardWatch, DrawnCards, WatchReport, WatchSession};
pub use watch_loop::{WatchLoop, WatchOutcome, WatchState};

// Internal modules
mod clock;
mod config;
mod session;
mod watch_loop;
