pub mod calculator;
pub mod clock;
pub mod format;
pub mod logic;
pub mod parser;
pub mod state;
pub mod store;
pub mod timelog;
pub mod writer;

pub use clock::{AnyClock, Clock, FixedClock, SystemClock};
pub use state::{BreakState, ClockState, Command, Transition};
pub use store::{FileStore, LogStore, MemoryStore};
pub use timelog::TimeLog;
