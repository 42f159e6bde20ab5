//! Terminal input and loop control (loop-facing).
//!
//! The loop stops through either path:
//! - a `SIGINT` delivered to the process clears the [`RunningFlag`]
//! - in raw mode a Ctrl-C keypress arrives as a key event, which
//!   [`poll_interrupt`] reports while it doubles as the pacing wait

pub mod interrupt;
pub mod map;
pub mod signal;

pub use interrupt::poll_interrupt;
pub use map::is_interrupt;
pub use signal::RunningFlag;
