//! Interrupt polling that doubles as the end-of-frame wait.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::map::is_interrupt;

/// Wait up to `timeout` for terminal input, returning true if the interrupt
/// key arrived. Other events are drained and ignored.
pub fn poll_interrupt(timeout: Duration) -> Result<bool> {
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match event::poll(remaining) {
            Ok(true) => {}
            Ok(false) => return Ok(false),
            // A stop signal landing mid-wait; the caller checks its running flag next.
            Err(e) if e.kind() == io::ErrorKind::Interrupted => return Ok(false),
            Err(e) => return Err(e.into()),
        }
        if let Event::Key(key) = event::read()? {
            if is_interrupt(key) {
                return Ok(true);
            }
        }
        if remaining.is_zero() {
            return Ok(false);
        }
    }
}
