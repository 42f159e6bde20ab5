//! Running flag cleared by the process interrupt signal.
//!
//! `SIGINT` only flips an atomic; the render loop checks it at
//! the top of every iteration, so the frame in flight always completes and the
//! terminal is restored on the normal exit path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use signal_hook::consts::SIGINT;

/// Shared "keep running" state for the render loop.
#[derive(Debug, Clone, Default)]
pub struct RunningFlag {
    stop: Arc<AtomicBool>,
}

impl RunningFlag {
    /// A flag that only stops when [`RunningFlag::stop`] is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// A flag that also stops when the process receives `SIGINT`.
    ///
    /// Other signals keep their default disposition.
    pub fn install() -> Result<Self> {
        let flag = Self::new();
        signal_hook::flag::register(SIGINT, Arc::clone(&flag.stop))
            .context("register SIGINT handler")?;
        Ok(flag)
    }

    pub fn is_running(&self) -> bool {
        !self.stop.load(Ordering::SeqCst)
    }

    pub fn stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}
