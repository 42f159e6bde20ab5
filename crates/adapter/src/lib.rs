//! Adapter module - OSC control messages over UDP
//!
//! This module feeds the render loop with decoded control messages. Senders
//! such as live-coding environments emit one OSC message per event; each one
//! becomes a [`Record`](crate::types::Record) for the message log.
//!
//! # Protocol Overview
//!
//! 1. **Transport**: UDP datagrams on `0.0.0.0:9000` by default
//! 2. **Framing**: one OSC 1.0 message per datagram (bundles are dropped)
//! 3. **Arguments**: `i`, `f`, `s`/`S` decode to typed values; other standard
//!    tags are skipped by size and kept as placeholders
//!
//! # Environment Variables
//!
//! - `OSC_WIREFRAME_HOST`: Bind address (default: "0.0.0.0")
//! - `OSC_WIREFRAME_PORT`: Port number (default: 9000)
//! - `OSC_WIREFRAME_DISABLED`: Set to "1" or "true" to disable the receiver
//!
//! # Behavior
//!
//! - Non-blocking: [`OscReceiver::poll`] returns immediately
//! - At most one datagram per poll, so bursts are spread over frames
//! - Malformed datagrams are dropped without touching the log
//!
//! # Testing
//!
//! Send a message with any OSC tool, for example `oscsend`:
//!
//! ```bash
//! oscsend localhost 9000 /dirt/play sisssfsf orbit 2 s bd cycle 1.25 gain 0.8
//! ```

pub mod osc;
pub mod receiver;

pub use osc_wireframe_types as types;

pub use osc::{decode_message, encode_message, DecodeError};
pub use receiver::{OscReceiver, ReceiverConfig, ReceiverError};
