//! OSC wireframe (workspace facade crate).
//!
//! This package exposes `osc_wireframe::{adapter,core,input,term,types}` plus the
//! binary's CLI and logging setup, while the implementation lives in dedicated
//! crates under `crates/`.

pub mod cli;
pub mod logging;

pub use osc_wireframe_adapter as adapter;
pub use osc_wireframe_core as core;
pub use osc_wireframe_input as input;
pub use osc_wireframe_term as term;
pub use osc_wireframe_types as types;
