//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (geometry, rendering, network decoding).
//!
//! # Screen Dimensions
//!
//! The render grid is fixed for the lifetime of the process:
//!
//! - **Width**: 120 columns (indexed 0-119)
//! - **Height**: 35 rows (indexed 0-34)
//! - **Footer**: 2 extra terminal rows below the grid (separator + counter)
//!
//! # Projection Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PROJECTION_SCALE` | 20.0 | Numerator of the perspective factor |
//! | `CAMERA_DISTANCE` | 4.0 | Added to rotated z before division |
//! | `ANGLE_STEP` | 0.02 | Rotation advance per frame (radians) |
//! | `TILT_RATIO` | 0.7 | Horizontal-axis angle as a fraction of the vertical one |
//!
//! # Depth Sentinels
//!
//! - `DEPTH_FAR` (-1e10): value every cell is cleared to, any real z beats it
//! - `DEPTH_TEXT` (1e10): value stamped under overlay text
//!
//! # Message Log Layout
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LOG_CAPACITY` | 8 | Number of slots (one per routing key) |
//! | `LOG_ROW_ORIGIN` | 3 | Grid row of slot 0 |
//! | `LOG_ROW_SPACING` | 3 | Rows between consecutive slots |
//! | `LOG_TEXT_CAPACITY` | 31 | Max bytes kept for address and label |
//!
//! # Examples
//!
//! ```
//! use osc_wireframe_types::{Arg, ArgKind, Record, LOG_CAPACITY, SCREEN_WIDTH};
//!
//! let record = Record::new(
//!     "/dirt/play",
//!     vec![Arg::Str("orbit".into()), Arg::Int(3)],
//! );
//! assert_eq!(record.args[1].kind(), Some(ArgKind::Int));
//!
//! let kind = ArgKind::from_tag('f').unwrap();
//! assert_eq!(kind, ArgKind::Float);
//!
//! assert_eq!(LOG_CAPACITY, 8);
//! assert_eq!(SCREEN_WIDTH, 120);
//! ```

/// Grid width in cells (120 columns)
pub const SCREEN_WIDTH: u16 = 120;

/// Grid height in cells (35 rows)
pub const SCREEN_HEIGHT: u16 = 35;

/// Perspective scale (numerator of `scale / (z + distance)`)
pub const PROJECTION_SCALE: f32 = 20.0;

/// Camera distance added to rotated z before the perspective divide
pub const CAMERA_DISTANCE: f32 = 4.0;

/// Rotation advance per frame in radians
pub const ANGLE_STEP: f32 = 0.02;

/// Horizontal-axis angle = vertical-axis angle * TILT_RATIO (tumble coupling)
pub const TILT_RATIO: f32 = 0.7;

/// Depth every cell is reset to at the start of a frame.
pub const DEPTH_FAR: f32 = -1e10;

/// Depth stamped under overlay text.
pub const DEPTH_TEXT: f32 = 1e10;

/// Glyph used for wireframe edges.
pub const WIRE_GLYPH: char = '█';

/// Blank glyph for empty cells.
pub const BLANK_GLYPH: char = ' ';

/// Target frame interval in microseconds (~60 FPS).
pub const FRAME_INTERVAL_US: u64 = 16_666;

/// Number of message log slots.
pub const LOG_CAPACITY: usize = 8;

/// Grid row of the first log slot.
pub const LOG_ROW_ORIGIN: u16 = 3;

/// Rows between consecutive log slots.
pub const LOG_ROW_SPACING: u16 = 3;

/// Bytes kept from a record's address and label (cut on a char boundary).
pub const LOG_TEXT_CAPACITY: usize = 31;

/// Default UDP port for incoming OSC messages.
pub const DEFAULT_OSC_PORT: u16 = 9000;

/// Receive buffer size for one datagram.
pub const RECV_BUFFER_SIZE: usize = 2048;

/// Type of a decoded message argument, as seen by field extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    Int,
    Float,
    Str,
}

impl ArgKind {
    /// Map an OSC type tag to the kinds field extraction understands.
    ///
    /// Returns None for tags that decode to [`Arg::Other`].
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'i' => Some(ArgKind::Int),
            'f' => Some(ArgKind::Float),
            's' | 'S' => Some(ArgKind::Str),
            _ => None,
        }
    }
}

/// One decoded message argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Int(i32),
    Float(f32),
    Str(String),
    /// Any other well-formed argument, kept by tag so positional walks stay aligned.
    Other(char),
}

impl Arg {
    pub fn kind(&self) -> Option<ArgKind> {
        match self {
            Arg::Int(_) => Some(ArgKind::Int),
            Arg::Float(_) => Some(ArgKind::Float),
            Arg::Str(_) => Some(ArgKind::Str),
            Arg::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Arg::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Arg::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Arg::Float(v) => Some(*v),
            _ => None,
        }
    }
}

/// A decoded inbound message: address plus its typed argument list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub address: String,
    pub args: Vec<Arg>,
}

impl Record {
    pub fn new(address: impl Into<String>, args: Vec<Arg>) -> Self {
        Self {
            address: address.into(),
            args,
        }
    }

    /// Build a record from `name, value` pairs, the shape most senders use.
    pub fn from_pairs<'a>(
        address: impl Into<String>,
        pairs: impl IntoIterator<Item = (&'a str, Arg)>,
    ) -> Self {
        let mut args = Vec::new();
        for (name, value) in pairs {
            args.push(Arg::Str(name.to_string()));
            args.push(value);
        }
        Self::new(address, args)
    }
}
