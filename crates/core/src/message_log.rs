//! Message log module - fixed table of the most recent record per routing key
//!
//! Each inbound [`Record`] is routed to a slot by its `orbit` argument and
//! fully replaces that slot's contents. Slots are created inactive at startup
//! and are never removed.
//!
//! # Field Extraction
//!
//! Arguments are walked positionally. A string naming a known field, directly
//! followed by an argument of the expected kind, sets that field and consumes
//! both arguments. Anything else consumes one argument and is ignored.
//!
//! | Name | Kind | Field | Default |
//! |------|------|-------|---------|
//! | `s` | string | label | `???` |
//! | `n` | int | count | 0 |
//! | `cycle` | float | cycle | 0.0 |
//! | `gain` | float | gain | 1.0 |

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::types::{Arg, ArgKind, Record, LOG_CAPACITY, LOG_TEXT_CAPACITY};

/// Argument name carrying the routing key.
pub const ROUTING_FIELD: &str = "orbit";

/// Label shown before a record supplies one.
pub const DEFAULT_LABEL: &str = "???";

pub type SlotText = ArrayString<LOG_TEXT_CAPACITY>;

/// `MM:SS` derived from the message counter.
pub type Timestamp = ArrayString<8>;

/// One row of the message log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogSlot {
    pub address: SlotText,
    pub label: SlotText,
    pub count: i32,
    pub cycle: f32,
    pub gain: f32,
    pub index: usize,
    pub timestamp: Timestamp,
    pub active: bool,
}

impl LogSlot {
    fn inactive(index: usize) -> Self {
        Self {
            address: SlotText::new(),
            label: SlotText::new(),
            count: 0,
            cycle: 0.0,
            gain: 1.0,
            index,
            timestamp: Timestamp::new(),
            active: false,
        }
    }

    fn reset(&mut self) {
        self.address.clear();
        self.label.clear();
        self.label.push_str(DEFAULT_LABEL);
        self.count = 0;
        self.cycle = 0.0;
        self.gain = 1.0;
        self.timestamp.clear();
    }

    /// Fractional part of `cycle`, the position within the current cycle.
    pub fn cycle_fraction(&self) -> f32 {
        self.cycle.fract()
    }
}

/// Entry of the field table: a named argument of an expected kind and how to store it.
struct FieldRule {
    name: &'static str,
    kind: ArgKind,
    apply: fn(&mut LogSlot, &Arg),
}

fn set_label(slot: &mut LogSlot, arg: &Arg) {
    if let Some(s) = arg.as_str() {
        copy_truncated(&mut slot.label, s);
    }
}

fn set_count(slot: &mut LogSlot, arg: &Arg) {
    if let Some(v) = arg.as_int() {
        slot.count = v;
    }
}

fn set_cycle(slot: &mut LogSlot, arg: &Arg) {
    if let Some(v) = arg.as_float() {
        slot.cycle = v;
    }
}

fn set_gain(slot: &mut LogSlot, arg: &Arg) {
    if let Some(v) = arg.as_float() {
        slot.gain = v;
    }
}

static FIELD_RULES: [FieldRule; 4] = [
    FieldRule {
        name: "s",
        kind: ArgKind::Str,
        apply: set_label,
    },
    FieldRule {
        name: "n",
        kind: ArgKind::Int,
        apply: set_count,
    },
    FieldRule {
        name: "cycle",
        kind: ArgKind::Float,
        apply: set_cycle,
    },
    FieldRule {
        name: "gain",
        kind: ArgKind::Float,
        apply: set_gain,
    },
];

fn find_rule(name: &str, next: Option<&Arg>) -> Option<&'static FieldRule> {
    let kind = next.and_then(Arg::kind)?;
    FIELD_RULES
        .iter()
        .find(|rule| rule.name == name && rule.kind == kind)
}

/// Copy as many whole characters as fit in `CAP` bytes.
fn copy_truncated<const CAP: usize>(dst: &mut ArrayString<CAP>, src: &str) {
    dst.clear();
    for ch in src.chars() {
        if dst.try_push(ch).is_err() {
            break;
        }
    }
}

/// Scan for the first `orbit` string directly followed by an int.
pub fn routing_key(record: &Record) -> i32 {
    record
        .args
        .windows(2)
        .find_map(|pair| match (&pair[0], &pair[1]) {
            (Arg::Str(name), Arg::Int(key)) if name == ROUTING_FIELD => Some(*key),
            _ => None,
        })
        .unwrap_or(0)
}

/// Clamp a routing key into `0..LOG_CAPACITY`.
pub fn slot_for_key(key: i32) -> usize {
    key.clamp(0, LOG_CAPACITY as i32 - 1) as usize
}

/// `MM:SS` for a message counter value (not wall-clock time).
pub fn format_timestamp(counter: u32) -> Timestamp {
    let mut ts = Timestamp::new();
    let _ = write!(ts, "{:02}:{:02}", (counter / 60) % 60, counter % 60);
    ts
}

/// Fixed-capacity table of log slots plus the global message counter.
#[derive(Debug, Clone)]
pub struct MessageLog {
    slots: [LogSlot; LOG_CAPACITY],
    total: u32,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageLog {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(LogSlot::inactive),
            total: 0,
        }
    }

    pub fn slots(&self) -> &[LogSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&LogSlot> {
        self.slots.get(index)
    }

    pub fn active_slots(&self) -> impl Iterator<Item = &LogSlot> {
        self.slots.iter().filter(|s| s.active)
    }

    /// Messages ingested so far.
    pub fn total_messages(&self) -> u32 {
        self.total
    }

    /// Route a record to its slot, reset the slot and extract known fields.
    ///
    /// Returns the slot index that was overwritten.
    pub fn ingest(&mut self, record: &Record) -> usize {
        let index = slot_for_key(routing_key(record));
        let slot = &mut self.slots[index];

        slot.reset();
        copy_truncated(&mut slot.address, &record.address);
        slot.index = index;
        slot.active = true;

        let args = &record.args;
        let mut i = 0;
        while i < args.len() {
            if let Arg::Str(name) = &args[i] {
                if let Some(rule) = find_rule(name, args.get(i + 1)) {
                    (rule.apply)(slot, &args[i + 1]);
                    i += 1;
                }
            }
            i += 1;
        }

        slot.timestamp = format_timestamp(self.total);
        self.total = self.total.wrapping_add(1);

        tracing::trace!(
            slot = index,
            address = %slot.address,
            label = %slot.label,
            count = slot.count,
            "routed record"
        );
        index
    }
}
