//! Key mapping from terminal events to loop control.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Check if a key event is the interrupt (Ctrl-C).
///
/// Raw mode turns Ctrl-C into a key event instead of SIGINT, so this is the
/// only way the loop learns it should stop.
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
