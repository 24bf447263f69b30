//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use archmap_core::{NodeId, SectionId};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Poll timeout with no input; redraws only
    Tick,

    /// Terminal was resized
    Resize { width: u16, height: u16 },

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Diagram Interaction
    // ─────────────────────────────────────────────────────────
    /// A node was clicked (toggles selection)
    SelectNode(NodeId),
    /// A section header was clicked
    ToggleSection(SectionId),
    /// Clear the active node
    ClearSelection,
    /// Expand every section
    ExpandAll,

    // ─────────────────────────────────────────────────────────
    // Keyboard Focus
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next visible node
    FocusNext,
    /// Move focus to the previous visible node
    FocusPrev,
    /// Move focus to the first visible node
    FocusFirst,
    /// Move focus to the last visible node
    FocusLast,
    /// Select the focused node as if it had been clicked
    ActivateFocused,

    /// Turn terminal mouse reporting on or off
    ToggleMouseCapture,
}
