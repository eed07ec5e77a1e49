//! Commands accepted by the game core.
//!
//! Every external input maps to one `Command`. The presentation layer
//! translates clicks and key presses into commands and identifies slots by
//! `SlotPos`, never by reference into the grid.

use serde::{Deserialize, Serialize};

use crate::grid::SlotPos;
use crate::rules::Direction;

/// A player command.
///
/// ```
/// use hilo_grid::core::Command;
/// use hilo_grid::grid::SlotPos;
/// use hilo_grid::rules::Direction;
///
/// let select = Command::SelectSlot(SlotPos::new(1, 2));
/// let predict = Command::Predict(Direction::Higher);
/// assert_ne!(select.kind(), predict.kind());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Select a slot, switch the selection, or deselect it if already selected.
    SelectSlot(SlotPos),
    /// Clear the current selection.
    Deselect,
    /// Draw the next card and compare it against the selected slot.
    Predict(Direction),
    Pause,
    Resume,
    /// Pause when running, resume when paused.
    TogglePause,
    /// Throw away the current game and deal a fresh one.
    Restart,
}

impl Command {
    /// The command's kind, without its arguments.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        match self {
            Command::SelectSlot(_) => CommandKind::SelectSlot,
            Command::Deselect => CommandKind::Deselect,
            Command::Predict(_) => CommandKind::Predict,
            Command::Pause => CommandKind::Pause,
            Command::Resume => CommandKind::Resume,
            Command::TogglePause => CommandKind::TogglePause,
            Command::Restart => CommandKind::Restart,
        }
    }
}

/// Argument-free command discriminant, used in error reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    SelectSlot,
    Deselect,
    Predict,
    Pause,
    Resume,
    TogglePause,
    Restart,
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CommandKind::SelectSlot => "select",
            CommandKind::Deselect => "deselect",
            CommandKind::Predict => "predict",
            CommandKind::Pause => "pause",
            CommandKind::Resume => "resume",
            CommandKind::TogglePause => "toggle-pause",
            CommandKind::Restart => "restart",
        };
        f.write_str(name)
    }
}

/// An accepted command with ordering metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The command that was applied.
    pub command: Command,

    /// Predictions resolved before this command.
    pub turn: u32,

    /// Index of this command since the last deal.
    pub sequence: u32,
}

impl CommandRecord {
    /// Create a new command record.
    #[must_use]
    pub fn new(command: Command, turn: u32, sequence: u32) -> Self {
        Self {
            command,
            turn,
            sequence,
        }
    }
}
