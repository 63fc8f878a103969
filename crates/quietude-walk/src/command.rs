//! Walk commands and raw-code validation.

use std::fmt;

use crate::error::WalkError;

/// One player command per tick.
///
/// Raw codes form the closed, contiguous range `0..=6` in declaration
/// order. Mapping keys to codes belongs to the input collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WalkCommand {
    /// Let the tick pass.
    Wait,
    /// Step up one row.
    North,
    /// Step down one row.
    South,
    /// Step right one column.
    East,
    /// Step left one column.
    West,
    /// Look at the current tile.
    Inspect,
    /// Leave the walk mode.
    Quit,
}

impl WalkCommand {
    /// Every command, in raw-code order.
    pub const ALL: [WalkCommand; 7] = [
        WalkCommand::Wait,
        WalkCommand::North,
        WalkCommand::South,
        WalkCommand::East,
        WalkCommand::West,
        WalkCommand::Inspect,
        WalkCommand::Quit,
    ];

    /// Validate a raw code.
    ///
    /// # Errors
    ///
    /// [`WalkError::InvalidCommand`] outside `0..=6`.
    pub fn from_code(code: i32) -> Result<Self, WalkError> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(WalkError::InvalidCommand { code })
    }

    /// The raw code of this command.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Row and column offset of a movement command, `None` otherwise.
    pub fn offset(self) -> Option<(i32, i32)> {
        match self {
            Self::North => Some((-1, 0)),
            Self::South => Some((1, 0)),
            Self::East => Some((0, 1)),
            Self::West => Some((0, -1)),
            Self::Wait | Self::Inspect | Self::Quit => None,
        }
    }
}

impl fmt::Display for WalkCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wait => "wait",
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Inspect => "inspect",
            Self::Quit => "quit",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_contiguous() {
        for (i, cmd) in WalkCommand::ALL.into_iter().enumerate() {
            assert_eq!(cmd.code(), i as i32);
            assert_eq!(WalkCommand::from_code(cmd.code()).unwrap(), cmd);
        }
    }

    #[test]
    fn out_of_range_codes_rejected() {
        for code in [-1, 7, i32::MIN, i32::MAX] {
            assert!(matches!(
                WalkCommand::from_code(code),
                Err(WalkError::InvalidCommand { code: c }) if c == code
            ));
        }
    }

    #[test]
    fn only_moves_have_offsets() {
        assert_eq!(WalkCommand::North.offset(), Some((-1, 0)));
        assert_eq!(WalkCommand::Inspect.offset(), None);
    }
}
