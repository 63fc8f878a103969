//! Tick collaborators: the renderer, the input source and the game logic.
//!
//! The walk mode owns the area; collaborators see it only for the duration
//! of their phase.

use quietude_grid::Area;

use crate::command::WalkCommand;
use crate::error::PhaseError;

/// What the logic phase decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep ticking.
    Continue,
    /// Leave the walk mode; the driver should call `end`.
    Exit,
}

/// Output phase: present the area.
pub trait Renderer {
    /// Draw `area` as it stands at the start of tick `tick`.
    fn render(&mut self, area: &Area, tick: u64) -> Result<(), PhaseError>;
}

/// Input phase: fetch the next raw command code.
pub trait InputSource {
    /// The next raw command code. Codes are validated by the walk mode.
    fn poll(&mut self) -> Result<i32, PhaseError>;
}

/// Logic phase: apply one validated command.
pub trait Logic {
    /// Update `area` for `command`.
    fn update(&mut self, area: &mut Area, command: WalkCommand) -> Result<TickOutcome, PhaseError>;
}

/// The three collaborators of one tick, borrowed for its duration.
pub struct Collaborators<'a> {
    /// Output phase.
    pub renderer: &'a mut dyn Renderer,
    /// Input phase.
    pub input: &'a mut dyn InputSource,
    /// Logic phase.
    pub logic: &'a mut dyn Logic,
}

impl<'a> Collaborators<'a> {
    /// Bundle the three collaborators.
    pub fn new(
        renderer: &'a mut dyn Renderer,
        input: &'a mut dyn InputSource,
        logic: &'a mut dyn Logic,
    ) -> Self {
        Self {
            renderer,
            input,
            logic,
        }
    }
}
