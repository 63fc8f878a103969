//! Test utilities and mock collaborators for Quietude development.
//!
//! Provides scripted implementations of the tick collaborators
//! ([`Renderer`], [`InputSource`], [`Logic`]) that share a [`PhaseLog`],
//! plus area and table fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use quietude_grid::Area;
use quietude_walk::{InputSource, Logic, Phase, PhaseError, Renderer, TickOutcome, WalkCommand};

pub use fixtures::{default_area, named_table, two_by_two_area};

/// Shared, ordered record of which phases ran.
#[derive(Clone, Debug, Default)]
pub struct PhaseLog(Rc<RefCell<Vec<Phase>>>);

impl PhaseLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, phase: Phase) {
        self.0.borrow_mut().push(phase);
    }

    /// Snapshot of the phases recorded so far.
    pub fn phases(&self) -> Vec<Phase> {
        self.0.borrow().clone()
    }
}

/// Mock [`Renderer`] that records each call and the tick it was given.
pub struct MockRenderer {
    log: PhaseLog,
    pub ticks_seen: Vec<u64>,
    pub fail_with: Option<String>,
}

impl MockRenderer {
    pub fn new(log: PhaseLog) -> Self {
        Self {
            log,
            ticks_seen: Vec::new(),
            fail_with: None,
        }
    }
}

impl Renderer for MockRenderer {
    fn render(&mut self, _area: &Area, tick: u64) -> Result<(), PhaseError> {
        self.log.push(Phase::Output);
        self.ticks_seen.push(tick);
        match &self.fail_with {
            Some(reason) => Err(PhaseError::new(reason.clone())),
            None => Ok(()),
        }
    }
}

/// Mock [`InputSource`] replaying a fixed script of raw codes.
///
/// Once the script runs out it keeps returning [`WalkCommand::Wait`].
pub struct ScriptedInput {
    log: PhaseLog,
    codes: VecDeque<i32>,
}

impl ScriptedInput {
    pub fn new(log: PhaseLog, codes: impl IntoIterator<Item = i32>) -> Self {
        Self {
            log,
            codes: codes.into_iter().collect(),
        }
    }

    /// Script from validated commands.
    pub fn commands(log: PhaseLog, commands: impl IntoIterator<Item = WalkCommand>) -> Self {
        Self::new(log, commands.into_iter().map(WalkCommand::code))
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<i32, PhaseError> {
        self.log.push(Phase::Input);
        Ok(self
            .codes
            .pop_front()
            .unwrap_or_else(|| WalkCommand::Wait.code()))
    }
}

/// Mock [`Logic`] that records commands and exits on [`WalkCommand::Quit`].
pub struct RecordingLogic {
    log: PhaseLog,
    pub commands: Vec<WalkCommand>,
}

impl RecordingLogic {
    pub fn new(log: PhaseLog) -> Self {
        Self {
            log,
            commands: Vec::new(),
        }
    }
}

impl Logic for RecordingLogic {
    fn update(&mut self, _area: &mut Area, command: WalkCommand) -> Result<TickOutcome, PhaseError> {
        self.log.push(Phase::Logic);
        self.commands.push(command);
        Ok(match command {
            WalkCommand::Quit => TickOutcome::Exit,
            _ => TickOutcome::Continue,
        })
    }
}

/// Mock [`Logic`] that fails deterministically after N successful calls.
pub struct FailingLogic {
    succeed_count: usize,
    calls: usize,
}

impl FailingLogic {
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            calls: 0,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Logic for FailingLogic {
    fn update(&mut self, _area: &mut Area, _command: WalkCommand) -> Result<TickOutcome, PhaseError> {
        self.calls += 1;
        if self.calls > self.succeed_count {
            return Err(PhaseError::new(format!(
                "failing logic: call {} exceeds limit {}",
                self.calls, self.succeed_count
            )));
        }
        Ok(TickOutcome::Continue)
    }
}
