//! The walk mode lifecycle and the running session.
//!
//! [`WalkMode`] is the explicit activation state: it holds at most one
//! [`WalkSession`]. The session owns the area handed over at `init` and
//! gives it back at `end`.

use std::path::{Path, PathBuf};

use quietude_core::GridDims;
use quietude_grid::{Area, AttrTable, Cell};

use crate::collab::{Collaborators, TickOutcome};
use crate::command::WalkCommand;
use crate::config::WalkConfig;
use crate::error::{Phase, WalkError};

// ── WalkSession ────────────────────────────────────────────────────

/// State of one walk mode activation.
#[derive(Debug)]
pub struct WalkSession {
    area: Area,
    config: WalkConfig,
    ticks: u64,
}

impl WalkSession {
    /// The area being walked.
    pub fn area(&self) -> &Area {
        &self.area
    }

    /// Mutable access to the area between ticks.
    pub fn area_mut(&mut self) -> &mut Area {
        &mut self.area
    }

    /// The configuration the session was started with.
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// An empty attribute table of the configured capacity.
    pub fn new_table(&self) -> AttrTable {
        AttrTable::with_capacity(self.config.table_capacity)
    }

    /// Run one tick: output, then input, then logic.
    ///
    /// The tick counter advances only when all three phases succeed.
    fn tick(&mut self, collab: &mut Collaborators<'_>) -> Result<TickOutcome, WalkError> {
        collab
            .renderer
            .render(&self.area, self.ticks)
            .map_err(|source| WalkError::Phase {
                phase: Phase::Output,
                source,
            })?;

        let code = collab.input.poll().map_err(|source| WalkError::Phase {
            phase: Phase::Input,
            source,
        })?;
        let command = WalkCommand::from_code(code)?;

        let outcome = collab
            .logic
            .update(&mut self.area, command)
            .map_err(|source| WalkError::Phase {
                phase: Phase::Logic,
                source,
            })?;

        self.ticks += 1;
        tracing::trace!(tick = self.ticks, %command, ?outcome, "tick complete");
        Ok(outcome)
    }

    /// Write the area to `path`, creating missing parent directories. A
    /// refused save leaves any previous file at `path` untouched.
    ///
    /// # Errors
    ///
    /// [`WalkError::DimsMismatch`] if the area no longer has the configured
    /// size, otherwise any [`StoreError`](quietude_store::StoreError), such
    /// as an incomplete layer.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), WalkError> {
        check_dims(&self.config, self.area.dims())?;
        quietude_store::save_area(path, &self.area)?;
        Ok(())
    }

    /// Write the area to the configured `save_path`, returning that path.
    ///
    /// # Errors
    ///
    /// [`WalkError::NoSavePath`] if none is configured, otherwise as
    /// [`save`](Self::save).
    pub fn save_configured(&self) -> Result<PathBuf, WalkError> {
        let path = self.config.save_path.clone().ok_or(WalkError::NoSavePath)?;
        self.save(&path)?;
        Ok(path)
    }
}

fn check_dims(config: &WalkConfig, found: GridDims) -> Result<(), WalkError> {
    let expected = config.dims()?;
    if expected != found {
        return Err(WalkError::DimsMismatch { expected, found });
    }
    Ok(())
}

// ── WalkMode ───────────────────────────────────────────────────────

/// The walk mode: inactive, or running exactly one session.
///
/// # Examples
///
/// ```
/// use quietude_core::GridDims;
/// use quietude_grid::{Area, Cell};
/// use quietude_walk::{WalkConfig, WalkMode};
///
/// let config = WalkConfig { size_y: 2, size_x: 2, ..WalkConfig::default() };
/// let area = Area::with_defaults(GridDims::new(2, 2).unwrap()).unwrap();
///
/// let mut mode = WalkMode::new(config).unwrap();
/// mode.init(Cell::area(area)).unwrap();
/// assert!(mode.is_active());
///
/// let area = mode.end().unwrap();
/// assert!(area.is_complete());
/// assert!(!mode.is_active());
/// ```
#[derive(Debug)]
pub struct WalkMode {
    config: WalkConfig,
    session: Option<WalkSession>,
}

impl WalkMode {
    /// An inactive mode that will start sessions with `config`.
    ///
    /// # Errors
    ///
    /// [`WalkError::Config`] if the configuration is invalid.
    pub fn new(config: WalkConfig) -> Result<Self, WalkError> {
        config.validate()?;
        Ok(Self {
            config,
            session: None,
        })
    }

    /// Load an area from `path` and start a session on it.
    pub fn init_from_file(path: impl AsRef<Path>, config: WalkConfig) -> Result<Self, WalkError> {
        let mut mode = Self::new(config)?;
        let area = quietude_store::load_area(path)?;
        mode.init(Cell::area(area))?;
        Ok(mode)
    }

    /// Start a session on the area held by `cell`, taking ownership.
    ///
    /// The cell is consumed on every path.
    ///
    /// # Errors
    ///
    /// - [`WalkError::AlreadyInitialized`] if a session is running; it is
    ///   left untouched.
    /// - [`WalkError::HandoffMismatch`] if the cell holds no area.
    /// - [`WalkError::DimsMismatch`] if the area is not the configured size.
    pub fn init(&mut self, cell: Cell) -> Result<(), WalkError> {
        if self.session.is_some() {
            tracing::warn!("walk mode init refused: already initialized");
            return Err(WalkError::AlreadyInitialized);
        }
        let area = cell.into_area().map_err(|cell| WalkError::HandoffMismatch {
            found: cell.type_tag(),
        })?;
        check_dims(&self.config, area.dims())?;

        tracing::info!(dims = ?area.dims(), complete = area.is_complete(), "walk mode initialized");
        self.session = Some(WalkSession {
            area,
            config: self.config.clone(),
            ticks: 0,
        });
        Ok(())
    }

    /// Advance the running session by one tick.
    ///
    /// # Errors
    ///
    /// [`WalkError::NotInitialized`] without a session, otherwise a phase
    /// failure or [`WalkError::InvalidCommand`].
    pub fn tick(&mut self, collab: &mut Collaborators<'_>) -> Result<TickOutcome, WalkError> {
        let session = self.session.as_mut().ok_or(WalkError::NotInitialized)?;
        let outcome = session.tick(collab)?;
        if outcome == TickOutcome::Exit {
            tracing::info!(ticks = session.ticks, "walk mode exit requested");
        }
        Ok(outcome)
    }

    /// Stop the session and hand the area back.
    pub fn end(&mut self) -> Result<Area, WalkError> {
        let session = self.session.take().ok_or(WalkError::NotInitialized)?;
        tracing::info!(ticks = session.ticks, "walk mode ended");
        Ok(session.area)
    }

    /// Whether a session is running.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The running session.
    pub fn session(&self) -> Option<&WalkSession> {
        self.session.as_ref()
    }

    /// Mutable access to the running session.
    pub fn session_mut(&mut self) -> Option<&mut WalkSession> {
        self.session.as_mut()
    }

    /// The configuration new sessions start with.
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }
}
