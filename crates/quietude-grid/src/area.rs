//! Areas: one map screen, an earth layer under a floater layer.

use quietude_core::{CoreError, GridDims, LayerCategory};

use crate::layer::GridLayer;

/// A pair of same-sized layers: terrain and the entities standing on it.
///
/// Both layers exist for the whole life of the area. Dropping it tears down
/// the floater layer first, then the earth layer.
#[derive(Debug, PartialEq)]
pub struct Area {
    // Field order is drop order.
    layer_floater: GridLayer,
    layer_earth: GridLayer,
}

impl Area {
    /// Combine two layers into an area, taking ownership of both.
    ///
    /// # Errors
    ///
    /// - [`CoreError::CategoryMismatch`] if either layer is in the wrong
    ///   plane.
    /// - [`CoreError::DimensionMismatch`] if the dimensions differ.
    pub fn new(earth: GridLayer, floater: GridLayer) -> Result<Self, CoreError> {
        if earth.category() != LayerCategory::Earth {
            return Err(CoreError::CategoryMismatch {
                expected: LayerCategory::Earth,
                found: earth.category(),
            });
        }
        if floater.category() != LayerCategory::Floater {
            return Err(CoreError::CategoryMismatch {
                expected: LayerCategory::Floater,
                found: floater.category(),
            });
        }
        if earth.dims() != floater.dims() {
            return Err(CoreError::DimensionMismatch {
                earth: earth.dims(),
                floater: floater.dims(),
            });
        }
        Ok(Self {
            layer_floater: floater,
            layer_earth: earth,
        })
    }

    /// An area whose layers are completely filled with defaults.
    ///
    /// # Errors
    ///
    /// Propagates layer fill failures.
    pub fn with_defaults(dims: GridDims) -> Result<Self, CoreError> {
        let mut earth = GridLayer::new(dims, LayerCategory::Earth);
        earth.fill_defaults()?;
        let mut floater = GridLayer::new(dims, LayerCategory::Floater);
        floater.fill_defaults()?;
        Self::new(earth, floater)
    }

    /// The terrain layer.
    pub fn earth(&self) -> &GridLayer {
        &self.layer_earth
    }

    /// The entity layer.
    pub fn floater(&self) -> &GridLayer {
        &self.layer_floater
    }

    /// Mutable terrain layer.
    pub fn earth_mut(&mut self) -> &mut GridLayer {
        &mut self.layer_earth
    }

    /// Mutable entity layer.
    pub fn floater_mut(&mut self) -> &mut GridLayer {
        &mut self.layer_floater
    }

    /// The layer for `category`.
    pub fn layer(&self, category: LayerCategory) -> &GridLayer {
        match category {
            LayerCategory::Earth => &self.layer_earth,
            LayerCategory::Floater => &self.layer_floater,
        }
    }

    /// Shared dimensions of both layers.
    pub fn dims(&self) -> GridDims {
        self.layer_earth.dims()
    }

    /// Whether both layers are complete.
    pub fn is_complete(&self) -> bool {
        self.layer_earth.is_complete() && self.layer_floater.is_complete()
    }

    /// Split into `(earth, floater)`.
    pub fn into_layers(self) -> (GridLayer, GridLayer) {
        (self.layer_earth, self.layer_floater)
    }
}
