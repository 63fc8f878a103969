//! Attribute keys and the category enumerations that drive defaults.

use std::fmt;

use crate::error::CoreError;
use crate::tag::TypeTag;

/// Identifies one attribute of an in-world object.
///
/// Each key declares the [`TypeTag`] its value must carry. Discriminants are
/// written to disk and must stay stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum AttrKey {
    /// Display name.
    Name = 1,
    /// Flavor text shown on inspection.
    Description = 2,
    /// Glyph drawn for the tile.
    Glyph = 3,
    /// Whether the object can be pushed or walk.
    CanMove = 4,
    /// Whether the object acts on its own each tick.
    HasAgency = 5,
    /// Object category.
    Category = 6,
    /// Hit points.
    Health = 7,
    /// Visibility reduction factor in `[0, 1]`.
    Opacity = 8,
}

impl AttrKey {
    /// Every key, in discriminant order.
    pub const ALL: [AttrKey; 8] = [
        AttrKey::Name,
        AttrKey::Description,
        AttrKey::Glyph,
        AttrKey::CanMove,
        AttrKey::HasAgency,
        AttrKey::Category,
        AttrKey::Health,
        AttrKey::Opacity,
    ];

    /// Number of keys.
    pub const COUNT: usize = Self::ALL.len();

    /// The type tag a value stored under this key must carry.
    pub const fn declared_type(self) -> TypeTag {
        match self {
            Self::Name | Self::Description | Self::Glyph => TypeTag::Text,
            Self::CanMove | Self::HasAgency => TypeTag::Bool,
            Self::Category => TypeTag::Category,
            Self::Health => TypeTag::Int,
            Self::Opacity => TypeTag::Float,
        }
    }

    /// The stable wire discriminant.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for AttrKey {
    type Error = CoreError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(Self::Name),
            2 => Ok(Self::Description),
            3 => Ok(Self::Glyph),
            4 => Ok(Self::CanMove),
            5 => Ok(Self::HasAgency),
            6 => Ok(Self::Category),
            7 => Ok(Self::Health),
            8 => Ok(Self::Opacity),
            tag => Err(CoreError::UnknownKey { tag }),
        }
    }
}

impl fmt::Display for AttrKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Glyph => "glyph",
            Self::CanMove => "can-move",
            Self::HasAgency => "has-agency",
            Self::Category => "category",
            Self::Health => "health",
            Self::Opacity => "opacity",
        };
        f.write_str(name)
    }
}

/// Which plane of an area a layer represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LayerCategory {
    /// Terrain: immovable ground tiles.
    Earth = 1,
    /// Movable entities standing on the terrain.
    Floater = 2,
}

impl LayerCategory {
    /// Both categories, in on-disk order.
    pub const ALL: [LayerCategory; 2] = [LayerCategory::Earth, LayerCategory::Floater];
}

impl fmt::Display for LayerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Earth => f.write_str("earth"),
            Self::Floater => f.write_str("floater"),
        }
    }
}

/// Kind of object occupying a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ObjectCategory {
    /// Nothing is here.
    Void = 1,
    /// Grass terrain.
    Grass = 2,
    /// A tree.
    Tree = 3,
    /// A boulder or rock face.
    Rock = 4,
    /// Water.
    Water = 5,
    /// The player character.
    Player = 6,
    /// A non-hostile character.
    NpcFriendly = 7,
    /// A pickable item.
    Item = 8,
}

impl ObjectCategory {
    /// Every category, in discriminant order.
    pub const ALL: [ObjectCategory; 8] = [
        ObjectCategory::Void,
        ObjectCategory::Grass,
        ObjectCategory::Tree,
        ObjectCategory::Rock,
        ObjectCategory::Water,
        ObjectCategory::Player,
        ObjectCategory::NpcFriendly,
        ObjectCategory::Item,
    ];

    /// The stable wire discriminant.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ObjectCategory {
    type Error = CoreError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(Self::Void),
            2 => Ok(Self::Grass),
            3 => Ok(Self::Tree),
            4 => Ok(Self::Rock),
            5 => Ok(Self::Water),
            6 => Ok(Self::Player),
            7 => Ok(Self::NpcFriendly),
            8 => Ok(Self::Item),
            tag => Err(CoreError::UnknownCategory { tag }),
        }
    }
}
