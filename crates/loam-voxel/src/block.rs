//! Block type registry: maps compact [`BlockId`] values to [`BlockDef`] metadata.
//!
//! The registry is built once during startup. Air is always ID 0 so that
//! zero-initialized chunk memory represents empty space.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Compact identifier stored inside every voxel cell (2 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub u16);

/// The air block, ID 0. Every freshly allocated buffer is filled with it.
pub const AIR: BlockId = BlockId(0);

impl BlockId {
    /// Returns `true` if this is the air block (ID 0).
    pub fn is_air(self) -> bool {
        self.0 == 0
    }
}

/// Transparency mode for a block type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transparency {
    /// Fully blocks light and visibility.
    Opaque,
    /// Partially transparent (e.g. water, glass).
    SemiTransparent,
    /// Completely transparent (e.g. air).
    FullyTransparent,
}

/// Full descriptor for a block type.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockDef {
    /// Human-readable name (e.g. "stone", "grass", "water").
    pub name: String,
    /// Whether entities collide with this block.
    pub solid: bool,
    /// Transparency mode.
    pub transparency: Transparency,
}

impl BlockDef {
    /// Convenience constructor for an opaque, solid block.
    pub fn solid(name: &str) -> Self {
        Self {
            name: name.to_string(),
            solid: true,
            transparency: Transparency::Opaque,
        }
    }

    /// Convenience constructor for a non-solid, semi-transparent block.
    pub fn fluid(name: &str) -> Self {
        Self {
            name: name.to_string(),
            solid: false,
            transparency: Transparency::SemiTransparent,
        }
    }
}

/// Errors that can occur during block type registration.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A type with the same name has already been registered.
    #[error("duplicate block type name: {0}")]
    DuplicateName(String),
    /// All 65 535 user-defined slots have been consumed.
    #[error("block registry is full (max 65536 types)")]
    RegistryFull,
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Maps [`BlockId`] → [`BlockDef`] with O(1) lookup by index and O(1)
/// reverse lookup by name.
pub struct BlockRegistry {
    /// Dense array where `index == BlockId.0`.
    types: Vec<BlockDef>,
    /// Reverse lookup: name → ID.
    name_to_id: HashMap<String, BlockId>,
}

impl BlockRegistry {
    /// Creates a new registry with Air pre-registered as ID 0.
    pub fn new() -> Self {
        let air = BlockDef {
            name: "air".to_string(),
            solid: false,
            transparency: Transparency::FullyTransparent,
        };

        let mut name_to_id = HashMap::new();
        name_to_id.insert("air".to_string(), AIR);

        Self {
            types: vec![air],
            name_to_id,
        }
    }

    /// Registers a new block type and returns its assigned ID.
    ///
    /// IDs are assigned sequentially starting from 1 (0 is Air).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if a type with the same name
    /// already exists, or [`RegistryError::RegistryFull`] if all 65 536 slots
    /// are consumed.
    pub fn register(&mut self, def: BlockDef) -> Result<BlockId, RegistryError> {
        if self.name_to_id.contains_key(&def.name) {
            return Err(RegistryError::DuplicateName(def.name));
        }
        if self.types.len() > u16::MAX as usize {
            return Err(RegistryError::RegistryFull);
        }

        let id = BlockId(self.types.len() as u16);
        self.name_to_id.insert(def.name.clone(), id);
        self.types.push(def);
        Ok(id)
    }

    /// Returns the definition for a given ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range — this indicates a programming error
    /// since IDs are only produced by the registry itself.
    pub fn get(&self, id: BlockId) -> &BlockDef {
        &self.types[id.0 as usize]
    }

    /// Returns the ID for a named block type, or `None` if not found.
    pub fn lookup_by_name(&self, name: &str) -> Option<BlockId> {
        self.name_to_id.get(name).copied()
    }

    /// Returns the total number of registered types (including Air).
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if only Air is registered.
    pub fn is_empty(&self) -> bool {
        self.types.len() <= 1
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// World block set
// ---------------------------------------------------------------------------

/// The resolved set of block IDs the terrain generator and the decorative
/// feature pass work with.
///
/// Registering through this struct keeps the generator free of name lookups
/// in its inner loops.
#[derive(Clone, Copy, Debug)]
pub struct WorldBlocks {
    /// Deep solid terrain and the below-window uniform fill.
    pub stone: BlockId,
    /// Solid terrain between the stone depth and sea level.
    pub dirt: BlockId,
    /// Surface terrain above sea level.
    pub grass: BlockId,
    /// Ground cover of the flat quadrant.
    pub lawn: BlockId,
    /// Overwrites terrain cells inside the cloud band.
    pub cloud: BlockId,
    /// Below-sea-level open cells.
    pub water: BlockId,
    /// Decorative: reflective dirt variant used in the feature rows.
    pub shiny_dirt: BlockId,
    /// Decorative: thin vertical pole.
    pub pole: BlockId,
    /// Decorative: pole variant placed in water.
    pub water_pole: BlockId,
    /// Decorative: windowed block.
    pub window: BlockId,
    /// Decorative: fully transparent solid.
    pub glass: BlockId,
    /// Decorative: translucent stone variant.
    pub ghost_stone: BlockId,
}

impl WorldBlocks {
    /// Registers the standard world block set and returns the resolved IDs.
    pub fn register(registry: &mut BlockRegistry) -> Result<Self, RegistryError> {
        Ok(Self {
            stone: registry.register(BlockDef::solid("stone"))?,
            dirt: registry.register(BlockDef::solid("dirt"))?,
            grass: registry.register(BlockDef::solid("grass"))?,
            lawn: registry.register(BlockDef::solid("lawn"))?,
            cloud: registry.register(BlockDef {
                name: "cloud".to_string(),
                solid: false,
                transparency: Transparency::SemiTransparent,
            })?,
            water: registry.register(BlockDef::fluid("water"))?,
            shiny_dirt: registry.register(BlockDef::solid("shiny_dirt"))?,
            pole: registry.register(BlockDef::solid("pole"))?,
            water_pole: registry.register(BlockDef::solid("water_pole"))?,
            window: registry.register(BlockDef {
                name: "window".to_string(),
                solid: true,
                transparency: Transparency::SemiTransparent,
            })?,
            glass: registry.register(BlockDef {
                name: "glass".to_string(),
                solid: true,
                transparency: Transparency::FullyTransparent,
            })?,
            ghost_stone: registry.register(BlockDef {
                name: "ghost_stone".to_string(),
                solid: true,
                transparency: Transparency::SemiTransparent,
            })?,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
