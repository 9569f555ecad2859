//! ECS Components - Droid and factory entities carry these

use bevy::prelude::*;

use crate::constants::*;

// ============================================================================
// CORE COMPONENTS
// ============================================================================

/// Player that owns a droid or structure.
#[derive(Component, Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct PlayerId(pub u8);

/// Position in world coordinates.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Droid type tag. Only `Command` droids show up in the commander panel.
#[derive(Component, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DroidType {
    Weapon,
    Sensor,
    Construct,
    Repair,
    Cyborg,
    Transporter,
    Command,
}

impl DroidType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Weapon => "Weapon",
            Self::Sensor => "Sensor",
            Self::Construct => "Construct",
            Self::Repair => "Repair",
            Self::Cyborg => "Cyborg",
            Self::Transporter => "Transporter",
            Self::Command => "Commander",
        }
    }
}

/// Display name, used as the object row tooltip.
#[derive(Component, Clone, Debug)]
pub struct DroidName(pub String);

/// Marks an object as dead. It stays in the player lists until cleanup.
#[derive(Component)]
pub struct Dead;

/// Marks a droid as part of the player's current selection.
#[derive(Component)]
pub struct Selected;

// ============================================================================
// COMMANDER DATA
// ============================================================================

/// Accumulated experience points.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Experience(pub u32);

impl Experience {
    /// Rank 0..=8, the number of thresholds reached.
    pub fn level(&self) -> u32 {
        RANK_THRESHOLDS.iter().filter(|&&t| self.0 >= t).count() as u32
    }
}

/// Droids following a commander.
#[derive(Component, Clone, Debug, Default)]
pub struct CommandGroup {
    pub members: Vec<Entity>,
}

impl CommandGroup {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Maximum command group size for a commander of the given level.
pub fn max_group_size(level: u32) -> u32 {
    BASE_GROUP_CAPACITY + level * GROUP_CAPACITY_PER_LEVEL
}

// ============================================================================
// FACTORIES
// ============================================================================

/// Kind of production structure. Each kind has its own numbering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FactoryKind {
    Factory,
    Cyborg,
    Vtol,
}

impl FactoryKind {
    pub const ALL: [FactoryKind; 3] = [Self::Factory, Self::Cyborg, Self::Vtol];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Factory => "Factory",
            Self::Cyborg => "Cyborg Factory",
            Self::Vtol => "VTOL Factory",
        }
    }
}

/// Production structure. `number` is 0-based within its kind.
#[derive(Component, Clone, Copy, Debug)]
pub struct Factory {
    pub kind: FactoryKind,
    pub number: u8,
}

/// Key into `StructureCatalog`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct StatsId(pub u32);

/// Structure type record the entity was built from.
#[derive(Component, Clone, Copy, Debug)]
pub struct StructureType(pub StatsId);

/// Commander a factory delivers its production to, if any.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct FactoryCommander(pub Option<Entity>);

// ============================================================================
// CAMERA
// ============================================================================

/// Camera moved by "select and jump".
#[derive(Component)]
pub struct MainCamera;
