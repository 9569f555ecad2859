//! Constants - Tuning parameters for the commander panel

/// Factory numbers shown per factory kind. Numbers at or above this are not labelled.
pub const MAX_ASSIGNED_FACTORIES: usize = 5;

/// Experience needed for each rank above rank 0. A droid's level is the number reached.
pub const RANK_THRESHOLDS: [u32; 8] = [4, 8, 16, 32, 64, 128, 256, 512];

/// Command group size of a level 0 commander.
pub const BASE_GROUP_CAPACITY: u32 = 6;

/// Extra group slots per commander level.
pub const GROUP_CAPACITY_PER_LEVEL: u32 = 2;

/// Player whose units the panel shows when no settings file exists.
pub const DEFAULT_PLAYER: u8 = 0;

/// Width of the commander side panel in logical pixels.
pub const PANEL_WIDTH: f32 = 300.0;
