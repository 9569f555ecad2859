//! ECS Messages - Requests into the object model and signals out of the panel.

use bevy::prelude::*;

use crate::components::*;

// ============================================================================
// OBJECT MODEL (game -> ECS)
// ============================================================================

/// Create a droid and append it to its player's list.
#[derive(Message, Clone, Debug)]
pub struct SpawnDroidMsg {
    pub player: PlayerId,
    pub droid_type: DroidType,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub experience: u32,
    /// Commander whose group the droid joins, if any.
    pub commander: Option<Entity>,
}

/// Create a factory and append it to its player's list.
#[derive(Message, Clone, Debug)]
pub struct SpawnFactoryMsg {
    pub player: PlayerId,
    pub stats: StatsId,
    pub kind: FactoryKind,
    pub number: u8,
}

/// Mark a droid or structure dead.
#[derive(Message, Clone, Copy, Debug)]
pub struct KillMsg {
    pub entity: Entity,
}

/// Point a factory's production at a commander, or clear it with `None`.
#[derive(Message, Clone, Copy, Debug)]
pub struct AssignFactoryMsg {
    pub factory: Entity,
    pub commander: Option<Entity>,
}

// ============================================================================
// PANEL (UI <-> controller)
// ============================================================================

/// Ask the panel to rebuild and either close or show orders.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct RefreshCommanderPanel;

/// Open the panel if it is closed, close it otherwise.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct ToggleCommanderPanel;

/// Which half of a commander entry was clicked.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RowKind {
    Object,
    Stats,
}

/// Click on a panel row. `index` is a position in the commander list.
#[derive(Message, Clone, Copy, Debug)]
pub struct PanelClick {
    pub index: usize,
    pub row: RowKind,
}

/// Fire-and-forget instruction to the display layer.
#[derive(Message, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PanelSignal {
    /// Tear the panel down.
    Close,
    /// Show the order form for the given commander.
    ShowOrders(Option<Entity>),
}
