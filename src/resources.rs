//! ECS Resources - Shared state accessible by all systems

use bevy::prelude::*;
use hashbrown::HashMap;

use crate::commander::{CommanderController, PanelRow, PanelSession};
use crate::components::*;

/// Player whose commanders the panel lists.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct SelectedPlayer(pub PlayerId);

/// Per-player object lists in creation order. New objects are appended.
/// Dead objects stay listed until `death_cleanup_system` removes them.
#[derive(Resource, Default, Debug)]
pub struct PlayerLists {
    pub droids: HashMap<PlayerId, Vec<Entity>>,
    pub factories: HashMap<PlayerId, Vec<Entity>>,
}

impl PlayerLists {
    pub fn droids_of(&self, player: PlayerId) -> &[Entity] {
        self.droids.get(&player).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn factories_of(&self, player: PlayerId) -> &[Entity] {
        self.factories.get(&player).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn push_droid(&mut self, player: PlayerId, entity: Entity) {
        self.droids.entry(player).or_default().push(entity);
    }

    pub fn push_factory(&mut self, player: PlayerId, entity: Entity) {
        self.factories.entry(player).or_default().push(entity);
    }

    /// Drop an entity from every list it appears in.
    pub fn remove(&mut self, entity: Entity) {
        for list in self.droids.values_mut().chain(self.factories.values_mut()) {
            list.retain(|&e| e != entity);
        }
    }
}

/// Structure type record.
#[derive(Clone, Debug)]
pub struct StructureStats {
    pub name: String,
    pub kind: FactoryKind,
}

/// All known structure type records, keyed by `StatsId`.
#[derive(Resource, Default, Debug)]
pub struct StructureCatalog(pub HashMap<StatsId, StructureStats>);

impl StructureCatalog {
    pub fn get(&self, id: StatsId) -> Option<&StructureStats> {
        self.0.get(&id)
    }

    pub fn insert(&mut self, id: StatsId, name: impl Into<String>, kind: FactoryKind) {
        self.0.insert(id, StructureStats { name: name.into(), kind });
    }
}

/// Panel visibility flags.
#[derive(Resource, Default, Debug)]
pub struct UiState {
    pub commander_panel_open: bool,
}

/// Commander panel controller plus its session. Lives as long as the app;
/// the session is reset whenever the panel closes.
#[derive(Resource, Default, Debug)]
pub struct CommanderPanel {
    pub controller: CommanderController,
    pub session: PanelSession,
}

/// Rows rebuilt every frame while the panel is open.
#[derive(Resource, Default, Debug)]
pub struct CommanderPanelRows(pub Vec<PanelRow>);

/// Target of the order form, set by `PanelSignal::ShowOrders`.
#[derive(Resource, Default, Debug)]
pub struct OrderForm {
    pub open: bool,
    pub target: Option<Entity>,
}
