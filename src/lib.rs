//! Commander panel - lists a player's commanders, tracks the highlighted one,
//! and shows which factories produce for each.

// ============================================================================
// MODULES
// ============================================================================

pub mod commander;
pub mod components;
pub mod constants;
pub mod demo;
pub mod messages;
pub mod resources;
pub mod settings;
pub mod systems;
pub mod ui;

#[cfg(test)]
mod tests;

// ============================================================================
// IMPORTS
// ============================================================================

use bevy::prelude::*;

use messages::*;
use resources::*;
use systems::*;

// ============================================================================
// BEVY APP
// ============================================================================

/// Frame phases. Chained sets get automatic apply_deferred between them.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelStep {
    Lifecycle, // Spawn, kill, assign
    Input,     // Toggle + row clicks
    Refresh,   // Explicit refresh requests
    Signals,   // Apply display-layer signals
    Update,    // Per-frame list + rows
    Cleanup,   // Despawn dead objects
}

/// Wire messages, resources and panel systems. Rendering lives in `ui::register_ui`.
pub fn build_app(app: &mut App) {
    app.add_message::<SpawnDroidMsg>()
       .add_message::<SpawnFactoryMsg>()
       .add_message::<KillMsg>()
       .add_message::<AssignFactoryMsg>()
       .add_message::<RefreshCommanderPanel>()
       .add_message::<ToggleCommanderPanel>()
       .add_message::<PanelClick>()
       .add_message::<PanelSignal>()
       .init_resource::<settings::UserSettings>()
       .init_resource::<SelectedPlayer>()
       .init_resource::<PlayerLists>()
       .init_resource::<StructureCatalog>()
       .init_resource::<UiState>()
       .init_resource::<CommanderPanel>()
       .init_resource::<CommanderPanelRows>()
       .init_resource::<OrderForm>()
       .configure_sets(Update, (
           PanelStep::Lifecycle,
           PanelStep::Input,
           PanelStep::Refresh,
           PanelStep::Signals,
           PanelStep::Update,
           PanelStep::Cleanup,
       ).chain())
       .add_systems(Update, apply_settings_system
           .run_if(resource_changed::<settings::UserSettings>)
           .before(PanelStep::Lifecycle))
       .add_systems(Update, (
           spawn_droid_system,
           spawn_factory_system,
           kill_system,
           assign_factory_system,
       ).chain().in_set(PanelStep::Lifecycle))
       .add_systems(Update, (
           commander_panel_toggle_system,
           commander_panel_click_system,
       ).chain().in_set(PanelStep::Input))
       .add_systems(Update, commander_panel_refresh_system.in_set(PanelStep::Refresh))
       .add_systems(Update, apply_panel_signals.in_set(PanelStep::Signals))
       .add_systems(Update, commander_panel_update_system.in_set(PanelStep::Update))
       .add_systems(Update, death_cleanup_system.in_set(PanelStep::Cleanup));
}

/// Version label from build.rs.
pub fn build_label() -> String {
    let timestamp = option_env!("BUILD_TIMESTAMP").unwrap_or("unknown");
    let commit = option_env!("BUILD_COMMIT").unwrap_or("unknown");
    format!("{} ({})", timestamp, commit)
}
