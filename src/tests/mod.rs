//! Test Framework - headless Bevy apps driving the panel systems frame by frame.
//!
//! Each file covers one area. Helpers here spawn objects through the same
//! messages the game uses, then step the app with `app.update()`.

mod lifecycle;

use bevy::prelude::*;

use crate::commander::PanelRow;
use crate::components::*;
use crate::messages::*;
use crate::resources::*;

pub const P0: PlayerId = PlayerId(0);

// ============================================================================
// APP
// ============================================================================

/// App with panel systems only: no window, no egui, no input plugin.
pub fn test_app() -> App {
    let mut app = App::new();
    crate::build_app(&mut app);
    app.update();
    app
}

pub fn send<M: Message>(app: &mut App, msg: M) {
    app.world_mut().write_message(msg);
}

/// Send a message and run one frame.
pub fn step<M: Message>(app: &mut App, msg: M) {
    send(app, msg);
    app.update();
}

// ============================================================================
// SPAWNING
// ============================================================================

pub fn spawn_droid_full(
    app: &mut App,
    player: PlayerId,
    droid_type: DroidType,
    name: &str,
    experience: u32,
    commander: Option<Entity>,
) -> Entity {
    step(app, SpawnDroidMsg {
        player,
        droid_type,
        name: name.to_string(),
        x: 100.0,
        y: -50.0,
        experience,
        commander,
    });
    *app.world().resource::<PlayerLists>().droids_of(player).last().expect("droid spawned")
}

pub fn spawn_droid(app: &mut App, droid_type: DroidType, name: &str) -> Entity {
    spawn_droid_full(app, P0, droid_type, name, 0, None)
}

pub fn spawn_factory(app: &mut App, player: PlayerId, kind: FactoryKind, number: u8, stats: StatsId) -> Entity {
    step(app, SpawnFactoryMsg { player, stats, kind, number });
    *app.world().resource::<PlayerLists>().factories_of(player).last().expect("factory spawned")
}

/// A(commander) B(trooper) C(commander, killed) D(commander), in that order.
pub fn abcd(app: &mut App) -> [Entity; 4] {
    let a = spawn_droid(app, DroidType::Command, "A");
    let b = spawn_droid(app, DroidType::Weapon, "B");
    let c = spawn_droid(app, DroidType::Command, "C");
    let d = spawn_droid(app, DroidType::Command, "D");
    step(app, KillMsg { entity: c });
    [a, b, c, d]
}

// ============================================================================
// INSPECTION
// ============================================================================

pub fn toggle(app: &mut App) {
    step(app, ToggleCommanderPanel);
}

pub fn panel_open(app: &App) -> bool {
    app.world().resource::<UiState>().commander_panel_open
}

pub fn commanders(app: &App) -> Vec<Entity> {
    app.world().resource::<CommanderPanel>().controller.commanders().to_vec()
}

pub fn highlighted(app: &App) -> Option<Entity> {
    app.world().resource::<CommanderPanel>().session.highlighted()
}

pub fn order_target(app: &App) -> Option<Entity> {
    app.world().resource::<OrderForm>().target
}

pub fn rows(app: &App) -> Vec<PanelRow> {
    app.world().resource::<CommanderPanelRows>().0.clone()
}

pub fn is_selected(app: &App, entity: Entity) -> bool {
    app.world().get::<Selected>(entity).is_some()
}
