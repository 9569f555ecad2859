//! Demo world - a small army for driving the panel by hand.
//!
//! Keys: C toggles the panel, N spawns a commander, K kills a random commander,
//! F points a random factory at the highlighted commander.

use bevy::prelude::*;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::components::*;
use crate::messages::*;
use crate::resources::*;
use crate::settings::UserSettings;
use crate::systems::{spawn_droid, spawn_factory};

const DEMO_STATS: [(u32, &str, FactoryKind); 3] = [
    (1, "Tank Factory", FactoryKind::Factory),
    (2, "Cyborg Factory", FactoryKind::Cyborg),
    (3, "VTOL Factory", FactoryKind::Vtol),
];

pub fn register_demo(app: &mut App) {
    app.add_systems(Startup, setup_demo_world);
    app.add_systems(Update, (demo_keys_system, attach_sprites_system));
}

fn droid_msg(player: PlayerId, droid_type: DroidType, name: &str, x: f32, y: f32, experience: u32) -> SpawnDroidMsg {
    SpawnDroidMsg { player, droid_type, name: name.to_string(), x, y, experience, commander: None }
}

fn setup_demo_world(
    mut commands: Commands,
    mut lists: ResMut<PlayerLists>,
    mut catalog: ResMut<StructureCatalog>,
    mut groups: Query<&mut CommandGroup>,
    settings: Res<UserSettings>,
) {
    commands.spawn((Camera2d, MainCamera));

    for (id, name, kind) in DEMO_STATS {
        catalog.insert(StatsId(id), name, kind);
    }

    // SelectedPlayer is only synced from settings in Update.
    let p = PlayerId(settings.player);
    let mut factories = Vec::new();
    for (i, (id, _, kind)) in DEMO_STATS.iter().enumerate() {
        for number in 0..(3 - i as u8) {
            factories.push(spawn_factory(&mut commands, &mut lists, &SpawnFactoryMsg {
                player: p,
                stats: StatsId(*id),
                kind: *kind,
                number,
            }));
        }
    }

    let alpha = spawn_droid(&mut commands, &mut lists, &mut groups, &droid_msg(p, DroidType::Command, "Alpha", -200.0, 0.0, 70));
    spawn_droid(&mut commands, &mut lists, &mut groups, &droid_msg(p, DroidType::Construct, "Truck", 0.0, -150.0, 0));
    let bravo = spawn_droid(&mut commands, &mut lists, &mut groups, &droid_msg(p, DroidType::Command, "Bravo", 200.0, 0.0, 5));

    let mut members = Vec::new();
    for i in 0..4 {
        let x = -260.0 + i as f32 * 40.0;
        members.push(spawn_droid(&mut commands, &mut lists, &mut groups, &droid_msg(p, DroidType::Weapon, "Trooper", x, 60.0, 0)));
    }
    commands.entity(alpha).insert(CommandGroup { members });

    // Factories 1 and 3 plus the first cyborg factory build for Alpha, factory 2 for Bravo.
    let assignments = [(0, alpha), (2, alpha), (3, alpha), (1, bravo)];
    for (factory, commander) in assignments {
        if let Some(&f) = factories.get(factory) {
            commands.entity(f).insert(FactoryCommander(Some(commander)));
        }
    }

    info!("Demo world: {} factories, 2 commanders for player {}", factories.len(), p.0);
}

fn demo_keys_system(
    keys: Res<ButtonInput<KeyCode>>,
    player: Res<SelectedPlayer>,
    panel: Res<CommanderPanel>,
    droids: Query<(Entity, &DroidType, &PlayerId), Without<Dead>>,
    factories: Query<(Entity, &PlayerId), (With<Factory>, Without<Dead>)>,
    mut spawns: MessageWriter<SpawnDroidMsg>,
    mut kills: MessageWriter<KillMsg>,
    mut assigns: MessageWriter<AssignFactoryMsg>,
) {
    let mut rng = rand::rng();

    if keys.just_pressed(KeyCode::KeyN) {
        let x = rng.random_range(-400.0..400.0);
        let y = rng.random_range(-300.0..300.0);
        let experience = rng.random_range(0..600);
        spawns.write(droid_msg(player.0, DroidType::Command, "Recruit", x, y, experience));
    }

    if keys.just_pressed(KeyCode::KeyK) {
        let commanders: Vec<Entity> = droids.iter()
            .filter(|(_, t, p)| **t == DroidType::Command && **p == player.0)
            .map(|(e, ..)| e)
            .collect();
        if let Some(&entity) = commanders.choose(&mut rng) {
            kills.write(KillMsg { entity });
        }
    }

    if keys.just_pressed(KeyCode::KeyF) {
        let Some(commander) = panel.session.highlighted() else { return };
        let owned: Vec<Entity> = factories.iter()
            .filter(|(_, p)| **p == player.0)
            .map(|(e, _)| e)
            .collect();
        if let Some(&factory) = owned.choose(&mut rng) {
            assigns.write(AssignFactoryMsg { factory, commander: Some(commander) });
        }
    }
}

/// Give new droids a sprite at their position.
fn attach_sprites_system(
    mut commands: Commands,
    added: Query<(Entity, &DroidType, &Position), Added<DroidType>>,
) {
    for (entity, droid_type, pos) in added.iter() {
        let (color, size) = match droid_type {
            DroidType::Command => (Color::srgb(0.95, 0.8, 0.2), 24.0),
            DroidType::Construct => (Color::srgb(0.4, 0.7, 1.0), 16.0),
            _ => (Color::srgb(0.6, 0.6, 0.6), 12.0),
        };
        commands.entity(entity).insert((
            Sprite::from_color(color, Vec2::splat(size)),
            Transform::from_xyz(pos.x, pos.y, 0.0),
        ));
    }
}
