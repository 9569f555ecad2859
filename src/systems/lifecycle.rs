//! Object lifecycle systems - Spawn, death marking, factory assignment, cleanup

use bevy::prelude::*;

use crate::components::*;
use crate::messages::*;
use crate::resources::*;

/// Spawn a droid and append it to its player's list. Joins `msg.commander`'s
/// group when that commander exists.
pub fn spawn_droid(
    commands: &mut Commands,
    lists: &mut PlayerLists,
    groups: &mut Query<&mut CommandGroup>,
    msg: &SpawnDroidMsg,
) -> Entity {
    let mut entity = commands.spawn((
        msg.player,
        msg.droid_type,
        DroidName(msg.name.clone()),
        Experience(msg.experience),
        Position::new(msg.x, msg.y),
    ));
    if msg.droid_type == DroidType::Command {
        entity.insert(CommandGroup::default());
    }
    let entity = entity.id();
    lists.push_droid(msg.player, entity);

    if let Some(commander) = msg.commander {
        match groups.get_mut(commander) {
            Ok(mut group) => group.members.push(entity),
            Err(_) => warn!("spawn: {:?} is not a commander, {} joins no group", commander, msg.name),
        }
    }
    debug!("spawn: {} ({}) for player {}", msg.name, msg.droid_type.name(), msg.player.0);
    entity
}

pub fn spawn_factory(commands: &mut Commands, lists: &mut PlayerLists, msg: &SpawnFactoryMsg) -> Entity {
    let entity = commands.spawn((
        msg.player,
        Factory { kind: msg.kind, number: msg.number },
        StructureType(msg.stats),
        FactoryCommander::default(),
    )).id();
    lists.push_factory(msg.player, entity);
    entity
}

pub fn spawn_droid_system(
    mut commands: Commands,
    mut messages: MessageReader<SpawnDroidMsg>,
    mut lists: ResMut<PlayerLists>,
    mut groups: Query<&mut CommandGroup>,
    mut refresh: MessageWriter<RefreshCommanderPanel>,
) {
    for msg in messages.read() {
        spawn_droid(&mut commands, &mut lists, &mut groups, msg);
        if msg.droid_type == DroidType::Command {
            refresh.write(RefreshCommanderPanel);
        }
    }
}

pub fn spawn_factory_system(
    mut commands: Commands,
    mut messages: MessageReader<SpawnFactoryMsg>,
    mut lists: ResMut<PlayerLists>,
) {
    for msg in messages.read() {
        spawn_factory(&mut commands, &mut lists, msg);
    }
}

/// Mark killed objects dead. A dying commander refreshes the panel.
pub fn kill_system(
    mut commands: Commands,
    mut messages: MessageReader<KillMsg>,
    droid_types: Query<&DroidType, Without<Dead>>,
    alive: Query<(), Without<Dead>>,
    mut refresh: MessageWriter<RefreshCommanderPanel>,
) {
    for msg in messages.read() {
        if alive.get(msg.entity).is_err() {
            debug!("kill: {:?} already dead or gone", msg.entity);
            continue;
        }
        commands.entity(msg.entity).insert(Dead);
        if droid_types.get(msg.entity).is_ok_and(|t| *t == DroidType::Command) {
            refresh.write(RefreshCommanderPanel);
        }
    }
}

/// Point factories at commanders. Only live commanders of the factory's player
/// are accepted.
pub fn assign_factory_system(
    mut messages: MessageReader<AssignFactoryMsg>,
    mut factories: Query<(&PlayerId, &mut FactoryCommander), (With<Factory>, Without<Dead>)>,
    droids: Query<(&DroidType, &PlayerId), Without<Dead>>,
    mut refresh: MessageWriter<RefreshCommanderPanel>,
) {
    for msg in messages.read() {
        let Ok((owner, mut link)) = factories.get_mut(msg.factory) else {
            warn!("assign: {:?} is not a live factory", msg.factory);
            continue;
        };
        if let Some(commander) = msg.commander {
            match droids.get(commander) {
                Ok((DroidType::Command, player)) if player == owner => {}
                _ => {
                    warn!("assign: {:?} is not a live commander of player {}", commander, owner.0);
                    continue;
                }
            }
        }
        link.0 = msg.commander;
        refresh.write(RefreshCommanderPanel);
    }
}

/// Remove dead objects from the player lists, unlink them, then despawn.
pub fn death_cleanup_system(
    mut commands: Commands,
    dead: Query<Entity, With<Dead>>,
    mut lists: ResMut<PlayerLists>,
    mut links: Query<&mut FactoryCommander>,
    mut groups: Query<&mut CommandGroup>,
) {
    for entity in dead.iter() {
        lists.remove(entity);
        for mut link in links.iter_mut() {
            if link.0 == Some(entity) {
                link.0 = None;
            }
        }
        for mut group in groups.iter_mut() {
            group.members.retain(|&m| m != entity);
        }
        commands.entity(entity).despawn();
    }
}
