//! Read-only view of the object model the panel is built from.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::components::*;
use crate::resources::{PlayerLists, StructureCatalog};

/// What the controller needs to know about units. A unit that no longer exists
/// reports as dead and has no type.
pub trait UnitRoster {
    /// Units owned by `player`, in scan order.
    fn units(&self, player: PlayerId) -> &[Entity];
    fn droid_type(&self, unit: Entity) -> Option<DroidType>;
    fn is_dead(&self, unit: Entity) -> bool;
    fn is_selected(&self, unit: Entity) -> bool;
    /// First live factory of the commander's player that produces for it.
    fn assigned_factory(&self, commander: Entity) -> Option<Entity>;
    fn factory_stats(&self, factory: Entity) -> Option<StatsId>;
}

/// Extra per-unit details used only for row labels.
pub trait RowSource: UnitRoster {
    fn droid_name(&self, unit: Entity) -> Option<String>;
    fn droid_level(&self, unit: Entity) -> u32;
    fn group_members(&self, commander: Entity) -> usize;
    /// 0-based numbers of the live factories of `kind` producing for `commander`.
    fn assigned_numbers(&self, commander: Entity, kind: FactoryKind) -> Vec<u8>;
    fn stats_name(&self, stats: StatsId) -> Option<String>;
}

/// ECS-backed roster.
#[derive(SystemParam)]
pub struct CommanderLookup<'w, 's> {
    lists: Res<'w, PlayerLists>,
    catalog: Res<'w, StructureCatalog>,
    droids: Query<'w, 's, (&'static DroidType, &'static PlayerId, Has<Dead>, Has<Selected>)>,
    details: Query<'w, 's, (
        Option<&'static DroidName>,
        Option<&'static Experience>,
        Option<&'static CommandGroup>,
    ), With<DroidType>>,
    factories: Query<'w, 's, (
        &'static Factory,
        &'static StructureType,
        &'static FactoryCommander,
    ), Without<Dead>>,
}

impl CommanderLookup<'_, '_> {
    fn factories_for(&self, commander: Entity) -> impl Iterator<Item = (Entity, &Factory)> + '_ {
        let player = self.droids.get(commander).ok().map(|(_, player, ..)| *player);
        let list = player.map(|p| self.lists.factories_of(p)).unwrap_or(&[]);
        list.iter().filter_map(move |&entity| {
            let (factory, _, link) = self.factories.get(entity).ok()?;
            (link.0 == Some(commander)).then_some((entity, factory))
        })
    }
}

impl UnitRoster for CommanderLookup<'_, '_> {
    fn units(&self, player: PlayerId) -> &[Entity] {
        self.lists.droids_of(player)
    }

    fn droid_type(&self, unit: Entity) -> Option<DroidType> {
        self.droids.get(unit).ok().map(|(droid_type, ..)| *droid_type)
    }

    fn is_dead(&self, unit: Entity) -> bool {
        self.droids.get(unit).map(|(_, _, dead, _)| dead).unwrap_or(true)
    }

    fn is_selected(&self, unit: Entity) -> bool {
        self.droids.get(unit).map(|(_, _, _, selected)| selected).unwrap_or(false)
    }

    fn assigned_factory(&self, commander: Entity) -> Option<Entity> {
        self.factories_for(commander).next().map(|(entity, _)| entity)
    }

    fn factory_stats(&self, factory: Entity) -> Option<StatsId> {
        self.factories.get(factory).ok().map(|(_, stats, _)| stats.0)
    }
}

impl RowSource for CommanderLookup<'_, '_> {
    fn droid_name(&self, unit: Entity) -> Option<String> {
        let (name, ..) = self.details.get(unit).ok()?;
        name.map(|n| n.0.clone())
    }

    fn droid_level(&self, unit: Entity) -> u32 {
        self.details.get(unit).ok()
            .and_then(|(_, xp, _)| xp.map(Experience::level))
            .unwrap_or(0)
    }

    fn group_members(&self, commander: Entity) -> usize {
        self.details.get(commander).ok()
            .and_then(|(_, _, group)| group.map(CommandGroup::len))
            .unwrap_or(0)
    }

    fn assigned_numbers(&self, commander: Entity, kind: FactoryKind) -> Vec<u8> {
        self.factories_for(commander)
            .filter(|(_, factory)| factory.kind == kind)
            .map(|(_, factory)| factory.number)
            .collect()
    }

    fn stats_name(&self, stats: StatsId) -> Option<String> {
        self.catalog.get(stats).map(|s| s.name.clone())
    }
}

// ============================================================================
// IN-MEMORY ROSTER (tests)
// ============================================================================
