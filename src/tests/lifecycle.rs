//! Object lifecycle: spawn order, death cleanup, factory assignment.

use bevy::prelude::*;

use super::*;

#[test]
fn spawns_append_in_creation_order() {
    let mut app = test_app();
    let [a, b, c, d] = abcd(&mut app);
    // C was killed and cleaned up.
    assert_eq!(app.world().resource::<PlayerLists>().droids_of(P0), &[a, b, d]);
    assert!(app.world().get_entity(c).is_err());
}

#[test]
fn commanders_get_a_group_and_troopers_join_it() {
    let mut app = test_app();
    let leader = spawn_droid(&mut app, DroidType::Command, "Leader");
    let grunt = spawn_droid_full(&mut app, P0, DroidType::Weapon, "Grunt", 0, Some(leader));
    let loner = spawn_droid(&mut app, DroidType::Weapon, "Loner");

    let group = app.world().get::<CommandGroup>(leader).expect("group");
    assert_eq!(group.members, vec![grunt]);
    assert!(app.world().get::<CommandGroup>(loner).is_none());
}

#[test]
fn dead_members_leave_their_group() {
    let mut app = test_app();
    let leader = spawn_droid(&mut app, DroidType::Command, "Leader");
    let grunt = spawn_droid_full(&mut app, P0, DroidType::Weapon, "Grunt", 0, Some(leader));
    step(&mut app, KillMsg { entity: grunt });

    assert!(app.world().get::<CommandGroup>(leader).expect("group").is_empty());
}

#[test]
fn assignment_links_factory_to_commander() {
    let mut app = test_app();
    let leader = spawn_droid(&mut app, DroidType::Command, "Leader");
    let factory = spawn_factory(&mut app, P0, FactoryKind::Factory, 0, StatsId(1));
    step(&mut app, AssignFactoryMsg { factory, commander: Some(leader) });
    assert_eq!(app.world().get::<FactoryCommander>(factory).expect("link").0, Some(leader));

    step(&mut app, AssignFactoryMsg { factory, commander: None });
    assert_eq!(app.world().get::<FactoryCommander>(factory).expect("link").0, None);
}

#[test]
fn assignment_rejects_non_commanders_and_other_players() {
    let mut app = test_app();
    let truck = spawn_droid(&mut app, DroidType::Construct, "Truck");
    let enemy = spawn_droid_full(&mut app, PlayerId(1), DroidType::Command, "Enemy", 0, None);
    let factory = spawn_factory(&mut app, P0, FactoryKind::Cyborg, 0, StatsId(2));

    step(&mut app, AssignFactoryMsg { factory, commander: Some(truck) });
    step(&mut app, AssignFactoryMsg { factory, commander: Some(enemy) });
    assert_eq!(app.world().get::<FactoryCommander>(factory).expect("link").0, None);
}

#[test]
fn commander_death_unlinks_its_factories() {
    let mut app = test_app();
    let leader = spawn_droid(&mut app, DroidType::Command, "Leader");
    let factory = spawn_factory(&mut app, P0, FactoryKind::Vtol, 0, StatsId(3));
    step(&mut app, AssignFactoryMsg { factory, commander: Some(leader) });
    step(&mut app, KillMsg { entity: leader });

    assert_eq!(app.world().get::<FactoryCommander>(factory).expect("link").0, None);
    assert!(app.world().resource::<PlayerLists>().droids_of(P0).is_empty());
}

#[test]
fn destroyed_factory_leaves_the_list() {
    let mut app = test_app();
    let factory = spawn_factory(&mut app, P0, FactoryKind::Factory, 0, StatsId(1));
    step(&mut app, KillMsg { entity: factory });
    assert!(app.world().resource::<PlayerLists>().factories_of(P0).is_empty());
}
