//! Panel rows - one object row and one stats row per listed commander.

use bevy::prelude::Entity;

use super::controller::{CommanderController, PanelSession};
use super::roster::RowSource;
use crate::components::{FactoryKind, StatsId, max_group_size};
use crate::constants::MAX_ASSIGNED_FACTORIES;
use crate::messages::RowKind;

/// Commander portrait row: name tooltip, group size, experience.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectRow {
    pub index: usize,
    pub commander: Entity,
    pub tip: String,
    pub group_size: String,
    pub experience_stars: String,
}

/// Assigned factory numbers of one kind, e.g. "13" for factories 1 and 3.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactoryLabel {
    pub kind: FactoryKind,
    pub text: String,
}

/// Production row: what the commander's factories build into its group.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsRow {
    pub index: usize,
    pub commander: Entity,
    pub stats: Option<StatsId>,
    pub stats_name: Option<String>,
    /// Only kinds with at least one assigned factory.
    pub factory_labels: Vec<FactoryLabel>,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PanelRow {
    Object(ObjectRow),
    Stats(StatsRow),
}

impl PanelRow {
    pub fn index(&self) -> usize {
        match self {
            Self::Object(row) => row.index,
            Self::Stats(row) => row.index,
        }
    }

    pub fn commander(&self) -> Entity {
        match self {
            Self::Object(row) => row.commander,
            Self::Stats(row) => row.commander,
        }
    }

    pub fn kind(&self) -> RowKind {
        match self {
            Self::Object(_) => RowKind::Object,
            Self::Stats(_) => RowKind::Stats,
        }
    }
}

/// "members/capacity".
pub fn group_size_label(members: usize, level: u32) -> String {
    format!("{}/{}", members, max_group_size(level))
}

/// One star per level above the first.
pub fn experience_stars(level: u32) -> String {
    "*".repeat(level.saturating_sub(1) as usize)
}

/// Digits '1'..='5' for 0-based factory numbers, ascending. `None` when no
/// labelled factory is assigned.
pub fn factory_number_label(numbers: impl IntoIterator<Item = u8>) -> Option<String> {
    let mut assigned = [false; MAX_ASSIGNED_FACTORIES];
    for n in numbers {
        if let Some(slot) = assigned.get_mut(n as usize) {
            *slot = true;
        }
    }
    let text: String = assigned.iter().enumerate()
        .filter(|(_, on)| **on)
        .filter_map(|(i, _)| char::from_digit(i as u32 + 1, 10))
        .collect();
    (!text.is_empty()).then_some(text)
}

/// Rows for every listed commander that is still alive, object row first.
pub fn build_rows(controller: &CommanderController, session: &PanelSession, source: &impl RowSource) -> Vec<PanelRow> {
    let mut rows = Vec::with_capacity(controller.len() * 2);
    for (index, &commander) in controller.commanders().iter().enumerate() {
        if source.is_dead(commander) {
            continue;
        }
        let level = source.droid_level(commander);
        rows.push(PanelRow::Object(ObjectRow {
            index,
            commander,
            tip: source.droid_name(commander).unwrap_or_default(),
            group_size: group_size_label(source.group_members(commander), level),
            experience_stars: experience_stars(level),
        }));

        let stats = controller.get_stats_for_at(index, source);
        let factory_labels = FactoryKind::ALL.iter()
            .filter_map(|&kind| {
                factory_number_label(source.assigned_numbers(commander, kind))
                    .map(|text| FactoryLabel { kind, text })
            })
            .collect();
        rows.push(PanelRow::Stats(StatsRow {
            index,
            commander,
            stats,
            stats_name: stats.and_then(|id| source.stats_name(id)),
            factory_labels,
            selected: session.highlighted() == Some(commander),
        }));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commander::roster::memory::MemoryRoster;
    use crate::components::{DroidType, PlayerId};

    #[test]
    fn group_size_uses_level_capacity() {
        assert_eq!(group_size_label(0, 0), "0/6");
        assert_eq!(group_size_label(3, 2), "3/10");
        assert_eq!(group_size_label(22, 8), "22/22");
    }

    #[test]
    fn stars_start_above_first_level() {
        assert_eq!(experience_stars(0), "");
        assert_eq!(experience_stars(1), "");
        assert_eq!(experience_stars(2), "*");
        assert_eq!(experience_stars(8), "*******");
    }

    #[test]
    fn factory_label_is_sorted_and_capped() {
        assert_eq!(factory_number_label(Vec::<u8>::new()), None);
        assert_eq!(factory_number_label([2, 0]), Some("13".to_string()));
        assert_eq!(factory_number_label([4, 4, 1]), Some("25".to_string()));
        assert_eq!(factory_number_label([5, 9]), None);
    }

    #[test]
    fn rows_pair_object_and_stats_per_commander() {
        let mut roster = MemoryRoster::default();
        roster.stats.insert(StatsId(1), "Tank Factory".into());
        let old = roster.add(0, DroidType::Command, "Old Guard");
        roster.add(0, DroidType::Weapon, "Grunt");
        let new = roster.add(0, DroidType::Command, "Fresh");
        roster.unit_mut(old).experience = 40;
        roster.unit_mut(old).members = 4;
        let tank = roster.add_factory(0, FactoryKind::Factory, 0, StatsId(1));
        let second = roster.add_factory(0, FactoryKind::Factory, 2, StatsId(1));
        let vtol = roster.add_factory(0, FactoryKind::Vtol, 1, StatsId(3));
        for f in [tank, second, vtol] {
            roster.assign(f, Some(old));
        }

        let mut controller = CommanderController::default();
        let mut session = PanelSession::default();
        controller.update_data(&mut session, &roster, PlayerId(0));
        let rows = build_rows(&controller, &session, &roster);

        let kinds: Vec<_> = rows.iter().map(|r| (r.index(), r.kind(), r.commander())).collect();
        assert_eq!(kinds, vec![
            (0, RowKind::Object, new),
            (0, RowKind::Stats, new),
            (1, RowKind::Object, old),
            (1, RowKind::Stats, old),
        ]);

        let PanelRow::Object(object) = &rows[2] else { panic!("expected object row") };
        assert_eq!(object.tip, "Old Guard");
        // 40 xp reaches thresholds 4, 8, 16, 32 -> level 4
        assert_eq!(object.group_size, "4/14");
        assert_eq!(object.experience_stars, "***");

        let PanelRow::Stats(stats) = &rows[3] else { panic!("expected stats row") };
        assert_eq!(stats.stats, Some(StatsId(1)));
        assert_eq!(stats.stats_name.as_deref(), Some("Tank Factory"));
        assert_eq!(stats.factory_labels, vec![
            FactoryLabel { kind: FactoryKind::Factory, text: "13".into() },
            FactoryLabel { kind: FactoryKind::Vtol, text: "2".into() },
        ]);
        assert!(!stats.selected);

        let PanelRow::Stats(fresh) = &rows[1] else { panic!("expected stats row") };
        assert!(fresh.selected);
        assert_eq!(fresh.stats, None);
        assert!(fresh.factory_labels.is_empty());
    }

    #[test]
    fn rows_skip_commanders_that_died_since_rebuild() {
        let mut roster = MemoryRoster::default();
        let a = roster.add(0, DroidType::Command, "A");
        let b = roster.add(0, DroidType::Command, "B");
        let mut controller = CommanderController::default();
        let session = PanelSession::default();
        controller.rebuild_list(&roster, PlayerId(0));
        roster.kill(b);
        let rows = build_rows(&controller, &session, &roster);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.commander() == a && r.index() == 1));
    }
}
