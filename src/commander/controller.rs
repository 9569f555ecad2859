//! Commander list controller.
//!
//! Keeps a snapshot of the active player's live commanders, most recently created
//! first, and resolves which one is highlighted. The snapshot is rebuilt on every
//! update, so indices handed out earlier are only valid until the next rebuild.

use bevy::log::debug;
use bevy::prelude::Entity;

use super::roster::UnitRoster;
use crate::components::{DroidType, PlayerId, StatsId};
use crate::messages::PanelSignal;

/// Per-panel interaction state. Holds the highlighted commander as a key that is
/// looked up against the current list on every use.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanelSession {
    highlighted: Option<Entity>,
}

impl PanelSession {
    pub fn highlighted(&self) -> Option<Entity> {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, unit: Option<Entity>) {
        self.highlighted = unit;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, Default)]
pub struct CommanderController {
    commanders: Vec<Entity>,
}

impl CommanderController {
    /// Rebuild the list, then revalidate the highlight against it.
    pub fn update_data(&mut self, session: &mut PanelSession, roster: &impl UnitRoster, player: PlayerId) {
        self.rebuild_list(roster, player);
        self.resolve_highlighted(session, roster);
    }

    /// Replace the list with `player`'s live commanders in reverse scan order.
    pub fn rebuild_list(&mut self, roster: &impl UnitRoster, player: PlayerId) {
        self.commanders.clear();
        self.commanders.extend(roster.units(player).iter().copied().filter(|&unit| {
            roster.droid_type(unit) == Some(DroidType::Command) && !roster.is_dead(unit)
        }));
        self.commanders.reverse();
    }

    /// A highlight that is no longer listed, or has died since the rebuild, is
    /// replaced by the first selected commander, else the first commander.
    /// Clears the highlight when the list is empty.
    pub fn resolve_highlighted(&self, session: &mut PanelSession, roster: &impl UnitRoster) -> Option<Entity> {
        if let Some(current) = session.highlighted {
            if self.index_of(current).is_some() && !roster.is_dead(current) {
                return Some(current);
            }
            debug!(?current, "highlighted commander is stale");
        }

        let fallback = self.commanders.iter().copied()
            .find(|&unit| !roster.is_dead(unit) && roster.is_selected(unit))
            .or_else(|| self.commanders.iter().copied().find(|&unit| !roster.is_dead(unit)));
        session.highlighted = fallback;
        fallback
    }

    /// Unit at `index`, or `None` when out of range. The unit may have died since
    /// the last rebuild; use `get_live_at` when that matters.
    pub fn get_at(&self, index: usize) -> Option<Entity> {
        self.commanders.get(index).copied()
    }

    pub fn get_live_at(&self, index: usize, roster: &impl UnitRoster) -> Option<Entity> {
        self.get_at(index).filter(|&unit| !roster.is_dead(unit))
    }

    /// Stats of the factory producing for the commander at `index`.
    pub fn get_stats_for_at(&self, index: usize, roster: &impl UnitRoster) -> Option<StatsId> {
        let unit = self.get_live_at(index, roster)?;
        let factory = roster.assigned_factory(unit)?;
        roster.factory_stats(factory)
    }

    pub fn index_of(&self, unit: Entity) -> Option<usize> {
        self.commanders.iter().position(|&c| c == unit)
    }

    pub fn commanders(&self) -> &[Entity] {
        &self.commanders
    }

    pub fn len(&self) -> usize {
        self.commanders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commanders.is_empty()
    }

    /// Rebuild, then close the panel if nothing is left or show orders for the highlight.
    pub fn refresh(&mut self, session: &mut PanelSession, roster: &impl UnitRoster, player: PlayerId) -> PanelSignal {
        self.update_data(session, roster, player);
        if self.is_empty() {
            PanelSignal::Close
        } else {
            self.display_order_form(session)
        }
    }

    /// `None` when there is nothing to show, in which case the panel must stay closed.
    pub fn show_interface(&mut self, session: &mut PanelSession, roster: &impl UnitRoster, player: PlayerId) -> Option<PanelSignal> {
        self.update_data(session, roster, player);
        if self.is_empty() {
            return None;
        }
        Some(self.display_order_form(session))
    }

    pub fn display_order_form(&self, session: &PanelSession) -> PanelSignal {
        PanelSignal::ShowOrders(session.highlighted)
    }

    /// Highlight a listed commander. Returns false and leaves the session alone otherwise.
    pub fn highlight(&self, session: &mut PanelSession, unit: Entity) -> bool {
        if self.index_of(unit).is_none() {
            return false;
        }
        session.highlighted = Some(unit);
        true
    }
}
