//! Commander panel systems - open/close, refresh, clicks, per-frame rows

use bevy::prelude::*;

use crate::commander::{CommanderLookup, build_rows};
use crate::components::*;
use crate::messages::*;
use crate::resources::*;
use crate::settings::UserSettings;

/// Copy the configured player into `SelectedPlayer`. A player switch requests a
/// refresh so an open panel closes when the new player has no commanders.
pub fn apply_settings_system(
    settings: Res<UserSettings>,
    mut player: ResMut<SelectedPlayer>,
    mut refresh: MessageWriter<RefreshCommanderPanel>,
) {
    let next = PlayerId(settings.player);
    if player.0 == next {
        return;
    }
    info!("Commander panel: listing player {}", next.0);
    player.0 = next;
    refresh.write(RefreshCommanderPanel);
}

/// Close an open panel, or open it when the player has commanders.
pub fn commander_panel_toggle_system(
    mut toggles: MessageReader<ToggleCommanderPanel>,
    ui_state: Res<UiState>,
    player: Res<SelectedPlayer>,
    mut panel: ResMut<CommanderPanel>,
    lookup: CommanderLookup,
    mut signals: MessageWriter<PanelSignal>,
) {
    // Several toggles in one frame collapse to their parity.
    let flips = toggles.read().count();
    if flips % 2 == 0 {
        return;
    }

    if ui_state.commander_panel_open {
        signals.write(PanelSignal::Close);
        return;
    }

    let CommanderPanel { controller, session } = &mut *panel;
    match controller.show_interface(session, &lookup, player.0) {
        Some(signal) => {
            info!("Commander panel opened ({} commanders)", controller.len());
            signals.write(signal);
        }
        None => info!("Commander panel: player {} has no commanders", player.0.0),
    }
}

/// Handle `RefreshCommanderPanel` while the panel is open.
pub fn commander_panel_refresh_system(
    mut requests: MessageReader<RefreshCommanderPanel>,
    ui_state: Res<UiState>,
    player: Res<SelectedPlayer>,
    mut panel: ResMut<CommanderPanel>,
    lookup: CommanderLookup,
    mut signals: MessageWriter<PanelSignal>,
) {
    if requests.read().count() == 0 || !ui_state.commander_panel_open {
        return;
    }
    let CommanderPanel { controller, session } = &mut *panel;
    signals.write(controller.refresh(session, &lookup, player.0));
}

/// Resolve row clicks. Object rows select and jump; stats rows only select.
/// Both highlight the commander and show its orders.
pub fn commander_panel_click_system(
    mut commands: Commands,
    mut clicks: MessageReader<PanelClick>,
    mut panel: ResMut<CommanderPanel>,
    lookup: CommanderLookup,
    selected: Query<Entity, With<Selected>>,
    positions: Query<&Position>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
    settings: Res<UserSettings>,
    mut signals: MessageWriter<PanelSignal>,
) {
    let CommanderPanel { controller, session } = &mut *panel;
    for click in clicks.read() {
        let Some(unit) = controller.get_live_at(click.index, &lookup) else {
            warn!("Commander panel: no live commander at index {}", click.index);
            continue;
        };

        for entity in selected.iter() {
            commands.entity(entity).remove::<Selected>();
        }
        commands.entity(unit).insert(Selected);
        controller.highlight(session, unit);

        if click.row == RowKind::Object && settings.jump_to_selected {
            if let (Ok(pos), Ok(mut transform)) = (positions.get(unit), camera.single_mut()) {
                transform.translation.x = pos.x;
                transform.translation.y = pos.y;
            }
        }
        signals.write(controller.display_order_form(session));
    }
}

/// Apply display-layer signals to UI state.
pub fn apply_panel_signals(
    mut signals: MessageReader<PanelSignal>,
    mut ui_state: ResMut<UiState>,
    mut panel: ResMut<CommanderPanel>,
    mut order_form: ResMut<OrderForm>,
) {
    for signal in signals.read() {
        match *signal {
            PanelSignal::Close => {
                if ui_state.commander_panel_open {
                    info!("Commander panel closed");
                }
                ui_state.commander_panel_open = false;
                panel.session.reset();
                order_form.open = false;
                order_form.target = None;
            }
            PanelSignal::ShowOrders(target) => {
                ui_state.commander_panel_open = true;
                order_form.open = true;
                order_form.target = target;
            }
        }
    }
}

/// Rebuild the list, revalidate the highlight and rebuild rows every frame
/// the panel is open.
pub fn commander_panel_update_system(
    ui_state: Res<UiState>,
    player: Res<SelectedPlayer>,
    mut panel: ResMut<CommanderPanel>,
    lookup: CommanderLookup,
    mut rows: ResMut<CommanderPanelRows>,
    mut order_form: ResMut<OrderForm>,
) {
    if !ui_state.commander_panel_open {
        if !rows.0.is_empty() {
            rows.0.clear();
        }
        return;
    }
    let CommanderPanel { controller, session } = &mut *panel;
    controller.update_data(session, &lookup, player.0);
    rows.0 = build_rows(controller, session, &lookup);

    // An open order form follows the highlight.
    if order_form.target.is_some() && order_form.target != session.highlighted() {
        order_form.target = session.highlighted();
    }
}
