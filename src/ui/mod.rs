//! UI module - panel hotkey, commander panel, order form.

pub mod commander_panel;
pub mod order_form;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::PanelStep;
use crate::messages::ToggleCommanderPanel;
use crate::settings::UserSettings;

/// Register all UI systems. Needs `EguiPlugin`.
pub fn register_ui(app: &mut App) {
    // Side panel claims width before the order form window.
    app.add_systems(EguiPrimaryContextPass, (
        commander_panel::commander_panel_system,
        order_form::order_form_system,
    ).chain());

    app.add_systems(Update, ui_toggle_system.before(PanelStep::Input));
    app.add_systems(Startup, open_on_start_system);
}

/// Keyboard shortcut for toggling the commander panel.
fn ui_toggle_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut toggles: MessageWriter<ToggleCommanderPanel>,
) {
    if keys.just_pressed(KeyCode::KeyC) {
        toggles.write(ToggleCommanderPanel);
    }
}

fn open_on_start_system(settings: Res<UserSettings>, mut toggles: MessageWriter<ToggleCommanderPanel>) {
    if settings.open_on_start {
        toggles.write(ToggleCommanderPanel);
    }
}
