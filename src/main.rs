//! Commander panel demo - Bevy app with egui panels.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Commander Panel".into(),
            resolution: (1280, 720).into(),
            ..default()
        }),
        ..default()
    }));
    app.add_plugins(EguiPlugin::default());

    // Panel logic, then saved settings on top of the defaults it registers
    commander_panel::build_app(&mut app);
    app.insert_resource(commander_panel::settings::load_settings());

    commander_panel::ui::register_ui(&mut app);
    commander_panel::demo::register_demo(&mut app);

    app.add_systems(Startup, || {
        info!("Commander panel build {}", commander_panel::build_label());
    });

    app.run();
}
