//! Order form - details of the highlighted commander plus panel settings.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::components::*;
use crate::messages::PanelSignal;
use crate::resources::*;
use crate::settings::{UserSettings, save_settings};

pub fn order_form_system(
    mut contexts: EguiContexts,
    order_form: Res<OrderForm>,
    droids: Query<(&DroidName, &Experience, Option<&CommandGroup>, &Position), Without<Dead>>,
    mut settings: ResMut<UserSettings>,
    mut signals: MessageWriter<PanelSignal>,
) -> Result {
    if !order_form.open {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;
    let mut edited = settings.clone();

    egui::Window::new("Orders")
        .anchor(egui::Align2::LEFT_BOTTOM, [8.0, -8.0])
        .resizable(false)
        .collapsible(true)
        .show(ctx, |ui| {
            match order_form.target.and_then(|e| droids.get(e).ok()) {
                Some((name, xp, group, pos)) => {
                    let level = xp.level();
                    ui.label(egui::RichText::new(&name.0).strong());
                    ui.label(format!("Level {} ({} xp)", level, xp.0));
                    let members = group.map(CommandGroup::len).unwrap_or(0);
                    ui.label(format!("Group: {}/{}", members, max_group_size(level)));
                    ui.small(format!("at ({:.0}, {:.0})", pos.x, pos.y));
                }
                None => {
                    ui.label("No commander selected");
                }
            }

            ui.separator();
            ui.checkbox(&mut edited.jump_to_selected, "Jump to commander");
            ui.checkbox(&mut edited.show_group_size, "Group size");
            ui.checkbox(&mut edited.show_experience, "Experience");
            ui.checkbox(&mut edited.show_factory_numbers, "Factory numbers");
            ui.checkbox(&mut edited.open_on_start, "Open on start");

            if ui.button("Close panel").clicked() {
                signals.write(PanelSignal::Close);
            }
        });

    // Change detection on UserSettings re-applies the player.
    if edited != *settings {
        *settings = edited;
        save_settings(&settings);
    }
    Ok(())
}
