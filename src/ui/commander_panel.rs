//! Commander panel - one portrait row and one production row per commander.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::commander::{ObjectRow, PanelRow, StatsRow};
use crate::constants::PANEL_WIDTH;
use crate::messages::*;
use crate::resources::*;
use crate::settings::UserSettings;

pub fn commander_panel_system(
    mut contexts: EguiContexts,
    ui_state: Res<UiState>,
    panel: Res<CommanderPanel>,
    rows: Res<CommanderPanelRows>,
    settings: Res<UserSettings>,
    mut clicks: MessageWriter<PanelClick>,
    mut toggles: MessageWriter<ToggleCommanderPanel>,
) -> Result {
    if !ui_state.commander_panel_open {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;
    let mut clicked: Option<PanelClick> = None;

    egui::SidePanel::right("commander_panel").default_width(PANEL_WIDTH).show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Commanders");
            if ui.small_button("x").clicked() {
                toggles.write(ToggleCommanderPanel);
            }
        });
        ui.label(format!("{} commanders", panel.controller.len()));
        ui.separator();

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            for row in &rows.0 {
                let response = match row {
                    PanelRow::Object(object) => object_row(ui, object, &settings),
                    PanelRow::Stats(stats) => {
                        let r = stats_row(ui, stats, &settings);
                        ui.separator();
                        r
                    }
                };
                if response.clicked() {
                    clicked = Some(PanelClick { index: row.index(), row: row.kind() });
                }
            }
        });
    });

    if let Some(click) = clicked {
        clicks.write(click);
    }
    Ok(())
}

fn object_row(ui: &mut egui::Ui, row: &ObjectRow, settings: &UserSettings) -> egui::Response {
    ui.horizontal(|ui| {
        let name = if row.tip.is_empty() { "Commander" } else { row.tip.as_str() };
        let response = ui.button(name).on_hover_text(row.tip.as_str());
        if settings.show_group_size {
            ui.label(row.group_size.as_str());
        }
        if settings.show_experience && !row.experience_stars.is_empty() {
            ui.colored_label(egui::Color32::from_rgb(230, 200, 60), row.experience_stars.as_str());
        }
        response
    }).inner
}

fn stats_row(ui: &mut egui::Ui, row: &StatsRow, settings: &UserSettings) -> egui::Response {
    ui.horizontal(|ui| {
        let text = row.stats_name.as_deref().unwrap_or("No factory");
        let response = ui.selectable_label(row.selected, text);
        if settings.show_factory_numbers {
            for label in &row.factory_labels {
                ui.small(format!("{}: {}", label.kind.name(), label.text));
            }
        }
        response
    }).inner
}
