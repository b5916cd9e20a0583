use egui::{Color32, Context, RichText};
use crate::QuizApp;
use crate::ui::layout::{centered_panel, wide_button};

pub fn ui_load_error(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 160.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("No se pudieron cargar las preguntas");
            ui.add_space(10.0);
            if let Some(err) = &app.load_error {
                ui.label(RichText::new(err).color(Color32::LIGHT_RED));
            }
            ui.add_space(16.0);
            let width = ui.available_width();
            if wide_button(ui, width, "Volver", true) {
                app.back_to_welcome();
            }
        });
    });
}
