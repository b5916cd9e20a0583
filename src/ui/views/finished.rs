use egui::{Align2, Context, RichText};
use crate::QuizApp;

/// Diálogo modal de fin de quiz, encima de la última pregunta con la solución marcada
pub fn ui_finished(app: &mut QuizApp, ctx: &Context) {
    let Some(finished) = app.view.finished.clone() else {
        return;
    };

    egui::Window::new(finished.title())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(finished.label()).strong());
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Volver al inicio").clicked() {
                    app.back_to_welcome();
                }
                if ui.button("Salir").clicked() {
                    app.on_close_requested();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
}
