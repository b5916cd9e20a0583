use egui::{Button, CentralPanel, Context, Frame, RichText, Ui, Visuals};
use crate::QuizApp;
use crate::model::AppState;

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if app.state == AppState::Quiz && ui.button("✖ Abandonar quiz").clicked() {
                app.abandon_quiz();
                ctx.request_repaint();
                return;
            }

            // Temporizador a la derecha
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("⏱ {}", app.view.timer)).monospace().strong());
            });
        });
    });
}

/// Progreso a la izquierda (solo en el quiz) y cambio de tema a la derecha
pub fn bottom_panel(app: &QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if matches!(app.state, AppState::Quiz | AppState::Finished) {
                let answered = app.session.as_ref().map_or(0, |s| s.answers().len());
                ui.weak(format!("{answered} respondidas de {}", app.view.total));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let dark = ctx.style().visuals.dark_mode;
                let label = if dark { "☀ Modo claro" } else { "🌙 Modo oscuro" };
                if ui.button(label).clicked() {
                    ctx.set_visuals(if dark { Visuals::light() } else { Visuals::dark() });
                }
            });
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                // Ajusta anchura
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Dibuja un botón a ancho completo del panel.
pub fn wide_button(ui: &mut Ui, width: f32, label: &str, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(egui::vec2(width, 36.0)))
        .clicked()
}
