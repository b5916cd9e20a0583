use egui::{Align, CentralPanel, Context, ProgressBar, RichText, ScrollArea};
use crate::QuizApp;
use crate::model::{AppState, OPTION_COUNT};
use crate::ui::helpers::option_button;
use crate::ui::layout::wide_button;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let total_height = 60.0 + 150.0 + 4.0 * 48.0 + 48.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 4.0);

        // Con el quiz terminado solo se muestra la solución
        let interactive = app.state == AppState::Quiz;

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(40, 20))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_width(panel_width);

                    // Progreso
                    ui.label(app.view.progress_label());
                    ui.add(
                        ProgressBar::new(app.view.progress_fraction())
                            .desired_width(panel_width),
                    );
                    ui.add_space(10.0);

                    // Enunciado con scroll fijo
                    let prompt_max_height = 150.0;
                    ui.allocate_ui_with_layout(
                        egui::vec2(panel_width, prompt_max_height / 2.0),
                        egui::Layout::top_down(Align::Center),
                        |ui| {
                            ScrollArea::vertical()
                                .max_height(prompt_max_height)
                                .show(ui, |ui| {
                                    ui.label(RichText::new(&app.view.prompt).heading());
                                });
                        },
                    );

                    ui.add_space(10.0);

                    // Opciones
                    let mut clicked = None;
                    for i in 0..OPTION_COUNT {
                        let label = app.view.options[i].clone();
                        let state = app.view.option_states[i];
                        if option_button(ui, &label, state, panel_width, 40.0, interactive) {
                            clicked = Some(i);
                        }
                        ui.add_space(8.0);
                    }
                    if let Some(i) = clicked {
                        app.choose_option(i);
                    }

                    ui.add_space(8.0);

                    let next_label = if app.view.is_last() { "Finalizar" } else { "Siguiente" };
                    if wide_button(ui, panel_width, next_label, interactive) {
                        app.next_question();
                    }

                    ui.add_space(8.0);
                    if !app.message.is_empty() {
                        ui.label(&app.message);
                    }
                });
            });

        ui.add_space(extra_space);
    });
}
