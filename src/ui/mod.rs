mod helpers;
pub mod layout;
pub mod views;

use crate::app::{QuizApp, STORE_KEY};
use crate::model::AppState;
use eframe::{App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Instant;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Cierre normal: no se guarda progreso para la próxima vez
        if ctx.input(|i| i.viewport().close_requested()) {
            self.on_close_requested();
        }

        // Ventana sin foco = app en segundo plano
        let focused = ctx.input(|i| i.focused);
        self.on_focus_changed(focused);

        // Temporizador: entregar ticks vencidos y pedir el siguiente repintado
        if let Some(wait) = self.pump_timer(Instant::now()) {
            ctx.request_repaint_after(wait);
        }

        // BARRA SUPERIOR (solo con una sesión abierta)
        if matches!(self.state, AppState::Quiz | AppState::Finished) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        match self.state {
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Finished => {
                views::quiz::ui_quiz(self, ctx);
                views::finished::ui_finished(self, ctx);
            }
            AppState::LoadFailed => views::load_error::ui_load_error(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.flush_session();
        set_value(storage, STORE_KEY, &self.store);
    }
}
