use super::*;
use std::time::{Duration, Instant};
use crate::store::KeyValueStore;

impl QuizApp {
    /// Se llama en cada frame: entrega los ticks vencidos y dice cuándo repintar
    pub fn pump_timer(&mut self, now: Instant) -> Option<Duration> {
        let session = self.session.as_mut()?;
        let result = session.pump(now, &mut self.store);
        let next = session.time_until_next_tick(now);
        self.apply_result(result);
        next
    }

    /// Ventana en segundo plano → pausa; de vuelta → reanuda
    pub fn on_focus_changed(&mut self, focused: bool) {
        if focused == self.focused {
            return;
        }
        self.focused = focused;

        let Some(session) = self.session.as_mut() else {
            return;
        };
        match (focused, session.phase()) {
            (false, SessionPhase::Running) => {
                if let Err(e) = session.pause(&mut self.store) {
                    log::warn!("no se pudo pausar: {e}");
                }
            }
            (true, SessionPhase::Paused) => {
                let result = session.resume_from_pause(&mut self.store);
                self.apply_result(result);
            }
            _ => {}
        }
    }

    /// Cierre normal de la ventana: el progreso no sobrevive. Solo un cierre
    /// inesperado deja en disco lo último que guardó `save`.
    pub fn on_close_requested(&mut self) {
        if let Some(mut session) = self.session.take() {
            if session.phase() != SessionPhase::Completed {
                if let Err(e) = session.discard(&mut self.store) {
                    log::warn!("no se pudo descartar la sesión al cerrar: {e}");
                }
            }
        }
        self.store.clear();
        log::info!("cierre de la app: progreso borrado");
    }

    /// Vuelca la sesión al almacén antes de que eframe lo guarde
    pub fn flush_session(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if matches!(session.phase(), SessionPhase::Running | SessionPhase::Paused) {
            if let Err(e) = session.flush(&mut self.store) {
                log::warn!("no se pudo guardar el progreso: {e}");
            }
        }
    }
}
