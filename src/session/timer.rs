use super::*;
use crate::model::TICK_INTERVAL_MS;
use std::time::{Duration, Instant};

/// Formatea milisegundos restantes como `MM:SS`
pub fn format_remaining(remaining_ms: u64) -> String {
    let total_secs = remaining_ms / 1000;
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Temporizador periódico por sondeo.
///
/// No tiene hilo propio: quien lo usa llama a [`Ticker::poll`] con la hora
/// actual y recibe cuántos intervalos completos han pasado. Parado, nunca
/// devuelve ticks.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    armed: bool,
    last: Option<Instant>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_INTERVAL_MS))
    }
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            armed: false,
            last: None,
        }
    }

    /// El primer `poll` tras arrancar fija la referencia.
    pub fn start(&mut self) {
        self.armed = true;
        self.last = None;
    }

    pub fn stop(&mut self) {
        self.armed = false;
        self.last = None;
    }

    pub fn is_running(&self) -> bool {
        self.armed
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Número de intervalos vencidos desde el último tick entregado
    pub fn poll(&mut self, now: Instant) -> u32 {
        if !self.armed {
            return 0;
        }
        let Some(prev) = self.last else {
            self.last = Some(now);
            return 0;
        };

        let elapsed = now.saturating_duration_since(prev);
        let due = (elapsed.as_millis() / self.interval.as_millis().max(1)) as u32;
        if due > 0 {
            // El resto se arrastra al siguiente intervalo
            self.last = Some(prev + self.interval * due);
        }
        due
    }

    /// Cuánto falta para el próximo tick (para pedir un repintado)
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if !self.armed {
            return None;
        }
        match self.last {
            Some(prev) => Some((prev + self.interval).saturating_duration_since(now)),
            None => Some(Duration::ZERO),
        }
    }
}

impl QuizSession {
    /// Descuenta `elapsed_ms`, guarda el tiempo restante y termina al llegar a 0.
    /// Fuera de `Running` no hace nada.
    pub fn tick(
        &mut self,
        elapsed_ms: u64,
        store: &mut dyn KeyValueStore,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        if self.phase != SessionPhase::Running {
            log::debug!("tick ignorado con la sesión en estado {}", self.phase);
            return Ok(Vec::new());
        }

        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        store.set_u64(KEY_REMAINING_TIME, self.remaining_ms);

        let mut events = vec![self.timer_event()];
        if self.remaining_ms == 0 {
            events.extend(self.complete(FinishReason::TimeUp, store));
        }
        Ok(events)
    }

    /// Sondea el temporizador propio y aplica un tick por intervalo vencido.
    pub fn pump(
        &mut self,
        now: Instant,
        store: &mut dyn KeyValueStore,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        let due = self.ticker.poll(now);
        let step = self.ticker.interval().as_millis() as u64;
        let mut events = Vec::new();
        for _ in 0..due {
            if self.phase != SessionPhase::Running {
                break;
            }
            events.extend(self.tick(step, store)?);
        }
        Ok(events)
    }

    /// Para pedir el siguiente repintado a tiempo
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_next(now)
    }
}
