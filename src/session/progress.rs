use super::*;

impl QuizSession {
    /// `Running → Paused`: vuelca el estado completo y para el temporizador.
    pub fn pause(&mut self, store: &mut dyn KeyValueStore) -> Result<(), SessionError> {
        self.expect_phase("pause", &[SessionPhase::Running])?;

        self.record_current_answer(store);
        self.write_snapshot(store);
        self.ticker.stop();
        self.phase = SessionPhase::Paused;
        log::debug!(
            "sesión en pausa en la pregunta {} ({} ms)",
            self.current_index + 1,
            self.remaining_ms
        );
        Ok(())
    }

    /// `Paused → Running`: relee el progreso guardado y rearranca el temporizador.
    pub fn resume_from_pause(
        &mut self,
        store: &mut dyn KeyValueStore,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        self.expect_phase("resume_from_pause", &[SessionPhase::Paused])?;

        self.restore_from(store);
        log::debug!("sesión reanudada en la pregunta {}", self.current_index + 1);
        Ok(self.enter_running(store))
    }

    /// Vuelca el estado sin cambiar de fase (guardado periódico o al cerrar).
    pub fn flush(&mut self, store: &mut dyn KeyValueStore) -> Result<(), SessionError> {
        self.expect_phase("flush", &[SessionPhase::Running, SessionPhase::Paused])?;

        self.record_current_answer(store);
        self.write_snapshot(store);
        Ok(())
    }

    /// Abandona la sesión: para el temporizador y borra el progreso guardado.
    pub fn discard(&mut self, store: &mut dyn KeyValueStore) -> Result<(), SessionError> {
        self.expect_phase(
            "discard",
            &[SessionPhase::Idle, SessionPhase::Running, SessionPhase::Paused],
        )?;

        self.ticker.stop();
        store.clear();
        self.phase = SessionPhase::Completed;
        log::info!("sesión abandonada en la pregunta {}", self.current_index + 1);
        Ok(())
    }

    /// Índice, tiempo y respuesta actual en una sola escritura
    pub(crate) fn write_snapshot(&self, store: &mut dyn KeyValueStore) {
        let mut entries = vec![
            (KEY_CURRENT_INDEX.to_owned(), self.current_index.to_string()),
            (KEY_REMAINING_TIME.to_owned(), self.remaining_ms.to_string()),
        ];
        if let Some(selected) = self.selected_option {
            entries.push((answer_key(self.current_index), selected.to_string()));
        }
        store.set_batch(entries);
    }

    /// Restaura índice, tiempo y respuestas; cada clave ausente o corrupta usa su valor por defecto.
    pub(crate) fn restore_from(&mut self, store: &dyn KeyValueStore) {
        let index = store.get_u64(KEY_CURRENT_INDEX).unwrap_or(0) as usize;
        self.current_index = if index < self.questions.len() {
            index
        } else {
            log::warn!("índice guardado {index} fuera de rango, se vuelve a la primera pregunta");
            0
        };

        let remaining = store.get_u64(KEY_REMAINING_TIME).unwrap_or(self.duration_ms);
        self.remaining_ms = if remaining > self.duration_ms {
            log::warn!("tiempo guardado {remaining} ms mayor que la duración, se recorta");
            self.duration_ms
        } else {
            remaining
        };

        for i in 0..self.questions.len() {
            match store.get_u64(&answer_key(i)) {
                Some(opt) if (opt as usize) < OPTION_COUNT => {
                    self.answers.insert(i, opt as usize);
                }
                Some(opt) => log::warn!("respuesta guardada {opt} para la pregunta {i} ignorada"),
                None => {}
            }
        }
        self.selected_option = self.answers.get(&self.current_index).copied();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::{running, two_questions};
    use crate::store::{KeyValueStore, MemoryStore};

    #[test]
    fn pause_persists_snapshot_and_stops_timer() {
        let mut store = MemoryStore::new();
        let mut session = running(two_questions(), &mut store);
        session.advance(&mut store).unwrap();
        session.select_option(3).unwrap();
        session.tick(1_000, &mut store).unwrap();

        session.pause(&mut store).unwrap();

        assert_eq!(session.phase(), SessionPhase::Paused);
        assert!(!session.is_running());
        assert_eq!(store.get_u64(KEY_CURRENT_INDEX), Some(1));
        assert_eq!(store.get_u64(KEY_REMAINING_TIME), Some(599_000));
        assert_eq!(store.get_u64(&answer_key(1)), Some(3));
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn pause_then_resume_round_trips() {
        let mut store = MemoryStore::new();
        let mut session = running(two_questions(), &mut store);
        session.select_option(0).unwrap();
        for _ in 0..5 {
            session.tick(1_000, &mut store).unwrap();
        }
        session.pause(&mut store).unwrap();
        let events = session.resume_from_pause(&mut store).unwrap();

        assert_eq!(session.phase(), SessionPhase::Running);
        assert!(session.is_running());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.remaining_ms(), 595_000);
        assert_eq!(session.selected_option(), Some(0));
        assert!(matches!(
            &events[0],
            SessionEvent::QuestionChanged { index: 0, restored_selection: Some(0), .. }
        ));
        assert!(events.contains(&SessionEvent::Feedback(Feedback {
            selected: 0,
            verdict: Verdict::Incorrect,
            correct_index: Some(1),
        })));
    }

    #[test]
    fn ticks_while_paused_are_ignored() {
        let mut store = MemoryStore::new();
        let mut session = running(two_questions(), &mut store);
        session.pause(&mut store).unwrap();
        let events = session.tick(1_000, &mut store).unwrap();
        assert!(events.is_empty());
        assert_eq!(session.remaining_ms(), SESSION_DURATION_MS);
    }

    #[test]
    fn pause_requires_running() {
        let mut store = MemoryStore::new();
        let mut session = running(two_questions(), &mut store);
        session.pause(&mut store).unwrap();
        assert!(matches!(
            session.pause(&mut store),
            Err(SessionError::InvalidPhase { operation: "pause", phase: SessionPhase::Paused })
        ));
        let mut idle = QuizSession::from_questions(two_questions()).unwrap();
        assert!(idle.resume_from_pause(&mut store).is_err());
    }

    #[test]
    fn flush_writes_without_changing_phase() {
        let mut store = MemoryStore::new();
        let mut session = running(two_questions(), &mut store);
        session.select_option(1).unwrap();
        session.flush(&mut store).unwrap();
        assert_eq!(session.phase(), SessionPhase::Running);
        assert!(store.has_saved_progress());
        assert_eq!(store.get_u64(&answer_key(0)), Some(1));
    }

    #[test]
    fn discard_clears_store_and_ends_session() {
        let mut store = MemoryStore::new();
        let mut session = running(two_questions(), &mut store);
        session.flush(&mut store).unwrap();
        session.discard(&mut store).unwrap();
        assert!(store.is_empty());
        assert_eq!(session.phase(), SessionPhase::Completed);
        assert!(session.summary().is_none());
    }
}
