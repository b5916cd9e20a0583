use super::*;

impl QuizSession {
    /// Marca una opción de la pregunta actual. La última selección gana.
    pub fn select_option(&mut self, index: usize) -> Result<Vec<SessionEvent>, SessionError> {
        self.expect_phase("select_option", &[SessionPhase::Running])?;
        if index >= OPTION_COUNT {
            return Err(SessionError::OptionOutOfRange(index));
        }

        self.selected_option = Some(index);
        let feedback = self.evaluate(index);
        log::debug!(
            "pregunta {}: opción {} → {:?}",
            self.current_index + 1,
            index,
            feedback.verdict
        );
        Ok(vec![SessionEvent::Feedback(feedback)])
    }

    /// "Siguiente": guarda la respuesta y pasa de pregunta, o termina en la última.
    pub fn advance(
        &mut self,
        store: &mut dyn KeyValueStore,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        self.expect_phase("advance", &[SessionPhase::Running])?;

        self.record_current_answer(store);

        if self.is_last_question() {
            return Ok(self.complete(FinishReason::LastQuestion, store));
        }

        self.current_index += 1;
        self.selected_option = self.answers.get(&self.current_index).copied();
        self.write_snapshot(store);

        Ok(self.display_current())
    }

    /// Guarda la selección actual bajo el índice actual; sin selección no guarda nada
    pub(crate) fn record_current_answer(&mut self, store: &mut dyn KeyValueStore) {
        if let Some(selected) = self.selected_option {
            self.answers.insert(self.current_index, selected);
            store.set_u64(&answer_key(self.current_index), selected as u64);
        }
    }
}
