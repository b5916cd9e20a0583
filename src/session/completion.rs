use super::*;

impl QuizSession {
    /// Estado terminal: revela la correcta de la última pregunta mostrada,
    /// para el temporizador y borra el progreso guardado.
    pub(crate) fn complete(
        &mut self,
        reason: FinishReason,
        store: &mut dyn KeyValueStore,
    ) -> Vec<SessionEvent> {
        // Por tiempo, la pregunta en curso solo cuenta si había algo marcado
        if let Some(selected) = self.selected_option {
            self.answers.insert(self.current_index, selected);
        }

        self.ticker.stop();
        self.phase = SessionPhase::Completed;
        store.clear();

        let summary = self.build_summary(reason);
        log::info!(
            "quiz terminado ({:?}): {}/{} correctas, {} respondidas",
            reason,
            summary.correct,
            summary.total,
            summary.answered
        );
        self.summary = Some(summary.clone());

        vec![SessionEvent::QuizFinished {
            reason,
            last_index: self.current_index,
            correct_index: self.current_question().correct_index,
            summary,
        }]
    }

    fn build_summary(&self, reason: FinishReason) -> SessionSummary {
        let correct = self
            .answers
            .iter()
            .filter(|(idx, opt)| {
                self.questions
                    .get(**idx)
                    .map(|q| q.is_correct(**opt))
                    .unwrap_or(false)
            })
            .count();

        SessionSummary {
            total: self.questions.len(),
            answered: self.answers.len(),
            correct,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::{running, two_questions};
    use crate::store::MemoryStore;

    #[test]
    fn summary_counts_correct_answers() {
        let mut store = MemoryStore::new();
        let mut session = running(two_questions(), &mut store);
        session.select_option(1).unwrap();
        session.advance(&mut store).unwrap();
        session.select_option(2).unwrap();
        session.advance(&mut store).unwrap();

        let summary = session.summary().expect("summary");
        assert_eq!(summary.total, 2);
        assert_eq!(summary.answered, 2);
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.reason, FinishReason::LastQuestion);
    }

    #[test]
    fn timeout_counts_current_selection_only_if_marked() {
        let mut store = MemoryStore::new();
        let mut session = running(two_questions(), &mut store);
        session.select_option(1).unwrap();
        session.advance(&mut store).unwrap();
        // Segunda pregunta sin marcar cuando se acaba el tiempo
        session.tick(SESSION_DURATION_MS, &mut store).unwrap();
        let summary = session.summary().expect("summary");
        assert_eq!(summary.answered, 1);
        assert_eq!(summary.reason, FinishReason::TimeUp);
    }
}
