// src/view_models.rs

use crate::model::{FinishReason, OPTION_COUNT, SessionSummary};
use crate::session::{SessionEvent, Verdict, format_remaining};

/// Cómo se pinta cada opción
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OptionState {
    #[default]
    Neutral,
    Correct,
    Wrong,
}

/// Lo que la pantalla de quiz necesita, construido a partir de las señales de la sesión
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizView {
    pub index: usize,          // 0-based
    pub total: usize,
    pub prompt: String,
    pub options: [String; OPTION_COUNT],
    pub option_states: [OptionState; OPTION_COUNT],
    pub selected: Option<usize>,
    pub timer: String,         // "MM:SS"
    pub finished: Option<FinishedView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinishedView {
    pub reason: FinishReason,
    pub summary: SessionSummary,
}

impl Default for QuizView {
    fn default() -> Self {
        Self {
            index: 0,
            total: 0,
            prompt: String::new(),
            options: Default::default(),
            option_states: [OptionState::Neutral; OPTION_COUNT],
            selected: None,
            timer: format_remaining(0),
            finished: None,
        }
    }
}

impl QuizView {
    pub fn apply(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::QuestionChanged {
                index,
                total,
                prompt,
                options,
                restored_selection,
            } => {
                self.index = *index;
                self.total = *total;
                self.prompt = prompt.clone();
                self.options = options.clone();
                self.selected = *restored_selection;
                self.option_states = [OptionState::Neutral; OPTION_COUNT];
            }
            SessionEvent::Feedback(feedback) => {
                // Se repinta desde cero: la última selección manda
                self.option_states = [OptionState::Neutral; OPTION_COUNT];
                self.selected = Some(feedback.selected);
                match feedback.verdict {
                    Verdict::Correct => self.mark(feedback.selected, OptionState::Correct),
                    Verdict::Incorrect => {
                        self.mark(feedback.selected, OptionState::Wrong);
                        if let Some(correct) = feedback.correct_index {
                            self.mark(correct, OptionState::Correct);
                        }
                    }
                }
            }
            SessionEvent::TimerUpdated { display, .. } => {
                self.timer = display.clone();
            }
            SessionEvent::QuizFinished {
                reason,
                correct_index,
                summary,
                ..
            } => {
                self.mark(*correct_index, OptionState::Correct);
                self.finished = Some(FinishedView {
                    reason: *reason,
                    summary: summary.clone(),
                });
            }
        }
    }

    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a SessionEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    fn mark(&mut self, option: usize, state: OptionState) {
        if let Some(slot) = self.option_states.get_mut(option) {
            *slot = state;
        }
    }

    pub fn progress_label(&self) -> String {
        format!("Pregunta {}/{}", self.index + 1, self.total)
    }

    /// Fracción para la barra de progreso
    pub fn progress_fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (self.index + 1) as f32 / self.total as f32
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total
    }
}

impl FinishedView {
    pub fn title(&self) -> &'static str {
        match self.reason {
            FinishReason::LastQuestion => "Quiz completado",
            FinishReason::TimeUp => "¡Se acabó el tiempo!",
        }
    }

    pub fn label(&self) -> String {
        format!(
            "Has respondido {} de {} preguntas y acertado {}.",
            self.summary.answered, self.summary.total, self.summary.correct
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Feedback;

    fn question_changed(index: usize, restored: Option<usize>) -> SessionEvent {
        SessionEvent::QuestionChanged {
            index,
            total: 4,
            prompt: "¿?".into(),
            options: ["a".into(), "b".into(), "c".into(), "d".into()],
            restored_selection: restored,
        }
    }

    #[test]
    fn wrong_answer_marks_both_options() {
        let mut view = QuizView::default();
        view.apply_all(&[
            question_changed(0, None),
            SessionEvent::Feedback(Feedback {
                selected: 2,
                verdict: Verdict::Incorrect,
                correct_index: Some(0),
            }),
        ]);
        assert_eq!(
            view.option_states,
            [OptionState::Correct, OptionState::Neutral, OptionState::Wrong, OptionState::Neutral]
        );
    }

    #[test]
    fn reselection_resets_previous_colors() {
        let mut view = QuizView::default();
        view.apply(&question_changed(1, None));
        view.apply(&SessionEvent::Feedback(Feedback {
            selected: 2,
            verdict: Verdict::Incorrect,
            correct_index: Some(3),
        }));
        view.apply(&SessionEvent::Feedback(Feedback {
            selected: 3,
            verdict: Verdict::Correct,
            correct_index: None,
        }));
        assert_eq!(view.selected, Some(3));
        assert_eq!(
            view.option_states,
            [OptionState::Neutral, OptionState::Neutral, OptionState::Neutral, OptionState::Correct]
        );
        assert_eq!(view.progress_label(), "Pregunta 2/4");
        assert!((view.progress_fraction() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn finish_reveals_correct_option() {
        let mut view = QuizView::default();
        view.apply(&question_changed(3, None));
        view.apply(&SessionEvent::QuizFinished {
            reason: FinishReason::TimeUp,
            last_index: 3,
            correct_index: 1,
            summary: SessionSummary {
                total: 4,
                answered: 2,
                correct: 1,
                reason: FinishReason::TimeUp,
            },
        });
        assert_eq!(view.option_states[1], OptionState::Correct);
        let finished = view.finished.expect("finished");
        assert_eq!(finished.title(), "¡Se acabó el tiempo!");
        assert_eq!(finished.label(), "Has respondido 2 de 4 preguntas y acertado 1.");
    }
}
