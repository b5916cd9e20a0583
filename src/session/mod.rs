use crate::data::{LoadError, QuestionRepository};
use crate::model::{
    FinishReason, OPTION_COUNT, QuestionRecord, SESSION_DURATION_MS, SessionPhase, SessionSummary,
    StartMode,
};
use crate::store::{KeyValueStore, answer_key, KEY_CURRENT_INDEX, KEY_REMAINING_TIME};
use std::collections::BTreeMap;
use thiserror::Error;

// Submódulos
pub mod completion;
pub mod navigation;
pub mod progress;
pub mod timer;

pub use timer::{Ticker, format_remaining};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("el quiz no tiene preguntas")]
    EmptyQuiz,
    #[error("'{operation}' no está permitido con la sesión en estado {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: SessionPhase,
    },
    #[error("la opción {0} no existe (válidas: 0 a 3)")]
    OptionOutOfRange(usize),
    #[error(transparent)]
    Load(#[from] LoadError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Resultado de marcar una opción.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub selected: usize,
    pub verdict: Verdict,
    /// Solo cuando la respuesta es incorrecta
    pub correct_index: Option<usize>,
}

/// Señales hacia la capa de presentación
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    QuestionChanged {
        index: usize,
        total: usize,
        prompt: String,
        options: [String; OPTION_COUNT],
        restored_selection: Option<usize>,
    },
    Feedback(Feedback),
    TimerUpdated {
        remaining_ms: u64,
        display: String,
    },
    QuizFinished {
        reason: FinishReason,
        last_index: usize,
        correct_index: usize,
        summary: SessionSummary,
    },
}

/// Máquina de estados de una sesión de quiz.
///
/// `Idle → Running → (Paused ⇄ Running) → Completed`. El almacén se recibe en
/// cada operación que persiste; la sesión es su único escritor.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<QuestionRecord>,
    current_index: usize,
    selected_option: Option<usize>,
    remaining_ms: u64,
    duration_ms: u64,
    answers: BTreeMap<usize, usize>, // pregunta -> opción elegida
    phase: SessionPhase,
    ticker: Ticker,
    summary: Option<SessionSummary>,
}

impl QuizSession {
    /// Carga las preguntas y deja la sesión en `Idle`.
    pub fn new(repository: &QuestionRepository) -> Result<Self, SessionError> {
        Self::from_questions(repository.load()?)
    }

    pub fn from_questions(questions: Vec<QuestionRecord>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            log::warn!("se intentó crear una sesión sin preguntas");
            return Err(SessionError::EmptyQuiz);
        }
        Ok(Self {
            questions,
            current_index: 0,
            selected_option: None,
            remaining_ms: SESSION_DURATION_MS,
            duration_ms: SESSION_DURATION_MS,
            answers: BTreeMap::new(),
            phase: SessionPhase::Idle,
            ticker: Ticker::default(),
            summary: None,
        })
    }

    /// Cambia la duración total (por configuración). Solo tiene efecto en `Idle`.
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        if self.phase == SessionPhase::Idle {
            self.duration_ms = duration_ms;
            self.remaining_ms = duration_ms;
        }
        self
    }

    /// `Idle → Running`, desde cero o retomando lo guardado.
    pub fn start(
        &mut self,
        mode: StartMode,
        store: &mut dyn KeyValueStore,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        self.expect_phase("start", &[SessionPhase::Idle])?;

        match mode {
            StartMode::Fresh => {
                self.current_index = 0;
                self.remaining_ms = self.duration_ms;
                self.selected_option = None;
                self.answers.clear();
                store.clear();
                log::info!("sesión nueva: {} preguntas", self.questions.len());
            }
            StartMode::Resume => {
                self.restore_from(store);
                log::info!(
                    "sesión retomada en la pregunta {} con {} ms",
                    self.current_index + 1,
                    self.remaining_ms
                );
            }
        }

        Ok(self.enter_running(store))
    }

    // ----------- Accesores -----------

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running && self.ticker.is_running()
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &QuestionRecord {
        &self.questions[self.current_index]
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn answers(&self) -> &BTreeMap<usize, usize> {
        &self.answers
    }

    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    // ----------- Helpers internos -----------

    fn expect_phase(
        &self,
        operation: &'static str,
        allowed: &[SessionPhase],
    ) -> Result<(), SessionError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(SessionError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    /// Arranca el temporizador y emite la pregunta actual. Si el tiempo
    /// restaurado ya está agotado, termina en el acto.
    fn enter_running(&mut self, store: &mut dyn KeyValueStore) -> Vec<SessionEvent> {
        self.phase = SessionPhase::Running;
        self.ticker.start();

        let mut events = self.display_current();
        events.push(self.timer_event());
        if self.remaining_ms == 0 {
            events.extend(self.complete(FinishReason::TimeUp, store));
        }
        events
    }

    /// Señales para pintar la pregunta actual con su respuesta previa, si la hay
    fn display_current(&self) -> Vec<SessionEvent> {
        let q = self.current_question();
        let mut events = vec![SessionEvent::QuestionChanged {
            index: self.current_index,
            total: self.questions.len(),
            prompt: q.text.clone(),
            options: q.option_array(),
            restored_selection: self.selected_option,
        }];
        if let Some(selected) = self.selected_option {
            events.push(SessionEvent::Feedback(self.evaluate(selected)));
        }
        events
    }

    fn evaluate(&self, selected: usize) -> Feedback {
        let q = self.current_question();
        if q.is_correct(selected) {
            Feedback {
                selected,
                verdict: Verdict::Correct,
                correct_index: None,
            }
        } else {
            Feedback {
                selected,
                verdict: Verdict::Incorrect,
                correct_index: Some(q.correct_index),
            }
        }
    }

    fn timer_event(&self) -> SessionEvent {
        SessionEvent::TimerUpdated {
            remaining_ms: self.remaining_ms,
            display: format_remaining(self.remaining_ms),
        }
    }
}
