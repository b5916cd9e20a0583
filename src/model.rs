use serde::{Deserialize, Serialize};

/// Número fijo de opciones por pregunta
pub const OPTION_COUNT: usize = 4;

/// Duración de la sesión: 10 minutos en milisegundos
pub const SESSION_DURATION_MS: u64 = 600_000;

/// Intervalo del temporizador
pub const TICK_INTERVAL_MS: u64 = 1_000;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    #[serde(rename = "question")]
    pub text: String,           // Enunciado
    pub options: Vec<String>,   // Siempre 4 opciones
    #[serde(rename = "answer")]
    pub correct_index: usize,   // Índice 0-based de la opción correcta
}

impl QuestionRecord {
    pub fn new(text: impl Into<String>, options: [&str; OPTION_COUNT], correct_index: usize) -> Self {
        Self {
            text: text.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index,
        }
    }

    pub fn is_correct(&self, option: usize) -> bool {
        self.correct_index == option
    }

    /// Copia las opciones en un array fijo (las preguntas ya vienen validadas)
    pub fn option_array(&self) -> [String; OPTION_COUNT] {
        std::array::from_fn(|i| self.options.get(i).cloned().unwrap_or_default())
    }
}

/// Intención con la que se abre la sesión
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartMode {
    Fresh,
    Resume,
}

impl StartMode {
    /// Traduce el flag `is_fresh_start` de la pantalla de entrada
    pub fn from_fresh_flag(is_fresh_start: bool) -> Self {
        if is_fresh_start {
            StartMode::Fresh
        } else {
            StartMode::Resume
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Running,
    Paused,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinishReason {
    LastQuestion, // "Siguiente" en la última pregunta
    TimeUp,       // el temporizador llegó a 0
}

/// Resumen en memoria de una sesión terminada (no se persiste)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
    pub reason: FinishReason,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Welcome,
    Quiz,
    Finished,
    LoadFailed,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Running => "running",
            SessionPhase::Paused => "paused",
            SessionPhase::Completed => "completed",
        };
        f.write_str(name)
    }
}
