use crate::data::QuestionRepository;
use crate::model::SESSION_DURATION_MS;
use std::path::PathBuf;

pub const ENV_QUESTIONS: &str = "QUIZ_TIME_QUESTIONS";
pub const ENV_DURATION_SECS: &str = "QUIZ_TIME_DURATION_SECS";

/// Ajustes de arranque leídos del entorno
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub questions_path: Option<PathBuf>, // None = banco embebido
    pub duration_ms: u64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions_path: None,
            duration_ms: SESSION_DURATION_MS,
        }
    }
}

impl QuizConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables inyectable
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let questions_path = lookup(ENV_QUESTIONS)
            .filter(|s| !s.trim().is_empty())
            .map(|s| PathBuf::from(s.trim()));

        let duration_ms = match lookup(ENV_DURATION_SECS) {
            Some(raw) => match raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&secs| secs > 0)
                .and_then(|secs| secs.checked_mul(1000))
            {
                Some(ms) => ms,
                None => {
                    log::warn!("{ENV_DURATION_SECS}={raw:?} no es válido, se usan 10 minutos");
                    SESSION_DURATION_MS
                }
            },
            None => SESSION_DURATION_MS,
        };

        Self {
            questions_path,
            duration_ms,
        }
    }

    pub fn repository(&self) -> QuestionRepository {
        match &self.questions_path {
            Some(path) => QuestionRepository::from_file(path),
            None => QuestionRepository::embedded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(QuizConfig::from_lookup(lookup(&[])), QuizConfig::default());
    }

    #[test]
    fn reads_path_and_duration() {
        let cfg = QuizConfig::from_lookup(lookup(&[
            (ENV_QUESTIONS, " /tmp/preguntas.yaml "),
            (ENV_DURATION_SECS, "90"),
        ]));
        assert_eq!(cfg.questions_path, Some(PathBuf::from("/tmp/preguntas.yaml")));
        assert_eq!(cfg.duration_ms, 90_000);
    }

    #[test]
    fn invalid_duration_falls_back() {
        let cfg = QuizConfig::from_lookup(lookup(&[(ENV_DURATION_SECS, "cero"), (ENV_QUESTIONS, "  ")]));
        assert_eq!(cfg.duration_ms, SESSION_DURATION_MS);
        assert_eq!(cfg.questions_path, None);
    }

    #[test]
    fn huge_duration_falls_back_instead_of_overflowing() {
        let cfg = QuizConfig::from_lookup(lookup(&[(ENV_DURATION_SECS, "18446744073709552")]));
        assert_eq!(cfg.duration_ms, SESSION_DURATION_MS);

        let cfg = QuizConfig::from_lookup(lookup(&[(ENV_DURATION_SECS, "0")]));
        assert_eq!(cfg.duration_ms, SESSION_DURATION_MS);
    }
}
