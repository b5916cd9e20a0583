// src/data.rs

use crate::model::{OPTION_COUNT, QuestionRecord};
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;

/// Banco de preguntas embebido en el binario
const EMBEDDED_QUESTIONS: &str = include_str!("data/questions.yaml");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("no se pudo leer el banco de preguntas {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("banco de preguntas mal formado: {0}")]
    Malformed(#[from] serde_yaml::Error),
    #[error("la pregunta {index} tiene {count} opciones (se esperan 4)")]
    OptionCount { index: usize, count: usize },
    #[error("la pregunta {index} marca como correcta la opción {answer}, fuera de rango")]
    AnswerOutOfRange { index: usize, answer: usize },
}

#[derive(Debug, Clone)]
enum Source {
    Embedded,
    Inline(String),
    File(PathBuf),
}

/// Acceso de solo lectura al banco de preguntas.
///
/// La primera llamada a [`QuestionRepository::load`] parsea y valida; las
/// siguientes devuelven la copia en caché.
#[derive(Debug)]
pub struct QuestionRepository {
    source: Source,
    cache: OnceLock<Vec<QuestionRecord>>,
}

impl QuestionRepository {
    pub fn embedded() -> Self {
        Self::with_source(Source::Embedded)
    }

    pub fn from_yaml_str(yaml: impl Into<String>) -> Self {
        Self::with_source(Source::Inline(yaml.into()))
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::with_source(Source::File(path.into()))
    }

    /// Repositorio ya cargado (útil para tests y para bancos generados)
    pub fn from_records(records: Vec<QuestionRecord>) -> Result<Self, LoadError> {
        validate(&records)?;
        let repo = Self::with_source(Source::Inline(String::new()));
        let _ = repo.cache.set(records);
        Ok(repo)
    }

    fn with_source(source: Source) -> Self {
        Self {
            source,
            cache: OnceLock::new(),
        }
    }

    /// Devuelve la lista ordenada de preguntas.
    pub fn load(&self) -> Result<Vec<QuestionRecord>, LoadError> {
        if let Some(records) = self.cache.get() {
            return Ok(records.clone());
        }

        let records = parse_questions(&self.read_source()?)?;
        log::info!("banco de preguntas cargado: {} preguntas", records.len());
        Ok(self.cache.get_or_init(|| records).clone())
    }

    fn read_source(&self) -> Result<String, LoadError> {
        match &self.source {
            Source::Embedded => Ok(EMBEDDED_QUESTIONS.to_owned()),
            Source::Inline(yaml) => Ok(yaml.clone()),
            Source::File(path) => std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            }),
        }
    }
}

/// Parsea y valida el YAML del banco de preguntas
pub fn parse_questions(yaml: &str) -> Result<Vec<QuestionRecord>, LoadError> {
    // Un documento vacío es un banco vacío, no un error de formato
    if yaml.trim().is_empty() {
        return Ok(Vec::new());
    }
    let records: Vec<QuestionRecord> = serde_yaml::from_str(yaml)?;
    validate(&records)?;
    Ok(records)
}

fn validate(records: &[QuestionRecord]) -> Result<(), LoadError> {
    for (index, q) in records.iter().enumerate() {
        if q.options.len() != OPTION_COUNT {
            return Err(LoadError::OptionCount {
                index,
                count: q.options.len(),
            });
        }
        if q.correct_index >= OPTION_COUNT {
            return Err(LoadError::AnswerOutOfRange {
                index,
                answer: q.correct_index,
            });
        }
    }
    Ok(())
}
