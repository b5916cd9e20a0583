// src/store.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const KEY_CURRENT_INDEX: &str = "current_question_index";
pub const KEY_REMAINING_TIME: &str = "remaining_time_ms";

/// Clave de la respuesta guardada para una pregunta
pub fn answer_key(question_index: usize) -> String {
    format!("answer_{question_index}")
}

/// Almacén clave-valor donde la sesión guarda su progreso.
///
/// Claves y valores son texto; quien lee se encarga de validar el tipo.
pub trait KeyValueStore {
    fn get_string(&self, key: &str) -> Option<String>;

    fn set_string(&mut self, key: &str, value: String);

    /// Borra todas las claves.
    fn clear(&mut self);

    fn is_empty(&self) -> bool;

    /// Escribe varias claves como una sola operación.
    fn set_batch(&mut self, entries: Vec<(String, String)>) {
        for (key, value) in entries {
            self.set_string(&key, value);
        }
    }

    /// Lee un entero; `None` si falta o no se puede parsear.
    fn get_u64(&self, key: &str) -> Option<u64> {
        let raw = self.get_string(key)?;
        match raw.trim().parse::<u64>() {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!("valor corrupto en '{key}' ({raw:?}): {e}");
                None
            }
        }
    }

    fn set_u64(&mut self, key: &str, value: u64) {
        self.set_string(key, value.to_string());
    }
}

/// Implementación en memoria; la app la guarda entera con la persistencia de eframe.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// ¿Hay una sesión a medias que se pueda continuar?
    pub fn has_saved_progress(&self) -> bool {
        self.entries.contains_key(KEY_CURRENT_INDEX) || self.entries.contains_key(KEY_REMAINING_TIME)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn set_batch(&mut self, entries: Vec<(String, String)>) {
        self.entries.extend(entries);
    }
}
