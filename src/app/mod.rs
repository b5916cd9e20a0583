use crate::config::QuizConfig;
use crate::data::QuestionRepository;
use crate::model::{AppState, SessionPhase, StartMode};
use crate::session::{QuizSession, SessionError, SessionEvent};
use crate::store::MemoryStore;
use crate::view_models::QuizView;

// Submódulos
pub mod actions;
pub mod lifecycle;

/// Clave bajo la que eframe guarda el almacén de progreso
pub const STORE_KEY: &str = "quiz_time_store";

pub struct QuizApp {
    pub config: QuizConfig,
    pub repository: QuestionRepository,
    pub store: MemoryStore,
    pub session: Option<QuizSession>,
    pub view: QuizView,
    pub state: AppState,
    pub message: String,
    pub load_error: Option<String>,
    pub focused: bool,
}

impl QuizApp {
    pub fn new(config: QuizConfig, store: MemoryStore) -> Self {
        let repository = config.repository();
        Self {
            config,
            repository,
            store,
            session: None,
            view: QuizView::default(),
            state: AppState::Welcome,
            message: String::new(),
            load_error: None,
            focused: true,
        }
    }

    /// Recupera el almacén guardado por eframe en la ejecución anterior
    pub fn from_creation_context(cc: &eframe::CreationContext<'_>, config: QuizConfig) -> Self {
        let store: MemoryStore = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, STORE_KEY))
            .unwrap_or_default();
        if store.has_saved_progress() {
            log::info!("hay progreso guardado de una sesión anterior");
        }
        Self::new(config, store)
    }

    /// ¿Mostrar "Continuar" en la bienvenida?
    pub fn has_saved_progress(&self) -> bool {
        self.store.has_saved_progress()
    }

    pub fn session_phase(&self) -> Option<SessionPhase> {
        self.session.as_ref().map(QuizSession::phase)
    }

    /// Crea la sesión (cargando el banco) y la arranca
    fn open_session(&mut self, mode: StartMode) -> Result<Vec<SessionEvent>, SessionError> {
        let mut session =
            QuizSession::new(&self.repository)?.with_duration_ms(self.config.duration_ms);
        let events = session.start(mode, &mut self.store)?;
        self.session = Some(session);
        Ok(events)
    }
}
