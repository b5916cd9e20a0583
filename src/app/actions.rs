use super::*;

impl QuizApp {
    /// Botones "Empezar" / "Continuar" de la bienvenida
    pub fn start_quiz(&mut self, is_fresh_start: bool) {
        let mode = StartMode::from_fresh_flag(is_fresh_start);
        self.view = QuizView::default();
        self.message.clear();

        match self.open_session(mode) {
            Ok(events) => {
                self.load_error = None;
                self.state = AppState::Quiz;
                self.handle_events(&events);
            }
            Err(SessionError::Load(e)) => {
                log::error!("no se pudo cargar el banco de preguntas: {e}");
                self.load_error = Some(e.to_string());
                self.state = AppState::LoadFailed;
            }
            Err(e) => {
                log::error!("no se pudo iniciar el quiz: {e}");
                self.message = format!("⚠ {e}");
            }
        }
    }

    pub fn choose_option(&mut self, option: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let result = session.select_option(option);
        self.apply_result(result);
    }

    /// Botón "Siguiente" / "Finalizar"
    pub fn next_question(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let result = session.advance(&mut self.store);
        self.apply_result(result);
    }

    /// Abandona la sesión en curso y borra el progreso
    pub fn abandon_quiz(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if let Err(e) = session.discard(&mut self.store) {
                log::warn!("no se pudo abandonar la sesión: {e}");
            }
        }
        self.back_to_welcome();
    }

    pub fn back_to_welcome(&mut self) {
        self.session = None;
        self.view = QuizView::default();
        self.state = AppState::Welcome;
        self.message.clear();
        self.load_error = None;
    }

    pub(crate) fn apply_result(&mut self, result: Result<Vec<SessionEvent>, SessionError>) {
        match result {
            Ok(events) => self.handle_events(&events),
            Err(e) => {
                log::warn!("acción rechazada: {e}");
                self.message = format!("⚠ {e}");
            }
        }
    }

    pub(crate) fn handle_events(&mut self, events: &[SessionEvent]) {
        self.view.apply_all(events);
        if events
            .iter()
            .any(|e| matches!(e, SessionEvent::QuizFinished { .. }))
        {
            self.state = AppState::Finished;
        }
    }
}
