pub mod app;
pub mod config;
pub mod data;
pub mod model;
pub mod session;
pub mod store;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use data::{LoadError, QuestionRepository};
pub use session::{QuizSession, SessionError, SessionEvent};
pub use store::{KeyValueStore, MemoryStore};
