pub mod finished;
pub mod load_error;
pub mod quiz;
pub mod welcome;
