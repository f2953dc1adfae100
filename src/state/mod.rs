pub mod manager;
pub mod persistence;

pub use manager::StateManager;
pub use persistence::{load_state, save_state, AppState};
