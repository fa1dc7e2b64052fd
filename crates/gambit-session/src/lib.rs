//! Game session management on top of the chess rules in `gambit-core`.

pub mod config;
pub mod error;
pub mod record;
pub mod session;

pub use config::SessionConfig;
pub use error::SessionError;
pub use record::{CapturedMaterial, MoveRecord};
pub use session::{GameSession, SessionView};
