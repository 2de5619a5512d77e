//! Turn handling and move hints for kibitz.

pub mod advisor;
pub mod session;

pub use advisor::{Advice, GameStatus, Suggestion, SuggestionKind, advise, game_status, suggest};
pub use session::{ClickOutcome, Selection, Session};
