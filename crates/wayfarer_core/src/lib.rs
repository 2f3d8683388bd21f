pub mod error;
pub mod event;
pub mod preference;
pub mod session;
pub mod turn;

pub use error::{Result, WayfarerError};
pub use event::{ChatSubmission, SessionEvent};
pub use preference::LengthPreference;
pub use session::{Session, SessionConfig, SessionId};
pub use turn::{TokenUsage, Turn};
