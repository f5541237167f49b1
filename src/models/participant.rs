//! Participant model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Participant database model
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    /// Self-declared goal label, free-form as entered at registration
    pub goal: Option<String>,
    /// Registration confirmed (paid)
    pub confirmed: bool,
}

/// Anything carrying a goal label can be distributed into startblocks.
pub trait HasGoal {
    fn goal(&self) -> Option<&str>;
}

impl HasGoal for Participant {
    fn goal(&self) -> Option<&str> {
        self.goal.as_deref()
    }
}

impl<T: HasGoal> HasGoal for &T {
    fn goal(&self) -> Option<&str> {
        (**self).goal()
    }
}
