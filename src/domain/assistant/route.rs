//! Intent to handler routing.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::intent::Intent;

/// Selects the handler that answers a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Support,
    Sales,
    Ordering,
    Handover,
    Greeting,
    Thanks,
    Farewell,
}

impl Route {
    /// Total over every intent. A missing intent goes to the handover handler.
    pub fn for_intent(intent: Option<Intent>) -> Route {
        match intent {
            Some(Intent::Support) => Route::Support,
            Some(Intent::Sales) => Route::Sales,
            Some(Intent::Ordering) => Route::Ordering,
            Some(Intent::Greeting) => Route::Greeting,
            Some(Intent::Thanks) => Route::Thanks,
            Some(Intent::Farewell) => Route::Farewell,
            Some(Intent::Handover) | None => Route::Handover,
        }
    }

    /// Routes a free-form label, falling back to handover when unknown.
    pub fn for_label(label: &str) -> Route {
        Route::for_intent(Intent::from_label(label))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Support => "support",
            Route::Sales => "sales",
            Route::Ordering => "ordering",
            Route::Handover => "handover",
            Route::Greeting => "greeting",
            Route::Thanks => "thanks",
            Route::Farewell => "farewell",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
