//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{LlmPort, RandomPort};
use crate::use_cases;

/// Main application state.
///
/// Holds all use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub spawn: use_cases::SpawnUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    ///
    /// `llm` is used as given; wrap it in a retry client beforehand if retries
    /// are wanted.
    pub fn new(llm: Arc<dyn LlmPort>, random: Arc<dyn RandomPort>, temperature: f32) -> Self {
        let spawn = use_cases::SpawnUseCases::new(Arc::new(
            use_cases::spawn::SpawnMonster::new(llm, random).with_temperature(temperature),
        ));

        Self {
            use_cases: UseCases { spawn },
        }
    }
}
