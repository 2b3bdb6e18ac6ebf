use crate::domain::ports::LineSink;
use crate::utils::error::Result;
use std::sync::OnceLock;

pub const STARTUP_MESSAGE: &str = "University System is running.";

#[derive(Debug)]
pub struct UniversitySystem {
    _private: (),
}

impl UniversitySystem {
    /// Lazily creates the process-wide instance; later calls return the same one.
    pub fn instance() -> &'static UniversitySystem {
        static INSTANCE: OnceLock<UniversitySystem> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            tracing::debug!("Initializing university system");
            UniversitySystem { _private: () }
        })
    }

    pub fn display_message(&self, sink: &mut dyn LineSink) -> Result<()> {
        sink.emit(STARTUP_MESSAGE)
    }
}
