use crate::log::source::EngineObject;

/// Host console, seen as the three channels the engine exposes.
///
/// Each channel takes the already-formatted line plus an optional engine
/// object so the host tooling can trace the record back to its origin.
/// Rendering and storage are the host's business; this crate only routes.
pub trait ConsoleSink: Send + Sync {
    fn info(&self, message: &str, context: Option<&dyn EngineObject>);
    fn warning(&self, message: &str, context: Option<&dyn EngineObject>);
    fn error(&self, message: &str, context: Option<&dyn EngineObject>);
}
