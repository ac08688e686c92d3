mod diagnostics_service;

pub use diagnostics_service::{DiagnosticsService, EnvPresence};
