//! Diagnostic context handed to each lifecycle operation

/// Sink for the diagnostics a lifecycle operation emits
pub trait ReconcileContext: Send + Sync {
    fn debug(&self, message: &str);

    fn info(&self, message: &str);

    fn warning(&self, message: &str);
}

/// Context that forwards to the `log` facade, tagged with the resource type
#[derive(Debug, Clone, Copy)]
pub struct LogContext {
    type_name: &'static str,
}

impl LogContext {
    pub fn new(type_name: &'static str) -> Self {
        Self { type_name }
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::new(super::RESOURCE_TYPE)
    }
}

impl ReconcileContext for LogContext {
    fn debug(&self, message: &str) {
        log::debug!("{}: {}", self.type_name, message);
    }

    fn info(&self, message: &str) {
        log::info!("{}: {}", self.type_name, message);
    }

    fn warning(&self, message: &str) {
        log::warn!("{}: {}", self.type_name, message);
    }
}

/// Context that keeps every message, for assertions in tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingContext {
    messages: std::sync::Mutex<Vec<(log::Level, String)>>,
}

#[cfg(test)]
impl RecordingContext {
    pub fn messages(&self) -> Vec<(log::Level, String)> {
        self.messages.lock().unwrap().clone()
    }

    fn push(&self, level: log::Level, message: &str) {
        self.messages.lock().unwrap().push((level, message.to_string()));
    }
}

#[cfg(test)]
impl ReconcileContext for RecordingContext {
    fn debug(&self, message: &str) {
        self.push(log::Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.push(log::Level::Info, message);
    }

    fn warning(&self, message: &str) {
        self.push(log::Level::Warn, message);
    }
}
