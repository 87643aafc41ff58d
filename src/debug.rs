use std::time::Instant;

/// A simple RAII timer for the slow stages of a run.
/// When it goes out of scope it logs, at debug level, how long the stage took.
pub struct Tracer {
    name: &'static str,
    start_time: Instant,
}

impl Tracer {
    pub fn new(name: &'static str) -> Self {
        Tracer {
            name,
            start_time: Instant::now(),
        }
    }
}

impl Drop for Tracer {
    fn drop(&mut self) {
        let elapsed = self.start_time.elapsed();
        log::debug!("[Trace] {}: {:.2?}", self.name, elapsed);
    }
}
