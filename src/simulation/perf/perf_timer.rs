//! Phase clock for frame timing. Reads `Date.now()` in the browser and a
//! process-wide `Instant` epoch in native builds.

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Splits one frame into consecutive phases.
pub(crate) struct PhaseClock {
    frame_start: f64,
    phase_start: f64,
}

impl PhaseClock {
    pub(crate) fn start() -> Self {
        let now = now_ms();
        PhaseClock { frame_start: now, phase_start: now }
    }

    /// Close the current phase and return its length in ms.
    pub(crate) fn lap(&mut self) -> f64 {
        let now = now_ms();
        let phase = now - self.phase_start;
        self.phase_start = now;
        phase.max(0.0)
    }

    /// Time since `start`, in ms.
    pub(crate) fn total(&self) -> f64 {
        (now_ms() - self.frame_start).max(0.0)
    }
}
