/// Wall-clock timer for one tick phase. A disabled timer never reads the
/// clock and always reports zero, so `PerfStats` timings stay at their
/// defaults while metrics are off.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    started: Option<Instant>,
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy)]
struct Instant(f64);

#[cfg(target_arch = "wasm32")]
impl Instant {
    fn now() -> Self {
        Instant(js_sys::Date::now())
    }

    fn elapsed_ms(&self) -> f64 {
        js_sys::Date::now() - self.0
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy)]
struct Instant(std::time::Instant);

#[cfg(not(target_arch = "wasm32"))]
impl Instant {
    fn now() -> Self {
        Instant(std::time::Instant::now())
    }

    fn elapsed_ms(&self) -> f64 {
        self.0.elapsed().as_secs_f64() * 1000.0
    }
}

impl PerfTimer {
    pub(crate) fn start(enabled: bool) -> Self {
        PerfTimer {
            started: enabled.then(Instant::now),
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        self.started.map_or(0.0, |t| t.elapsed_ms())
    }
}
