/// Fixed timestep accumulator.
/// Game logic ticks at a constant rate whatever the display refresh rate is,
/// so per-tick quantities (walk speed in px/tick) mean the same on every device.
pub struct FixedTimestep {
    /// The fixed delta time per tick, in seconds.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    /// Logic time elapsed since creation, in milliseconds.
    elapsed_ms: f64,
}

impl FixedTimestep {
    /// Upper bound on ticks run for one frame after a long stall.
    pub const MAX_STEPS: u32 = 10;

    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            elapsed_ms: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    /// Negative or NaN frame deltas (clock jumps) count as zero.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = if frame_dt.is_nan() { 0.0 } else { frame_dt.max(0.0) };
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * Self::MAX_STEPS as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        self.elapsed_ms += steps as f64 * self.dt as f64 * 1000.0;
        steps
    }

    /// The fixed delta time in seconds.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Logic time consumed by all steps so far, in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }
}
