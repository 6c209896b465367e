use std::time::{Duration, Instant};

/// Single-shot wall-clock measurement on the monotonic clock. No warm-up,
/// no sampling loop; repetition is the caller's concern.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}
