//! Time as supplied by the caller.
//!
//! Detectors never read a clock on their own. Every call receives `now`
//! from the control loop, counted in milliseconds on a 32-bit counter. The
//! counter is allowed to overflow: all distances are measured with wrapping
//! subtraction, so a window spanning the overflow is measured correctly as
//! long as the source is monotonic modulo 2^32.

/// Milliseconds on a free-running 32-bit counter.
pub type Millis = u32;

/// Time passed between `since` and `now`, surviving counter overflow.
#[must_use]
pub fn elapsed(now: Millis, since: Millis) -> Millis {
    now.wrapping_sub(since)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_now_is_after_since_it_returns_the_difference() {
        assert_eq!(elapsed(5100, 5000), 100);
        assert_eq!(elapsed(5000, 5000), 0);
    }

    #[test]
    fn when_counter_overflowed_in_between_it_returns_the_distance_across_it() {
        assert_eq!(elapsed(20, u32::MAX - 10), 31);
        assert_eq!(elapsed(0, u32::MAX), 1);
    }

    #[test]
    fn when_now_appears_before_since_it_wraps_to_a_large_distance() {
        assert_eq!(elapsed(10, 20), u32::MAX - 9);
    }
}
