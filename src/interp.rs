// Linear interpolation helpers for servo sweep timing.

/// Map `value` from the range [in_min, in_max] to [out_min, out_max].
pub fn translate(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Per-degree pause for a sweep speed in percent, clamped to 0..=100.
///
/// Inverse linear: 0 % is the slowest sweep at 100 ms per degree, 100 %
/// steps with no pause at all.
pub fn step_delay_ms(speed_percent: u8) -> u64 {
    let speed = speed_percent.min(100);
    translate(speed as f64, 0.0, 100.0, 100.0, 0.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_maps_endpoints_and_midpoints() {
        assert_eq!(translate(0.0, 0.0, 100.0, 100.0, 0.0), 100.0);
        assert_eq!(translate(100.0, 0.0, 100.0, 100.0, 0.0), 0.0);
        assert_eq!(translate(50.0, 0.0, 100.0, 100.0, 0.0), 50.0);
        assert_eq!(translate(5.0, 0.0, 10.0, 0.0, 180.0), 90.0);
    }

    #[test]
    fn slower_speed_means_longer_pause() {
        assert_eq!(step_delay_ms(0), 100);
        assert_eq!(step_delay_ms(70), 30);
        assert_eq!(step_delay_ms(100), 0);
    }

    #[test]
    fn overspeed_clamps_to_fastest() {
        assert_eq!(step_delay_ms(255), 0);
    }
}
