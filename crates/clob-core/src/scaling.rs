//! Volume bar scaling.

use crate::level::Level;

/// Largest volume among the visible levels of both sides, `0.0` if there
/// are none.
pub fn max_volume(bids: &[Level], asks: &[Level]) -> f64 {
    bids.iter()
        .chain(asks)
        .map(|l| l.volume)
        .fold(0.0, f64::max)
}

/// Number of cells of a `width`-cell row covered by the volume bar.
///
/// `floor(width * volume / max_volume)`, clamped to `0..=width`. A zero
/// `max_volume` yields an empty bar.
pub fn bar_len(width: usize, volume: f64, max_volume: f64) -> usize {
    if !(max_volume > 0.0) {
        return 0;
    }
    let len = (width as f64 * (volume / max_volume)).floor();
    if len.is_nan() || len <= 0.0 {
        return 0;
    }
    (len as usize).min(width)
}
