//! First-Fit-Decreasing.

use crate::model::Bar;

use super::{initial_bars, place};

/// Place each cut (longest first) on the first bar, in creation order, that accepts it.
pub(crate) fn first_fit_decreasing(sorted: &[f64], bar_length: f64, kerf: f64) -> Vec<Bar> {
    let mut bars = initial_bars(bar_length);

    for &length in sorted {
        let index = bars.iter().position(|bar| bar.can_fit(length, kerf));
        place(&mut bars, index, length, bar_length, kerf);
    }

    bars
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cuts_of(bars: &[Bar]) -> Vec<Vec<f64>> {
        bars.iter().map(|b| b.cuts().to_vec()).collect()
    }

    #[test]
    fn test_exact_fit_combines() {
        let bars = first_fit_decreasing(&[2700.0, 1800.0, 1200.0], 3000.0, 0.0);
        assert_eq!(cuts_of(&bars), vec![vec![2700.0], vec![1800.0, 1200.0]]);
        assert_eq!(bars[0].waste(), 300.0);
        assert_eq!(bars[1].waste(), 0.0);
    }

    #[test]
    fn test_takes_first_bar_not_tightest() {
        // 90 fits bar 1 (910 left) and bar 2 (10 left); first fit wins.
        let bars = first_fit_decreasing(&[2000.0, 1500.0, 1400.0, 90.0], 3000.0, 0.0);
        assert_eq!(
            cuts_of(&bars),
            vec![vec![2000.0, 90.0], vec![1500.0, 1400.0]]
        );
    }

    #[test]
    fn test_earlier_bar_reused_after_new_bar_opened() {
        let bars = first_fit_decreasing(&[2000.0, 2000.0, 900.0, 900.0], 3000.0, 0.0);
        assert_eq!(
            cuts_of(&bars),
            vec![vec![2000.0, 900.0], vec![2000.0, 900.0]]
        );
    }

    #[test]
    fn test_kerf_forces_new_bar() {
        let bars = first_fit_decreasing(&[1500.0, 1500.0], 3000.0, 3.0);
        assert_eq!(cuts_of(&bars), vec![vec![1500.0], vec![1500.0]]);
    }
}
