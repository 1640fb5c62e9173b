use crate::math::round::round_half_up;

/// Occurrence counts of rounded ordinates, ascending by value.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseHistogram {
    bins: Vec<(f64, usize)>
}

impl NoiseHistogram {
    /// Rounds every value to `digits` decimals and counts equal results.
    pub fn from_values(values: impl IntoIterator<Item = f64>, digits: i32) -> NoiseHistogram {
        let mut rounded: Vec<f64> = values
            .into_iter()
            .map(|y| round_half_up(y, digits))
            .collect();
        rounded.sort_by(f64::total_cmp);

        let mut bins: Vec<(f64, usize)> = Vec::new();
        for y in rounded {
            match bins.last_mut() {
                Some((value, count)) if *value == y => *count += 1,
                _ => bins.push((y, 1)),
            }
        }
        NoiseHistogram { bins }
    }

    pub fn bins(&self) -> &[(f64, usize)] {
        &self.bins
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Most frequent value; among equal counts the lowest value wins.
    pub fn peak(&self) -> Option<(f64, usize)> {
        self.bins
            .iter()
            .fold(None, |best: Option<(f64, usize)>, &(y, c)| match best {
                Some((_, best_count)) if best_count >= c => best,
                _ => Some((y, c)),
            })
    }

    /// Center of the peak's width at half maximum.
    ///
    /// Each side keeps the bin whose count is nearest to half the peak count,
    /// starting from the peak count itself; a side without any replacement
    /// contributes 0.
    pub fn half_maximum_center(&self) -> Option<f64> {
        let (y0, c0) = self.peak()?;
        let c0 = c0 as f64;
        let half = c0 / 2.0;

        let (mut cl, mut cr) = (c0, c0);
        let (mut yl, mut yr) = (0.0, 0.0);
        for &(y, c) in &self.bins {
            let c = c as f64;
            let zero_seek = (half - c).abs();
            if y < y0 && (cl - half).abs() > zero_seek {
                cl = c;
                yl = y;
            }
            if y > y0 && (cr - half).abs() > zero_seek {
                cr = c;
                yr = y;
            }
        }
        Some(0.5 * (yl + yr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repeated(counts: &[(f64, usize)]) -> Vec<f64> {
        counts.iter()
            .flat_map(|&(y, n)| std::iter::repeat_n(y, n))
            .collect()
    }

    #[test]
    fn counts_rounded_values_in_ascending_order() {
        let hist = NoiseHistogram::from_values(vec![0.30004, 0.1, 0.29996, 0.2, 0.1], 4);
        assert_eq!(hist.bins(), &[(0.1, 2), (0.2, 1), (0.3, 2)]);
    }

    #[test]
    fn peak_prefers_lowest_value_on_ties() {
        let hist = NoiseHistogram::from_values(repeated(&[(1.0, 2), (2.0, 3), (3.0, 3)]), 4);
        assert_eq!(hist.peak(), Some((2.0, 3)));
        assert_eq!(NoiseHistogram::from_values(Vec::new(), 4).peak(), None);
    }

    #[test]
    fn half_maximum_center_of_a_skewed_peak() {
        let values = repeated(&[(1.0, 1), (2.0, 3), (3.0, 6), (4.0, 2), (5.0, 1)]);
        let hist = NoiseHistogram::from_values(values, 4);
        assert_eq!(hist.half_maximum_center(), Some(3.0));
    }

    #[test]
    fn keeps_first_bin_on_equal_distance() {
        // left side: counts 2 and 4 are both 1 away from half of 6
        let values = repeated(&[(1.0, 2), (2.0, 4), (3.0, 6), (4.0, 3)]);
        let hist = NoiseHistogram::from_values(values, 4);
        assert_eq!(hist.half_maximum_center(), Some(0.5 * (1.0 + 4.0)));
    }

    #[test]
    fn lone_peak_has_zero_center() {
        let hist = NoiseHistogram::from_values(vec![7.0; 5], 4);
        assert_eq!(hist.half_maximum_center(), Some(0.0));
        assert!(!hist.is_empty());
        assert_eq!(NoiseHistogram::from_values(Vec::new(), 4).half_maximum_center(), None);
    }
}
