// src/physics/quantize.rs
use super::contraction::ResponseField;
use crate::error::{Result, SphereError};

pub const BUCKET_COUNT: usize = 21;

/// Lower bound of each magnitude bin and the viewer color drawn for it.
///
/// Ordered by bin. The color indices are not monotonic: 0 is blue, 8 is
/// white and 1 is red; the tints in between come from the palette header.
const COLOR_TABLE: [(f64, u8); BUCKET_COUNT] = [
    (0.000000, 0),
    (0.047619, 11),
    (0.095238, 12),
    (0.142857, 13),
    (0.190476, 14),
    (0.238095, 15),
    (0.285714, 17),
    (0.333333, 18),
    (0.380952, 19),
    (0.428571, 20),
    (0.476190, 8),
    (0.523809, 29),
    (0.571428, 28),
    (0.619047, 27),
    (0.666666, 26),
    (0.714285, 25),
    (0.761904, 24),
    (0.809523, 23),
    (0.857142, 22),
    (0.904761, 21),
    (0.952380, 1),
];

/// Index into the 21-bin magnitude partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorBucket(u8);

impl ColorBucket {
    pub const LOWEST: ColorBucket = ColorBucket(0);
    pub const HIGHEST: ColorBucket = ColorBucket(BUCKET_COUNT as u8 - 1);

    /// Bins are `[low, next_low)`; the top bin also takes 1.0 itself.
    /// Anything below zero lands in the first bin, anything above one in
    /// the last.
    pub fn from_magnitude(c: f64) -> Self {
        if c >= 1.0 {
            return Self::HIGHEST;
        }
        COLOR_TABLE
            .iter()
            .rposition(|(low, _)| c >= *low)
            .map(|idx| ColorBucket(idx as u8))
            .unwrap_or(Self::LOWEST)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Color index understood by the viewer's `draw color` directive.
    pub fn color_id(&self) -> u8 {
        COLOR_TABLE[self.index()].1
    }
}

/// `norm / maximum` for every direction, each in [0, 1].
pub fn normalized(field: &ResponseField, label: &str) -> Result<Vec<f64>> {
    let maximum = field.maximum();
    if maximum <= 0.0 || !maximum.is_finite() {
        return Err(SphereError::DegenerateMaximum { label: label.to_string(), maximum });
    }
    Ok(field.norms().iter().map(|n| n / maximum).collect())
}

pub fn quantize(field: &ResponseField, label: &str) -> Result<Vec<ColorBucket>> {
    Ok(normalized(field, label)?
        .into_iter()
        .map(ColorBucket::from_magnitude)
        .collect())
}

/// Number of directions falling in each bin.
pub fn histogram(buckets: &[ColorBucket]) -> [usize; BUCKET_COUNT] {
    let mut counts = [0; BUCKET_COUNT];
    for b in buckets {
        counts[b.index()] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResponseTensor;
    use crate::physics::contraction::contract;
    use crate::physics::grid::direction_grid;

    #[test]
    fn test_endpoints() {
        assert_eq!(ColorBucket::from_magnitude(0.0).color_id(), 0);
        assert_eq!(ColorBucket::from_magnitude(1.0).color_id(), 1);
        assert_eq!(ColorBucket::from_magnitude(1.0), ColorBucket::HIGHEST);
        assert_eq!(ColorBucket::from_magnitude(0.5).color_id(), 8);
    }

    #[test]
    fn test_boundaries_are_closed_below() {
        assert_eq!(ColorBucket::from_magnitude(0.047619).color_id(), 11);
        assert_eq!(ColorBucket::from_magnitude(0.0476189).color_id(), 0);
        assert_eq!(ColorBucket::from_magnitude(0.952380).color_id(), 1);
        assert_eq!(ColorBucket::from_magnitude(0.952379).color_id(), 21);
        assert_eq!(ColorBucket::from_magnitude(0.476190).color_id(), 8);
    }

    #[test]
    fn test_table_order() {
        let ids: Vec<u8> = (0..BUCKET_COUNT)
            .map(|i| ColorBucket(i as u8).color_id())
            .collect();
        assert_eq!(
            ids,
            vec![0, 11, 12, 13, 14, 15, 17, 18, 19, 20, 8, 29, 28, 27, 26, 25, 24, 23, 22, 21, 1]
        );
        for w in COLOR_TABLE.windows(2) {
            assert!(w[0].0 < w[1].0);
        }
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(ColorBucket::from_magnitude(1.0 + 1e-12), ColorBucket::HIGHEST);
        assert_eq!(ColorBucket::from_magnitude(-1e-12), ColorBucket::LOWEST);
    }

    #[test]
    fn test_every_bin_reachable() {
        for i in 0..BUCKET_COUNT {
            let low = COLOR_TABLE[i].0;
            assert_eq!(ColorBucket::from_magnitude(low + 1e-7), ColorBucket(i as u8));
        }
    }

    #[test]
    fn test_normalized_range() {
        let t = [[4.0, 1.0, 0.0], [1.0, 2.0, 0.5], [0.0, 0.5, 1.0]];
        let field = contract(&ResponseTensor::Rank2(t), &direction_grid());
        let c = normalized(&field, "test").unwrap();
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
        assert!(c.iter().any(|v| *v == 1.0));
    }

    #[test]
    fn test_degenerate_maximum() {
        let field = contract(&ResponseTensor::Rank2([[0.0; 3]; 3]), &direction_grid());
        match quantize(&field, "polarizability") {
            Err(SphereError::DegenerateMaximum { maximum, .. }) => assert_eq!(maximum, 0.0),
            other => panic!("expected degenerate maximum, got {:?}", other),
        }
    }

    fn scaled_identity(s: f64) -> ResponseTensor {
        ResponseTensor::Rank2([[s, 0.0, 0.0], [0.0, s, 0.0], [0.0, 0.0, s]])
    }

    #[test]
    fn test_tiny_field_is_not_degenerate() {
        let field = contract(&scaled_identity(1e-170), &direction_grid());
        assert!(field.maximum() > 0.0);
        let buckets = quantize(&field, "tiny").unwrap();
        assert!(buckets.iter().all(|b| *b == ColorBucket::HIGHEST));
    }

    #[test]
    fn test_large_field_is_not_degenerate() {
        let field = contract(&scaled_identity(1e160), &direction_grid());
        assert!(field.maximum().is_finite());
        let buckets = quantize(&field, "large").unwrap();
        assert!(buckets.iter().all(|b| *b == ColorBucket::HIGHEST));
    }

    #[test]
    fn test_histogram_counts_everything() {
        let buckets = vec![ColorBucket::LOWEST, ColorBucket::HIGHEST, ColorBucket::HIGHEST];
        let h = histogram(&buckets);
        assert_eq!(h[0], 1);
        assert_eq!(h[BUCKET_COUNT - 1], 2);
        assert_eq!(h.iter().sum::<usize>(), 3);
    }
}
