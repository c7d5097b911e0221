//! Quality bounds shared by every non-legendary item.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Fixed quality of a legendary item. It never changes.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Closed range `[min, max]` a quality value must land in after each update.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualityRange {
    pub min: i32,
    pub max: i32,
}

impl QualityRange {
    /// `[0, 50]`, the range for every ordinary, vintage, backstage and conjured item.
    pub const STANDARD: QualityRange = QualityRange { min: 0, max: 50 };

    /// Replace an out-of-range value with the nearest boundary.
    pub fn clamp(self, quality: i32) -> i32 {
        quality.clamp(self.min, self.max)
    }

    pub fn contains(self, quality: i32) -> bool {
        (self.min..=self.max).contains(&quality)
    }
}

impl Default for QualityRange {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl ValueObject for QualityRange {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn standard_range_is_zero_to_fifty() {
        assert_eq!(QualityRange::default(), QualityRange { min: 0, max: 50 });
        assert!(QualityRange::STANDARD.contains(0));
        assert!(QualityRange::STANDARD.contains(50));
        assert!(!QualityRange::STANDARD.contains(-1));
        assert!(!QualityRange::STANDARD.contains(51));
        assert!(!QualityRange::STANDARD.contains(LEGENDARY_QUALITY));
    }

    #[test]
    fn clamp_replaces_out_of_range_values_with_boundary() {
        let range = QualityRange::STANDARD;
        assert_eq!(range.clamp(-3), 0);
        assert_eq!(range.clamp(53), 50);
        assert_eq!(range.clamp(17), 17);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: clamping always lands inside the range and is idempotent.
        #[test]
        fn clamp_lands_in_range(q in any::<i32>()) {
            let range = QualityRange::STANDARD;
            let clamped = range.clamp(q);
            prop_assert!(range.contains(clamped));
            prop_assert_eq!(range.clamp(clamped), clamped);
        }
    }
}
