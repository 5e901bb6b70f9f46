use crate::domain::model::{SizeCategory, Species};

/// 依種類與體重分級。對所有實數都是全函數:
/// 負值與零落在最低的一級,未知種類一律 medium。
pub fn size_category(species: &Species, weight: f64) -> SizeCategory {
    match species {
        Species::Dog => {
            if weight < 10.0 {
                SizeCategory::Small
            } else if weight < 30.0 {
                SizeCategory::Medium
            } else if weight < 70.0 {
                SizeCategory::Large
            } else {
                SizeCategory::ExtraLarge
            }
        }
        Species::Cat => {
            if weight < 5.0 {
                SizeCategory::Small
            } else if weight < 10.0 {
                SizeCategory::Medium
            } else if weight < 15.0 {
                SizeCategory::Large
            } else {
                SizeCategory::ExtraLarge
            }
        }
        Species::Other(_) => SizeCategory::Medium,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dog_thresholds() {
        assert_eq!(size_category(&Species::Dog, 9.9), SizeCategory::Small);
        assert_eq!(size_category(&Species::Dog, 10.0), SizeCategory::Medium);
        assert_eq!(size_category(&Species::Dog, 29.9), SizeCategory::Medium);
        assert_eq!(size_category(&Species::Dog, 30.0), SizeCategory::Large);
        assert_eq!(size_category(&Species::Dog, 69.9), SizeCategory::Large);
        assert_eq!(size_category(&Species::Dog, 70.0), SizeCategory::ExtraLarge);
    }

    #[test]
    fn cat_thresholds() {
        assert_eq!(size_category(&Species::Cat, 4.0), SizeCategory::Small);
        assert_eq!(size_category(&Species::Cat, 8.0), SizeCategory::Medium);
        assert_eq!(size_category(&Species::Cat, 12.0), SizeCategory::Large);
        assert_eq!(size_category(&Species::Cat, 20.0), SizeCategory::ExtraLarge);
    }

    #[test]
    fn unknown_species_is_always_medium() {
        let hamster = Species::Other("hamster".to_string());
        assert_eq!(size_category(&hamster, 0.1), SizeCategory::Medium);
        assert_eq!(size_category(&hamster, 500.0), SizeCategory::Medium);
    }

    #[test]
    fn classification_is_monotonic_for_dogs() {
        let weights = [0.0, 5.0, 10.0, 25.0, 30.0, 50.0, 70.0, 120.0];
        let mut last = SizeCategory::Small;
        for w in weights {
            let size = size_category(&Species::Dog, w);
            assert!(size as u8 >= last as u8, "not monotonic at weight {}", w);
            last = size;
        }
    }

    #[test]
    fn negative_weight_falls_into_lowest_bracket() {
        assert_eq!(size_category(&Species::Dog, -3.0), SizeCategory::Small);
        assert_eq!(size_category(&Species::Cat, -3.0), SizeCategory::Small);
    }
}
