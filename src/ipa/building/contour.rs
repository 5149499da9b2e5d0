//! Tone contour classification
//!
//! A height sequence is reduced to its shape before labelling: consecutive
//! repeats are dropped (`˩˩˥` rises exactly like `˩˥`), then the directions of
//! the remaining steps decide the family. Rising and falling contours are labelled
//! from their endpoint pair through the explicit tables below.
//!
//! | shape                         | label                         |
//! |-------------------------------|-------------------------------|
//! | one height                    | level name (`extra-low`, ...) |
//! | only rises                    | [`rising_label`] table        |
//! | only falls                    | [`falling_label`] table       |
//! | rises, then falls             | `rising-falling`              |
//! | falls, then rises             | `falling-rising`              |
//! | anything else, or 4+ heights  | `other`                       |

use crate::ipa::symbol::ToneHeight;
use crate::ipa::units::ToneLabel;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Up,
    Down,
}

/// Label a height sequence. `None` when `heights` is empty.
pub fn classify(heights: &[ToneHeight]) -> Option<ToneLabel> {
    let first = *heights.first()?;

    let mut points = heights.to_vec();
    points.dedup();
    if points.len() == 1 {
        return Some(ToneLabel::level(first));
    }

    let distinct: BTreeSet<ToneHeight> = points.iter().copied().collect();
    if distinct.len() >= 4 {
        return Some(ToneLabel::Other);
    }

    let mut shape: Vec<Step> = points
        .windows(2)
        .map(|pair| if pair[1] > pair[0] { Step::Up } else { Step::Down })
        .collect();
    shape.dedup();

    let start = points[0];
    let end = points[points.len() - 1];
    let label = match shape.as_slice() {
        [Step::Up] => rising_label(start, end),
        [Step::Down] => falling_label(start, end),
        [Step::Up, Step::Down] => ToneLabel::RisingFalling,
        [Step::Down, Step::Up] => ToneLabel::FallingRising,
        _ => ToneLabel::Other,
    };
    Some(label)
}

/// Rising family, keyed by (low, high) endpoints.
///
/// Contours crossing the mid level are plain `rising`; contours staying at or
/// below mid are `low-rising`, those starting at or above mid are `high-rising`.
pub fn rising_label(low: ToneHeight, high: ToneHeight) -> ToneLabel {
    use ToneHeight::*;
    match (low, high) {
        (ExtraLow, ExtraHigh) | (Low, High) | (ExtraLow, High) | (Low, ExtraHigh) => {
            ToneLabel::Rising
        }
        (ExtraLow, Low) | (ExtraLow, Mid) | (Low, Mid) => ToneLabel::LowRising,
        (Mid, High) | (Mid, ExtraHigh) | (High, ExtraHigh) => ToneLabel::HighRising,
        _ => ToneLabel::Other,
    }
}

/// Falling family, keyed by (high, low) endpoints. Mirror of [`rising_label`].
pub fn falling_label(high: ToneHeight, low: ToneHeight) -> ToneLabel {
    use ToneHeight::*;
    match (high, low) {
        (ExtraHigh, ExtraLow) | (High, Low) | (High, ExtraLow) | (ExtraHigh, Low) => {
            ToneLabel::Falling
        }
        (Low, ExtraLow) | (Mid, ExtraLow) | (Mid, Low) => ToneLabel::LowFalling,
        (High, Mid) | (ExtraHigh, Mid) | (ExtraHigh, High) => ToneLabel::HighFalling,
        _ => ToneLabel::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(levels: &[u8]) -> ToneLabel {
        let heights: Vec<ToneHeight> = levels
            .iter()
            .map(|l| ToneHeight::from_level(*l).unwrap())
            .collect();
        classify(&heights).unwrap()
    }

    #[test]
    fn test_empty_has_no_label() {
        assert_eq!(classify(&[]), None);
    }

    #[test]
    fn test_levels() {
        assert_eq!(label(&[1]), ToneLabel::ExtraLow);
        assert_eq!(label(&[3]), ToneLabel::Mid);
        assert_eq!(label(&[5, 5, 5, 5]), ToneLabel::ExtraHigh);
    }

    #[test]
    fn test_rising_table_covers_every_pair() {
        for low in ToneHeight::ALL {
            for high in ToneHeight::ALL {
                if low < high {
                    assert_ne!(rising_label(low, high), ToneLabel::Other, "{low} -> {high}");
                    assert_ne!(falling_label(high, low), ToneLabel::Other, "{high} -> {low}");
                }
            }
        }
    }

    #[test]
    fn test_tables_mirror_each_other() {
        let mirrored = |label: ToneLabel| match label {
            ToneLabel::Rising => ToneLabel::Falling,
            ToneLabel::LowRising => ToneLabel::LowFalling,
            ToneLabel::HighRising => ToneLabel::HighFalling,
            other => other,
        };
        for low in ToneHeight::ALL {
            for high in ToneHeight::ALL {
                if low < high {
                    assert_eq!(mirrored(rising_label(low, high)), falling_label(high, low));
                }
            }
        }
    }

    #[test]
    fn test_repeats_do_not_change_shape() {
        assert_eq!(label(&[1, 1, 5, 5]), ToneLabel::Rising);
        assert_eq!(label(&[4, 4, 3]), ToneLabel::HighFalling);
        assert_eq!(label(&[4, 5, 5, 4]), ToneLabel::RisingFalling);
    }

    #[test]
    fn test_peaks_and_dips() {
        assert_eq!(label(&[3, 5, 1]), ToneLabel::RisingFalling);
        assert_eq!(label(&[4, 5, 4]), ToneLabel::RisingFalling);
        assert_eq!(label(&[3, 1, 5]), ToneLabel::FallingRising);
        assert_eq!(label(&[5, 3, 4, 5]), ToneLabel::FallingRising);
    }

    #[test]
    fn test_other_shapes() {
        assert_eq!(label(&[1, 5, 1, 5]), ToneLabel::Other);
        assert_eq!(label(&[4, 2, 4, 2]), ToneLabel::Other);
        // Four distinct heights are never classified, even when monotonic
        assert_eq!(label(&[1, 2, 3, 5]), ToneLabel::Other);
    }
}
