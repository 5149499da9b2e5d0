//! Tones and single-character suprasegmentals

use ipa_parser::ipa::symbol::{SupraCategory, ToneHeight};
use ipa_parser::ipa::units::{Tone, ToneLabel};
use ipa_parser::{IpaParser, PhoneticUnit};
use rstest::rstest;

fn units_of(input: &str) -> Vec<PhoneticUnit> {
    let mut results = IpaParser::standard().parse(input).expect("input to parse");
    assert_eq!(results.len(), 1);
    results.remove(0).units
}

fn tone(label: ToneLabel, levels: &[u8]) -> Tone {
    Tone {
        label,
        heights: levels
            .iter()
            .map(|level| ToneHeight::from_level(*level).expect("valid level"))
            .collect(),
    }
}

#[rstest]
#[case::extra_low("ȅ", ToneLabel::ExtraLow, &[1])]
#[case::low("è", ToneLabel::Low, &[2])]
#[case::mid("ē", ToneLabel::Mid, &[3])]
#[case::high("é", ToneLabel::High, &[4])]
#[case::extra_high("e̋", ToneLabel::ExtraHigh, &[5])]
#[case::rising("e\u{030C}", ToneLabel::Rising, &[1, 5])]
#[case::falling("e\u{0302}", ToneLabel::Falling, &[5, 1])]
#[case::high_rising("e\u{1DC4}", ToneLabel::HighRising, &[4, 5])]
#[case::low_rising("e\u{1DC5}", ToneLabel::LowRising, &[1, 2])]
#[case::low_falling("e\u{1DC6}", ToneLabel::LowFalling, &[2, 1])]
#[case::high_falling("e\u{1DC7}", ToneLabel::HighFalling, &[5, 4])]
#[case::rising_falling("e\u{1DC8}", ToneLabel::RisingFalling, &[3, 4, 3])]
#[case::falling_rising("e\u{1DC9}", ToneLabel::FallingRising, &[3, 2, 3])]
fn tone_mark_is_carried_by_its_segment(
    #[case] input: &str,
    #[case] label: ToneLabel,
    #[case] levels: &[u8],
) {
    let units = units_of(input);
    assert_eq!(units.len(), 1);
    let segment = units[0].as_segment().expect("segment");
    assert_eq!(segment.base, 'e');
    assert_eq!(segment.tone, Some(tone(label, levels)));
    assert!(segment.diacritics.is_empty());
}

#[rstest]
#[case::extra_low("˩", ToneLabel::ExtraLow, &[1])]
#[case::low("˨", ToneLabel::Low, &[2])]
#[case::mid("˧", ToneLabel::Mid, &[3])]
#[case::high("˦", ToneLabel::High, &[4])]
#[case::extra_high("˥", ToneLabel::ExtraHigh, &[5])]
#[case::repeated_extra_low("˩˩", ToneLabel::ExtraLow, &[1, 1])]
#[case::repeated_high("˦˦˦", ToneLabel::High, &[4, 4, 4])]
#[case::repeated_extra_high("˥˥˥˥", ToneLabel::ExtraHigh, &[5, 5, 5, 5])]
#[case::rising("˩˥", ToneLabel::Rising, &[1, 5])]
#[case::rising_inner("˨˦", ToneLabel::Rising, &[2, 4])]
#[case::rising_three("˩˧˥", ToneLabel::Rising, &[1, 3, 5])]
#[case::rising_held_start("˩˩˥", ToneLabel::Rising, &[1, 1, 5])]
#[case::rising_held_end("˨˦˦", ToneLabel::Rising, &[2, 4, 4])]
#[case::rising_held_middle("˩˧˧˥", ToneLabel::Rising, &[1, 3, 3, 5])]
#[case::rising_held_both("˩˩˥˥", ToneLabel::Rising, &[1, 1, 5, 5])]
#[case::falling("˥˩", ToneLabel::Falling, &[5, 1])]
#[case::falling_inner("˦˨", ToneLabel::Falling, &[4, 2])]
#[case::falling_three("˥˧˩", ToneLabel::Falling, &[5, 3, 1])]
#[case::falling_held_end("˥˩˩", ToneLabel::Falling, &[5, 1, 1])]
#[case::falling_held_start("˦˦˨", ToneLabel::Falling, &[4, 4, 2])]
#[case::falling_held_middle("˥˧˧˩", ToneLabel::Falling, &[5, 3, 3, 1])]
#[case::falling_held_both("˥˥˩˩", ToneLabel::Falling, &[5, 5, 1, 1])]
#[case::low_rising("˩˧", ToneLabel::LowRising, &[1, 3])]
#[case::low_rising_held_end("˩˨˨", ToneLabel::LowRising, &[1, 2, 2])]
#[case::low_rising_held_start("˩˩˨", ToneLabel::LowRising, &[1, 1, 2])]
#[case::high_rising("˧˥", ToneLabel::HighRising, &[3, 5])]
#[case::high_rising_held_end("˧˥˥", ToneLabel::HighRising, &[3, 5, 5])]
#[case::high_rising_held_start("˧˧˥", ToneLabel::HighRising, &[3, 3, 5])]
#[case::low_falling("˧˩", ToneLabel::LowFalling, &[3, 1])]
#[case::low_falling_held_start("˧˧˨", ToneLabel::LowFalling, &[3, 3, 2])]
#[case::low_falling_held_end("˨˩˩", ToneLabel::LowFalling, &[2, 1, 1])]
#[case::high_falling("˥˧", ToneLabel::HighFalling, &[5, 3])]
#[case::high_falling_held_end("˥˦˦", ToneLabel::HighFalling, &[5, 4, 4])]
#[case::high_falling_held_start("˦˦˧", ToneLabel::HighFalling, &[4, 4, 3])]
#[case::rising_falling("˧˥˩", ToneLabel::RisingFalling, &[3, 5, 1])]
#[case::rising_falling_inner("˨˦˧", ToneLabel::RisingFalling, &[2, 4, 3])]
#[case::rising_falling_peak("˦˥˦", ToneLabel::RisingFalling, &[4, 5, 4])]
#[case::rising_falling_held_peak("˦˥˥˦", ToneLabel::RisingFalling, &[4, 5, 5, 4])]
#[case::falling_rising("˧˩˥", ToneLabel::FallingRising, &[3, 1, 5])]
#[case::falling_rising_inner("˧˨˦", ToneLabel::FallingRising, &[3, 2, 4])]
#[case::falling_rising_dip("˥˧˥", ToneLabel::FallingRising, &[5, 3, 5])]
#[case::falling_rising_four("˥˧˦˥", ToneLabel::FallingRising, &[5, 3, 4, 5])]
#[case::other_zigzag("˩˥˩˥", ToneLabel::Other, &[1, 5, 1, 5])]
#[case::other_inner_zigzag("˦˨˦˨", ToneLabel::Other, &[4, 2, 4, 2])]
fn tone_letters_form_one_tone(
    #[case] input: &str,
    #[case] label: ToneLabel,
    #[case] levels: &[u8],
) {
    assert_eq!(units_of(input), vec![PhoneticUnit::Tone(tone(label, levels))]);
}

#[rstest]
#[case::primary_stress("ˈ", SupraCategory::Stress, "primary-stress")]
#[case::secondary_stress("ˌ", SupraCategory::Stress, "secondary-stress")]
#[case::syllable_break(".", SupraCategory::Separator, "syllable-break")]
#[case::minor_group("|", SupraCategory::Separator, "minor-group")]
#[case::major_group("‖", SupraCategory::Separator, "major-group")]
#[case::linking("‿", SupraCategory::Separator, "linking")]
#[case::downstep("ꜜ", SupraCategory::ToneStep, "downstep")]
#[case::upstep("ꜛ", SupraCategory::ToneStep, "upstep")]
#[case::global_rise("↗", SupraCategory::Intonation, "global-rise")]
#[case::global_fall("↘", SupraCategory::Intonation, "global-fall")]
fn single_character_supra(
    #[case] input: &str,
    #[case] category: SupraCategory,
    #[case] value: &str,
) {
    assert_eq!(units_of(input), vec![PhoneticUnit::supra(category, value)]);
}

#[test]
fn apostrophe_reads_as_primary_stress() {
    assert_eq!(
        units_of("'"),
        vec![PhoneticUnit::supra(SupraCategory::Stress, "primary-stress")]
    );
}

#[test]
fn tones_iterates_letters_and_marks_in_order() {
    let results = IpaParser::standard().parse("/mà˥˩/").unwrap();
    let labels: Vec<ToneLabel> = results[0].tones().map(|t| t.label).collect();
    assert_eq!(labels, vec![ToneLabel::Low, ToneLabel::Falling]);
}
