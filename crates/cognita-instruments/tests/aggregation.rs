use cognita_core::models::index::IndexId;
use cognita_core::models::scale::ScaleType;
use cognita_core::models::subtest::{ScaledScores, SubtestId};
use cognita_instruments::aggregation::{IndexDefinition, compute_fixed_sum, compute_sum, index_rule};
use cognita_instruments::instruments::wisc_iv::{ICV, IMO, QIT};

fn scores(entries: &[(SubtestId, u8)]) -> ScaledScores {
    entries.iter().copied().collect()
}

#[test]
fn core_subtests_are_summed_when_all_present() {
    let s = scores(&[
        (SubtestId::Sm, 10),
        (SubtestId::Vc, 12),
        (SubtestId::Co, 8),
        (SubtestId::In, 19),
    ]);
    assert_eq!(compute_sum(&ICV, &s), Some(30));
}

#[test]
fn first_available_supplemental_substitutes_a_missing_core() {
    let s = scores(&[(SubtestId::Sm, 10), (SubtestId::Vc, 12), (SubtestId::In, 9)]);
    assert_eq!(compute_sum(&ICV, &s), Some(31));
}

#[test]
fn substitution_skips_supplementals_without_scores() {
    let s = scores(&[(SubtestId::Sm, 10), (SubtestId::Vc, 12), (SubtestId::Rp, 7)]);
    assert_eq!(compute_sum(&ICV, &s), Some(29));
}

#[test]
fn missing_core_without_any_supplemental_is_absent() {
    let s = scores(&[(SubtestId::Sm, 10), (SubtestId::Vc, 12)]);
    assert_eq!(compute_sum(&ICV, &s), None);
}

#[test]
fn only_one_substitution_is_allowed() {
    let s = scores(&[(SubtestId::Sm, 10), (SubtestId::In, 9), (SubtestId::Rp, 11)]);
    assert_eq!(compute_sum(&ICV, &s), None);
}

#[test]
fn substitution_ignores_supplementals_that_are_also_core() {
    let definition = IndexDefinition {
        core: &[SubtestId::Dg, SubtestId::Sn],
        supplemental: &[SubtestId::Dg, SubtestId::Ar],
        required_count: 2,
    };
    let s = scores(&[(SubtestId::Dg, 10), (SubtestId::Ar, 6)]);
    assert_eq!(compute_sum(&definition, &s), Some(16));
}

#[test]
fn two_subtest_index_substitutes() {
    let s = scores(&[(SubtestId::Sn, 9), (SubtestId::Ar, 11)]);
    assert_eq!(compute_sum(&IMO, &s), Some(20));
}

#[test]
fn zero_sum_is_a_real_sum() {
    let definition = IndexDefinition {
        core: &[SubtestId::Cd],
        supplemental: &[],
        required_count: 1,
    };
    let s = scores(&[(SubtestId::Cd, 0)]);
    assert_eq!(compute_sum(&definition, &s), Some(0));
}

#[test]
fn full_scale_requires_all_ten_subtests() {
    let all: ScaledScores = QIT.iter().map(|&subtest| (subtest, 10)).collect();
    assert_eq!(compute_fixed_sum(QIT, &all), Some(100));

    for &missing in QIT {
        let mut partial = all.clone();
        partial.remove(&missing);
        // Supplementals never stand in for the full scale.
        partial.insert(SubtestId::In, 10);
        partial.insert(SubtestId::Ar, 10);
        assert_eq!(compute_fixed_sum(QIT, &partial), None, "missing {missing}");
    }
}

#[test]
fn index_rules_cover_every_index() {
    for index in IndexId::ALL {
        let rule = index_rule(ScaleType::Wisc, index);
        assert!(!rule.subtests().is_empty(), "{index}");
    }
    assert_eq!(index_rule(ScaleType::Wisc, IndexId::Qit).subtests().len(), 10);
}
