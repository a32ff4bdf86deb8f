use cognita_instruments::classification::{Classification, classify};

#[test]
fn band_boundaries_are_inclusive_at_the_top() {
    let cases = [
        (40.0, Classification::ExtremelyLow),
        (69.0, Classification::ExtremelyLow),
        (70.0, Classification::Borderline),
        (79.0, Classification::Borderline),
        (80.0, Classification::LowAverage),
        (89.0, Classification::LowAverage),
        (90.0, Classification::Average),
        (109.0, Classification::Average),
        (110.0, Classification::HighAverage),
        (119.0, Classification::HighAverage),
        (120.0, Classification::Superior),
        (129.0, Classification::Superior),
        (130.0, Classification::VerySuperior),
        (160.0, Classification::VerySuperior),
    ];
    for (score, expected) in cases {
        assert_eq!(classify(Some(score)), Some(expected), "score {score}");
    }
}

#[test]
fn fractional_scores_fall_above_the_lower_band() {
    assert_eq!(classify(Some(69.5)), Some(Classification::Borderline));
    assert_eq!(classify(Some(-5.0)), Some(Classification::ExtremelyLow));
}

#[test]
fn absent_and_non_numeric_input_has_no_band() {
    assert_eq!(classify(None), None);
    assert_eq!(classify(Some(f64::NAN)), None);
    assert_eq!(classify(Some(f64::INFINITY)), None);
}

#[test]
fn labels_read_as_published() {
    let labels: Vec<&str> = Classification::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(
        labels,
        [
            "Extremely Low",
            "Borderline",
            "Low Average",
            "Average",
            "High Average",
            "Superior",
            "Very Superior",
        ]
    );
    assert_eq!(Classification::Average.to_string(), "Average");
}
