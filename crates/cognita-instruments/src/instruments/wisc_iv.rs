use cognita_core::models::index::IndexId;
use cognita_core::models::scale::ScaleType;
use cognita_core::models::subtest::SubtestId;

use crate::aggregation::{IndexDefinition, IndexRule};
use crate::scoring::{Domain, ScoreRange, ScoreType, Subscale, SubtestRole};
use crate::Instrument;

/// WISC-IV: Wechsler Intelligence Scale for Children, Fourth Edition.
/// Verbal Comprehension, Perceptual Organization, Working Memory, Processing Speed indices.
/// Subtests: scaled scores (mean 10, SD 3). Indices: composite scores (mean 100, SD 15).
pub struct WiscIv;

pub const ICV: IndexDefinition = IndexDefinition {
    core: &[SubtestId::Sm, SubtestId::Vc, SubtestId::Co],
    supplemental: &[SubtestId::In, SubtestId::Rp],
    required_count: 3,
};

pub const IOP: IndexDefinition = IndexDefinition {
    core: &[SubtestId::Cb, SubtestId::Cn, SubtestId::Rm],
    supplemental: &[SubtestId::Cf],
    required_count: 3,
};

pub const IMO: IndexDefinition = IndexDefinition {
    core: &[SubtestId::Dg, SubtestId::Sn],
    supplemental: &[SubtestId::Ar],
    required_count: 2,
};

pub const IVP: IndexDefinition = IndexDefinition {
    core: &[SubtestId::Cd, SubtestId::Ps],
    supplemental: &[SubtestId::Ca],
    required_count: 2,
};

/// The ten core subtests. Every one must be present for a full scale score.
pub const QIT: &[SubtestId] = &[
    SubtestId::Sm,
    SubtestId::Vc,
    SubtestId::Co,
    SubtestId::Cb,
    SubtestId::Cn,
    SubtestId::Rm,
    SubtestId::Dg,
    SubtestId::Sn,
    SubtestId::Cd,
    SubtestId::Ps,
];

pub fn index_rule(index: IndexId) -> IndexRule {
    match index {
        IndexId::Icv => IndexRule::Substitutable(ICV),
        IndexId::Iop => IndexRule::Substitutable(IOP),
        IndexId::Imo => IndexRule::Substitutable(IMO),
        IndexId::Ivp => IndexRule::Substitutable(IVP),
        IndexId::Qit => IndexRule::AllRequired(QIT),
    }
}

impl Instrument for WiscIv {
    fn id(&self) -> &str {
        "wisc_iv"
    }

    fn name(&self) -> &str {
        "WISC-IV"
    }

    fn scale_type(&self) -> ScaleType {
        ScaleType::Wisc
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let scaled = ScoreRange {
                min: 1.0,
                max: 19.0,
                step: Some(1.0),
            };
            let composite = ScoreRange {
                min: 40.0,
                max: 160.0,
                step: Some(1.0),
            };

            let mut domains: Vec<Domain> = [
                (IndexId::Icv, ICV),
                (IndexId::Iop, IOP),
                (IndexId::Imo, IMO),
                (IndexId::Ivp, IVP),
            ]
            .into_iter()
            .map(|(index, definition)| Domain {
                id: index,
                name: format!("{} ({})", index.name(), index.abbreviation()),
                subscales: definition
                    .core
                    .iter()
                    .map(|&s| subtest(s, SubtestRole::Core, scaled))
                    .chain(
                        definition
                            .supplemental
                            .iter()
                            .map(|&s| subtest(s, SubtestRole::Supplemental, scaled)),
                    )
                    .collect(),
                composite_score_type: Some(ScoreType::Composite),
                composite_range: Some(composite),
                description: None,
            })
            .collect();

            domains.push(Domain {
                id: IndexId::Qit,
                name: format!("{} ({})", IndexId::Qit.name(), IndexId::Qit.abbreviation()),
                subscales: vec![],
                composite_score_type: Some(ScoreType::Composite),
                composite_range: Some(composite),
                description: Some("Overall composite across the ten core subtests".to_string()),
            });
            domains
        });
        &DOMAINS
    }
}

fn subtest(id: SubtestId, role: SubtestRole, range: ScoreRange) -> Subscale {
    Subscale {
        id,
        name: id.name().to_string(),
        role,
        score_type: ScoreType::Scaled,
        range,
        description: None,
    }
}
