use std::fmt;

use super::config::{ScoringConfig, TagsConfig};
use crate::form::{Answer, FormData};

/// Binary classification of a lead against the score threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualification {
    Qualified,
    Unqualified,
}

impl Qualification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Qualification::Qualified => "qualified",
            Qualification::Unqualified => "unqualified",
        }
    }
}

impl fmt::Display for Qualification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contributing question in the itemized breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownItem {
    pub question: String,
    pub points: u32,
}

/// Itemized score breakdown. `total` always equals the sum of the listed
/// points and matches `calculate_score` for the same form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub items: Vec<BreakdownItem>,
    pub total: u32,
}

/// Sum the configured weights for every question answered "yes".
/// "no" and unanswered questions contribute nothing.
pub fn calculate_score(form: &FormData, config: &ScoringConfig) -> u32 {
    let mut score = 0;

    if form.paying_more == Some(Answer::Yes) {
        score += config.paying_more_yes;
    }

    if form.shade == Some(Answer::Yes) {
        score += config.shade_yes;
    }

    if form.inverter_outside == Some(Answer::Yes) {
        score += config.inverter_outside_yes;
    }

    score
}

/// Classify a score against the threshold. Equality qualifies.
pub fn determine_qualification(score: u32, config: &ScoringConfig) -> Qualification {
    if score >= config.threshold {
        Qualification::Qualified
    } else {
        Qualification::Unqualified
    }
}

/// Map a qualification outcome onto the configured CRM tag.
pub fn qualification_tag(qualification: Qualification, tags: &TagsConfig) -> &str {
    match qualification {
        Qualification::Qualified => &tags.qualified,
        Qualification::Unqualified => &tags.unqualified,
    }
}

/// Itemize the score, one entry per question answered "yes", in form order.
///
/// This re-derives the same contributions as `calculate_score` rather than
/// decomposing it; both read the same weights and the same predicates, so
/// their totals agree by construction.
pub fn score_breakdown(form: &FormData, config: &ScoringConfig) -> ScoreBreakdown {
    let mut items = Vec::new();
    let mut total = 0;

    if form.paying_more == Some(Answer::Yes) {
        items.push(BreakdownItem {
            question: "Paying more for electricity".to_string(),
            points: config.paying_more_yes,
        });
        total += config.paying_more_yes;
    }

    if form.shade == Some(Answer::Yes) {
        items.push(BreakdownItem {
            question: "Panels are shaded".to_string(),
            points: config.shade_yes,
        });
        total += config.shade_yes;
    }

    if form.inverter_outside == Some(Answer::Yes) {
        items.push(BreakdownItem {
            question: "Inverter mounted outside".to_string(),
            points: config.inverter_outside_yes,
        });
        total += config.inverter_outside_yes;
    }

    ScoreBreakdown { items, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form(
        paying_more: Option<Answer>,
        shade: Option<Answer>,
        inverter_outside: Option<Answer>,
    ) -> FormData {
        FormData {
            email: "lead@example.com".to_string(),
            phone: "+15550100".to_string(),
            full_name: "Sam Lead".to_string(),
            paying_more,
            shade,
            inverter_outside,
        }
    }

    #[test]
    fn test_all_no_scores_zero() {
        let form = sample_form(Some(Answer::No), Some(Answer::No), Some(Answer::No));
        assert_eq!(calculate_score(&form, &ScoringConfig::default()), 0);
    }

    #[test]
    fn test_all_yes_sums_every_weight() {
        let form = sample_form(Some(Answer::Yes), Some(Answer::Yes), Some(Answer::Yes));
        assert_eq!(calculate_score(&form, &ScoringConfig::default()), 100);
    }

    #[test]
    fn test_unanswered_scores_like_no() {
        let answered_no = sample_form(Some(Answer::No), Some(Answer::No), Some(Answer::No));
        let unanswered = sample_form(None, None, None);
        let config = ScoringConfig::default();
        assert_eq!(
            calculate_score(&answered_no, &config),
            calculate_score(&unanswered, &config)
        );
    }

    #[test]
    fn test_qualified_example() {
        // paying_more=yes, shade=yes, inverter_outside=no -> 50 + 30 = 80
        let form = sample_form(Some(Answer::Yes), Some(Answer::Yes), Some(Answer::No));
        let config = ScoringConfig::default();
        let tags = TagsConfig::default();

        let score = calculate_score(&form, &config);
        assert_eq!(score, 80);

        let qualification = determine_qualification(score, &config);
        assert_eq!(qualification, Qualification::Qualified);
        assert_eq!(qualification_tag(qualification, &tags), "good_solar_case");

        let breakdown = score_breakdown(&form, &config);
        assert_eq!(breakdown.items.len(), 2);
        assert_eq!(breakdown.total, 80);
    }

    #[test]
    fn test_unqualified_example() {
        // paying_more=no, shade=no, inverter_outside=yes -> 20
        let form = sample_form(Some(Answer::No), Some(Answer::No), Some(Answer::Yes));
        let config = ScoringConfig::default();
        let tags = TagsConfig::default();

        let score = calculate_score(&form, &config);
        assert_eq!(score, 20);

        let qualification = determine_qualification(score, &config);
        assert_eq!(qualification, Qualification::Unqualified);
        assert_eq!(qualification_tag(qualification, &tags), "low_quality_case");
    }

    #[test]
    fn test_threshold_boundary() {
        let config = ScoringConfig::default();
        assert_eq!(
            determine_qualification(config.threshold - 1, &config),
            Qualification::Unqualified
        );
        assert_eq!(
            determine_qualification(config.threshold, &config),
            Qualification::Qualified
        );
    }

    #[test]
    fn test_breakdown_total_matches_score_for_all_answer_combinations() {
        let config = ScoringConfig::default();
        let states = [None, Some(Answer::No), Some(Answer::Yes)];

        for paying_more in states {
            for shade in states {
                for inverter_outside in states {
                    let form = sample_form(paying_more, shade, inverter_outside);
                    let breakdown = score_breakdown(&form, &config);
                    assert_eq!(breakdown.total, calculate_score(&form, &config));
                    assert_eq!(
                        breakdown.total,
                        breakdown.items.iter().map(|i| i.points).sum::<u32>()
                    );
                }
            }
        }
    }

    #[test]
    fn test_breakdown_order_is_fixed() {
        let form = sample_form(Some(Answer::Yes), Some(Answer::Yes), Some(Answer::Yes));
        let breakdown = score_breakdown(&form, &ScoringConfig::default());

        let questions: Vec<&str> = breakdown
            .items
            .iter()
            .map(|i| i.question.as_str())
            .collect();
        assert_eq!(
            questions,
            vec![
                "Paying more for electricity",
                "Panels are shaded",
                "Inverter mounted outside"
            ]
        );
    }

    #[test]
    fn test_custom_weights() {
        let config = ScoringConfig {
            paying_more_yes: 10,
            shade_yes: 5,
            inverter_outside_yes: 1,
            threshold: 11,
        };
        let form = sample_form(Some(Answer::Yes), Some(Answer::No), Some(Answer::Yes));

        let score = calculate_score(&form, &config);
        assert_eq!(score, 11);
        assert_eq!(
            determine_qualification(score, &config),
            Qualification::Qualified
        );
    }

    #[test]
    fn test_custom_tags() {
        let tags = TagsConfig {
            qualified: "hot".to_string(),
            unqualified: "cold".to_string(),
        };
        assert_eq!(qualification_tag(Qualification::Qualified, &tags), "hot");
        assert_eq!(qualification_tag(Qualification::Unqualified, &tags), "cold");
    }
}
