use crate::minutes::model::{MeetingResult, QualityAnalysis, Sentiment};

const BAR_WIDTH: usize = 20;

const PLACEHOLDER: &str =
    "No meeting record yet. Add at least one input and run `gijiroku generate`.";

/// Fixed axis order for the quality dimensions.
const QUALITY_AXES: [&str; 5] = [
    "efficiency",
    "decision clarity",
    "action specificity",
    "participation balance",
    "discussion depth",
];

/// Read-only structured view of a meeting record, or a single placeholder
/// prompt when no record exists yet.
pub fn render(result: Option<&MeetingResult>) -> String {
    match result {
        Some(result) => render_result(result),
        None => format!("{PLACEHOLDER}\n"),
    }
}

fn render_result(result: &MeetingResult) -> String {
    let mut out = String::new();

    out.push_str("Summary\n");
    out.push_str("-------\n");
    out.push_str(&result.summary);
    out.push('\n');

    if let Some(quality) = &result.quality_analysis {
        out.push('\n');
        render_quality(&mut out, quality);
    }

    out.push('\n');
    render_sentiment(&mut out, &result.sentiment);

    if !result.action_items.is_empty() {
        out.push('\n');
        out.push_str("Action items\n");
        out.push_str("------------\n");
        for (index, item) in result.action_items.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", index + 1, item.task));
            out.push_str(&format!(
                "   assignee: {} | deadline: {} | priority: {}\n",
                item.assignee, item.deadline, item.priority
            ));
        }
    }

    out.push('\n');
    out.push_str("Minutes\n");
    out.push_str("-------\n");
    out.push_str(&result.minutes);
    out.push('\n');

    out
}

fn render_quality(out: &mut String, quality: &QualityAnalysis) {
    out.push_str("Meeting quality\n");
    out.push_str("---------------\n");
    out.push_str(&format!(
        "Overall score: {} / 100\n",
        quality.scores.overall_score
    ));

    let values = [
        quality.scores.efficiency,
        quality.scores.decision_clarity,
        quality.scores.action_specificity,
        quality.scores.participation_balance,
        quality.scores.discussion_depth,
    ];
    for (axis, value) in QUALITY_AXES.iter().zip(values) {
        out.push_str(&format!("{:<22} {} {}\n", axis, bar(value), value));
    }

    if !quality.strengths.is_empty() {
        out.push_str("Strengths:\n");
        for strength in &quality.strengths {
            out.push_str(&format!("  + {strength}\n"));
        }
    }
    if !quality.recommendations.is_empty() {
        out.push_str("Recommendations:\n");
        for recommendation in &quality.recommendations {
            out.push_str(&format!("  > {recommendation}\n"));
        }
    }
}

fn render_sentiment(out: &mut String, sentiment: &Sentiment) {
    out.push_str("Sentiment\n");
    out.push_str("---------\n");
    let rows = [
        ("positive", sentiment.positive),
        ("negative", sentiment.negative),
        ("neutral", sentiment.neutral),
    ];
    for (label, value) in rows {
        out.push_str(&format!("{:<9} {} {}%\n", label, bar(value), value));
    }
}

/// Proportional bar scaled against 0-100, independent of other values.
fn bar(value: f64) -> String {
    let filled = ((value / 100.0) * BAR_WIDTH as f64).round();
    let filled = filled.clamp(0.0, BAR_WIDTH as f64) as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::{bar, render, BAR_WIDTH};
    use crate::minutes::model::{
        ActionItem, MeetingResult, QualityAnalysis, QualityScores, Sentiment,
    };

    fn sample_result() -> MeetingResult {
        MeetingResult {
            minutes: "## Agenda\nBudget review\n\nClosing remarks".to_owned(),
            summary: "Q3 budget reviewed.".to_owned(),
            action_items: vec![ActionItem {
                task: "Send budget report".to_owned(),
                assignee: "Alice".to_owned(),
                deadline: "2024-07-01".to_owned(),
                priority: "High".to_owned(),
            }],
            sentiment: Sentiment {
                positive: 60.0,
                negative: 10.0,
                neutral: 30.0,
            },
            quality_analysis: None,
        }
    }

    fn sample_quality() -> QualityAnalysis {
        QualityAnalysis {
            scores: QualityScores {
                efficiency: 75.0,
                decision_clarity: 90.0,
                action_specificity: 64.0,
                participation_balance: 55.0,
                discussion_depth: 81.0,
                overall_score: 82.0,
            },
            recommendations: vec!["Timebox agenda items".to_owned()],
            strengths: vec!["Clear decisions".to_owned()],
        }
    }

    #[test]
    fn no_result_renders_single_placeholder() {
        let text = render(None);
        assert!(text.contains("No meeting record yet"));
        assert!(!text.contains("Summary"));
        assert!(!text.contains("Sentiment"));
    }

    #[test]
    fn sentiment_bars_scale_independently_of_their_sum() {
        let text = render(Some(&sample_result()));
        // 60% / 10% / 30% of a 20-char bar: 12, 2, 6 filled cells.
        assert!(text.contains(&format!("positive  {} 60%", bar(60.0))));
        assert!(text.contains(&format!("negative  {} 10%", bar(10.0))));
        assert!(text.contains(&format!("neutral   {} 30%", bar(30.0))));
        assert_eq!(bar(60.0).chars().filter(|c| *c == '#').count(), 12);
        assert_eq!(bar(10.0).chars().filter(|c| *c == '#').count(), 2);
        assert_eq!(bar(30.0).chars().filter(|c| *c == '#').count(), 6);
    }

    #[test]
    fn quality_block_shows_headline_and_all_five_axes() {
        let mut result = sample_result();
        result.quality_analysis = Some(sample_quality());
        let text = render(Some(&result));

        assert!(text.contains("Overall score: 82 / 100"));
        for axis in [
            "efficiency",
            "decision clarity",
            "action specificity",
            "participation balance",
            "discussion depth",
        ] {
            assert!(text.contains(axis), "missing axis `{axis}`");
        }
        assert!(text.contains("+ Clear decisions"));
        assert!(text.contains("> Timebox agenda items"));
    }

    #[test]
    fn quality_block_absent_when_not_provided() {
        let text = render(Some(&sample_result()));
        assert!(!text.contains("Meeting quality"));
        assert!(!text.contains("Overall score"));
    }

    #[test]
    fn empty_strength_and_recommendation_lists_are_omitted() {
        let mut result = sample_result();
        let mut quality = sample_quality();
        quality.strengths.clear();
        quality.recommendations.clear();
        result.quality_analysis = Some(quality);

        let text = render(Some(&result));
        assert!(!text.contains("Strengths:"));
        assert!(!text.contains("Recommendations:"));
    }

    #[test]
    fn action_items_keep_order_and_show_all_four_fields() {
        let mut result = sample_result();
        result.action_items.push(ActionItem {
            task: "Book room".to_owned(),
            assignee: "Bob".to_owned(),
            deadline: "2024-07-02".to_owned(),
            priority: "Low".to_owned(),
        });

        let text = render(Some(&result));
        let first = text.find("1. Send budget report").expect("first item");
        let second = text.find("2. Book room").expect("second item");
        assert!(first < second);
        assert!(text.contains("assignee: Alice | deadline: 2024-07-01 | priority: High"));
        assert!(text.contains("assignee: Bob | deadline: 2024-07-02 | priority: Low"));
    }

    #[test]
    fn empty_action_items_omit_the_block() {
        let mut result = sample_result();
        result.action_items.clear();
        let text = render(Some(&result));
        assert!(!text.contains("Action items"));
    }

    #[test]
    fn minutes_preserve_original_line_breaks() {
        let text = render(Some(&sample_result()));
        assert!(text.contains("## Agenda\nBudget review\n\nClosing remarks"));
    }

    #[test]
    fn bar_clamps_out_of_range_values_to_the_grid() {
        assert_eq!(bar(250.0).chars().filter(|c| *c == '#').count(), BAR_WIDTH);
        assert_eq!(bar(-5.0).chars().filter(|c| *c == '#').count(), 0);
        assert_eq!(bar(0.0).len(), BAR_WIDTH);
    }
}
