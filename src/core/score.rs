use crate::core::report::{ScoreReport, TermScore};
use crate::core::vocabulary::Vocabulary;
use tracing::debug;

/// Percentages strictly below this attach the suggestion list.
pub const SUGGESTION_THRESHOLD: f64 = 70.0;
pub const TOP_TERMS_LIMIT: usize = 6;
pub const MAX_TERM_SCORE: u32 = 100;

pub const SUGGESTIONS: &[&str] = &[
    "Add Python/Flask projects to GitHub",
    "Mention API/database experience",
    "Include ML/data science projects",
];

/// Result of scoring one document.
#[derive(Debug, Clone, PartialEq)]
pub enum Scan {
    /// Nothing but whitespace was handed in; distinct from a zero-match report.
    NoText,
    Scored(ScoreReport),
}

pub fn score(text: &str, vocabulary: &Vocabulary) -> Scan {
    if text.trim().is_empty() {
        debug!("input text is empty after trimming");
        return Scan::NoText;
    }

    let lowered = text.to_lowercase();
    let mut per_term_scores = Vec::new();

    for term in vocabulary.iter() {
        // str::matches yields non-overlapping hits, left to right.
        let occurrences = lowered.matches(term.folded.as_str()).count();
        if occurrences == 0 {
            continue;
        }

        per_term_scores.push(TermScore {
            term: term.term.clone(),
            occurrences,
            score: term_score(occurrences, term.weight),
        });
    }

    let aggregate_percentage = aggregate_percentage(&per_term_scores, vocabulary.total_weight());

    let mut top_terms = per_term_scores.clone();
    // sort_by is stable, so equal scores keep vocabulary order.
    top_terms.sort_by(|a, b| b.score.cmp(&a.score));
    top_terms.truncate(TOP_TERMS_LIMIT);

    let suggestions = if aggregate_percentage < SUGGESTION_THRESHOLD {
        SUGGESTIONS.to_vec()
    } else {
        Vec::new()
    };

    debug!(
        matched = per_term_scores.len(),
        total = vocabulary.len(),
        percentage = aggregate_percentage,
        "scored document"
    );

    Scan::Scored(ScoreReport {
        matched_count: per_term_scores.len(),
        total_vocabulary_count: vocabulary.len(),
        per_term_scores,
        aggregate_percentage,
        top_terms,
        suggestions,
    })
}

fn term_score(occurrences: usize, weight: u32) -> u32 {
    let raw = u64::try_from(occurrences)
        .unwrap_or(u64::MAX)
        .saturating_mul(u64::from(weight));
    raw.min(u64::from(MAX_TERM_SCORE)) as u32
}

fn aggregate_percentage(scores: &[TermScore], total_weight: u64) -> f64 {
    if total_weight == 0 {
        return 0.0;
    }

    let total: u64 = scores.iter().map(|s| u64::from(s.score)).sum();
    (total as f64 * 100.0 / total_weight as f64).clamp(0.0, 100.0)
}

pub fn label_for_percentage(percentage: f64) -> &'static str {
    if percentage < SUGGESTION_THRESHOLD {
        "Needs work"
    } else {
        "Ready"
    }
}
