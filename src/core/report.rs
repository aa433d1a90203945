use crate::core::score::{self, MAX_TERM_SCORE};
use crate::core::vocabulary::{Term, Vocabulary};
use colored::Colorize;
use serde::Serialize;

const PROGRESS_CELLS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermScore {
    pub term: String,
    pub occurrences: usize,
    pub score: u32,
}

/// Outcome of one scoring pass. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    /// Matched terms only, in vocabulary order.
    pub per_term_scores: Vec<TermScore>,
    pub aggregate_percentage: f64,
    pub matched_count: usize,
    pub total_vocabulary_count: usize,
    pub top_terms: Vec<TermScore>,
    pub suggestions: Vec<&'static str>,
}

impl ScoreReport {
    /// Whole percent, rounded down so the display never crosses a threshold
    /// the exact value has not reached.
    pub fn display_percentage(&self) -> u8 {
        self.aggregate_percentage.floor().clamp(0.0, 100.0) as u8
    }

    pub fn label(&self) -> &'static str {
        score::label_for_percentage(self.aggregate_percentage)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExitStatus {
    pub reason: Option<String>,
}

impl ExitStatus {
    pub fn ok(&self) -> bool {
        self.reason.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub status: &'static str,
    pub percentage: f64,
    pub label: &'static str,
    pub matched_count: usize,
    pub total_vocabulary_count: usize,
    pub per_term_scores: Vec<TermScore>,
    pub top_terms: Vec<TermScore>,
    pub suggestions: Vec<&'static str>,
    pub min_score: u8,
}

impl JsonReport {
    pub fn new(report: &ScoreReport, min_score: u8) -> Self {
        Self {
            status: "scored",
            percentage: report.aggregate_percentage,
            label: report.label(),
            matched_count: report.matched_count,
            total_vocabulary_count: report.total_vocabulary_count,
            per_term_scores: report.per_term_scores.clone(),
            top_terms: report.top_terms.clone(),
            suggestions: report.suggestions.clone(),
            min_score,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NoTextJson {
    pub status: &'static str,
    pub message: &'static str,
}

pub const NO_TEXT_MESSAGE: &str = "no text found in document";

impl Default for NoTextJson {
    fn default() -> Self {
        Self {
            status: "no_text",
            message: NO_TEXT_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VocabularyJson<'a> {
    pub total_weight: u64,
    pub terms: Vec<&'a Term>,
}

impl<'a> From<&'a Vocabulary> for VocabularyJson<'a> {
    fn from(vocabulary: &'a Vocabulary) -> Self {
        Self {
            total_weight: vocabulary.total_weight(),
            terms: vocabulary.iter().collect(),
        }
    }
}

pub fn evaluate_exit(report: &ScoreReport, min_score: u8) -> ExitStatus {
    let reason = (report.aggregate_percentage < f64::from(min_score)).then(|| {
        format!(
            "score {}% is below min_score {}",
            report.display_percentage(),
            min_score
        )
    });

    ExitStatus { reason }
}

/// Capitalizes each alphabetic run and lowercases the rest: "MATLAB" -> "Matlab".
pub fn title_case(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut at_word_start = true;
    for ch in term.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

pub fn progress_bar(score: u32) -> String {
    let filled = score.min(MAX_TERM_SCORE) * PROGRESS_CELLS / MAX_TERM_SCORE;
    let empty = PROGRESS_CELLS - filled;
    format!(
        "{}{}",
        "#".repeat(filled as usize),
        "-".repeat(empty as usize)
    )
}

fn colored_percentage(report: &ScoreReport) -> String {
    let text = format!("{}%", report.display_percentage());
    if report.suggestions.is_empty() {
        text.green().bold().to_string()
    } else if report.matched_count > 0 {
        text.yellow().bold().to_string()
    } else {
        text.red().bold().to_string()
    }
}

pub fn print_human(report: &ScoreReport, exit: &ExitStatus) {
    println!(
        "Resume Match Score: {} ({})",
        colored_percentage(report),
        report.label()
    );
    println!(
        "Skills found: {}/{} matches",
        report.matched_count, report.total_vocabulary_count
    );

    if !report.top_terms.is_empty() {
        println!();
        println!("{}", "TOP SKILLS".blue().bold());
        let width = report
            .top_terms
            .iter()
            .map(|entry| entry.term.chars().count())
            .max()
            .unwrap_or(0);
        for entry in &report.top_terms {
            println!(
                "{:<width$}  {:>3}  [{}]",
                title_case(&entry.term),
                entry.score,
                progress_bar(entry.score),
                width = width
            );
        }
    }

    println!();
    if report.suggestions.is_empty() {
        println!("{}", "Ready: the resume covers the target skills".green());
    } else {
        println!("{}", "QUICK WINS".yellow().bold());
        for suggestion in &report.suggestions {
            println!("-> {}", suggestion);
        }
    }

    println!();
    match &exit.reason {
        None => println!("exit: OK"),
        Some(reason) => println!("exit: FAILED ({})", reason),
    }
}

pub fn print_no_text() {
    println!("{}", NO_TEXT_MESSAGE.red().bold());
    println!("-> hint: the document has no text layer; export it as text and retry");
}

pub fn print_vocabulary(vocabulary: &Vocabulary) {
    if vocabulary.is_empty() {
        println!("vocabulary is empty; every document will score 0%");
        return;
    }

    let width = vocabulary
        .iter()
        .map(|term| term.term.chars().count())
        .max()
        .unwrap_or(0);
    for term in vocabulary.iter() {
        println!("{:<width$}  {:>3}", term.term, term.weight, width = width);
    }
    println!(
        "{} terms, total weight {}",
        vocabulary.len(),
        vocabulary.total_weight()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score::{Scan, score};

    fn report_for(text: &str) -> ScoreReport {
        match score(text, &Vocabulary::builtin()) {
            Scan::Scored(report) => report,
            Scan::NoText => panic!("expected report"),
        }
    }

    #[test]
    fn progress_bar_tracks_score_in_tenths() {
        assert_eq!(progress_bar(0), "----------");
        assert_eq!(progress_bar(45), "####------");
        assert_eq!(progress_bar(100), "##########");
        assert_eq!(progress_bar(250), "##########");
    }

    #[test]
    fn exit_fails_below_min_score() {
        let report = report_for("sql");
        let exit = evaluate_exit(&report, 70);
        assert!(!exit.ok());
        assert!(exit.reason.unwrap().contains("below min_score 70"));

        let exit = evaluate_exit(&report, 0);
        assert!(exit.ok());
        assert!(exit.reason.is_none());
    }

    fn report_at(aggregate_percentage: f64) -> ScoreReport {
        ScoreReport {
            per_term_scores: Vec::new(),
            aggregate_percentage,
            matched_count: 0,
            total_vocabulary_count: 0,
            top_terms: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    #[test]
    fn displayed_percentage_never_rounds_up_past_threshold() {
        let report = report_at(69.5);
        assert_eq!(report.display_percentage(), 69);
        assert_eq!(report.label(), "Needs work");

        let exit = evaluate_exit(&report, 70);
        assert_eq!(
            exit.reason.as_deref(),
            Some("score 69% is below min_score 70")
        );

        assert_eq!(report_at(100.0).display_percentage(), 100);
        assert_eq!(report_at(0.4).display_percentage(), 0);
    }

    #[test]
    fn skill_names_are_title_cased_for_display() {
        assert_eq!(title_case("python"), "Python");
        assert_eq!(title_case("MATLAB"), "Matlab");
        assert_eq!(title_case("C"), "C");
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("ci/cd"), "Ci/Cd");
    }

    #[test]
    fn json_report_carries_counts_and_label() {
        let report = report_for("python python flask");
        let json = serde_json::to_value(JsonReport::new(&report, 70)).unwrap();
        assert_eq!(json["status"], "scored");
        assert_eq!(json["matched_count"], 2);
        assert_eq!(json["total_vocabulary_count"], 12);
        assert_eq!(json["label"], "Needs work");
        assert_eq!(json["top_terms"][0]["term"], "python");
        assert_eq!(json["top_terms"][0]["score"], 30);
    }

    #[test]
    fn vocabulary_json_hides_folded_form() {
        let vocab = Vocabulary::builtin();
        let json = serde_json::to_value(VocabularyJson::from(&vocab)).unwrap();
        assert_eq!(json["total_weight"], 110);
        assert_eq!(json["terms"][2]["term"], "MATLAB");
        assert!(json["terms"][2].get("folded").is_none());
    }
}
