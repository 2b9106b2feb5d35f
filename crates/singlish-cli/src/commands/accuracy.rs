//! Accuracy runs over a TOML corpus of input / expected pairs.
//!
//! Outputs are compared with [`comparison_key`], which ignores surrounding
//! whitespace, whitespace run lengths and joiners.

use std::collections::BTreeMap;
use std::fs;
use std::process;

use serde::{Deserialize, Serialize};
use singlish_core::normalize::comparison_key;
use singlish_engine::SinglishEngine;

use super::open_engine;

#[derive(Debug, Deserialize)]
pub struct AccuracyCorpus {
    pub cases: Vec<AccuracyCase>,
}

#[derive(Debug, Deserialize)]
pub struct AccuracyCase {
    pub id: String,
    pub input: String,
    pub expected: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub note: Option<String>,
    /// `mismatch` records a known divergence: the case passes while the
    /// output still differs from `expected`.
    #[serde(default)]
    pub expect: Expectation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Expectation {
    #[default]
    Match,
    Mismatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
pub struct AccuracyResult {
    pub id: String,
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub status: AccuracyStatus,
    pub category: String,
    pub expect: Expectation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccuracySummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
    pub pass_rate: String,
}

#[derive(Debug, Serialize)]
pub struct AccuracyReport {
    pub results: Vec<AccuracyResult>,
    pub summary: AccuracySummary,
}

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to parse corpus TOML: {0}")]
    Parse(String),
    #[error("duplicate case id: {0}")]
    DuplicateId(String),
}

pub fn parse_corpus(content: &str) -> Result<AccuracyCorpus, CorpusError> {
    let corpus: AccuracyCorpus =
        toml::from_str(content).map_err(|e| CorpusError::Parse(e.to_string()))?;
    let mut seen = std::collections::HashSet::new();
    for case in &corpus.cases {
        if !seen.insert(case.id.as_str()) {
            return Err(CorpusError::DuplicateId(case.id.clone()));
        }
    }
    Ok(corpus)
}

/// Cases matching both filters (a `None` filter matches everything).
pub fn filter_cases<'a>(
    corpus: &'a AccuracyCorpus,
    tag: Option<&str>,
    category: Option<&str>,
) -> Vec<&'a AccuracyCase> {
    corpus
        .cases
        .iter()
        .filter(|c| tag.map_or(true, |t| c.tags.iter().any(|ct| ct == t)))
        .filter(|c| category.map_or(true, |cat| c.category == cat))
        .collect()
}

pub fn run_case(engine: &SinglishEngine, case: &AccuracyCase) -> AccuracyResult {
    let (actual, status) = if case.skip {
        (String::new(), AccuracyStatus::Skip)
    } else {
        let actual = engine.translate_text(&case.input);
        let matches = comparison_key(&actual) == comparison_key(&case.expected);
        let pass = matches == (case.expect == Expectation::Match);
        let status = if pass {
            AccuracyStatus::Pass
        } else {
            AccuracyStatus::Fail
        };
        (actual, status)
    };

    AccuracyResult {
        id: case.id.clone(),
        input: case.input.clone(),
        expected: case.expected.clone(),
        actual,
        status,
        category: case.category.clone(),
        expect: case.expect,
        note: case.note.clone(),
    }
}

pub fn summarize(results: &[AccuracyResult]) -> AccuracySummary {
    let count = |s: AccuracyStatus| results.iter().filter(|r| r.status == s).count();
    let total = results.len();
    let pass = count(AccuracyStatus::Pass);
    let fail = count(AccuracyStatus::Fail);
    let skip = count(AccuracyStatus::Skip);
    let tested = total - skip;
    let rate = if tested > 0 {
        pass as f64 / tested as f64 * 100.0
    } else {
        0.0
    };
    AccuracySummary {
        total,
        pass,
        fail,
        skip,
        pass_rate: format!("{:.1}%", rate),
    }
}

pub fn accuracy_cmd(
    corpus_file: &str,
    tables: Option<&str>,
    tag: Option<&str>,
    category: Option<&str>,
    verbose: bool,
    json: bool,
) {
    let engine = open_engine(tables);
    let content = die!(
        fs::read_to_string(corpus_file),
        "Failed to read corpus file {corpus_file}: {}"
    );
    let corpus = die!(parse_corpus(&content), "{}");

    let cases = filter_cases(&corpus, tag, category);
    if cases.is_empty() {
        eprintln!("No cases match the given filters");
        process::exit(1);
    }

    let results: Vec<AccuracyResult> = cases.iter().map(|c| run_case(&engine, c)).collect();
    let summary = summarize(&results);
    let fail = summary.fail;

    if json {
        let report = AccuracyReport { results, summary };
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&report), "JSON serialization failed: {}")
        );
    } else {
        print_text(&results, &summary, verbose);
    }

    if fail > 0 {
        process::exit(1);
    }
}

fn print_text(results: &[AccuracyResult], summary: &AccuracySummary, verbose: bool) {
    let mut grouped: BTreeMap<&str, Vec<&AccuracyResult>> = BTreeMap::new();
    for r in results {
        grouped.entry(&r.category).or_default().push(r);
    }

    for (cat, group) in &grouped {
        println!("\n=== {} ({} cases) ===", cat, group.len());
        for r in group {
            match r.status {
                AccuracyStatus::Pass => {
                    if verbose {
                        let marker = match r.expect {
                            Expectation::Match => "",
                            Expectation::Mismatch => " [known mismatch]",
                        };
                        println!(
                            "  \u{2713} {}: {} \u{2192} {}{}",
                            r.id, r.input, r.actual, marker
                        );
                    }
                }
                AccuracyStatus::Fail => match r.expect {
                    Expectation::Match => println!(
                        "  \u{2717} {}: {} \u{2192} {} (got: {})",
                        r.id, r.input, r.expected, r.actual
                    ),
                    Expectation::Mismatch => println!(
                        "  \u{2717} {}: {} now matches {} (remove expect = \"mismatch\")",
                        r.id, r.input, r.expected
                    ),
                },
                AccuracyStatus::Skip => {
                    let reason = r.note.as_deref().unwrap_or("known failure");
                    println!("  - {}: {} [skip: {}]", r.id, r.input, reason);
                }
            }
        }
    }

    let tested = summary.total - summary.skip;
    println!();
    println!("=== Summary ===");
    println!("  Total:     {}", summary.total);
    println!("  Pass:      {:>3}", summary.pass);
    println!("  Fail:      {:>3}", summary.fail);
    println!("  Skip:      {:>3}", summary.skip);
    println!(
        "  Pass rate: {} ({}/{})",
        summary.pass_rate, summary.pass, tested
    );
}
