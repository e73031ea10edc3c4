use std::fs;
use std::io;

use lipi_core::Transliterator;
use serde::{Deserialize, Serialize};

use super::die;

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Deserialize)]
pub struct AccuracyCorpus {
    pub cases: Vec<AccuracyCase>,
}

#[derive(Debug, Deserialize)]
pub struct AccuracyCase {
    pub word: String,
    pub lang: String,
    pub expected: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccuracyResult {
    pub word: String,
    pub lang: String,
    pub expected: String,
    pub actual: String,
    pub status: AccuracyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyStatus {
    Pass,
    Fail,
    Skip,
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

/// Case filters; `None` matches everything.
#[derive(Debug, Default)]
pub struct CaseFilter<'a> {
    pub tag: Option<&'a str>,
    pub lang: Option<&'a str>,
}

impl CaseFilter<'_> {
    fn matches(&self, case: &AccuracyCase) -> bool {
        self.tag.map_or(true, |t| case.tags.iter().any(|c| c == t))
            && self.lang.map_or(true, |l| case.lang == l)
    }
}

pub fn parse_corpus(toml_str: &str) -> Result<AccuracyCorpus, CorpusError> {
    toml::from_str(toml_str).map_err(|e| CorpusError::Parse(e.to_string()))
}

pub fn load_corpus(path: &str) -> Result<AccuracyCorpus, CorpusError> {
    let content = fs::read_to_string(path)?;
    parse_corpus(&content)
}

pub fn run_accuracy(
    t: &Transliterator,
    corpus: &AccuracyCorpus,
    filter: &CaseFilter<'_>,
) -> AccuracyReport {
    let mut results = Vec::new();
    for case in corpus.cases.iter().filter(|c| filter.matches(c)) {
        let actual = t.transliterate(&case.word, &case.lang);
        let status = if case.skip {
            AccuracyStatus::Skip
        } else if actual == case.expected {
            AccuracyStatus::Pass
        } else {
            AccuracyStatus::Fail
        };
        results.push(AccuracyResult {
            word: case.word.clone(),
            lang: case.lang.clone(),
            expected: case.expected.clone(),
            actual,
            status,
            note: case.note.clone(),
        });
    }

    let count = |s: AccuracyStatus| results.iter().filter(|r| r.status == s).count();
    let pass = count(AccuracyStatus::Pass);
    let fail = count(AccuracyStatus::Fail);
    let skip = count(AccuracyStatus::Skip);
    let scored = pass + fail;
    let pass_rate = if scored == 0 {
        "n/a".to_string()
    } else {
        format!("{:.1}%", pass as f64 * 100.0 / scored as f64)
    };

    AccuracyReport {
        summary: AccuracySummary {
            total: results.len(),
            pass,
            fail,
            skip,
            pass_rate,
        },
        results,
    }
}

pub fn accuracy_cmd(
    t: &Transliterator,
    corpus_file: &str,
    filter: &CaseFilter<'_>,
    verbose: bool,
    json: bool,
) {
    let corpus = die!(
        load_corpus(corpus_file),
        "Failed to load corpus {corpus_file}: {}"
    );
    let report = run_accuracy(t, &corpus, filter);

    if json {
        let text = die!(
            serde_json::to_string_pretty(&report),
            "Error encoding JSON: {}"
        );
        println!("{text}");
    } else {
        for r in &report.results {
            let mark = match r.status {
                AccuracyStatus::Pass if !verbose => continue,
                AccuracyStatus::Pass => "PASS",
                AccuracyStatus::Fail => "FAIL",
                AccuracyStatus::Skip => "SKIP",
            };
            print!(
                "{mark} [{}] {} → {} (expected {})",
                r.lang, r.word, r.actual, r.expected
            );
            match &r.note {
                Some(note) => println!("  # {note}"),
                None => println!(),
            }
        }
        let s = &report.summary;
        println!(
            "{} cases: {} pass, {} fail, {} skip ({})",
            s.total, s.pass, s.fail, s.skip, s.pass_rate
        );
    }

    if report.summary.fail > 0 {
        std::process::exit(1);
    }
}
