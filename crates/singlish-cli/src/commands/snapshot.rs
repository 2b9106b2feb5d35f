//! JSONL regression snapshots: one `{input, output}` line per input line.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::process;

use serde::{Deserialize, Serialize};
use singlish_engine::SinglishEngine;

use super::open_engine;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub input: String,
    pub output: String,
}

/// Changes between a baseline and the current outputs.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SnapshotDiff {
    pub same: usize,
    /// `(input, baseline output, current output)`
    pub changed: Vec<(String, String, String)>,
    pub added: Vec<SnapshotEntry>,
    pub removed: Vec<String>,
}

impl SnapshotDiff {
    pub fn is_clean(&self) -> bool {
        self.changed.is_empty() && self.removed.is_empty()
    }
}

/// Non-empty lines that do not start with `#`. Leading and trailing
/// whitespace is trimmed.
pub fn read_inputs(input_file: &str) -> Vec<String> {
    let file = die!(
        fs::File::open(input_file),
        "Failed to open input file {input_file}: {}"
    );
    BufReader::new(file)
        .lines()
        .map(|l| die!(l, "Failed to read line: {}"))
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect()
}

pub fn take_snapshot(engine: &SinglishEngine, inputs: &[String]) -> Vec<SnapshotEntry> {
    inputs
        .iter()
        .map(|input| SnapshotEntry {
            input: input.clone(),
            output: engine.translate_text(input),
        })
        .collect()
}

pub fn parse_snapshot(content: &str) -> Result<Vec<SnapshotEntry>, serde_json::Error> {
    content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(serde_json::from_str::<SnapshotEntry>)
        .collect()
}

pub fn diff(baseline: &[SnapshotEntry], current: &[SnapshotEntry]) -> SnapshotDiff {
    let base: HashMap<&str, &str> = baseline
        .iter()
        .map(|e| (e.input.as_str(), e.output.as_str()))
        .collect();
    let mut result = SnapshotDiff::default();

    for entry in current {
        match base.get(entry.input.as_str()) {
            Some(&old) if old == entry.output => result.same += 1,
            Some(&old) => result.changed.push((
                entry.input.clone(),
                old.to_string(),
                entry.output.clone(),
            )),
            None => result.added.push(entry.clone()),
        }
    }

    let current_inputs: HashSet<&str> = current.iter().map(|e| e.input.as_str()).collect();
    let mut seen = HashSet::new();
    for entry in baseline {
        if !current_inputs.contains(entry.input.as_str()) && seen.insert(entry.input.as_str()) {
            result.removed.push(entry.input.clone());
        }
    }
    result
}

pub fn snapshot_cmd(input_file: &str, output_file: &str, tables: Option<&str>) {
    let engine = open_engine(tables);
    let inputs = read_inputs(input_file);

    let file = die!(
        fs::File::create(output_file),
        "Failed to create output file {output_file}: {}"
    );
    let mut writer = BufWriter::new(file);
    for entry in take_snapshot(&engine, &inputs) {
        let line = die!(serde_json::to_string(&entry), "JSON serialization failed: {}");
        die!(writeln!(writer, "{}", line), "Failed to write: {}");
    }
    die!(writer.flush(), "Failed to write: {}");

    eprintln!("Snapshot written: {} inputs -> {}", inputs.len(), output_file);
}

pub fn diff_snapshot_cmd(input_file: &str, baseline_file: &str, tables: Option<&str>) {
    let engine = open_engine(tables);
    let inputs = read_inputs(input_file);

    let content = die!(
        fs::read_to_string(baseline_file),
        "Failed to read baseline file {baseline_file}: {}"
    );
    let baseline = die!(parse_snapshot(&content), "Failed to parse baseline JSONL: {}");
    let current = take_snapshot(&engine, &inputs);
    let d = diff(&baseline, &current);

    for (input, old, new) in &d.changed {
        println!("  CHANGED: {} -> {} (was: {})", input, new, old);
    }
    for entry in &d.added {
        println!("  NEW:     {} -> {}", entry.input, entry.output);
    }
    for input in &d.removed {
        println!("  REMOVED: {}", input);
    }

    println!();
    println!("=== Summary ===");
    println!("  Total:    {}", inputs.len());
    println!("  Same:     {}", d.same);
    println!("  Changed:  {}", d.changed.len());
    println!("  New:      {}", d.added.len());
    println!("  Removed:  {}", d.removed.len());

    if !d.is_clean() {
        process::exit(1);
    }
}
