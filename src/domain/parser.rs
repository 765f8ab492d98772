//! Parser for the model's free-form analysis text
//!
//! A single line-by-line scan keyed on the section headers and field labels
//! pinned by the prompt template. The scan never fails: responses that match
//! nothing simply yield an empty report.

use crate::domain::models::{DiscoveryReport, Feature, Problem, TopPriority};

/// Which report section the scan is currently inside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Problems,
    Features,
    TopPriority,
}

/// Returns the trimmed remainder of `line` after `label`, if the line starts with it
fn field<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.strip_prefix(label).map(str::trim)
}

/// Parse the raw analysis text into a discovery report
///
/// Tolerates missing or out-of-order content: field lines with no open
/// record are dropped, missing sections leave their collections empty, and
/// an absent TOP PRIORITY section leaves `top_priority` as `None`. Records
/// keep first-seen order and duplicates are not collapsed.
pub fn parse_analysis(text: &str) -> DiscoveryReport {
    let mut report = DiscoveryReport::default();
    let mut section = Section::None;
    let mut current_problem: Option<Problem> = None;
    let mut current_feature: Option<Feature> = None;
    let mut evidence: Vec<String> = Vec::new();

    for raw_line in text.lines() {
        let line = raw_line.trim();

        // Section headers win over field labels on the same line
        if line.contains("PROBLEMS IDENTIFIED") {
            current_problem = None;
            current_feature = None;
            evidence.clear();
            section = Section::Problems;
            continue;
        }
        if line.contains("RECOMMENDED FEATURES") {
            finalize_problem(&mut report, current_problem.take(), &mut evidence);
            section = Section::Features;
            continue;
        }
        if line.contains("TOP PRIORITY") {
            finalize_feature(&mut report, current_feature.take());
            section = Section::TopPriority;
            continue;
        }

        match section {
            Section::Problems => {
                if let Some(title) = field(line, "Problem:") {
                    finalize_problem(&mut report, current_problem.take(), &mut evidence);
                    current_problem = Some(Problem::new(title.to_string()));
                } else if let Some(mentioned) = field(line, "Mentioned in:") {
                    if let Some(problem) = current_problem.as_mut() {
                        problem.mentioned_in = mentioned.to_string();
                    }
                } else if let Some(impact) = field(line, "Impact:") {
                    if let Some(problem) = current_problem.as_mut() {
                        problem.impact = impact.to_string();
                    }
                } else if let Some(rest) = field(line, "Evidence:") {
                    if !rest.is_empty() {
                        evidence.push(rest.to_string());
                    }
                } else if let Some(rest) = line.strip_prefix('-') {
                    evidence.push(rest.trim_start().to_string());
                } else if line.starts_with('"') {
                    evidence.push(line.to_string());
                }
            }
            Section::Features => {
                if let Some(name) = field(line, "Feature:") {
                    finalize_feature(&mut report, current_feature.take());
                    current_feature = Some(Feature::new(name.to_string()));
                } else if let Some(why) = field(line, "Why:") {
                    if let Some(feature) = current_feature.as_mut() {
                        feature.why = why.to_string();
                    }
                } else if let Some(effort) = field(line, "Effort:") {
                    if let Some(feature) = current_feature.as_mut() {
                        feature.effort = effort.to_string();
                    }
                } else if let Some(priority) = field(line, "Priority:") {
                    if let Some(feature) = current_feature.as_mut() {
                        feature.priority = priority.to_string();
                    }
                }
            }
            Section::TopPriority => {
                if let Some(what) = field(line, "What to build first:") {
                    report.top_priority = Some(TopPriority::new(what.to_string()));
                } else if let Some(why) = field(line, "Why:") {
                    if let Some(top) = report.top_priority.as_mut() {
                        top.why = why.to_string();
                    }
                } else if let Some(impact) = field(line, "Expected impact:") {
                    if let Some(top) = report.top_priority.as_mut() {
                        top.impact = impact.to_string();
                    }
                } else if let Some(quote) = field(line, "Customer evidence:") {
                    if let Some(top) = report.top_priority.as_mut() {
                        top.evidence = quote.to_string();
                    }
                }
            }
            Section::None => {}
        }
    }

    finalize_problem(&mut report, current_problem.take(), &mut evidence);
    finalize_feature(&mut report, current_feature.take());

    report
}

/// Attach accumulated evidence and push the problem if it has a title
fn finalize_problem(
    report: &mut DiscoveryReport,
    problem: Option<Problem>,
    evidence: &mut Vec<String>,
) {
    if let Some(mut problem) = problem {
        problem.evidence = std::mem::take(evidence);
        if !problem.title.is_empty() {
            report.problems.push(problem);
        }
    } else {
        evidence.clear();
    }
}

/// Push the feature if it has a name
fn finalize_feature(report: &mut DiscoveryReport, feature: Option<Feature>) {
    if let Some(feature) = feature {
        if !feature.feature.is_empty() {
            report.features.push(feature);
        }
    }
}
