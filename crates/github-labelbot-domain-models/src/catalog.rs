//! Default label catalog.

use crate::{Label, LabelColor, LabelSet};

const DEFAULT_LABELS: &[(&str, &str, &str)] = &[
    ("priority:critical", "b60205", "Must be fixed immediately"),
    ("priority:high", "d93f0b", "Should be addressed in the current iteration"),
    ("priority:medium", "fbca04", "Normal scheduling"),
    ("priority:low", "0e8a16", "Nice to have"),
    ("type:bug", "d73a4a", "Something is broken"),
    ("type:feature", "a2eeef", "New capability"),
    ("type:enhancement", "84b6eb", "Improvement to existing behavior"),
    ("type:refactor", "fef2c0", "Internal restructuring, no behavior change"),
    ("type:docs", "0075ca", "Documentation only"),
    ("status:triage", "ededed", "Awaiting initial review"),
    ("status:blocked", "b60205", "Blocked on something else"),
    ("status:in-progress", "c2e0c6", "Someone is working on it"),
    ("status:needs-review", "fbca04", "Waiting for a review"),
    ("area:genome", "5319e7", "Genome module"),
    ("area:mutations", "1d76db", "Mutations module"),
    ("area:simulation", "bfd4f2", "Population and simulation loop"),
    ("area:tooling", "d4c5f9", "Build, packaging and repository tooling"),
];

// Stock labels superseded by their type:* equivalents.
const DEFAULT_DELETIONS: &[&str] = &["bug", "enhancement"];

/// Default label set.
pub fn default_label_set() -> LabelSet {
    LabelSet {
        labels: DEFAULT_LABELS
            .iter()
            .map(|(name, color, description)| Label {
                name: (*name).into(),
                color: LabelColor::new(color).expect("default catalog color"),
                description: Some((*description).into()),
            })
            .collect(),
        delete: DEFAULT_DELETIONS.iter().map(|s| (*s).into()).collect(),
    }
}
