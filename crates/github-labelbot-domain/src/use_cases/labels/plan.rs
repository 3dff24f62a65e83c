use github_labelbot_domain_models::{Label, LabelSet};
use github_labelbot_ghapi_interface::types::GhLabel;

/// A single sync action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// Create a missing label.
    Create {
        /// Label to create.
        label: Label,
    },
    /// Update a drifted label in place.
    Update {
        /// Remote name of the label to update.
        current_name: String,
        /// Declared state to apply.
        label: Label,
    },
    /// Delete a stock label.
    Delete {
        /// Name of the label to delete.
        name: String,
    },
}

impl std::fmt::Display for SyncAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create { label } => {
                write!(f, "+ create {} (#{})", label.name, label.color)
            }
            Self::Update {
                current_name,
                label,
            } => {
                write!(f, "~ update {} -> {} (#{})", current_name, label.name, label.color)
            }
            Self::Delete { name } => write!(f, "- delete {}", name),
        }
    }
}

/// Build the action list that moves the remote label state to the declared
/// set. Deletions come first, the order the original provisioning used;
/// everything else is order-insensitive since names are distinct.
pub fn build_sync_plan(remote: &[GhLabel], set: &LabelSet) -> Vec<SyncAction> {
    let mut actions = Vec::new();

    for name in &set.delete {
        if find_remote(remote, name).is_some() {
            actions.push(SyncAction::Delete { name: name.clone() });
        }
    }

    for label in &set.labels {
        match find_remote(remote, &label.name) {
            None => actions.push(SyncAction::Create {
                label: label.clone(),
            }),
            Some(existing) if label_drifted(existing, label) => {
                actions.push(SyncAction::Update {
                    current_name: existing.name.clone(),
                    label: label.clone(),
                })
            }
            Some(_) => (),
        }
    }

    actions
}

/// Convert a declared label to its wire form.
pub(crate) fn to_gh_label(label: &Label) -> GhLabel {
    GhLabel {
        name: label.name.clone(),
        color: label.color.as_str().into(),
        description: label.description.clone(),
    }
}

// GitHub label names are case-insensitive.
fn find_remote<'a>(remote: &'a [GhLabel], name: &str) -> Option<&'a GhLabel> {
    remote.iter().find(|l| l.name.eq_ignore_ascii_case(name))
}

fn label_drifted(existing: &GhLabel, label: &Label) -> bool {
    existing.name != label.name
        || !existing.color.eq_ignore_ascii_case(label.color.as_str())
        || existing.description.as_deref().unwrap_or("")
            != label.description.as_deref().unwrap_or("")
}
