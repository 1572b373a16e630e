//! Reconciliation plan display model

use serde::Serialize;
use tabled::Tabled;

use crate::manifest::{Action, PlannedChange};

/// One planned change as a table row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PlanDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ACTION")]
    pub action: String,
}

impl From<&PlannedChange<'_>> for PlanDisplay {
    fn from(change: &PlannedChange<'_>) -> Self {
        let action = match change.action {
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete (not supported)",
            Action::InSync => "in sync",
        };
        Self {
            name: change.name.to_string(),
            action: action.to_string(),
        }
    }
}
