//! Desired-state manifests and the actions needed to reach them
//!
//! A manifest is a YAML file listing organizations:
//!
//! ```yaml
//! orgs:
//!   - name: acme
//!     description: Acme Corp
//!     members: [admin, alice]
//!   - name: legacy
//!     ensure: absent
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::provider::{DesiredOrg, Ensure, OrgResource};

/// Parsed manifest file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub orgs: Vec<ManifestOrg>,
}

/// One organization entry in a manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestOrg {
    /// Resource name (the organization name on the server)
    pub name: String,

    #[serde(flatten)]
    pub desired: DesiredOrg,
}

impl Manifest {
    /// Load a manifest from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse manifest YAML
    pub fn parse(contents: &str) -> Result<Self> {
        let manifest: Manifest = serde_yaml::from_str(contents).map_err(ConfigError::from)?;

        let mut seen = std::collections::HashSet::new();
        for org in &manifest.orgs {
            if !seen.insert(org.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "organization '{}' is listed more than once",
                    org.name
                ))
                .into());
            }
        }

        Ok(manifest)
    }
}

/// What a reconciliation pass will do for one organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Update,
    Delete,
    InSync,
}

/// Planned action for one manifest entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedChange<'a> {
    pub name: &'a str,
    /// Organization name on the server; differs from `name` when `org` is set
    pub org: &'a str,
    pub action: Action,
    #[serde(skip)]
    pub desired: &'a DesiredOrg,
}

/// Decide, for every manifest entry, which lifecycle operation to run.
///
/// Mirrors how a configuration-management host drives a provider: missing
/// and wanted means create, existing and unwanted means delete, existing
/// and different means update.
pub fn plan<'a>(current: &[OrgResource], manifest: &'a Manifest) -> Vec<PlannedChange<'a>> {
    manifest
        .orgs
        .iter()
        .map(|entry| {
            let org_name = entry.desired.org_name(&entry.name);
            let existing = current
                .iter()
                .filter_map(OrgResource::as_present)
                .find(|org| org.name == org_name);

            let action = match (entry.desired.ensure, existing) {
                (Ensure::Present, None) => Action::Create,
                (Ensure::Present, Some(org)) if entry.desired.differs_from(org) => Action::Update,
                (Ensure::Present, Some(_)) => Action::InSync,
                (Ensure::Absent, Some(_)) => Action::Delete,
                (Ensure::Absent, None) => Action::InSync,
            };

            PlannedChange {
                name: &entry.name,
                org: org_name,
                action,
                desired: &entry.desired,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
orgs:
  - name: acme
    description: Acme Corp
    members: [admin, alice]
  - name: labs
    description: Research
  - name: legacy
    ensure: absent
  - name: ghost
    ensure: absent
  - name: steady
    members: [admin]
"#;

    fn current() -> Vec<OrgResource> {
        vec![
            OrgResource::present(
                "acme",
                vec!["admin".to_string()],
                Some("Acme Corp".to_string()),
            ),
            OrgResource::present("legacy", Vec::new(), None),
            OrgResource::present("steady", vec!["admin".to_string()], None),
        ]
    }

    #[test]
    fn test_parse_manifest() {
        let manifest = Manifest::parse(MANIFEST).unwrap();

        assert_eq!(manifest.orgs.len(), 5);
        assert_eq!(manifest.orgs[0].name, "acme");
        assert_eq!(
            manifest.orgs[0].desired.member_names(),
            &["admin".to_string(), "alice".to_string()]
        );
        assert_eq!(manifest.orgs[2].desired.ensure, Ensure::Absent);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Manifest::parse("orgs:\n  - name: a\n  - name: a\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("more than once"));
    }

    #[test]
    fn test_plan_actions() {
        let manifest = Manifest::parse(MANIFEST).unwrap();
        let changes = plan(&current(), &manifest);

        let actions: Vec<_> = changes.iter().map(|c| (c.name, c.action)).collect();
        assert_eq!(
            actions,
            vec![
                ("acme", Action::Update),
                ("labs", Action::Create),
                ("legacy", Action::Delete),
                ("ghost", Action::InSync),
                ("steady", Action::InSync),
            ]
        );
    }

    #[test]
    fn test_plan_matches_org_field_override() {
        let manifest = Manifest::parse(
            "orgs:\n  - name: labs\n    org: Labs Inc\n    members: [admin]\n",
        )
        .unwrap();
        let current = vec![OrgResource::present(
            "Labs Inc",
            vec!["admin".to_string()],
            None,
        )];

        let changes = plan(&current, &manifest);
        assert_eq!(changes[0].name, "labs");
        assert_eq!(changes[0].org, "Labs Inc");
        assert_eq!(changes[0].action, Action::InSync);
    }

    #[test]
    fn test_plan_ignores_kept_admin() {
        let manifest = Manifest::parse(
            "orgs:\n  - name: acme\n    description: Acme Corp\n    members: [alice]\n",
        )
        .unwrap();
        let current = vec![OrgResource::present(
            "acme",
            vec!["admin".to_string(), "alice".to_string()],
            Some("Acme Corp".to_string()),
        )];

        let changes = plan(&current, &manifest);
        assert_eq!(changes[0].action, Action::InSync);
    }

    #[test]
    fn test_plan_against_unprovisioned_server_creates_everything() {
        let manifest = Manifest::parse("orgs:\n  - name: a\n  - name: b\n").unwrap();
        let current = vec![OrgResource::unprovisioned("localhost")];

        let changes = plan(&current, &manifest);
        assert!(changes.iter().all(|c| c.action == Action::Create));
    }
}
