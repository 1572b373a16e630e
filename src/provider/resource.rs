//! Current-state and desired-state records for the `influxdb_org` resource

use serde::{Deserialize, Serialize};

use super::diff::MembershipDiff;

/// Whether an organization should exist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ensure {
    #[default]
    Present,
    Absent,
}

/// An organization that exists on the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentOrg {
    pub name: String,
    pub ensure: Ensure,
    pub members: Vec<String>,
    pub description: Option<String>,
}

/// Marker returned when the server has no organizations at all.
///
/// This means the server has not been set up yet, not that zero orgs are
/// desired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unprovisioned {
    pub influxdb_host: String,
    pub org: Option<String>,
    pub ensure: Ensure,
    pub description: Option<String>,
}

/// One record returned by `get`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrgResource {
    Present(PresentOrg),
    Unprovisioned(Unprovisioned),
}

impl OrgResource {
    /// Build a record for an existing organization
    pub fn present(
        name: impl Into<String>,
        members: Vec<String>,
        description: Option<String>,
    ) -> Self {
        OrgResource::Present(PresentOrg {
            name: name.into(),
            ensure: Ensure::Present,
            members,
            description,
        })
    }

    /// Build the not-yet-provisioned marker for a host
    pub fn unprovisioned(influxdb_host: impl Into<String>) -> Self {
        OrgResource::Unprovisioned(Unprovisioned {
            influxdb_host: influxdb_host.into(),
            org: None,
            ensure: Ensure::Absent,
            description: None,
        })
    }

    pub fn ensure(&self) -> Ensure {
        match self {
            OrgResource::Present(org) => org.ensure,
            OrgResource::Unprovisioned(marker) => marker.ensure,
        }
    }

    pub fn as_present(&self) -> Option<&PresentOrg> {
        match self {
            OrgResource::Present(org) => Some(org),
            OrgResource::Unprovisioned(_) => None,
        }
    }
}

/// Desired state for one organization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesiredOrg {
    /// Organization name sent on creation; defaults to the resource name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Desired member user names; `None` means no members
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<String>>,

    #[serde(default)]
    pub ensure: Ensure,
}

impl DesiredOrg {
    /// Name to create the organization under
    pub fn org_name<'a>(&'a self, resource_name: &'a str) -> &'a str {
        self.org.as_deref().unwrap_or(resource_name)
    }

    /// Desired members, empty when unset
    pub fn member_names(&self) -> &[String] {
        self.members.as_deref().unwrap_or(&[])
    }

    /// Whether an existing organization differs from this desired state.
    ///
    /// Members compare as sets, and a kept `admin` the desired state
    /// leaves out does not count as a difference.
    pub fn differs_from(&self, current: &PresentOrg) -> bool {
        let diff = MembershipDiff::between(
            current.members.iter().map(String::as_str),
            self.member_names().iter().map(String::as_str),
        );

        self.description != current.description || !diff.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_present_serializes_flat() {
        let record = OrgResource::present(
            "acme",
            vec!["admin".to_string()],
            Some("Acme".to_string()),
        );

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "name": "acme",
                "ensure": "present",
                "members": ["admin"],
                "description": "Acme"
            })
        );
    }

    #[test]
    fn test_unprovisioned_shape() {
        let record = OrgResource::unprovisioned("influx.local");

        assert_eq!(record.ensure(), Ensure::Absent);
        assert!(record.as_present().is_none());
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "influxdb_host": "influx.local",
                "org": null,
                "ensure": "absent",
                "description": null
            })
        );
    }

    #[test]
    fn test_desired_defaults() {
        let desired: DesiredOrg = serde_yaml::from_str("description: hello\n").unwrap();

        assert_eq!(desired.ensure, Ensure::Present);
        assert_eq!(desired.org_name("fallback"), "fallback");
        assert!(desired.member_names().is_empty());
    }

    #[test]
    fn test_differs_from_ignores_member_order() {
        let current = PresentOrg {
            name: "acme".to_string(),
            ensure: Ensure::Present,
            members: vec!["bob".to_string(), "admin".to_string()],
            description: Some("Acme".to_string()),
        };

        let same = DesiredOrg {
            description: Some("Acme".to_string()),
            members: Some(vec!["admin".to_string(), "bob".to_string()]),
            ..DesiredOrg::default()
        };
        assert!(!same.differs_from(&current));

        let new_description = DesiredOrg {
            description: Some("Acme Inc".to_string()),
            ..same.clone()
        };
        assert!(new_description.differs_from(&current));

        let without_admin = DesiredOrg {
            members: Some(vec!["bob".to_string()]),
            ..same.clone()
        };
        assert!(!without_admin.differs_from(&current));

        let fewer_members = DesiredOrg {
            members: Some(vec!["admin".to_string()]),
            ..same
        };
        assert!(fewer_members.differs_from(&current));
    }
}
