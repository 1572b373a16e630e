//! Organization display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{join_names, truncate_string};
use crate::provider::{Ensure, OrgResource};

/// Column width for descriptions in tables
const DESCRIPTION_WIDTH: usize = 40;

/// Organization display model for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ENSURE")]
    pub ensure: String,

    #[tabled(rename = "MEMBERS")]
    pub members: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<&OrgResource> for OrgDisplay {
    fn from(resource: &OrgResource) -> Self {
        let ensure = match resource.ensure() {
            Ensure::Present => "present",
            Ensure::Absent => "absent",
        }
        .to_string();

        match resource {
            OrgResource::Present(org) => Self {
                name: org.name.clone(),
                ensure,
                members: join_names(&org.members),
                description: org
                    .description
                    .as_deref()
                    .map(|d| truncate_string(d, DESCRIPTION_WIDTH))
                    .unwrap_or_else(|| "-".to_string()),
            },
            OrgResource::Unprovisioned(marker) => Self {
                name: format!("({} not provisioned)", marker.influxdb_host),
                ensure,
                members: "-".to_string(),
                description: "-".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_display_from_present() {
        let resource = OrgResource::present(
            "acme",
            vec!["admin".to_string(), "alice".to_string()],
            Some("Acme".to_string()),
        );

        let display = OrgDisplay::from(&resource);

        assert_eq!(display.name, "acme");
        assert_eq!(display.ensure, "present");
        assert_eq!(display.members, "admin, alice");
        assert_eq!(display.description, "Acme");
    }

    #[test]
    fn test_org_display_from_unprovisioned() {
        let display = OrgDisplay::from(&OrgResource::unprovisioned("db.local"));

        assert_eq!(display.ensure, "absent");
        assert!(display.name.contains("db.local"));
    }
}
