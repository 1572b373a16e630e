//! Name to id lookup tables
//!
//! Built once at the start of a reconciliation pass from the organization
//! list, each organization's member list, and the user list. The tables are
//! plain owned data and are handed to the mutating operations explicitly.

use crate::client::OrgApi;
use crate::client::models::{ResourceMember, User};
use crate::error::{EntityKind, Error, Result};

/// An organization together with its current members
#[derive(Debug, Clone, PartialEq)]
pub struct OrgEntry {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub members: Vec<ResourceMember>,
}

impl OrgEntry {
    /// Member login names, in server order
    pub fn member_names(&self) -> Vec<String> {
        self.members.iter().map(|m| m.name.clone()).collect()
    }
}

/// Organization and user lookup tables for one reconciliation pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupTables {
    orgs: Vec<OrgEntry>,
    users: Vec<User>,
}

impl LookupTables {
    /// Build tables from already-fetched data
    pub fn new(orgs: Vec<OrgEntry>, users: Vec<User>) -> Self {
        Self { orgs, users }
    }

    /// Fetch organizations (with members) and users from the server
    pub async fn fetch<C: OrgApi + ?Sized>(client: &C) -> Result<Self> {
        let orgs = client.list_orgs().await?;

        let mut entries = Vec::with_capacity(orgs.len());
        for org in orgs {
            let members = client.list_org_members(&org.id).await?;
            log::debug!("Organization '{}' has {} member(s)", org.name, members.len());
            entries.push(OrgEntry {
                id: org.id,
                name: org.name,
                description: org.description,
                members,
            });
        }

        let users = client.list_users().await?;
        log::debug!(
            "Loaded lookup tables: {} organization(s), {} user(s)",
            entries.len(),
            users.len()
        );

        Ok(Self::new(entries, users))
    }

    /// Find an organization by name
    pub fn org(&self, name: &str) -> Option<&OrgEntry> {
        self.orgs.iter().find(|o| o.name == name)
    }

    /// Resolve an organization name to its id
    pub fn org_id(&self, name: &str) -> Result<&str> {
        self.org(name)
            .map(|o| o.id.as_str())
            .ok_or_else(|| Error::UnknownName {
                kind: EntityKind::Organization,
                name: name.to_string(),
            })
    }

    /// Resolve a user name to its id
    pub fn user_id(&self, name: &str) -> Result<&str> {
        self.users
            .iter()
            .find(|u| u.name == name)
            .map(|u| u.id.as_str())
            .ok_or_else(|| Error::UnknownName {
                kind: EntityKind::User,
                name: name.to_string(),
            })
    }

    /// Member names of an organization; empty when the org is unknown
    pub fn member_names(&self, org_name: &str) -> Vec<String> {
        self.org(org_name)
            .map(OrgEntry::member_names)
            .unwrap_or_default()
    }
}
