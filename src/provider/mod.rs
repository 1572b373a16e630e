//! Reconciler for the `influxdb_org` resource
//!
//! Four independent lifecycle operations:
//! - [`OrgProvider::get`] - list current state
//! - [`OrgProvider::create`] - create an organization (name and description only)
//! - [`OrgProvider::update`] - converge membership, then rewrite the description
//! - [`OrgProvider::delete`] - not supported by this provider; only reports
//!
//! Every call is sequential. A failure part way through `update` leaves
//! whatever membership changes already succeeded in place.

pub mod context;
pub mod diff;
pub mod lookup;
pub mod resource;

pub use context::{LogContext, ReconcileContext};
pub use diff::{MembershipDiff, PROTECTED_MEMBER};
pub use lookup::LookupTables;
pub use resource::{DesiredOrg, Ensure, OrgResource};

use crate::client::OrgApi;
use crate::client::models::{AddMemberRequest, CreateOrgRequest, UpdateOrgRequest};
use crate::error::Result;

/// Resource type name used in diagnostics
pub const RESOURCE_TYPE: &str = "influxdb_org";

/// Organization reconciler over an injected API client
pub struct OrgProvider<'a, C: OrgApi + ?Sized> {
    client: &'a C,
    influxdb_host: String,
}

impl<'a, C: OrgApi + ?Sized> OrgProvider<'a, C> {
    /// Create a provider. `influxdb_host` is reported in the unprovisioned marker.
    pub fn new(client: &'a C, influxdb_host: impl Into<String>) -> Self {
        Self {
            client,
            influxdb_host: influxdb_host.into(),
        }
    }

    /// Fetch fresh lookup tables for a mutating pass
    pub async fn lookups(&self) -> Result<LookupTables> {
        LookupTables::fetch(self.client).await
    }

    /// List current state.
    ///
    /// Loads fresh lookup tables, then lists organizations. Returns a single
    /// `ensure: absent` marker when the server reports no organizations.
    pub async fn get(&self, ctx: &dyn ReconcileContext) -> Result<Vec<OrgResource>> {
        Ok(self.get_with_lookups(ctx).await?.0)
    }

    /// Like [`get`](Self::get), also returning the lookup tables it loaded
    pub async fn get_with_lookups(
        &self,
        ctx: &dyn ReconcileContext,
    ) -> Result<(Vec<OrgResource>, LookupTables)> {
        let lookups = self.lookups().await?;
        let orgs = self.client.list_orgs().await?;

        if orgs.is_empty() {
            ctx.debug(&format!(
                "No organizations reported by {}; server is not provisioned",
                self.influxdb_host
            ));
            return Ok((vec![OrgResource::unprovisioned(&self.influxdb_host)], lookups));
        }

        let resources = orgs
            .into_iter()
            .map(|org| {
                let members = lookups.member_names(&org.name);
                OrgResource::present(org.name, members, org.description)
            })
            .collect();

        Ok((resources, lookups))
    }

    /// Create an organization. Members are left for a later `update`.
    pub async fn create(
        &self,
        ctx: &dyn ReconcileContext,
        name: &str,
        desired: &DesiredOrg,
    ) -> Result<()> {
        ctx.debug(&format!("Creating '{}' with {:?}", name, desired));

        let request = CreateOrgRequest {
            name: desired.org_name(name).to_string(),
            description: desired.description.clone(),
        };
        self.client.create_org(&request).await
    }

    /// Converge membership and rewrite the description.
    ///
    /// Removals run first, then additions, then the description update,
    /// which is sent even when nothing else changed. `admin` is never
    /// removed. Unknown organization or user names abort the call.
    pub async fn update(
        &self,
        ctx: &dyn ReconcileContext,
        lookups: &LookupTables,
        name: &str,
        desired: &DesiredOrg,
    ) -> Result<()> {
        ctx.debug(&format!("Updating '{}' with {:?}", name, desired));

        let org_id = lookups.org_id(name)?;
        let diff = MembershipDiff::between(
            lookups.member_names(name),
            desired.member_names().iter().cloned(),
        );

        if diff.is_empty() {
            ctx.debug(&format!("Membership of '{}' already matches", name));
        }

        if diff.to_remove.contains(PROTECTED_MEMBER) {
            ctx.debug(&format!(
                "Keeping '{}' in '{}' even though it is not listed",
                PROTECTED_MEMBER, name
            ));
        }

        for user in diff.removals() {
            let user_id = lookups.user_id(user)?;
            ctx.debug(&format!("Removing '{}' from '{}'", user, name));
            self.client.remove_org_member(org_id, user_id).await?;
        }

        for user in diff.additions() {
            let user_id = lookups.user_id(user)?;
            ctx.debug(&format!("Adding '{}' to '{}'", user, name));
            let request = AddMemberRequest {
                name: user.to_string(),
                id: user_id.to_string(),
            };
            self.client.add_org_member(org_id, &request).await?;
        }

        let request = UpdateOrgRequest {
            description: desired.description.clone(),
        };
        self.client.update_org(org_id, &request).await
    }

    /// Deleting organizations is not implemented; this only reports.
    pub async fn delete(&self, ctx: &dyn ReconcileContext, name: &str) -> Result<()> {
        ctx.debug(&format!("Deleting '{}'", name));
        ctx.warning(&format!(
            "Organization deletion is not supported; '{}' was left in place",
            name
        ));
        Ok(())
    }
}
