//! InfluxDB v2 API data models
//!
//! Response and request bodies for the organization, membership and user
//! endpoints. Fields the reconciler does not use are ignored on decode.

mod org;
mod user;

pub use org::{AddMemberRequest, CreateOrgRequest, OrgsResponse, Organization, UpdateOrgRequest};
pub use user::{MembersResponse, ResourceMember, User, UsersResponse};
