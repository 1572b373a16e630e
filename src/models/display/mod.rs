//! Display model implementations for table and JSON output
//!
//! Display models flatten reconciler records into table rows.

mod common;
mod org;
mod plan;

pub use org::OrgDisplay;
pub use plan::PlanDisplay;
