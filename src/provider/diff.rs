//! Membership set difference

use std::collections::BTreeSet;

/// Member that reconciliation never removes from an organization
pub const PROTECTED_MEMBER: &str = "admin";

/// Difference between an organization's current and desired members.
///
/// Both sides are treated as sets; order and duplicates are ignored.
/// `to_remove` and `to_add` are always disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipDiff {
    pub to_remove: BTreeSet<String>,
    pub to_add: BTreeSet<String>,
}

impl MembershipDiff {
    /// Compute `current - desired` and `desired - current`
    pub fn between<C, D>(current: C, desired: D) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let current: BTreeSet<String> = current.into_iter().map(Into::into).collect();
        let desired: BTreeSet<String> = desired.into_iter().map(Into::into).collect();

        Self {
            to_remove: current.difference(&desired).cloned().collect(),
            to_add: desired.difference(&current).cloned().collect(),
        }
    }

    /// Members that will actually be removed; `admin` is always kept
    pub fn removals(&self) -> impl Iterator<Item = &str> {
        self.to_remove
            .iter()
            .map(String::as_str)
            .filter(|name| *name != PROTECTED_MEMBER)
    }

    /// Members that will be added
    pub fn additions(&self) -> impl Iterator<Item = &str> {
        self.to_add.iter().map(String::as_str)
    }

    /// Whether any membership call would be issued
    pub fn is_empty(&self) -> bool {
        self.removals().next().is_none() && self.to_add.is_empty()
    }
}
