//! Per-guild whitelist document.

use serde::{Deserialize, Serialize};

/// Members exempt from voice moderation, stored as `whitelist.json`.
///
/// Semantically a set of decimal user ID strings, persisted as a JSON array in insertion
/// order. Duplicates found in a stored document are collapsed when it is read, keeping the
/// first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Whitelist {
    members: Vec<String>,
}

impl From<Vec<String>> for Whitelist {
    fn from(members: Vec<String>) -> Self {
        let mut whitelist = Self::default();
        for member in members {
            whitelist.insert(member);
        }
        whitelist
    }
}

impl From<Whitelist> for Vec<String> {
    fn from(whitelist: Whitelist) -> Self {
        whitelist.members
    }
}

impl Whitelist {
    /// Checks membership by exact string equality.
    pub fn contains(&self, member_id: &str) -> bool {
        self.members.iter().any(|m| m == member_id)
    }

    /// Checks membership of a Discord user ID.
    pub fn contains_id(&self, member_id: u64) -> bool {
        self.contains(&member_id.to_string())
    }

    /// Adds a member ID.
    ///
    /// # Returns
    /// - `true` - The ID was added
    /// - `false` - The ID was already present; the whitelist is unchanged
    pub fn insert(&mut self, member_id: impl Into<String>) -> bool {
        let member_id = member_id.into();
        if self.contains(&member_id) {
            return false;
        }
        self.members.push(member_id);
        true
    }

    /// Removes a member ID.
    ///
    /// # Returns
    /// - `true` - The ID was present and has been removed
    /// - `false` - The ID was not present
    pub fn remove(&mut self, member_id: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m != member_id);
        self.members.len() != before
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }
}

/// Members shown per page of the whitelist listing.
pub const WHITELIST_PAGE_SIZE: usize = 10;

/// One page of a whitelist listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitelistPage {
    /// Member IDs on this page, in stored order.
    pub members: Vec<String>,
    /// Zero-based page index, clamped to the last page.
    pub page: usize,
    /// Total number of pages; at least 1 even when the whitelist is empty.
    pub total_pages: usize,
    /// Total number of whitelisted members.
    pub total: usize,
}

impl WhitelistPage {
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }
}

impl Whitelist {
    /// Slices the whitelist into a page of `WHITELIST_PAGE_SIZE` members.
    ///
    /// Out-of-range pages are clamped to the last page.
    pub fn page(&self, page: usize) -> WhitelistPage {
        let total = self.members.len();
        let total_pages = total.div_ceil(WHITELIST_PAGE_SIZE).max(1);
        let page = page.min(total_pages - 1);
        let members = self
            .members
            .iter()
            .skip(page * WHITELIST_PAGE_SIZE)
            .take(WHITELIST_PAGE_SIZE)
            .cloned()
            .collect();

        WhitelistPage {
            members,
            page,
            total_pages,
            total,
        }
    }
}
