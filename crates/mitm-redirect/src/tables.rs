use std::collections::{HashMap, HashSet};

/// Static hostname -> replacement map applied before upstream connection.
///
/// Lookups are exact byte matches, case-sensitive, with no normalization.
/// The table is immutable for the process lifetime and may be shared
/// read-only across all concurrent decision calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteTable {
    entries: HashMap<String, String>,
}

impl RewriteTable {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn lookup(&self, host: &str) -> Option<&str> {
        self.entries.get(host).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RewriteTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Static set of hosts permitted to be contacted directly, without
/// substitution. Same matching rule and lifecycle as [`RewriteTable`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowTable {
    hosts: HashSet<String>,
}

impl AllowTable {
    pub fn new(hosts: HashSet<String>) -> Self {
        Self { hosts }
    }

    pub fn contains(&self, host: &str) -> bool {
        self.hosts.contains(host)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

impl<H> FromIterator<H> for AllowTable
where
    H: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        Self {
            hosts: iter.into_iter().map(Into::into).collect(),
        }
    }
}
