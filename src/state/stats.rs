use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{CategoryRegistry, Marker};

/// Action name to number of markers recorded for it.
///
/// Only actions with at least one marker appear. Iteration is in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsSnapshot {
    counts: BTreeMap<String, u32>,
}

impl StatsSnapshot {
    /// Count recorded for an action, zero if absent.
    pub fn get(&self, action_name: &str) -> u32 {
        self.counts.get(action_name).copied().unwrap_or(0)
    }

    /// Total markers counted across all actions
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    fn increment(&mut self, action_name: &str) {
        *self.counts.entry(action_name.to_string()).or_insert(0) += 1;
    }
}

impl FromIterator<(String, u32)> for StatsSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().filter(|(_, count)| *count > 0).collect(),
        }
    }
}

/// Count markers per action name.
///
/// Markers whose color no longer resolves to a category are left out, and
/// categories sharing an action name are summed together.
pub fn aggregate(markers: &[Marker], registry: &CategoryRegistry) -> StatsSnapshot {
    let mut stats = StatsSnapshot::default();
    for marker in markers {
        if let Some(category) = registry.resolve(&marker.color) {
            stats.increment(&category.action_name);
        }
    }
    stats
}
