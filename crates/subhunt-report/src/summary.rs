//! Cost summary over a scan's records.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use subhunt_core::{Category, SubscriptionRecord};

/// How many records the most-expensive list keeps.
pub const TOP_N: usize = 10;

/// Cost and record count for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total_cost: f64,
    pub count: usize,
}

/// Headline numbers, category breakdown and most expensive records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub record_count: usize,
    pub total_cost: f64,
    /// Mean over all records, including those without a price.
    pub average_cost: f64,
    pub unique_senders: usize,
    /// Sorted by total cost, highest first.
    pub by_category: Vec<CategoryTotal>,
    /// Up to [`TOP_N`] records by cost, highest first; ties keep scan order.
    pub most_expensive: Vec<SubscriptionRecord>,
}

impl Summary {
    pub fn from_records(records: &[SubscriptionRecord]) -> Self {
        let record_count = records.len();
        let total_cost = records.iter().fold(0.0, |acc, r| acc + r.cost);
        let average_cost = if record_count == 0 {
            0.0
        } else {
            total_cost / record_count as f64
        };
        let unique_senders = records
            .iter()
            .map(|r| r.sender.as_str())
            .collect::<HashSet<_>>()
            .len();

        Self {
            record_count,
            total_cost,
            average_cost,
            unique_senders,
            by_category: category_totals(records),
            most_expensive: most_expensive(records, TOP_N),
        }
    }

    /// True when the scan found nothing.
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

fn category_totals(records: &[SubscriptionRecord]) -> Vec<CategoryTotal> {
    let mut accum: BTreeMap<Category, (f64, usize)> = BTreeMap::new();
    for r in records {
        let entry = accum.entry(r.category).or_insert((0.0, 0));
        entry.0 += r.cost;
        entry.1 += 1;
    }

    let mut totals: Vec<CategoryTotal> = accum
        .into_iter()
        .map(|(category, (total_cost, count))| CategoryTotal {
            category,
            total_cost,
            count,
        })
        .collect();
    // Stable: equal totals stay in category order.
    totals.sort_by(|a, b| b.total_cost.total_cmp(&a.total_cost));
    totals
}

fn most_expensive(records: &[SubscriptionRecord], n: usize) -> Vec<SubscriptionRecord> {
    let mut sorted: Vec<&SubscriptionRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.cost.total_cmp(&a.cost));
    sorted.into_iter().take(n).cloned().collect()
}
