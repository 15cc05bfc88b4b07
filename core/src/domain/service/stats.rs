use crate::domain::entity::menu_item::MenuItem;
use crate::domain::value_object::course::Course;
use crate::domain::value_object::price::format_amount;
use serde::Serialize;
use std::collections::BTreeMap;

/// Round to two decimals, halves away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean price per course. Every course has an entry; empty courses are 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CourseAverages(BTreeMap<Course, f64>);

impl CourseAverages {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a MenuItem>) -> Self {
        let mut totals: BTreeMap<Course, (f64, usize)> =
            Course::ALL.into_iter().map(|c| (c, (0.0, 0))).collect();

        for item in items {
            let entry = totals.entry(item.course).or_insert((0.0, 0));
            entry.0 += item.price.amount();
            entry.1 += 1;
        }

        let averages = totals
            .into_iter()
            .map(|(course, (sum, count))| {
                let average = if count == 0 {
                    0.0
                } else {
                    round_to_cents(sum / count as f64)
                };
                (course, average)
            })
            .collect();

        CourseAverages(averages)
    }

    pub fn get(&self, course: Course) -> f64 {
        self.0.get(&course).copied().unwrap_or(0.0)
    }

    /// Entries in menu order.
    pub fn iter(&self) -> impl Iterator<Item = (Course, f64)> + '_ {
        self.0.iter().map(|(course, avg)| (*course, *avg))
    }
}

/// Everything the home screen's stats panel shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub count: usize,
    pub averages: CourseAverages,
}

impl CatalogSummary {
    /// Plain-text lines, e.g. `Starters: R110.00`.
    pub fn lines(&self, currency_symbol: &str) -> Vec<String> {
        let mut lines = vec![format!("Total items: {}", self.count)];
        lines.extend(
            self.averages
                .iter()
                .map(|(course, avg)| format!("{course}: {}", format_amount(avg, currency_symbol))),
        );
        lines
    }
}
