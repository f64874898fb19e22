//! Filter/sort views over record stores.
//!
//! A [`RecordView`] narrows a slice of records by field-equality predicates
//! and an optional text search, then reorders it with a stable sort. Views
//! never touch their input; each `apply` builds a fresh `Vec`.

use creator_core::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// Filter token meaning "no constraint", as sent by every page filter.
pub const WILDCARD: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Default)]
pub struct RecordView {
    predicates: Vec<(String, Value)>,
    search: Option<TextSearch>,
    order_by: Vec<(String, SortDirection)>,
    limit: Option<usize>,
}

#[derive(Debug, Clone)]
struct TextSearch {
    needle: String,
    fields: Vec<String>,
}

impl RecordView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep records whose `field` equals `value`. For array fields, keep
    /// records whose array contains `value`. The wildcard `"all"` is ignored.
    pub fn filter_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        if value.as_str() != Some(WILDCARD) {
            self.predicates.push((field.into(), value));
        }
        self
    }

    /// Like [`filter_eq`](Self::filter_eq) for an optional query-string token.
    pub fn filter_token(self, field: impl Into<String>, token: Option<&str>) -> Self {
        match token {
            Some(token) if !token.is_empty() => self.filter_eq(field, token),
            _ => self,
        }
    }

    /// Case-insensitive substring search over string fields. A record
    /// matches when any of `fields` contains `text`. Empty text is ignored.
    pub fn search(mut self, text: &str, fields: &[&str]) -> Self {
        let needle = text.trim().to_lowercase();
        if !needle.is_empty() {
            self.search = Some(TextSearch {
                needle,
                fields: fields.iter().map(|f| f.to_string()).collect(),
            });
        }
        self
    }

    /// Append a sort key. Earlier keys take precedence.
    pub fn sort_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.order_by.push((field.into(), direction));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.matches_snapshot(&snapshot(record))
    }

    /// Filter, sort and truncate `records` into a new vector.
    pub fn apply<R: Record>(&self, records: &[R]) -> Vec<R> {
        let mut selected: Vec<(Value, &R)> = records
            .iter()
            .map(|r| (snapshot(r), r))
            .filter(|(snap, _)| self.matches_snapshot(snap))
            .collect();

        if !self.order_by.is_empty() {
            // sort_by is stable: ties keep their input order.
            selected.sort_by(|(a, _), (b, _)| self.compare(a, b));
        }

        let limit = self.limit.unwrap_or(usize::MAX);
        selected
            .into_iter()
            .take(limit)
            .map(|(_, r)| r.clone())
            .collect()
    }

    fn matches_snapshot(&self, snap: &Value) -> bool {
        let predicates_hold = self.predicates.iter().all(|(field, expected)| {
            match snap.get(field) {
                Some(Value::Array(items)) => items.iter().any(|item| values_equal(item, expected)),
                Some(actual) => values_equal(actual, expected),
                None => false,
            }
        });
        if !predicates_hold {
            return false;
        }

        match &self.search {
            Some(search) => search.fields.iter().any(|field| {
                snap.get(field)
                    .and_then(Value::as_str)
                    .map_or(false, |s| s.to_lowercase().contains(&search.needle))
            }),
            None => true,
        }
    }

    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        for (field, direction) in &self.order_by {
            let ordering = compare_values(a.get(field), b.get(field));
            let ordering = match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

fn snapshot<R: Record>(record: &R) -> Value {
    serde_json::to_value(record).unwrap_or(Value::Null)
}

fn values_equal(actual: &Value, expected: &Value) -> bool {
    match (actual.as_f64(), expected.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => actual == expected,
    }
}

/// Total order over JSON scalars: missing/null < bool < number < string.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(v: Option<&Value>) -> u8 {
        match v {
            None | Some(Value::Null) => 0,
            Some(Value::Bool(_)) => 1,
            Some(Value::Number(_)) => 2,
            Some(Value::String(_)) => 3,
            Some(_) => 4,
        }
    }

    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::total;
    use chrono::{NaiveDate, NaiveTime};
    use creator_core::types::{PostStatus, ScheduledPost};
    use uuid::Uuid;

    #[derive(Debug, Clone, Serialize)]
    struct Row {
        id: Uuid,
        label: u32,
        revenue: f64,
    }

    impl Record for Row {
        const KIND: &'static str = "row";

        fn id(&self) -> Uuid {
            self.id
        }
    }

    fn row(label: u32, revenue: f64) -> Row {
        Row {
            id: Uuid::new_v4(),
            label,
            revenue,
        }
    }

    fn post(title: &str, platforms: &[&str], status: PostStatus, day: u32) -> ScheduledPost {
        ScheduledPost {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: format!("{} body", title),
            platforms: platforms.iter().map(|p| p.to_string()).collect(),
            scheduled_date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            scheduled_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            status,
            content_type: "Post".to_string(),
            estimated_revenue: 10.0,
            ad_placement: "Automatic".to_string(),
        }
    }

    #[test]
    fn test_descending_sort_is_stable() {
        let rows = vec![row(1, 5.0), row(2, 5.0), row(3, 9.0)];
        let sorted = RecordView::new()
            .sort_by("revenue", SortDirection::Desc)
            .apply(&rows);
        let labels: Vec<u32> = sorted.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec![3, 1, 2]);
    }

    #[test]
    fn test_ascending_sort_is_stable() {
        let rows = vec![row(1, 5.0), row(2, 1.0), row(3, 5.0)];
        let sorted = RecordView::new()
            .sort_by("revenue", SortDirection::Asc)
            .apply(&rows);
        let labels: Vec<u32> = sorted.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec![2, 1, 3]);
    }

    #[test]
    fn test_no_match_yields_empty_and_zero_total() {
        let rows = vec![row(1, 5.0), row(2, 7.0)];
        let filtered = RecordView::new().filter_eq("label", 42).apply(&rows);
        assert!(filtered.is_empty());
        assert_eq!(total(&filtered, |r| r.revenue), 0.0);
    }

    #[test]
    fn test_wildcard_is_no_constraint() {
        let rows = vec![row(1, 5.0), row(2, 7.0)];
        let view = RecordView::new()
            .filter_eq("label", WILDCARD)
            .filter_token("revenue", None);
        assert_eq!(view.apply(&rows).len(), 2);
    }

    #[test]
    fn test_integer_and_float_compare_equal() {
        let rows = vec![row(1, 5.0), row(2, 7.0)];
        let filtered = RecordView::new().filter_eq("revenue", 7).apply(&rows);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].label, 2);
    }

    #[test]
    fn test_array_field_matches_membership() {
        let posts = vec![
            post("Summer Fashion", &["Instagram", "Facebook"], PostStatus::Scheduled, 25),
            post("Tech Review", &["YouTube", "WordPress"], PostStatus::Scheduled, 26),
            post("Cooking Tips", &["Instagram", "TikTok"], PostStatus::Published, 24),
        ];
        let instagram = RecordView::new()
            .filter_eq("platforms", "Instagram")
            .apply(&posts);
        assert_eq!(instagram.len(), 2);

        let scheduled_on_instagram = RecordView::new()
            .filter_eq("platforms", "Instagram")
            .filter_eq("status", "scheduled")
            .apply(&posts);
        assert_eq!(scheduled_on_instagram.len(), 1);
        assert_eq!(scheduled_on_instagram[0].title, "Summer Fashion");
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let posts = vec![
            post("Summer Fashion", &["Instagram"], PostStatus::Scheduled, 25),
            post("Tech Review", &["YouTube"], PostStatus::Draft, 26),
        ];
        let hits = RecordView::new()
            .search("  TECH ", &["title", "content"])
            .apply(&posts);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Tech Review");

        let all = RecordView::new().search("", &["title"]).apply(&posts);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_sort_by_date_then_limit() {
        let posts = vec![
            post("b", &["Instagram"], PostStatus::Scheduled, 25),
            post("c", &["Instagram"], PostStatus::Scheduled, 26),
            post("a", &["Instagram"], PostStatus::Published, 24),
        ];
        let latest = RecordView::new()
            .sort_by("scheduled_date", SortDirection::Desc)
            .limit(2)
            .apply(&posts);
        let titles: Vec<&str> = latest.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "b"]);
    }

    #[test]
    fn test_missing_sort_field_sorts_first_ascending() {
        assert_eq!(
            compare_values(None, Some(&Value::from(1))),
            Ordering::Less
        );
        assert_eq!(
            compare_values(Some(&Value::from("x")), Some(&Value::from(1))),
            Ordering::Greater
        );
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let rows = vec![row(1, 1.0), row(2, 9.0)];
        let _ = RecordView::new()
            .sort_by("revenue", SortDirection::Desc)
            .apply(&rows);
        assert_eq!(rows[0].label, 1);
        assert_eq!(rows[1].label, 2);
    }
}
