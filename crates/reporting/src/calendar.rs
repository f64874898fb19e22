//! Publishing calendar filters and per-status counts.

use crate::aggregator::total;
use crate::view::{RecordView, SortDirection};
use chrono::NaiveDate;
use creator_core::types::{PostStatus, ScheduledPost};
use serde::{Deserialize, Serialize};

/// Filters sent by the calendar toolbar. `None` and `"all"` mean no filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarFilter {
    pub platform: Option<String>,
    pub status: Option<String>,
    #[serde(default, rename = "q")]
    pub search: Option<String>,
    pub date: Option<NaiveDate>,
}

impl CalendarFilter {
    /// Build the view for this filter, ordered by date then time.
    pub fn view(&self) -> RecordView {
        let mut view = RecordView::new()
            .filter_token("platforms", self.platform.as_deref())
            .filter_token("status", self.status.as_deref())
            .search(self.search.as_deref().unwrap_or(""), &["title", "content"]);
        if let Some(date) = self.date {
            view = view.filter_eq("scheduled_date", date.to_string());
        }
        view.sort_by("scheduled_date", SortDirection::Asc)
            .sort_by("scheduled_time", SortDirection::Asc)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarSummary {
    pub scheduled: usize,
    pub published: usize,
    pub failed: usize,
    pub drafts: usize,
    /// Σ estimated revenue of posts still waiting to go out.
    pub scheduled_revenue: f64,
}

pub fn summarize(posts: &[ScheduledPost]) -> CalendarSummary {
    let count = |status: PostStatus| posts.iter().filter(|p| p.status == status).count();
    let waiting: Vec<ScheduledPost> = posts
        .iter()
        .filter(|p| p.status == PostStatus::Scheduled)
        .cloned()
        .collect();

    CalendarSummary {
        scheduled: count(PostStatus::Scheduled),
        published: count(PostStatus::Published),
        failed: count(PostStatus::Failed),
        drafts: count(PostStatus::Draft),
        scheduled_revenue: total(&waiting, |p| p.estimated_revenue),
    }
}

/// Posts scheduled on `date`, in input order.
pub fn posts_for_date(posts: &[ScheduledPost], date: NaiveDate) -> Vec<ScheduledPost> {
    posts
        .iter()
        .filter(|p| p.scheduled_date == date)
        .cloned()
        .collect()
}
