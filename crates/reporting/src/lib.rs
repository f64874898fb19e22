//! Page metrics for the creator hub: aggregation, filter/sort views and
//! the per-page summaries built on them.

pub mod ads;
pub mod aggregator;
pub mod analytics;
pub mod calendar;
pub mod dashboard;
pub mod platforms;
pub mod revenue;
pub mod view;

pub use aggregator::{average, net_return, percentage_of_total, rate, total};
pub use dashboard::DashboardOverview;
pub use view::{RecordView, SortDirection, WILDCARD};
