//! Read-side services: weekly totals, impact figures and the export snapshot.

pub mod impact_service;
pub mod report_service;
pub mod summary_service;

pub use impact_service::{ImpactMetrics, ImpactService};
pub use report_service::{DailyRecord, ReportService, ReportSnapshot, UserInfo, WeeklySummary};
pub use summary_service::{DailyPoint, ModeBreakdown, ModeShare, SummaryService, WeeklyAggregate};
