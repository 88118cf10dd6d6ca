mod engine;
mod report;

pub use engine::AnalyticsEngine;
pub use report::{
    AnalyticsReport, DatasetSizes, DuplicateAnalysis, DuplicateGroup, MonthCount, PairKey,
    ReasonCount, UniquenessMetrics, YearCount, month_name,
};
