pub mod chart;
pub mod filter;
pub mod kpi;
pub mod record;
pub mod snapshot;
