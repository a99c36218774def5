pub mod analytics_service;
pub mod chart_service;
pub mod filter_service;
pub mod format_service;
pub mod options_service;
