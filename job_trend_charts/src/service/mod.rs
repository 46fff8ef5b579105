pub mod chart_service_impl;
pub mod trend_service_impl;
