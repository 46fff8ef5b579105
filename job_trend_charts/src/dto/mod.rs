pub mod chart_failure;
pub mod generation_report;
pub mod rendered_chart;
