pub mod company_series;
pub mod job_count_record;
pub mod job_snapshot;
