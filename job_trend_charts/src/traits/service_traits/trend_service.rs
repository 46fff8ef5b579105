use crate::common::*;
use crate::dto::generation_report::*;
use crate::model::job::job_count_record::*;

#[async_trait]
pub trait TrendService: Send + Sync {
    #[doc = "Group the records into company series and render every per-company chart plus the combined chart. Each chart succeeds or fails on its own."]
    async fn generate_charts(&self, records: &[JobCountRecord]) -> GenerationReport;
}
