use crate::common::*;
use crate::errors::*;
use crate::model::job::job_count_record::*;

#[async_trait]
pub trait JobRecordRepository: Send + Sync {
    async fn load_records(&self) -> Result<Vec<JobCountRecord>, TrendChartError>;
}
