use crate::common::*;

use crate::dto::generation_report::*;
use crate::model::job::job_count_record::*;
use crate::traits::{
    repository_traits::job_record_repository::*, service_traits::trend_service::*,
};

#[derive(Debug, new)]
pub struct MainController<R: JobRecordRepository, T: TrendService> {
    record_repository: R,
    trend_service: T,
}

impl<R: JobRecordRepository, T: TrendService> MainController<R, T> {
    #[doc = r#"
        차트 생성 배치를 한 번 실행하는 핵심 함수.

        1. 데이터 소스에서 회사별 채용 공고 수 레코드를 모두 읽어온다
        2. 회사별 차트와 통합 차트를 순서대로 생성한다
        3. 생성 결과(성공 차트 경로 / 실패 사유)를 그대로 반환한다

        재시도는 하지 않으며, 개별 차트 실패는 리포트에 담겨 호출자에게 전달된다.

        # Returns
        * `anyhow::Result<GenerationReport>` - 데이터 로딩 자체가 실패한 경우에만 Err
    "#]
    pub async fn main_task(&self) -> anyhow::Result<GenerationReport> {
        let records: Vec<JobCountRecord> = self
            .record_repository
            .load_records()
            .await
            .context("[MainController->main_task] Failed to load job count records")?;

        info!("Generating job trend charts from {} records", records.len());

        let report: GenerationReport = self.trend_service.generate_charts(&records).await;

        info!(
            "Chart generation finished: {} written, {} failed",
            report.rendered().len(),
            report.failures().len()
        );

        Ok(report)
    }
}
