use crate::common::*;
use crate::errors::*;

use crate::dto::{generation_report::*, rendered_chart::*};
use crate::enums::chart_key::*;
use crate::model::job::{company_series::*, job_count_record::*};
use crate::traits::service_traits::{chart_service::*, trend_service::*};

#[derive(Debug, new)]
pub struct TrendServiceImpl<C: ChartService> {
    chart_service: C,
    /* companies that must get a chart even when absent from the data */
    expected_companies: Vec<String>,
    output_dir: PathBuf,
}

impl<C: ChartService> TrendServiceImpl<C> {
    #[doc = "설정된 회사 목록과 데이터에 등장한 회사의 합집합 (이름 순)"]
    fn chart_companies(
        &self,
        series_by_company: &BTreeMap<String, CompanySeries>,
    ) -> BTreeSet<String> {
        self.expected_companies
            .iter()
            .cloned()
            .chain(series_by_company.keys().cloned())
            .collect()
    }

    async fn generate_company_chart(
        &self,
        key: &ChartKey,
        company: &str,
        series: Option<&CompanySeries>,
    ) -> Result<RenderedChart, TrendChartError> {
        let series: &CompanySeries = series.ok_or_else(|| {
            TrendChartError::data(format!(
                "[TrendServiceImpl->generate_company_chart] No records found for company '{}'",
                company
            ))
        })?;

        let output_path: PathBuf = key.output_path(&self.output_dir);

        self.chart_service
            .render_company_chart(series, &output_path)
            .await?;

        Ok(RenderedChart::new(key.clone(), output_path, 1, series.len()))
    }

    async fn generate_combined_chart(
        &self,
        series_by_company: &BTreeMap<String, CompanySeries>,
    ) -> Result<RenderedChart, TrendChartError> {
        let series_list: Vec<CompanySeries> = series_by_company
            .values()
            .filter(|series| !series.is_empty())
            .cloned()
            .collect();

        if series_list.is_empty() {
            return Err(TrendChartError::data(
                "[TrendServiceImpl->generate_combined_chart] No records found for any company",
            ));
        }

        let output_path: PathBuf = ChartKey::Combined.output_path(&self.output_dir);

        self.chart_service
            .render_combined_chart(&series_list, &output_path)
            .await?;

        let point_count: usize = series_list.iter().map(|series| series.len()).sum();

        Ok(RenderedChart::new(
            ChartKey::Combined,
            output_path,
            series_list.len(),
            point_count,
        ))
    }
}

#[async_trait]
impl<C: ChartService> TrendService for TrendServiceImpl<C> {
    #[doc = r#"
        레코드로부터 회사별 차트와 통합 차트를 순서대로 생성한다.

        1. 레코드를 회사별 시리즈로 나누고 시각 오름차순 정렬
        2. 대상 회사(설정 + 데이터)마다 개별 차트 생성. 레코드가 없는 회사는 DataError
        3. 레코드가 있는 모든 회사를 겹친 통합 차트 생성
        4. 차트 하나의 실패가 다른 차트 생성을 막지 않는다
    "#]
    async fn generate_charts(&self, records: &[JobCountRecord]) -> GenerationReport {
        let series_by_company: BTreeMap<String, CompanySeries> =
            CompanySeries::from_records(records);

        let mut report: GenerationReport = GenerationReport::default();

        for company in self.chart_companies(&series_by_company) {
            let key: ChartKey = ChartKey::Company(company.clone());

            let result: Result<RenderedChart, TrendChartError> = self
                .generate_company_chart(&key, &company, series_by_company.get(&company))
                .await;

            report.record(key, result);
        }

        let combined_result: Result<RenderedChart, TrendChartError> =
            self.generate_combined_chart(&series_by_company).await;

        report.record(ChartKey::Combined, combined_result);

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum RenderCall {
        Company {
            company: String,
            counts: Vec<u64>,
            path: PathBuf,
        },
        Combined {
            companies: Vec<String>,
            counts: Vec<Vec<u64>>,
            path: PathBuf,
        },
    }

    /// Records what would have been drawn instead of drawing it.
    #[derive(Debug, Default)]
    struct RecordingChartService {
        calls: Mutex<Vec<RenderCall>>,
    }

    impl RecordingChartService {
        fn calls(&self) -> Vec<RenderCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChartService for RecordingChartService {
        async fn render_company_chart(
            &self,
            series: &CompanySeries,
            output_path: &Path,
        ) -> Result<(), TrendChartError> {
            self.calls.lock().unwrap().push(RenderCall::Company {
                company: series.company().clone(),
                counts: series.job_counts(),
                path: output_path.to_path_buf(),
            });
            Ok(())
        }

        async fn render_combined_chart(
            &self,
            series_list: &[CompanySeries],
            output_path: &Path,
        ) -> Result<(), TrendChartError> {
            self.calls.lock().unwrap().push(RenderCall::Combined {
                companies: series_list.iter().map(|s| s.company().clone()).collect(),
                counts: series_list.iter().map(|s| s.job_counts()).collect(),
                path: output_path.to_path_buf(),
            });
            Ok(())
        }
    }

    fn at(date: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    fn record(company: &str, date: &str, count: u64) -> JobCountRecord {
        JobCountRecord::total_only(company, at(date), count)
    }

    fn service(expected: &[&str]) -> TrendServiceImpl<RecordingChartService> {
        TrendServiceImpl::new(
            RecordingChartService::default(),
            expected.iter().map(|c| c.to_string()).collect(),
            PathBuf::from("images"),
        )
    }

    fn sample_records() -> Vec<JobCountRecord> {
        vec![
            record("A", "2024-01-01", 10),
            record("A", "2024-02-01", 15),
            record("B", "2024-01-01", 5),
        ]
    }

    #[tokio::test]
    async fn one_chart_per_company_plus_combined() {
        let trend_service = service(&[]);

        let report = trend_service.generate_charts(&sample_records()).await;

        assert!(report.is_success());
        assert_eq!(report.rendered().len(), 3);

        let a = report
            .rendered_chart(&ChartKey::Company("A".to_string()))
            .unwrap();
        assert_eq!(a.path(), &PathBuf::from("images/A_job_trends.png"));
        assert_eq!(*a.point_count(), 2);

        let combined = report.rendered_chart(&ChartKey::Combined).unwrap();
        assert_eq!(combined.path(), &PathBuf::from("images/total_jobs_combined.png"));
        assert_eq!(*combined.series_count(), 2);
        assert_eq!(*combined.point_count(), 3);
    }

    #[tokio::test]
    async fn series_reach_the_chart_service_sorted() {
        let trend_service = service(&[]);
        let mut records = sample_records();
        records.reverse();

        trend_service.generate_charts(&records).await;

        assert_eq!(
            trend_service.chart_service.calls(),
            vec![
                RenderCall::Company {
                    company: "A".to_string(),
                    counts: vec![10, 15],
                    path: PathBuf::from("images/A_job_trends.png"),
                },
                RenderCall::Company {
                    company: "B".to_string(),
                    counts: vec![5],
                    path: PathBuf::from("images/B_job_trends.png"),
                },
                RenderCall::Combined {
                    companies: vec!["A".to_string(), "B".to_string()],
                    counts: vec![vec![10, 15], vec![5]],
                    path: PathBuf::from("images/total_jobs_combined.png"),
                },
            ]
        );
    }

    #[tokio::test]
    async fn expected_company_without_records_is_data_error() {
        let trend_service = service(&["A", "xai"]);

        let report = trend_service.generate_charts(&sample_records()).await;

        assert!(!report.is_success());
        assert_eq!(report.failures().len(), 1);

        let failure = report
            .failure(&ChartKey::Company("xai".to_string()))
            .unwrap();
        assert!(failure.error().is_data());

        /* the other charts are still produced, and nothing was drawn for xai */
        assert_eq!(report.rendered().len(), 3);
        assert!(trend_service.chart_service.calls().iter().all(|call| {
            !matches!(call, RenderCall::Company { company, .. } if company == "xai")
        }));
    }

    #[tokio::test]
    async fn no_records_fails_every_chart() {
        let trend_service = service(&["anthropic"]);

        let report = trend_service.generate_charts(&[]).await;

        assert!(report.rendered().is_empty());
        assert_eq!(report.failures().len(), 2);
        assert!(report.failures().iter().all(|f| f.error().is_data()));
        assert!(trend_service.chart_service.calls().is_empty());
    }

    #[tokio::test]
    async fn identical_input_gives_identical_chart_data() {
        let first = service(&[]);
        let second = service(&[]);

        first.generate_charts(&sample_records()).await;
        second.generate_charts(&sample_records()).await;

        assert_eq!(first.chart_service.calls(), second.chart_service.calls());
    }
}
