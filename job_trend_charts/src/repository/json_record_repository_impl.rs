use crate::common::*;
use crate::errors::*;

use crate::utils_modules::io_utils::*;

use crate::model::job::{job_count_record::*, job_snapshot::*};

use crate::traits::repository_traits::job_record_repository::*;

/// Reads `{company}_{YYYY-MM-DD}.json` snapshot files from one directory.
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct JsonRecordRepositoryImpl {
    data_dir: PathBuf,
}

impl JsonRecordRepositoryImpl {
    #[doc = "파일명에서 첫 번째 '_' 앞부분을 회사명으로 사용한다."]
    fn company_from_file_name(path: &Path) -> Option<String> {
        let stem: &str = path.file_stem()?.to_str()?;
        let company: &str = stem.split('_').next()?;

        if company.is_empty() {
            None
        } else {
            Some(company.to_string())
        }
    }

    #[doc = "데이터 디렉토리의 .json 파일 목록 (경로 순 정렬)"]
    async fn list_json_files(&self) -> Result<Vec<PathBuf>, TrendChartError> {
        let mut entries: tokio::fs::ReadDir = tokio::fs::read_dir(&self.data_dir)
            .await
            .map_err(|e| TrendChartError::io(&self.data_dir, e))?;

        let mut json_files: Vec<PathBuf> = Vec::new();

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| TrendChartError::io(&self.data_dir, e))?
        {
            let path: PathBuf = entry.path();
            let is_json: bool = path.extension().and_then(|ext| ext.to_str()) == Some("json");

            if is_json && path.is_file() {
                json_files.push(path);
            }
        }

        json_files.sort();
        Ok(json_files)
    }

    async fn read_snapshot_file(
        &self,
        path: &Path,
        company: &str,
    ) -> anyhow::Result<Vec<JobCountRecord>> {
        let snapshot_file: JobSnapshotFile = read_json_from_file(path).await?;

        let records: Vec<JobCountRecord> = snapshot_file
            .data
            .into_iter()
            .map(|snapshot| JobCountRecord::from_snapshot(company, snapshot))
            .collect::<Result<Vec<JobCountRecord>, TrendChartError>>()?;

        Ok(records)
    }
}

#[async_trait]
impl JobRecordRepository for JsonRecordRepositoryImpl {
    #[doc = r#"
        데이터 디렉토리의 모든 스냅샷 파일을 읽어 레코드 목록으로 반환한다.

        1. `.json` 파일이 하나도 없으면 DataError
        2. 회사명을 알 수 없거나 파싱에 실패한 파일은 error 로그를 남기고 건너뛴다
        3. 나머지 파일의 레코드를 모두 합쳐 반환한다

        # Errors
        * `Io` - 데이터 디렉토리를 읽을 수 없는 경우
        * `Data` - JSON 파일이 없는 경우
    "#]
    async fn load_records(&self) -> Result<Vec<JobCountRecord>, TrendChartError> {
        let json_files: Vec<PathBuf> = self.list_json_files().await?;

        if json_files.is_empty() {
            return Err(TrendChartError::data(format!(
                "[JsonRecordRepositoryImpl->load_records] No JSON files found in {:?}",
                self.data_dir
            )));
        }

        let mut records: Vec<JobCountRecord> = Vec::new();

        for path in &json_files {
            let company: String = match Self::company_from_file_name(path) {
                Some(company) => company,
                None => {
                    error!(
                        "[JsonRecordRepositoryImpl->load_records] Cannot derive a company name from {:?}",
                        path
                    );
                    continue;
                }
            };

            match self.read_snapshot_file(path, &company).await {
                Ok(file_records) => records.extend(file_records),
                Err(e) => {
                    error!(
                        "[JsonRecordRepositoryImpl->load_records] Skipping {:?}: {:?}",
                        path, e
                    );
                    continue;
                }
            }
        }

        info!(
            "Loaded {} records from {} data files in {:?}",
            records.len(),
            json_files.len(),
            self.data_dir
        );

        Ok(records)
    }
}
