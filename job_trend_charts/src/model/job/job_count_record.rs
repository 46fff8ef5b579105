use crate::common::*;
use crate::errors::*;
use crate::model::job::job_snapshot::*;
use crate::utils_modules::time_utils::*;

#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct JobCountRecord {
    pub company: String,
    pub timestamp: NaiveDateTime,
    pub job_count: u64,
    pub job_areas: BTreeMap<String, u64>,
}

impl JobCountRecord {
    #[doc = "Record without a per-area breakdown"]
    pub fn total_only(company: &str, timestamp: NaiveDateTime, job_count: u64) -> Self {
        Self::new(company.to_string(), timestamp, job_count, BTreeMap::new())
    }

    #[doc = "스냅샷 한 건을 회사 이름과 묶어 레코드로 변환한다. 시각 형식이 잘못되면 DataError."]
    pub fn from_snapshot(company: &str, snapshot: JobSnapshot) -> Result<Self, TrendChartError> {
        let timestamp: NaiveDateTime = parse_snapshot_time(&snapshot.time).map_err(|e| {
            TrendChartError::data(format!(
                "[JobCountRecord->from_snapshot] {} snapshot has a malformed time: {}",
                company, e
            ))
        })?;

        Ok(Self::new(
            company.to_string(),
            timestamp,
            snapshot.total_jobs,
            snapshot.job_areas,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_becomes_record() {
        let mut areas = BTreeMap::new();
        areas.insert("Engineering".to_string(), 30);
        areas.insert("Sales".to_string(), 12);
        let snapshot = JobSnapshot::new("2024-11-02 10:15:00".to_string(), 42, areas.clone());

        let record = JobCountRecord::from_snapshot("anthropic", snapshot).unwrap();

        assert_eq!(record.company(), "anthropic");
        assert_eq!(*record.job_count(), 42);
        assert_eq!(record.job_areas(), &areas);
        assert_eq!(record.timestamp().to_string(), "2024-11-02 10:15:00");
    }

    #[test]
    fn malformed_time_is_data_error() {
        let snapshot = JobSnapshot::new("11/02/2024".to_string(), 3, BTreeMap::new());

        let err = JobCountRecord::from_snapshot("xai", snapshot).unwrap_err();

        assert!(err.is_data());
    }

    #[test]
    fn snapshot_without_areas_deserializes() {
        let file: JobSnapshotFile =
            serde_json::from_str(r#"{"data":[{"time":"2024-01-01","total_jobs":7}]}"#).unwrap();

        assert_eq!(file.data().len(), 1);
        assert!(file.data()[0].job_areas().is_empty());
    }

    #[test]
    fn negative_count_is_rejected() {
        let parsed: Result<JobSnapshotFile, _> =
            serde_json::from_str(r#"{"data":[{"time":"2024-01-01","total_jobs":-1}]}"#);

        assert!(parsed.is_err());
    }
}
