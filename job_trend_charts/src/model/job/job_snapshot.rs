use crate::common::*;

/// One scrape observation as written to `{company}_{YYYY-MM-DD}.json`.
#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct JobSnapshot {
    pub time: String,
    pub total_jobs: u64,
    #[serde(default)]
    pub job_areas: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct JobSnapshotFile {
    pub data: Vec<JobSnapshot>,
}
