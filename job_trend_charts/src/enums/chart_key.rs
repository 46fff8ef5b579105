use crate::common::*;

pub const COMBINED_TAG: &str = "combined";
const COMPANY_FILE_SUFFIX: &str = "_job_trends.png";
const COMBINED_FILE_NAME: &str = "total_jobs_combined.png";

/// Identifies one rendered chart: a single company or the combined overlay.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChartKey {
    Company(String),
    Combined,
}

impl ChartKey {
    pub fn file_name(&self) -> String {
        match self {
            ChartKey::Company(company) => format!("{}{}", company, COMPANY_FILE_SUFFIX),
            ChartKey::Combined => COMBINED_FILE_NAME.to_string(),
        }
    }

    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name())
    }
}

impl Display for ChartKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKey::Company(company) => write!(f, "{}", company),
            ChartKey::Combined => write!(f, "{}", COMBINED_TAG),
        }
    }
}
