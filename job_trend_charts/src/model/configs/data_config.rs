use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct DataConfig {
    pub data_dir: PathBuf,
    /// Companies that must get a chart even if no record mentions them.
    pub companies: Vec<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            companies: vec![
                "anthropic".to_string(),
                "openai".to_string(),
                "xai".to_string(),
            ],
        }
    }
}
