use crate::common::*;

use crate::model::configs::{data_config::*, output_config::*, render_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_total_config);

#[doc = "Function to initialize chart configuration information instances"]
pub fn initialize_total_config() -> TotalConfig {
    info!("initialize_total_config() START!");

    match CHART_CONFIG_PATH.as_deref() {
        Some(config_path) => TotalConfig::from_file(config_path).unwrap_or_else(|e| {
            let err_msg: &str =
                "Failed to convert the data from CHART_CONFIG_PATH into the TotalConfig structure.";
            error!("[TotalConfig->from_file] {} {:?}", err_msg, e);
            eprintln!("{} {:?}", err_msg, e);
            std::process::exit(1);
        }),
        None => {
            info!("CHART_CONFIG_PATH is not set. Using the default chart configuration.");
            TotalConfig::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct TotalConfig {
    pub data: DataConfig,
    pub output: OutputConfig,
    pub render: RenderConfig,
}

impl TotalConfig {
    pub fn from_file(config_path: &str) -> anyhow::Result<Self> {
        read_toml_from_file::<TotalConfig>(config_path)
    }
}

#[doc = "데이터 로딩 설정 정보"]
pub fn get_data_config_info() -> &'static DataConfig {
    &TOTAL_CONFIG.data
}

#[doc = "차트 출력 위치 설정 정보"]
pub fn get_output_config_info() -> &'static OutputConfig {
    &TOTAL_CONFIG.output
}

#[doc = "차트 이미지 크기 설정 정보"]
pub fn get_render_config_info() -> &'static RenderConfig {
    &TOTAL_CONFIG.render
}
