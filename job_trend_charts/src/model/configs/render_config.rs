use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /* height of a company chart that carries the per-area panel */
    pub company_height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 700,
            company_height: 1200,
        }
    }
}
