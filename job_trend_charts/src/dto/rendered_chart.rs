use crate::common::*;
use crate::enums::chart_key::*;

#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct RenderedChart {
    pub key: ChartKey,
    pub path: PathBuf,
    /* number of company lines drawn on the total-jobs axes */
    pub series_count: usize,
    pub point_count: usize,
}
