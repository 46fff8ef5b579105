use crate::common::*;
use crate::enums::chart_key::*;
use crate::errors::*;

#[derive(Debug, Getters, new)]
#[getset(get = "pub")]
pub struct ChartFailure {
    pub key: ChartKey,
    pub error: TrendChartError,
}
