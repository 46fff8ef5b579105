use crate::common::*;
use crate::dto::{chart_failure::*, rendered_chart::*};
use crate::enums::chart_key::*;
use crate::errors::*;

/// Outcome of one generator run, one entry per attempted chart.
#[derive(Debug, Default, Getters)]
#[getset(get = "pub")]
pub struct GenerationReport {
    rendered: Vec<RenderedChart>,
    failures: Vec<ChartFailure>,
}

impl GenerationReport {
    pub fn record(&mut self, key: ChartKey, result: Result<RenderedChart, TrendChartError>) {
        match result {
            Ok(chart) => {
                info!("[{}] chart written to {:?}", key, chart.path());
                self.rendered.push(chart);
            }
            Err(e) => {
                error!("[GenerationReport->record] [{}] chart failed: {}", key, e);
                self.failures.push(ChartFailure::new(key, e));
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    #[cfg(test)]
    pub fn rendered_chart(&self, key: &ChartKey) -> Option<&RenderedChart> {
        self.rendered.iter().find(|chart| chart.key() == key)
    }

    #[cfg(test)]
    pub fn failure(&self, key: &ChartKey) -> Option<&ChartFailure> {
        self.failures.iter().find(|failure| failure.key() == key)
    }
}
