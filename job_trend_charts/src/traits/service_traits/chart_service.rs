use crate::common::*;
use crate::errors::*;
use crate::model::job::company_series::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Render one company's job counts over time and save it as a PNG file
        # Arguments
        * `series` - The company's points, ascending by time
        * `output_path` - Path where the chart image will be saved
        # Errors
        * `Data` when the series has no points (no image is written)
        * `Io` when the output location cannot be written
    "]
    async fn render_company_chart(
        &self,
        series: &CompanySeries,
        output_path: &Path,
    ) -> Result<(), TrendChartError>;

    #[doc = "
        Render every company's total job counts on shared axes, with a legend
        # Arguments
        * `series_list` - One series per company; empty series are not drawn
        * `output_path` - Path where the chart image will be saved
    "]
    async fn render_combined_chart(
        &self,
        series_list: &[CompanySeries],
        output_path: &Path,
    ) -> Result<(), TrendChartError>;
}
