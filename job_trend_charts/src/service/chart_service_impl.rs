use crate::common::*;
use crate::errors::*;
use crate::model::{configs::render_config::*, job::company_series::*};
use crate::traits::service_traits::chart_service::*;
use crate::utils_modules::{io_utils::*, time_utils::*};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const BACKGROUND_COLOR: RGBColor = RGBColor(20, 20, 20);
const TITLE_COLOR: RGBColor = RGBColor(240, 240, 240);
const TEXT_COLOR: RGBColor = RGBColor(200, 200, 200);
const AXIS_COLOR: RGBColor = RGBColor(120, 120, 120);
const GRID_COLOR: RGBColor = RGBColor(60, 60, 60);

const SERIES_PALETTE: [RGBColor; 8] = [
    RGBColor(0, 191, 255),
    RGBColor(255, 140, 0),
    RGBColor(50, 205, 50),
    RGBColor(255, 99, 132),
    RGBColor(186, 85, 211),
    RGBColor(255, 215, 0),
    RGBColor(64, 224, 208),
    RGBColor(240, 128, 128),
];

const SECONDS_PER_DAY: i64 = 86_400;

const X_AXIS_DESC: &str = "Time";
const TOTAL_JOBS_DESC: &str = "Total Jobs";
const AREA_JOBS_DESC: &str = "Number of Jobs";

type PanelArea<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// One labelled line in axis coordinates (epoch seconds, job count).
#[derive(Debug, Clone, PartialEq, Eq)]
struct PlotLine {
    label: String,
    points: Vec<(i64, i64)>,
}

impl PlotLine {
    fn from_counts<I>(label: &str, counts: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDateTime, u64)>,
    {
        let points: Vec<(i64, i64)> = counts
            .into_iter()
            .map(|(ts, count)| (to_axis_secs(ts), i64::try_from(count).unwrap_or(i64::MAX)))
            .collect();

        Self {
            label: label.to_string(),
            points,
        }
    }
}

#[derive(Debug, Clone)]
struct PanelSpec {
    title: String,
    y_desc: &'static str,
    lines: Vec<PlotLine>,
    show_legend: bool,
}

impl PanelSpec {
    fn x_bounds(&self) -> Option<(i64, i64)> {
        let xs = self.lines.iter().flat_map(|l| l.points.iter().map(|(x, _)| *x));
        let min_x: i64 = xs.clone().min()?;
        let max_x: i64 = xs.max()?;
        Some((min_x, max_x))
    }

    fn y_values(&self) -> Vec<i64> {
        self.lines
            .iter()
            .flat_map(|l| l.points.iter().map(|(_, y)| *y))
            .collect()
    }
}

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    render_config: RenderConfig,
}

impl ChartServiceImpl {
    #[doc = "Company chart layout: total-jobs panel, plus a per-area panel when any point carries areas"]
    fn company_panels(series: &CompanySeries) -> Vec<PanelSpec> {
        let display_name: String = capitalize(series.company());

        let total_line: PlotLine = PlotLine::from_counts(
            TOTAL_JOBS_DESC,
            series.points().iter().map(|p| (p.timestamp, p.job_count)),
        );

        let mut panels: Vec<PanelSpec> = vec![PanelSpec {
            title: format!("Total {} Jobs Over Time", display_name),
            y_desc: TOTAL_JOBS_DESC,
            lines: vec![total_line],
            show_legend: false,
        }];

        if series.has_area_data() {
            let area_lines: Vec<PlotLine> = series
                .area_series()
                .into_iter()
                .map(|(area, counts)| PlotLine::from_counts(&area, counts))
                .collect();

            panels.push(PanelSpec {
                title: format!("{} Jobs per Area Over Time", display_name),
                y_desc: AREA_JOBS_DESC,
                lines: area_lines,
                show_legend: true,
            });
        }

        panels
    }

    fn combined_panel(series_list: &[CompanySeries]) -> PanelSpec {
        let lines: Vec<PlotLine> = series_list
            .iter()
            .filter(|series| !series.is_empty())
            .map(|series| {
                PlotLine::from_counts(
                    &capitalize(series.company()),
                    series.points().iter().map(|p| (p.timestamp, p.job_count)),
                )
            })
            .collect();

        PanelSpec {
            title: "Total Jobs Over Time for All Companies".to_string(),
            y_desc: TOTAL_JOBS_DESC,
            lines,
            show_legend: true,
        }
    }

    #[doc = r#"
        출력 파일을 준비한 뒤 plotters 그리기 작업을 blocking 스레드에서 실행한다.

        1. `prepare_output_file`로 디렉토리 생성 및 쓰기 가능 여부 확인 (실패 시 Io)
        2. `spawn_blocking` 안에서 그리기 (plotters는 동기 코드)
        3. 그리기에 실패하면 비어 있는 출력 파일을 지우고 Render 오류를 반환
    "#]
    async fn draw_to_file(
        &self,
        output_path: &Path,
        size: (u32, u32),
        title: Option<String>,
        panels: Vec<PanelSpec>,
    ) -> Result<(), TrendChartError> {
        prepare_output_file(output_path).await?;

        let owned_path: PathBuf = output_path.to_path_buf();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                draw_chart_image(&owned_path, size, title.as_deref(), &panels)
            });

        let drawing_result: Result<(), TrendChartError> = match handle.await {
            Ok(result) => result.map_err(|e| {
                TrendChartError::Render(format!(
                    "[ChartServiceImpl->draw_to_file] drawing/present failed for {:?}: {:?}",
                    output_path, e
                ))
            }),
            Err(e) => Err(TrendChartError::Render(format!(
                "[ChartServiceImpl->draw_to_file] blocking task join failed (panic/cancelled): {:?}",
                e
            ))),
        };

        if drawing_result.is_err() {
            if let Err(e) = tokio::fs::remove_file(output_path).await {
                warn!(
                    "[ChartServiceImpl->draw_to_file] Could not remove incomplete chart {:?}: {:?}",
                    output_path, e
                );
            }
        }

        drawing_result
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn render_company_chart(
        &self,
        series: &CompanySeries,
        output_path: &Path,
    ) -> Result<(), TrendChartError> {
        if series.is_empty() {
            return Err(TrendChartError::data(format!(
                "[ChartServiceImpl->render_company_chart] No records found for company '{}'",
                series.company()
            )));
        }

        let panels: Vec<PanelSpec> = Self::company_panels(series);

        let height: u32 = if panels.len() > 1 {
            *self.render_config.company_height()
        } else {
            *self.render_config.height()
        };

        let title: String = format!("{} Job Trends", capitalize(series.company()));

        self.draw_to_file(
            output_path,
            (*self.render_config.width(), height),
            Some(title),
            panels,
        )
        .await?;

        info!("Company chart generated successfully: {:?}", output_path);

        Ok(())
    }

    async fn render_combined_chart(
        &self,
        series_list: &[CompanySeries],
        output_path: &Path,
    ) -> Result<(), TrendChartError> {
        let panel: PanelSpec = Self::combined_panel(series_list);

        if panel.lines.is_empty() {
            return Err(TrendChartError::data(
                "[ChartServiceImpl->render_combined_chart] No company has any records to plot",
            ));
        }

        self.draw_to_file(
            output_path,
            (*self.render_config.width(), *self.render_config.height()),
            None,
            vec![panel],
        )
        .await?;

        info!("Combined chart generated successfully: {:?}", output_path);

        Ok(())
    }
}

/* ---- 여기부터는 동기 코드 (plotters) ---- */

fn draw_chart_image(
    output_path: &Path,
    size: (u32, u32),
    title: Option<&str>,
    panels: &[PanelSpec],
) -> anyhow::Result<()> {
    let root: PanelArea = BitMapBackend::new(output_path, size).into_drawing_area();
    root.fill(&BACKGROUND_COLOR)?;

    let body: PanelArea = match title {
        Some(title) => root.titled(
            title,
            ("sans-serif", 44).into_font().color(&TITLE_COLOR),
        )?,
        None => root.clone(),
    };

    let areas: Vec<PanelArea> = body.split_evenly((panels.len().max(1), 1));

    for (area, panel) in areas.iter().zip(panels) {
        draw_panel(area, panel)?;
    }

    root.present()?;
    Ok(())
}

fn draw_panel(area: &PanelArea, panel: &PanelSpec) -> anyhow::Result<()> {
    let (x_min, x_max) = calculate_x_range(panel.x_bounds());
    let (y_min, y_max) = calculate_y_range(&panel.y_values());

    let mut chart = ChartBuilder::on(area)
        .caption(
            &panel.title,
            ("sans-serif", 36).into_font().color(&TITLE_COLOR),
        )
        .margin(30)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_DESC)
        .y_desc(panel.y_desc)
        .x_labels(10)
        .y_labels(10)
        .axis_style(ShapeStyle::from(&AXIS_COLOR).stroke_width(2))
        .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(2))
        .axis_desc_style(("sans-serif", 22).into_font().color(&TEXT_COLOR))
        .x_label_style(("sans-serif", 18).into_font().color(&TEXT_COLOR))
        .y_label_style(("sans-serif", 24).into_font().color(&TEXT_COLOR))
        .x_label_formatter(&|x| format_axis_time(*x, x_max - x_min))
        .y_label_formatter(&|y| format_count(*y))
        .draw()?;

    for (idx, line) in panel.lines.iter().enumerate() {
        let color: RGBColor = SERIES_PALETTE[idx % SERIES_PALETTE.len()];

        let annotation = chart.draw_series(LineSeries::new(
            line.points.iter().copied(),
            ShapeStyle::from(&color).stroke_width(3),
        ))?;

        if panel.show_legend {
            annotation
                .label(line.label.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 20, y)],
                        ShapeStyle::from(&color).stroke_width(3),
                    )
                });
        }

        /* single-point series would otherwise be invisible */
        chart.draw_series(
            line.points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
        )?;
    }

    if panel.show_legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&BACKGROUND_COLOR.mix(0.8))
            .border_style(&AXIS_COLOR)
            .label_font(("sans-serif", 20).into_font().color(&TEXT_COLOR))
            .draw()?;
    }

    Ok(())
}

#[doc = "Helper function to determine Y-axis range with padding"]
fn calculate_y_range(values: &[i64]) -> (i64, i64) {
    if values.is_empty() {
        return (0, 100);
    }

    let min_val: i64 = *values.iter().min().unwrap_or(&0);
    let max_val: i64 = *values.iter().max().unwrap_or(&100);

    let padding: i64 = ((max_val - min_val) as f64 * 0.1).max(1.0) as i64;

    let y_min: i64 = (min_val - padding).max(0);
    let y_max: i64 = max_val.saturating_add(padding);

    (y_min, y_max)
}

#[doc = "X-axis range in epoch seconds; a single instant is widened by a day on each side"]
fn calculate_x_range(bounds: Option<(i64, i64)>) -> (i64, i64) {
    match bounds {
        Some((min_x, max_x)) if min_x < max_x => (min_x, max_x),
        Some((x, _)) => (x - SECONDS_PER_DAY, x + SECONDS_PER_DAY),
        None => (0, SECONDS_PER_DAY),
    }
}

#[doc = "1234567 -> \"1,234,567\""]
fn format_count(value: i64) -> String {
    let digits: String = value.unsigned_abs().to_string();
    let mut result: String = String::new();

    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if value < 0 {
        format!("-{}", result)
    } else {
        result
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
