/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description : 회사별 채용 공고 수 스냅샷을 읽어 채용 추이 라인 차트(PNG)를 생성한다.

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod errors;
mod external_deps;
mod prelude;
use common::*;

mod env_configuration;

mod traits;

mod model;
use model::configs::total_config::*;

mod dto;
use dto::generation_report::*;

mod enums;

mod repository;
use repository::json_record_repository_impl::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{chart_service_impl::*, trend_service_impl::*};

mod controller;
use controller::main_controller::*;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    let logger: LoggerHandle = set_global_logger().unwrap_or_else(|e| {
        let err_msg: &str = "[main] An issue occurred while initializing the global logger.";
        eprintln!("{} {:?}", err_msg, e);
        panic!("{} {:?}", err_msg, e)
    });

    info!("Job trend chart generation start!");

    let data_config = get_data_config_info();
    let output_config = get_output_config_info();
    let render_config = get_render_config_info();

    /* 의존 주입 */
    let record_repository: JsonRecordRepositoryImpl =
        JsonRecordRepositoryImpl::new(data_config.data_dir().clone());
    let chart_service: ChartServiceImpl = ChartServiceImpl::new(render_config.clone());
    let trend_service: TrendServiceImpl<ChartServiceImpl> = TrendServiceImpl::new(
        chart_service,
        data_config.companies().clone(),
        output_config.output_dir().clone(),
    );

    let main_controller: MainController<
        JsonRecordRepositoryImpl,
        TrendServiceImpl<ChartServiceImpl>,
    > = MainController::new(record_repository, trend_service);

    let report: GenerationReport = main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        eprintln!("{:?}", e);
        logger.flush();
        std::process::exit(1)
    });

    for chart in report.rendered() {
        println!("[{}] {}", chart.key(), chart.path().display());
    }

    if !report.is_success() {
        for failure in report.failures() {
            eprintln!("[{}] {}", failure.key(), failure.error());
        }
        logger.flush();
        std::process::exit(1);
    }

    info!("Job trend chart generation finished!");
}
