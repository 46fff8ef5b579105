use crate::common::*;

#[doc = r#"
    전역 로거를 설정하는 함수.

    `RUST_LOG` 환경변수가 있으면 그 값을, 없으면 `info` 레벨을 사용한다.
    로그는 `./logs` 디렉토리에 하루 단위로 회전되어 저장되고, 최근 10개 파일만 보관한다.
    info 이상의 로그는 표준출력에도 동시에 출력된다.

    # Returns
    * `anyhow::Result<LoggerHandle>` - 프로그램 종료 시까지 유지해야 하는 로거 핸들
"#]
pub fn set_global_logger() -> anyhow::Result<LoggerHandle> {
    let log_directory: &str = "logs";

    let handle: LoggerHandle = Logger::try_with_env_or_str("info")?
        .log_to_file(
            FileSpec::default()
                .directory(log_directory)
                .basename("job_trend_charts"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .format_for_files(custom_format)
        .format_for_stdout(custom_format)
        .duplicate_to_stdout(Duplicate::Info)
        .start()?;

    Ok(handle)
}

#[doc = "로그 한 줄의 포맷: [시각] [레벨] T[스레드명] 메시지"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        std::thread::current().name().unwrap_or("unknown"),
        &record.args()
    )
}
