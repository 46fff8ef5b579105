use crate::common::*;

#[doc = r#"
    환경변수를 읽어와서 반환하고, 설정되지 않았거나 빈 값이면 `None`을 반환하는 함수.

    차트 생성기는 환경변수 없이도 기본 설정으로 동작해야 하므로,
    필수값 누락을 panic으로 처리하지 않고 호출자가 기본값을 고르도록 한다.

    # Arguments
    * `key` - 조회할 환경변수 키명

    # Returns
    * `Option<String>` - 환경변수 값
"#]
fn get_env_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => Some(val),
        Ok(_) => None,
        Err(_) => {
            info!("[ENV] '{}' is not set", key);
            None
        }
    }
}

#[doc = r#"
    차트 설정 파일(TOML)의 경로를 환경변수에서 읽어와 전역 변수로 초기화.

    `CHART_CONFIG_PATH` 환경변수를 통해 데이터 디렉토리, 대상 회사 목록,
    출력 디렉토리, 이미지 크기 등이 담긴 설정 파일 경로를 지정받는다.
    값이 없으면 `TotalConfig::default()`가 사용된다.
"#]
pub static CHART_CONFIG_PATH: once_lazy<Option<String>> =
    once_lazy::new(|| get_env_optional("CHART_CONFIG_PATH"));
