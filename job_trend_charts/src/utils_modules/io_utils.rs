use crate::common::*;
use crate::errors::*;

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    # Errors
    - 파일이 존재하지 않거나 읽기 권한이 없는 경우
    - TOML 형식이 잘못되어 파싱에 실패하는 경우
    - 구조체 필드와 TOML 키의 타입이 일치하지 않는 경우
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)
        .with_context(|| format!("[read_toml_from_file] Failed to read '{}'", file_path))?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = "JSON 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수."]
pub async fn read_json_from_file<T: DeserializeOwned>(file_path: &Path) -> anyhow::Result<T> {
    let json_content: String = tokio::fs::read_to_string(file_path)
        .await
        .with_context(|| format!("[read_json_from_file] Failed to read {:?}", file_path))?;
    let value: T = serde_json::from_str(&json_content)
        .with_context(|| format!("[read_json_from_file] Invalid JSON format in {:?}", file_path))?;

    Ok(value)
}

#[doc = r#"
    출력 파일을 쓸 수 있는 상태로 준비하는 함수.

    1. 상위 디렉토리가 없으면 생성한다
    2. 출력 파일을 생성(또는 비움)해서 실제로 쓰기가 가능한지 확인한다

    # Errors
    디렉토리 생성이나 파일 생성이 실패하면 `TrendChartError::Io`
"#]
pub async fn prepare_output_file(output_path: &Path) -> Result<(), TrendChartError> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| TrendChartError::io(parent, e))?;
        }
    }

    tokio::fs::File::create(output_path)
        .await
        .map_err(|e| TrendChartError::io(output_path, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prepare_creates_missing_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let output_path = dir.path().join("nested").join("images").join("chart.png");

        prepare_output_file(&output_path).await.unwrap();

        assert!(output_path.is_file());
    }

    #[tokio::test]
    async fn prepare_fails_when_parent_is_a_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("images");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let err = prepare_output_file(&blocker.join("chart.png"))
            .await
            .unwrap_err();

        assert!(err.is_io());
    }

    #[tokio::test]
    async fn read_json_reports_bad_content() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result: anyhow::Result<serde_json::Value> = read_json_from_file(&path).await;

        assert!(result.is_err());
    }
}
