use crate::common::*;

const SNAPSHOT_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMAT: &str = "%Y-%m-%d";
const INTRADAY_FORMAT: &str = "%m-%d %H:%M";
const INTRADAY_SPAN_SECS: i64 = 2 * 86_400;

#[doc = r#"
    스냅샷 파일의 `time` 문자열을 `NaiveDateTime`으로 변환하는 함수.

    스크래퍼는 `%Y-%m-%d %H:%M:%S` 형식으로 기록하지만,
    ISO 형식(`T` 구분자)과 날짜만 있는 값(`%Y-%m-%d`, 자정으로 간주)도 허용한다.
"#]
pub fn parse_snapshot_time(raw: &str) -> anyhow::Result<NaiveDateTime> {
    let trimmed: &str = raw.trim();

    for fmt in SNAPSHOT_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt);
        }
    }

    let date: NaiveDate = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|e| anyhow!("[parse_snapshot_time] Unrecognized time '{}': {}", raw, e))?;

    Ok(date.and_time(NaiveTime::MIN))
}

#[doc = "차트 x축 좌표(초 단위 epoch)로 변환"]
pub fn to_axis_secs(dt: NaiveDateTime) -> i64 {
    dt.and_utc().timestamp()
}

#[doc = r#"
    x축 좌표를 라벨로 변환하는 함수.

    축 전체 구간(`span_secs`)이 이틀 미만이면 하루에 여러 번 찍힌 스냅샷이
    같은 날짜 라벨로 겹치지 않도록 `%m-%d %H:%M`, 그 외에는 `%Y-%m-%d`를 사용한다.
"#]
pub fn format_axis_time(secs: i64, span_secs: i64) -> String {
    let fmt: &str = if span_secs < INTRADAY_SPAN_SECS {
        INTRADAY_FORMAT
    } else {
        DATE_FORMAT
    };

    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(dt) => dt.format(fmt).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scraper_timestamp() {
        let dt = parse_snapshot_time("2024-11-02 10:15:30").unwrap();
        assert_eq!(dt.to_string(), "2024-11-02 10:15:30");
    }

    #[test]
    fn parses_iso_and_date_only() {
        let iso = parse_snapshot_time("2024-11-02T10:15:30").unwrap();
        let date_only = parse_snapshot_time(" 2024-11-02 ").unwrap();

        assert_eq!(iso.to_string(), "2024-11-02 10:15:30");
        assert_eq!(date_only.to_string(), "2024-11-02 00:00:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_snapshot_time("yesterday").is_err());
        assert!(parse_snapshot_time("2024-13-45").is_err());
    }

    #[test]
    fn axis_label_matches_date() {
        let dt = parse_snapshot_time("2024-02-01 23:59:59").unwrap();
        assert_eq!(format_axis_time(to_axis_secs(dt), 30 * 86_400), "2024-02-01");
    }

    #[test]
    fn short_span_labels_carry_the_hour() {
        let morning = to_axis_secs(parse_snapshot_time("2024-11-02 09:00:00").unwrap());
        let evening = to_axis_secs(parse_snapshot_time("2024-11-02 21:30:00").unwrap());
        let span = evening - morning;

        assert_eq!(format_axis_time(morning, span), "11-02 09:00");
        assert_eq!(format_axis_time(evening, span), "11-02 21:30");
        assert_ne!(format_axis_time(morning, span), format_axis_time(evening, span));
    }
}
