use crate::common::*;
use crate::model::job::job_count_record::*;

#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct SeriesPoint {
    pub timestamp: NaiveDateTime,
    pub job_count: u64,
    pub job_areas: BTreeMap<String, u64>,
}

/// Job counts of one company, strictly ascending by timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct CompanySeries {
    company: String,
    points: Vec<SeriesPoint>,
}

impl CompanySeries {
    #[cfg(test)]
    pub fn empty(company: &str) -> Self {
        Self {
            company: company.to_string(),
            points: Vec::new(),
        }
    }

    #[doc = r#"
        레코드를 회사별로 나누고 시각 오름차순으로 정렬된 시리즈를 만든다.

        1. 회사 → 시각 → 레코드 목록 순으로 그룹핑 (BTreeMap이라 정렬이 보장된다)
        2. 같은 시각의 레코드가 여러 건이면 평균으로 합친다
        3. 결과는 회사 이름 순서의 BTreeMap

        입력 순서와 상관없이 같은 레코드 집합이면 항상 같은 결과를 돌려준다.
    "#]
    pub fn from_records(records: &[JobCountRecord]) -> BTreeMap<String, CompanySeries> {
        let mut grouped: BTreeMap<&str, BTreeMap<NaiveDateTime, Vec<&JobCountRecord>>> =
            BTreeMap::new();

        for record in records {
            grouped
                .entry(record.company.as_str())
                .or_default()
                .entry(record.timestamp)
                .or_default()
                .push(record);
        }

        grouped
            .into_iter()
            .map(|(company, by_time)| {
                let points: Vec<SeriesPoint> = by_time
                    .into_iter()
                    .map(|(timestamp, duplicates)| {
                        merge_duplicates(company, timestamp, &duplicates)
                    })
                    .collect();

                (
                    company.to_string(),
                    CompanySeries {
                        company: company.to_string(),
                        points,
                    },
                )
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn job_counts(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.job_count).collect()
    }

    pub fn has_area_data(&self) -> bool {
        self.points.iter().any(|p| !p.job_areas.is_empty())
    }

    #[doc = "Per-area (timestamp, count) sequences, ascending by timestamp. Areas are ordered by name."]
    pub fn area_series(&self) -> BTreeMap<String, Vec<(NaiveDateTime, u64)>> {
        let mut areas: BTreeMap<String, Vec<(NaiveDateTime, u64)>> = BTreeMap::new();

        for point in &self.points {
            for (area, count) in &point.job_areas {
                areas
                    .entry(area.clone())
                    .or_default()
                    .push((point.timestamp, *count));
            }
        }

        areas
    }
}

fn rounded_mean(values: &[u64]) -> u64 {
    let n: u128 = values.len() as u128;
    if n == 0 {
        return 0;
    }
    let sum: u128 = values.iter().map(|v| *v as u128).sum();
    ((sum + n / 2) / n) as u64
}

#[doc = "같은 시각에 찍힌 레코드들을 하나의 점으로 합친다. 지역별 값은 해당 지역을 보고한 레코드끼리만 평균."]
fn merge_duplicates(
    company: &str,
    timestamp: NaiveDateTime,
    duplicates: &[&JobCountRecord],
) -> SeriesPoint {
    if let [single] = duplicates {
        return SeriesPoint::new(timestamp, single.job_count, single.job_areas.clone());
    }

    warn!(
        "[CompanySeries->from_records] {} records for '{}' share timestamp {}; averaging them",
        duplicates.len(),
        company,
        timestamp
    );

    let totals: Vec<u64> = duplicates.iter().map(|r| r.job_count).collect();

    let mut area_values: BTreeMap<String, Vec<u64>> = BTreeMap::new();
    for record in duplicates {
        for (area, count) in &record.job_areas {
            area_values.entry(area.clone()).or_default().push(*count);
        }
    }

    let job_areas: BTreeMap<String, u64> = area_values
        .into_iter()
        .map(|(area, values)| (area, rounded_mean(&values)))
        .collect();

    SeriesPoint::new(timestamp, rounded_mean(&totals), job_areas)
}
