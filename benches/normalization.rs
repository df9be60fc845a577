//! Benchmarks for payload normalization over growing hearing histories.

use std::hint::black_box;

use court_case_explorer::normalizer::{classify_payload, normalize_case_details};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serde_json::{Map, Value, json};

fn case_payload(hearing_count: usize) -> Value {
    let mut hearings = Map::new();
    for i in 0..hearing_count {
        hearings.insert(
            format!("{i}"),
            json!({
                "business_date": "2023-01-10",
                "purpose_of_listing": "HEARING",
                "judge_name": "HON&#039;BLE MR. JUSTICE SINGH",
                "hearing_date": if i % 5 == 0 { "Next Date Not Given" } else { "2023-02-20" },
            }),
        );
    }

    json!({
        "cino": "JHHC010012342023",
        "type_name": "W.P.(C)",
        "reg_no": "1234",
        "reg_year": "2023",
        "pend_disp": "P",
        "date_of_filing": "2023-01-05",
        "coram": "HON&#039;BLE MR. JUSTICE A&amp;B",
        "pet_name": "Ram Kumar",
        "res_name": "State of Jharkhand",
        "historyofcasehearing": Value::Object(hearings),
    })
}

fn bench_normalize_case_details(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_case_details");
    for hearing_count in [0, 10, 100, 1000] {
        let payload = case_payload(hearing_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(hearing_count),
            &payload,
            |b, payload| b.iter(|| normalize_case_details(black_box(payload))),
        );
    }
    group.finish();
}

fn bench_classify_payload(c: &mut Criterion) {
    let data = case_payload(10);
    let not_found = json!({"status_code": "628", "status": "RECORD_NOT_FOUND"});

    c.bench_function("classify_data_payload", |b| {
        b.iter(|| classify_payload(black_box(&data)))
    });
    c.bench_function("classify_not_found_payload", |b| {
        b.iter(|| classify_payload(black_box(&not_found)))
    });
}

criterion_group!(benches, bench_normalize_case_details, bench_classify_payload);
criterion_main!(benches);
