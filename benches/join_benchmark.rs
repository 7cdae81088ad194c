//! Performance benchmarks for the client-side results join
//!
//! Measures `join_results` for the aggregate target at growing row counts,
//! plus payload normalization of a large paginated body.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use encybara_admin::api::payload::normalize_results;
use encybara_admin::models::{join_results, LearningResult, ResultTarget, User};

fn users(count: usize) -> Vec<User> {
    (0..count as i64)
        .map(|id| User {
            id,
            email: format!("user{}@example.com", id),
            name: format!("User {}", id),
            phone: None,
            speci_field: Some("Software".to_string()),
            avatar: None,
            englishlevel: Some("B1".to_string()),
        })
        .collect()
}

/// Every tenth result points at a user id outside the list.
fn results(count: usize, user_count: usize) -> Vec<LearningResult> {
    (0..count)
        .map(|i| {
            let user_id = if i % 10 == 0 {
                (user_count + i) as i64
            } else {
                (i % user_count) as i64
            };
            LearningResult {
                id: i as i64,
                listening_score: 3.0,
                speaking_score: 2.5,
                reading_score: 4.0,
                writing_score: 1.5,
                last_updated: "2024-03-05T14:07:00Z".to_string(),
                user_id: Some(user_id),
                ..Default::default()
            }
        })
        .collect()
}

fn bench_join_all_users(c: &mut Criterion) {
    let mut group = c.benchmark_group("join_all_users");
    let user_list = users(500);

    for size in [100, 1_000, 10_000].iter() {
        let rows = results(*size, user_list.len());
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| {
                join_results(
                    black_box(rows.clone()),
                    ResultTarget::AllUsers,
                    black_box(&user_list),
                )
            });
        });
    }

    group.finish();
}

fn bench_normalize_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_page");

    for size in [100, 1_000, 10_000].iter() {
        let content = results(*size, 500);
        let body = serde_json::to_vec(&serde_json::json!({
            "data": {"content": content, "totalElements": size}
        }))
        .unwrap();

        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &body, |b, body| {
            b.iter(|| normalize_results(black_box(body)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_join_all_users, bench_normalize_page);
criterion_main!(benches);
