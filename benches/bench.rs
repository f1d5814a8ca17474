// Criterion benchmarks for the Hyphomz ML engines

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hyphomz_ml::core::{
    assess_churn, estimate_duration, forecast_demand, provider_roster, recommend_for_user,
    ProviderMatcher,
};
use hyphomz_ml::models::{Complexity, TimeOfDay, Urgency};
use hyphomz_ml::{ChurnPredictionRequest, DurationPredictionRequest, ProviderMatchRequest};

fn duration_request() -> DurationPredictionRequest {
    DurationPredictionRequest {
        service_type: "House Cleaning".to_string(),
        area_sqft: Some(1500.0),
        complexity: Complexity::Medium,
        provider_experience: 7,
        time_of_day: TimeOfDay::Morning,
        location: "Greater Noida".to_string(),
    }
}

fn churn_request() -> ChurnPredictionRequest {
    ChurnPredictionRequest {
        customer_id: "cust_12345".to_string(),
        bookings_count: 3,
        avg_rating_given: 3.8,
        days_since_last_booking: 75,
        total_spent: 8500.0,
        complaint_count: 2,
        preferred_services: vec!["House Cleaning".to_string()],
    }
}

fn match_request() -> ProviderMatchRequest {
    ProviderMatchRequest {
        service_type: "Plumbing Repair".to_string(),
        location: "Greater Noida".to_string(),
        urgency: Urgency::Normal,
        budget_range: Some("2000-3000".to_string()),
        preferred_time: None,
    }
}

fn bench_duration_estimate(c: &mut Criterion) {
    let request = duration_request();
    c.bench_function("estimate_duration", |b| {
        b.iter(|| estimate_duration(black_box(&request)));
    });
}

fn bench_churn_assessment(c: &mut Criterion) {
    let request = churn_request();
    c.bench_function("assess_churn", |b| {
        b.iter(|| assess_churn(black_box(&request)));
    });
}

fn bench_demand_forecast(c: &mut Criterion) {
    let start = Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap();

    let mut group = c.benchmark_group("demand_forecast");
    for horizon in [7u32, 30, 90].iter() {
        group.bench_with_input(BenchmarkId::new("forecast_demand", horizon), horizon, |b, &h| {
            b.iter(|| forecast_demand(black_box("House Cleaning"), black_box(start), black_box(h)));
        });
    }
    group.finish();
}

fn bench_provider_matching(c: &mut Criterion) {
    let matcher = ProviderMatcher::with_default_weights();
    let request = match_request();

    c.bench_function("find_best_providers", |b| {
        b.iter(|| matcher.find_best_providers(black_box(&request), black_box(provider_roster())));
    });
}

fn bench_recommendations(c: &mut Criterion) {
    c.bench_function("recommend_for_user", |b| {
        b.iter(|| recommend_for_user(black_box("user_456"), black_box(5)));
    });
}

criterion_group!(
    benches,
    bench_duration_estimate,
    bench_churn_assessment,
    bench_demand_forecast,
    bench_provider_matching,
    bench_recommendations
);

criterion_main!(benches);
