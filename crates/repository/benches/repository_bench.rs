use criterion::{Criterion, criterion_group, criterion_main};
use domain::{Itinerary, Trip};
use repository::{
    InMemoryItineraryRepository, InMemoryTripsRepository, ItineraryRepository, TripsRepository,
};
use serde_json::json;

fn make_itinerary(n: usize) -> Itinerary {
    Itinerary::create(&json!({
        "id": format!("itinerary_{n}"),
        "createdAt": "2024-01-01T00:00:00.000Z",
        "title": format!("Trip {n}"),
        "sourceQuery": "3 days in Tokyo",
        "days": [
            {"date": "2024-03-01", "segments": [
                {"type": "poi", "name": "Location 1", "stayMin": 120},
                {"type": "meal", "name": "Restaurant 1", "stayMin": 60}
            ]},
            {"date": "2024-03-02", "segments": [
                {"type": "poi", "name": "Location 2", "stayMin": 120}
            ]}
        ]
    }))
    .unwrap()
}

fn make_trip(n: usize) -> Trip {
    Trip::create(&json!({
        "id": format!("itinerary_{n}"),
        "title": format!("Trip {n}"),
        "createdAt": "2024-01-15T12:00:00.000Z"
    }))
    .unwrap()
}

fn bench_save_itinerary(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let itinerary = make_itinerary(1);

    c.bench_function("repository/save_itinerary", |b| {
        b.iter(|| {
            rt.block_on(async {
                let repo = InMemoryItineraryRepository::new();
                repo.save(&itinerary).await.unwrap();
            });
        });
    });
}

fn bench_find_by_id(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let repo = InMemoryItineraryRepository::new();

    // 100 stored itineraries
    rt.block_on(async {
        for n in 0..100 {
            repo.save(&make_itinerary(n)).await.unwrap();
        }
    });

    c.bench_function("repository/find_by_id_of_100", |b| {
        b.iter(|| {
            rt.block_on(async {
                let _ = repo.find_by_id("itinerary_50").await.unwrap();
            });
        });
    });
}

fn bench_find_public(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let repo = InMemoryItineraryRepository::new();

    rt.block_on(async {
        for n in 0..100 {
            repo.save(&make_itinerary(n)).await.unwrap();
        }
    });

    c.bench_function("repository/find_public_100", |b| {
        b.iter(|| {
            rt.block_on(async {
                let _ = repo.find_public().await.unwrap();
            });
        });
    });
}

fn bench_trip_save_then_delete(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let repo = InMemoryTripsRepository::new();
    let trip = make_trip(1);

    c.bench_function("repository/trip_save_then_delete", |b| {
        b.iter(|| {
            rt.block_on(async {
                repo.save(&trip).await.unwrap();
                repo.delete(trip.id()).await.unwrap();
            });
        });
    });
}

criterion_group!(
    benches,
    bench_save_itinerary,
    bench_find_by_id,
    bench_find_public,
    bench_trip_save_then_delete,
);
criterion_main!(benches);
