use mygarage::car_actor::{CarError, ValidationRules};
use mygarage::clients::CarRepository;
use mygarage::lifecycle::GarageSystem;
use mygarage::model::seed::demo_cars;
use mygarage::model::{CarId, CarPayload};
use mygarage::query::{self, Pagination, QueryRequest, SortField, SortOrder};
use chrono::NaiveDate;

fn payload(brand: &str, year: i64) -> CarPayload {
    CarPayload {
        brand: Some(brand.to_string()),
        model: Some("Model".to_string()),
        year: Some(year),
        insurance_expiry: Some("2026-05-01".to_string()),
        road_tax_expiry: Some("2026-06-01".to_string()),
        inspection_expiry: Some("2026-07-01".to_string()),
        owner_id: None,
    }
}

/// Full end-to-end test with the real actor: seed, write, query, delete, shut down.
#[tokio::test]
async fn test_full_garage_system_integration() {
    let system = GarageSystem::new(32, ValidationRules::default());

    let seeded = system.seed(demo_cars()).await.expect("Failed to seed");
    assert_eq!(seeded, 6);

    // New cars continue the id sequence
    let car = system
        .car_client
        .create(payload("Dacia", 2019))
        .await
        .expect("Failed to create car");
    assert_eq!(car.id, CarId(7));

    // Patch keeps the untouched fields
    let patched = system
        .car_client
        .patch(
            car.id,
            CarPayload {
                year: Some(2021),
                ..CarPayload::default()
            },
        )
        .await
        .expect("Failed to patch car");
    assert_eq!(patched.year, 2021);
    assert_eq!(patched.brand, "Dacia");

    // Query over the live store
    let cars = system.car_client.list().await.expect("Failed to list");
    let request = QueryRequest {
        sort_by: Some(SortField::Year),
        order: SortOrder::Desc,
        pagination: Pagination::Page { page: 1, limit: 3 },
        ..QueryRequest::default()
    };
    let today = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    let page = query::run(cars, &request, today);
    let years: Vec<i32> = page.items.iter().map(|c| c.year).collect();
    assert_eq!(years, vec![2021, 2020, 2018]);
    assert_eq!(page.meta.map(|m| m.total_pages), Some(3));

    // Delete removes it from listings
    let deleted = system.car_client.delete(car.id).await.expect("Failed to delete");
    assert_eq!(deleted.id, CarId(7));
    let remaining = system.car_client.list().await.expect("Failed to list");
    assert!(remaining.iter().all(|c| c.id != CarId(7)));

    system.shutdown().await.expect("Shutdown failed");
}

/// Repository handles cloned out of the system keep working and do not block shutdown once
/// dropped.
#[tokio::test]
async fn test_repository_handles_share_one_store() {
    let system = GarageSystem::new(8, ValidationRules::default());
    let repo = system.repository();

    let car = repo.create(payload("Skoda", 2012)).await.unwrap();
    let seen = system.car_client.get(car.id).await.unwrap();
    assert_eq!(seen, Some(car));

    drop(repo);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_seed_stops_at_first_invalid_car() {
    let system = GarageSystem::new(8, ValidationRules::default());

    let mut cars = demo_cars();
    cars[2].brand = Some("VW".to_string());

    let err = system.seed(cars).await.unwrap_err();
    assert!(matches!(err, CarError::Validation(ref v) if v.field == "carBrand"));
    assert_eq!(system.car_client.list().await.unwrap().len(), 2);

    system.shutdown().await.unwrap();
}
