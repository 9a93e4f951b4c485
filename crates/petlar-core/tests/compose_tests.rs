// Rust guideline compliant 2026-10-18

//! Unit tests for composing display-ready reservations.

use petlar_core::compose::{UNKNOWN_HOST_NAME, UNKNOWN_LOCATION};
use petlar_core::{compose_view, host_summary, total_price, Host, Pet, Reservation, ReservationStatus, User};

fn pet(id: &str, tutor_id: &str) -> Pet {
    Pet {
        id: id.to_string(),
        tutor_id: tutor_id.to_string(),
        name: format!("Pet {id}"),
        species: Some("dog".to_string()),
        breed: None,
        age: None,
        weight: None,
        sex: None,
        neutered: None,
        vaccinated: None,
        notes: None,
        photos: Vec::new(),
    }
}

fn host(price: Option<f64>) -> Host {
    Host {
        id: "host-1".to_string(),
        user_id: "user-1".to_string(),
        description: None,
        price_per_day: price,
        accepts_dogs: Some(true),
        accepts_cats: None,
        accepted_size: None,
        has_yard: None,
        has_pool: None,
        status: None,
        photos: vec!["https://img.petlar.com/casa.jpg".to_string()],
        user: Some(User {
            id: "user-1".to_string(),
            name: "Maria Souza".to_string(),
            email: "maria@petlar.com".to_string(),
            phone: None,
            address: None,
            city: Some("Curitiba".to_string()),
            state: Some("PR".to_string()),
            avatar: None,
            role: None,
        }),
    }
}

fn reservation(total: Option<f64>) -> Reservation {
    Reservation {
        id: "res-1".to_string(),
        tutor_id: "tutor-1".to_string(),
        host_id: "host-1".to_string(),
        start_date: "2024-06-01".to_string(),
        end_date: "2024-06-04".to_string(),
        status: ReservationStatus::Confirmed,
        pet_ids: vec!["pet-2".to_string(), "pet-1".to_string()],
        total_price: total,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn test_compose_resolves_pets_in_reservation_order() {
    let pets = vec![pet("pet-1", "tutor-1"), pet("pet-2", "tutor-1")];
    let view = compose_view(&reservation(Some(500.0)), Some(&host(Some(50.0))), &pets);

    assert_eq!(view.id, "res-1");
    assert_eq!(view.days, 3);
    assert_eq!(view.status, ReservationStatus::Confirmed);
    let ids: Vec<&str> = view.pets.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["pet-2", "pet-1"]);
}

#[test]
fn test_compose_prefers_backend_total() {
    let view = compose_view(&reservation(Some(500.0)), Some(&host(Some(50.0))), &[]);
    assert_eq!(view.total_price, 500.0);
}

#[test]
fn test_compose_derives_missing_total() {
    let view = compose_view(&reservation(None), Some(&host(Some(50.0))), &[]);
    assert_eq!(view.total_price, 50.0 * 3.0 * 2.0);
}

#[test]
fn test_compose_skips_missing_pets() {
    let pets = vec![pet("pet-1", "tutor-1")];
    let view = compose_view(&reservation(None), Some(&host(Some(10.0))), &pets);
    assert_eq!(view.pets.len(), 1);
    assert_eq!(view.pets[0].id, "pet-1");
}

#[test]
fn test_compose_without_host() {
    let view = compose_view(&reservation(None), None, &[]);
    assert_eq!(view.host.id, "host-1");
    assert_eq!(view.host.name, UNKNOWN_HOST_NAME);
    assert_eq!(view.host.location, UNKNOWN_LOCATION);
    assert_eq!(view.total_price, 0.0);
}

#[test]
fn test_host_summary_uses_user_details() {
    let summary = host_summary("host-1", Some(&host(None)));
    assert_eq!(summary.name, "Maria Souza");
    assert_eq!(summary.location, "Curitiba, PR");
    assert_eq!(summary.avatar.as_deref(), Some("https://img.petlar.com/casa.jpg"));
}

#[test]
fn test_host_summary_partial_location() {
    let mut host = host(None);
    if let Some(user) = host.user.as_mut() {
        user.state = None;
        user.avatar = Some("https://img.petlar.com/maria.png".to_string());
    }
    let summary = host_summary("host-1", Some(&host));
    assert_eq!(summary.location, "Curitiba");
    assert_eq!(summary.avatar.as_deref(), Some("https://img.petlar.com/maria.png"));
}

#[test]
fn test_total_price() {
    assert_eq!(total_price(40.0, 3, 2), 240.0);
    assert_eq!(total_price(40.0, 1, 0), 0.0);
}

#[test]
fn test_view_serializes_camel_case() {
    let view = compose_view(&reservation(Some(90.0)), Some(&host(Some(30.0))), &[]);
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["startDate"], "2024-06-01");
    assert_eq!(json["totalPrice"], 90.0);
    assert_eq!(json["host"]["location"], "Curitiba, PR");
}
