use cards_core::db::open_db_in_memory;
use cards_core::{Card, CardError, CardRepository, CardService, SqliteCardRepository};

fn sample(title: &str) -> Card {
    Card::new(title, "Created by test", "OPEN")
}

#[test]
fn insert_assigns_id_and_find_by_id_roundtrips() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCardRepository::new(&conn);

    let created = repo.insert(&sample("TestCard")).unwrap();
    let id = created.id.unwrap();

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded, created);
    assert_eq!(loaded.title, "TestCard");
    assert_eq!(loaded.description, "Created by test");
    assert_eq!(loaded.status, "OPEN");
}

#[test]
fn insert_ignores_caller_supplied_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCardRepository::new(&conn);

    let created = repo.insert(&sample("first").with_id(42)).unwrap();
    assert_eq!(created.id, Some(1));
    assert!(!repo.exists(42).unwrap());
}

#[test]
fn insert_assigns_distinct_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCardRepository::new(&conn);

    let first = repo.insert(&sample("a")).unwrap();
    let second = repo.insert(&sample("b")).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn insert_still_succeeds_after_upsert_takes_max_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCardRepository::new(&conn);

    repo.update(i64::MAX, &sample("max")).unwrap();
    let next = repo.insert(&sample("next")).unwrap();
    let next_id = next.id.unwrap();

    assert_ne!(next_id, i64::MAX);
    assert_eq!(repo.find_by_id(next_id).unwrap().unwrap().title, "next");
    assert_eq!(repo.find_by_id(i64::MAX).unwrap().unwrap().title, "max");
    assert_eq!(repo.find_all().unwrap().len(), 2);
}

#[test]
fn service_create_succeeds_after_replace_at_max_id() {
    let conn = open_db_in_memory().unwrap();
    let service = CardService::new(SqliteCardRepository::new(&conn));

    service.replace_card(i64::MAX, sample("max")).unwrap();
    for title in ["a", "b", "c"] {
        service.create_card(&sample(title)).unwrap();
    }
    assert_eq!(service.list_cards().unwrap().len(), 4);
}

#[test]
fn find_by_id_returns_none_for_missing_card() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCardRepository::new(&conn);

    assert!(repo.find_by_id(999).unwrap().is_none());
}

#[test]
fn find_all_is_empty_on_fresh_store_and_ordered_by_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCardRepository::new(&conn);
    assert!(repo.find_all().unwrap().is_empty());

    repo.insert(&sample("a")).unwrap();
    repo.insert(&sample("b")).unwrap();
    repo.insert(&sample("c")).unwrap();

    let titles: Vec<String> = repo
        .find_all()
        .unwrap()
        .into_iter()
        .map(|card| card.title)
        .collect();
    assert_eq!(titles, vec!["a", "b", "c"]);
}

#[test]
fn update_overwrites_existing_card_in_place() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCardRepository::new(&conn);

    let created = repo.insert(&sample("draft")).unwrap();
    let id = created.id.unwrap();

    let updated = repo
        .update(id, &Card::new("final", "done now", "CLOSED"))
        .unwrap();
    assert_eq!(updated.id, Some(id));

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.title, "final");
    assert_eq!(loaded.status, "CLOSED");
    assert_eq!(repo.find_all().unwrap().len(), 1);
}

#[test]
fn update_missing_id_creates_card_with_that_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCardRepository::new(&conn);

    repo.update(77, &sample("upserted")).unwrap();

    let loaded = repo.find_by_id(77).unwrap().unwrap();
    assert_eq!(loaded.id, Some(77));
    assert_eq!(loaded.title, "upserted");
}

#[test]
fn save_dispatches_on_id_presence() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCardRepository::new(&conn);

    let created = repo.save(&sample("new")).unwrap();
    let id = created.id.unwrap();

    let mut changed = created.clone();
    changed.title = "renamed".to_string();
    repo.save(&changed).unwrap();

    let all = repo.find_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, Some(id));
    assert_eq!(all[0].title, "renamed");
}

#[test]
fn delete_by_id_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCardRepository::new(&conn);

    let id = repo.insert(&sample("gone")).unwrap().id.unwrap();
    assert!(repo.exists(id).unwrap());

    assert!(repo.delete_by_id(id).unwrap());
    assert!(!repo.delete_by_id(id).unwrap());
    assert!(!repo.exists(id).unwrap());
}

#[test]
fn service_get_card_reports_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = CardService::new(SqliteCardRepository::new(&conn));

    let err = service.get_card(5).unwrap_err();
    assert!(matches!(err, CardError::NotFound(5)));
    assert_eq!(err.to_string(), "Card 5 not found");
}

#[test]
fn service_replace_card_forces_path_id() {
    let conn = open_db_in_memory().unwrap();
    let service = CardService::new(SqliteCardRepository::new(&conn));

    let created = service.create_card(&sample("original")).unwrap();
    let id = created.id.unwrap();

    let body = Card::new("replaced", "", "DONE").with_id(id + 100);
    let saved = service.replace_card(id, body).unwrap();
    assert_eq!(saved.id, Some(id));

    assert_eq!(service.get_card(id).unwrap().title, "replaced");
    assert!(matches!(
        service.get_card(id + 100),
        Err(CardError::NotFound(_))
    ));
}

#[test]
fn service_create_validated_card_rejects_blank_title_without_persisting() {
    let conn = open_db_in_memory().unwrap();
    let service = CardService::new(SqliteCardRepository::new(&conn));

    let err = service
        .create_validated_card(&Card::new("   ", "no title", "OPEN"))
        .unwrap_err();
    match err {
        CardError::Validation(validation) => assert_eq!(validation.field, "title"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(service.list_cards().unwrap().is_empty());
}

#[test]
fn service_delete_existing_card_requires_presence() {
    let conn = open_db_in_memory().unwrap();
    let service = CardService::new(SqliteCardRepository::new(&conn));

    assert!(matches!(
        service.delete_existing_card(3),
        Err(CardError::NotFound(3))
    ));

    let id = service.create_card(&sample("x")).unwrap().id.unwrap();
    service.delete_existing_card(id).unwrap();
    service.delete_card(id).unwrap();
    assert!(service.list_cards().unwrap().is_empty());
}
