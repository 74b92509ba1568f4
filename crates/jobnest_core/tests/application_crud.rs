use chrono::NaiveDate;
use jobnest_core::db::open_db_in_memory;
use jobnest_core::{
    ApplicationId, ApplicationRepository, ApplicationStatus, JobApplication, KeyValueStore,
    KvApplicationRepository, RepoError, SqliteKeyValueStore, APPLICATIONS_KEY,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn app(company: &str, position: &str) -> JobApplication {
    JobApplication::new(company, position, date(2024, 3, 10))
}

#[test]
fn create_appends_and_get_finds_by_id() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();
    let repo = KvApplicationRepository::new(store);

    let first = app("Acme", "Engineer");
    let second = app("Globex", "Designer");
    repo.create(&first).unwrap();
    let id = repo.create(&second).unwrap();

    assert_eq!(id, second.id);
    let all = repo.load_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, second.id);
    assert_eq!(repo.get(&id).unwrap(), Some(second));
}

#[test]
fn collection_is_stored_as_one_json_array_under_jobs_key() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();
    let repo = KvApplicationRepository::new(&store);

    repo.create(&app("Acme", "Engineer")).unwrap();

    let raw = store.get(APPLICATIONS_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["company"], "Acme");
    assert_eq!(array[0]["appliedDate"], "2024-03-10");
}

#[test]
fn create_rejects_duplicate_id_and_invalid_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = KvApplicationRepository::new(SqliteKeyValueStore::try_new(&conn).unwrap());

    let original = app("Acme", "Engineer");
    repo.create(&original).unwrap();

    let err = repo.create(&original).unwrap_err();
    assert!(matches!(err, RepoError::DuplicateId(id) if id == original.id));

    let invalid = app("", "Engineer");
    let err = repo.create(&invalid).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(repo.load_all().unwrap().len(), 1);
}

#[test]
fn update_replaces_in_place() {
    let conn = open_db_in_memory().unwrap();
    let repo = KvApplicationRepository::new(SqliteKeyValueStore::try_new(&conn).unwrap());

    let first = app("Acme", "Engineer");
    let mut second = app("Globex", "Designer");
    let third = app("Initech", "Analyst");
    for item in [&first, &second, &third] {
        repo.create(item).unwrap();
    }

    second.status = ApplicationStatus::Offer;
    repo.update(&second).unwrap();

    let all = repo.load_all().unwrap();
    assert_eq!(all[1].id, second.id);
    assert_eq!(all[1].status, ApplicationStatus::Offer);
    assert_eq!(all[0], first);
    assert_eq!(all[2], third);
}

#[test]
fn update_and_delete_missing_return_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = KvApplicationRepository::new(SqliteKeyValueStore::try_new(&conn).unwrap());

    let missing = app("Acme", "Engineer");
    assert!(matches!(
        repo.update(&missing).unwrap_err(),
        RepoError::NotFound(id) if id == missing.id
    ));

    let ghost = ApplicationId::from("does-not-exist");
    assert!(matches!(
        repo.delete(&ghost).unwrap_err(),
        RepoError::NotFound(id) if id == ghost
    ));
}

#[test]
fn delete_removes_exactly_one_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = KvApplicationRepository::new(SqliteKeyValueStore::try_new(&conn).unwrap());

    let items: Vec<_> = ["Acme", "Globex", "Initech"]
        .into_iter()
        .map(|company| app(company, "Engineer"))
        .collect();
    for item in &items {
        repo.create(item).unwrap();
    }

    repo.delete(&items[1].id).unwrap();

    let remaining = repo.load_all().unwrap();
    assert_eq!(remaining, vec![items[0].clone(), items[2].clone()]);
    assert!(repo.get(&items[1].id).unwrap().is_none());
}

#[test]
fn replace_all_rejects_duplicate_ids_without_writing() {
    let conn = open_db_in_memory().unwrap();
    let repo = KvApplicationRepository::new(SqliteKeyValueStore::try_new(&conn).unwrap());
    repo.create(&app("Acme", "Engineer")).unwrap();

    let dup = JobApplication::with_id(ApplicationId::from("7"), "A", "B", date(2024, 1, 1));
    let err = repo.replace_all(&[dup.clone(), dup]).unwrap_err();
    assert!(matches!(err, RepoError::DuplicateId(_)));
    assert_eq!(repo.load_all().unwrap().len(), 1);
}
