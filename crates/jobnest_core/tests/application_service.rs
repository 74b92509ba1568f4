use chrono::{Local, NaiveDate};
use jobnest_core::db::open_db_in_memory;
use jobnest_core::{
    ApplicationDraft, ApplicationFilter, ApplicationId, ApplicationPatch, ApplicationService,
    ApplicationStatus, KvApplicationRepository, ListQuery, MemoryKeyValueStore, ServiceError,
    SortOrder, SqliteKeyValueStore, ValidationError,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn draft(company: &str, position: &str) -> ApplicationDraft {
    ApplicationDraft {
        company: company.to_string(),
        position: position.to_string(),
        ..ApplicationDraft::default()
    }
}

fn memory_service() -> ApplicationService<KvApplicationRepository<MemoryKeyValueStore>> {
    ApplicationService::new(KvApplicationRepository::new(MemoryKeyValueStore::new()))
}

#[test]
fn add_increases_size_by_one_and_record_is_retrievable() {
    let conn = open_db_in_memory().unwrap();
    let service = ApplicationService::new(KvApplicationRepository::new(
        SqliteKeyValueStore::try_new(&conn).unwrap(),
    ));
    service.add_application(draft("Acme", "Engineer")).unwrap();
    let before = service.list_applications(&ListQuery::default()).unwrap().total;

    let created = service.add_application(draft("Globex", "Designer")).unwrap();

    let after = service.list_applications(&ListQuery::default()).unwrap().total;
    assert_eq!(after, before + 1);
    assert_eq!(service.get_application(&created.id).unwrap(), Some(created));
}

#[test]
fn add_applies_form_defaults() {
    let service = memory_service();

    let created = service
        .add_application(ApplicationDraft {
            notes: Some("   ".to_string()),
            job_link: Some(" https://globex.example ".to_string()),
            ..draft("  Globex ", "Designer")
        })
        .unwrap();

    assert_eq!(created.company, "Globex");
    assert_eq!(created.status, ApplicationStatus::Applied);
    assert_eq!(created.applied_date, Local::now().date_naive());
    assert_eq!(created.notes, None);
    assert_eq!(created.job_link.as_deref(), Some("https://globex.example"));
}

#[test]
fn missing_required_field_blocks_add() {
    let service = memory_service();

    let err = service.add_application(draft("Acme", "  ")).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::MissingField("position"))
    ));
    assert_eq!(
        service.list_applications(&ListQuery::default()).unwrap().total,
        0
    );
}

#[test]
fn edit_preserves_id_and_overwrites_only_patched_fields() {
    let service = memory_service();
    let original = service
        .add_application(ApplicationDraft {
            applied_date: Some(date(2024, 5, 1)),
            location: Some("Berlin".to_string()),
            salary: Some("80k".to_string()),
            ..draft("Acme", "Engineer")
        })
        .unwrap();

    let patch = ApplicationPatch {
        status: Some(ApplicationStatus::Interview),
        salary: Some(None),
        notes: Some(Some("phone screen on Friday".to_string())),
        ..ApplicationPatch::default()
    };
    let edited = service.edit_application(&original.id, &patch).unwrap();

    assert_eq!(edited.id, original.id);
    assert_eq!(edited.status, ApplicationStatus::Interview);
    assert_eq!(edited.salary, None);
    assert_eq!(edited.notes.as_deref(), Some("phone screen on Friday"));
    assert_eq!(edited.company, original.company);
    assert_eq!(edited.position, original.position);
    assert_eq!(edited.applied_date, original.applied_date);
    assert_eq!(edited.location, original.location);
    assert_eq!(service.get_application(&original.id).unwrap(), Some(edited));
}

#[test]
fn edit_rejects_blanking_a_required_field() {
    let service = memory_service();
    let original = service.add_application(draft("Acme", "Engineer")).unwrap();

    let patch = ApplicationPatch {
        company: Some(" ".to_string()),
        ..ApplicationPatch::default()
    };
    let err = service.edit_application(&original.id, &patch).unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(
        service.get_application(&original.id).unwrap(),
        Some(original)
    );
}

#[test]
fn edit_and_delete_unknown_id_return_not_found() {
    let service = memory_service();
    let ghost = ApplicationId::from("ghost");

    assert!(matches!(
        service
            .edit_application(&ghost, &ApplicationPatch::default())
            .unwrap_err(),
        ServiceError::NotFound(_)
    ));
    assert!(matches!(
        service.delete_application(&ghost).unwrap_err(),
        ServiceError::NotFound(_)
    ));
}

#[test]
fn delete_leaves_other_records_unchanged() {
    let service = memory_service();
    let keep_a = service.add_application(draft("Acme", "Engineer")).unwrap();
    let drop_b = service.add_application(draft("Globex", "Designer")).unwrap();
    let keep_c = service.add_application(draft("Initech", "Analyst")).unwrap();

    service.delete_application(&drop_b.id).unwrap();

    let page = service.list_applications(&ListQuery::default()).unwrap();
    assert_eq!(page.items, vec![keep_a, keep_c]);
}

#[test]
fn list_filters_sorts_and_paginates() {
    let service = memory_service();
    for day in 1..=12 {
        service
            .add_application(ApplicationDraft {
                applied_date: Some(date(2024, 6, day)),
                status: Some(if day % 3 == 0 {
                    ApplicationStatus::Rejected
                } else {
                    ApplicationStatus::Applied
                }),
                ..draft("Acme", &format!("Role {day}"))
            })
            .unwrap();
    }

    let query = ListQuery {
        filter: ApplicationFilter::by_status(ApplicationStatus::Applied),
        sort: SortOrder::AppliedDateDesc,
        page: 1,
        rows_per_page: Some(5),
    };
    let page = service.list_applications(&query).unwrap();

    assert_eq!(page.total, 8);
    assert_eq!(page.page_count(), 2);
    let days: Vec<_> = page
        .items
        .iter()
        .map(|item| item.applied_date)
        .collect();
    assert_eq!(days, vec![date(2024, 6, 4), date(2024, 6, 2), date(2024, 6, 1)]);
}

#[test]
fn dashboard_reports_counts_and_five_most_recent() {
    let service = memory_service();
    let statuses = [
        ApplicationStatus::Applied,
        ApplicationStatus::Interview,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
        ApplicationStatus::Accepted,
        ApplicationStatus::Applied,
        ApplicationStatus::Interview,
    ];
    for (index, status) in statuses.into_iter().enumerate() {
        service
            .add_application(ApplicationDraft {
                status: Some(status),
                applied_date: Some(date(2024, 1, 1 + index as u32)),
                ..draft("Acme", "Engineer")
            })
            .unwrap();
    }

    let dashboard = service.dashboard().unwrap();
    assert_eq!(dashboard.stats.total, 7);
    assert_eq!(dashboard.stats.active, 4);
    assert_eq!(dashboard.stats.interviews, 2);
    assert_eq!(dashboard.stats.offers, 1);
    assert!((dashboard.stats.response_rate - 4.0 / 7.0 * 100.0).abs() < 1e-9);

    assert_eq!(dashboard.recent.len(), 5);
    assert_eq!(dashboard.recent[0].applied_date, date(2024, 1, 7));
    assert_eq!(dashboard.recent[4].applied_date, date(2024, 1, 3));
}

#[test]
fn export_then_import_into_fresh_store_keeps_collection() {
    let source = memory_service();
    source.add_application(draft("Acme", "Engineer")).unwrap();
    source.add_application(draft("Globex", "Designer")).unwrap();
    let exported = source.export_json().unwrap();

    let target = memory_service();
    assert_eq!(target.import_json(&exported).unwrap(), 2);
    assert_eq!(
        target.list_applications(&ListQuery::default()).unwrap().items,
        source.list_applications(&ListQuery::default()).unwrap().items
    );
}

#[test]
fn import_rejects_malformed_payload() {
    let service = memory_service();
    let err = service.import_json("{\"jobs\": 1}").unwrap_err();
    assert!(matches!(err, ServiceError::InvalidImport(_)));
}
