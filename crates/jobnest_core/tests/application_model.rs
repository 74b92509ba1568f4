use chrono::NaiveDate;
use jobnest_core::{ApplicationId, ApplicationStatus, JobApplication, ValidationError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn serialization_uses_stored_field_names() {
    let mut app = JobApplication::with_id(
        ApplicationId::from("1712345678901"),
        "Acme",
        "Backend Engineer",
        date(2024, 4, 5),
    );
    app.status = ApplicationStatus::Interview;
    app.job_link = Some("https://acme.example/jobs/42".to_string());

    let json = serde_json::to_value(&app).unwrap();
    assert_eq!(json["id"], "1712345678901");
    assert_eq!(json["status"], "Interview");
    assert_eq!(json["appliedDate"], "2024-04-05");
    assert_eq!(json["jobLink"], "https://acme.example/jobs/42");
    assert!(json.get("notes").is_none());

    let decoded: JobApplication = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, app);
}

#[test]
fn form_records_with_empty_optional_strings_decode_as_absent() {
    let value = serde_json::json!({
        "company": "Initech",
        "position": "Analyst",
        "status": "Applied",
        "appliedDate": "2024-01-15",
        "jobLink": "",
        "notes": "  ",
        "id": "1705312800000"
    });

    let app: JobApplication = serde_json::from_value(value).unwrap();
    assert_eq!(app.id.as_str(), "1705312800000");
    assert_eq!(app.job_link, None);
    assert_eq!(app.notes, None);
    assert_eq!(app.location, None);
}

#[test]
fn unknown_status_fails_to_decode() {
    let value = serde_json::json!({
        "id": "1",
        "company": "Initech",
        "position": "Analyst",
        "status": "Ghosted",
        "appliedDate": "2024-01-15"
    });

    assert!(serde_json::from_value::<JobApplication>(value).is_err());
}

#[test]
fn validate_requires_company_position_and_id() {
    let mut app = JobApplication::new("Acme", "Engineer", date(2024, 2, 2));
    assert_eq!(app.validate(), Ok(()));

    app.company = "   ".to_string();
    assert_eq!(app.validate(), Err(ValidationError::MissingField("company")));

    app.company = "Acme".to_string();
    app.position = String::new();
    assert_eq!(
        app.validate(),
        Err(ValidationError::MissingField("position"))
    );

    let blank_id = JobApplication::with_id(ApplicationId::from(""), "Acme", "Engineer", date(2024, 2, 2));
    assert_eq!(blank_id.validate(), Err(ValidationError::EmptyId));
}
