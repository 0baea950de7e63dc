use super::*;

#[test]
fn collection_name_required() {
    let err = CollectionForm { name: "  ".to_owned(), description: String::new() }.validate().unwrap_err();
    assert_eq!(err.get("name"), Some(COLLECTION_NAME_REQUIRED));
}

#[test]
fn collection_builds_trimmed_input() {
    let input = CollectionForm { name: " Sales ".to_owned(), description: "  ".to_owned() }.validate().unwrap();
    assert_eq!(input, CollectionInput { name: "Sales".to_owned(), description: None });
}

#[test]
fn data_source_reports_every_missing_field() {
    let err = DataSourceForm::default().validate().unwrap_err();
    assert_eq!(err.get("name"), Some(NAME_REQUIRED));
    assert_eq!(err.get("type"), Some(TYPE_REQUIRED));
    assert_eq!(err.get("connectionUri"), Some(URI_REQUIRED));
    assert_eq!(err.iter().count(), 3);
}

#[test]
fn data_source_rejects_unparseable_uri() {
    let form = DataSourceForm {
        name: "pg".to_owned(),
        kind: "PostgreSQL".to_owned(),
        connection_uri: "//db.internal:5432/app".to_owned(),
        ..DataSourceForm::default()
    };
    assert_eq!(form.validate().unwrap_err().get("connectionUri"), Some(URI_INVALID));
}

#[test]
fn data_source_valid_form_builds_input() {
    let form = DataSourceForm {
        name: "pg".to_owned(),
        kind: "MongoDB".to_owned(),
        collection_id: Some("7".to_owned()),
        connection_uri: " mongodb://db:27017/app ".to_owned(),
        credentials: String::new(),
    };
    let input = form.validate().unwrap();
    assert_eq!(input.kind, DataSourceType::MongoDb);
    assert_eq!(input.connection_uri.as_deref(), Some("mongodb://db:27017/app"));
    assert_eq!(input.collection_id.as_deref(), Some("7"));
    assert_eq!(input.credentials, None);
}

#[test]
fn login_requires_identifier_and_password() {
    let err = LoginForm::default().validate().unwrap_err();
    assert_eq!(err.get("usernameOrEmail"), Some(LOGIN_ID_REQUIRED));
    assert_eq!(err.get("password"), Some(PASSWORD_REQUIRED));
}

#[test]
fn login_checks_email_shape_only_with_at_sign() {
    let form = |id: &str| LoginForm { username_or_email: id.to_owned(), password: "pw".to_owned() };
    assert!(form("achen").validate().is_ok());
    assert!(form("a@example.com").validate().is_ok());
    assert_eq!(form("a@example").validate().unwrap_err().get("usernameOrEmail"), Some(EMAIL_INVALID));
}

#[test]
fn email_shape_is_stable_across_calls() {
    for _ in 0..3 {
        assert!(is_valid_email("ops@delfos.io"));
        assert!(!is_valid_email("ops@delfos"));
        assert!(!is_valid_email("ops @delfos.io"));
    }
}

#[test]
fn clearing_a_field_error() {
    let mut errors = FieldErrors::new();
    errors.insert("name", NAME_REQUIRED);
    errors.clear("name");
    assert!(errors.is_empty());
}

#[test]
fn uri_check() {
    assert!(is_valid_uri("postgresql://u:p@host:5432/db"));
    assert!(!is_valid_uri("not a uri"));
    assert!(!is_valid_uri(""));
}
