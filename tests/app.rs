use rstest::rstest;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::{ConnectOptions, Connection};
use std::path::Path;
use weblist::{App, WebsiteRecord};
use weblist_bundle::StaticResources;
use weblist_bundle::error::ErrorKind as BundleErrorKind;
use weblist_config::Config;
use weblist_store::DEFAULT_RESOURCE;
use weblist_store::error::ErrorKind as StoreErrorKind;

fn config(temp_dir: &Path) -> Config {
    Config { temp_dir: Some(temp_dir.to_path_buf()), ..Config::default() }
}

fn assert_no_leftovers(dir: &Path) {
    let leftovers: Vec<_> = std::fs::read_dir(dir).unwrap().map(|e| e.unwrap().path()).collect();
    assert!(leftovers.is_empty(), "temporary files left behind: {leftovers:?}");
}

async fn fixture_bytes(sql: &str) -> Vec<u8> {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("fixture.db");
    let mut conn = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Delete)
        .connect()
        .await
        .unwrap();
    sqlx::query(sql).execute(&mut conn).await.unwrap();
    conn.close().await.unwrap();
    std::fs::read(path).unwrap()
}

#[rstest]
#[case("World", "Hello World, It's show time!")]
#[case("", "Hello , It's show time!")]
#[case("Zoë", "Hello Zoë, It's show time!")]
fn test_greet(#[case] name: &str, #[case] expected: &str) {
    let temp_dir = tempfile::tempdir().unwrap();
    let app = App::new(&config(temp_dir.path()));
    assert_eq!(app.greet(name), expected);
}

#[test]
fn test_bundled_resources() {
    let temp_dir = tempfile::tempdir().unwrap();
    let app = App::new(&config(temp_dir.path()));
    assert!(app.resources().iter().any(|p| p == "foo.db"));
    // The default configuration points at the bundled database.
    let database = Config::default().database;
    assert!(app.resources().iter().any(|p| p.as_ref() == database.as_str()));
    assert_eq!(Config::default().database, DEFAULT_RESOURCE);
}

#[tokio::test]
async fn test_bundled_web_list() {
    let temp_dir = tempfile::tempdir().unwrap();
    let app = App::new(&config(temp_dir.path()));
    let records = app.web_list().await.unwrap();
    assert_eq!(
        records,
        vec![
            WebsiteRecord::new("https://www.rust-lang.org", "Rust"),
            WebsiteRecord::new("https://crates.io", "crates.io"),
            WebsiteRecord::new("https://docs.rs", "Docs.rs"),
            WebsiteRecord::new("https://www.sqlite.org", "SQLite"),
        ]
    );
    assert_no_leftovers(temp_dir.path());
}

#[tokio::test]
async fn test_injected_web_list() {
    let temp_dir = tempfile::tempdir().unwrap();
    let database = fixture_bytes(
        r#"
            CREATE TABLE weblist (website TEXT, name TEXT);
            INSERT INTO weblist VALUES ('a.com', 'A');
            INSERT INTO weblist VALUES ('b.com', 'B');
        "#,
    )
    .await;
    let resources = StaticResources::with_files([("sites/other.db", database)]);
    let config = Config { database: "sites/other.db".to_string(), ..config(temp_dir.path()) };
    let app = App::with_resources(resources, &config);
    let (first, second) = tokio::join!(app.web_list(), app.web_list());
    let expected = vec![WebsiteRecord::new("a.com", "A"), WebsiteRecord::new("b.com", "B")];
    assert_eq!(first.unwrap(), expected);
    assert_eq!(second.unwrap(), expected);
    assert_no_leftovers(temp_dir.path());
}

#[tokio::test]
async fn test_missing_database_is_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = Config { database: "missing.db".to_string(), ..config(temp_dir.path()) };
    let app = App::new(&config);
    let err = app.web_list().await.unwrap_err();
    assert_eq!(*err, StoreErrorKind::Resource(BundleErrorKind::ResourceNotFound("missing.db".to_string())));
    assert_no_leftovers(temp_dir.path());
}

#[tokio::test]
async fn test_records_serialize_for_the_ui() {
    let temp_dir = tempfile::tempdir().unwrap();
    let app = App::new(&config(temp_dir.path()));
    let records = app.web_list().await.unwrap();
    let json = serde_json::to_value(&records).unwrap();
    assert_eq!(json[0]["website"], "https://www.rust-lang.org");
    assert_eq!(json[0]["name"], "Rust");
}
