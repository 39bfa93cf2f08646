mod common;

use vitrine::db::models::project::{Manager as _, Project};

fn project(name: &str, created_at: &str) -> Project {
    Project {
        name: name.to_owned(),
        description: String::new(),
        url: format!("https://example.com/{name}"),
        deploy: String::new(),
        created_at: created_at.to_owned(),
    }
}

#[actix_web::test]
async fn test_create_then_find_by_name_expect_roundtrip() {
    let (_td, db) = common::initialize_store().await;

    db.create(&project("foo", "2020-01-01T00:00:00+00:00"))
        .await
        .unwrap();

    let found = db.find_by_name("foo").await.unwrap().unwrap();
    assert_eq!(found.url, "https://example.com/foo");
    let missing = db.find_by_name("bar").await.unwrap();
    assert!(missing.is_none());
}

#[actix_web::test]
async fn test_find_all_expect_most_recent_first() {
    let (_td, db) = common::initialize_store().await;

    db.create(&project("old", "2019-06-01T00:00:00+00:00"))
        .await
        .unwrap();
    db.create(&project("new", "2021-03-01T00:00:00+00:00"))
        .await
        .unwrap();
    db.create(&project("mid", "2020-01-01T00:00:00+00:00"))
        .await
        .unwrap();

    let all = db.find_all_order_by_created_at_desc().await.unwrap();
    let names: Vec<&str> = all.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["new", "mid", "old"]);
}

#[actix_web::test]
async fn test_store_survives_reconnect() {
    let (td, db) = common::initialize_store().await;
    db.create(&project("foo", "2020-01-01T00:00:00+00:00"))
        .await
        .unwrap();
    drop(db);

    let db_url = format!(
        "sqlite://{}/test.sqlite3?mode=rwc",
        td.path().to_string_lossy()
    );
    let db = vitrine::db::init::connect_url(&db_url).await.unwrap();
    let found = db.find_by_name("foo").await.unwrap();
    assert!(found.is_some());
}
