//! Shell Session Integration Tests
//!
//! Drives a session with scripted input against an in-process subject source.

use std::io::Cursor;

use async_trait::async_trait;

use bookshelf::cli::{Flow, Session};
use bookshelf::importer::{CatalogImporter, ImportError, SubjectResponse, SubjectSource, Work, WorkAuthor};

struct StaticSource;

#[async_trait]
impl SubjectSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_subject(&self, category: &str) -> Result<SubjectResponse, ImportError> {
        if category == "offline" {
            return Err(ImportError::Unavailable("no network".to_string()));
        }

        Ok(SubjectResponse {
            name: Some(category.to_string()),
            work_count: Some(2),
            works: vec![
                Work {
                    key: Some(format!("/works/{}-1", category)),
                    title: Some("Dune".to_string()),
                    authors: Some(vec![WorkAuthor {
                        name: Some("Frank Herbert".to_string()),
                        key: None,
                    }]),
                    cover_id: Some(11),
                },
                Work {
                    key: Some(format!("/works/{}-2", category)),
                    title: Some("Solaris".to_string()),
                    authors: None,
                    cover_id: None,
                },
            ],
        })
    }
}

fn session() -> Session<StaticSource> {
    Session::new(CatalogImporter::new(StaticSource))
}

async fn run_script(session: &mut Session<StaticSource>, script: &str) -> String {
    let mut out = Vec::new();
    session
        .run(None, Cursor::new(script.to_string()), &mut out)
        .await
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_session_imports_default_category_on_start() {
    let mut session = session();
    let out = run_script(&mut session, "list\nquit\n").await;

    assert!(out.contains("Imported 2 books from \"science\""));
    assert!(out.contains("Dune"));
    assert!(out.contains("Solaris"));
    assert_eq!(session.store().len(), 2);
}

#[tokio::test]
async fn test_add_edit_delete_flow() {
    let mut session = session();
    session.start(None).await;
    let mut out = Vec::new();

    session
        .execute(r#"add --title "Hyperion" --authors "Dan Simmons""#, &mut out)
        .await
        .unwrap();
    assert_eq!(session.store().len(), 3);
    let new_id = session.store().records()[2].id.clone();
    assert_eq!(session.store().records()[2].title, "Hyperion");

    session
        .execute(&format!("edit {} --title \"Fall of Hyperion\"", new_id), &mut out)
        .await
        .unwrap();
    assert_eq!(session.store().get(&new_id).unwrap().title, "Fall of Hyperion");

    session
        .execute("delete /works/science-1", &mut out)
        .await
        .unwrap();
    let ids: Vec<&str> = session.store().records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["/works/science-2", new_id.as_str()]);

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains(&format!("Added {}", new_id)));
    assert!(out.contains(&format!("Updated {}", new_id)));
    assert!(out.contains("Deleted \"Dune\""));
}

#[tokio::test]
async fn test_blank_title_is_rejected() {
    let mut session = session();
    session.start(None).await;
    let mut out = Vec::new();

    session.execute("add --authors Nobody", &mut out).await.unwrap();
    session
        .execute("edit /works/science-1 --title '   '", &mut out)
        .await
        .unwrap();

    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.matches("Title is required").count(), 2);
    assert_eq!(session.store().len(), 2);
    assert_eq!(session.store().get("/works/science-1").unwrap().title, "Dune");
}

#[tokio::test]
async fn test_edit_unknown_id_returns_to_list() {
    let mut session = session();
    session.start(None).await;
    let before = session.store().snapshot();
    let mut out = Vec::new();

    let flow = session
        .execute("edit ghost --title X", &mut out)
        .await
        .unwrap();

    let out = String::from_utf8(out).unwrap();
    assert_eq!(flow, Flow::Continue);
    assert!(out.contains("Book not found: ghost"));
    assert!(out.contains("Total: 2 books"));
    assert_eq!(session.store().records(), before.as_slice());
}

#[tokio::test]
async fn test_failed_reimport_keeps_catalog() {
    let mut session = session();
    session.start(Some("fantasy")).await;
    let mut out = Vec::new();

    session.execute("import offline", &mut out).await.unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Could not import \"offline\""));
    assert_eq!(session.store().records()[0].id, "/works/fantasy-1");
}

#[tokio::test]
async fn test_copy_and_cycle() {
    let mut session = session();
    session.start(None).await;
    let mut out = Vec::new();

    session.execute("copy /works/science-1", &mut out).await.unwrap();
    assert_eq!(session.store().len(), 3);
    assert_eq!(session.store().records()[2].title, "Dune (Copy)");

    session.execute("cycle /works/science-2", &mut out).await.unwrap();
    assert!(session
        .store()
        .get("/works/science-2")
        .unwrap()
        .image
        .contains("text=Book+1"));
}

#[tokio::test]
async fn test_unknown_command_keeps_session_alive() {
    let mut session = session();
    let out = run_script(&mut session, "frobnicate\nadd --title \"unterminated\nlist\n").await;

    assert!(out.contains("error"));
    assert!(out.contains("Unterminated \" quote"));
    assert!(out.contains("Total: 2 books"));
}

#[tokio::test]
async fn test_add_title_with_leading_dash() {
    let mut session = session();
    session.start(None).await;
    let mut out = Vec::new();

    session
        .execute(r#"add --title "-30- Stories" --authors Anon"#, &mut out)
        .await
        .unwrap();

    assert_eq!(session.store().len(), 3);
    assert_eq!(session.store().records()[2].title, "-30- Stories");
}
