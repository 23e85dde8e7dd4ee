use chrono::Utc;

use database::error::ServiceError;
use database::services::{ParticipationService, SessionService};
use database::store::{EntityStore, MemoryStore};
use models::session::{CreateSession, UpdateSession};
use models::user::CreateUser;

fn pilates(name: &str) -> CreateSession {
    CreateSession {
        name: name.to_string(),
        date: Utc::now().naive_utc(),
        description: "Pilates class".to_string(),
        teacher_id: Some(1),
    }
}

#[tokio::test]
async fn create_assigns_identity_and_empty_roster() {
    let store = MemoryStore::new();

    let session = SessionService::create(&store, pilates("Evening pilates"))
        .await
        .unwrap();

    assert!(session.id > 0);
    assert_eq!(session.name, "Evening pilates");
    assert_eq!(session.teacher_id, Some(1));
    assert!(session.users.is_empty());
    assert_eq!(session.created_at, session.updated_at);
}

#[tokio::test]
async fn find_all_returns_every_session() {
    let store = MemoryStore::new();
    SessionService::create(&store, pilates("One")).await.unwrap();
    SessionService::create(&store, pilates("Two")).await.unwrap();

    let sessions = SessionService::find_all(&store).await.unwrap();

    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].name, "One");
    assert_eq!(sessions[1].name, "Two");
}

#[tokio::test]
async fn get_by_id_reports_absence_as_none() {
    let store = MemoryStore::new();

    let found = SessionService::get_by_id(&store, 999).await.unwrap();
    assert!(found.is_none());

    let session = SessionService::create(&store, pilates("One")).await.unwrap();
    let found = SessionService::get_by_id(&store, session.id).await.unwrap();
    assert_eq!(found.unwrap().name, "One");
}

#[tokio::test]
async fn update_overwrites_fields_and_keeps_roster() {
    let store = MemoryStore::new();
    let session = SessionService::create(&store, pilates("One")).await.unwrap();
    let user = store
        .insert_user(CreateUser {
            email: "jane@test.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            password: "password".to_string(),
            admin: false,
        })
        .await
        .unwrap();
    ParticipationService::participate(&store, session.id, user.id)
        .await
        .unwrap();

    let updated = SessionService::update(
        &store,
        session.id,
        UpdateSession {
            name: "Renamed".to_string(),
            date: session.date,
            description: "New description".to_string(),
            teacher_id: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.id, session.id);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.teacher_id, None);
    assert_eq!(updated.users, vec![user.id]);
    assert_eq!(updated.created_at, session.created_at);
}

#[tokio::test]
async fn update_of_absent_session_is_not_found() {
    let store = MemoryStore::new();

    let err = SessionService::update(
        &store,
        999,
        UpdateSession {
            name: "Renamed".to_string(),
            date: Utc::now().naive_utc(),
            description: String::new(),
            teacher_id: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ServiceError::SessionNotFound(999)));
}

#[tokio::test]
async fn delete_is_unconditional() {
    let store = MemoryStore::new();
    let session = SessionService::create(&store, pilates("One")).await.unwrap();

    SessionService::delete(&store, session.id).await.unwrap();
    assert!(SessionService::get_by_id(&store, session.id)
        .await
        .unwrap()
        .is_none());

    // No existence pre-check: deleting again is still Ok.
    SessionService::delete(&store, session.id).await.unwrap();
}
