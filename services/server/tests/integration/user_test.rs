use uuid::Uuid;

use vaxcamp_auth::password::verify_secret;
use vaxcamp_domain::pagination::PageRequest;
use vaxcamp_domain::user::UserRole;
use vaxcamp_server::error::ApiError;
use vaxcamp_server::usecase::user::{
    GetProfileUseCase, ListUsersByRoleUseCase, UpdateProfileInput, UpdateProfileUseCase,
    UpdateRoleUseCase,
};

use crate::helpers::{MockUserRepo, test_user};

// ── GetProfileUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_profile_for_existing_user() {
    let user = test_user(UserRole::Beneficiary);
    let usecase = GetProfileUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
    };

    let profile = usecase.execute(user.id).await.unwrap();
    assert_eq!(profile.id, user.id);
    assert_eq!(profile.email, user.email);
}

#[tokio::test]
async fn should_error_when_profile_user_missing() {
    let usecase = GetProfileUseCase {
        repo: MockUserRepo::empty(),
    };

    let result = usecase.execute(Uuid::new_v4()).await;
    assert!(
        matches!(result, Err(ApiError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

// ── UpdateProfileUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_update_profile_fields() {
    let user = test_user(UserRole::Beneficiary);
    let repo = MockUserRepo::new(vec![user.clone()]);
    let users = repo.users_handle();
    let usecase = UpdateProfileUseCase { repo };

    usecase
        .execute(
            user.id,
            UpdateProfileInput {
                name: Some("Asha R.".to_owned()),
                phone_number: Some("+91-98000-00000".to_owned()),
                address: Some("14 Lake Road".to_owned()),
                password: Some("a-new-password".to_owned()),
            },
        )
        .await
        .unwrap();

    let users = users.lock().unwrap();
    assert_eq!(users[0].name, "Asha R.");
    assert_eq!(users[0].phone_number.as_deref(), Some("+91-98000-00000"));
    assert_eq!(users[0].address.as_deref(), Some("14 Lake Road"));
    assert!(verify_secret("a-new-password", &users[0].password_hash));
}

#[tokio::test]
async fn should_reject_empty_profile_update() {
    let user = test_user(UserRole::Beneficiary);
    let usecase = UpdateProfileUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
    };

    let result = usecase
        .execute(
            user.id,
            UpdateProfileInput {
                name: None,
                phone_number: None,
                address: None,
                password: None,
            },
        )
        .await;
    assert!(
        matches!(result, Err(ApiError::Validation(_))),
        "expected Validation, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_short_password_on_profile_update() {
    let user = test_user(UserRole::Beneficiary);
    let usecase = UpdateProfileUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
    };

    let result = usecase
        .execute(
            user.id,
            UpdateProfileInput {
                name: None,
                phone_number: None,
                address: None,
                password: Some("1234567".to_owned()),
            },
        )
        .await;
    assert!(
        matches!(result, Err(ApiError::Validation(_))),
        "expected Validation, got {result:?}"
    );
}

// ── UpdateRoleUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_change_role() {
    let user = test_user(UserRole::Beneficiary);
    let repo = MockUserRepo::new(vec![user.clone()]);
    let users = repo.users_handle();
    let usecase = UpdateRoleUseCase { repo };

    usecase.execute(user.id, UserRole::Organizer).await.unwrap();

    let users = users.lock().unwrap();
    assert_eq!(users[0].role, UserRole::Organizer);
}

#[tokio::test]
async fn should_error_when_role_target_missing() {
    let usecase = UpdateRoleUseCase {
        repo: MockUserRepo::empty(),
    };

    let result = usecase
        .execute(Uuid::new_v4(), UserRole::Vaccinator)
        .await;
    assert!(
        matches!(result, Err(ApiError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

// ── ListUsersByRoleUseCase ───────────────────────────────────────────────────

#[tokio::test]
async fn should_list_only_users_with_requested_role() {
    let organizer = test_user(UserRole::Organizer);
    let usecase = ListUsersByRoleUseCase {
        repo: MockUserRepo::new(vec![
            test_user(UserRole::Beneficiary),
            organizer.clone(),
            test_user(UserRole::Beneficiary),
        ]),
    };

    let listed = usecase
        .execute(UserRole::Organizer, PageRequest::default())
        .await
        .unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, organizer.id);
}
