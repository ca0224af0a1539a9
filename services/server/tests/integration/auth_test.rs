use vaxcamp_auth::password::{hash_secret, verify_secret};
use vaxcamp_auth::token::validate_access_token;
use vaxcamp_domain::user::UserRole;
use vaxcamp_server::error::ApiError;
use vaxcamp_server::usecase::auth::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};

use crate::helpers::{MockUserRepo, TEST_JWT_SECRET, test_user};

fn register_input(email: &str) -> RegisterInput {
    RegisterInput {
        name: "Asha Rao".to_owned(),
        email: email.to_owned(),
        password: "correct-horse-battery".to_owned(),
        phone_number: None,
        external_id: None,
        address: None,
    }
}

// ── RegisterUseCase ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_user_and_issue_validating_token() {
    let repo = MockUserRepo::empty();
    let users = repo.users_handle();
    let usecase = RegisterUseCase {
        users: repo,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let output = usecase
        .execute(register_input("  Asha@Example.COM "))
        .await
        .unwrap();

    assert_eq!(output.user.email, "asha@example.com");
    assert_eq!(output.user.role, UserRole::Beneficiary);

    let info = validate_access_token(&output.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, output.user.id);
    assert_eq!(info.user_role, UserRole::Beneficiary.as_u8());
    assert_eq!(info.access_token_exp, output.access_token_exp);

    let users = users.lock().unwrap();
    assert_eq!(users.len(), 1);
    assert!(verify_secret("correct-horse-battery", &users[0].password_hash));
}

#[tokio::test]
async fn should_reject_duplicate_email_registration() {
    let existing = test_user(UserRole::Beneficiary);
    let email = existing.email.clone();
    let original_name = existing.name.clone();
    let repo = MockUserRepo::new(vec![existing]);
    let users = repo.users_handle();
    let usecase = RegisterUseCase {
        users: repo,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase.execute(register_input(&email.to_uppercase())).await;
    assert!(
        matches!(result, Err(ApiError::EmailTaken)),
        "expected EmailTaken, got {result:?}"
    );

    let users = users.lock().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, original_name);
}

#[tokio::test]
async fn should_reject_duplicate_external_id() {
    let mut existing = test_user(UserRole::Beneficiary);
    existing.external_id = Some("EXT-042".to_owned());
    let usecase = RegisterUseCase {
        users: MockUserRepo::new(vec![existing]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let mut input = register_input("new-person@example.com");
    input.external_id = Some("EXT-042".to_owned());

    let result = usecase.execute(input).await;
    assert!(
        matches!(result, Err(ApiError::ExternalIdTaken)),
        "expected ExternalIdTaken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_short_password() {
    let usecase = RegisterUseCase {
        users: MockUserRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let mut input = register_input("asha@example.com");
    input.password = "short".to_owned();

    let result = usecase.execute(input).await;
    assert!(
        matches!(result, Err(ApiError::Validation(_))),
        "expected Validation, got {result:?}"
    );
}

// ── LoginUseCase ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_login_with_correct_password() {
    let mut user = test_user(UserRole::Organizer);
    user.password_hash = hash_secret("correct-horse-battery").unwrap();
    let usecase = LoginUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let output = usecase
        .execute(LoginInput {
            email: user.email.clone(),
            password: "correct-horse-battery".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(output.user.id, user.id);

    let info = validate_access_token(&output.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user.id);
    assert_eq!(info.user_role, UserRole::Organizer.as_u8());
}

#[tokio::test]
async fn should_reject_login_with_wrong_password() {
    let mut user = test_user(UserRole::Beneficiary);
    user.password_hash = hash_secret("correct-horse-battery").unwrap();
    let email = user.email.clone();
    let usecase = LoginUseCase {
        users: MockUserRepo::new(vec![user]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(LoginInput {
            email,
            password: "wrong-password".to_owned(),
        })
        .await;
    assert!(
        matches!(result, Err(ApiError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_login_for_unknown_email() {
    let usecase = LoginUseCase {
        users: MockUserRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(LoginInput {
            email: "nobody@example.com".to_owned(),
            password: "whatever-password".to_owned(),
        })
        .await;
    assert!(
        matches!(result, Err(ApiError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}
