use interview_prep_db::models::user::CreateUser;
use interview_prep_db::repositories::UserRepo;
use sqlx::PgPool;

fn new_user(email: &str, phone: &str) -> CreateUser {
    CreateUser {
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        phone: phone.to_string(),
        role: "ADMIN".to_string(),
    }
}

/// Connect, migrate, and confirm the health check passes.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bootstrap(pool: PgPool) {
    interview_prep_db::health_check(&pool).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_lookup_by_email_and_id(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("grace@navy.mil", "100"))
        .await
        .unwrap();

    let by_email = UserRepo::find_by_email(&pool, "grace@navy.mil")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, created.id);
    assert_eq!(by_email.role, "ADMIN");

    let by_id = UserRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "grace@navy.mil");

    assert!(UserRepo::find_by_email(&pool, "nobody@navy.mil")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_email_or_phone_taken(pool: PgPool) {
    UserRepo::create(&pool, &new_user("grace@navy.mil", "100"))
        .await
        .unwrap();

    assert!(UserRepo::email_or_phone_taken(&pool, "grace@navy.mil", "999")
        .await
        .unwrap());
    assert!(UserRepo::email_or_phone_taken(&pool, "other@navy.mil", "100")
        .await
        .unwrap());
    assert!(!UserRepo::email_or_phone_taken(&pool, "other@navy.mil", "999")
        .await
        .unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_hits_unique_constraint(pool: PgPool) {
    UserRepo::create(&pool, &new_user("grace@navy.mil", "100"))
        .await
        .unwrap();

    let err = UserRepo::create(&pool, &new_user("grace@navy.mil", "200"))
        .await
        .unwrap_err();
    assert!(interview_prep_db::is_unique_violation(&err, "uq_users_email"));
    assert!(!interview_prep_db::is_unique_violation(&err, "uq_users_phone"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_role_rejected_by_check(pool: PgPool) {
    let mut input = new_user("grace@navy.mil", "100");
    input.role = "ROOT".to_string();
    assert!(UserRepo::create(&pool, &input).await.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_returns_all_users(pool: PgPool) {
    UserRepo::create(&pool, &new_user("a@x.io", "1")).await.unwrap();
    UserRepo::create(&pool, &new_user("b@x.io", "2")).await.unwrap();

    let users = UserRepo::list(&pool).await.unwrap();
    assert_eq!(users.len(), 2);
}
