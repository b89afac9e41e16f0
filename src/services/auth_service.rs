use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use password_hash::rand_core::OsRng;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait,
    QueryFilter, Set,
};
use uuid::Uuid;

use crate::{
    audit,
    config::AppConfig,
    dto::auth::{
        ChangePasswordRequest, Claims, LoginRequest, LoginResponse, RegisterRequest,
        UpdateProfileRequest,
    },
    entity::users::{ActiveModel as UserActive, Column as UserCol, Entity as Users},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{Role, User},
    response::{ApiResponse, Meta},
    state::AppState,
    validation::{validate_email, validate_password, validate_phone},
};

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

pub fn issue_token(config: &AppConfig, user_id: Uuid, role: Role) -> AppResult<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(config.jwt_ttl_hours))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: user_id.to_string(),
        role: role.as_str().to_string(),
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub phone: String,
    pub address: String,
    pub avatar_url: String,
}

/// Shared by self-registration and admin-created accounts.
pub async fn create_account<C: ConnectionTrait>(conn: &C, account: NewAccount) -> AppResult<User> {
    let email = account.email.trim().to_lowercase();
    validate_email(&email)?;
    validate_password(&account.password)?;
    validate_phone(account.phone.trim())?;

    let exist = Users::find()
        .filter(UserCol::Email.eq(email.as_str()))
        .one(conn)
        .await?;
    if exist.is_some() {
        return Err(AppError::BadRequest("Email is already taken".to_string()));
    }

    let user = UserActive {
        id: Set(Uuid::new_v4()),
        email: Set(email),
        password_hash: Set(hash_password(&account.password)?),
        role: Set(account.role.as_str().to_string()),
        phone: Set(account.phone.trim().to_string()),
        address: Set(account.address.trim().to_string()),
        avatar_url: Set(account.avatar_url),
        created_at: NotSet,
    }
    .insert(conn)
    .await?;

    Ok(User::from(user))
}

pub async fn register_user(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<ApiResponse<User>> {
    let RegisterRequest {
        email,
        password,
        phone,
        address,
    } = payload;
    let user = create_account(
        &state.orm,
        NewAccount {
            email,
            password,
            role: Role::Client,
            phone,
            address,
            avatar_url: String::new(),
        },
    )
    .await?;

    audit::record(
        &state.orm,
        Some(user.id),
        "user_register",
        "users",
        serde_json::json!({ "user_id": user.id }),
    )
    .await;
    tracing::info!(user_id = %user.id, "user registered");

    Ok(ApiResponse::success("User created", user, Some(Meta::empty())))
}

pub async fn login_user(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<ApiResponse<LoginResponse>> {
    let LoginRequest { email, password } = payload;
    let email = email.trim().to_lowercase();
    let user = Users::find()
        .filter(UserCol::Email.eq(email.as_str()))
        .one(&state.orm)
        .await?;

    let user = match user {
        Some(u) => u,
        None => return Err(AppError::BadRequest("Invalid email or password".into())),
    };

    if !verify_password(&password, &user.password_hash)? {
        return Err(AppError::BadRequest("Invalid email or password".into()));
    }

    let role = Role::from_label(&user.role);
    let token = issue_token(&state.config, user.id, role)?;

    audit::record(
        &state.orm,
        Some(user.id),
        "user_login",
        "users",
        serde_json::json!({ "user_id": user.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Logged in",
        LoginResponse {
            token: format!("Bearer {}", token),
            user_id: user.id,
            role,
        },
        Some(Meta::empty()),
    ))
}

pub async fn current_user(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<User>> {
    let found = Users::find_by_id(user.user_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Profile", User::from(found), None))
}

pub async fn update_profile(
    state: &AppState,
    user: &AuthUser,
    payload: UpdateProfileRequest,
) -> AppResult<ApiResponse<User>> {
    let existing = Users::find_by_id(user.user_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: UserActive = existing.into();
    if let Some(phone) = payload.phone {
        let phone = phone.trim().to_string();
        validate_phone(&phone)?;
        active.phone = Set(phone);
    }
    if let Some(address) = payload.address {
        active.address = Set(address.trim().to_string());
    }
    if let Some(avatar_url) = payload.avatar_url {
        active.avatar_url = Set(avatar_url);
    }
    let updated = active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        Some(user.user_id),
        "profile_update",
        "users",
        serde_json::json!({ "user_id": user.user_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Profile updated",
        User::from(updated),
        Some(Meta::empty()),
    ))
}

pub async fn change_password(
    state: &AppState,
    user: &AuthUser,
    payload: ChangePasswordRequest,
) -> AppResult<ApiResponse<serde_json::Value>> {
    validate_password(&payload.new_password)?;

    let existing = Users::find_by_id(user.user_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    if !verify_password(&payload.current_password, &existing.password_hash)? {
        return Err(AppError::BadRequest("Current password is incorrect".into()));
    }
    if payload.current_password == payload.new_password {
        return Err(AppError::BadRequest(
            "New password must differ from the current one".into(),
        ));
    }

    let mut active: UserActive = existing.into();
    active.password_hash = Set(hash_password(&payload.new_password)?);
    active.update(&state.orm).await?;

    audit::record(
        &state.orm,
        Some(user.user_id),
        "password_change",
        "users",
        serde_json::json!({ "user_id": user.user_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Password changed",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
