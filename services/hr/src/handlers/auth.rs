use std::net::SocketAddr;

use axum::{
    Json,
    extract::{ConnectInfo, State, rejection::JsonRejection},
    http::{HeaderMap, header},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::domain::types::REFRESH_TOKEN_TTL_DAYS;
use crate::error::HrServiceError;
use crate::handlers::MessageResponse;
use crate::handlers::account::AccountResponse;
use crate::state::AppState;
use crate::usecase::register::{RegisterInput, RegisterUseCase, VerifyEmailUseCase};
use crate::usecase::reset::{
    ForgotPasswordInput, ForgotPasswordUseCase, ResetPasswordInput, ResetPasswordUseCase,
    ValidateResetTokenUseCase,
};
use crate::usecase::token::{
    AuthenticateInput, AuthenticateUseCase, RefreshTokenUseCase, RevokeTokenUseCase,
};

/// Cookie carrying the opaque refresh token.
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

fn set_refresh_cookie(jar: CookieJar, value: String) -> CookieJar {
    let cookie = Cookie::build((REFRESH_TOKEN_COOKIE, value))
        .path("/accounts")
        .max_age(Duration::days(REFRESH_TOKEN_TTL_DAYS))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

fn origin_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

// ── POST /accounts/register ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub department: Option<String>,
}

pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, HrServiceError> {
    let usecase = RegisterUseCase {
        accounts: state.account_repo(),
        mailer: state.mailer(),
    };
    usecase
        .execute(RegisterInput {
            email: body.email,
            password: body.password,
            first_name: body.first_name,
            last_name: body.last_name,
            position: body.position,
            department: body.department,
            origin: origin_header(&headers),
        })
        .await?;
    Ok(Json(MessageResponse::new(
        "Registration successful, please check your email for verification instructions",
    )))
}

// ── POST /accounts/verify-email ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyEmailRequest {
    pub token: String,
}

pub async fn verify_email(
    State(state): State<AppState>,
    Json(body): Json<VerifyEmailRequest>,
) -> Result<Json<MessageResponse>, HrServiceError> {
    let usecase = VerifyEmailUseCase {
        accounts: state.account_repo(),
    };
    usecase.execute(&body.token).await?;
    Ok(Json(MessageResponse::new(
        "Verification successful, you can now login",
    )))
}

// ── POST /accounts/authenticate ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AuthenticateRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthenticateResponse {
    #[serde(flatten)]
    pub account: AccountResponse,
    pub jwt_token: String,
    pub refresh_token: String,
}

pub async fn authenticate(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    jar: CookieJar,
    Json(body): Json<AuthenticateRequest>,
) -> Result<(CookieJar, Json<AuthenticateResponse>), HrServiceError> {
    let usecase = AuthenticateUseCase {
        accounts: state.account_repo(),
        refresh_tokens: state.refresh_token_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(AuthenticateInput {
            email: body.email,
            password: body.password,
            ip: addr.ip().to_string(),
        })
        .await?;

    let jar = set_refresh_cookie(jar, out.refresh_token.token.clone());
    Ok((
        jar,
        Json(AuthenticateResponse {
            account: AccountResponse::from_account(out.account),
            jwt_token: out.access_token,
            refresh_token: out.refresh_token.token,
        }),
    ))
}

// ── POST /accounts/refresh-token ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct TokenRequest {
    pub token: Option<String>,
}

/// Token from the JSON body when one was sent, else from the cookie.
fn presented_token(
    body: Result<Json<TokenRequest>, JsonRejection>,
    jar: &CookieJar,
) -> Option<String> {
    body.ok()
        .and_then(|Json(b)| b.token)
        .or_else(|| jar.get(REFRESH_TOKEN_COOKIE).map(|c| c.value().to_owned()))
}

pub async fn refresh_token(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    jar: CookieJar,
    body: Result<Json<TokenRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<AuthenticateResponse>), HrServiceError> {
    let token = presented_token(body, &jar).ok_or(HrServiceError::TokenInvalid)?;

    let usecase = RefreshTokenUseCase {
        accounts: state.account_repo(),
        refresh_tokens: state.refresh_token_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase.execute(&token, &addr.ip().to_string()).await?;

    let jar = set_refresh_cookie(jar, out.refresh_token.token.clone());
    Ok((
        jar,
        Json(AuthenticateResponse {
            account: AccountResponse::from_account(out.account),
            jwt_token: out.access_token,
            refresh_token: out.refresh_token.token,
        }),
    ))
}

// ── POST /accounts/revoke-token ──────────────────────────────────────────────

pub async fn revoke_token(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    jar: CookieJar,
    body: Result<Json<TokenRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, HrServiceError> {
    let token = presented_token(body, &jar).ok_or(HrServiceError::TokenInvalid)?;

    let usecase = RevokeTokenUseCase {
        refresh_tokens: state.refresh_token_repo(),
    };
    usecase.execute(&token, &addr.ip().to_string()).await?;

    Ok(Json(MessageResponse::new("Token revoked")))
}

// ── POST /accounts/forgot-password ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

pub async fn forgot_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>, HrServiceError> {
    let usecase = ForgotPasswordUseCase {
        accounts: state.account_repo(),
        mailer: state.mailer(),
    };
    usecase
        .execute(ForgotPasswordInput {
            email: body.email,
            origin: origin_header(&headers),
        })
        .await?;
    Ok(Json(MessageResponse::new(
        "Please check your email for password reset instructions",
    )))
}

// ── POST /accounts/validate-reset-token ──────────────────────────────────────

#[derive(Deserialize)]
pub struct ValidateResetTokenRequest {
    pub token: String,
}

pub async fn validate_reset_token(
    State(state): State<AppState>,
    Json(body): Json<ValidateResetTokenRequest>,
) -> Result<Json<MessageResponse>, HrServiceError> {
    let usecase = ValidateResetTokenUseCase {
        accounts: state.account_repo(),
    };
    usecase.execute(&body.token).await?;
    Ok(Json(MessageResponse::new("Token is valid")))
}

// ── POST /accounts/reset-password ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

pub async fn reset_password(
    State(state): State<AppState>,
    Json(body): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, HrServiceError> {
    let usecase = ResetPasswordUseCase {
        accounts: state.account_repo(),
    };
    usecase
        .execute(ResetPasswordInput {
            token: body.token,
            password: body.password,
        })
        .await?;
    Ok(Json(MessageResponse::new(
        "Password reset successful, you can now login",
    )))
}
