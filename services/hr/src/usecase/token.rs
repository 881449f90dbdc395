use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::RngExt;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::domain::repository::{AccountRepository, RefreshTokenRepository};
use crate::domain::types::{
    ACCESS_TOKEN_TTL_SECS, Account, REFRESH_TOKEN_TTL_DAYS, RefreshToken, TOKEN_LEN,
    normalize_email,
};
use crate::error::HrServiceError;
use crate::usecase::password::verify_password;

/// JWT claims carried by short-lived access tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub sub: String,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

pub fn issue_access_token(
    account: &Account,
    secret: &str,
) -> Result<(String, u64), HrServiceError> {
    let exp = now_secs() + ACCESS_TOKEN_TTL_SECS;
    let claims = AccessTokenClaims {
        sub: account.id.to_string(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| HrServiceError::Internal(e.into()))?;
    Ok((token, exp))
}

/// Validate an access token's signature and expiry and return its claims.
pub fn decode_access_token(token: &str, secret: &str) -> Result<AccessTokenClaims, HrServiceError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<AccessTokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| HrServiceError::TokenInvalid)?;

    Ok(data.claims)
}

const CHARSET: &[u8] = b"0123456789abcdef";

/// Opaque token for refresh, verification and reset flows: 80 hex chars.
pub fn random_token_string() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

pub fn new_refresh_token(account_id: Uuid, ip: &str) -> RefreshToken {
    let now = Utc::now();
    RefreshToken {
        id: Uuid::new_v4(),
        account_id,
        token: random_token_string(),
        expires_at: now + Duration::days(REFRESH_TOKEN_TTL_DAYS),
        created_by_ip: ip.to_string(),
        revoked_at: None,
        revoked_by_ip: None,
        replaced_by_token: None,
        created_at: now,
    }
}

// ── Authenticate (login) ─────────────────────────────────────────────────────

pub struct AuthenticateInput {
    pub email: String,
    pub password: String,
    pub ip: String,
}

#[derive(Debug)]
pub struct AuthenticatedTokens {
    pub account: Account,
    pub access_token: String,
    pub access_token_exp: u64,
    pub refresh_token: RefreshToken,
}

pub struct AuthenticateUseCase<A: AccountRepository, R: RefreshTokenRepository> {
    pub accounts: A,
    pub refresh_tokens: R,
    pub jwt_secret: String,
}

impl<A: AccountRepository, R: RefreshTokenRepository> AuthenticateUseCase<A, R> {
    pub async fn execute(
        &self,
        input: AuthenticateInput,
    ) -> Result<AuthenticatedTokens, HrServiceError> {
        let email = normalize_email(&input.email);

        // Unknown email, unverified account and wrong password all collapse
        // into one error.
        let account = self
            .accounts
            .find_by_email(&email)
            .await?
            .filter(|account| account.is_verified())
            .filter(|account| verify_password(&input.password, &account.password_hash))
            .ok_or(HrServiceError::InvalidCredentials)?;

        let (access_token, access_token_exp) = issue_access_token(&account, &self.jwt_secret)?;

        let refresh_token = new_refresh_token(account.id, &input.ip);
        self.refresh_tokens.create(&refresh_token).await?;

        Ok(AuthenticatedTokens {
            account,
            access_token,
            access_token_exp,
            refresh_token,
        })
    }
}

// ── Refresh (rotate) ─────────────────────────────────────────────────────────

pub struct RefreshTokenUseCase<A: AccountRepository, R: RefreshTokenRepository> {
    pub accounts: A,
    pub refresh_tokens: R,
    pub jwt_secret: String,
}

impl<A: AccountRepository, R: RefreshTokenRepository> RefreshTokenUseCase<A, R> {
    pub async fn execute(
        &self,
        token_value: &str,
        ip: &str,
    ) -> Result<AuthenticatedTokens, HrServiceError> {
        let presented = self
            .refresh_tokens
            .find_by_token(token_value)
            .await?
            .ok_or(HrServiceError::TokenInvalid)?;

        // Reuse of a revoked token means the chain may be stolen; revoke
        // every descendant before rejecting.
        if presented.revoked_at.is_some() {
            self.revoke_descendants(&presented, ip).await?;
            return Err(HrServiceError::TokenInvalid);
        }

        if presented.is_expired() {
            return Err(HrServiceError::TokenInvalid);
        }

        let account = self
            .accounts
            .find_by_id(presented.account_id)
            .await?
            .ok_or(HrServiceError::TokenInvalid)?;

        let replacement = new_refresh_token(account.id, ip);

        let mut presented = presented;
        presented.revoked_at = Some(Utc::now());
        presented.revoked_by_ip = Some(ip.to_string());
        presented.replaced_by_token = Some(replacement.token.clone());
        self.refresh_tokens.update(&presented).await?;
        self.refresh_tokens.create(&replacement).await?;

        let (access_token, access_token_exp) = issue_access_token(&account, &self.jwt_secret)?;

        Ok(AuthenticatedTokens {
            account,
            access_token,
            access_token_exp,
            refresh_token: replacement,
        })
    }

    async fn revoke_descendants(
        &self,
        from: &RefreshToken,
        ip: &str,
    ) -> Result<(), HrServiceError> {
        let mut next = from.replaced_by_token.clone();
        while let Some(token_value) = next {
            let Some(mut descendant) = self.refresh_tokens.find_by_token(&token_value).await?
            else {
                break;
            };
            next = descendant.replaced_by_token.clone();
            if descendant.revoked_at.is_some() {
                continue;
            }
            descendant.revoked_at = Some(Utc::now());
            descendant.revoked_by_ip = Some(ip.to_string());
            self.refresh_tokens.update(&descendant).await?;
        }
        Ok(())
    }
}

// ── Revoke ───────────────────────────────────────────────────────────────────

pub struct RevokeTokenUseCase<R: RefreshTokenRepository> {
    pub refresh_tokens: R,
}

impl<R: RefreshTokenRepository> RevokeTokenUseCase<R> {
    pub async fn execute(&self, token_value: &str, ip: &str) -> Result<(), HrServiceError> {
        let mut token = self
            .refresh_tokens
            .find_by_token(token_value)
            .await?
            .filter(|token| token.is_active())
            .ok_or(HrServiceError::TokenInvalid)?;

        token.revoked_at = Some(Utc::now());
        token.revoked_by_ip = Some(ip.to_string());
        self.refresh_tokens.update(&token).await?;

        Ok(())
    }
}
