//! The identity service contract and its REST implementation.

use crate::{backend::rest::RestBackend, error::Result};
use async_trait::async_trait;
use profile_hub::types::{AuthTokens, Email, Session, UserId};
use serde::Deserialize;
use serde_json::json;

/// Passwordless identity service: login links by email, sessions by token.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Ask the service to email a one-time login link.
    async fn request_login_link(&self, email: &Email) -> Result<()>;

    /// Exchange the one-time token from an emailed link for a session.
    async fn verify_login_link(&self, email: &Email, token: &str) -> Result<Session>;

    /// Restore a session from a stored refresh token.
    async fn fetch_session(&self, refresh_token: &str) -> Result<Session>;

    /// Invalidate the session behind the given tokens.
    async fn sign_out(&self, tokens: &AuthTokens) -> Result<()>;
}

/// Token grant returned by the identity endpoints.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    user: UserPayload,
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    id: UserId,
    email: Email,
}

impl From<TokenResponse> for Session {
    fn from(response: TokenResponse) -> Self {
        Session {
            user_id: response.user.id,
            email: response.user.email,
            tokens: AuthTokens {
                access_token: response.access_token,
                refresh_token: response.refresh_token,
            },
        }
    }
}

#[async_trait]
impl IdentityService for RestBackend {
    async fn request_login_link(&self, email: &Email) -> Result<()> {
        let response = self
            .post_auth("otp")?
            .json(&json!({ "email": email, "create_user": true }))
            .send()
            .await?;

        let _ = self.check(response).await?;
        Ok(())
    }

    async fn verify_login_link(&self, email: &Email, token: &str) -> Result<Session> {
        let response = self
            .post_auth("verify")?
            .json(&json!({ "type": "magiclink", "email": email, "token": token }))
            .send()
            .await?;

        let grant: TokenResponse = self.check(response).await?.json().await?;
        Ok(grant.into())
    }

    async fn fetch_session(&self, refresh_token: &str) -> Result<Session> {
        let response = self
            .post_auth("token")?
            .query(&[("grant_type", "refresh_token")])
            .json(&json!({ "refresh_token": refresh_token }))
            .send()
            .await?;

        let grant: TokenResponse = self.check(response).await?.json().await?;
        Ok(grant.into())
    }

    async fn sign_out(&self, tokens: &AuthTokens) -> Result<()> {
        let response = self
            .post_auth("logout")?
            .bearer_auth(&tokens.access_token)
            .send()
            .await?;

        let _ = self.check(response).await?;
        Ok(())
    }
}
