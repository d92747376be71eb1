use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::env;

use crate::domain::value_objects::UserId;

const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,      // user id
    username: String, // display name, avoids a DB hit per request
    exp: usize,       // expiration time
    iat: usize,       // issued at
}

/// The authenticated caller, resolved once per request.
///
/// Handlers receive this as an explicit `Option<CurrentUser>` extension
/// rather than reading any request-global state.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: UserId,
    pub username: String,
}

/// Resolve the bearer token (if any) into `Option<CurrentUser>`.
///
/// Anonymous and invalid-token requests both resolve to `None`; individual
/// handlers decide whether that is acceptable.
pub async fn auth_middleware(headers: HeaderMap, mut request: Request, next: Next) -> Response {
    let user = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .and_then(|token| decode_token(token));

    request.extensions_mut().insert::<Option<CurrentUser>>(user);
    next.run(request).await
}

/// Mint a bearer token for a freshly authenticated user
pub fn issue_token(user_id: &UserId, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        iat: now as usize,
        exp: (now + TOKEN_TTL_SECS) as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_secret().as_bytes()),
    )
}

fn decode_token(token: &str) -> Option<CurrentUser> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret().as_bytes()),
        &validation,
    )
    .ok()?;

    let id = data.claims.sub.parse::<UserId>().ok()?;
    Some(CurrentUser {
        id,
        username: data.claims.username,
    })
}

fn jwt_secret() -> String {
    env::var("JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-in-prod".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_then_decode_round_trip() {
        let user_id = UserId::new();
        let token = issue_token(&user_id, "alice").unwrap();

        let current = decode_token(&token).unwrap();
        assert_eq!(current.id, user_id);
        assert_eq!(current.username, "alice");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_token("not.a.jwt").is_none());
    }

    #[test]
    fn test_decode_rejects_tampered_token() {
        let token = issue_token(&UserId::new(), "alice").unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        tampered.push('x');

        assert!(decode_token(&tampered).is_none());
    }
}
