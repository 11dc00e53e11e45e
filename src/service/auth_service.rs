use std::time::{Duration, SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use sha2::{Digest, Sha256};

use crate::config::CATALOG_CONFIG;
use crate::model::error::auth_errors::LoginError;
use crate::model::response::SessionApi;
use crate::model::service::CheckSessionResult;

/// compares `passcode` with the configured one and issues a session token on a match.
///
/// There's no lockout or rate limiting, a wrong code just gets [`LoginError::BadPasscode`]
pub fn login(passcode: &str) -> Result<SessionApi, LoginError> {
    let auth = &CATALOG_CONFIG.auth;
    if passcode != auth.passcode {
        log::warn!("Rejected admin login with a bad passcode");
        return Err(LoginError::BadPasscode);
    }
    let expires_at = seconds_since_epoch(SystemTime::now() + auth.session_ttl());
    log::info!("Issued admin session expiring at {expires_at}");
    Ok(SessionApi {
        token: issue_token(expires_at, &auth.token_secret),
        expires_at,
    })
}

/// checks a token previously handed out by [`login`]
pub fn check_session(token: &str) -> CheckSessionResult {
    verify_token(
        token,
        &CATALOG_CONFIG.auth.token_secret,
        seconds_since_epoch(SystemTime::now()),
    )
}

/// builds `base64url(expiry).sha256hex(secret:expiry)`
pub fn issue_token(expires_at: u64, secret: &str) -> String {
    let payload = expires_at.to_string();
    format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(payload.as_bytes()),
        sign(&payload, secret)
    )
}

pub fn verify_token(token: &str, secret: &str, now: u64) -> CheckSessionResult {
    let Some((encoded, signature)) = token.split_once('.') else {
        return CheckSessionResult::Invalid;
    };
    let payload = match URL_SAFE_NO_PAD
        .decode(encoded)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
    {
        Some(payload) => payload,
        None => return CheckSessionResult::Invalid,
    };
    if sign(&payload, secret) != signature {
        return CheckSessionResult::Invalid;
    }
    match payload.parse::<u64>() {
        Ok(expires_at) if expires_at > now => CheckSessionResult::Valid,
        Ok(_) => CheckSessionResult::Expired,
        Err(_) => CheckSessionResult::Invalid,
    }
}

fn sign(payload: &str, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(b":");
    hasher.update(payload.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn seconds_since_epoch(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_secs()
}
