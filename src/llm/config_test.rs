use std::sync::{Mutex, MutexGuard};

use super::*;

// Env vars are process-wide; serialize the tests that touch them.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Caller must hold `ENV_LOCK`.
unsafe fn clear_gemini_env() {
    unsafe {
        std::env::remove_var(API_KEY_VAR);
        std::env::remove_var("GEMINI_MODEL");
        std::env::remove_var("GEMINI_BASE_URL");
        std::env::remove_var("GEMINI_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("GEMINI_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = lock_env();
    unsafe {
        clear_gemini_env();
        std::env::set_var(API_KEY_VAR, "secret");
    }

    let cfg = GeminiConfig::from_env();
    assert_eq!(cfg.api_key.as_deref(), Some("secret"));
    assert_eq!(cfg.model, DEFAULT_MODEL);
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.timeouts, GeminiTimeouts::default());

    unsafe { clear_gemini_env() };
}

#[test]
fn from_env_missing_key_is_not_fatal() {
    let _guard = lock_env();
    unsafe { clear_gemini_env() };

    let cfg = GeminiConfig::from_env();
    assert!(cfg.api_key.is_none());
    assert_eq!(cfg.model, DEFAULT_MODEL);
}

#[test]
fn from_env_blank_key_counts_as_missing() {
    let _guard = lock_env();
    unsafe {
        clear_gemini_env();
        std::env::set_var(API_KEY_VAR, "   ");
    }

    assert!(GeminiConfig::from_env().api_key.is_none());

    unsafe { clear_gemini_env() };
}

#[test]
fn from_env_parses_overrides() {
    let _guard = lock_env();
    unsafe {
        clear_gemini_env();
        std::env::set_var(API_KEY_VAR, "k");
        std::env::set_var("GEMINI_MODEL", "gemini-1.5-pro");
        std::env::set_var("GEMINI_BASE_URL", "http://localhost:9000/");
        std::env::set_var("GEMINI_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("GEMINI_CONNECT_TIMEOUT_SECS", "7");
    }

    let cfg = GeminiConfig::from_env();
    assert_eq!(cfg.model, "gemini-1.5-pro");
    assert_eq!(cfg.base_url, "http://localhost:9000");
    assert_eq!(cfg.timeouts, GeminiTimeouts { request_secs: 42, connect_secs: 7 });

    unsafe { clear_gemini_env() };
}

#[test]
fn from_env_bad_timeout_uses_default() {
    let _guard = lock_env();
    unsafe {
        clear_gemini_env();
        std::env::set_var("GEMINI_REQUEST_TIMEOUT_SECS", "soon");
    }

    let cfg = GeminiConfig::from_env();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);

    unsafe { clear_gemini_env() };
}

#[test]
fn debug_redacts_api_key() {
    let cfg = GeminiConfig {
        api_key: Some("super-secret".into()),
        model: DEFAULT_MODEL.into(),
        base_url: DEFAULT_BASE_URL.into(),
        timeouts: GeminiTimeouts::default(),
    };
    let text = format!("{cfg:?}");
    assert!(!text.contains("super-secret"));
    assert!(text.contains("<redacted>"));
}
