//! Session Store
//!
//! Persists the signed-in operator and their tokens across page loads.

use tracing::{debug, info, warn};

use crate::error::{AuthError, CredentialKind, SessionRestoreError};
use crate::gateway::{AuthClient, HttpTransport};
use crate::models::{Credentials, Session, SessionTokens, User};
use crate::storage::{KeyValueStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, SESSION_KEYS, USER_DATA_KEY};

/// Session lifecycle over durable storage
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Authenticate and persist the new session.
    ///
    /// On any failure the previously stored session is left as it was.
    pub async fn login<T: HttpTransport>(
        &self,
        client: &AuthClient<T>,
        credentials: &Credentials,
    ) -> Result<Session, AuthError> {
        credentials.validate()?;
        let response = client.login(credentials).await?;

        let session = Session {
            user: response.user_info,
            tokens: SessionTokens {
                access_token: response.access_token,
                refresh_token: Some(response.refresh_token),
            },
        };
        self.persist(&session)?;
        info!(username = %session.user.username, role = %session.user.role, "signed in");
        Ok(session)
    }

    /// Load the stored session, clearing storage when it is incomplete or
    /// corrupt.
    pub fn restore(&self) -> Option<Session> {
        match self.read_session() {
            Ok(session) => {
                debug!(username = %session.user.username, "session restored");
                Some(session)
            }
            Err(SessionRestoreError::MissingToken) if self.is_cleared() => None,
            Err(err) => {
                warn!(error = %err, "discarding stored session");
                self.clear();
                None
            }
        }
    }

    /// Forget the session. Safe to call repeatedly.
    pub fn logout(&self) {
        self.clear();
        info!("signed out");
    }

    /// The stored bearer token for authenticated API reads.
    pub fn access_token(&self) -> Result<String, AuthError> {
        self.storage
            .get(ACCESS_TOKEN_KEY)
            .ok_or(AuthError::MissingCredential(CredentialKind::AccessToken))
    }

    /// Ask the API who the stored access token belongs to and refresh the
    /// stored snapshot.
    ///
    /// Fails with [`AuthError::SessionEnded`] and writes nothing if the
    /// session was signed out or replaced while the request was pending.
    pub async fn fetch_current_user<T: HttpTransport>(&self, client: &AuthClient<T>) -> Result<User, AuthError> {
        let token = self.access_token()?;

        let user = client.fetch_current_user(&token).await?;
        self.ensure_unchanged(ACCESS_TOKEN_KEY, &token)?;
        self.write_snapshot(&user)?;
        Ok(user)
    }

    /// Exchange the stored refresh token for a new pair and store it.
    pub async fn refresh<T: HttpTransport>(&self, client: &AuthClient<T>) -> Result<SessionTokens, AuthError> {
        let refresh_token = self
            .storage
            .get(REFRESH_TOKEN_KEY)
            .ok_or(AuthError::MissingCredential(CredentialKind::RefreshToken))?;

        let pair = client.refresh(&refresh_token).await?;
        self.ensure_unchanged(REFRESH_TOKEN_KEY, &refresh_token)?;
        let tokens = SessionTokens {
            access_token: pair.access_token,
            refresh_token: Some(pair.refresh_token.unwrap_or(refresh_token)),
        };
        self.write_tokens(&tokens)?;
        debug!("tokens refreshed");
        Ok(tokens)
    }

    /// Demo shortcut: sign in as a fixed persona without the API.
    #[cfg(feature = "direct-access")]
    pub fn direct_access(&self, role: crate::models::Role) -> Result<Session, AuthError> {
        use crate::models::{PermissionSet, Role};

        let (id, username, full_name, permissions) = match role {
            Role::SuperAdmin => (
                "direct-superadmin",
                "demo_superadmin",
                "Demo Super Administrator",
                PermissionSet::new(["*", "casino_floor_access"]),
            ),
            _ => (
                "direct-manager",
                "demo_manager",
                "Demo Casino Manager",
                PermissionSet::new([
                    "members:read",
                    "members:write",
                    "gaming:read",
                    "gaming:write",
                    "reports:read",
                    "casino_floor_access",
                ]),
            ),
        };

        let session = Session {
            user: User {
                id: id.to_string(),
                username: username.to_string(),
                full_name: full_name.to_string(),
                role,
                permissions,
            },
            tokens: SessionTokens {
                access_token: format!("{id}-token"),
                refresh_token: None,
            },
        };
        self.persist(&session)?;
        warn!(username = %session.user.username, "direct access session created");
        Ok(session)
    }

    fn read_session(&self) -> Result<Session, SessionRestoreError> {
        let access_token = self.storage.get(ACCESS_TOKEN_KEY).ok_or(SessionRestoreError::MissingToken)?;
        let snapshot = self.storage.get(USER_DATA_KEY).ok_or(SessionRestoreError::MissingSnapshot)?;
        let user: User = serde_json::from_str(&snapshot)?;

        Ok(Session {
            user,
            tokens: SessionTokens {
                access_token,
                refresh_token: self.storage.get(REFRESH_TOKEN_KEY),
            },
        })
    }

    /// `key` still holds the credential a pending request was sent with.
    fn ensure_unchanged(&self, key: &str, sent: &str) -> Result<(), AuthError> {
        if self.storage.get(key).as_deref() == Some(sent) {
            Ok(())
        } else {
            debug!(key, "session changed during request; discarding response");
            Err(AuthError::SessionEnded)
        }
    }

    /// Write every session key, or put the previous values back.
    fn persist(&self, session: &Session) -> Result<(), AuthError> {
        let previous = SESSION_KEYS.map(|key| (key, self.storage.get(key)));

        let result = self
            .write_tokens(&session.tokens)
            .and_then(|()| self.write_snapshot(&session.user));
        if let Err(err) = &result {
            warn!(error = %err, "could not persist session; restoring previous one");
            for (key, value) in previous {
                match value {
                    Some(value) => {
                        if let Err(err) = self.storage.set(key, &value) {
                            warn!(key, error = %err, "could not restore session key");
                        }
                    }
                    None => self.storage.remove(key),
                }
            }
        }
        result
    }

    fn write_tokens(&self, tokens: &SessionTokens) -> Result<(), AuthError> {
        self.storage.set(ACCESS_TOKEN_KEY, &tokens.access_token)?;
        match &tokens.refresh_token {
            Some(refresh_token) => self.storage.set(REFRESH_TOKEN_KEY, refresh_token)?,
            None => self.storage.remove(REFRESH_TOKEN_KEY),
        }
        Ok(())
    }

    fn write_snapshot(&self, user: &User) -> Result<(), AuthError> {
        let snapshot = serde_json::to_string(user).map_err(|e| AuthError::Decode(e.to_string()))?;
        self.storage.set(USER_DATA_KEY, &snapshot)?;
        Ok(())
    }

    fn is_cleared(&self) -> bool {
        SESSION_KEYS.iter().all(|key| self.storage.get(key).is_none())
    }

    fn clear(&self) {
        for key in SESSION_KEYS {
            self.storage.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::testing::{client, client_with, ScriptedTransport};
    use crate::models::Role;
    use crate::navigation::{catalog, filter_navigation};
    use crate::error::StorageError;
    use crate::gateway::{ApiRequest, ApiResponse};
    use crate::storage::MemoryStore;
    use async_trait::async_trait;

    const SUPERADMIN_LOGIN: &str = r#"{
        "access_token": "a",
        "refresh_token": "r",
        "user_info": {"id": "1", "username": "superadmin", "full_name": "Super Administrator",
                      "role": "SuperAdmin", "permissions": ["*"]}
    }"#;

    fn stored_session(storage: &MemoryStore) {
        storage.set(ACCESS_TOKEN_KEY, "old-access").unwrap();
        storage.set(REFRESH_TOKEN_KEY, "old-refresh").unwrap();
        storage
            .set(
                USER_DATA_KEY,
                r#"{"id":"9","username":"manager","full_name":"Casino Manager","role":"GeneralAdmin","permissions":["reports:read"]}"#,
            )
            .unwrap();
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let storage = MemoryStore::new();
        let sessions = SessionStore::new(storage.clone());
        let api = client(ScriptedTransport::default().respond(200, SUPERADMIN_LOGIN));

        let session = sessions
            .login(&api, &Credentials::new("superadmin", "admin123"))
            .await
            .expect("login should succeed");

        assert_eq!(session.tokens.access_token, "a");
        assert_eq!(storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("a"));
        assert_eq!(storage.get(REFRESH_TOKEN_KEY).as_deref(), Some("r"));
        assert!(storage.contains(USER_DATA_KEY));

        let full = catalog();
        assert_eq!(filter_navigation(Some(&session.user), &full), full);
    }

    #[tokio::test]
    async fn test_failed_login_keeps_previous_session() {
        let storage = MemoryStore::new();
        stored_session(&storage);
        let sessions = SessionStore::new(storage.clone());
        let api = client(ScriptedTransport::default().respond(401, r#"{"detail":"Invalid credentials"}"#));

        let err = sessions
            .login(&api, &Credentials::new("superadmin", "nope"))
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Invalid credentials");
        assert_eq!(storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("old-access"));
        assert_eq!(storage.get(REFRESH_TOKEN_KEY).as_deref(), Some("old-refresh"));
        assert_eq!(sessions.restore().unwrap().user.username, "manager");
    }

    #[tokio::test]
    async fn test_login_validation_skips_network() {
        let transport = ScriptedTransport::default();
        let api = client(transport.clone());
        let sessions = SessionStore::new(MemoryStore::new());

        let err = sessions.login(&api, &Credentials::new("", "")).await.unwrap_err();
        assert!(matches!(err, AuthError::Invalid(_)));
        assert_eq!(transport.sent_count(), 0);
    }

    #[test]
    fn test_restore_round_trip() {
        let storage = MemoryStore::new();
        stored_session(&storage);
        let session = SessionStore::new(storage).restore().expect("session");
        assert_eq!(session.user.role, Role::GeneralAdmin);
        assert_eq!(session.tokens.refresh_token.as_deref(), Some("old-refresh"));
    }

    #[test]
    fn test_restore_corrupt_snapshot_clears_everything() {
        let storage = MemoryStore::new();
        stored_session(&storage);
        storage.set(USER_DATA_KEY, "{not json").unwrap();

        assert!(SessionStore::new(storage.clone()).restore().is_none());
        for key in SESSION_KEYS {
            assert!(!storage.contains(key), "{key} left behind");
        }
    }

    #[test]
    fn test_restore_partial_session_clears_everything() {
        let storage = MemoryStore::new();
        storage.set(REFRESH_TOKEN_KEY, "r").unwrap();
        storage.set(USER_DATA_KEY, "{}").unwrap();

        assert!(SessionStore::new(storage.clone()).restore().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_restore_leaves_theme_alone() {
        let storage = MemoryStore::new();
        storage.set(crate::storage::THEME_KEY, "light").unwrap();
        storage.set(ACCESS_TOKEN_KEY, "a").unwrap();

        assert!(SessionStore::new(storage.clone()).restore().is_none());
        assert_eq!(storage.get(crate::storage::THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_logout_is_idempotent() {
        let storage = MemoryStore::new();
        stored_session(&storage);
        let sessions = SessionStore::new(storage.clone());

        sessions.logout();
        sessions.logout();
        assert!(storage.is_empty());
        assert!(sessions.restore().is_none());
    }

    #[tokio::test]
    async fn test_fetch_and_refresh_need_tokens() {
        let transport = ScriptedTransport::default();
        let api = client(transport.clone());
        let sessions = SessionStore::new(MemoryStore::new());

        let err = sessions.fetch_current_user(&api).await.unwrap_err();
        assert!(matches!(err, AuthError::MissingCredential(CredentialKind::AccessToken)));

        let err = sessions.refresh(&api).await.unwrap_err();
        assert!(matches!(err, AuthError::MissingCredential(CredentialKind::RefreshToken)));

        assert_eq!(transport.sent_count(), 0);
    }

    #[tokio::test]
    async fn test_fetch_current_user_updates_snapshot() {
        let storage = MemoryStore::new();
        stored_session(&storage);
        let sessions = SessionStore::new(storage.clone());
        let api = client(ScriptedTransport::default().respond(
            200,
            r#"{"id":"9","username":"manager","full_name":"Casino Manager","role":"GeneralAdmin","permissions":["reports:read","gaming:read"]}"#,
        ));

        let user = sessions.fetch_current_user(&api).await.unwrap();
        assert!(user.permissions.contains("gaming:read"));
        let restored = sessions.restore().unwrap();
        assert!(restored.user.permissions.contains("gaming:read"));
    }

    #[tokio::test]
    async fn test_refresh_keeps_refresh_token_when_not_rotated() {
        let storage = MemoryStore::new();
        stored_session(&storage);
        let sessions = SessionStore::new(storage.clone());
        let api = client(ScriptedTransport::default().respond(200, r#"{"access_token":"new-access"}"#));

        let tokens = sessions.refresh(&api).await.unwrap();
        assert_eq!(tokens.access_token, "new-access");
        assert_eq!(storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("new-access"));
        assert_eq!(storage.get(REFRESH_TOKEN_KEY).as_deref(), Some("old-refresh"));
    }

    /// Memory store whose writes to one key always fail
    #[derive(Clone)]
    struct ReadOnlyKey {
        inner: MemoryStore,
        key: &'static str,
    }

    impl KeyValueStore for ReadOnlyKey {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == self.key {
                return Err(StorageError::Write { key: key.to_string() });
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) {
            self.inner.remove(key)
        }
    }

    /// Changes storage while the request is on the wire
    struct MidRequest {
        storage: MemoryStore,
        inner: ScriptedTransport,
        during: fn(&MemoryStore),
    }

    #[async_trait(?Send)]
    impl HttpTransport for MidRequest {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AuthError> {
            (self.during)(&self.storage);
            self.inner.send(request).await
        }
    }

    fn sign_out(storage: &MemoryStore) {
        SessionStore::new(storage.clone()).logout();
    }

    fn sign_in_elsewhere(storage: &MemoryStore) {
        storage.set(ACCESS_TOKEN_KEY, "fresh-access").unwrap();
        storage.set(USER_DATA_KEY, r#"{"marker":true}"#).unwrap();
    }

    const MANAGER_ME: &str =
        r#"{"id":"9","username":"manager","full_name":"Casino Manager","role":"GeneralAdmin","permissions":["reports:read"]}"#;

    #[tokio::test]
    async fn test_failed_persist_restores_previous_session() {
        let inner = MemoryStore::new();
        stored_session(&inner);
        let sessions = SessionStore::new(ReadOnlyKey { inner: inner.clone(), key: USER_DATA_KEY });
        let api = client(ScriptedTransport::default().respond(200, SUPERADMIN_LOGIN));

        let err = sessions
            .login(&api, &Credentials::new("superadmin", "admin123"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Storage(StorageError::Write { .. })));
        assert_eq!(inner.get(ACCESS_TOKEN_KEY).as_deref(), Some("old-access"));
        assert_eq!(inner.get(REFRESH_TOKEN_KEY).as_deref(), Some("old-refresh"));
        assert_eq!(sessions.restore().unwrap().user.username, "manager");
    }

    #[tokio::test]
    async fn test_failed_persist_without_previous_session_leaves_nothing() {
        let inner = MemoryStore::new();
        let sessions = SessionStore::new(ReadOnlyKey { inner: inner.clone(), key: USER_DATA_KEY });
        let api = client(ScriptedTransport::default().respond(200, SUPERADMIN_LOGIN));

        assert!(sessions.login(&api, &Credentials::new("superadmin", "admin123")).await.is_err());
        assert!(inner.is_empty());
    }

    #[tokio::test]
    async fn test_logout_during_verification_stays_signed_out() {
        let storage = MemoryStore::new();
        stored_session(&storage);
        let sessions = SessionStore::new(storage.clone());
        let api = client_with(MidRequest {
            storage: storage.clone(),
            inner: ScriptedTransport::default().respond(200, MANAGER_ME),
            during: sign_out,
        });

        let err = sessions.fetch_current_user(&api).await.unwrap_err();
        assert!(matches!(err, AuthError::SessionEnded));
        assert!(storage.is_empty());
        assert!(sessions.restore().is_none());
    }

    #[tokio::test]
    async fn test_logout_during_refresh_stays_signed_out() {
        let storage = MemoryStore::new();
        stored_session(&storage);
        let sessions = SessionStore::new(storage.clone());
        let api = client_with(MidRequest {
            storage: storage.clone(),
            inner: ScriptedTransport::default().respond(200, r#"{"access_token":"new-access"}"#),
            during: sign_out,
        });

        let err = sessions.refresh(&api).await.unwrap_err();
        assert!(matches!(err, AuthError::SessionEnded));
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_verification_ignored_after_new_login() {
        let storage = MemoryStore::new();
        stored_session(&storage);
        let sessions = SessionStore::new(storage.clone());

        let api = client_with(MidRequest {
            storage: storage.clone(),
            inner: ScriptedTransport::default().respond(200, MANAGER_ME),
            during: sign_in_elsewhere,
        });

        let err = sessions.fetch_current_user(&api).await.unwrap_err();
        assert!(matches!(err, AuthError::SessionEnded));
        assert_eq!(storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("fresh-access"));
        assert_eq!(storage.get(USER_DATA_KEY).as_deref(), Some(r#"{"marker":true}"#));
    }

    #[cfg(feature = "direct-access")]
    #[test]
    fn test_direct_access_persists_demo_session() {
        let storage = MemoryStore::new();
        let sessions = SessionStore::new(storage.clone());
        let session = sessions.direct_access(Role::SuperAdmin).unwrap();
        assert!(session.user.permissions.is_wildcard());
        assert_eq!(sessions.restore().unwrap().user, session.user);
    }
}
