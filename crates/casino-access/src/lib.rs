//! Casino Access
//!
//! Client-side access logic for the admin console:
//! - models: users, roles, permissions and session tokens
//! - navigation: the navigation catalog and its role/permission filter
//! - gateway: HTTP client for the remote auth API
//! - records: authenticated reads for the console panels
//! - session: persisted session lifecycle (login, restore, logout)
//! - theme: light/dark/system preference with persistence
//!
//! Nothing here touches the DOM; browser specifics plug in through
//! [`KeyValueStore`] and [`HttpTransport`].

pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod navigation;
pub mod records;
pub mod session;
pub mod storage;
pub mod theme;

pub use config::ApiConfig;
pub use error::{AuthError, CredentialKind, SessionRestoreError, StorageError, ValidationError};
pub use gateway::{with_deadline, ApiRequest, ApiResponse, AuthClient, HttpTransport, Method};
pub use models::{
    Credentials, DashboardMetrics, GameSummary, GamingPackage, GamingSession, GamingSessionPage, LoginResponse, Member,
    MemberPage, PermissionSet, RewardItem, Role, Session, SessionTokens, TokenPair, User,
};
pub use navigation::{
    can_access, catalog, filter_navigation, utility_items, AccessRule, Icon, NavigationItem, NavigationSection,
};
pub use records::{MemberQuery, RecordsClient, SessionQuery};
pub use session::SessionStore;
pub use storage::{KeyValueStore, MemoryStore};
pub use theme::{ThemePreference, ThemeState, ThemeStore};
