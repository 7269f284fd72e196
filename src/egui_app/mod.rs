//! egui Native Desktop App Module
//!
//! Desktop client for the construction management backend: authentication
//! forms, the REST client they call, the alert overlay and page routing.
//!
//! # Architecture
//!
//! - **`api`** - HTTP client wrapper and the normalized response envelope
//! - **`auth`** - Authentication API facade and the in-memory session
//! - **`alert`** - Single-slot alert provider and handles
//! - **`forms`** - Form controllers and input primitives
//! - **`types`** / **`navigation`** / **`pages`** - Routes, delayed redirects, page titles
//! - **`state`** - `AppState`, which wires forms to the API on a tokio runtime
//! - **`views`** / **`theme`** - egui rendering
//! - **`main`** - Application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs         - Module exports and documentation
//! ├── main.rs        - Main application entry point
//! ├── config.rs      - Configuration resolution
//! ├── api/           - HTTP client and response envelope
//! ├── auth.rs        - Auth facade and session
//! ├── alert.rs       - Alert context
//! ├── forms/         - Sign in, sign up, forgot and reset password
//! ├── navigation.rs  - Router with delayed redirects
//! ├── pages.rs       - Page metadata
//! ├── types.rs       - Route table
//! ├── state/         - Application state
//! ├── theme/         - Colors and frame builders
//! └── views/         - egui views
//! ```

pub mod alert;
pub mod api;
pub mod auth;
pub mod config;
pub mod forms;
pub mod navigation;
pub mod pages;
pub mod state;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use alert::{AlertConfig, AlertHandle, AlertProvider, AlertVariant, ProviderScope};
pub use api::{ApiClient, ApiResponse};
pub use auth::{AuthApi, AuthState};
pub use config::Config;
pub use state::AppState;
pub use types::Route;
