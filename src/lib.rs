//! SiteDesk - Main Library
//!
//! Native desktop client for a construction management backend, built with
//! egui. It covers account access: sign in, sign up, password reset by email,
//! and a home page listing the signed-in user and their team.
//!
//! # Module Structure
//!
//! - **`shared`** - Types with no UI dependency
//!   - REST wire types for the `/auth` endpoints
//!   - Configuration and its builder
//!   - Error types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - HTTP client and authentication facade
//!   - Form controllers and the alert overlay
//!   - Routing and views
//!
//! # Usage
//!
//! ```rust,no_run
//! use sitedesk::egui_app::{AuthApi, Config};
//! use sitedesk::shared::LoginRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = AuthApi::from_config(&Config::load()?)?;
//! let response = api
//!     .login(&LoginRequest {
//!         email: "ana@example.com".to_string(),
//!         password: "secret1".to_string(),
//!     })
//!     .await;
//! if let Some(data) = response.data {
//!     println!("token type {}", data.token_type);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! - **UI**: egui is single-threaded immediate mode; `AppState` lives on that thread
//! - **Requests**: run on a tokio runtime and report back over `std::sync::mpsc`
//! - **Alerts**: the slot is an `Arc<Mutex<_>>`, so handles can be cloned into tasks
//!
//! # Error Handling
//!
//! - API calls never return `Err`; every outcome is an `ApiResponse`
//! - Start-up failures use `shared::error::SharedError` and `shared::config::ConfigError`

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
pub mod egui_app;
