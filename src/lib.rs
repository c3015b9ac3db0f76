//! Daymark - Client Core
//!
//! Daymark is the client core for a personal task, event, and reminder
//! service backed by an external HTTP API. It owns everything below the UI:
//! the token-based session lifecycle, the HTTP transport with automatic
//! token refresh, typed CRUD gateways for the three record kinds, and the
//! calendar month math.
//!
//! # Overview
//!
//! - Bearer-token session with OTP, password, and guest login paths
//! - Retry-once-on-401 token refresh; an unrecoverable refresh tears the
//!   session down and surfaces `ApiError::RefreshFailed`
//! - Session persistence behind a key-value interface (memory or file)
//! - Tasks, events, and reminders with archive/restore
//! - Month-grid date math matching reminders to days
//!
//! # Module Structure
//!
//! - **`client`** - the `DaymarkClient` facade wiring everything together
//! - **`session`** - persisted session pair, storage backends, and the
//!   `Initializing -> Authenticated | Unauthenticated` state machine
//! - **`http`** - session-aware HTTP client and the refresh protocol
//! - **`auth`** - authentication gateway and wire types
//! - **`resources`** - task/event/reminder gateways and record types
//! - **`calendar`** - pure month-view math
//! - **`config`** / **`error`** - configuration and the error taxonomy
//!
//! # Usage
//!
//! ```rust,no_run
//! use daymark::{Config, DaymarkClient};
//!
//! # async fn example() -> Result<(), daymark::ApiError> {
//! let client = DaymarkClient::with_file_store(Config::new())?;
//! client.initialize().await;
//!
//! let user = client.auth.login("me@example.com", "secret").await?;
//! let tasks = client.tasks.list_for_date("2024-01-15").await?;
//! # let _ = (user, tasks);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Every fallible operation returns `Result<_, ApiError>`. Transport and
//! HTTP failures propagate unchanged for the UI to render;
//! `ApiError::RefreshFailed` means the local session is already gone and the
//! consumer should return to its unauthenticated entry point.

pub mod auth;
pub mod calendar;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod resources;
pub mod session;

pub use auth::types::User;
pub use calendar::MonthView;
pub use client::DaymarkClient;
pub use config::Config;
pub use error::ApiError;
pub use session::{SessionContext, SessionState};
