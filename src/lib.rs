//! Vitrine - Storefront service for the Bem Me Faz natural cosmetics shop
//!
//! # Modules
//!
//! - [`config`] — Strongly-typed configuration with TOML and environment variable support
//! - [`domain`] — Catalog and cart domain models
//! - [`application`] — Catalog view logic and cart session orchestration
//! - [`infrastructure`] — Catalog seed loading and the in-memory session store
//! - [`presentation`] — HTTP controllers, DTOs and routing
//! - [`logging`] — Structured logging with tracing
//!
//! # Architecture
//!
//! ```text
//! vitrine/
//! ├── domain/           # Pure business logic (products, cart container)
//! ├── application/      # Filter/search and cart services
//! ├── infrastructure/   # Catalog seed, session store
//! ├── presentation/     # Axum controllers, DTOs, routes
//! └── config/           # Configuration management
//! ```
//!
//! # Configuration
//!
//! Load configuration from files and environment:
//!
//! ```rust,ignore
//! use vitrine::Config;
//!
//! let config = Config::load()?;
//! ```
//!
//! Environment variables use the `VITRINE__` prefix with double underscore
//! separators:
//!
//! ```bash
//! VITRINE__SERVER__PORT=3000
//! VITRINE__CART__SESSION_TTL_MINUTES=60
//! ```

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

pub use app::{AppHandle, create_app};
pub use config::Config;
pub use logging::init_tracing;
