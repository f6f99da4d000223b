//! # Jokes - Remix Jokes Web Application
//!
//! This is a facade crate that re-exports all public APIs from the jokes components.
//! Use this crate to get access to the whole application in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! jokes = { path = "../jokes" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Password`, `User`, `Joke`, etc.
//! - **Repository traits**: `UserStore`, `JokeStore`
//! - **Use cases**: `LoginUseCase`, `RegisterUseCase`, `CreateJokeUseCase`, etc.
//! - **Adapters**: `PostgresUserStore`, `HashMapJokeStore`, `Argon2PasswordHasher`,
//!   `SessionManager`, etc.
//! - **Service**: `JokesService` - The main entry point for the web application

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use jokes_core::*;
}

// Re-export most commonly used core types at the root level
pub use jokes_core::{
    Joke, JokeContent, JokeError, JokeId, JokeListItem, JokeName, NewJoke, NewUser, Password,
    PasswordHash, User, UserError, UserId, Username,
};

// ============================================================================
// Repository Traits (Ports)
// ============================================================================

/// Repository trait definitions
pub mod repositories {
    pub use jokes_core::{
        JokeOrder, JokeQuery, JokeStore, JokeStoreError, UserStore, UserStoreError,
    };
}

// Re-export repository traits at root level
pub use jokes_core::{
    JokeStore, JokeStoreError, PasswordHasher, PasswordHasherError, UserStore, UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use jokes_application::*;
}

// Re-export use cases at root level
pub use jokes_application::{
    CreateJokeUseCase, CurrentUserUseCase, DeleteJokeUseCase, ListJokesUseCase, LoginUseCase,
    RandomJokeUseCase, RegisterUseCase, ShowJokeUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use jokes_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use jokes_adapters::hashing::*;
    }

    /// Session cookie handling
    pub mod session {
        pub use jokes_adapters::session::*;
    }

    /// Configuration
    pub mod config {
        pub use jokes_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use jokes_adapters::{
    config::JokesSetting,
    hashing::Argon2PasswordHasher,
    persistence::{HashMapJokeStore, HashMapUserStore, PostgresJokeStore, PostgresUserStore},
    session::{SessionConfig, SessionManager},
};

// ============================================================================
// Web Layer
// ============================================================================

/// Axum pages, views and session operations
pub mod web {
    pub use jokes_axum::*;
}

// ============================================================================
// Jokes Service (Main Entry Point)
// ============================================================================

/// Main jokes service
pub use jokes_service::{DatabaseSetupError, JokesService, configure_postgresql};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
pub use http;
pub use tokio;
