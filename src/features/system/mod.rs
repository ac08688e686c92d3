//! Health, hello and diagnostics endpoints.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/` | No | Health check |
//! | GET | `/api/hello` | No | Hello message |
//! | GET | `/test` | No | Database diagnostics, never fails |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::DiagnosticsService;
