//! Custom order intake.
//!
//! Accepts a multipart form with submitter details and an optional file,
//! writes the file to the local upload directory and records the order
//! metadata in the `customorder` collection.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/custom-orders` | No | Submit a custom order |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::CustomOrderService;
