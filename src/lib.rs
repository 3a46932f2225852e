//! Documentation of a recipe feedback service.
//!
//!
//!
//! # General Infrastructure
//! - Widget sits on a recipe page and POSTs `{ recipeId, feedback }` to `/api/feedback`
//! - Server validates, writes to the feedback store, answers, then fires analytics
//! - Analytics runs detached, the caller never waits on it and never sees it fail
//! - Store and analytics are traits so the mock, Redis, or anything else can plug in
//!
//!
//!
//! # Request Lifecycle
//!
//! `received -> validated -> persisted -> responded`, analytics spawned after the write.
//!
//! | Condition | Status | Body |
//! |---|---|---|
//! | wrong method | 405 | `{"error":"Method Not Allowed"}` |
//! | missing/invalid fields | 400 | `{"error":"Invalid input"}` |
//! | store write fails | 500 | `{"error":"Failed to save feedback"}` |
//! | success | 201 | `{"success":true}` |
//!
//! Analytics is never reached on the 405/400/500 paths.
//!
//!
//!
//! # Notes
//!
//! ## Memory vs Redis
//! The memory store is the default and mimics database latency (250 ms). It loses
//! everything on restart, which is fine for local work. `FEEDBACK_STORE=redis`
//! switches to one Redis list per recipe. `RPUSH` is atomic so concurrent
//! requests for the same recipe cannot drop each other's feedback.
//!
//! ## Analytics
//! The mock waits 500 ms and fails about 3% of the time on purpose. Failures show
//! up as `warn` logs on the server and nowhere else.
//!
//!
//!
//! # Setup
//!
//! Run the server.
//! ```sh
//! RUST_LOG=info cargo run
//! ```
//!
//! Submit through the widget from another terminal.
//! ```sh
//! cargo run -p tester -- pad-thai More lime please
//! ```
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
//!
//!
//!
//! # Environment
//!
//! | Variable | Default |
//! |---|---|
//! | `RUST_PORT` | `1111` |
//! | `FEEDBACK_STORE` | `memory` |
//! | `REDIS_URL` | `redis://redis:6379` |
//! | `STORE_LATENCY_MS` | `250` |
//! | `ANALYTICS_LATENCY_MS` | `500` |
//! | `ANALYTICS_FAILURE_RATE` | `0.03` |

pub mod user;

pub use server;
pub use widget;
