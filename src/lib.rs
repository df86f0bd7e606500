//! Kessel: SWAPI people loader
//!
//! This crate fetches character records from the paginated SWAPI REST API,
//! resolves the cross-reference URLs embedded in each record (homeworld,
//! films, species, starships, vehicles) into human-readable names, and
//! persists the flattened records into one Postgres table:
//!
//! 1. **Count** -- Query the `/people/` listing for the total record count
//! 2. **Fetch** -- Walk the id range in fixed-size chunks, fetching every id
//!    in a chunk concurrently through one shared HTTP client
//! 3. **Resolve & Insert** -- Flatten each chunk in a background task
//!    (cross-references dereferenced to `name`/`title` strings, missing
//!    fields replaced by a sentinel) and commit it in a single transaction
//!
//! # Architecture
//!
//! - **Shared HTTP client** -- One `reqwest::Client` serves every fetch and
//!   every cross-reference resolution for the whole run
//! - **Chunked fan-out** -- `try_join_all` per chunk; a failing fetch fails
//!   its whole chunk and aborts the run
//! - **Owned insert tasks** -- Background inserts live in a pipeline-owned
//!   task set and are drained before completion; failures are counted and
//!   surfaced, never dropped
//! - **Explicit persistence handle** -- The Postgres pool is constructed at
//!   startup, passed down, and closed at the end of the run
//!
//! # Key Modules
//!
//! - [`client`] -- SWAPI HTTP client (count query, per-id fetch, resource GET)
//! - [`resolve`] -- Cross-reference resolution and record flattening
//! - [`pipeline`] -- Chunked fetch loop with background insert tasks
//! - [`db`] -- Env-driven Postgres config, table creation, batch inserts
//! - [`models`] -- Raw API records and the flattened storage row
//! - [`stats`] -- Thread-safe atomic counters for run metrics
//! - [`config`] -- Constants (base URL, chunk size, sentinel, defaults)

pub mod client;
pub mod config;
pub mod db;
pub mod models;
pub mod pipeline;
pub mod resolve;
pub mod stats;
