//! # m4tag Architecture
//!
//! m4tag is a **UI-agnostic tag mutation library** with a CLI client. The
//! core turns a batch of raw field requests plus an optional removal spec
//! into a consistent, merged tag record per file and persists it.
//!
//! ## Layers
//!
//! ```text
//! CLI layer (args.rs + main.rs)
//!   clap parsing, colored output, exit codes — the only place that knows
//!   about stdout/stderr
//!        │
//! API layer (api.rs)
//!   thin facade: build a validated request, run a batch, return
//!   structured Result types
//!        │
//! Engine layer (apply.rs and its leaves)
//!   field registry, enum resolver, removal parser, paired-field merger,
//!   artwork loader — pure logic, no I/O assumptions
//!        │
//! Storage layer (store/)
//!   TagStore trait; FileStore (lofty-backed, production) and
//!   InMemoryStore (testing)
//! ```
//!
//! ## Mutation order
//!
//! Per file: removals are applied first, then track/disk pair merges
//! (reading the record's then-current state), then the remaining
//! assignments in field order. Two consequences are deliberate: a field
//! both removed and assigned in one run ends up assigned, and a pair
//! removed and partially re-requested re-derives its unrequested half from
//! the cleared state. See `apply.rs`.
//!
//! ## Module overview
//!
//! - [`api`]: entry point facade
//! - [`apply`]: per-file mutation orchestration
//! - [`field`]: the field registry (ids, kinds, aliases)
//! - [`catalog`]: genre / media type / content rating vocabularies
//! - [`removal`]: compact removal-spec parser
//! - [`pairing`]: track/disk number+total merging
//! - [`record`]: the canonical tag record
//! - [`request`]: validated raw requests
//! - [`artwork`]: attachment loading
//! - [`store`]: storage abstraction and backends
//! - [`error`]: error types and exit-code mapping

pub mod api;
pub mod apply;
pub mod artwork;
pub mod catalog;
pub mod error;
pub mod field;
pub mod pairing;
pub mod record;
pub mod removal;
pub mod request;
pub mod store;
