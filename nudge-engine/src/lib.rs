#![deny(missing_docs)]
//! # nudge-engine: pick one tip to show, or none
//!
//! The engine owns the candidate pool, the per-tip usage history, and the
//! currently-shown pointer. At each trigger it draws a uniformly random
//! candidate, runs it through the eligibility rule chain, and either hands
//! it to the panel or removes it from the pool and retries until the pool
//! is empty.
//!
//! Collaborators (settings storage, the message panel, per-tip gates) are
//! the protocol traits of `nudge-types`; the engine never touches storage
//! or rendering directly.
//!
//! Counter mutations are persisted through a debounced [`SaveScheduler`]:
//! bursts of mutations collapse into a single write of the whole history
//! blob. Persistence is eventually consistent, never immediate;
//! [`TipEngine::flush`] drains the pending write on demand.
//!
//! The engine is single-threaded by contract: operations take `&mut self`
//! and the caller serializes trigger and dismiss events. It must run
//! inside a tokio runtime (the save scheduler spawns its timer there).

mod config;
mod eligibility;
mod engine;
mod saver;

pub use config::EngineConfig;
pub use engine::TipEngine;
pub use saver::SaveScheduler;
