//! Near-Earth object feed client for the impact simulator.
//!
//! Supplies real asteroid parameters (size range, approach velocity, miss
//! distance) that the caller turns into
//! [`impact_physics::ImpactSimulationInput`] values.
//!
//! # Design principles
//!
//! - **Injectable state**: caching lives in the [`Cache`] the client is
//!   built with; nothing is stored globally
//! - **Explicit policy**: retries, backoff and timeouts come from a
//!   [`RetryPolicy`] value
//! - **Sync parsing**: feed parsing and selection are synchronous and
//!   usable without the client
//!
//! # Example
//!
//! ```ignore
//! use neo_feed::{Client, FeedRequest, MemoryCache};
//! use impact_physics::{Terrain, simulate_impact};
//!
//! let client = Client::with_cache(MemoryCache::with_ttl(Duration::from_secs(600)));
//! if let Some(asteroid) = client.fetch_featured(&FeedRequest::new("2024-06-01", "2024-06-08")).await? {
//!     let result = simulate_impact(&asteroid.to_simulation_input(Terrain::Land)?)?;
//! }
//! ```

pub mod cache;
mod client;
mod error;
pub mod retry;
pub mod types;

pub use cache::{Cache, MemoryCache, NoCache};
pub use client::Client;
pub use error::{Error, Result};
pub use retry::RetryPolicy;
pub use types::{AsteroidSummary, Feed, FeedRequest, NearEarthObject};
