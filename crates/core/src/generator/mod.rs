//! Day-by-day synthetic personal-spending simulation.
//!
//! Produces plausible spending histories for a single synthetic user:
//! weighted category sampling, seasonal multipliers, per-year trend
//! shifts, a once-per-month rent transaction, and monthly/daily
//! spending caps.

pub mod engine;
pub mod error;
pub mod profile;
pub mod sampler;
pub mod summary;
pub mod text;
pub mod types;


pub use engine::TransactionGenerator;
pub use error::{GeneratorError, ProfileError};
pub use profile::{CategoryProfile, CategoryProfiles};
pub use sampler::WeightedSampler;
pub use summary::monthly_totals;
pub use text::{FakeTextSource, TextSource};
pub use types::{Category, Transaction};
