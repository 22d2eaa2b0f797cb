pub mod candidates;
pub mod explanation;
pub mod history;
pub mod policy;
pub mod profile;
pub mod random;
pub mod recommendations;

pub use policy::{AffinityPolicy, BaselinePolicy, PersonalizationPolicy, PolicyOutcome, Selection};
pub use random::RandomSource;
