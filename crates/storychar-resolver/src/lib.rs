//! Storychar Resolver - Remote character fetch with offline fallback

pub mod fallback;
pub mod remote;
pub mod resolver;
pub mod source;

pub use fallback::{pick_sample, SAMPLE_CHARACTERS};
pub use remote::RemoteSource;
pub use resolver::{FetchMode, Resolver};
pub use source::{CharacterSource, SourceError, SourceResult};
