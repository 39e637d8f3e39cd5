//! Infrastructure: the repository port, its in-memory adapter, the
//! repository helper, and the clock.

pub mod clock;
pub mod helper;
pub mod in_memory;
pub mod ports;

pub use clock::{ClockPort, SystemClock};
pub use helper::RepositoryHelper;
pub use in_memory::InMemoryRepository;
pub use ports::{MetadataRepository, RepoError};

#[cfg(test)]
pub use clock::MockClockPort;
#[cfg(test)]
pub use ports::MockMetadataRepository;
