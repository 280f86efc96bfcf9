pub mod mock;
pub mod provider;
pub mod store;

pub use mock::MockNeighborhoodGenerator;
pub use provider::{NeighborhoodProvider, ProviderError};
pub use store::PreferenceStore;
