//! Infrastructure layer - settings stores and the standalone host

pub mod host;
pub mod memory;
pub mod storage;

pub use host::StaticShopHost;
pub use memory::InMemorySettingsStore;
pub use storage::repositories::SeaOrmSettingsStore;
