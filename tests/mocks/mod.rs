pub mod mock_provider_client;

pub use mock_provider_client::MockProviderClient;
