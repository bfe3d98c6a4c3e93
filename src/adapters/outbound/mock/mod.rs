pub mod mock_catalog;

pub use mock_catalog::MockImageCatalog;
