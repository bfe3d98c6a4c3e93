mod image_catalog_impl;

pub use image_catalog_impl::ImageCatalogImpl;
