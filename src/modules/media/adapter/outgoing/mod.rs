mod gcs_asset_store;

pub use gcs_asset_store::GcsAssetStore;
