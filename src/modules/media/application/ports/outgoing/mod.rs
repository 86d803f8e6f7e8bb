mod asset_store;

pub use asset_store::{AssetStore, AssetStoreError, AssetUpload, StoredAsset};

#[cfg(test)]
pub use asset_store::MockAssetStore;
