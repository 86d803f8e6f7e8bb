mod cv_repository;
mod owner_directory;

pub use cv_repository::{CvDraft, CvListFilter, CvRepository, CvRepositoryError, PageRequest};
pub use owner_directory::{OwnerDirectory, OwnerDirectoryError, OwnerIdentity};

#[cfg(test)]
pub use owner_directory::MockOwnerDirectory;
