pub mod cv_repository_postgres;
pub mod owner_directory_postgres;
pub mod sea_orm_entity;

pub use cv_repository_postgres::CvRepositoryPostgres;
pub use owner_directory_postgres::OwnerDirectoryPostgres;
