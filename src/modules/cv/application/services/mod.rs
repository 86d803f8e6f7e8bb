mod cv_service;

pub use cv_service::CvService;
