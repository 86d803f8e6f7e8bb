pub mod candidate;
pub mod cv;
pub mod media;
pub mod realtime;
