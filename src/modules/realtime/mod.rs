pub mod events;
pub mod notifier;

pub use events::CvEvent;
pub use notifier::{BroadcastNotifier, EventPublisher};
