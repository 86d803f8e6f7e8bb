use serde::Serialize;

use crate::cv::domain::entities::CvRecord;

/// Lifecycle events fanned out to subscribers after a CV mutation
/// commits. The record carried is the state the store returned.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data")]
pub enum CvEvent {
    #[serde(rename = "cvCreated")]
    CvCreated(CvRecord),
    #[serde(rename = "cvUpdated")]
    CvUpdated(CvRecord),
}

impl CvEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CvEvent::CvCreated(_) => "cvCreated",
            CvEvent::CvUpdated(_) => "cvUpdated",
        }
    }

    pub fn record(&self) -> &CvRecord {
        match self {
            CvEvent::CvCreated(record) | CvEvent::CvUpdated(record) => record,
        }
    }
}
