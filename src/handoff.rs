//! In-memory handoff channel between the detection and treatment views.
//!
//! Replaces the original router-state payload with an explicit structure: the
//! detection view publishes, the treatment view reads. Nothing is persisted
//! or URL-addressable; a refresh or a new upload replaces it wholesale.

use leptos::prelude::*;
use web_sys::File;

use crate::model::Prediction;

#[derive(Debug, Clone, PartialEq)]
pub struct DetectionHandoff {
    pub prediction: Prediction,
    /// Original upload, forwarded so the report request can include it.
    pub image: Option<File>,
}

/// Context handle provided at the App root. `LocalStorage` because the
/// payload holds a JS `File` handle, which never leaves the main thread.
#[derive(Clone, Copy)]
pub struct HandoffStore(RwSignal<Option<DetectionHandoff>, LocalStorage>);

impl HandoffStore {
    pub fn new() -> Self {
        Self(RwSignal::new_local(None))
    }

    pub fn publish(&self, handoff: DetectionHandoff) {
        self.0.set(Some(handoff));
    }

    /// Reactive read; treatment view re-renders when the payload changes.
    pub fn current(&self) -> Option<DetectionHandoff> {
        self.0.get()
    }

    pub fn current_untracked(&self) -> Option<DetectionHandoff> {
        self.0.get_untracked()
    }
}

impl Default for HandoffStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Confidence;

    fn handoff(disease: &str) -> DetectionHandoff {
        DetectionHandoff {
            prediction: Prediction {
                disease: disease.to_string(),
                confidence: Confidence::Number(75.0),
                prediction_probabilities: Vec::new(),
                recommendations: None,
                treatment: None,
            },
            image: None,
        }
    }

    #[test]
    fn test_store_starts_empty() {
        let store = HandoffStore::new();
        assert!(store.current_untracked().is_none());
    }

    #[test]
    fn test_publish_replaces_previous_payload() {
        let store = HandoffStore::new();
        store.publish(handoff("brown_spot"));
        store.publish(handoff("leaf_blast"));
        let current = store.current_untracked().unwrap();
        assert_eq!(current.prediction.disease, "leaf_blast");
    }
}
