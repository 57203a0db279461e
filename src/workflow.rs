//! Detection workflow state machine.
//!
//! Pure model of the upload/predict/result flow so the transitions can be
//! tested without a DOM. The view layer owns the side effects (object URLs,
//! network calls) and drives this machine through a signal.

use crate::model::Prediction;

/// Anything the workflow can treat as a candidate image.
pub trait ImageSource {
    fn mime_type(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    ImageSelected,
    Predicting,
    ResultShown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    NoFile,
    MultipleFiles,
    NotAnImage,
}

pub struct DetectWorkflow<I> {
    image: Option<I>,
    result: Option<Prediction>,
    error: Option<String>,
    in_flight: Option<u64>,
    next_seq: u64,
}

impl<I: ImageSource> DetectWorkflow<I> {
    pub fn new() -> Self {
        Self {
            image: None,
            result: None,
            error: None,
            in_flight: None,
            next_seq: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight.is_some() {
            Phase::Predicting
        } else if self.result.is_some() {
            Phase::ResultShown
        } else if self.image.is_some() {
            Phase::ImageSelected
        } else {
            Phase::Empty
        }
    }

    pub fn image(&self) -> Option<&I> {
        self.image.as_ref()
    }

    pub fn result(&self) -> Option<&Prediction> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Accept a dropped/picked selection: exactly one file with an `image/*`
    /// MIME type. On success the previous image, result, and any in-flight
    /// request are all invalidated; on failure the machine is untouched.
    pub fn select(&mut self, mut candidates: Vec<I>) -> Result<(), SelectError> {
        if candidates.len() > 1 {
            return Err(SelectError::MultipleFiles);
        }
        let image = candidates.pop().ok_or(SelectError::NoFile)?;
        if !image.mime_type().starts_with("image/") {
            return Err(SelectError::NotAnImage);
        }

        self.image = Some(image);
        self.result = None;
        self.error = None;
        self.in_flight = None;
        Ok(())
    }

    /// Start a prediction request. Returns the sequence number the caller
    /// must hand back to [`apply`](Self::apply), or `None` when there is no
    /// image or a result is already showing.
    ///
    /// Issuing again while a request is in flight supersedes it: the earlier
    /// response no longer matches `in_flight` and is dropped on arrival.
    pub fn begin_predict(&mut self) -> Option<u64> {
        if self.image.is_none() || self.result.is_some() {
            return None;
        }
        self.next_seq += 1;
        self.in_flight = Some(self.next_seq);
        self.error = None;
        Some(self.next_seq)
    }

    /// Apply a finished request. Stale sequence numbers are ignored so only
    /// the last issued request can ever produce the visible outcome.
    pub fn apply(&mut self, seq: u64, outcome: Result<Prediction, String>) -> bool {
        if self.in_flight != Some(seq) {
            return false;
        }
        self.in_flight = None;
        match outcome {
            Ok(prediction) => self.result = Some(prediction),
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Discard the current image and result, returning to `Empty`.
    pub fn reset(&mut self) {
        self.image = None;
        self.result = None;
        self.error = None;
        self.in_flight = None;
    }
}

impl<I: ImageSource> Default for DetectWorkflow<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Confidence;

    struct FakeImage(&'static str);

    impl ImageSource for FakeImage {
        fn mime_type(&self) -> String {
            self.0.to_string()
        }
    }

    fn prediction(disease: &str) -> Prediction {
        Prediction {
            disease: disease.to_string(),
            confidence: Confidence::Number(90.0),
            prediction_probabilities: Vec::new(),
            recommendations: None,
            treatment: None,
        }
    }

    fn machine_with_image() -> DetectWorkflow<FakeImage> {
        let mut machine = DetectWorkflow::new();
        machine.select(vec![FakeImage("image/jpeg")]).unwrap();
        machine
    }

    #[test]
    fn test_non_image_selection_is_rejected() {
        let mut machine = DetectWorkflow::new();
        assert_eq!(
            machine.select(vec![FakeImage("application/pdf")]),
            Err(SelectError::NotAnImage)
        );
        assert_eq!(machine.phase(), Phase::Empty);
    }

    #[test]
    fn test_multi_file_selection_is_rejected() {
        let mut machine = DetectWorkflow::new();
        assert_eq!(
            machine.select(vec![FakeImage("image/png"), FakeImage("image/png")]),
            Err(SelectError::MultipleFiles)
        );
        assert_eq!(machine.phase(), Phase::Empty);

        assert_eq!(machine.select(Vec::new()), Err(SelectError::NoFile));
        assert_eq!(machine.phase(), Phase::Empty);
    }

    #[test]
    fn test_valid_selection_transitions() {
        let mut machine = DetectWorkflow::new();
        machine.select(vec![FakeImage("image/png")]).unwrap();
        assert_eq!(machine.phase(), Phase::ImageSelected);
    }

    #[test]
    fn test_reselect_replaces_image_and_discards_result() {
        let mut machine = machine_with_image();
        let seq = machine.begin_predict().unwrap();
        machine.apply(seq, Ok(prediction("brown_spot")));
        assert_eq!(machine.phase(), Phase::ResultShown);

        machine.select(vec![FakeImage("image/webp")]).unwrap();
        assert_eq!(machine.phase(), Phase::ImageSelected);
        assert!(machine.result().is_none());
        assert_eq!(machine.image().unwrap().mime_type(), "image/webp");
    }

    #[test]
    fn test_predict_requires_selected_image() {
        let mut machine: DetectWorkflow<FakeImage> = DetectWorkflow::new();
        assert!(machine.begin_predict().is_none());
    }

    #[test]
    fn test_last_issued_request_wins() {
        let mut machine = machine_with_image();
        let first = machine.begin_predict().unwrap();
        let second = machine.begin_predict().unwrap();
        assert_eq!(machine.phase(), Phase::Predicting);

        // The superseded response arrives late and is dropped.
        assert!(!machine.apply(first, Ok(prediction("stale"))));
        assert_eq!(machine.phase(), Phase::Predicting);

        assert!(machine.apply(second, Ok(prediction("leaf_blast"))));
        assert_eq!(machine.phase(), Phase::ResultShown);
        assert_eq!(machine.result().unwrap().disease, "leaf_blast");
    }

    #[test]
    fn test_failure_surfaces_error_and_keeps_image() {
        let mut machine = machine_with_image();
        let seq = machine.begin_predict().unwrap();
        assert!(machine.apply(seq, Err("service unreachable".into())));
        assert_eq!(machine.phase(), Phase::ImageSelected);
        assert_eq!(machine.error(), Some("service unreachable"));

        // Retrying clears the error.
        machine.begin_predict().unwrap();
        assert!(machine.error().is_none());
    }

    #[test]
    fn test_selection_drops_in_flight_response() {
        let mut machine = machine_with_image();
        let seq = machine.begin_predict().unwrap();
        machine.select(vec![FakeImage("image/jpeg")]).unwrap();
        assert!(!machine.apply(seq, Ok(prediction("stale"))));
        assert_eq!(machine.phase(), Phase::ImageSelected);
    }

    #[test]
    fn test_reset_returns_to_empty() {
        let mut machine = machine_with_image();
        let seq = machine.begin_predict().unwrap();
        machine.apply(seq, Ok(prediction("sheath_blight")));
        machine.reset();
        assert_eq!(machine.phase(), Phase::Empty);
        assert!(machine.image().is_none());
        assert!(machine.result().is_none());
    }
}
