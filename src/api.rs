//! HTTP client for the prediction backend.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{PredictResponse, Prediction};

/// Thin client over the two backend endpoints. Cheap to clone; the base URL
/// comes from [`Config`] so no component hard-codes an address.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            base: config.api_base.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Submit an image for classification.
    ///
    /// The `File` handle is appended to the form untouched, so the bytes on
    /// the wire are exactly the bytes the user selected.
    pub async fn predict(&self, image: &File) -> Result<Prediction> {
        let form = FormData::new().map_err(Error::interop)?;
        form.append_with_blob_and_filename("file", image, &image.name())
            .map_err(Error::interop)?;

        let response = Request::post(&self.endpoint("/api/predict"))
            .body(form)?
            .send()
            .await?;
        if !response.ok() {
            return Err(Error::http(response.status()));
        }

        let body: PredictResponse = response.json().await?;
        Ok(body.result)
    }

    /// Request the PDF report and return its raw bytes.
    pub async fn download_report(
        &self,
        report: &ReportRequest,
        image: Option<&File>,
    ) -> Result<Vec<u8>> {
        let form = FormData::new().map_err(Error::interop)?;
        if let Some(file) = image {
            form.append_with_blob_and_filename("file", file, &file.name())
                .map_err(Error::interop)?;
        }
        for (name, value) in report.fields() {
            form.append_with_str(name, &value).map_err(Error::interop)?;
        }

        let response = Request::post(&self.endpoint("/api/download_pdf"))
            .body(form)?
            .send()
            .await?;
        if !response.ok() {
            return Err(Error::http(response.status()));
        }

        Ok(response.binary().await?)
    }
}

/// Form fields for the report endpoint. Every field is optional on the wire;
/// absent values are omitted entirely rather than sent empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportRequest {
    pub predicted_class: Option<String>,
    pub predictions: Option<Vec<f64>>,
    pub suggestions: Option<String>,
}

impl ReportRequest {
    pub fn from_prediction(prediction: &Prediction) -> Self {
        Self {
            predicted_class: Some(prediction.disease.clone()),
            predictions: (!prediction.prediction_probabilities.is_empty())
                .then(|| prediction.prediction_probabilities.clone()),
            suggestions: prediction.recommendations.clone(),
        }
    }

    /// The string fields to append, with list/object values JSON-encoded the
    /// way the report endpoint expects.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(class) = &self.predicted_class {
            fields.push(("predicted_class", class.clone()));
        }
        if let Some(predictions) = &self.predictions {
            if let Ok(encoded) = serde_json::to_string(predictions) {
                fields.push(("predictions", encoded));
            }
        }
        if let Some(suggestions) = &self.suggestions {
            if let Ok(encoded) = serde_json::to_string(suggestions) {
                fields.push(("suggestions", encoded));
            }
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Confidence;

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let client = ApiClient::new(&Config::resolve(Some("http://localhost:9000".into())));
        assert_eq!(client.endpoint("/api/predict"), "http://localhost:9000/api/predict");
    }

    #[test]
    fn test_report_fields_encode_present_values() {
        let request = ReportRequest {
            predicted_class: Some("leaf_blast".into()),
            predictions: Some(vec![0.1, 0.9]),
            suggestions: Some("Spray early.".into()),
        };
        assert_eq!(
            request.fields(),
            vec![
                ("predicted_class", "leaf_blast".to_string()),
                ("predictions", "[0.1,0.9]".to_string()),
                ("suggestions", "\"Spray early.\"".to_string()),
            ]
        );
    }

    #[test]
    fn test_report_fields_omit_absent_values() {
        let request = ReportRequest {
            predicted_class: Some("brown_spot".into()),
            predictions: None,
            suggestions: None,
        };
        let fields = request.fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].0, "predicted_class");
    }

    #[test]
    fn test_report_request_from_prediction() {
        let prediction = Prediction {
            disease: "sheath_blight".into(),
            confidence: Confidence::Number(81.0),
            prediction_probabilities: Vec::new(),
            recommendations: None,
            treatment: None,
        };
        let request = ReportRequest::from_prediction(&prediction);
        assert_eq!(request.predicted_class.as_deref(), Some("sheath_blight"));
        assert!(request.predictions.is_none());
        assert!(request.suggestions.is_none());
    }
}
