//! Data model for the classification endpoint's response.

use serde::Deserialize;

/// Envelope returned by `POST /api/predict`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub success: bool,
    pub result: Prediction,
}

/// A single classification outcome.
///
/// Only `disease` and `confidence` are guaranteed by the service; everything
/// else degrades to an empty/absent value rather than failing the parse.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub disease: String,
    pub confidence: Confidence,
    #[serde(default)]
    pub prediction_probabilities: Vec<f64>,
    #[serde(default)]
    pub recommendations: Option<String>,
    #[serde(default)]
    pub treatment: Option<Treatment>,
}

impl Prediction {
    /// Display line for the result card, e.g.
    /// `Rice False Smut (Confidence: 92.35%)`.
    pub fn headline(&self) -> String {
        format!("{} (Confidence: {}%)", self.disease, self.confidence.percent())
    }
}

/// Confidence score on a 0-100 percentage scale.
///
/// The service is loose about the wire type: sometimes a JSON number,
/// sometimes a numeric string. Keeping the original text around lets string
/// inputs round in the decimal domain ("92.345" displays as "92.35", which a
/// binary float cannot reproduce).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Number(f64),
    Text(String),
}

impl Confidence {
    pub fn value(&self) -> f64 {
        match self {
            Confidence::Number(value) => *value,
            Confidence::Text(text) => text.trim().parse().unwrap_or(0.0),
        }
    }

    /// Two-decimal rendering without the `%` sign.
    pub fn percent(&self) -> String {
        match self {
            Confidence::Number(value) => format!("{value:.2}"),
            Confidence::Text(text) => {
                round_decimal_text(text).unwrap_or_else(|| format!("{:.2}", self.value()))
            }
        }
    }
}

/// Round a plain decimal string to two places, half away from zero.
fn round_decimal_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (digits, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut frac: Vec<u8> = frac_part.bytes().take(2).map(|b| b - b'0').collect();
    frac.resize(2, 0);
    let mut int_digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    if int_digits.is_empty() {
        int_digits.push(0);
    }

    if frac_part.as_bytes().get(2).is_some_and(|b| *b >= b'5') {
        let mut carry = 1u8;
        for digit in frac.iter_mut().rev().chain(int_digits.iter_mut().rev()) {
            let sum = *digit + carry;
            *digit = sum % 10;
            carry = sum / 10;
            if carry == 0 {
                break;
            }
        }
        if carry > 0 {
            int_digits.insert(0, carry);
        }
    }

    let int_text: String = int_digits.iter().map(|d| char::from(d + b'0')).collect();
    Some(format!("{sign}{int_text}.{}{}", frac[0], frac[1]))
}

/// Treatment lookup attached to a prediction, keyed by disease.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Treatment {
    pub name: String,
    /// Comma-delimited list, split for display via [`symptom_list`].
    pub symptoms: String,
    #[serde(default, rename = "brandTreatments")]
    pub brand_treatments: Vec<BrandTreatment>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BrandTreatment {
    #[serde(rename = "brandName")]
    pub brand_name: String,
    #[serde(rename = "howToUse")]
    pub how_to_use: String,
    pub recommendations: String,
}

/// Split a comma-delimited symptoms string into trimmed, non-empty items.
pub fn symptom_list(symptoms: &str) -> Vec<String> {
    symptoms
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_string_confidence() {
        let body = r#"{"success":true,"result":{"disease":"Rice False Smut","confidence":"92.345"}}"#;
        let response: PredictResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.result.disease, "Rice False Smut");
        assert_eq!(
            response.result.headline(),
            "Rice False Smut (Confidence: 92.35%)"
        );
    }

    #[test]
    fn test_parses_numeric_confidence() {
        let body = r#"{"result":{"disease":"brown_spot","confidence":87.5}}"#;
        let response: PredictResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.result.confidence.percent(), "87.50");
        assert!(response.result.treatment.is_none());
        assert!(response.result.prediction_probabilities.is_empty());
    }

    #[test]
    fn test_parses_full_payload() {
        let body = r#"{
            "success": true,
            "result": {
                "disease": "leaf_blast",
                "confidence": 96.1,
                "prediction_probabilities": [0.01, 0.961, 0.02],
                "recommendations": "Spray early. Drain the field.",
                "treatment": {
                    "name": "Leaf Blast",
                    "symptoms": "spindle-shaped lesions, grey centers",
                    "brandTreatments": [
                        {"brandName": "Tricyclazole 75WP", "howToUse": "0.6 g/L foliar spray", "recommendations": "Apply at tillering"}
                    ]
                }
            }
        }"#;
        let response: PredictResponse = serde_json::from_str(body).unwrap();
        let treatment = response.result.treatment.unwrap();
        assert_eq!(treatment.brand_treatments.len(), 1);
        assert_eq!(treatment.brand_treatments[0].brand_name, "Tricyclazole 75WP");
    }

    #[test]
    fn test_decimal_text_rounding() {
        assert_eq!(round_decimal_text("92.345").unwrap(), "92.35");
        assert_eq!(round_decimal_text("92.344").unwrap(), "92.34");
        assert_eq!(round_decimal_text("99.999").unwrap(), "100.00");
        assert_eq!(round_decimal_text("87").unwrap(), "87.00");
        assert_eq!(round_decimal_text(".5").unwrap(), "0.50");
        assert_eq!(round_decimal_text("-3.005").unwrap(), "-3.01");
        assert!(round_decimal_text("junk").is_none());
        assert!(round_decimal_text("").is_none());
    }

    #[test]
    fn test_text_confidence_falls_back_on_garbage() {
        let confidence = Confidence::Text("n/a".into());
        assert_eq!(confidence.percent(), "0.00");
        assert_eq!(confidence.value(), 0.0);
    }

    #[test]
    fn test_symptom_list_splits_and_trims() {
        let items = symptom_list("water-soaked lesions,  yellowing leaves , ,wilting");
        assert_eq!(items, vec!["water-soaked lesions", "yellowing leaves", "wilting"]);
        assert!(symptom_list("").is_empty());
    }
}
