use crate::error::{AppError, Result};
use crate::models::RawInput;
use ndarray::Array1;
use serde_json::Value;
use std::collections::HashMap;

/// Heart-model numeric fields with their substitution defaults
const HEART_NUMERIC_DEFAULTS: [(&str, f64); 9] = [
    ("age", 0.0),
    ("sex", 0.0),
    ("trestbps", 120.0),
    ("chol", 200.0),
    ("fbs", 0.0),
    ("thalach", 150.0),
    ("exang", 0.0),
    ("oldpeak", 0.0),
    ("ca", 0.0),
];

/// Heart-model categorical fields, one-hot encoded against the persisted schema
const HEART_CATEGORICAL_FIELDS: [&str; 4] = ["cp", "slope", "thal", "restecg"];

/// Coerce a loosely-typed JSON value to f64.
///
/// Numbers pass through, numeric strings are parsed, booleans map to 1/0.
/// Anything else is a validation error surfaced as HTTP 400.
pub fn coerce_numeric(value: &Value, field: &str) -> Result<f64> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| {
            AppError::Validation(format!("field '{}' is not a finite number", field))
        }),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| {
            AppError::Validation(format!(
                "field '{}' has non-numeric value '{}'",
                field, s
            ))
        }),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        other => Err(AppError::Validation(format!(
            "field '{}' has non-numeric value {}",
            field, other
        ))),
    }
}

/// Read a numeric field, substituting the default when absent.
/// JSON null is treated the same as an absent field.
pub fn numeric_field(data: &RawInput, key: &str, default: f64) -> Result<f64> {
    match data.get(key) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => coerce_numeric(value, key),
    }
}

/// Encode a raw request into the diabetes model's 8-column vector
pub fn encode_diabetes(data: &RawInput) -> Result<Array1<f64>> {
    Ok(Array1::from_vec(vec![
        numeric_field(data, "Pregnancies", 0.0)?,
        numeric_field(data, "Glucose", 0.0)?,
        numeric_field(data, "BloodPressure", 0.0)?,
        numeric_field(data, "SkinThickness", 0.0)?,
        numeric_field(data, "Insulin", 0.0)?,
        numeric_field(data, "BMI", 0.0)?,
        numeric_field(data, "DiabetesPedigreeFunction", 0.5)?,
        numeric_field(data, "Age", 0.0)?,
    ]))
}

/// Encode a raw request into the liver model's 10-column vector.
/// Gender is textual: exactly "Male" maps to 1, anything else to 0.
pub fn encode_liver(data: &RawInput) -> Result<Array1<f64>> {
    let gender = match data.get("Gender") {
        Some(Value::String(s)) if s == "Male" => 1.0,
        _ => 0.0,
    };

    Ok(Array1::from_vec(vec![
        numeric_field(data, "Age", 0.0)?,
        gender,
        numeric_field(data, "Total_Bilirubin", 0.0)?,
        numeric_field(data, "Direct_Bilirubin", 0.0)?,
        numeric_field(data, "Alkaline_Phosphotase", 0.0)?,
        numeric_field(data, "Alamine_Aminotransferase", 0.0)?,
        numeric_field(data, "Aspartate_Aminotransferase", 0.0)?,
        numeric_field(data, "Total_Protiens", 0.0)?,
        numeric_field(data, "Albumin", 0.0)?,
        numeric_field(data, "Albumin_and_Globulin_Ratio", 0.0)?,
    ]))
}

/// Encode a raw request into the mental-health model's 3-column vector.
/// Inputs are on a 0-10 scale (default 5) and rescaled to 0-1.
pub fn encode_mental_health(data: &RawInput) -> Result<Array1<f64>> {
    Ok(Array1::from_vec(vec![
        numeric_field(data, "stress_level", 5.0)? / 10.0,
        numeric_field(data, "workload", 5.0)? / 10.0,
        numeric_field(data, "sleep_quality", 5.0)? / 10.0,
    ]))
}

/// Compiled view of a heart artifact's persisted feature-name list.
///
/// Built once when the artifact loads: a name -> column map for numeric
/// fields, and a (field, category-token) -> column map derived from
/// `<field>_<token>` column names. This makes the unknown-category fallback
/// explicit and avoids per-request string construction.
#[derive(Debug, Clone)]
pub struct HeartSchema {
    /// All persisted column names by index
    index: HashMap<String, usize>,

    /// One-hot columns keyed by (categorical field, category token)
    categorical: HashMap<(String, String), usize>,

    /// Total column count
    len: usize,
}

impl HeartSchema {
    pub fn new(features: &[String]) -> Self {
        let mut index = HashMap::new();
        let mut categorical = HashMap::new();

        for (i, name) in features.iter().enumerate() {
            index.insert(name.clone(), i);

            for field in HEART_CATEGORICAL_FIELDS {
                if let Some(token) = name.strip_prefix(&format!("{}_", field)) {
                    categorical.insert((field.to_string(), token.to_string()), i);
                }
            }
        }

        Self {
            index,
            categorical,
            len: features.len(),
        }
    }

    /// Encode a raw request against this schema.
    ///
    /// Numeric fields are set only if their name exists in the schema
    /// (unknown names are silently dropped, tolerating drift between trained
    /// artifacts). Unrecognized or absent categorical values encode as
    /// all-zero across that field's one-hot columns; that is a deliberate
    /// fallback, not an error.
    pub fn encode(&self, data: &RawInput) -> Result<Array1<f64>> {
        let mut vector = Array1::zeros(self.len);

        for (key, default) in HEART_NUMERIC_DEFAULTS {
            if let Some(&col) = self.index.get(key) {
                vector[col] = numeric_field(data, key, default)?;
            }
        }

        for field in HEART_CATEGORICAL_FIELDS {
            let token = match data.get(field).and_then(categorical_token) {
                Some(token) => token,
                None => continue,
            };
            if let Some(&col) = self.categorical.get(&(field.to_string(), token)) {
                vector[col] = 1.0;
            }
        }

        Ok(vector)
    }
}

/// Render a raw categorical value to the token used in persisted column
/// names. Integer-valued numbers render without a trailing ".0" so that a
/// JSON `2` matches a column named `cp_2`.
fn categorical_token(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else {
                n.as_f64().map(|f| f.to_string())
            }
        }
        _ => None,
    }
}
