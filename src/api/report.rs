//! Report export endpoint.
//!
//! Accepts a calculator name, labeled inputs and outputs (as ordered pairs
//! or a keyed map), and optional notes, and returns the rendered report
//! document bytes. The response is intended to be served as a downloadable
//! attachment.

use jiff::Zoned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::report::Report;

use super::ApiResult;

/// Wire-format request for report generation.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportRequest {
    /// Report title, typically the calculator name.
    pub calculator_name: String,

    /// Labeled input parameters.
    pub inputs: LabeledValues,

    /// Labeled calculated results.
    pub outputs: LabeledValues,

    /// Optional free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Labeled values, accepted as ordered pairs or as a keyed map.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LabeledValues {
    /// Ordered `[name, value]` pairs; presentation order is preserved.
    Pairs(Vec<(String, Value)>),

    /// Keyed map; entries render in key order.
    Map(serde_json::Map<String, Value>),
}

impl LabeledValues {
    fn to_pairs(&self) -> Vec<(String, String)> {
        match self {
            Self::Pairs(pairs) => pairs
                .iter()
                .map(|(name, value)| (name.clone(), format_value(value)))
                .collect(),
            Self::Map(map) => map
                .iter()
                .map(|(name, value)| (name.clone(), format_value(value)))
                .collect(),
        }
    }
}

/// Renders a JSON value the way a label reads: strings bare, everything
/// else in its JSON form.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Parses a JSON payload and renders the report document.
///
/// # Errors
///
/// Returns an [`ApiError`](super::ApiError) for a malformed payload or a
/// payload missing `calculator_name`, `inputs`, or `outputs`.
pub fn handle(body: &str) -> ApiResult<Vec<u8>> {
    let request: ReportRequest = serde_json::from_str(body)?;
    render(&request)
}

/// Renders the report document for an already-parsed request.
///
/// # Errors
///
/// Currently infallible after parsing; the signature reserves the error
/// path so transports can treat every handler uniformly.
pub fn render(request: &ReportRequest) -> ApiResult<Vec<u8>> {
    debug!(title = %request.calculator_name, "rendering report document");
    let report = Report {
        title: request.calculator_name.clone(),
        inputs: request.inputs.to_pairs(),
        outputs: request.outputs.to_pairs(),
        notes: request.notes.clone(),
    };
    Ok(report.render(&Zoned::now()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_round_trip_into_the_document() {
        let body = r#"{
            "calculator_name": "Composite Wall Calculator",
            "inputs": [["thickness", 0.1], ["k_value", 1.0]],
            "outputs": [["total_resistance", 0.1], ["heat_flux", 800.0]]
        }"#;

        let rendered = String::from_utf8(handle(body).unwrap()).unwrap();

        assert!(rendered.contains("Composite Wall Calculator"));
        assert!(rendered.contains("thickness: 0.1"));
        assert!(rendered.contains("k_value: 1"));
        assert!(rendered.contains("total_resistance: 0.1"));
        assert!(rendered.contains("heat_flux: 800"));
    }

    #[test]
    fn keyed_maps_are_accepted() {
        let body = r#"{
            "calculator_name": "Heat Exchanger Calculator",
            "inputs": {"UA": 1000.0, "flow_type": "parallel"},
            "outputs": {"effectiveness": 0.5179}
        }"#;

        let rendered = String::from_utf8(handle(body).unwrap()).unwrap();

        assert!(rendered.contains("UA: 1000"));
        // String values render bare, without JSON quotes.
        assert!(rendered.contains("flow_type: parallel"));
        assert!(rendered.contains("effectiveness: 0.5179"));
    }

    #[test]
    fn missing_required_fields_are_malformed() {
        let error = handle(r#"{"calculator_name": "Fin"}"#).unwrap_err();

        assert_eq!(error.status(), 400);
    }

    #[test]
    fn notes_render_when_present() {
        let body = r#"{
            "calculator_name": "Fin Performance Calculator",
            "inputs": [["P", 1.0]],
            "outputs": [["fin_efficiency", 0.98]],
            "notes": "Adiabatic tip assumed."
        }"#;

        let rendered = String::from_utf8(handle(body).unwrap()).unwrap();

        assert!(rendered.contains("Notes:"));
        assert!(rendered.contains("Adiabatic tip assumed."));
    }
}
