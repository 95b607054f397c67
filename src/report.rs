//! Report-document rendering.
//!
//! Renders a calculation summary (a title, labeled input parameters,
//! labeled results, and optional free-text notes) into a paginated
//! plain-text document serialized as bytes. Formatting lives entirely in
//! this module so the calculators and the boundary stay free of layout
//! concerns.
//!
//! The document contract: a centered title, an "Input Parameters:"
//! section, a "Calculated Results:" section, an optional "Notes:" section,
//! a generation timestamp, and a centered "Page N" footer on every page.
//! Every labeled pair appears verbatim as `name: value` on its own line.

mod document;

use jiff::Zoned;

use document::Document;

/// A calculation summary ready to be rendered.
#[derive(Debug, Clone)]
pub struct Report {
    /// Report title, typically the calculator name.
    pub title: String,

    /// Labeled input parameters, in presentation order.
    pub inputs: Vec<(String, String)>,

    /// Labeled calculated results, in presentation order.
    pub outputs: Vec<(String, String)>,

    /// Optional free-text notes.
    pub notes: Option<String>,
}

impl Report {
    /// Renders the report as a paginated plain-text document.
    ///
    /// The caller supplies the generation time so rendering stays a pure
    /// function of its arguments.
    #[must_use]
    pub fn render(&self, generated_at: &Zoned) -> Vec<u8> {
        let mut document = Document::new();

        document.centered(&self.title);
        document.blank();

        document.line("Input Parameters:");
        for (name, value) in &self.inputs {
            document.line(format!("{name}: {value}"));
        }
        document.blank();

        document.line("Calculated Results:");
        for (name, value) in &self.outputs {
            document.line(format!("{name}: {value}"));
        }
        document.blank();

        if let Some(notes) = &self.notes {
            document.line("Notes:");
            document.wrapped(notes);
            document.blank();
        }

        document.centered(&format!(
            "Report generated on: {}",
            generated_at.strftime("%Y-%m-%d %H:%M:%S")
        ));

        document.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, tz::TimeZone};

    use super::*;

    fn fixed_time() -> Zoned {
        date(2026, 8, 6)
            .at(12, 30, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
    }

    fn sample_report() -> Report {
        Report {
            title: "Fin Performance Calculator".into(),
            inputs: vec![
                ("P".into(), "1".into()),
                ("Ac".into(), "0.01".into()),
            ],
            outputs: vec![("heat_transfer_rate".into(), "787.08".into())],
            notes: Some("Adiabatic tip assumed.".into()),
        }
    }

    #[test]
    fn every_labeled_pair_appears_verbatim() {
        let rendered = String::from_utf8(sample_report().render(&fixed_time())).unwrap();

        assert!(rendered.contains("P: 1"));
        assert!(rendered.contains("Ac: 0.01"));
        assert!(rendered.contains("heat_transfer_rate: 787.08"));
    }

    #[test]
    fn sections_appear_in_order() {
        let rendered = String::from_utf8(sample_report().render(&fixed_time())).unwrap();

        let inputs = rendered.find("Input Parameters:").unwrap();
        let outputs = rendered.find("Calculated Results:").unwrap();
        let notes = rendered.find("Notes:").unwrap();
        let timestamp = rendered.find("Report generated on:").unwrap();

        assert!(inputs < outputs);
        assert!(outputs < notes);
        assert!(notes < timestamp);
    }

    #[test]
    fn notes_section_is_optional() {
        let mut report = sample_report();
        report.notes = None;

        let rendered = String::from_utf8(report.render(&fixed_time())).unwrap();

        assert!(!rendered.contains("Notes:"));
    }

    #[test]
    fn timestamp_uses_the_documented_format() {
        let rendered = String::from_utf8(sample_report().render(&fixed_time())).unwrap();

        assert!(rendered.contains("Report generated on: 2026-08-06 12:30:00"));
    }

    #[test]
    fn long_reports_paginate_with_footers() {
        let mut report = sample_report();
        report.inputs = (0..120)
            .map(|i| (format!("param_{i}"), i.to_string()))
            .collect();

        let rendered = String::from_utf8(report.render(&fixed_time())).unwrap();

        assert!(rendered.contains("Page 1"));
        assert!(rendered.contains("Page 2"));
        assert!(rendered.contains('\u{c}'));
        // Every pair survives pagination.
        assert!(rendered.contains("param_0: 0"));
        assert!(rendered.contains("param_119: 119"));
    }
}
