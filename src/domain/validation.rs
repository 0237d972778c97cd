// Structural checks for dashboard payloads
use super::dashboard::{DashboardData, Funnel, LabeledSeries};
use serde::Serialize;
use thiserror::Error;

const PERCENT_RANGE: (f64, f64) = (0.0, 100.0);
const RATING_RANGE: (f64, f64) = (0.0, 5.0);

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationError {
    #[error("{field}: expected {expected} entries, found {actual}")]
    LengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("{field}: {value} outside [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Ordering problems in the funnel. Reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("funnel stage {stage} ({count}) exceeds previous stage {previous} ({previous_count})")]
pub struct DataQualityWarning {
    pub previous: &'static str,
    pub previous_count: u32,
    pub stage: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<DataQualityWarning>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn check_len(&mut self, field: impl Into<String>, expected: usize, actual: usize) {
        if expected != actual {
            self.errors.push(ValidationError::LengthMismatch {
                field: field.into(),
                expected,
                actual,
            });
        }
    }

    fn check_range(&mut self, field: impl Into<String>, value: f64, (min, max): (f64, f64)) {
        if !(min..=max).contains(&value) {
            self.errors.push(ValidationError::OutOfRange {
                field: field.into(),
                value,
                min,
                max,
            });
        }
    }

    fn check_series(&mut self, field: &str, series: &LabeledSeries) {
        self.check_len(format!("{field}.data"), series.labels.len(), series.data.len());
    }

    fn check_funnel(&mut self, funnel: &Funnel) {
        for pair in funnel.stages().windows(2) {
            let (previous, previous_count) = pair[0];
            let (stage, count) = pair[1];
            if count > previous_count {
                self.warnings.push(DataQualityWarning {
                    previous,
                    previous_count,
                    stage,
                    count,
                });
            }
        }
    }
}

impl DashboardData {
    /// Checks parallel-array cardinality and value bounds.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        for (name, channel) in self.social.iter() {
            report.check_range(
                format!("social.{name}.conversionRate"),
                channel.conversion_rate,
                PERCENT_RANGE,
            );
        }
        report.check_range("overview.conversionRate", self.overview.conversion_rate, PERCENT_RANGE);

        report.check_funnel(&self.funnel);

        report.check_series("requestTypes", &self.request_types);
        report.check_series("stepTimes", &self.step_times);

        let sources = &self.lead_sources;
        report.check_len("leadSources.data", sources.labels.len(), sources.data.len());
        report.check_len("leadSources.colors", sources.labels.len(), sources.colors.len());

        let daily = &self.daily_performance;
        report.check_len("dailyPerformance.leads", daily.labels.len(), daily.leads.len());
        report.check_len(
            "dailyPerformance.conversions",
            daily.labels.len(),
            daily.conversions.len(),
        );

        let advanced = &self.advanced_metrics;
        report.check_series("advancedMetrics.churn", &advanced.churn);
        report.check_series("advancedMetrics.interests", &advanced.interests);
        for (i, doctor) in advanced.doctor_ranking.iter().enumerate() {
            report.check_range(
                format!("advancedMetrics.doctorRanking[{i}].rating"),
                doctor.rating,
                RATING_RANGE,
            );
        }

        let heatmap = &advanced.heatmap;
        report.check_len("advancedMetrics.heatmap.data", heatmap.days.len(), heatmap.data.len());
        for (day, row) in heatmap.data.iter().enumerate() {
            report.check_len(
                format!("advancedMetrics.heatmap.data[{day}]"),
                heatmap.hours.len(),
                row.len(),
            );
            for (hour, cell) in row.iter().enumerate() {
                report.check_range(
                    format!("advancedMetrics.heatmap.data[{day}][{hour}]"),
                    f64::from(*cell),
                    PERCENT_RANGE,
                );
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fixture::dashboard_data;

    fn sample() -> DashboardData {
        dashboard_data().clone()
    }

    #[test]
    fn test_fixture_is_valid() {
        let report = dashboard_data().validate();
        assert!(report.is_valid(), "{:?}", report.errors);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_series_length_mismatch() {
        let mut data = sample();
        data.request_types.data.pop();

        let report = data.validate();
        assert_eq!(
            report.errors,
            vec![ValidationError::LengthMismatch {
                field: "requestTypes.data".to_string(),
                expected: 5,
                actual: 4,
            }]
        );
    }

    #[test]
    fn test_lead_source_colors_mismatch() {
        let mut data = sample();
        data.lead_sources.colors.push("#000000".to_string());

        let report = data.validate();
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].to_string().starts_with("leadSources.colors"));
    }

    #[test]
    fn test_heatmap_ragged_row() {
        let mut data = sample();
        data.advanced_metrics.heatmap.data[2].push(10);
        data.advanced_metrics.heatmap.days.pop();

        let report = data.validate();
        let fields: Vec<String> = report
            .errors
            .iter()
            .map(|e| match e {
                ValidationError::LengthMismatch { field, .. } => field.clone(),
                ValidationError::OutOfRange { field, .. } => field.clone(),
            })
            .collect();
        assert_eq!(
            fields,
            ["advancedMetrics.heatmap.data", "advancedMetrics.heatmap.data[2]"]
        );
    }

    #[test]
    fn test_out_of_range_values() {
        let mut data = sample();
        data.social.whatsapp.conversion_rate = 120.0;
        data.advanced_metrics.doctor_ranking[0].rating = 5.5;
        data.advanced_metrics.heatmap.data[0][0] = 101;

        let report = data.validate();
        assert_eq!(report.errors.len(), 3);
        assert!(report.errors.iter().all(|e| matches!(e, ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn test_funnel_inversion_is_warning() {
        let mut data = sample();
        data.funnel.confirmed = data.funnel.appointments + 1;

        let report = data.validate();
        assert!(report.is_valid());
        assert_eq!(
            report.warnings,
            vec![DataQualityWarning {
                previous: "appointments",
                previous_count: 387,
                stage: "confirmed",
                count: 388,
            }]
        );
    }
}
