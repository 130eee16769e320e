//! Mock predictions and the evaluation inputs derived from validation records.

use super::dataset::DatasetRecord;

/// Marker appended to every essay to form a mock prediction.
pub const GENERATED_SAMPLE_MARKER: &str = " [generated sample]";

/// A mock model output derived from one dataset record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRecord {
    pub text: String,
}

impl PredictionRecord {
    pub fn from_record(record: &DatasetRecord) -> Self {
        Self {
            text: format!("{}{GENERATED_SAMPLE_MARKER}", record.essay),
        }
    }
}

/// Inputs and BLEU-style references extracted from the validation records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationSet {
    pub sample_inputs: Vec<String>,
    /// One single-element reference list per record.
    pub references: Vec<Vec<String>>,
}

impl EvaluationSet {
    pub fn from_records(records: &[DatasetRecord]) -> Self {
        Self {
            sample_inputs: records.iter().map(|r| r.essay.clone()).collect(),
            references: records
                .iter()
                .map(|r| vec![r.description.clone()])
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_appends_marker_to_essay() {
        let record = DatasetRecord::new("Water boils.", "Phase change.");
        assert_eq!(
            PredictionRecord::from_record(&record).text,
            "Water boils. [generated sample]"
        );
    }

    #[test]
    fn empty_essay_still_gets_marker() {
        let record = DatasetRecord::new("", "nothing");
        assert_eq!(PredictionRecord::from_record(&record).text, " [generated sample]");
    }

    #[test]
    fn evaluation_set_wraps_each_reference() {
        let set = EvaluationSet::from_records(&[
            DatasetRecord::new("a", "b"),
            DatasetRecord::new("c", "d"),
        ]);
        assert_eq!(set.sample_inputs, vec!["a", "c"]);
        assert_eq!(set.references, vec![vec!["b".to_string()], vec!["d".to_string()]]);
    }
}
