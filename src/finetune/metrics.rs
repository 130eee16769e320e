//! Evaluation numbers shown after a run.
//!
//! These are constants. Predictions are never scored against references.

/// Fixed set of evaluation metrics displayed when a run completes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSnapshot {
    pub validation_loss: f64,
    pub perplexity: f64,
    /// Token-level accuracy in percent.
    pub token_accuracy: f64,
    pub bleu: f64,
    pub rouge1: f64,
    pub rouge_l: f64,
}

/// A labelled value for the metric tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricTile {
    pub label: &'static str,
    pub value: String,
}

impl MetricsSnapshot {
    pub const FIXED: Self = Self {
        validation_loss: 0.234,
        perplexity: 12.45,
        token_accuracy: 1.9,
        bleu: 0.7564,
        rouge1: 0.654,
        rouge_l: 0.632,
    };

    pub fn fixed() -> Self {
        Self::FIXED
    }

    pub fn tiles(&self) -> [MetricTile; 3] {
        [
            MetricTile {
                label: "Validation Loss",
                value: format!("{:.3}", self.validation_loss),
            },
            MetricTile {
                label: "Perplexity",
                value: format!("{:.2}", self.perplexity),
            },
            MetricTile {
                label: "Token-Level Accuracy",
                value: format!("{:.1}%", self.token_accuracy),
            },
        ]
    }

    pub fn bleu_text(&self) -> String {
        format!("{:.4}", self.bleu)
    }

    pub fn rouge_text(&self) -> String {
        format!("{{'rouge1': {}, 'rougeL': {}}}", self.rouge1, self.rouge_l)
    }

    /// Labelled text-similarity lines shown under the tiles.
    pub fn score_lines(&self) -> [MetricTile; 2] {
        [
            MetricTile {
                label: "BLEU Score",
                value: self.bleu_text(),
            },
            MetricTile {
                label: "ROUGE Score",
                value: self.rouge_text(),
            },
        ]
    }
}

impl Default for MetricsSnapshot {
    fn default() -> Self {
        Self::FIXED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_match_dashboard_text() {
        let values: Vec<_> = MetricsSnapshot::fixed()
            .tiles()
            .into_iter()
            .map(|tile| (tile.label, tile.value))
            .collect();
        assert_eq!(
            values,
            vec![
                ("Validation Loss", "0.234".to_string()),
                ("Perplexity", "12.45".to_string()),
                ("Token-Level Accuracy", "1.9%".to_string()),
            ]
        );
    }

    #[test]
    fn score_lines_are_formatted() {
        let metrics = MetricsSnapshot::fixed();
        assert_eq!(metrics.bleu_text(), "0.7564");
        assert_eq!(metrics.rouge_text(), "{'rouge1': 0.654, 'rougeL': 0.632}");
    }

    #[test]
    fn score_lines_use_dashboard_labels() {
        let labels: Vec<_> = MetricsSnapshot::fixed()
            .score_lines()
            .iter()
            .map(|line| line.label)
            .collect();
        assert_eq!(labels, vec!["BLEU Score", "ROUGE Score"]);
    }
}
