//! Presence checks performed when the user presses "Start Fine-Tuning".

use std::fmt;

use thiserror::Error;

use super::dataset::UploadedDataset;
use super::hyperparams::{Hyperparameters, ModelChoice};

pub const TOKEN_WARNING: &str = "Hugging Face token is required!";
pub const MODEL_WARNING: &str = "Select a model to fine-tune!";

/// Inputs that must be present before a run may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Token,
    Model,
    Dataset,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Token => "token",
            Self::Model => "model",
            Self::Dataset => "dataset",
        })
    }
}

/// Blocking validation failure shown to the user as a single message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    #[error("Please fill in all required fields!")]
    MissingFields { missing: Vec<RequiredField> },
}

/// Everything collected by the dashboard form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FineTuneRequest {
    /// Credential string; only its presence is checked.
    pub token: String,
    pub model: ModelChoice,
    pub dataset: Option<UploadedDataset>,
    pub hyperparameters: Hyperparameters,
}

/// A request that passed validation.
#[derive(Debug, Clone, Copy)]
pub struct LaunchPlan<'a> {
    pub model: ModelChoice,
    pub dataset: &'a UploadedDataset,
    pub hyperparameters: Hyperparameters,
}

impl FineTuneRequest {
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.token.is_empty() {
            missing.push(RequiredField::Token);
        }
        if !self.model.is_selected() {
            missing.push(RequiredField::Model);
        }
        if self.dataset.is_none() {
            missing.push(RequiredField::Dataset);
        }
        missing
    }

    /// Sidebar warnings, shown regardless of whether a run was requested.
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.token.is_empty() {
            warnings.push(TOKEN_WARNING);
        }
        if !self.model.is_selected() {
            warnings.push(MODEL_WARNING);
        }
        warnings
    }

    pub fn validate(&self) -> Result<LaunchPlan<'_>, LaunchError> {
        let missing = self.missing_fields();
        match &self.dataset {
            Some(dataset) if missing.is_empty() => Ok(LaunchPlan {
                model: self.model,
                dataset,
                hyperparameters: self.hyperparameters.normalized(),
            }),
            _ => Err(LaunchError::MissingFields { missing }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_request() -> FineTuneRequest {
        FineTuneRequest {
            token: "hf_secret".into(),
            model: ModelChoice::Mistral,
            dataset: Some(UploadedDataset::new("val.jsonl", Vec::new()).unwrap()),
            hyperparameters: Hyperparameters::default(),
        }
    }

    #[test]
    fn complete_request_validates() {
        let request = complete_request();
        let plan = request.validate().unwrap();
        assert_eq!(plan.model, ModelChoice::Mistral);
        assert_eq!(plan.dataset.file_name(), "val.jsonl");
        assert!(request.warnings().is_empty());
    }

    #[test]
    fn each_missing_field_blocks_the_run() {
        let mut no_token = complete_request();
        no_token.token.clear();
        let mut no_model = complete_request();
        no_model.model = ModelChoice::Unselected;
        let mut no_dataset = complete_request();
        no_dataset.dataset = None;

        for (request, field) in [
            (no_token, RequiredField::Token),
            (no_model, RequiredField::Model),
            (no_dataset, RequiredField::Dataset),
        ] {
            let err = request.validate().unwrap_err();
            assert_eq!(
                err,
                LaunchError::MissingFields {
                    missing: vec![field]
                }
            );
            assert_eq!(err.to_string(), "Please fill in all required fields!");
        }
    }

    #[test]
    fn whitespace_token_counts_as_present() {
        let mut request = complete_request();
        request.token = " ".into();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn sidebar_warnings_track_token_and_model() {
        let request = FineTuneRequest::default();
        assert_eq!(request.warnings(), vec![TOKEN_WARNING, MODEL_WARNING]);
        assert_eq!(
            request.missing_fields(),
            vec![
                RequiredField::Token,
                RequiredField::Model,
                RequiredField::Dataset
            ]
        );
    }
}
