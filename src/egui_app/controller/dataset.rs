use super::*;
use crate::finetune::UploadedDataset;
use crate::finetune::dataset::{ACCEPTED_EXTENSIONS, DatasetLoadError};
use rfd::FileDialog;
use std::path::Path;

impl EguiController {
    /// Pick a dataset file via the native dialog.
    pub fn pick_dataset_via_dialog(&mut self) {
        let Some(path) = FileDialog::new()
            .add_filter("Training dataset", &ACCEPTED_EXTENSIONS[..])
            .pick_file()
        else {
            return;
        };
        if let Err(err) = self.load_dataset_from_path(&path) {
            self.set_status(err.to_string(), StatusTone::Error);
        }
    }

    /// Read a dataset from disk and make it the current upload.
    pub fn load_dataset_from_path(&mut self, path: &Path) -> Result<(), DatasetLoadError> {
        let dataset = UploadedDataset::from_path(path)?;
        self.select_dataset(dataset);
        Ok(())
    }

    /// Accept a file dropped onto the window. In-memory bytes win over the path.
    pub fn accept_dropped_file(
        &mut self,
        name: &str,
        path: Option<&Path>,
        bytes: Option<&[u8]>,
    ) -> Result<(), DatasetLoadError> {
        let dataset = match (bytes, path) {
            (Some(bytes), _) => UploadedDataset::new(name, bytes.to_vec())?,
            (None, Some(path)) => UploadedDataset::from_path(path)?,
            (None, None) => {
                return Err(DatasetLoadError::NoContents {
                    name: name.to_string(),
                });
            }
        };
        self.select_dataset(dataset);
        Ok(())
    }

    pub fn clear_dataset(&mut self) {
        if self.ui.form.dataset.take().is_some() {
            self.set_status("Dataset removed", StatusTone::Idle);
        }
    }

    fn select_dataset(&mut self, dataset: UploadedDataset) {
        tracing::info!(
            file = dataset.file_name(),
            bytes = dataset.size_bytes(),
            "Dataset selected"
        );
        self.set_status(
            format!(
                "Loaded {} ({} bytes, {})",
                dataset.file_name(),
                dataset.size_bytes(),
                dataset.format().label()
            ),
            StatusTone::Info,
        );
        self.ui.form.dataset = Some(dataset);
    }
}
