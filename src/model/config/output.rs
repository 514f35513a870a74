use crate::error::{config_err, PlaylistError};
use crate::utils::default_output_file;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output_file")]
    pub filename: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { filename: default_output_file() }
    }
}

impl OutputConfig {
    pub fn prepare(&mut self) -> Result<(), PlaylistError> {
        self.filename = self.filename.trim().to_string();
        if self.filename.is_empty() {
            return Err(config_err!("output filename can't be empty"));
        }
        Ok(())
    }
}
