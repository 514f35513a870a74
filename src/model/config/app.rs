use crate::error::PlaylistError;
use crate::model::{ClassifierConfig, LogConfig, OutputConfig, RenderConfig, SourceConfig};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    pub fn prepare(&mut self) -> Result<(), PlaylistError> {
        self.source.prepare()?;
        self.output.prepare()?;
        self.classifier.prepare()?;
        self.render.prepare()?;
        Ok(())
    }
}
