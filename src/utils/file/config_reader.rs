use crate::error::{config_err, PlaylistError};
use crate::model::Config;
use crate::utils::{file_reader, open_file, EnvResolvingReader, CONSTANTS};
use log::error;
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

enum EitherReader<L, R> {
    Left(L),
    Right(R),
}

impl<L: Read, R: Read> Read for EitherReader<L, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            EitherReader::Left(reader) => reader.read(buf),
            EitherReader::Right(reader) => reader.read(buf),
        }
    }
}

pub fn config_file_reader(file: File, resolve_env: bool) -> impl Read
{
    if resolve_env {
        EitherReader::Left(EnvResolvingReader::new(file_reader(file)))
    } else {
        EitherReader::Right(BufReader::new(file))
    }
}

/// Reads and validates the yaml configuration.
/// Without a config file the built-in defaults are used.
pub fn read_config(config_file: Option<&str>) -> Result<Config, PlaylistError> {
    let mut config = match config_file {
        None => Config::default(),
        Some(config_file) => match open_file(&PathBuf::from(config_file)) {
            Ok(file) => {
                let maybe_config: Result<Config, _> = serde_yaml::from_reader(config_file_reader(file, true));
                match maybe_config {
                    Ok(config) => config,
                    Err(err) => return Err(config_err!("Can't read the config file: {config_file}: {err}")),
                }
            }
            Err(err) => return Err(config_err!("Can't read the config file: {config_file}: {err}")),
        },
    };
    config.prepare()?;
    Ok(config)
}

pub fn resolve_env_var(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    CONSTANTS.re_env_var.replace_all(value, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_else(|e| {
            error!("Could not resolve env var '{var_name}': {e}");
            format!("${{env:{var_name}}}")
        })
    }).to_string()
}
