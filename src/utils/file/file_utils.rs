use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;
use crate::utils::resolve_env_var;

pub const IO_BUFFER_SIZE: usize = 256 * 1024; // 256kb

pub fn file_reader<R>(r: R) -> std::io::BufReader<R>
where
    R: std::io::Read,
{
    std::io::BufReader::with_capacity(IO_BUFFER_SIZE, r)
}

pub fn open_file(file_name: &Path) -> Result<File, std::io::Error> {
    File::open(file_name)
}

/// Reads the whole inner content on first access and replaces `${env:NAME}` placeholders.
pub struct EnvResolvingReader<R> {
    inner: Option<R>,
    resolved: Cursor<Vec<u8>>,
}

impl<R: Read> EnvResolvingReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner: Some(inner), resolved: Cursor::new(Vec::new()) }
    }
}

impl<R: Read> Read for EnvResolvingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if let Some(mut inner) = self.inner.take() {
            let mut content = String::new();
            inner.read_to_string(&mut content)?;
            self.resolved = Cursor::new(resolve_env_var(&content).into_bytes());
        }
        self.resolved.read(buf)
    }
}
