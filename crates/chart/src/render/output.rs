use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::render::error::RenderError;
use crate::render::OutputStream;

pub struct OutputFile {
    file: File,
}

impl OutputFile {
    pub fn new(path: &Path, file_name: &str) -> Result<OutputFile, RenderError> {
        let path = path.join(file_name);
        let file = File::create(path)?;
        Ok(Self { file })
    }
}

impl OutputStream for OutputFile {
    fn write(&mut self, data: &str) -> Result<(), RenderError> {
        self.file.write_all(data.as_bytes())?;
        Ok(())
    }
}

/// An in-memory stream, used to assemble document fragments and by the
/// rendering tests.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    buffer: String,
}

impl OutputBuffer {
    pub fn new() -> OutputBuffer {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl OutputStream for OutputBuffer {
    fn write(&mut self, data: &str) -> Result<(), RenderError> {
        self.buffer.push_str(data);
        Ok(())
    }
}
