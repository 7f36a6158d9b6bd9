use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Line-oriented CSV output with a header written on creation.
pub struct CsvWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    rows: usize,
}

impl CsvWriter {
    pub fn create<P: AsRef<Path>>(path: P, header: &str) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut writer = BufWriter::new(File::create(&path)?);
        writeln!(writer, "{}", header)?;

        Ok(Self {
            path,
            writer,
            rows: 0,
        })
    }

    pub fn write_rows<I, S>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for row in rows {
            writeln!(self.writer, "{}", row.as_ref())?;
            self.rows += 1;
        }
        Ok(())
    }

    /// Rows written so far, header excluded
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer.flush()?;
        Ok(self.path)
    }
}
