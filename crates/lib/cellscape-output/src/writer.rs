use std::fs::File;
use std::path::Path;

use arrow::csv::Writer;
use arrow::datatypes::{Schema, SchemaRef};
use arrow::record_batch::{RecordBatch, RecordBatchWriter};
use log::debug;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::error::{OutputError, OutputResult};

/// File writer picked from the extension of the output file.
#[derive(Debug)]
pub enum WriterType {
    Parquet(WriterParquet),
    Csv(WriterCsv),
}

impl WriterType {
    /// Replaces any existing file at `file_name`.
    pub fn new(file_name: &Path, schema: Schema) -> OutputResult<Self> {
        let extension = file_name.extension().and_then(|ext| ext.to_str());
        let writer = match extension {
            Some("parquet") => {
                remove_existing(file_name)?;
                WriterType::Parquet(WriterParquet::new(file_name, schema)?)
            }
            Some("csv") => {
                remove_existing(file_name)?;
                WriterType::Csv(WriterCsv::new(file_name)?)
            }
            _ => return Err(OutputError::UnsupportedExtension(file_name.to_path_buf())),
        };
        debug!("Writing {}", file_name.display());
        Ok(writer)
    }

    pub fn record_batch_to_file(&mut self, record_batch: &RecordBatch) -> OutputResult<()> {
        match self {
            WriterType::Parquet(parquet) => parquet.writer.write(record_batch)?,
            WriterType::Csv(csv) => csv.writer.write(record_batch)?,
        }
        Ok(())
    }

    pub fn close(self) -> OutputResult<()> {
        match self {
            WriterType::Parquet(parquet) => parquet.close(),
            WriterType::Csv(csv) => csv.close(),
        }
    }
}

fn remove_existing(file_name: &Path) -> OutputResult<()> {
    if file_name.exists() {
        std::fs::remove_file(file_name)?;
    }
    Ok(())
}

#[derive(Debug)]
pub struct WriterParquet {
    pub writer: ArrowWriter<File>,
}

impl WriterParquet {
    fn new(file_name: &Path, schema: Schema) -> OutputResult<Self> {
        let props = WriterProperties::builder()
            .set_compression(Compression::SNAPPY)
            .build();
        let output_file = File::create(file_name)?;
        let writer = ArrowWriter::try_new(output_file, SchemaRef::from(schema), Some(props))?;
        Ok(Self { writer })
    }

    pub fn close(self) -> OutputResult<()> {
        self.writer.close()?;
        Ok(())
    }
}

#[derive(Debug)]
pub struct WriterCsv {
    pub writer: Writer<File>,
}

impl WriterCsv {
    fn new(file_name: &Path) -> OutputResult<Self> {
        let writer = Writer::new(File::create(file_name)?);
        Ok(Self { writer })
    }

    pub fn close(self) -> OutputResult<()> {
        self.writer.close()?;
        Ok(())
    }
}
