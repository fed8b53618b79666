use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, RecordBatch, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};

use cellscape_core::ids::SiteId;
use cellscape_core::position::Position;

use crate::columns::{COORD_X, COORD_Y, COORD_Z, SITE_ID};
use crate::error::OutputResult;
use crate::result::ResultWriter;
use crate::writer::WriterType;

#[derive(Debug)]
pub struct SiteWriter {
    site_id: Vec<u64>,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    to_output: WriterType,
}

impl SiteWriter {
    pub fn new(output_file: &Path) -> OutputResult<Self> {
        Ok(Self {
            to_output: WriterType::new(output_file, Self::schema())?,
            site_id: Vec::new(),
            x: Vec::new(),
            y: Vec::new(),
            z: Vec::new(),
        })
    }

    pub fn add_data(&mut self, site_id: SiteId, position: &Position) {
        self.site_id.push(site_id.as_u64());
        self.x.push(position.x);
        self.y.push(position.y);
        self.z.push(position.z);
    }
}

impl ResultWriter for SiteWriter {
    fn schema() -> Schema {
        let site_id = Field::new(SITE_ID, DataType::UInt64, false);
        let x = Field::new(COORD_X, DataType::Float64, false);
        let y = Field::new(COORD_Y, DataType::Float64, false);
        let z = Field::new(COORD_Z, DataType::Float64, false);
        Schema::new(vec![site_id, x, y, z])
    }

    fn write_to_file(&mut self) -> OutputResult<()> {
        let columns = vec![
            Arc::new(UInt64Array::from(std::mem::take(&mut self.site_id))) as ArrayRef,
            Arc::new(Float64Array::from(std::mem::take(&mut self.x))) as ArrayRef,
            Arc::new(Float64Array::from(std::mem::take(&mut self.y))) as ArrayRef,
            Arc::new(Float64Array::from(std::mem::take(&mut self.z))) as ArrayRef,
        ];
        let record_batch = RecordBatch::try_new(Arc::new(Self::schema()), columns)?;
        self.to_output.record_batch_to_file(&record_batch)
    }

    fn close_file(self) -> OutputResult<()> {
        self.to_output.close()
    }
}
