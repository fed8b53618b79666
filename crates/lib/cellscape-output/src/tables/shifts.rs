use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, RecordBatch, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};

use cellscape_core::position::Vector;

use crate::columns::{COORD_X, COORD_Y, SHIFT_ID};
use crate::error::OutputResult;
use crate::result::ResultWriter;
use crate::writer::WriterType;

/// Wraparound shift vectors, one row per copy of the site cluster.
#[derive(Debug)]
pub struct ShiftWriter {
    shift_id: Vec<u64>,
    x: Vec<f64>,
    y: Vec<f64>,
    to_output: WriterType,
}

impl ShiftWriter {
    pub fn new(output_file: &Path) -> OutputResult<Self> {
        Ok(Self {
            to_output: WriterType::new(output_file, Self::schema())?,
            shift_id: Vec::new(),
            x: Vec::new(),
            y: Vec::new(),
        })
    }

    pub fn add_data(&mut self, shift_id: u64, shift: &Vector) {
        self.shift_id.push(shift_id);
        self.x.push(shift.x);
        self.y.push(shift.y);
    }
}

impl ResultWriter for ShiftWriter {
    fn schema() -> Schema {
        let shift_id = Field::new(SHIFT_ID, DataType::UInt64, false);
        let x = Field::new(COORD_X, DataType::Float64, false);
        let y = Field::new(COORD_Y, DataType::Float64, false);
        Schema::new(vec![shift_id, x, y])
    }

    fn write_to_file(&mut self) -> OutputResult<()> {
        let columns = vec![
            Arc::new(UInt64Array::from(std::mem::take(&mut self.shift_id))) as ArrayRef,
            Arc::new(Float64Array::from(std::mem::take(&mut self.x))) as ArrayRef,
            Arc::new(Float64Array::from(std::mem::take(&mut self.y))) as ArrayRef,
        ];
        let record_batch = RecordBatch::try_new(Arc::new(Self::schema()), columns)?;
        self.to_output.record_batch_to_file(&record_batch)
    }

    fn close_file(self) -> OutputResult<()> {
        self.to_output.close()
    }
}
