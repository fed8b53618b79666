use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, RecordBatch, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use typed_builder::TypedBuilder;

use cellscape_core::ids::{MobileId, SiteId};
use cellscape_core::position::Position;

use crate::columns::{COORD_X, COORD_Y, COORD_Z, MOBILE_ID, NEAREST_SITE, WRAPPED_X, WRAPPED_Y};
use crate::error::OutputResult;
use crate::result::ResultWriter;
use crate::writer::WriterType;

/// A placed mobile together with the site it is closest to once wrapped.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct MobileInfo {
    pub mobile_id: MobileId,
    pub position: Position,
    pub nearest_site: SiteId,
    pub wrapped: Position,
}

#[derive(Debug)]
pub struct MobileWriter {
    mobile_id: Vec<u64>,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    nearest_site: Vec<u64>,
    wrapped_x: Vec<f64>,
    wrapped_y: Vec<f64>,
    to_output: WriterType,
}

impl MobileWriter {
    pub fn new(output_file: &Path) -> OutputResult<Self> {
        Ok(Self {
            to_output: WriterType::new(output_file, Self::schema())?,
            mobile_id: Vec::new(),
            x: Vec::new(),
            y: Vec::new(),
            z: Vec::new(),
            nearest_site: Vec::new(),
            wrapped_x: Vec::new(),
            wrapped_y: Vec::new(),
        })
    }

    pub fn add_data(&mut self, info: &MobileInfo) {
        self.mobile_id.push(info.mobile_id.as_u64());
        self.x.push(info.position.x);
        self.y.push(info.position.y);
        self.z.push(info.position.z);
        self.nearest_site.push(info.nearest_site.as_u64());
        self.wrapped_x.push(info.wrapped.x);
        self.wrapped_y.push(info.wrapped.y);
    }
}

impl ResultWriter for MobileWriter {
    fn schema() -> Schema {
        let mobile_id = Field::new(MOBILE_ID, DataType::UInt64, false);
        let x = Field::new(COORD_X, DataType::Float64, false);
        let y = Field::new(COORD_Y, DataType::Float64, false);
        let z = Field::new(COORD_Z, DataType::Float64, false);
        let nearest_site = Field::new(NEAREST_SITE, DataType::UInt64, false);
        let wrapped_x = Field::new(WRAPPED_X, DataType::Float64, false);
        let wrapped_y = Field::new(WRAPPED_Y, DataType::Float64, false);
        Schema::new(vec![mobile_id, x, y, z, nearest_site, wrapped_x, wrapped_y])
    }

    fn write_to_file(&mut self) -> OutputResult<()> {
        let columns = vec![
            Arc::new(UInt64Array::from(std::mem::take(&mut self.mobile_id))) as ArrayRef,
            Arc::new(Float64Array::from(std::mem::take(&mut self.x))) as ArrayRef,
            Arc::new(Float64Array::from(std::mem::take(&mut self.y))) as ArrayRef,
            Arc::new(Float64Array::from(std::mem::take(&mut self.z))) as ArrayRef,
            Arc::new(UInt64Array::from(std::mem::take(&mut self.nearest_site))) as ArrayRef,
            Arc::new(Float64Array::from(std::mem::take(&mut self.wrapped_x))) as ArrayRef,
            Arc::new(Float64Array::from(std::mem::take(&mut self.wrapped_y))) as ArrayRef,
        ];
        let record_batch = RecordBatch::try_new(Arc::new(Self::schema()), columns)?;
        self.to_output.record_batch_to_file(&record_batch)
    }

    fn close_file(self) -> OutputResult<()> {
        self.to_output.close()
    }
}
