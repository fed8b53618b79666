use std::fs;
use std::path::Path;

use arrow::datatypes::Schema;
use log::info;
use serde::Deserialize;

use crate::error::OutputResult;
use crate::tables::mobiles::MobileWriter;
use crate::tables::shifts::ShiftWriter;
use crate::tables::sites::SiteWriter;

#[derive(Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputType {
    Sites,
    Mobiles,
    ShiftVectors,
}

#[derive(Deserialize, Debug, Clone)]
pub struct OutputSettings {
    pub output_path: String,
    pub outputs: Vec<Outputs>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Outputs {
    pub output_type: OutputType,
    pub output_filename: String,
}

impl OutputSettings {
    /// File name of the last entry of the given type.
    pub fn file_name_of(&self, output_type: OutputType) -> Option<&str> {
        self.outputs
            .iter()
            .filter(|output| output.output_type == output_type)
            .last()
            .map(|output| output.output_filename.as_str())
    }
}

pub trait ResultWriter {
    fn schema() -> Schema;
    fn write_to_file(&mut self) -> OutputResult<()>;
    fn close_file(self) -> OutputResult<()>;
}

/// Writers for every table requested in the output settings.
#[derive(Debug)]
pub struct Results {
    pub sites: Option<SiteWriter>,
    pub mobiles: Option<MobileWriter>,
    pub shifts: Option<ShiftWriter>,
}

impl Results {
    /// Output files go to `<base_dir>/<output_path>`.
    pub fn new(base_dir: &Path, output_settings: &OutputSettings) -> OutputResult<Self> {
        let output_path = base_dir.join(&output_settings.output_path);
        if !output_path.exists() {
            fs::create_dir_all(&output_path)?;
        }

        let sites = output_settings
            .file_name_of(OutputType::Sites)
            .map(|name| SiteWriter::new(&output_path.join(name)))
            .transpose()?;
        let mobiles = output_settings
            .file_name_of(OutputType::Mobiles)
            .map(|name| MobileWriter::new(&output_path.join(name)))
            .transpose()?;
        let shifts = output_settings
            .file_name_of(OutputType::ShiftVectors)
            .map(|name| ShiftWriter::new(&output_path.join(name)))
            .transpose()?;
        info!("Writing results to {}", output_path.display());
        Ok(Self {
            sites,
            mobiles,
            shifts,
        })
    }

    pub fn write_to_file(&mut self) -> OutputResult<()> {
        if let Some(writer) = &mut self.sites {
            writer.write_to_file()?;
        }
        if let Some(writer) = &mut self.mobiles {
            writer.write_to_file()?;
        }
        if let Some(writer) = &mut self.shifts {
            writer.write_to_file()?;
        }
        Ok(())
    }

    pub fn close_files(self) -> OutputResult<()> {
        if let Some(writer) = self.sites {
            writer.close_file()?;
        }
        if let Some(writer) = self.mobiles {
            writer.close_file()?;
        }
        if let Some(writer) = self.shifts {
            writer.close_file()?;
        }
        Ok(())
    }
}
