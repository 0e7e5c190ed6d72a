use crate::application::config::MachineConfig;
use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parses a machine configuration from any JSON source.
pub fn read_config<R: Read>(source: R) -> Result<MachineConfig> {
    Ok(serde_json::from_reader(source)?)
}

/// Opens and parses a machine configuration file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<MachineConfig> {
    let file = File::open(path)?;
    read_config(BufReader::new(file))
}
