use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::convert::AsRef;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub fn load_from_file<T: DeserializeOwned, P: AsRef<Path>>(
    path: P,
) -> Result<T> {
    let file = OpenOptions::new().read(true).open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn create<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    Ok(BufWriter::new(file))
}

pub fn save_to_file<T: Serialize, P: AsRef<Path>>(
    value: &T,
    path: P,
) -> Result<()> {
    let mut writer = create(path)?;
    serde_json::to_writer(&mut writer, value)?;
    Ok(writer.flush()?)
}

pub fn save_to_file_pretty<T: Serialize, P: AsRef<Path>>(
    value: &T,
    path: P,
) -> Result<()> {
    let mut writer = create(path)?;
    serde_json::to_writer_pretty(&mut writer, value)?;
    Ok(writer.flush()?)
}
