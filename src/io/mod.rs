//! Reading and writing of configuration and result files.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{self, format_err};
use bincode;
use serde::{de::DeserializeOwned, Serialize};
use serde_yaml;

pub(crate) mod format;


/// An enumerated type for result file types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HydrogenFileType {
    /// Variant for binary files containing orbital-shape results.
    Shp,

    /// Variant for binary files containing density-slice results.
    Den,

    /// Variant for binary files containing radial-distribution results.
    Rad,
}

impl HydrogenFileType {
    /// Returns the extension of the file type.
    pub fn ext(&self) -> String {
        match self {
            HydrogenFileType::Shp => "hydro.shp".to_string(),
            HydrogenFileType::Den => "hydro.den".to_string(),
            HydrogenFileType::Rad => "hydro.rad".to_string(),
        }
    }

    /// Returns the full path of a file of this type named `name`.
    pub fn path_for<P: AsRef<Path>>(&self, name: P) -> PathBuf {
        let mut path = name.as_ref().to_path_buf();
        path.set_extension(self.ext());
        path
    }
}

/// Reads a binary result file and deserialises it into an appropriate structure.
///
/// # Arguments
///
/// * `name` - The name of the file to be read in (without its result-specific extension).
/// * `file_type` - The type of the result file to be read in.
///
/// # Returns
///
/// A `Result` containing the structure deserialised from the read-in file.
pub fn read_hydrogen_binary<T, P: AsRef<Path>>(
    name: P,
    file_type: HydrogenFileType,
) -> Result<T, anyhow::Error>
where
    T: DeserializeOwned,
{
    let path = file_type.path_for(name);
    let mut reader = BufReader::new(File::open(path).map_err(|err| format_err!(err))?);
    bincode::deserialize_from(&mut reader).map_err(|err| format_err!(err))
}

/// Serialises a structure and writes it into a binary result file.
///
/// # Arguments
///
/// * `name` - The name of the file to be written (without its result-specific extension).
/// * `file_type` - The type of the result file to be written.
/// * `value` - The structure to be serialised.
///
/// # Returns
///
/// A `Result` indicating if the serialisation and writing processes have been successful.
pub fn write_hydrogen_binary<T, P: AsRef<Path>>(
    name: P,
    file_type: HydrogenFileType,
    value: &T,
) -> Result<(), anyhow::Error>
where
    T: Serialize,
{
    let path = file_type.path_for(name);
    let mut writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(&mut writer, value).map_err(|err| format_err!(err))
}

/// Reads a YAML configuration file and deserialises it into an appropriate structure.
///
/// # Arguments
///
/// * `name` - The name of the file to be read in (with its `.yml` or `.yaml` extension).
///
/// # Returns
///
/// A `Result` containing the structure deserialised from the read-in file.
pub fn read_hydrogen_yaml<T, P: AsRef<Path>>(name: P) -> Result<T, anyhow::Error>
where
    T: DeserializeOwned,
{
    let mut reader = BufReader::new(File::open(name).map_err(|err| format_err!(err))?);
    serde_yaml::from_reader(&mut reader).map_err(|err| format_err!(err))
}

/// Serialises a structure and writes it into a YAML configuration file.
///
/// # Arguments
///
/// * `name` - The name of the YAML file to be written (without extensions). The resulting file
/// will have the `.yml` extension.
///
/// # Returns
///
/// A `Result` indicating if the serialisation and writing processes have been successful.
pub fn write_hydrogen_yaml<T, P: AsRef<Path>>(name: P, value: &T) -> Result<(), anyhow::Error>
where
    T: Serialize,
{
    let mut path = name.as_ref().to_path_buf();
    path.set_extension("yml");
    let mut writer = BufWriter::new(File::create(path)?);
    serde_yaml::to_writer(&mut writer, value).map_err(|err| format_err!(err))
}
