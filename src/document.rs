#![warn(missing_docs)]
//! Reading and writing of bench documents.
//!
//! A [`BenchDocument`] is the persisted form of an [`OpticalBench`]. It is stored as YAML and
//! contains the bench geometry, the laser settings and the list of elements.
use crate::{
    bench::OpticalBench,
    element::OpticalElement,
    error::{BenchError, BenchResult},
    geometry::BenchGeometry,
    laser::Laser,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

/// Version of the document format written by this crate.
pub const FILE_VERSION: &str = "1";

fn default_file_version() -> String {
    FILE_VERSION.to_string()
}

/// The persisted form of an optical bench.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchDocument {
    #[serde(default = "default_file_version")]
    file_version: String,
    #[serde(default)]
    geometry: BenchGeometry,
    #[serde(default)]
    laser: Laser,
    #[serde(default)]
    elements: Vec<OpticalElement>,
}
impl Default for BenchDocument {
    fn default() -> Self {
        Self {
            file_version: default_file_version(),
            geometry: BenchGeometry::default(),
            laser: Laser::default(),
            elements: Vec::new(),
        }
    }
}
impl BenchDocument {
    /// Create a new [`BenchDocument`] from a yaml file at the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the given path is not found or readable.
    ///   - the parsing / deserialization of the file failed.
    pub fn from_file(path: &Path) -> BenchResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            BenchError::Document(format!("cannot read file {} : {}", path.display(), e))
        })?;
        info!("Read bench document {}", path.display());
        Self::from_string(&contents)
    }
    /// Create a new [`BenchDocument`] from the given yaml string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the parsing of the string failed or the contained
    /// geometry is invalid.
    pub fn from_string(file_string: &str) -> BenchResult<Self> {
        let document: Self = serde_yaml::from_str(file_string)
            .map_err(|e| BenchError::Document(format!("parsing of document failed: {e}")))?;
        if document.file_version != FILE_VERSION {
            warn!(
                "read version '{}' <-> program file version '{}'",
                document.file_version, FILE_VERSION
            );
        }
        Ok(document)
    }
    /// Save this [`BenchDocument`] to a yaml file with the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the serialization of the document failed.
    ///   - the file path cannot be created.
    ///   - it cannot write into the file (e.g. no space).
    pub fn save_to_file(&self, path: &Path) -> BenchResult<()> {
        let serialized = self.to_yaml_string()?;
        let mut output = File::create(path).map_err(|e| {
            BenchError::Document(format!(
                "could not create file path: {}: {}",
                path.display(),
                e
            ))
        })?;
        write!(output, "{serialized}").map_err(|e| {
            BenchError::Document(format!(
                "writing to file path {} failed: {}",
                path.display(),
                e
            ))
        })?;
        info!("Bench document written to {}", path.display());
        Ok(())
    }
    /// Return the yaml representation of this [`BenchDocument`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the serialization fails.
    pub fn to_yaml_string(&self) -> BenchResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| BenchError::Document(format!("serialization of document failed: {e}")))
    }
    /// Returns the file version of this [`BenchDocument`].
    #[must_use]
    pub fn file_version(&self) -> &str {
        &self.file_version
    }
    /// Returns the elements of this [`BenchDocument`].
    #[must_use]
    pub fn elements(&self) -> &[OpticalElement] {
        &self.elements
    }
    /// Convert this [`BenchDocument`] into an [`OpticalBench`].
    ///
    /// Element positions and focal lengths are sanitized on the way.
    ///
    /// # Errors
    ///
    /// This function will return an error if the document contains duplicate element ids.
    pub fn into_bench(self) -> BenchResult<OpticalBench> {
        let mut bench = OpticalBench::new(self.geometry);
        bench.set_laser(self.laser);
        for element in self.elements {
            bench.insert_element(element)?;
        }
        Ok(bench)
    }
}
impl From<&OpticalBench> for BenchDocument {
    fn from(bench: &OpticalBench) -> Self {
        Self {
            file_version: default_file_version(),
            geometry: *bench.geometry(),
            laser: *bench.laser(),
            elements: bench.elements().to_vec(),
        }
    }
}
