//! Handling the raybench CLI
//!
//! This module handles the command line parsing and the application of the given options onto a
//! bench.
use crate::{
    bench::OpticalBench,
    degree,
    document::BenchDocument,
    error::{BenchError, BenchResult},
    nanometer,
    segment::RaySegment,
};
use clap::Parser;
use std::{fmt::Write, path::PathBuf};

/// Command line arguments for the raybench application.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// file path of the bench document (yaml), which should be read in. if not given, an empty
    /// reference bench is used
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// launch angle of the laser in degrees (overrides the document)
    #[arg(short, long, allow_hyphen_values = true)]
    pub angle: Option<f64>,

    /// wavelength of the laser in nm (overrides the document)
    #[arg(short, long)]
    pub wavelength: Option<f64>,

    /// write the traced segments as csv file to the given path
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// render the bench and the ray as svg image to the given path
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// save the (possibly modified) bench document to the given path
    #[arg(long)]
    pub save: Option<PathBuf>,
}
impl Args {
    /// Load the bench from the given document file or create the reference bench.
    ///
    /// The laser overrides given on the command line are applied afterwards.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the document cannot be read or parsed.
    ///   - a laser override is not finite.
    pub fn load_bench(&self) -> BenchResult<OpticalBench> {
        let mut bench = match &self.file {
            Some(path) => BenchDocument::from_file(path)?.into_bench()?,
            None => OpticalBench::default(),
        };
        self.apply_overrides(&mut bench)?;
        Ok(bench)
    }
    /// Apply the laser overrides of these [`Args`] onto the given bench.
    ///
    /// # Errors
    ///
    /// This function will return an error if an override value is not finite.
    pub fn apply_overrides(&self, bench: &mut OpticalBench) -> BenchResult<()> {
        if let Some(angle) = self.angle {
            bench
                .laser_mut()
                .set_angle(degree!(angle))
                .map_err(|e| BenchError::Console(format!("invalid angle: {e}")))?;
        }
        if let Some(wavelength) = self.wavelength {
            bench
                .laser_mut()
                .set_wavelength(nanometer!(wavelength))
                .map_err(|e| BenchError::Console(format!("invalid wavelength: {e}")))?;
        }
        Ok(())
    }
}

/// Create a human readable summary of the traced ray.
#[must_use]
pub fn segment_summary(bench: &OpticalBench, segments: &[RaySegment]) -> String {
    let mut summary = format!(
        "laser: {}\nelements: {}\nsegments: {}\n",
        bench.laser(),
        bench.elements().len(),
        segments.len()
    );
    for (idx, segment) in segments.iter().enumerate() {
        let _ = writeln!(summary, "{idx:>3}: {segment}");
    }
    summary
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::element::ElementKind;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use tempfile::NamedTempFile;
    #[test]
    fn parse() {
        let args = Args::try_parse_from([
            "raybench",
            "--file",
            "bench.yaml",
            "--angle",
            "-12.5",
            "--wavelength",
            "633",
            "--csv",
            "ray.csv",
            "--svg",
            "bench.svg",
        ])
        .unwrap();
        assert_eq!(args.file, Some(PathBuf::from("bench.yaml")));
        assert_eq!(args.angle, Some(-12.5));
        assert_eq!(args.wavelength, Some(633.0));
        assert_eq!(args.csv, Some(PathBuf::from("ray.csv")));
        assert_eq!(args.svg, Some(PathBuf::from("bench.svg")));
        assert!(args.save.is_none());
    }
    #[test]
    fn parse_empty() {
        let args = Args::try_parse_from(["raybench"]).unwrap();
        assert!(args.file.is_none());
        assert!(args.angle.is_none());
        assert!(args.wavelength.is_none());
    }
    #[test]
    fn parse_invalid() {
        assert!(Args::try_parse_from(["raybench", "--angle", "abc"]).is_err());
        assert!(Args::try_parse_from(["raybench", "--unknown"]).is_err());
    }
    #[test]
    fn load_default_bench() {
        let bench = Args::default().load_bench().unwrap();
        assert_eq!(bench, OpticalBench::default());
    }
    #[test]
    fn load_bench_with_overrides() {
        let mut bench = OpticalBench::default();
        bench.add_element(ElementKind::ConvexLens, 300.0);
        let file = NamedTempFile::new().unwrap();
        BenchDocument::from(&bench).save_to_file(file.path()).unwrap();
        let args = Args {
            file: Some(file.path().to_path_buf()),
            angle: Some(370.0),
            wavelength: Some(650.0),
            ..Default::default()
        };
        let loaded = args.load_bench().unwrap();
        assert_eq!(loaded.elements().len(), 1);
        assert_abs_diff_eq!(loaded.laser().angle_deg(), 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(loaded.laser().wavelength_nm(), 650.0, epsilon = 1e-9);
    }
    #[test]
    fn load_bench_missing_file() {
        let args = Args {
            file: Some(PathBuf::from("./invalid_file_path/bench.yaml")),
            ..Default::default()
        };
        assert_matches!(args.load_bench(), Err(BenchError::Document(_)));
    }
    #[test]
    fn invalid_override() {
        let args = Args {
            angle: Some(f64::NAN),
            ..Default::default()
        };
        let mut bench = OpticalBench::default();
        assert_matches!(
            args.apply_overrides(&mut bench),
            Err(BenchError::Console(_))
        );
    }
    #[test]
    fn summary() {
        let bench = OpticalBench::default();
        let summary = segment_summary(&bench, &bench.trace());
        assert_eq!(
            summary,
            "laser: angle: 0.0°, wavelength: 532 nm\nelements: 0\nsegments: 1\n  0: (50.00, 200.00) -> (800.00, 200.00)\n"
        );
    }
}
