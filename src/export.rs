#![warn(missing_docs)]
//! Export of traced rays.
//!
//! Segments can be written as CSV table or rendered together with the bench as SVG image.
use crate::{
    bench::OpticalBench,
    element::ElementKind,
    error::{BenchError, BenchResult},
    segment::RaySegment,
    utils::f64_to_u32,
};
use log::info;
use plotters::{
    chart::ChartBuilder,
    element::{PathElement, Rectangle},
    prelude::{IntoDrawingArea, SVGBackend},
    series::LineSeries,
    style::{Color, RGBColor, BLACK, WHITE},
};
use serde::Serialize;
use std::{io::Write, path::Path};

const AXIS_COLOR: RGBColor = RGBColor(200, 200, 200);
const LENS_COLOR: RGBColor = RGBColor(70, 130, 180);
const MIRROR_COLOR: RGBColor = RGBColor(90, 90, 90);

/// One row of the CSV export.
#[derive(Serialize)]
struct SegmentRecord {
    x_start: f64,
    y_start: f64,
    x_end: f64,
    y_end: f64,
    r: u8,
    g: u8,
    b: u8,
}
impl From<&RaySegment> for SegmentRecord {
    fn from(segment: &RaySegment) -> Self {
        let color = segment.color();
        Self {
            x_start: segment.start().x,
            y_start: segment.start().y,
            x_end: segment.end().x,
            y_end: segment.end().y,
            r: color.0,
            g: color.1,
            b: color.2,
        }
    }
}

/// Write the given segments as CSV table.
///
/// The table has the header `x_start,y_start,x_end,y_end,r,g,b` followed by one row per segment.
///
/// # Errors
///
/// This function will return an error if writing to the given writer fails.
pub fn write_segments_csv<W: Write>(segments: &[RaySegment], writer: W) -> BenchResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if segments.is_empty() {
        wtr.write_record(["x_start", "y_start", "x_end", "y_end", "r", "g", "b"])
            .map_err(|e| BenchError::Export(format!("writing csv header failed: {e}")))?;
    }
    for segment in segments {
        wtr.serialize(SegmentRecord::from(segment))
            .map_err(|e| BenchError::Export(format!("writing csv record failed: {e}")))?;
    }
    wtr.flush()
        .map_err(|e| BenchError::Export(format!("flushing csv writer failed: {e}")))?;
    Ok(())
}

/// Write the given segments as CSV file to the given path.
///
/// # Errors
///
/// This function will return an error if the file cannot be created or written.
pub fn save_segments_csv(segments: &[RaySegment], path: &Path) -> BenchResult<()> {
    let file = std::fs::File::create(path).map_err(|e| {
        BenchError::Export(format!(
            "could not create file path: {}: {}",
            path.display(),
            e
        ))
    })?;
    write_segments_csv(segments, file)?;
    info!("{} segments written to {}", segments.len(), path.display());
    Ok(())
}

const fn kind_color(kind: ElementKind) -> RGBColor {
    if kind.is_mirror() {
        MIRROR_COLOR
    } else {
        LENS_COLOR
    }
}

/// Render the bench together with the given ray segments into a SVG file.
///
/// The image shows the bench outline, the optical axis, every element as its aperture line and
/// the ray segments in their color. One bench unit corresponds to one pixel.
///
/// # Errors
///
/// This function will return an error if the drawing or writing of the file fails.
pub fn plot_bench_svg(bench: &OpticalBench, segments: &[RaySegment], path: &Path) -> BenchResult<()> {
    let geometry = bench.geometry();
    let (width, height) = (geometry.width(), geometry.height());
    let root = SVGBackend::new(path, (f64_to_u32(width), f64_to_u32(height))).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| BenchError::Export(format!("filling background failed: {e}")))?;
    let mut chart = ChartBuilder::on(&root)
        .build_cartesian_2d(0.0..width, 0.0..height)
        .map_err(|e| BenchError::Export(format!("creating chart failed: {e}")))?;

    let axis = geometry.optical_axis();
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(0.0, 0.0), (width, height)],
            BLACK.stroke_width(1),
        )))
        .map_err(|e| BenchError::Export(format!("drawing outline failed: {e}")))?;
    chart
        .draw_series(LineSeries::new(vec![(0.0, axis), (width, axis)], AXIS_COLOR))
        .map_err(|e| BenchError::Export(format!("drawing optical axis failed: {e}")))?;

    let half_aperture = geometry.aperture_height() / 2.0;
    chart
        .draw_series(bench.elements().iter().map(|element| {
            PathElement::new(
                vec![
                    (element.position(), axis - half_aperture),
                    (element.position(), axis + half_aperture),
                ],
                kind_color(element.kind()).stroke_width(3),
            )
        }))
        .map_err(|e| BenchError::Export(format!("drawing elements failed: {e}")))?;
    chart
        .draw_series(segments.iter().map(|segment| {
            PathElement::new(
                vec![
                    (segment.start().x, segment.start().y),
                    (segment.end().x, segment.end().y),
                ],
                segment.color().stroke_width(2),
            )
        }))
        .map_err(|e| BenchError::Export(format!("drawing ray failed: {e}")))?;
    root.present()
        .map_err(|e| BenchError::Export(format!("writing svg file failed: {e}")))?;
    info!("bench plot written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::Point2;
    use tempfile::NamedTempFile;
    #[test]
    fn csv_header_only() {
        let mut buffer = Vec::new();
        write_segments_csv(&[], &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "x_start,y_start,x_end,y_end,r,g,b\n"
        );
    }
    #[test]
    fn csv_rows() {
        let segments = vec![
            RaySegment::new(
                Point2::new(50.0, 200.0),
                Point2::new(400.0, 200.0),
                RGBColor(255, 0, 0),
            ),
            RaySegment::new(
                Point2::new(400.0, 200.0),
                Point2::new(0.0, 200.5),
                RGBColor(255, 0, 0),
            ),
        ];
        let mut buffer = Vec::new();
        write_segments_csv(&segments, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "x_start,y_start,x_end,y_end,r,g,b");
        assert_eq!(lines[1], "50.0,200.0,400.0,200.0,255,0,0");
        assert_eq!(lines[2], "400.0,200.0,0.0,200.5,255,0,0");
    }
    #[test]
    fn csv_file() {
        let bench = OpticalBench::default();
        let file = NamedTempFile::new().unwrap();
        save_segments_csv(&bench.trace(), file.path()).unwrap();
        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(save_segments_csv(&[], Path::new("./invalid_file_path/ray.csv")).is_err());
    }
    #[test]
    fn svg_file() {
        let mut bench = OpticalBench::default();
        bench.add_element(ElementKind::ConvexLens, 300.0);
        bench.add_element(ElementKind::PlaneMirror, 600.0);
        let segments = bench.trace();
        let file = tempfile::Builder::new().suffix(".svg").tempfile().unwrap();
        plot_bench_svg(&bench, &segments, file.path()).unwrap();
        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.contains("<svg"));
        assert!(contents.contains("</svg>"));
    }
    #[test]
    fn element_colors() {
        assert_eq!(kind_color(ElementKind::ConvexLens), LENS_COLOR);
        assert_eq!(kind_color(ElementKind::ConcaveMirror), MIRROR_COLOR);
    }
}
