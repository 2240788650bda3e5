// src/rendering/scene.rs
//
// VMD Tcl script output. The viewer parses these lines literally, so the
// directive spelling and number widths below are part of the file format.

use crate::physics::{AnchorGrid, ColorBucket, ResponseField};
use std::io::{self, Write};

/// Tints for every non-builtin color index referenced by the bucket table.
/// Indices 0 (blue), 1 (red) and 8 (white) are viewer defaults.
pub const PALETTE: [(u8, [f64; 3]); 18] = [
    (11, [0.1, 0.1, 1.0]),
    (12, [0.2, 0.2, 1.0]),
    (13, [0.3, 0.3, 1.0]),
    (14, [0.4, 0.4, 1.0]),
    (15, [0.5, 0.5, 1.0]),
    (17, [0.6, 0.6, 1.0]),
    (18, [0.7, 0.7, 1.0]),
    (19, [0.8, 0.8, 1.0]),
    (20, [0.9, 0.9, 1.0]),
    (21, [1.0, 0.1, 0.1]),
    (22, [1.0, 0.2, 0.2]),
    (23, [1.0, 0.3, 0.3]),
    (24, [1.0, 0.4, 0.4]),
    (25, [1.0, 0.5, 0.5]),
    (26, [1.0, 0.6, 0.6]),
    (27, [1.0, 0.7, 0.7]),
    (28, [1.0, 0.8, 0.8]),
    (29, [1.0, 0.9, 0.9]),
];

// Arrow shaft radius, cone resolution and head size passed to vmd_draw_vector.
const ARROW_RADIUS: f64 = 0.1;
const ARROW_RESOLUTION: u32 = 30;
const ARROW_HEAD: f64 = 0.08;

/// Scientific notation padded like C's `%12.5E`: five mantissa decimals,
/// signed exponent of at least two digits, right aligned in 12 columns.
pub fn format_sci(x: f64) -> String {
    let raw = format!("{:.5E}", x);
    let formatted = match raw.split_once('E') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(e) => {
                let sign = if e < 0 { '-' } else { '+' };
                format!("{}E{}{:02}", mantissa, sign, e.abs())
            }
            Err(_) => raw.clone(),
        },
        None => raw.clone(),
    };
    format!("{:>12}", formatted)
}

pub fn write_palette<W: Write>(out: &mut W) -> io::Result<()> {
    for (id, [r, g, b]) in PALETTE {
        writeln!(out, "color change rgb {} {:.1} {:.1} {:.1}", id, r, g, b)?;
    }
    Ok(())
}

/// One `draw color` line followed by one `vmd_draw_vector` line.
pub fn write_record<W: Write>(
    out: &mut W,
    bucket: ColorBucket,
    anchor: [f64; 3],
    vector: [f64; 3],
) -> io::Result<()> {
    writeln!(out, "draw color {}", bucket.color_id())?;
    writeln!(
        out,
        "vmd_draw_vector 0 {{{:8.5} {:8.5} {:8.5}}} {{{} {} {}}} {} {} {}",
        anchor[0],
        anchor[1],
        anchor[2],
        format_sci(vector[0]),
        format_sci(vector[1]),
        format_sci(vector[2]),
        ARROW_RADIUS,
        ARROW_RESOLUTION,
        ARROW_HEAD
    )
}

/// Palette header plus one record per direction, in grid order.
///
/// Arrows start on the anchor sphere and carry the raw contracted vector;
/// the display radius never scales the vector itself.
pub fn write_scene<W: Write>(
    out: &mut W,
    anchors: &AnchorGrid,
    field: &ResponseField,
    buckets: &[ColorBucket],
) -> io::Result<()> {
    if anchors.len() != field.len() || buckets.len() != field.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "scene size mismatch: {} anchors, {} vectors, {} colors",
                anchors.len(),
                field.len(),
                buckets.len()
            ),
        ));
    }

    write_palette(out)?;
    for ((anchor, vector), bucket) in anchors.points().iter().zip(field.vectors()).zip(buckets) {
        write_record(out, *bucket, *anchor, *vector)?;
    }
    Ok(())
}
