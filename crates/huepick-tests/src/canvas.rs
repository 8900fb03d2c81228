//! Integration tests for pixel buffers on top of the color library.

use huepick_canvas::{
    average_color, average_pixel, hue_saturation_gradient, CanvasError, PixelBuffer, Region,
    GRADIENT_LUMINOSITY,
};
use huepick_color::{hsl_to_rgb, rgb_as_rgb24, Hsl, Rgb24};

fn expected_pixel(col: u32, row: u32, width: u32, height: u32) -> [u8; 4] {
    let hsl = Hsl::new(
        col as f64 / width as f64,
        1.0 - row as f64 / height as f64,
        GRADIENT_LUMINOSITY,
    );
    let [r, g, b] = rgb_as_rgb24(hsl_to_rgb(hsl)).to_array();
    [r, g, b, 255]
}

#[test]
fn gradient_matches_per_pixel_conversion() {
    let (width, height) = (24, 9);
    let buf = hue_saturation_gradient(width, height).unwrap();
    for row in 0..height {
        for col in 0..width {
            assert_eq!(
                buf.pixel(col, row),
                Some(expected_pixel(col, row, width, height)),
                "pixel {col},{row}"
            );
        }
    }
}

#[test]
fn gradient_hue_sweeps_columns() {
    let buf = hue_saturation_gradient(6, 2).unwrap();
    // Top row at full saturation: red, yellow, green, cyan, blue, magenta.
    let expected = [
        Rgb24::new(255, 0, 0),
        Rgb24::new(255, 255, 0),
        Rgb24::new(0, 255, 0),
        Rgb24::new(0, 255, 255),
        Rgb24::new(0, 0, 255),
        Rgb24::new(255, 0, 255),
    ];
    for (col, want) in expected.iter().enumerate() {
        let [r, g, b, _] = buf.pixel(col as u32, 0).unwrap();
        let want = want.to_array();
        for (got, want) in [r, g, b].iter().zip(want) {
            assert!(got.abs_diff(want) <= 1, "column {col}");
        }
    }
}

#[test]
fn average_of_gradient_chunk() {
    let buf = hue_saturation_gradient(36, 10).unwrap();
    let chunk = buf.region(Region::new(0, 0, 1, 1)).unwrap();
    assert_eq!(average_color(&chunk).unwrap(), Rgb24::new(255, 0, 0));

    let whole = average_pixel(&buf).unwrap();
    assert_eq!(whole[3], 255);
}

#[test]
fn region_rejects_overflow() {
    let buf = hue_saturation_gradient(8, 8).unwrap();
    let err = buf.region(Region::new(4, 4, 5, 1)).unwrap_err();
    assert!(matches!(err, CanvasError::RegionOutOfBounds { .. }));
}

#[test]
fn raw_bytes_roundtrip() {
    let buf = hue_saturation_gradient(5, 3).unwrap();
    let bytes = buf.clone().into_bytes();
    let again = PixelBuffer::from_raw(5, 3, bytes).unwrap();
    assert_eq!(again, buf);
}
