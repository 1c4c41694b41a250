//! Encoded polyline codec.
//!
//! Implements the compact ASCII encoding used by the directions provider
//! for route geometry: each coordinate is stored as the delta from the
//! previous one, scaled by 1e5, zig-zag encoded, and emitted as 5-bit
//! chunks offset by 63. A simulated route encoded here decodes with the
//! same client-side decoder as a real one.

use crate::domain::Coordinate;

/// Fixed-point precision (five decimal places, about 1 m).
const PRECISION: f64 = 1e5;

/// Error decoding a polyline string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolylineError {
    /// A character outside the encoding alphabet (63..=126)
    #[error("invalid character {ch:?} at byte {index}")]
    InvalidCharacter { ch: char, index: usize },

    /// Input ended in the middle of a value
    #[error("truncated polyline: value incomplete at byte {0}")]
    Truncated(usize),

    /// Input ended after a latitude with no matching longitude
    #[error("unpaired latitude at end of polyline")]
    Unpaired,

    /// A value did not fit in 32 bits
    #[error("value overflow at byte {0}")]
    Overflow(usize),
}

/// Encode a sequence of coordinates.
pub fn encode(points: &[Coordinate]) -> String {
    let mut out = String::with_capacity(points.len() * 8);
    let mut prev_lat = 0i64;
    let mut prev_lon = 0i64;

    for point in points {
        let lat = (point.lat * PRECISION).round() as i64;
        let lon = (point.lon * PRECISION).round() as i64;
        encode_value(lat - prev_lat, &mut out);
        encode_value(lon - prev_lon, &mut out);
        prev_lat = lat;
        prev_lon = lon;
    }

    out
}

fn encode_value(delta: i64, out: &mut String) {
    let mut v = if delta < 0 { !(delta << 1) } else { delta << 1 };
    while v >= 0x20 {
        out.push(char::from((((v & 0x1f) | 0x20) + 63) as u8));
        v >>= 5;
    }
    out.push(char::from((v + 63) as u8));
}

/// Decode a polyline string back into coordinates.
pub fn decode(encoded: &str) -> Result<Vec<Coordinate>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut lat = 0i64;
    let mut lon = 0i64;

    while index < bytes.len() {
        lat += decode_value(bytes, &mut index)?;
        if index >= bytes.len() {
            return Err(PolylineError::Unpaired);
        }
        lon += decode_value(bytes, &mut index)?;

        points.push(Coordinate {
            lat: lat as f64 / PRECISION,
            lon: lon as f64 / PRECISION,
        });
    }

    Ok(points)
}

fn decode_value(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let mut result = 0i64;
    let mut shift = 0;

    loop {
        let Some(&byte) = bytes.get(*index) else {
            return Err(PolylineError::Truncated(*index));
        };
        if !(63..=126).contains(&byte) {
            return Err(PolylineError::InvalidCharacter {
                ch: char::from(byte),
                index: *index,
            });
        }
        if shift > 30 {
            return Err(PolylineError::Overflow(*index));
        }

        let chunk = i64::from(byte - 63);
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        *index += 1;

        if chunk < 0x20 {
            break;
        }
    }

    Ok(if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lat: f64, lon: f64) -> Coordinate {
        Coordinate { lat, lon }
    }

    #[test]
    fn encodes_reference_example() {
        // The worked example from the format documentation
        let points = [c(38.5, -120.2), c(40.7, -120.95), c(43.252, -126.453)];
        assert_eq!(encode(&points), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
    }

    #[test]
    fn decodes_reference_example() {
        let points = decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();
        assert_eq!(points, vec![c(38.5, -120.2), c(40.7, -120.95), c(43.252, -126.453)]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<Coordinate>::new());
    }

    #[test]
    fn three_point_detour_round_trips() {
        let points = [c(3.1485, 101.7131), c(4.2105, 101.0503), c(5.4375, 100.3099)];
        let decoded = decode(&encode(&points)).unwrap();
        assert_eq!(decoded.len(), 3);
        for (a, b) in points.iter().zip(&decoded) {
            assert!((a.lat - b.lat).abs() < 1e-5);
            assert!((a.lon - b.lon).abs() < 1e-5);
        }
    }

    #[test]
    fn rejects_invalid_character() {
        let err = decode("_p~iF ps|U").unwrap_err();
        assert_eq!(err, PolylineError::InvalidCharacter { ch: ' ', index: 5 });
    }

    #[test]
    fn rejects_truncated_value() {
        // '_' has the continuation bit set, so a value is left open
        assert_eq!(decode("_p~iF~ps|U_").unwrap_err(), PolylineError::Truncated(11));
    }

    #[test]
    fn rejects_unpaired_latitude() {
        assert_eq!(decode("_p~iF").unwrap_err(), PolylineError::Unpaired);
    }
}
