use std::{error::Error, fmt};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A parsed point in degrees. Coordinate ranges are not enforced here;
/// out-of-range values are a data-quality concern for higher layers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointParseError {
    /// Missing `POINT(` keyword or closing parenthesis.
    NotAPoint,
    /// No space between the two coordinate tokens.
    MissingSeparator,
    InvalidLongitude(String),
    InvalidLatitude(String),
}

impl fmt::Display for PointParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointParseError::NotAPoint => {
                write!(f, "expected a string of the form POINT(<lon> <lat>)")
            }
            PointParseError::MissingSeparator => {
                write!(f, "expected a single space between longitude and latitude")
            }
            PointParseError::InvalidLongitude(token) => {
                write!(f, "invalid longitude {:?}", token)
            }
            PointParseError::InvalidLatitude(token) => {
                write!(f, "invalid latitude {:?}", token)
            }
        }
    }
}

impl Error for PointParseError {}

/// Parses a well-known-text point of the exact form `POINT(<lon> <lat>)`.
/// WKT is longitude-first. No SRID prefix, no whitespace outside the single
/// separator.
pub fn parse_point(text: &str) -> Result<Coordinate, PointParseError> {
    let inner = text
        .strip_prefix("POINT(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(PointParseError::NotAPoint)?;
    let (longitude, latitude) = inner
        .split_once(' ')
        .ok_or(PointParseError::MissingSeparator)?;
    Ok(Coordinate {
        longitude: parse_axis(longitude).ok_or_else(|| {
            PointParseError::InvalidLongitude(longitude.to_owned())
        })?,
        latitude: parse_axis(latitude)
            .ok_or_else(|| PointParseError::InvalidLatitude(latitude.to_owned()))?,
    })
}

/// An optionally-signed, optionally-fractional decimal number. Stricter than
/// `f64::from_str`: no exponents, no infinities, no whitespace.
fn parse_axis(token: &str) -> Option<f64> {
    if token.is_empty()
        || !token
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '+' || c == '-')
    {
        return None;
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_plain_point() {
        assert_eq!(
            parse_point("POINT(10.1228 54.3233)"),
            Ok(Coordinate {
                latitude: 54.3233,
                longitude: 10.1228,
            })
        );
    }

    #[test]
    fn parses_signed_and_integer_tokens() {
        assert_eq!(
            parse_point("POINT(-73.9857 40.7484)"),
            Ok(Coordinate {
                latitude: 40.7484,
                longitude: -73.9857,
            })
        );
        assert_eq!(
            parse_point("POINT(+7 50)"),
            Ok(Coordinate {
                latitude: 50.0,
                longitude: 7.0,
            })
        );
    }

    #[test]
    fn longitude_comes_first() {
        let point = parse_point("POINT(1 2)").unwrap();
        assert_eq!(point.longitude, 1.0);
        assert_eq!(point.latitude, 2.0);
    }

    #[test]
    fn rejects_wrong_keyword_or_shape() {
        assert_eq!(parse_point("point(7 50)"), Err(PointParseError::NotAPoint));
        assert_eq!(parse_point("POINT 7 50"), Err(PointParseError::NotAPoint));
        assert_eq!(parse_point("POINT(7 50"), Err(PointParseError::NotAPoint));
        assert_eq!(parse_point(""), Err(PointParseError::NotAPoint));
        assert_eq!(
            parse_point("SRID=4326;POINT(7 50)"),
            Err(PointParseError::NotAPoint)
        );
    }

    #[test]
    fn rejects_a_missing_separator() {
        assert_eq!(
            parse_point("POINT(7,50)"),
            Err(PointParseError::MissingSeparator)
        );
    }

    #[test]
    fn rejects_bad_coordinate_tokens() {
        assert_eq!(
            parse_point("POINT(abc 50)"),
            Err(PointParseError::InvalidLongitude("abc".to_owned()))
        );
        assert_eq!(
            parse_point("POINT(7 5O)"),
            Err(PointParseError::InvalidLatitude("5O".to_owned()))
        );
        // a second space lands in the latitude token
        assert_eq!(
            parse_point("POINT(7  50)"),
            Err(PointParseError::InvalidLatitude(" 50".to_owned()))
        );
        assert_eq!(
            parse_point("POINT(1e3 50)"),
            Err(PointParseError::InvalidLongitude("1e3".to_owned()))
        );
    }

    #[test]
    fn does_not_range_validate() {
        assert_eq!(
            parse_point("POINT(200 95)"),
            Ok(Coordinate {
                latitude: 95.0,
                longitude: 200.0,
            })
        );
    }
}
