//! Layout-driven extraction of a position from a decomposed sentence.

use err::ExtractError;
use layout;
use position::Position;
use sentence::DecomposedSentence;

/// Unit marker required in the elevation unit field.
const METRES: &'static str = "M";

/// Builds a [`Position`](../position/struct.Position.html) from a
/// decomposed sentence, following the field layout registered for its
/// sentence type.
///
/// Fails with `UnknownSentenceType` when no layout row exists for the
/// type, `EmptyFields` when the field list is empty, `MissingField` when a
/// layout index falls outside the field list or a hemisphere field is
/// blank, and `InvalidUnit` when an elevation-carrying sentence does not
/// declare metres. Field values are forwarded uninterpreted.
pub fn extract(d: &DecomposedSentence) -> Result<Position, ExtractError> {
    let layout = match layout::layout_for(d.sentence_type) {
        Some(layout) => layout,
        None => {
            return Err(ExtractError::UnknownSentenceType(
                d.sentence_type.to_string(),
            ))
        }
    };
    if d.fields.is_empty() {
        return Err(ExtractError::EmptyFields);
    }

    let latitude = field(d, layout.latitude, "latitude")?;
    let lat_hemisphere = hemisphere(d, layout.lat_hemisphere, "latitude hemisphere")?;
    let longitude = field(d, layout.longitude, "longitude")?;
    let lon_hemisphere = hemisphere(d, layout.lon_hemisphere, "longitude hemisphere")?;

    match layout.elevation {
        Some(elev) => {
            let unit = field(d, elev.unit, "elevation unit")?;
            if unit != METRES {
                return Err(ExtractError::InvalidUnit(unit.to_string()));
            }
            let elevation = field(d, elev.value, "elevation")?;
            Ok(Position::with_elevation(
                latitude.to_string(),
                lat_hemisphere,
                longitude.to_string(),
                lon_hemisphere,
                elevation.to_string(),
            ))
        }
        None => Ok(Position::new(
            latitude.to_string(),
            lat_hemisphere,
            longitude.to_string(),
            lon_hemisphere,
        )),
    }
}

fn field<'a>(
    d: &DecomposedSentence<'a>,
    index: usize,
    role: &'static str,
) -> Result<&'a str, ExtractError> {
    match d.fields.get(index) {
        Some(&value) => Ok(value),
        None => Err(ExtractError::MissingField(role)),
    }
}

/// A hemisphere is the first character of its field; a blank field has
/// none and is reported as missing.
fn hemisphere(
    d: &DecomposedSentence,
    index: usize,
    role: &'static str,
) -> Result<char, ExtractError> {
    field(d, index, role)?
        .chars()
        .next()
        .ok_or(ExtractError::MissingField(role))
}

#[cfg(test)]
mod tests {
    use super::*;
    use err::ExtractError;
    use position::Position;
    use sentence::DecomposedSentence;

    fn decomposed<'a>(ty: &'a str, fields: Vec<&'a str>) -> DecomposedSentence<'a> {
        DecomposedSentence {
            sentence_type: ty,
            fields,
        }
    }

    #[test]
    fn extracts_gll_without_elevation() {
        let d = decomposed(
            "GPGLL",
            vec!["4916.45", "N", "12311.12", "W", "225444", "A"],
        );
        let pos = extract(&d).unwrap();
        assert_eq!(
            pos,
            Position::new("4916.45".to_string(), 'N', "12311.12".to_string(), 'W')
        );
        assert_eq!(pos.elevation(), None);
    }

    #[test]
    fn extracts_rmc_without_elevation() {
        let d = decomposed(
            "GPRMC",
            vec![
                "123519", "A", "4807.038", "N", "01131.000", "E", "022.4", "084.4",
                "230394", "003.1", "W",
            ],
        );
        let pos = extract(&d).unwrap();
        assert_eq!(pos.latitude(), "4807.038");
        assert_eq!(pos.lat_hemisphere(), 'N');
        assert_eq!(pos.longitude(), "01131.000");
        assert_eq!(pos.lon_hemisphere(), 'E');
        assert_eq!(pos.elevation(), None);
    }

    #[test]
    fn extracts_gga_with_elevation() {
        let d = decomposed(
            "GPGGA",
            vec![
                "123519", "4807.038", "N", "01131.000", "E", "1", "08", "0.9",
                "545.4", "M", "46.9", "M", "", "",
            ],
        );
        let pos = extract(&d).unwrap();
        assert_eq!(pos.latitude(), "4807.038");
        assert_eq!(pos.longitude(), "01131.000");
        assert_eq!(pos.elevation(), Some("545.4"));
    }

    #[test]
    fn gga_rejects_non_metre_unit() {
        let d = decomposed(
            "GPGGA",
            vec![
                "123519", "4807.038", "N", "01131.000", "E", "1", "08", "0.9",
                "545.4", "F", "46.9", "M", "", "",
            ],
        );
        assert_matches!(extract(&d), Err(ExtractError::InvalidUnit(ref u)) if u == "F");
    }

    #[test]
    fn unknown_type_is_rejected() {
        let d = decomposed("GPXXX", vec!["4916.45", "N"]);
        assert_matches!(
            extract(&d),
            Err(ExtractError::UnknownSentenceType(ref ty)) if ty == "GPXXX"
        );
    }

    #[test]
    fn empty_field_list_is_rejected() {
        let d = decomposed("GPGLL", vec![]);
        assert_matches!(extract(&d), Err(ExtractError::EmptyFields));
    }

    #[test]
    fn short_field_list_is_a_missing_field() {
        let d = decomposed("GPGLL", vec!["4916.45"]);
        assert_matches!(
            extract(&d),
            Err(ExtractError::MissingField("latitude hemisphere"))
        );
    }

    #[test]
    fn blank_hemisphere_is_a_missing_field() {
        let d = decomposed("GPGLL", vec!["4916.45", "", "12311.12", "W"]);
        assert_matches!(
            extract(&d),
            Err(ExtractError::MissingField("latitude hemisphere"))
        );
    }
}
