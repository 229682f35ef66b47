//! The position value type produced by the pipeline.
//!
//! Field values are carried verbatim from the sentence. Degree/minute
//! normalization, hemisphere signing, and elevation units are left to the
//! consumer; this crate only locates the fields and forwards them.

/// One geographic position extracted from a single sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    latitude: String,
    lat_hemisphere: char,
    longitude: String,
    lon_hemisphere: char,
    elevation: Option<String>,
}

impl Position {
    /// Creates a position without elevation.
    pub fn new(
        latitude: String,
        lat_hemisphere: char,
        longitude: String,
        lon_hemisphere: char,
    ) -> Self {
        Position {
            latitude,
            lat_hemisphere,
            longitude,
            lon_hemisphere,
            elevation: None,
        }
    }

    /// Creates a position with an elevation value, as carried by GGA.
    pub fn with_elevation(
        latitude: String,
        lat_hemisphere: char,
        longitude: String,
        lon_hemisphere: char,
        elevation: String,
    ) -> Self {
        Position {
            latitude,
            lat_hemisphere,
            longitude,
            lon_hemisphere,
            elevation: Some(elevation),
        }
    }

    /// The raw latitude field, e.g. `"4916.45"`.
    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    /// The latitude hemisphere character, `'N'` or `'S'`.
    pub fn lat_hemisphere(&self) -> char {
        self.lat_hemisphere
    }

    /// The raw longitude field, e.g. `"12311.12"`.
    pub fn longitude(&self) -> &str {
        &self.longitude
    }

    /// The longitude hemisphere character, `'E'` or `'W'`.
    pub fn lon_hemisphere(&self) -> char {
        self.lon_hemisphere
    }

    /// The raw elevation field in metres, when the sentence carried one.
    pub fn elevation(&self) -> Option<&str> {
        self.elevation.as_ref().map(|e| e.as_str())
    }
}
