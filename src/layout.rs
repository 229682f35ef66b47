//! Static field layouts for the recognized sentence types.
//!
//! Each layout names which comma-separated field of a decomposed sentence
//! holds which role. Supporting a new sentence type means adding one row to
//! [`LAYOUTS`](constant.LAYOUTS.html); the validator and the extractor both
//! read from this table.

/// Indices of the elevation value and its unit field, for sentence types
/// that carry elevation.
#[derive(Debug, Clone, Copy)]
pub struct ElevationLayout {
    pub value: usize,
    pub unit: usize,
}

/// Field-role indices into the decomposed field list of one sentence type.
#[derive(Debug, Clone, Copy)]
pub struct FieldLayout {
    pub latitude: usize,
    pub lat_hemisphere: usize,
    pub longitude: usize,
    pub lon_hemisphere: usize,
    pub elevation: Option<ElevationLayout>,
}

/// The recognized sentence types, keyed by the full 5-character type tag.
pub const LAYOUTS: &'static [(&'static str, FieldLayout)] = &[
    (
        "GPGLL",
        FieldLayout {
            latitude: 0,
            lat_hemisphere: 1,
            longitude: 2,
            lon_hemisphere: 3,
            elevation: None,
        },
    ),
    (
        "GPGGA",
        FieldLayout {
            latitude: 1,
            lat_hemisphere: 2,
            longitude: 3,
            lon_hemisphere: 4,
            elevation: Some(ElevationLayout { value: 8, unit: 9 }),
        },
    ),
    (
        "GPRMC",
        FieldLayout {
            latitude: 2,
            lat_hemisphere: 3,
            longitude: 4,
            lon_hemisphere: 5,
            elevation: None,
        },
    ),
];

/// Looks up the layout registered for `sentence_type`, e.g. `"GPGLL"`.
pub fn layout_for(sentence_type: &str) -> Option<&'static FieldLayout> {
    LAYOUTS
        .iter()
        .find(|&&(ty, _)| ty == sentence_type)
        .map(|&(_, ref layout)| layout)
}

/// True when `id` is the 3-character identifier of a recognized type.
pub fn recognized_identifier(id: &str) -> bool {
    LAYOUTS.iter().any(|&(ty, _)| &ty[2..] == id)
}
