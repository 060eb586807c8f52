//! Static neighborhood catalog used for schedule validation and map markers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Catalog entry: a lunch neighborhood and its map coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighborhood {
    pub id: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

/// Fixed catalog of supported neighborhoods.
pub const NEIGHBORHOODS: &[Neighborhood] = &[
    Neighborhood { id: "gangnam", name: "강남", lat: 37.4979, lng: 127.0276 },
    Neighborhood { id: "yeoksam", name: "역삼", lat: 37.5007, lng: 127.0365 },
    Neighborhood { id: "seolleung", name: "선릉", lat: 37.5045, lng: 127.049 },
    Neighborhood { id: "samsung", name: "삼성", lat: 37.5088, lng: 127.0631 },
    Neighborhood { id: "euljiro", name: "을지로", lat: 37.5662, lng: 126.9912 },
    Neighborhood { id: "gwanghwamun", name: "광화문", lat: 37.5758, lng: 126.9769 },
    Neighborhood { id: "jongro", name: "종로", lat: 37.5704, lng: 126.9831 },
    Neighborhood { id: "yeouido", name: "여의도", lat: 37.5219, lng: 126.9245 },
    Neighborhood { id: "mapo", name: "마포/홍대", lat: 37.5572, lng: 126.9236 },
    Neighborhood { id: "seongsu", name: "성수", lat: 37.5445, lng: 127.056 },
    Neighborhood { id: "pangyo", name: "판교", lat: 37.3948, lng: 127.1112 },
    Neighborhood { id: "guro", name: "구로디지털단지", lat: 37.4851, lng: 126.9015 },
    Neighborhood { id: "sindorim", name: "신도림", lat: 37.5089, lng: 126.8912 },
    Neighborhood { id: "jamsil", name: "잠실", lat: 37.5133, lng: 127.1001 },
    Neighborhood { id: "hongdae", name: "합정/망원", lat: 37.5495, lng: 126.9137 },
];

/// Look up a catalog entry by id.
pub fn find_neighborhood<'a>(
    catalog: &'a [Neighborhood],
    id: &NeighborhoodId,
) -> Option<&'a Neighborhood> {
    catalog.iter().find(|hood| hood.id == id.as_ref())
}

/// Errors raised when validating a neighborhood identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NeighborhoodError {
    #[error("neighborhood must not be empty")]
    Empty,
    #[error("unknown neighborhood: {0}")]
    Unknown(String),
}

/// Neighborhood identifier as stored on schedules.
///
/// Stored rows may reference ids that have since left the catalog, so the
/// type itself only guarantees a non-empty value. Use
/// [`NeighborhoodId::from_catalog`] for fresh input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NeighborhoodId(String);

impl NeighborhoodId {
    /// Wrap a stored identifier.
    pub fn new(id: impl Into<String>) -> Result<Self, NeighborhoodError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(NeighborhoodError::Empty);
        }
        Ok(Self(id))
    }

    /// Validate user input against the catalog.
    ///
    /// # Examples
    /// ```
    /// use lunchmate::domain::{NeighborhoodId, NEIGHBORHOODS};
    ///
    /// assert!(NeighborhoodId::from_catalog(NEIGHBORHOODS, "gangnam").is_ok());
    /// assert!(NeighborhoodId::from_catalog(NEIGHBORHOODS, "atlantis").is_err());
    /// ```
    pub fn from_catalog(catalog: &[Neighborhood], id: &str) -> Result<Self, NeighborhoodError> {
        let candidate = Self::new(id)?;
        match find_neighborhood(catalog, &candidate) {
            Some(_) => Ok(candidate),
            None => Err(NeighborhoodError::Unknown(id.to_owned())),
        }
    }
}

impl AsRef<str> for NeighborhoodId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for NeighborhoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<NeighborhoodId> for String {
    fn from(value: NeighborhoodId) -> Self {
        value.0
    }
}

impl TryFrom<String> for NeighborhoodId {
    type Error = NeighborhoodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
