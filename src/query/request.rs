//! Typed description of a car listing query.

use crate::car_actor::CarError;
use serde::Serialize;
use std::str::FromStr;

/// Field a listing can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Brand,
    Model,
    Year,
    Insurance,
    RoadTax,
    Inspection,
}

impl FromStr for SortField {
    type Err = CarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brand" => Ok(Self::Brand),
            "model" => Ok(Self::Model),
            "year" => Ok(Self::Year),
            "insurance" => Ok(Self::Insurance),
            "roadTax" => Ok(Self::RoadTax),
            "inspection" => Ok(Self::Inspection),
            other => Err(CarError::InvalidSortField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = CarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(CarError::InvalidQuery(format!(
                "order must be 'asc' or 'desc', got '{s}'"
            ))),
        }
    }
}

/// Which expiry dates must still be in the future. Flags are AND-combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidityFilters {
    pub insurance: bool,
    pub road_tax: bool,
    pub inspection: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pagination {
    /// The whole sequence.
    #[default]
    All,
    /// Zero-based window. `limit: None` runs to the end.
    Offset { offset: usize, limit: Option<usize> },
    /// One-based page. Page 0 or a zero limit yields an empty page.
    Page { page: usize, limit: usize },
}

/// A fully parsed listing query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryRequest {
    pub sort_by: Option<SortField>,
    pub order: SortOrder,
    pub filters: ValidityFilters,
    pub pagination: Pagination,
}

/// Page-mode bookkeeping returned next to the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Result of running a query: the selected cars, plus page metadata in page mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPage<T> {
    pub items: Vec<T>,
    pub meta: Option<PageMeta>,
}
