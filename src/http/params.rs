//! Query-string parsing for `GET /api/cars`.

use crate::car_actor::CarError;
use crate::query::{Pagination, QueryRequest, SortField, SortOrder, ValidityFilters};
use serde::Deserialize;

/// Page size used in page mode when `limit` is absent.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// Raw listing parameters, exactly as they arrive in the query string.
///
/// Everything is kept as text so that bad values are reported as `InvalidQuery` with a
/// precise message rather than as a generic extractor rejection. Empty values count as
/// absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub is_valid_insurance: Option<String>,
    pub is_valid_road_tax: Option<String>,
    pub is_valid_inspection: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

impl TryFrom<ListParams> for QueryRequest {
    type Error = CarError;

    fn try_from(params: ListParams) -> Result<Self, Self::Error> {
        let sort_by = present(&params.sort_by)
            .map(str::parse::<SortField>)
            .transpose()?;
        let order = present(&params.order)
            .map(str::parse::<SortOrder>)
            .transpose()?
            .unwrap_or_default();

        let filters = ValidityFilters {
            insurance: flag(&params.is_valid_insurance),
            road_tax: flag(&params.is_valid_road_tax),
            inspection: flag(&params.is_valid_inspection),
        };

        let offset = number("offset", &params.offset)?;
        let limit = number("limit", &params.limit)?;
        let page = number("page", &params.page)?;

        let pagination = match (page, offset, limit) {
            (Some(_), Some(_), _) => {
                return Err(CarError::InvalidQuery(
                    "offset and page cannot be combined".to_string(),
                ))
            }
            (Some(0), None, _) => {
                return Err(CarError::InvalidQuery("page starts at 1".to_string()))
            }
            (Some(_), None, Some(0)) => {
                return Err(CarError::InvalidQuery(
                    "limit must be at least 1 in page mode".to_string(),
                ))
            }
            (Some(page), None, limit) => Pagination::Page {
                page,
                limit: limit.unwrap_or(DEFAULT_PAGE_LIMIT),
            },
            (None, None, None) => Pagination::All,
            (None, offset, limit) => Pagination::Offset {
                offset: offset.unwrap_or(0),
                limit: limit.filter(|&l| l > 0),
            },
        };

        Ok(QueryRequest {
            sort_by,
            order,
            filters,
            pagination,
        })
    }
}

fn present(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().filter(|s| !s.is_empty())
}

/// Only the literal `true` switches a filter on.
fn flag(raw: &Option<String>) -> bool {
    raw.as_deref() == Some("true")
}

fn number(name: &str, raw: &Option<String>) -> Result<Option<usize>, CarError> {
    present(raw)
        .map(|s| {
            s.parse::<usize>().map_err(|_| {
                CarError::InvalidQuery(format!("{name} must be a non-negative integer, got '{s}'"))
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    fn parse(query: &str) -> Result<QueryRequest, CarError> {
        let uri: Uri = format!("/api/cars?{query}").parse().unwrap();
        let Query(params) = Query::<ListParams>::try_from_uri(&uri).unwrap();
        QueryRequest::try_from(params)
    }

    #[test]
    fn no_parameters_means_everything() {
        assert_eq!(parse("").unwrap(), QueryRequest::default());
    }

    #[test]
    fn sort_and_filters() {
        let request = parse("sortBy=inspection&order=Desc&isValidRoadTax=true&isValidInsurance=1")
            .unwrap();
        assert_eq!(request.sort_by, Some(SortField::Inspection));
        assert_eq!(request.order, SortOrder::Desc);
        assert!(request.filters.road_tax);
        assert!(!request.filters.insurance);
    }

    #[test]
    fn unknown_sort_field_is_reported_first() {
        assert_eq!(
            parse("sortBy=color&offset=x").unwrap_err(),
            CarError::InvalidSortField("color".into())
        );
    }

    #[test]
    fn offset_mode_treats_zero_limit_as_unbounded() {
        assert_eq!(
            parse("offset=2&limit=0").unwrap().pagination,
            Pagination::Offset {
                offset: 2,
                limit: None
            }
        );
        assert_eq!(
            parse("limit=3").unwrap().pagination,
            Pagination::Offset {
                offset: 0,
                limit: Some(3)
            }
        );
    }

    #[test]
    fn page_mode_defaults_and_rejections() {
        assert_eq!(
            parse("page=2").unwrap().pagination,
            Pagination::Page {
                page: 2,
                limit: DEFAULT_PAGE_LIMIT
            }
        );
        assert!(matches!(parse("page=0"), Err(CarError::InvalidQuery(_))));
        assert!(matches!(parse("page=1&limit=0"), Err(CarError::InvalidQuery(_))));
        assert!(matches!(parse("page=1&offset=3"), Err(CarError::InvalidQuery(_))));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        assert!(matches!(parse("offset=-1"), Err(CarError::InvalidQuery(_))));
        assert!(matches!(parse("limit=ten"), Err(CarError::InvalidQuery(_))));
    }
}
