//! The Car Query Engine: filter, then sort, then paginate.
//!
//! Pure and synchronous. The caller fetches the cars and supplies "today", so the same
//! inputs always produce the same page.

use super::request::{
    PageMeta, Pagination, QueryPage, QueryRequest, SortField, SortOrder, ValidityFilters,
};
use crate::model::Car;
use chrono::NaiveDate;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Runs a listing query over `cars`.
///
/// Filtering happens before sorting, and the sort is stable, so cars that compare equal keep
/// their store (id) order. An offset or page past the end yields an empty page, never an
/// error.
pub fn run(cars: Vec<Car>, request: &QueryRequest, today: NaiveDate) -> QueryPage<Car> {
    let mut selected: Vec<Car> = cars
        .into_iter()
        .filter(|car| passes(&request.filters, car, today))
        .collect();

    if let Some(field) = request.sort_by {
        selected.sort_by(|a, b| {
            let ord = compare(field, a, b);
            match request.order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
    }

    paginate(selected, request.pagination)
}

fn passes(filters: &ValidityFilters, car: &Car, today: NaiveDate) -> bool {
    (!filters.insurance || car.insurance_expiry > today)
        && (!filters.road_tax || car.road_tax_expiry > today)
        && (!filters.inspection || car.inspection_expiry > today)
}

fn compare(field: SortField, a: &Car, b: &Car) -> Ordering {
    match field {
        SortField::Brand => locale_cmp(&a.brand, &b.brand),
        SortField::Model => locale_cmp(&a.model, &b.model),
        SortField::Year => a.year.cmp(&b.year),
        SortField::Insurance => a.insurance_expiry.cmp(&b.insurance_expiry),
        SortField::RoadTax => a.road_tax_expiry.cmp(&b.road_tax_expiry),
        SortField::Inspection => a.inspection_expiry.cmp(&b.inspection_expiry),
    }
}

/// Human ordering for names, in three levels:
///
/// 1. base letters, ignoring case and accents (`"Škoda"` sits between `"Seat"` and `"Volvo"`);
/// 2. unaccented before accented (`"Citroen"` before `"Citroën"`);
/// 3. lowercase before uppercase.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| accented_letters(a).cmp(&accented_letters(b)))
        .then_with(|| b.cmp(a))
}

fn base_letters(s: &str) -> Vec<char> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn accented_letters(s: &str) -> Vec<char> {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn paginate(cars: Vec<Car>, pagination: Pagination) -> QueryPage<Car> {
    match pagination {
        Pagination::All => QueryPage {
            items: cars,
            meta: None,
        },
        Pagination::Offset { offset, limit } => QueryPage {
            items: cars
                .into_iter()
                .skip(offset)
                .take(limit.unwrap_or(usize::MAX))
                .collect(),
            meta: None,
        },
        Pagination::Page { page, limit } => {
            let total = cars.len();
            let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
            // Page 0 and a zero limit select nothing.
            let items = match page.checked_sub(1) {
                Some(before) if limit > 0 => cars
                    .into_iter()
                    .skip(before.saturating_mul(limit))
                    .take(limit)
                    .collect(),
                _ => Vec::new(),
            };
            QueryPage {
                items,
                meta: Some(PageMeta {
                    page,
                    limit,
                    total,
                    total_pages,
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::car_actor::{validate, ValidationRules};
    use crate::model::{seed::demo_cars, CarId};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    fn fleet() -> Vec<Car> {
        demo_cars()
            .iter()
            .enumerate()
            .map(|(i, p)| {
                validate(p, &ValidationRules::default())
                    .unwrap()
                    .into_car(CarId(i as u32 + 1))
            })
            .collect()
    }

    fn ids(page: &QueryPage<Car>) -> Vec<u32> {
        page.items.iter().map(|c| c.id.0).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_store_order() {
        let page = run(fleet(), &QueryRequest::default(), today());
        assert_eq!(ids(&page), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(page.meta, None);
    }

    #[test]
    fn sort_by_year_desc() {
        let request = QueryRequest {
            sort_by: Some(SortField::Year),
            order: SortOrder::Desc,
            ..QueryRequest::default()
        };
        let years: Vec<i32> = run(fleet(), &request, today())
            .items
            .iter()
            .map(|c| c.year)
            .collect();
        assert_eq!(years, vec![2020, 2018, 2015, 2010, 2008, 2001]);
    }

    #[test]
    fn sort_by_brand_ignores_case() {
        let mut cars = fleet();
        cars[0].brand = "bmw".into();
        cars[5].brand = "audi".into();
        let request = QueryRequest {
            sort_by: Some(SortField::Brand),
            ..QueryRequest::default()
        };
        let brands: Vec<String> = run(cars, &request, today())
            .items
            .into_iter()
            .map(|c| c.brand)
            .collect();
        assert_eq!(
            brands,
            vec!["audi", "bmw", "Mercedes", "Seat", "Volkswagen", "Volvo"]
        );
    }

    #[test]
    fn sort_by_brand_folds_accents() {
        let mut cars = fleet();
        for (car, brand) in cars
            .iter_mut()
            .zip(["Volvo", "Škoda", "Seat", "Citroën", "Citroen", "citroen"])
        {
            car.brand = brand.into();
        }
        let request = QueryRequest {
            sort_by: Some(SortField::Brand),
            ..QueryRequest::default()
        };
        let brands: Vec<String> = run(cars, &request, today())
            .items
            .into_iter()
            .map(|c| c.brand)
            .collect();
        assert_eq!(
            brands,
            vec!["citroen", "Citroen", "Citroën", "Seat", "Škoda", "Volvo"]
        );
    }

    #[test]
    fn locale_cmp_puts_lowercase_first_on_ties() {
        assert_eq!(locale_cmp("seat", "Seat"), Ordering::Less);
        assert_eq!(locale_cmp("Seat", "skoda"), Ordering::Less);
        assert_eq!(locale_cmp("Volvo", "volvo"), Ordering::Greater);
        assert_eq!(locale_cmp("Volvo", "Volvo"), Ordering::Equal);
    }

    #[test]
    fn equal_keys_keep_store_order() {
        let mut cars = fleet();
        for car in &mut cars {
            car.year = 2000;
        }
        let request = QueryRequest {
            sort_by: Some(SortField::Year),
            order: SortOrder::Desc,
            ..QueryRequest::default()
        };
        assert_eq!(ids(&run(cars, &request, today())), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn validity_filter_keeps_only_future_expiry() {
        let request = QueryRequest {
            filters: ValidityFilters {
                insurance: true,
                ..ValidityFilters::default()
            },
            ..QueryRequest::default()
        };
        // BMW 2025-08-10, VW 2025-06-08, Seat 2020, Skoda 2016 are already expired.
        assert_eq!(ids(&run(fleet(), &request, today())), vec![2, 5]);
    }

    #[test]
    fn expiry_on_today_counts_as_expired() {
        let mut cars = fleet();
        cars[1].road_tax_expiry = today();
        let request = QueryRequest {
            filters: ValidityFilters {
                road_tax: true,
                ..ValidityFilters::default()
            },
            ..QueryRequest::default()
        };
        assert!(!ids(&run(cars, &request, today())).contains(&2));
    }

    #[test]
    fn filters_combine_with_and() {
        let request = QueryRequest {
            filters: ValidityFilters {
                insurance: true,
                road_tax: true,
                inspection: true,
            },
            ..QueryRequest::default()
        };
        let page = run(fleet(), &request, today());
        assert!(page.items.iter().all(|c| c.insurance_expiry > today()
            && c.road_tax_expiry > today()
            && c.inspection_expiry > today()));
        assert_eq!(ids(&page), vec![2, 5]);
    }

    #[test]
    fn offset_window_is_sorted_then_sliced() {
        let request = QueryRequest {
            sort_by: Some(SortField::Year),
            pagination: Pagination::Offset {
                offset: 1,
                limit: Some(2),
            },
            ..QueryRequest::default()
        };
        let years: Vec<i32> = run(fleet(), &request, today())
            .items
            .iter()
            .map(|c| c.year)
            .collect();
        assert_eq!(years, vec![2008, 2010]);
    }

    #[test]
    fn offset_past_the_end_is_empty() {
        let request = QueryRequest {
            pagination: Pagination::Offset {
                offset: 50,
                limit: None,
            },
            ..QueryRequest::default()
        };
        assert!(run(fleet(), &request, today()).items.is_empty());
    }

    #[test]
    fn page_mode_reports_totals() {
        let request = QueryRequest {
            pagination: Pagination::Page { page: 2, limit: 4 },
            ..QueryRequest::default()
        };
        let page = run(fleet(), &request, today());
        assert_eq!(ids(&page), vec![5, 6]);
        assert_eq!(
            page.meta,
            Some(PageMeta {
                page: 2,
                limit: 4,
                total: 6,
                total_pages: 2,
            })
        );
    }

    #[test]
    fn zero_page_or_limit_selects_nothing() {
        for (page, limit, total_pages) in [(1, 0, 0), (0, 3, 2)] {
            let request = QueryRequest {
                pagination: Pagination::Page { page, limit },
                ..QueryRequest::default()
            };
            let result = run(fleet(), &request, today());
            assert!(result.items.is_empty());
            assert_eq!(
                result.meta,
                Some(PageMeta {
                    page,
                    limit,
                    total: 6,
                    total_pages,
                })
            );
        }
    }

    #[test]
    fn page_past_the_end_is_empty_with_meta() {
        let request = QueryRequest {
            pagination: Pagination::Page { page: 9, limit: 10 },
            ..QueryRequest::default()
        };
        let page = run(fleet(), &request, today());
        assert!(page.items.is_empty());
        assert_eq!(page.meta.map(|m| m.total_pages), Some(1));
    }
}
