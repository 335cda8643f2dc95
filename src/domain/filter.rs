// src/domain/filter.rs

use crate::domain::listing::{CatalogError, Category, Feature, Listing, Status};
use thiserror::Error;
use url::form_urlencoded;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("'{key}' must be a whole number, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}

/// Search criteria for the listings page.
///
/// Every present criterion must hold; empty vectors and `None` mean
/// "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub statuses: Vec<Status>,
    pub categories: Vec<Category>,
    pub locations: Vec<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub min_bedrooms: Option<u8>,
    pub features: Vec<Feature>,
}

impl ListingFilter {
    pub fn matches(&self, listing: &Listing) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&listing.status) {
            return false;
        }

        if !self.categories.is_empty() && !self.categories.contains(&listing.category) {
            return false;
        }

        if !self.locations.is_empty() {
            let location = listing.location.to_lowercase();
            let hit = self
                .locations
                .iter()
                .any(|loc| location.contains(&loc.to_lowercase()));
            if !hit {
                return false;
            }
        }

        if self.min_price.is_some_and(|min| listing.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| listing.price > max) {
            return false;
        }

        if self.min_bedrooms.is_some_and(|min| listing.bedrooms < min) {
            return false;
        }

        self.features.iter().all(|f| listing.has_feature(*f))
    }

    pub fn is_active(&self) -> bool {
        *self != Self::cleared()
    }

    /// No criteria; matches the whole catalog.
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Parse the listings page query string.
    ///
    /// Slug keys accept both repetition (`status=a&status=b`) and commas
    /// (`status=a,b`); `location` only repeats. Empty values and unknown keys
    /// are skipped.
    pub fn from_query(query: &str) -> Result<Self, FilterError> {
        let mut filter = ListingFilter::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let items = value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty());

            match key.as_ref() {
                "status" => {
                    for item in items {
                        push_unique(&mut filter.statuses, item.parse()?);
                    }
                }
                "type" => {
                    for item in items {
                        push_unique(&mut filter.categories, item.parse()?);
                    }
                }
                "features" => {
                    for item in items {
                        push_unique(&mut filter.features, item.parse()?);
                    }
                }
                // Free text like "Las Rozas, Madrid": one term per pair, never split.
                "location" => {
                    let term = value.trim();
                    if !term.is_empty() {
                        push_unique(&mut filter.locations, term.to_string());
                    }
                }
                "minPrice" => filter.min_price = parse_number("minPrice", &value)?,
                "maxPrice" => filter.max_price = parse_number("maxPrice", &value)?,
                "bedrooms" => filter.min_bedrooms = parse_number("bedrooms", &value)?,
                _ => {}
            }
        }

        Ok(filter)
    }

    /// Inverse of [`ListingFilter::from_query`]; empty when no criteria are set.
    pub fn to_query(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());

        for s in &self.statuses {
            out.append_pair("status", s.slug());
        }
        for c in &self.categories {
            out.append_pair("type", c.slug());
        }
        for loc in &self.locations {
            out.append_pair("location", loc);
        }
        if let Some(v) = self.min_price {
            out.append_pair("minPrice", &v.to_string());
        }
        if let Some(v) = self.max_price {
            out.append_pair("maxPrice", &v.to_string());
        }
        if let Some(v) = self.min_bedrooms {
            out.append_pair("bedrooms", &v.to_string());
        }
        for f in &self.features {
            out.append_pair("features", f.slug());
        }

        out.finish()
    }
}

fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}

fn parse_number<T: std::str::FromStr>(
    key: &'static str,
    raw: &str,
) -> Result<Option<T>, FilterError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| FilterError::InvalidNumber {
            key,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;

    fn ids(filter: &ListingFilter) -> Vec<u32> {
        catalog::filter(filter).iter().map(|l| l.id).collect()
    }

    #[test]
    fn status_filter_returns_only_exact_status() {
        for status in Status::ALL {
            let filter = ListingFilter {
                statuses: vec![status],
                ..Default::default()
            };
            let found = catalog::filter(&filter);
            assert!(found.iter().all(|l| l.status == status));
            let expected = catalog::all().iter().filter(|l| l.status == status).count();
            assert_eq!(found.len(), expected);
        }
    }

    #[test]
    fn bedroom_minimum_is_inclusive() {
        let filter = ListingFilter {
            min_bedrooms: Some(4),
            ..Default::default()
        };
        let found = catalog::filter(&filter);
        assert!(found.iter().all(|l| l.bedrooms >= 4));
        assert_eq!(ids(&filter), vec![1, 5]);
    }

    #[test]
    fn price_range_bounds_are_inclusive() {
        let filter = ListingFilter {
            min_price: Some(195_000),
            max_price: Some(285_000),
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![1, 2, 3]);
    }

    #[test]
    fn inverted_price_range_matches_nothing() {
        let filter = ListingFilter {
            min_price: Some(400_000),
            max_price: Some(200_000),
            ..Default::default()
        };
        assert!(ids(&filter).is_empty());
    }

    #[test]
    fn features_must_all_be_present() {
        let filter = ListingFilter {
            features: vec![Feature::Pool, Feature::Garden],
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![1, 5]);

        let filter = ListingFilter {
            features: vec![Feature::Pool, Feature::Elevator],
            ..Default::default()
        };
        assert!(ids(&filter).is_empty());
    }

    #[test]
    fn location_matches_any_substring_ignoring_case() {
        let filter = ListingFilter {
            locations: vec!["getafe".into(), "TOLEDO".into()],
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![1, 3]);
    }

    #[test]
    fn criteria_are_anded() {
        let filter = ListingFilter {
            statuses: vec![Status::Available, Status::InConstruction],
            categories: vec![Category::Apartment],
            min_bedrooms: Some(3),
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![2]);
    }

    #[test]
    fn toggling_then_clearing_restores_full_set() {
        let full = ids(&ListingFilter::default());

        let mut filter = ListingFilter::default();
        filter.statuses.push(Status::SoldOut);
        assert!(filter.is_active());
        assert_eq!(ids(&filter), vec![5]);

        filter.statuses.retain(|s| *s != Status::SoldOut);
        assert!(!filter.is_active());
        assert_eq!(ids(&filter), full);

        filter.min_bedrooms = Some(4);
        assert_ne!(ids(&filter), full);
        assert_eq!(ids(&ListingFilter::cleared()), full);
    }

    #[test]
    fn parses_repeated_and_comma_separated_keys() {
        let filter = ListingFilter::from_query(
            "status=available&status=coming-soon,sold-out&type=chalet&features=pool,garden&bedrooms=3&minPrice=&maxPrice=500000&utm_source=x",
        )
        .unwrap();

        assert_eq!(
            filter.statuses,
            vec![Status::Available, Status::ComingSoon, Status::SoldOut]
        );
        assert_eq!(filter.categories, vec![Category::Chalet]);
        assert_eq!(filter.features, vec![Feature::Pool, Feature::Garden]);
        assert_eq!(filter.min_bedrooms, Some(3));
        assert_eq!(filter.min_price, None);
        assert_eq!(filter.max_price, Some(500_000));
    }

    #[test]
    fn rejects_unknown_slug_and_bad_numbers() {
        assert_eq!(
            ListingFilter::from_query("status=reserved"),
            Err(FilterError::Catalog(CatalogError::UnknownStatus(
                "reserved".into()
            )))
        );
        assert_eq!(
            ListingFilter::from_query("bedrooms=lots"),
            Err(FilterError::InvalidNumber {
                key: "bedrooms",
                value: "lots".into()
            })
        );
        assert!(ListingFilter::from_query("minPrice=-5").is_err());
    }

    #[test]
    fn query_string_reflects_filter_state() {
        let filter = ListingFilter {
            statuses: vec![Status::InConstruction],
            categories: vec![Category::Apartment, Category::Duplex],
            locations: vec!["Las Rozas".into()],
            min_price: Some(150_000),
            max_price: None,
            min_bedrooms: Some(2),
            features: vec![Feature::AirConditioning],
        };
        let query = filter.to_query();
        assert!(query.contains("location=Las+Rozas"));
        assert_eq!(ListingFilter::from_query(&query), Ok(filter));
        assert_eq!(ListingFilter::default().to_query(), "");
    }

    #[test]
    fn location_with_comma_round_trips_as_one_term() {
        let filter = ListingFilter {
            locations: vec!["Las Rozas, Madrid".into()],
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![5]);

        let back = ListingFilter::from_query(&filter.to_query()).unwrap();
        assert_eq!(back, filter);
        assert_eq!(ids(&back), vec![5]);

        let two = ListingFilter::from_query("location=Getafe&location=Toledo").unwrap();
        assert_eq!(two.locations, vec!["Getafe", "Toledo"]);
    }
}
