//! Filter Engine
//!
//! Narrows an item snapshot by shop, category, purchase status and a
//! case-insensitive name substring. Pure and order-preserving.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::{DomainError, Item};

/// Select value meaning "no constraint"
pub const ALL: &str = "all";

/// Shop or category constraint; serialises as `"all"` or the bare id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdFilter {
    #[default]
    All,
    Only(u32),
}

impl IdFilter {
    pub fn accepts(&self, id: u32) -> bool {
        match self {
            IdFilter::All => true,
            IdFilter::Only(wanted) => *wanted == id,
        }
    }
}

impl FromStr for IdFilter {
    type Err = DomainError;

    /// Parses the select value: `"all"` or a decimal id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            return Ok(IdFilter::All);
        }
        s.trim()
            .parse::<u32>()
            .map(IdFilter::Only)
            .map_err(|_| DomainError::InvalidInput(format!("filter id `{}`", s)))
    }
}

impl fmt::Display for IdFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdFilter::All => f.write_str(ALL),
            IdFilter::Only(id) => write!(f, "{}", id),
        }
    }
}

impl Serialize for IdFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            IdFilter::All => serializer.serialize_str(ALL),
            IdFilter::Only(id) => serializer.serialize_u32(*id),
        }
    }
}

impl<'de> Deserialize<'de> for IdFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Id(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Id(id) => Ok(IdFilter::Only(id)),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Purchase status constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusFilter {
    #[default]
    All,
    Bought,
    NotBought,
}

impl StatusFilter {
    /// Options in the order the status radio group shows them
    pub const OPTIONS: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Bought, StatusFilter::NotBought];

    pub fn accepts(&self, is_bought: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Bought => is_bought,
            StatusFilter::NotBought => !is_bought,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => ALL,
            StatusFilter::Bought => "bought",
            StatusFilter::NotBought => "notBought",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Bought => "Bought",
            StatusFilter::NotBought => "Not bought",
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "bought" => Ok(StatusFilter::Bought),
            "notBought" => Ok(StatusFilter::NotBought),
            other => Err(DomainError::InvalidInput(format!("status `{}`", other))),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-selected narrowing constraints
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(rename = "shopId")]
    pub shop: IdFilter,
    #[serde(rename = "categoryId")]
    pub category: IdFilter,
    pub status: StatusFilter,
    /// Case-insensitive substring of the item name; empty matches all
    #[serde(rename = "nameSubstring")]
    pub name: String,
}

impl FilterCriteria {
    pub fn matches(&self, item: &Item) -> bool {
        self.shop.accepts(item.shop.id)
            && self.category.accepts(item.category.id)
            && self.status.accepts(item.is_bought)
            && item.name.to_lowercase().contains(&self.name.to_lowercase())
    }

    /// True when every item passes
    pub fn is_unfiltered(&self) -> bool {
        *self == FilterCriteria::default()
    }

    /// Overwrite the fields present in `update`, keep the rest.
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(shop) = update.shop {
            self.shop = shop;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
    }
}

/// Partial criteria change coming from a single filter control
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterUpdate {
    #[serde(rename = "shopId")]
    pub shop: Option<IdFilter>,
    #[serde(rename = "categoryId")]
    pub category: Option<IdFilter>,
    pub status: Option<StatusFilter>,
    #[serde(rename = "nameSubstring")]
    pub name: Option<String>,
}

impl FilterUpdate {
    pub fn shop(shop: IdFilter) -> Self {
        Self { shop: Some(shop), ..Default::default() }
    }

    pub fn category(category: IdFilter) -> Self {
        Self { category: Some(category), ..Default::default() }
    }

    pub fn status(status: StatusFilter) -> Self {
        Self { status: Some(status), ..Default::default() }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Default::default() }
    }
}

/// Items matching `criteria`, in their original relative order
pub fn apply(items: &[Item], criteria: &FilterCriteria) -> Vec<Item> {
    items.iter().filter(|item| criteria.matches(item)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Shop};

    fn make_item(name: &str, shop_id: u32, category_id: u32, is_bought: bool) -> Item {
        let mut item = Item::new(
            name,
            Shop::new(shop_id, format!("Shop {}", shop_id)),
            Category::new(category_id, format!("Category {}", category_id)),
        );
        item.is_bought = is_bought;
        item
    }

    fn sample() -> Vec<Item> {
        vec![
            make_item("Milk", 1, 5, false),
            make_item("milk soap", 2, 1, true),
        ]
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_default_criteria_returns_everything() {
        let items = vec![
            make_item("B", 2, 2, true),
            make_item("A", 1, 1, false),
            make_item("C", 3, 3, false),
        ];

        let filtered = apply(&items, &FilterCriteria::default());

        assert_eq!(filtered, items);
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let criteria = FilterCriteria { name: "milk".to_string(), ..Default::default() };
        assert_eq!(names(&apply(&sample(), &criteria)), vec!["Milk", "milk soap"]);

        let criteria = FilterCriteria { name: "SOAP".to_string(), ..Default::default() };
        assert_eq!(names(&apply(&sample(), &criteria)), vec!["milk soap"]);
    }

    #[test]
    fn test_status_filter() {
        let criteria = FilterCriteria {
            name: "milk".to_string(),
            status: StatusFilter::Bought,
            ..Default::default()
        };
        assert_eq!(names(&apply(&sample(), &criteria)), vec!["milk soap"]);

        let criteria = FilterCriteria { status: StatusFilter::NotBought, ..Default::default() };
        assert_eq!(names(&apply(&sample(), &criteria)), vec!["Milk"]);
    }

    #[test]
    fn test_shop_filter() {
        let criteria = FilterCriteria {
            name: "milk".to_string(),
            shop: IdFilter::Only(1),
            ..Default::default()
        };
        assert_eq!(names(&apply(&sample(), &criteria)), vec!["Milk"]);
    }

    #[test]
    fn test_category_filter() {
        let criteria = FilterCriteria { category: IdFilter::Only(1), ..Default::default() };
        assert_eq!(names(&apply(&sample(), &criteria)), vec!["milk soap"]);

        let criteria = FilterCriteria { category: IdFilter::Only(6), ..Default::default() };
        assert!(apply(&sample(), &criteria).is_empty());
    }

    #[test]
    fn test_all_predicates_must_hold() {
        let criteria = FilterCriteria {
            shop: IdFilter::Only(2),
            category: IdFilter::Only(1),
            status: StatusFilter::NotBought,
            name: String::new(),
        };
        assert!(apply(&sample(), &criteria).is_empty());
    }

    #[test]
    fn test_apply_is_repeatable_and_pure() {
        let items = sample();
        let before = items.clone();
        let criteria = FilterCriteria { name: "mil".to_string(), ..Default::default() };

        let first = apply(&items, &criteria);
        let second = apply(&items, &criteria);

        assert_eq!(first, second);
        assert_eq!(items, before);
    }

    #[test]
    fn test_parse_select_values() {
        assert_eq!("all".parse::<IdFilter>(), Ok(IdFilter::All));
        assert_eq!("3".parse::<IdFilter>(), Ok(IdFilter::Only(3)));
        assert!("MARKET".parse::<IdFilter>().is_err());

        assert_eq!("notBought".parse::<StatusFilter>(), Ok(StatusFilter::NotBought));
        assert!("done".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_select_values_display_back() {
        assert_eq!(IdFilter::All.to_string(), "all");
        assert_eq!(IdFilter::Only(4).to_string(), "4");
        for status in StatusFilter::OPTIONS {
            assert_eq!(status.as_str().parse::<StatusFilter>(), Ok(status));
        }
    }

    #[test]
    fn test_merge_partial_update() {
        let mut criteria = FilterCriteria::default();
        assert!(criteria.is_unfiltered());

        criteria.merge(FilterUpdate::shop(IdFilter::Only(2)));
        criteria.merge(FilterUpdate::name("soap"));

        assert_eq!(criteria.shop, IdFilter::Only(2));
        assert_eq!(criteria.category, IdFilter::All);
        assert_eq!(criteria.status, StatusFilter::All);
        assert_eq!(criteria.name, "soap");
        assert!(!criteria.is_unfiltered());

        criteria.merge(FilterUpdate::default());
        assert_eq!(criteria.shop, IdFilter::Only(2));
    }

    #[test]
    fn test_criteria_json_shape() {
        let criteria = FilterCriteria {
            shop: IdFilter::Only(3),
            category: IdFilter::All,
            status: StatusFilter::NotBought,
            name: "milk".to_string(),
        };

        let json = serde_json::to_value(&criteria).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "shopId": 3,
                "categoryId": "all",
                "status": "notBought",
                "nameSubstring": "milk",
            })
        );
        assert_eq!(serde_json::from_value::<FilterCriteria>(json).unwrap(), criteria);
    }

    #[test]
    fn test_partial_update_from_json() {
        let update: FilterUpdate = serde_json::from_str(r#"{ "shopId": "all", "status": "bought" }"#).unwrap();
        assert_eq!(update.shop, Some(IdFilter::All));
        assert_eq!(update.status, Some(StatusFilter::Bought));
        assert!(update.category.is_none());
        assert!(update.name.is_none());

        assert!(serde_json::from_str::<FilterUpdate>(r#"{ "shopId": "MARKET" }"#).is_err());
    }
}
