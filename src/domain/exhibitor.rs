use serde::{Deserialize, Serialize};

use super::category::Category;

pub const NOT_AVAILABLE: &str = "Not Available";
pub const NAME_NOT_FOUND: &str = "Name Not Found";
pub const NO_DESCRIPTION: &str = "No description";

pub const COLUMNS: [&str; 6] = [
    "Name",
    "Stand",
    "About",
    "Products & Services",
    "Website",
    "Category",
];

/// One exhibitor row. Every field holds either extracted text or a sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExhibitorRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Stand")]
    pub stand: String,
    #[serde(rename = "About")]
    pub about: String,
    #[serde(rename = "Products & Services")]
    pub products_services: String,
    #[serde(rename = "Website")]
    pub website: String,
    #[serde(rename = "Category")]
    pub category: Category,
}

impl Default for ExhibitorRecord {
    fn default() -> Self {
        ExhibitorRecord {
            name: NOT_AVAILABLE.to_string(),
            stand: NOT_AVAILABLE.to_string(),
            about: NOT_AVAILABLE.to_string(),
            products_services: NOT_AVAILABLE.to_string(),
            website: NOT_AVAILABLE.to_string(),
            category: Category::Unclassified,
        }
    }
}

/// The five text fields pulled out of a listing fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Stand,
    About,
    ProductsServices,
    Website,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Stand => "Stand",
            Field::About => "About",
            Field::ProductsServices => "Products & Services",
            Field::Website => "Website",
        }
    }

    /// Written when the field's markup is not present in the fragment.
    pub fn missing_sentinel(&self) -> &'static str {
        match self {
            Field::Name => NAME_NOT_FOUND,
            _ => NOT_AVAILABLE,
        }
    }

    /// Written when extracting the field failed.
    pub fn error_sentinel(&self) -> String {
        format!("Error: {} Extraction", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::{ExhibitorRecord, Field, NOT_AVAILABLE};
    use crate::domain::category::Category;

    #[test]
    fn default_record_is_fully_populated() {
        let record = ExhibitorRecord::default();

        for value in [
            &record.name,
            &record.stand,
            &record.about,
            &record.products_services,
            &record.website,
        ] {
            assert_eq!(value, NOT_AVAILABLE);
        }
        assert_eq!(record.category, Category::Unclassified);
    }

    #[test]
    fn error_sentinels_name_the_field() {
        assert_eq!(Field::Name.error_sentinel(), "Error: Name Extraction");
        assert_eq!(Field::Website.error_sentinel(), "Error: Website Extraction");
        assert_eq!(
            Field::ProductsServices.error_sentinel(),
            "Error: Products & Services Extraction"
        );
    }

    #[test]
    fn only_name_has_a_dedicated_missing_sentinel() {
        assert_eq!(Field::Name.missing_sentinel(), "Name Not Found");
        assert_eq!(Field::Stand.missing_sentinel(), "Not Available");
        assert_eq!(Field::ProductsServices.missing_sentinel(), "Not Available");
    }
}
