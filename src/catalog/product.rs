//! Financial product entity

use crate::core::error::ValidationError;
use crate::core::validation::{date, required};
use crate::core::{Entity, FieldAccessor, FieldValue};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A financial product offered in the catalog
///
/// Serialized with `date_release` and `date_revision` keys. Deserializing
/// goes through [`ProductDraft`], so invalid payloads are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductDraft")]
pub struct FinancialProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub date_release: NaiveDate,
    pub date_revision: NaiveDate,
}

impl FinancialProduct {
    /// Build a product, checking every text field is present
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        logo: impl Into<String>,
        date_release: NaiveDate,
        date_revision: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            logo: logo.into(),
            date_release,
            date_revision,
        };

        let check = required();
        check("id", &product.id)?;
        check("name", &product.name)?;
        check("description", &product.description)?;
        check("logo", &product.logo)?;

        Ok(product)
    }

    /// Editable form of this product, dates as `YYYY-MM-DD`
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            logo: self.logo.clone(),
            date_release: self.date_release.format("%Y-%m-%d").to_string(),
            date_revision: self.date_revision.format("%Y-%m-%d").to_string(),
        }
    }
}

impl FieldAccessor for FinancialProduct {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::from(self.id.as_str())),
            "name" => Some(FieldValue::from(self.name.as_str())),
            "description" => Some(FieldValue::from(self.description.as_str())),
            "logo" => Some(FieldValue::from(self.logo.as_str())),
            "date_release" => Some(FieldValue::Date(self.date_release)),
            "date_revision" => Some(FieldValue::Date(self.date_revision)),
            _ => None,
        }
    }
}

impl Entity for FinancialProduct {
    fn resource_name() -> &'static str {
        "products"
    }

    fn resource_name_singular() -> &'static str {
        "product"
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["name", "description"]
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Unvalidated product input, as typed in a form or received from an API
///
/// Dates are text: `YYYY-MM-DD` or an RFC 3339 timestamp. Both the
/// `date_release` and `dateRelease` spellings are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDraft {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    #[serde(alias = "dateRelease")]
    pub date_release: String,
    #[serde(alias = "dateRevision")]
    pub date_revision: String,
}

impl TryFrom<ProductDraft> for FinancialProduct {
    type Error = ValidationError;

    fn try_from(draft: ProductDraft) -> Result<Self, Self::Error> {
        let parse = date();
        let date_release = parse("date_release", &draft.date_release)?;
        let date_revision = parse("date_revision", &draft.date_revision)?;

        FinancialProduct::new(
            draft.id,
            draft.name,
            draft.description,
            draft.logo,
            date_release,
            date_revision,
        )
    }
}
