//! Customers, their addresses and B2B purchasing companies.

use serde::{Deserialize, Serialize};
use storefront_schema_core::{DateTime, Id, UnsignedInt64};

use super::Metafield;
use crate::connection::{MailingAddressConnection, OrderConnection};
use crate::enums::{CountryCode, CustomerErrorCode};

// =============================================================================
// Customers
// =============================================================================

/// A customer represents a customer account with the shop. Customer accounts store contact information for the customer, saving logged-in customers the trouble of having to provide it at every checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Indicates whether the customer has consented to be sent marketing material via email.
    pub accepts_marketing: bool,
    /// A list of addresses for the customer.
    pub addresses: MailingAddressConnection,
    /// The date and time when the customer was created.
    pub created_at: DateTime,
    /// The customer’s default address.
    pub default_address: Option<MailingAddress>,
    /// The customer’s name, email or phone number.
    pub display_name: String,
    /// The customer’s email address.
    pub email: Option<String>,
    /// The customer’s first name.
    pub first_name: Option<String>,
    /// A unique ID for the customer.
    pub id: Id,
    /// The customer’s last name.
    pub last_name: Option<String>,
    /// A [custom field](https://shopify.dev/docs/apps/build/custom-data), including its `namespace` and `key`, that's associated with a Shopify resource for the purposes of adding and storing additional information.
    pub metafield: Option<Metafield>,
    /// A list of [custom fields](/docs/apps/build/custom-data) that a merchant associates with a Shopify resource.
    pub metafields: Vec<Option<Metafield>>,
    /// The number of orders that the customer has made at the store in their lifetime.
    pub number_of_orders: UnsignedInt64,
    /// The orders associated with the customer.
    pub orders: OrderConnection,
    /// The customer’s phone number.
    pub phone: Option<String>,
    /// A comma separated list of tags that have been added to the customer.
    /// Additional access scope required: unauthenticated_read_customer_tags.
    pub tags: Vec<String>,
    /// The date and time when the customer information was updated.
    pub updated_at: DateTime,
}

/// A CustomerAccessToken represents the unique token required to make modifications to the customer object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAccessToken {
    /// The customer’s access token.
    pub access_token: String,
    /// The date and time when the customer access token expires.
    pub expires_at: DateTime,
}

/// Represents an error that happens during execution of a customer mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUserError {
    /// The error code.
    pub code: Option<CustomerErrorCode>,
    /// The path to the input field that caused the error.
    pub field: Option<Vec<String>>,
    /// The error message.
    pub message: String,
}

/// Represents a mailing address for customers and shipping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailingAddress {
    /// The first line of the address. Typically the street address or PO Box number.
    pub address1: Option<String>,
    /// The second line of the address. Typically the number of the apartment, suite, or unit.
    pub address2: Option<String>,
    /// The name of the city, district, village, or town.
    pub city: Option<String>,
    /// The name of the customer's company or organization.
    pub company: Option<String>,
    /// The name of the country.
    pub country: Option<String>,
    /// The two-letter code for the country of the address.
    ///
    /// For example, US.
    ///
    /// Deprecated: use `countryCodeV2` instead.
    pub country_code: Option<String>,
    /// The two-letter code for the country of the address.
    ///
    /// For example, US.
    pub country_code_v2: Option<CountryCode>,
    /// The first name of the customer.
    pub first_name: Option<String>,
    /// A formatted version of the address, customized by the provided arguments.
    pub formatted: Vec<String>,
    /// A comma-separated list of the values for city, province, and country.
    pub formatted_area: Option<String>,
    /// A globally-unique ID.
    pub id: Id,
    /// The last name of the customer.
    pub last_name: Option<String>,
    /// The latitude coordinate of the customer address.
    pub latitude: Option<f64>,
    /// The longitude coordinate of the customer address.
    pub longitude: Option<f64>,
    /// The full name of the customer, based on firstName and lastName.
    pub name: Option<String>,
    /// A unique phone number for the customer.
    ///
    /// Formatted using E.164 standard. For example, _+16135551111_.
    pub phone: Option<String>,
    /// The region of the address, such as the province, state, or district.
    pub province: Option<String>,
    /// The alphanumeric code for the region.
    ///
    /// For example, ON.
    pub province_code: Option<String>,
    /// The zip or postal code of the address.
    pub zip: Option<String>,
}

// =============================================================================
// B2B
// =============================================================================

/// Represents information about the buyer that is interacting with the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasingCompany {
    /// The company associated to the order or draft order.
    pub company: Company,
    /// The company contact associated to the order or draft order.
    pub contact: Option<CompanyContact>,
    /// The company location associated to the order or draft order.
    pub location: CompanyLocation,
}

/// Represents information about a company which is also a customer of the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// The date and time ([ISO 8601 format](http://en.wikipedia.org/wiki/ISO_8601)) at which the company was created in Shopify.
    pub created_at: DateTime,
    /// A unique externally-supplied ID for the company.
    pub external_id: Option<String>,
    /// A globally-unique ID.
    pub id: Id,
    /// A [custom field](https://shopify.dev/docs/apps/build/custom-data), including its `namespace` and `key`, that's associated with a Shopify resource for the purposes of adding and storing additional information.
    pub metafield: Option<Metafield>,
    /// A list of [custom fields](/docs/apps/build/custom-data) that a merchant associates with a Shopify resource.
    pub metafields: Vec<Option<Metafield>>,
    /// The name of the company.
    pub name: String,
    /// The date and time ([ISO 8601 format](http://en.wikipedia.org/wiki/ISO_8601)) at which the company data was last modified.
    pub updated_at: DateTime,
}

/// A company's main point of contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyContact {
    /// The date and time ([ISO 8601 format](http://en.wikipedia.org/wiki/ISO_8601)) at which the company contact was created in Shopify.
    pub created_at: DateTime,
    /// A globally-unique ID.
    pub id: Id,
    /// The company contact's locale (language).
    pub locale: Option<String>,
    /// The company contact's job title.
    pub title: Option<String>,
    /// The date and time ([ISO 8601 format](http://en.wikipedia.org/wiki/ISO_8601)) at which the company contact information was last modified.
    pub updated_at: DateTime,
}

/// A company's location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyLocation {
    /// The date and time ([ISO 8601 format](http://en.wikipedia.org/wiki/ISO_8601)) at which the company location was created in Shopify.
    pub created_at: DateTime,
    /// A unique externally-supplied ID for the company.
    pub external_id: Option<String>,
    /// A globally-unique ID.
    pub id: Id,
    /// The preferred locale of the company location.
    pub locale: Option<String>,
    /// A [custom field](https://shopify.dev/docs/apps/build/custom-data), including its `namespace` and `key`, that's associated with a Shopify resource for the purposes of adding and storing additional information.
    pub metafield: Option<Metafield>,
    /// A list of [custom fields](/docs/apps/build/custom-data) that a merchant associates with a Shopify resource.
    pub metafields: Vec<Option<Metafield>>,
    /// The name of the company location.
    pub name: String,
    /// The date and time ([ISO 8601 format](http://en.wikipedia.org/wiki/ISO_8601)) at which the company location information was last modified.
    pub updated_at: DateTime,
}

impl Customer {
    /// First and last name joined, falling back to `displayName`.
    #[must_use]
    pub fn full_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(name), None) | (None, Some(name)) => name.to_owned(),
            (None, None) => self.display_name.clone(),
        }
    }
}

impl MailingAddress {
    /// The formatted address on a single line.
    #[must_use]
    pub fn single_line(&self) -> String {
        self.formatted.join(", ")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn address() -> MailingAddress {
        serde_json::from_value(serde_json::json!({
            "address1": "150 Elgin St",
            "address2": null,
            "city": "Ottawa",
            "company": null,
            "country": "Canada",
            "countryCode": "CA",
            "countryCodeV2": "CA",
            "firstName": "Ana",
            "formatted": ["150 Elgin St", "Ottawa ON K2P 1L4", "Canada"],
            "formattedArea": "Ottawa ON, Canada",
            "id": "gid://shopify/MailingAddress/1",
            "lastName": "Silva",
            "latitude": 45.42,
            "longitude": -75.69,
            "name": "Ana Silva",
            "phone": null,
            "province": "Ontario",
            "provinceCode": "ON",
            "zip": "K2P 1L4"
        }))
        .unwrap()
    }

    #[test]
    fn test_single_line_address() {
        assert_eq!(
            address().single_line(),
            "150 Elgin St, Ottawa ON K2P 1L4, Canada"
        );
        assert_eq!(address().country_code_v2, Some(CountryCode::Ca));
    }

    #[test]
    fn test_user_error_without_code() {
        let error: CustomerUserError = serde_json::from_value(serde_json::json!({
            "code": null,
            "field": null,
            "message": "Unidentified customer"
        }))
        .unwrap();
        assert!(error.code.is_none());
        assert!(error.field.is_none());
    }
}
