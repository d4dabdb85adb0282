//! Countries, languages, markets and physical locations.

use serde::{Deserialize, Serialize};
use storefront_schema_core::Id;

use super::Metafield;
use crate::enums::{CountryCode, CurrencyCode, LanguageCode, UnitSystem};

// =============================================================================
// Localization
// =============================================================================

/// A country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// The languages available for the country.
    pub available_languages: Vec<Language>,
    /// The currency of the country.
    pub currency: Currency,
    /// The default language for the country.
    pub default_language: Language,
    /// The ISO code of the country.
    pub iso_code: CountryCode,
    /// The market that includes this country.
    ///
    /// Deprecated: this field is no longer supported.
    pub market: Option<Market>,
    /// The name of the country.
    pub name: String,
    /// The unit system used in the country.
    pub unit_system: UnitSystem,
}

/// A currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    /// The ISO code of the currency.
    pub iso_code: CurrencyCode,
    /// The name of the currency.
    pub name: String,
    /// The symbol of the currency.
    pub symbol: String,
}

/// A language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// The name of the language in the language itself. If the language uses capitalization, it is capitalized for a mid-sentence position.
    pub endonym_name: String,
    /// The ISO code.
    pub iso_code: LanguageCode,
    /// The name of the language in the current language.
    pub name: String,
}

/// Information about the localized experiences configured for the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Localization {
    /// The list of countries with enabled localized experiences.
    pub available_countries: Vec<Country>,
    /// The list of languages available for the active country.
    pub available_languages: Vec<Language>,
    /// The country of the active localized experience. Use the `@inContext` directive to change this value.
    pub country: Country,
    /// The language of the active localized experience. Use the `@inContext` directive to change this value.
    pub language: Language,
    /// The market including the country of the active localized experience. Use the `@inContext` directive to change this value.
    ///
    /// Deprecated: this field is no longer supported.
    pub market: Market,
}

/// A group of one or more regions of the world that a merchant is targeting for sales. To learn more about markets, refer to [the Shopify Markets conceptual overview](/docs/apps/markets).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    /// A human-readable unique string for the market automatically generated from its title.
    pub handle: String,
    /// A globally-unique ID.
    pub id: Id,
    /// A [custom field](https://shopify.dev/docs/apps/build/custom-data), including its `namespace` and `key`, that's associated with a Shopify resource for the purposes of adding and storing additional information.
    pub metafield: Option<Metafield>,
    /// A list of [custom fields](/docs/apps/build/custom-data) that a merchant associates with a Shopify resource.
    pub metafields: Vec<Option<Metafield>>,
}

// =============================================================================
// Locations
// =============================================================================

/// Represents a location where product inventory is held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// The address of the location.
    pub address: LocationAddress,
    /// A globally-unique ID.
    pub id: Id,
    /// A [custom field](https://shopify.dev/docs/apps/build/custom-data), including its `namespace` and `key`, that's associated with a Shopify resource for the purposes of adding and storing additional information.
    pub metafield: Option<Metafield>,
    /// A list of [custom fields](/docs/apps/build/custom-data) that a merchant associates with a Shopify resource.
    pub metafields: Vec<Option<Metafield>>,
    /// The name of the location.
    pub name: String,
}

/// Represents the address of a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationAddress {
    /// The first line of the address for the location.
    pub address1: Option<String>,
    /// The second line of the address for the location.
    pub address2: Option<String>,
    /// The city of the location.
    pub city: Option<String>,
    /// The country of the location.
    pub country: Option<String>,
    /// The country code of the location.
    pub country_code: Option<String>,
    /// A formatted version of the address for the location.
    pub formatted: Vec<String>,
    /// The latitude coordinates of the location.
    pub latitude: Option<f64>,
    /// The longitude coordinates of the location.
    pub longitude: Option<f64>,
    /// The phone number of the location.
    pub phone: Option<String>,
    /// The province of the location.
    pub province: Option<String>,
    /// The code for the province, state, or district of the address of the location.
    pub province_code: Option<String>,
    /// The ZIP code of the location.
    pub zip: Option<String>,
}

/// The availability of a product variant at a particular location.
/// Local pick-up must be enabled in the  store's shipping settings, otherwise this will return an empty result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreAvailability {
    /// Whether the product variant is in-stock at this location.
    pub available: bool,
    /// The location where this product variant is stocked at.
    pub location: Location,
    /// Returns the estimated amount of time it takes for pickup to be ready (Example: Usually ready in 24 hours).
    pub pick_up_time: String,
    /// The quantity of the product variant in-stock at this location.
    pub quantity_available: i32,
}

impl Localization {
    /// Find an enabled country by ISO code.
    #[must_use]
    pub fn country(&self, iso_code: CountryCode) -> Option<&Country> {
        self.available_countries
            .iter()
            .find(|country| country.iso_code == iso_code)
    }
}

impl Country {
    /// Whether the country offers the given language.
    #[must_use]
    pub fn supports_language(&self, iso_code: LanguageCode) -> bool {
        self.available_languages
            .iter()
            .any(|language| language.iso_code == iso_code)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn language(iso_code: &str, name: &str) -> serde_json::Value {
        serde_json::json!({ "endonymName": name, "isoCode": iso_code, "name": name })
    }

    #[test]
    fn test_country_lookup() {
        let english = language("EN", "English");
        let french = language("FR", "français");
        let canada = serde_json::json!({
            "availableLanguages": [english, french],
            "currency": { "isoCode": "CAD", "name": "Canadian Dollar", "symbol": "$" },
            "defaultLanguage": english,
            "isoCode": "CA",
            "market": null,
            "name": "Canada",
            "unitSystem": "METRIC_SYSTEM"
        });
        let localization: Localization = serde_json::from_value(serde_json::json!({
            "availableCountries": [canada],
            "availableLanguages": [english, french],
            "country": canada,
            "language": english,
            "market": { "handle": "ca", "id": "gid://shopify/Market/1", "metafield": null, "metafields": [] }
        }))
        .unwrap();

        let country = localization.country(CountryCode::Ca).unwrap();
        assert_eq!(country.currency.iso_code, CurrencyCode::Cad);
        assert!(country.supports_language(LanguageCode::Fr));
        assert!(!country.supports_language(LanguageCode::De));
        assert!(localization.country(CountryCode::Us).is_none());
    }
}
