//! Customer and metafield mutation error codes.

use serde::{Deserialize, Serialize};

use super::impl_schema_enum;

/// Possible error codes that can be returned by `CustomerUserError`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerErrorCode {
    /// Customer already enabled.
    AlreadyEnabled,
    /// Input email contains an invalid domain name.
    BadDomain,
    /// The input value is blank.
    Blank,
    /// Input contains HTML tags.
    ContainsHtmlTags,
    /// Input contains URL.
    ContainsUrl,
    /// Customer is disabled.
    CustomerDisabled,
    /// The input value is invalid.
    Invalid,
    /// Multipass token is not valid.
    InvalidMultipassRequest,
    /// Address does not exist.
    NotFound,
    /// Input password starts or ends with whitespace.
    PasswordStartsOrEndsWithWhitespace,
    /// The input value is already taken.
    Taken,
    /// Invalid activation token.
    TokenInvalid,
    /// The input value is too long.
    TooLong,
    /// The input value is too short.
    TooShort,
    /// Unidentified customer.
    UnidentifiedCustomer,
}

/// Possible error codes that can be returned by `MetafieldDeleteUserError`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MetafieldDeleteErrorCode {
    /// The owner ID is invalid.
    InvalidOwner,
    /// Metafield not found.
    MetafieldDoesNotExist,
}

/// Possible error codes that can be returned by `MetafieldsSetUserError`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MetafieldsSetUserErrorCode {
    /// The current app is not authorized to perform this action.
    AppNotAuthorized,
    /// The input value is blank.
    Blank,
    /// The input value isn't included in the list.
    Inclusion,
    /// The owner ID is invalid.
    InvalidOwner,
    /// The type is invalid.
    InvalidType,
    /// The value is invalid for metafield type or for definition options.
    InvalidValue,
    /// The input value should be less than or equal to the maximum value allowed.
    LessThanOrEqualTo,
    /// The input value needs to be blank.
    Present,
    /// The input value is too long.
    TooLong,
    /// The input value is too short.
    TooShort,
}

impl_schema_enum!(
    CustomerErrorCode,
    MetafieldDeleteErrorCode,
    MetafieldsSetUserErrorCode,
);
