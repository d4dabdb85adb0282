//! Media and image enums.

use serde::{Deserialize, Serialize};

use super::impl_schema_enum;

/// The part of the image that should remain after cropping.
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
pub enum CropRegion {
    /// Keep the bottom of the image.
    Bottom,
    /// Keep the center of the image.
    Center,
    /// Keep the left of the image.
    Left,
    /// Keep the right of the image.
    Right,
    /// Keep the top of the image.
    Top,
}

/// List of supported image content types.
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
pub enum ImageContentType {
    /// A JPG image.
    Jpg,
    /// A PNG image.
    Png,
    /// A WEBP image.
    Webp,
}

/// The possible content types for a media object.
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
pub enum MediaContentType {
    /// An externally hosted video.
    ExternalVideo,
    /// A Shopify hosted image.
    Image,
    /// A 3d model.
    #[serde(rename = "MODEL_3D")]
    #[strum(serialize = "MODEL_3D")]
    Model3d,
    /// A Shopify hosted video.
    Video,
}

/// Host for a Media Resource.
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
pub enum MediaHost {
    /// Host for Vimeo embedded videos.
    Vimeo,
    /// Host for YouTube embedded videos.
    Youtube,
}

/// The possible formats for a media presentation.
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
pub enum MediaPresentationFormat {
    /// A media image presentation.
    Image,
    /// A model viewer presentation.
    ModelViewer,
}

impl_schema_enum!(
    CropRegion,
    ImageContentType,
    MediaContentType,
    MediaHost,
    MediaPresentationFormat,
);

impl ImageContentType {
    /// The MIME type of images in this format.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Jpg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_model_3d_literal() {
        let kind: MediaContentType = serde_json::from_str("\"MODEL_3D\"").unwrap();
        assert_eq!(kind, MediaContentType::Model3d);
        assert_eq!("MODEL_3D".parse::<MediaContentType>().unwrap(), kind);
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(ImageContentType::Webp.mime_type(), "image/webp");
    }
}
