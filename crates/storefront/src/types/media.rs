//! Product media: images, videos, 3D models and generic files.

use serde::{Deserialize, Serialize};
use storefront_schema_core::{Id, Json, Url};

use super::Image;
use crate::enums::{MediaContentType, MediaHost};

/// Represents a video hosted outside of Shopify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalVideo {
    /// A word or phrase to share the nature or contents of a media.
    pub alt: Option<String>,
    /// The embed URL of the video for the respective host.
    pub embed_url: Url,
    /// The URL.
    ///
    /// Deprecated: use `originUrl` instead.
    pub embedded_url: Url,
    /// The host of the external video.
    pub host: MediaHost,
    /// A globally-unique ID.
    pub id: Id,
    /// The media content type.
    pub media_content_type: MediaContentType,
    /// The origin URL of the video on the respective host.
    pub origin_url: Url,
    /// The presentation for a media.
    pub presentation: Option<MediaPresentation>,
    /// The preview image for the media.
    pub preview_image: Option<Image>,
}

/// Represents a Shopify hosted image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaImage {
    /// A word or phrase to share the nature or contents of a media.
    pub alt: Option<String>,
    /// A globally-unique ID.
    pub id: Id,
    /// The image for the media.
    pub image: Option<Image>,
    /// The media content type.
    pub media_content_type: MediaContentType,
    /// The presentation for a media.
    pub presentation: Option<MediaPresentation>,
    /// The preview image for the media.
    pub preview_image: Option<Image>,
}

/// Represents a Shopify hosted 3D model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model3d {
    /// A word or phrase to share the nature or contents of a media.
    pub alt: Option<String>,
    /// A globally-unique ID.
    pub id: Id,
    /// The media content type.
    pub media_content_type: MediaContentType,
    /// The presentation for a media.
    pub presentation: Option<MediaPresentation>,
    /// The preview image for the media.
    pub preview_image: Option<Image>,
    /// The sources for a 3d model.
    pub sources: Vec<Model3dSource>,
}

/// Represents a source for a Shopify hosted 3d model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model3dSource {
    /// The filesize of the 3d model.
    pub filesize: i32,
    /// The format of the 3d model.
    pub format: String,
    /// The MIME type of the 3d model.
    pub mime_type: String,
    /// The URL of the 3d model.
    pub url: String,
}

/// Represents a Shopify hosted video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// A word or phrase to share the nature or contents of a media.
    pub alt: Option<String>,
    /// A globally-unique ID.
    pub id: Id,
    /// The media content type.
    pub media_content_type: MediaContentType,
    /// The presentation for a media.
    pub presentation: Option<MediaPresentation>,
    /// The preview image for the media.
    pub preview_image: Option<Image>,
    /// The sources for a video.
    pub sources: Vec<VideoSource>,
}

/// Represents a source for a Shopify hosted video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSource {
    /// The format of the video source.
    pub format: String,
    /// The height of the video.
    pub height: i32,
    /// The video MIME type.
    pub mime_type: String,
    /// The URL of the video.
    pub url: String,
    /// The width of the video.
    pub width: i32,
}

/// A media presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPresentation {
    /// A JSON object representing a presentation view.
    pub as_json: Option<Json>,
    /// A globally-unique ID.
    pub id: Id,
}

/// The generic file resource lets you manage files in a merchant’s store. Generic files include any file that doesn’t fit into a designated type such as image or video. Example: PDF, JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericFile {
    /// A word or phrase to indicate the contents of a file.
    pub alt: Option<String>,
    /// A globally-unique ID.
    pub id: Id,
    /// The MIME type of the file.
    pub mime_type: Option<String>,
    /// The size of the original file in bytes.
    pub original_file_size: Option<i32>,
    /// The preview image for the file.
    pub preview_image: Option<Image>,
    /// The URL of the file.
    pub url: Option<Url>,
}

impl Video {
    /// The source with the largest frame among those of a given MIME type.
    #[must_use]
    pub fn best_source(&self, mime_type: &str) -> Option<&VideoSource> {
        self.sources
            .iter()
            .filter(|source| source.mime_type == mime_type)
            .max_by_key(|source| i64::from(source.width) * i64::from(source.height))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_video_best_source() {
        let video: Video = serde_json::from_value(serde_json::json!({
            "alt": null,
            "id": "gid://shopify/Video/1",
            "mediaContentType": "VIDEO",
            "presentation": null,
            "previewImage": null,
            "sources": [
                { "format": "mp4", "height": 480, "mimeType": "video/mp4", "url": "https://v/480.mp4", "width": 854 },
                { "format": "mp4", "height": 1080, "mimeType": "video/mp4", "url": "https://v/1080.mp4", "width": 1920 },
                { "format": "m3u8", "height": 2160, "mimeType": "application/x-mpegURL", "url": "https://v/master.m3u8", "width": 3840 }
            ]
        }))
        .unwrap();

        assert_eq!(video.best_source("video/mp4").unwrap().height, 1080);
        assert!(video.best_source("video/webm").is_none());
    }

    #[test]
    fn test_external_video_host() {
        let video: ExternalVideo = serde_json::from_value(serde_json::json!({
            "alt": "Unboxing",
            "embedUrl": "https://www.youtube.com/embed/abc",
            "embeddedUrl": "https://www.youtube.com/watch?v=abc",
            "host": "YOUTUBE",
            "id": "gid://shopify/ExternalVideo/9",
            "mediaContentType": "EXTERNAL_VIDEO",
            "originUrl": "https://www.youtube.com/watch?v=abc",
            "presentation": null,
            "previewImage": null
        }))
        .unwrap();

        assert_eq!(video.host, MediaHost::Youtube);
        assert_eq!(video.embed_url.host(), Some("www.youtube.com"));
    }
}
