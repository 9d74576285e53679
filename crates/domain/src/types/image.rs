//! Image records
//!
//! Images are uploaded once and served in several pre-rendered sizes
//! ("copies").

use serde::{Deserialize, Serialize};

/// An uploaded image and its rendered copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    pub format: String,
    pub mimetype: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub average_color: String,
    pub url: String,
    #[serde(default)]
    pub copies: Vec<ImageCopy>,
    pub alt_text: Option<String>,
}

/// One rendered size of an [`Image`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageCopy {
    pub name: Option<String>,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub box_width: u32,
    #[serde(default)]
    pub box_height: u32,
    pub object_fit: Option<String>,
    pub format: String,
    pub url: String,
}

impl Image {
    /// Smallest copy at least `min_width` pixels wide, if any.
    pub fn copy_at_least(&self, min_width: u32) -> Option<&ImageCopy> {
        self.copies.iter().filter(|copy| copy.width >= min_width).min_by_key(|copy| copy.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn copy(width: u32) -> ImageCopy {
        ImageCopy {
            name: None,
            width,
            height: width,
            box_width: width,
            box_height: width,
            object_fit: Some("cover".into()),
            format: "webp".into(),
            url: format!("/images/abc.{width}.webp"),
        }
    }

    #[test]
    fn picks_smallest_sufficient_copy() {
        let image = Image {
            id: "abc".into(),
            format: "jpeg".into(),
            mimetype: "image/jpeg".into(),
            width: 1200,
            height: 800,
            size: 1024,
            average_color: "rgb(0,0,0)".into(),
            url: "/images/abc.jpeg".into(),
            copies: vec![copy(1200), copy(240), copy(720)],
            alt_text: None,
        };

        assert_eq!(image.copy_at_least(300).map(|c| c.width), Some(720));
        assert_eq!(image.copy_at_least(2000), None);
    }
}
