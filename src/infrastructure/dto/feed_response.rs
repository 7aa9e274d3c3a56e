//! Wire shape of the trending endpoint and its mapping to domain entities.

use crate::domain::feed::entity::{Feed, FeedImageMetadata, FeedImages, FeedPage, FeedUser};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponseDto {
    pub data: Vec<FeedDataDto>,
    pub pagination: PaginationDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedDataDto {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending_datetime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_datetime: Option<String>,
    pub images: FeedImagesDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<FeedUserDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedImagesDto {
    pub original: FeedImageMetadataDto,
    #[serde(rename = "fixed_width_small")]
    pub small: FeedImageMetadataDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedImageMetadataDto {
    pub height: String,
    pub width: String,
    pub url: Url,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedUserDto {
    pub username: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaginationDto {
    pub total_count: usize,
    pub count: usize,
    pub offset: usize,
}

impl FeedResponseDto {
    pub fn into_domain(self) -> FeedPage {
        FeedPage {
            total_count: self.pagination.total_count,
            count: self.pagination.count,
            offset: self.pagination.offset,
            items: self.data.into_iter().map(FeedDataDto::into_domain).collect(),
        }
    }
}

impl FeedDataDto {
    /// `trending_datetime` wins; `import_datetime` covers items that never trended.
    pub fn into_domain(self) -> Feed {
        Feed {
            id: self.id,
            title: self.title,
            datetime: self
                .trending_datetime
                .or(self.import_datetime)
                .unwrap_or_default(),
            images: FeedImages {
                original: self.images.original.into_domain(),
                small: self.images.small.into_domain(),
            },
            user: self.user.map(|user| FeedUser {
                username: user.username,
                display_name: user.display_name,
            }),
        }
    }
}

impl FeedImageMetadataDto {
    fn into_domain(self) -> FeedImageMetadata {
        FeedImageMetadata {
            height: self.height,
            width: self.width,
            url: self.url,
        }
    }
}
