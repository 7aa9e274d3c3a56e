use super::feed_response::{FeedImageMetadataDto, PaginationDto};
use crate::domain::giphy::entity::{Giphy, GiphyImageMetadata, GiphyImages, GiphyPage};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GiphyResponseDto {
    pub data: Vec<GiphyDataDto>,
    pub pagination: PaginationDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GiphyDataDto {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "import_datetime")]
    pub datetime: String,
    pub images: GiphyImagesDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GiphyImagesDto {
    pub original: FeedImageMetadataDto,
    #[serde(rename = "fixed_width_small")]
    pub small: FeedImageMetadataDto,
}

impl GiphyResponseDto {
    pub fn into_domain(self) -> GiphyPage {
        GiphyPage {
            total_count: self.pagination.total_count,
            count: self.pagination.count,
            offset: self.pagination.offset,
            items: self
                .data
                .into_iter()
                .map(|item| Giphy {
                    id: item.id,
                    title: item.title,
                    datetime: item.datetime,
                    images: GiphyImages {
                        original: metadata(item.images.original),
                        small: metadata(item.images.small),
                    },
                })
                .collect(),
        }
    }
}

fn metadata(dto: FeedImageMetadataDto) -> GiphyImageMetadata {
    GiphyImageMetadata {
        height: dto.height,
        width: dto.width,
        url: dto.url,
    }
}
