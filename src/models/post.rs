//! UGC post payload models.
//!
//! Typed form of the `POST /v2/ugcPosts` body: an image share authored by
//! the member, published immediately, visible to the member's network.

use serde::Serialize;

/// Body of `POST /v2/ugcPosts`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UgcPost {
    author: String,
    lifecycle_state: String,
    specific_content: SpecificContent,
    visibility: Visibility,
}

#[derive(Debug, Serialize)]
struct SpecificContent {
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    share_content: ShareContent,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ShareContent {
    share_commentary: Commentary,
    share_media_category: String,
    media: Vec<ShareMedia>,
}

#[derive(Debug, Serialize)]
struct Commentary {
    text: String,
}

#[derive(Debug, Serialize)]
struct ShareMedia {
    status: String,
    media: String,
}

#[derive(Debug, Serialize)]
struct Visibility {
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    member_network_visibility: String,
}

impl UgcPost {
    /// A published image share referencing a previously registered asset
    pub fn image_share(member_id: &str, text: &str, asset: &str) -> Self {
        Self {
            author: format!("urn:li:person:{}", member_id),
            lifecycle_state: "PUBLISHED".to_string(),
            specific_content: SpecificContent {
                share_content: ShareContent {
                    share_commentary: Commentary {
                        text: text.to_string(),
                    },
                    share_media_category: "IMAGE".to_string(),
                    media: vec![ShareMedia {
                        status: "READY".to_string(),
                        media: asset.to_string(),
                    }],
                },
            },
            visibility: Visibility {
                member_network_visibility: "PUBLIC".to_string(),
            },
        }
    }
}
