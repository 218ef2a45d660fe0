//! Typed video API over the resilient fetcher.

use crate::fetch::client::ResilientFetcher;
use crate::fetch::error::FetchResult;
use crate::models::{Credential, UserId, UserProfile, VideoId, VideoList, VideoRecord};

/// Path of a user's profile.
pub fn profile_path(uid: &UserId) -> String {
    format!("/profile/{}", urlencoding::encode(&uid.0))
}

/// Path of a single video.
pub fn video_path(id: &VideoId) -> String {
    format!("/videos/{}", urlencoding::encode(&id.0))
}

/// Path of the featured video list. The trailing slash is part of the route.
pub const FEATURED_PATH: &str = "/videos/";

/// The three resources the watch page reads.
#[derive(Debug, Clone)]
pub struct VideoApi {
    fetcher: ResilientFetcher,
}

impl VideoApi {
    pub fn new(fetcher: ResilientFetcher) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &ResilientFetcher {
        &self.fetcher
    }

    pub async fn fetch_profile(
        &self,
        uid: &UserId,
        credential: &Credential,
    ) -> FetchResult<UserProfile> {
        self.fetcher.get_json(&profile_path(uid), credential).await
    }

    pub async fn fetch_video(
        &self,
        id: &VideoId,
        credential: &Credential,
    ) -> FetchResult<VideoRecord> {
        self.fetcher.get_json(&video_path(id), credential).await
    }

    pub async fn fetch_featured(&self, credential: &Credential) -> FetchResult<VideoList> {
        self.fetcher.get_json(FEATURED_PATH, credential).await
    }
}
