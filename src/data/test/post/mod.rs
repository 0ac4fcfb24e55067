use crate::data::post::PostRepository;
use crate::model::post::{Post, PostStatus};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod increment_view_count;
mod list;
mod queries;
mod update;

/// Builds an unsaved domain post for repository-level tests.
///
/// The service normally derives slug and HTML; data tests supply them
/// directly.
fn draft_post(author_id: i32, title: &str, slug: &str) -> Post {
    let now = Utc::now();
    Post {
        id: 0,
        title: title.to_string(),
        slug: slug.to_string(),
        description: String::new(),
        raw_content: "Some *markdown*.".to_string(),
        html_content: "<p>Some <em>markdown</em>.</p>\n".to_string(),
        status: PostStatus::Draft,
        tags: vec![],
        view_count: 0,
        author_id,
        created_at: now,
        updated_at: now,
        published_at: None,
    }
}
