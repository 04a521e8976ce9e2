// tests/support/builders.rs
use mokkan_slug::domain::record::{Record, RecordId, RecordState, Slug};
use mokkan_slug::domain::slug::SlugConfig;
use serde::{Deserialize, Serialize};

/* -------------------------------- Post -------------------------------- */

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: RecordId,
    title: String,
    category: String,
    body: String,
    pub slug: Option<Slug>,
    #[serde(skip)]
    state: RecordState,
}

impl Post {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: RecordId::generate(),
            title: title.into(),
            category: String::new(),
            body: String::new(),
            slug: None,
            state: RecordState::default(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.state.mark_changed("title");
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
        self.state.mark_changed("body");
    }

    pub fn slug_str(&self) -> Option<&str> {
        self.slug.as_ref().map(Slug::as_str)
    }
}

impl Record for Post {
    const COLLECTION: &'static str = "posts";

    fn id(&self) -> RecordId {
        self.id
    }

    fn state(&self) -> &RecordState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RecordState {
        &mut self.state
    }
}

pub fn post_slug(post: &Post) -> Option<&Slug> {
    post.slug.as_ref()
}

pub fn set_post_slug(post: &mut Post, slug: Slug) {
    post.slug = Some(slug);
}

pub fn post_config(permanent: bool) -> SlugConfig<Post> {
    SlugConfig::<Post>::builder()
        .source("title", |post: &Post| post.title.clone())
        .storage(post_slug, set_post_slug)
        .permanent(permanent)
        .build()
        .expect("valid post slug config")
}

/// Slug built from category then title.
pub fn categorized_post_config() -> SlugConfig<Post> {
    SlugConfig::<Post>::builder()
        .source("category", |post: &Post| post.category.clone())
        .source("title", |post: &Post| post.title.clone())
        .storage(post_slug, set_post_slug)
        .build()
        .expect("valid categorized post slug config")
}

/* -------------------------------- Comment (embedded in Post) -------------------------------- */

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: RecordId,
    pub post_id: RecordId,
    text: String,
    pub permalink: Option<Slug>,
    #[serde(skip)]
    state: RecordState,
}

impl Comment {
    pub fn new(post_id: RecordId, text: impl Into<String>) -> Self {
        Self {
            id: RecordId::generate(),
            post_id,
            text: text.into(),
            permalink: None,
            state: RecordState::default(),
        }
    }

    pub fn permalink_str(&self) -> Option<&str> {
        self.permalink.as_ref().map(Slug::as_str)
    }
}

impl Record for Comment {
    const COLLECTION: &'static str = "comments";

    fn id(&self) -> RecordId {
        self.id
    }

    fn state(&self) -> &RecordState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RecordState {
        &mut self.state
    }

    fn parent(&self) -> Option<RecordId> {
        Some(self.post_id)
    }
}

fn comment_permalink(comment: &Comment) -> Option<&Slug> {
    comment.permalink.as_ref()
}

fn set_comment_permalink(comment: &mut Comment, slug: Slug) {
    comment.permalink = Some(slug);
}

pub fn comment_config() -> SlugConfig<Comment> {
    SlugConfig::<Comment>::builder()
        .source("text", |comment: &Comment| comment.text.clone())
        .as_field("permalink")
        .storage(comment_permalink, set_comment_permalink)
        .build()
        .expect("valid comment slug config")
}
