// src/domain/slug/config.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::record::{FieldName, Record, Slug};

pub const DEFAULT_SLUG_FIELD: &str = "slug";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Reads the text of one source field.
pub type FieldReader<R> = fn(&R) -> String;
pub type SlugGetter<R> = fn(&R) -> Option<&Slug>;
pub type SlugSetter<R> = fn(&mut R, Slug);

pub struct SourceField<R> {
    name: FieldName,
    read: FieldReader<R>,
}

pub struct SlugStorage<R> {
    name: FieldName,
    get: SlugGetter<R>,
    set: SlugSetter<R>,
}

/// When the slug step runs relative to persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugHook {
    BeforeCreate,
    BeforeSave,
}

impl SlugHook {
    pub fn applies_to<R: Record>(self, record: &R) -> bool {
        match self {
            Self::BeforeCreate => record.is_new_record(),
            Self::BeforeSave => true,
        }
    }
}

/// Per record type slug settings. Built once, then shared read-only.
pub struct SlugConfig<R> {
    sources: Vec<SourceField<R>>,
    storage: SlugStorage<R>,
    permanent: bool,
    max_attempts: u32,
}

impl<R: Record> SlugConfig<R> {
    pub fn builder() -> SlugConfigBuilder<R> {
        SlugConfigBuilder::new()
    }

    pub fn slug_field(&self) -> &FieldName {
        &self.storage.name
    }

    pub fn is_permanent(&self) -> bool {
        self.permanent
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn hook(&self) -> SlugHook {
        if self.permanent {
            SlugHook::BeforeCreate
        } else {
            SlugHook::BeforeSave
        }
    }

    /// Source values in configured order, joined by single spaces.
    pub fn slug_base(&self, record: &R) -> String {
        self.sources
            .iter()
            .map(|source| (source.read)(record))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn sources_changed(&self, record: &R) -> bool {
        self.sources
            .iter()
            .any(|source| record.field_changed(source.name.as_str()))
    }

    pub fn needs_slug(&self, record: &R) -> bool {
        if record.is_new_record() {
            return true;
        }
        !self.permanent && self.sources_changed(record)
    }

    pub fn current_slug<'a>(&self, record: &'a R) -> Option<&'a Slug> {
        (self.storage.get)(record)
    }

    pub fn assign(&self, record: &mut R, slug: Slug) {
        (self.storage.set)(record, slug);
        record.state_mut().mark_changed(self.storage.name.as_str());
    }
}

pub struct SlugConfigBuilder<R> {
    sources: Vec<(String, FieldReader<R>)>,
    slug_field: Option<String>,
    accessors: Option<(SlugGetter<R>, SlugSetter<R>)>,
    permanent: bool,
    max_attempts: u32,
}

impl<R: Record> SlugConfigBuilder<R> {
    fn new() -> Self {
        Self {
            sources: Vec::new(),
            slug_field: None,
            accessors: None,
            permanent: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn source(mut self, name: impl Into<String>, read: FieldReader<R>) -> Self {
        self.sources.push((name.into(), read));
        self
    }

    /// Name of the field storing the slug. Defaults to `slug`.
    pub fn as_field(mut self, name: impl Into<String>) -> Self {
        self.slug_field = Some(name.into());
        self
    }

    pub fn storage(mut self, get: SlugGetter<R>, set: SlugSetter<R>) -> Self {
        self.accessors = Some((get, set));
        self
    }

    pub fn permanent(mut self, permanent: bool) -> Self {
        self.permanent = permanent;
        self
    }

    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn build(self) -> DomainResult<SlugConfig<R>> {
        if self.sources.is_empty() {
            return Err(DomainError::Validation(
                "at least one slug source field is required".into(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(DomainError::Validation(
                "max slug attempts must be positive".into(),
            ));
        }
        let (get, set) = self
            .accessors
            .ok_or_else(|| DomainError::Validation("slug storage accessors are required".into()))?;

        let sources = self
            .sources
            .into_iter()
            .map(|(name, read)| {
                Ok(SourceField {
                    name: FieldName::new(name)?,
                    read,
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        let name = FieldName::new(
            self.slug_field
                .unwrap_or_else(|| DEFAULT_SLUG_FIELD.to_string()),
        )?;
        if sources.iter().any(|source| source.name == name) {
            return Err(DomainError::Validation(format!(
                "slug field {name} cannot also be a source field"
            )));
        }

        Ok(SlugConfig {
            sources,
            storage: SlugStorage { name, get, set },
            permanent: self.permanent,
            max_attempts: self.max_attempts,
        })
    }
}
