use std::{borrow::Cow, fmt::Display, marker::PhantomData, str::FromStr};

use serde::{Serialize, de::DeserializeOwned};

use super::{KeyValueStore, StoreError};
use crate::model::{Id, SectionColour, Tab};

/// Last selected content tab.
pub const CURRENT_NAV: RawEntry<Tab> = RawEntry::new("currentNav");
/// Courses whose section list stays expanded across reloads.
pub const OPEN_COURSES: JsonEntry<Vec<Id>> = JsonEntry::new("coursesWithOpenSections");
/// Set when the add-resource form should reopen after a reload.
pub const LOAD_RESOURCE_FORM: RawEntry<bool> = RawEntry::new("loadResourceForm");

const COURSE_SECTIONS_PREFIX: &str = "course-";
const COURSE_SECTIONS_SUFFIX: &str = "-sections";

/// Saved section colours of one course.
pub fn course_sections(course: Id) -> JsonEntry<Vec<SectionColour>> {
    JsonEntry::with_key(format!(
        "{COURSE_SECTIONS_PREFIX}{course}{COURSE_SECTIONS_SUFFIX}"
    ))
}

/// Recovers the course id from a `course-{id}-sections` key.
pub fn parse_course_sections_key(key: &str) -> Option<Id> {
    key.strip_prefix(COURSE_SECTIONS_PREFIX)?
        .strip_suffix(COURSE_SECTIONS_SUFFIX)?
        .parse()
        .ok()
}

/// A value stored as its plain string form.
pub struct RawEntry<T> {
    key: Cow<'static, str>,
    value: PhantomData<fn() -> T>,
}

impl<T> RawEntry<T> {
    pub const fn new(key: &'static str) -> Self {
        Self {
            key: Cow::Borrowed(key),
            value: PhantomData,
        }
    }

    pub fn clear(&self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        store.remove(&self.key)
    }
}

impl<T> RawEntry<T>
where
    T: FromStr + Display,
{
    pub fn load(&self, store: &impl KeyValueStore) -> Result<Option<T>, StoreError> {
        let Some(raw) = store.get(&self.key)? else {
            return Ok(None);
        };
        raw.parse().map(Some).map_err(|_| StoreError::Parse {
            key: self.key.to_string(),
            value: raw,
        })
    }

    pub fn save(&self, store: &mut impl KeyValueStore, value: &T) -> Result<(), StoreError> {
        store.set(&self.key, &value.to_string())
    }
}

/// A value stored as JSON text.
pub struct JsonEntry<T> {
    key: Cow<'static, str>,
    value: PhantomData<fn() -> T>,
}

impl<T> JsonEntry<T> {
    pub const fn new(key: &'static str) -> Self {
        Self {
            key: Cow::Borrowed(key),
            value: PhantomData,
        }
    }

    pub fn with_key(key: String) -> Self {
        Self {
            key: Cow::Owned(key),
            value: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<T> JsonEntry<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn load(&self, store: &impl KeyValueStore) -> Result<Option<T>, StoreError> {
        let Some(raw) = store.get(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|error| StoreError::Deserialize {
                key: self.key.to_string(),
                error,
            })
    }

    pub fn save(&self, store: &mut impl KeyValueStore, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|error| StoreError::Serialize {
            key: self.key.to_string(),
            error,
        })?;
        store.set(&self.key, &raw)
    }

    /// Loads the value (or `T::default()` when absent), lets `f` change it
    /// and writes it back if `f` returns `true`.
    pub fn update(
        &self,
        store: &mut impl KeyValueStore,
        f: impl FnOnce(&mut T) -> bool,
    ) -> Result<bool, StoreError>
    where
        T: Default,
    {
        let mut value = self.load(store)?.unwrap_or_default();
        if !f(&mut value) {
            return Ok(false);
        }
        self.save(store, &value)?;
        Ok(true)
    }
}
