//! Persisted UI preferences: the Home interest area and the Courses filter.
//!
//! ## Versioning
//!
//! - `PREFS_VERSION`: current document version. Bump when fields are added.
//! - `MIN_COMPATIBLE_VERSION`: oldest version still readable. Only bump on
//!   breaking changes (a field removed or its meaning changed); documents
//!   older than this are discarded.

use serde::{Deserialize, Serialize};

use crate::content::{COURSE_FILTERS, INTEREST_AREAS};
use crate::storage::KeyValueStore;

const PREFS_VERSION: u32 = 1;

const MIN_COMPATIBLE_VERSION: u32 = 1;

pub const STORAGE_KEY: &str = "skillup_preferences";

#[derive(Serialize, Deserialize)]
struct PrefsData {
    version: u32,
    prefs: Preferences,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Index into `INTEREST_AREAS`
    pub interest_area: u8,
    /// Index into `COURSE_FILTERS` (0 = Todos)
    pub course_filter: u8,
}

impl Preferences {
    fn clamped(mut self) -> Self {
        if self.interest_area as usize >= INTEREST_AREAS.len() {
            self.interest_area = 0;
        }
        if self.course_filter as usize >= COURSE_FILTERS.len() {
            self.course_filter = 0;
        }
        self
    }
}

pub fn save(store: &mut dyn KeyValueStore, prefs: Preferences) {
    let data = PrefsData {
        version: PREFS_VERSION,
        prefs,
    };
    match serde_json::to_string(&data) {
        Ok(json) => store.set(STORAGE_KEY, &json),
        Err(e) => warn!("SkillUpPlus: failed to serialize preferences: {e}"),
    }
}

pub fn load(store: &mut dyn KeyValueStore) -> Preferences {
    let Some(json) = store.get(STORAGE_KEY) else {
        return Preferences::default();
    };

    let data: PrefsData = match serde_json::from_str(&json) {
        Ok(d) => d,
        Err(e) => {
            warn!("SkillUpPlus: discarding unreadable preferences: {e}");
            store.remove(STORAGE_KEY);
            return Preferences::default();
        }
    };

    if data.version < MIN_COMPATIBLE_VERSION {
        log!(
            "SkillUpPlus: preferences version too old (saved={}, min_compatible={}), using defaults",
            data.version,
            MIN_COMPATIBLE_VERSION
        );
        store.remove(STORAGE_KEY);
        return Preferences::default();
    }

    data.prefs.clamped()
}
