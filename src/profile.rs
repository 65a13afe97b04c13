use std::{
    fs,
    path::PathBuf,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::{log_info, log_warn};

const ENABLE_LOGS: bool = true;

/// Who is looking at the dashboard: shown in the header and used to scope
/// group comparisons.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassProfile {
    pub country: String,
    pub state: String,
    pub school: String,
    pub group: String,
    pub student_id: String,
}

impl Default for ClassProfile {
    fn default() -> Self {
        Self {
            country: "US".into(),
            state: "NY".into(),
            school: "MTN12".into(),
            group: "G4".into(),
            student_id: "STU003".into(),
        }
    }
}

impl ClassProfile {
    fn validate(&self) -> Result<()> {
        let fields = [
            ("country", &self.country),
            ("state", &self.state),
            ("school", &self.school),
            ("group", &self.group),
            ("student id", &self.student_id),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                bail!("{name} must not be empty");
            }
        }
        Ok(())
    }

    /// `"G4"` → `"4"`, as printed next to the school name.
    pub fn group_number(&self) -> &str {
        self.group.strip_prefix('G').unwrap_or(&self.group)
    }
}

/// JSON-backed profile, read once at startup and rewritten on every update.
pub struct ProfileStore {
    path: PathBuf,
    data: RwLock<ClassProfile>,
}

impl ProfileStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read profile from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log_warn!("Profile at {} is unreadable ({err}); using defaults", path.display());
                ClassProfile::default()
            })
        } else {
            ClassProfile::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, ClassProfile> {
        self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, ClassProfile> {
        self.data.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn profile(&self) -> ClassProfile {
        self.read().clone()
    }

    pub fn update(&self, profile: ClassProfile) -> Result<ClassProfile> {
        profile.validate()?;

        let mut guard = self.write();
        self.persist(&profile)?;
        *guard = profile.clone();

        log_info!(
            "Profile updated: {} / {} group {}",
            profile.student_id,
            profile.school,
            profile.group_number()
        );
        Ok(profile)
    }

    fn persist(&self, profile: &ClassProfile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let serialized = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write profile to {}", self.path.display()))
    }
}
