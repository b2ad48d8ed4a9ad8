use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::types::{Credits, Section};

/// One section of a course. Sections of the same course share name and credits.
#[derive(Debug, Serialize, Deserialize)]
pub struct Course {
    name: String,
    credits: Credits,
    section: Section,
}

impl Course {
    pub fn new(name: impl Into<String>, credits: Credits, section: Section) -> Self {
        Self {
            name: name.into(),
            credits,
            section,
        }
    }

    /// Builds a new, independent course with the same name and credits as this one, offered as
    /// `section`. Any section number is accepted.
    pub fn clone_course(&self, section: Section) -> Self {
        tracing::trace!(name = %self.name, from = self.section, to = section, "cloning course");
        Self {
            name: self.name.clone(),
            credits: self.credits,
            section,
        }
    }
}

impl Display for Course {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "name='{}', credits={}, section={}",
            self.name, self.credits, self.section
        )
    }
}
