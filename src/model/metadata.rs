//! Title page metadata.

use crate::error::{Error, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};

/// Information shown on the title page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleMetadata {
    /// Paper title
    #[serde(default)]
    pub title: String,

    /// Author name(s)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Institutional affiliation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,

    /// Course number and name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,

    /// Instructor name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,

    /// Due date, as it should be printed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl TitleMetadata {
    /// Create metadata with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Load metadata from a JSON object.
    ///
    /// The `title` key is required and must not be blank.
    pub fn from_json(json: &str) -> Result<Self> {
        let metadata = Self::from_json_partial(json)?;
        metadata.validate()?;
        Ok(metadata)
    }

    /// Load metadata from a JSON object that may leave out the title.
    ///
    /// Useful when the title comes from somewhere else and the two are
    /// combined with [`TitleMetadata::merge_missing`].
    pub fn from_json_partial(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Metadata(e.to_string()))
    }

    /// Check that the metadata can produce a title page.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Metadata("title is required".to_string()));
        }
        Ok(())
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the institution.
    pub fn with_institution(mut self, institution: impl Into<String>) -> Self {
        self.institution = Some(institution.into());
        self
    }

    /// Set the course.
    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    /// Set the instructor.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    /// Set the date.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the date to today, e.g. "October 16, 2025".
    pub fn with_today(self) -> Self {
        let today = Local::now().date_naive();
        self.with_date(today.format("%B %-d, %Y").to_string())
    }

    /// Fill every field that is unset here from `other`.
    pub fn merge_missing(mut self, other: TitleMetadata) -> Self {
        if self.title.trim().is_empty() {
            self.title = other.title;
        }
        self.author = self.author.or(other.author);
        self.institution = self.institution.or(other.institution);
        self.course = self.course.or(other.course);
        self.instructor = self.instructor.or(other.instructor);
        self.date = self.date.or(other.date);
        self
    }

    /// Title page information lines, in APA order.
    ///
    /// Absent and blank fields are skipped.
    pub fn info_lines(&self) -> impl Iterator<Item = &str> {
        [
            &self.author,
            &self.institution,
            &self.course,
            &self.instructor,
            &self.date,
        ]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .filter(|value| !value.trim().is_empty())
    }
}
