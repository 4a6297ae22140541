//! Document model representing one searchable entry of the site catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of content a document points at.
///
/// Kinds are a closed set: they drive both result filtering and the
/// per-kind score boost applied by the relevance scorer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// A top-level site page
    Page,
    /// A section within a page
    Section,
    /// An external or navigation link (login portals, account opening)
    Navigation,
    /// A banking product (accounts, cards, loans)
    Product,
    /// A banking service (SME, corporate, mobile app)
    Service,
}

impl DocumentKind {
    /// All kinds, in declaration order.
    pub const ALL: [DocumentKind; 5] = [
        Self::Page,
        Self::Section,
        Self::Navigation,
        Self::Product,
        Self::Service,
    ];

    /// Get the lowercase name used on the wire and in the UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Section => "section",
            Self::Navigation => "navigation",
            Self::Product => "product",
            Self::Service => "service",
        }
    }

    /// Multiplier applied to a document's summed token score.
    pub fn boost(&self) -> f64 {
        match self {
            Self::Page => 1.5,
            Self::Product => 1.3,
            Self::Service => 1.2,
            Self::Navigation => 1.1,
            Self::Section => 1.0,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "page" => Ok(Self::Page),
            "section" => Ok(Self::Section),
            "navigation" => Ok(Self::Navigation),
            "product" => Ok(Self::Product),
            "service" => Ok(Self::Service),
            other => Err(format!("Unknown document kind: {}", other)),
        }
    }
}

/// Descriptive, unscored document metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    /// One-line summary shown under the result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Free-form marker for when the page content last changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl DocumentMetadata {
    /// The last-updated marker as a date, when it is an ISO `YYYY-MM-DD` date.
    pub fn last_updated_date(&self) -> Option<NaiveDate> {
        let marker = self.last_updated.as_deref()?;
        NaiveDate::parse_from_str(marker.trim(), "%Y-%m-%d").ok()
    }
}

/// A searchable document in the site catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexedDocument {
    /// Unique identifier within the catalog
    pub id: String,

    /// Display title
    pub title: String,

    /// Searchable prose (catalog files call this field `content`)
    #[serde(alias = "content")]
    pub body: String,

    /// Target location
    pub url: String,

    /// Content kind (catalog files call this field `type`)
    #[serde(alias = "type")]
    pub kind: DocumentKind,

    /// Grouping label for UI filtering
    pub category: String,

    /// Ordered tags, matched with high weight
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Optional descriptive metadata (catalog files call this field `meta`)
    #[serde(default, alias = "meta", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,
}

impl IndexedDocument {
    /// Create a new document without metadata.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        url: impl Into<String>,
        kind: DocumentKind,
        category: impl Into<String>,
        keywords: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            url: url.into(),
            kind,
            category: category.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            metadata: None,
        }
    }

    /// Attach a description to the document's metadata.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(DocumentMetadata::default)
            .description = Some(description.into());
        self
    }

    /// Attach a last-updated date to the document's metadata.
    pub fn with_last_updated(mut self, date: NaiveDate) -> Self {
        self.metadata
            .get_or_insert_with(DocumentMetadata::default)
            .last_updated = Some(date.format("%Y-%m-%d").to_string());
        self
    }
}
