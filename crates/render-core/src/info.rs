use chrono::{DateTime, Utc};

/// Document-level metadata written to the PDF Info dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInfo {
    pub title: String,
    pub producer: String,
    /// Left out of the output when `None`, which keeps repeated renders
    /// of the same input byte-identical.
    pub creation_date: Option<DateTime<Utc>>,
}

impl DocumentInfo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            producer: concat!("tripsheet ", env!("CARGO_PKG_VERSION")).to_string(),
            creation_date: None,
        }
    }

    pub fn with_producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = producer.into();
        self
    }

    pub fn created_at(mut self, date: DateTime<Utc>) -> Self {
        self.creation_date = Some(date);
        self
    }

    /// The creation date in PDF date syntax, e.g. `D:20240615083000Z`.
    pub fn pdf_creation_date(&self) -> Option<String> {
        self.creation_date
            .map(|date| date.format("D:%Y%m%d%H%M%SZ").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn creation_date_uses_pdf_syntax() {
        let date = Utc.with_ymd_and_hms(2024, 6, 15, 8, 30, 0).unwrap();
        let info = DocumentInfo::new("Trip").created_at(date);
        assert_eq!(info.pdf_creation_date().as_deref(), Some("D:20240615083000Z"));
    }

    #[test]
    fn no_date_by_default() {
        let info = DocumentInfo::new("Trip");
        assert!(info.pdf_creation_date().is_none());
        assert!(info.producer.starts_with("tripsheet "));
    }
}
