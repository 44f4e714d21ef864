use crate::error::{Error, ErrorKind};
use exn::OptionExt;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A website listed in the bundled database.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WebsiteRecord {
    /// Address of the website, as stored (no normalisation is applied).
    pub website: String,
    /// Human-readable name.
    pub name: String,
}
impl WebsiteRecord {
    pub fn new(website: impl Into<String>, name: impl Into<String>) -> Self {
        Self { website: website.into(), name: name.into() }
    }
}
impl Display for WebsiteRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}\t{}", self.website, self.name)
    }
}

/// One row of `SELECT website, name FROM weblist`.
///
/// SQLite hands back `NULL` for either column without complaint, so both are
/// read as optional and checked when converting into a [`WebsiteRecord`].
#[derive(sqlx::FromRow)]
pub(crate) struct WebsiteRow {
    website: Option<String>,
    name: Option<String>,
}
impl TryFrom<WebsiteRow> for WebsiteRecord {
    type Error = Error;
    fn try_from(row: WebsiteRow) -> Result<Self, Self::Error> {
        Ok(Self {
            website: row.website.ok_or_raise(|| ErrorKind::RowDecodeFailed)?,
            name: row.name.ok_or_raise(|| ErrorKind::RowDecodeFailed)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn test_row_to_model() {
        let row = WebsiteRow { website: Some("a.com".to_string()), name: Some("A".to_string()) };
        assert_eq!(WebsiteRecord::try_from(row).unwrap(), WebsiteRecord::new("a.com", "A"));
    }

    #[rstest]
    #[case(None, Some("A"))]
    #[case(Some("a.com"), None)]
    #[case(None, None)]
    fn test_null_columns_are_rejected(#[case] website: Option<&str>, #[case] name: Option<&str>) {
        let row = WebsiteRow { website: website.map(str::to_string), name: name.map(str::to_string) };
        let err = WebsiteRecord::try_from(row).unwrap_err();
        assert_eq!(*err, ErrorKind::RowDecodeFailed);
    }

    #[test]
    fn test_empty_text_is_not_null() {
        let row = WebsiteRow { website: Some(String::new()), name: Some(String::new()) };
        assert_eq!(WebsiteRecord::try_from(row).unwrap(), WebsiteRecord::new("", ""));
    }

    #[test]
    fn test_display() {
        assert_eq!(WebsiteRecord::new("a.com", "A").to_string(), "a.com\tA");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_string(&WebsiteRecord::new("a.com", "A")).unwrap();
        assert_eq!(json, r#"{"website":"a.com","name":"A"}"#);
    }
}
