//! Query parameters for the kanban endpoints.
//!
//! Every field arrives as an optional string so that a missing or malformed
//! value surfaces as a `validation_error` envelope naming the field, instead of
//! a bare extractor rejection.

use serde::Deserialize;

use crate::{error::AppError, workflow::Category};

/// Column widths of `boards.title` and `elements.description`.
pub const MAX_TITLE_CHARS: usize = 80;
pub const MAX_DESCRIPTION_CHARS: usize = 512;

#[derive(Debug, Default, Deserialize)]
pub struct CreateBoardParams {
    pub title: Option<String>,
}

impl CreateBoardParams {
    /// An empty title is accepted; only an absent or overlong one is rejected.
    pub fn validate(self) -> Result<String, AppError> {
        let title = required("title", self.title)?;
        within_limit("title", title, MAX_TITLE_CHARS)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}

impl IdParams {
    pub fn validate(self) -> Result<i64, AppError> {
        let raw = required("id", self.id)?;
        parse_id("id", &raw)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteElementParams {
    pub board_element_id: Option<String>,
}

impl DeleteElementParams {
    pub fn validate(self) -> Result<i64, AppError> {
        let raw = required("board_element_id", self.board_element_id)?;
        parse_id("board_element_id", &raw)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateElementParams {
    pub board_id: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Validated element creation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewElement {
    pub board_id: i64,
    pub description: String,
    pub category: Category,
}

impl CreateElementParams {
    pub fn validate(self) -> Result<NewElement, AppError> {
        let board_id = parse_id("board_id", &required("board_id", self.board_id)?)?;
        let description = within_limit(
            "description",
            required("description", self.description)?,
            MAX_DESCRIPTION_CHARS,
        )?;
        let category = required("category", self.category)?
            .parse::<Category>()
            .map_err(AppError::validation)?;
        Ok(NewElement {
            board_id,
            description,
            category,
        })
    }
}

/// Any integer is a well-formed id; one that no row can carry simply matches
/// nothing further down.
pub fn parse_id(field: &str, raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::validation(format!("{field} must be an integer, got '{raw}'")))
}

fn required(field: &str, value: Option<String>) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::validation(format!("missing required parameter '{field}'")))
}

fn within_limit(field: &str, value: String, max_chars: usize) -> Result<String, AppError> {
    let len = value.chars().count();
    if len > max_chars {
        return Err(AppError::validation(format!(
            "{field} must be at most {max_chars} characters, got {len}"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{
        CreateBoardParams, CreateElementParams, DeleteElementParams, IdParams,
        MAX_DESCRIPTION_CHARS, MAX_TITLE_CHARS, parse_id,
    };
    use crate::workflow::Category;

    #[test]
    fn missing_title_is_rejected_but_empty_is_kept() {
        let err = CreateBoardParams::default()
            .validate()
            .expect_err("title is required");
        assert_eq!(err.kind(), "validation_error");
        assert!(err.message().contains("title"));

        let title = CreateBoardParams {
            title: Some(String::new()),
        }
        .validate()
        .expect("empty title is allowed");
        assert_eq!(title, "");
    }

    #[test]
    fn ids_must_be_integers() {
        assert_eq!(parse_id("id", " 42 ").expect("trimmed id"), 42);
        assert_eq!(
            parse_id("id", "99999999999").expect("wide id"),
            99_999_999_999
        );

        let err = IdParams {
            id: Some("abc".to_string()),
        }
        .validate()
        .expect_err("non-numeric id");
        assert_eq!(err.message(), "id must be an integer, got 'abc'");
    }

    #[test]
    fn element_delete_names_its_own_field() {
        let err = DeleteElementParams::default()
            .validate()
            .expect_err("board_element_id is required");
        assert_eq!(
            err.message(),
            "missing required parameter 'board_element_id'"
        );
    }

    #[test]
    fn element_create_accepts_the_inprogress_alias() {
        let element = CreateElementParams {
            board_id: Some("7".to_string()),
            description: Some("ship it".to_string()),
            category: Some("inprogress".to_string()),
        }
        .validate()
        .expect("valid element");

        assert_eq!(element.board_id, 7);
        assert_eq!(element.category, Category::InProgress);
    }

    #[test]
    fn element_create_rejects_unknown_categories() {
        let err = CreateElementParams {
            board_id: Some("7".to_string()),
            description: Some("ship it".to_string()),
            category: Some("blocked".to_string()),
        }
        .validate()
        .expect_err("unknown category");

        assert_eq!(err.kind(), "validation_error");
        assert!(err.message().contains("blocked"));
    }

    #[test]
    fn titles_are_capped_at_the_column_width() {
        let exact = CreateBoardParams {
            title: Some("é".repeat(MAX_TITLE_CHARS)),
        }
        .validate()
        .expect("title at the limit");
        assert_eq!(exact.chars().count(), MAX_TITLE_CHARS);

        let err = CreateBoardParams {
            title: Some("x".repeat(MAX_TITLE_CHARS + 1)),
        }
        .validate()
        .expect_err("title over the limit");
        assert_eq!(err.kind(), "validation_error");
        assert_eq!(err.message(), "title must be at most 80 characters, got 81");
    }

    #[test]
    fn descriptions_are_capped_at_the_column_width() {
        let err = CreateElementParams {
            board_id: Some("1".to_string()),
            description: Some("x".repeat(MAX_DESCRIPTION_CHARS + 1)),
            category: Some("todo".to_string()),
        }
        .validate()
        .expect_err("description over the limit");
        assert_eq!(err.kind(), "validation_error");
        assert!(err.message().starts_with("description must be at most 512"));
    }
}
