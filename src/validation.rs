use serde::Serialize;
use uuid::Uuid;

use crate::routes::todos::{CreateTodoRequest, DeleteTodoRequest, UpdateTodoRequest};

// One failed constraint on one field. Serialized straight into the
// `errors` list of a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(path: &str, message: &str) -> Self {
        Self {
            path: path.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct CreateTodoInput {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug)]
pub struct UpdateTodoInput {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// The store's native id format. Malformed ids are rejected here so they
/// never reach a persistence call.
pub fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

pub fn create_todo(req: &CreateTodoRequest) -> Result<CreateTodoInput, Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    let title = match &req.title {
        Some(title) if !title.is_empty() => Some(title.clone()),
        Some(_) => {
            issues.push(ValidationIssue::new(
                "title",
                "String must contain at least 1 character(s)",
            ));
            None
        }
        None => {
            issues.push(ValidationIssue::new("title", "Required"));
            None
        }
    };

    match title {
        Some(title) if issues.is_empty() => Ok(CreateTodoInput {
            title,
            description: req.description.clone(),
        }),
        _ => Err(issues),
    }
}

pub fn update_todo(req: &UpdateTodoRequest) -> Result<UpdateTodoInput, Vec<ValidationIssue>> {
    let id = validate_id_field(&req.id)?;

    Ok(UpdateTodoInput {
        id,
        title: req.title.clone(),
        description: req.description.clone(),
    })
}

pub fn delete_todo(req: &DeleteTodoRequest) -> Result<Uuid, Vec<ValidationIssue>> {
    validate_id_field(&req.id)
}

fn validate_id_field(id: &Option<String>) -> Result<Uuid, Vec<ValidationIssue>> {
    let Some(raw) = id else {
        return Err(vec![ValidationIssue::new("id", "Required")]);
    };

    if raw.is_empty() {
        return Err(vec![ValidationIssue::new(
            "id",
            "String must contain at least 1 character(s)",
        )]);
    }

    parse_id(raw).ok_or_else(|| vec![ValidationIssue::new("id", "Invalid Id format")])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_accepts_title_only() {
        let req = CreateTodoRequest {
            title: Some("buy milk".into()),
            description: None,
        };

        let input = create_todo(&req).unwrap();
        assert_eq!(input.title, "buy milk");
        assert_eq!(input.description, None);
    }

    #[test]
    fn create_keeps_description() {
        let req = CreateTodoRequest {
            title: Some("buy milk".into()),
            description: Some("two liters".into()),
        };

        let input = create_todo(&req).unwrap();
        assert_eq!(input.description.as_deref(), Some("two liters"));
    }

    #[test]
    fn create_rejects_missing_title() {
        let req = CreateTodoRequest {
            title: None,
            description: None,
        };

        let issues = create_todo(&req).unwrap_err();
        assert_eq!(issues, vec![ValidationIssue::new("title", "Required")]);
    }

    #[test]
    fn create_rejects_empty_title() {
        let req = CreateTodoRequest {
            title: Some(String::new()),
            description: Some("still invalid".into()),
        };

        let issues = create_todo(&req).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "title");
    }

    #[test]
    fn update_normalizes_id() {
        let id = Uuid::new_v4();
        let req = UpdateTodoRequest {
            id: Some(id.to_string()),
            title: Some("new title".into()),
            description: None,
        };

        let input = update_todo(&req).unwrap();
        assert_eq!(input.id, id);
        assert_eq!(input.title.as_deref(), Some("new title"));
    }

    #[test]
    fn update_rejects_missing_id() {
        let req = UpdateTodoRequest {
            id: None,
            title: None,
            description: None,
        };

        let issues = update_todo(&req).unwrap_err();
        assert_eq!(issues, vec![ValidationIssue::new("id", "Required")]);
    }

    #[test]
    fn update_rejects_malformed_id() {
        let req = UpdateTodoRequest {
            id: Some("not-an-id".into()),
            title: None,
            description: None,
        };

        let issues = update_todo(&req).unwrap_err();
        assert_eq!(issues, vec![ValidationIssue::new("id", "Invalid Id format")]);
    }

    #[test]
    fn delete_rejects_empty_id() {
        let req = DeleteTodoRequest {
            id: Some(String::new()),
        };

        let issues = delete_todo(&req).unwrap_err();
        assert_eq!(issues[0].path, "id");
    }

    #[test]
    fn parse_id_rejects_wrong_charset() {
        assert!(parse_id("zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz").is_none());
        assert!(parse_id("1234").is_none());
        assert!(parse_id(&Uuid::new_v4().to_string()).is_some());
    }
}
