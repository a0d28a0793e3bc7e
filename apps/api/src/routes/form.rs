//! Form bodies in either encoding a browser sends: url-encoded or multipart.
//!
//! Handlers take `FormFields` directly; any rejection is already an
//! `AppError::Validation`.

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use bytes::Bytes;

use crate::errors::AppError;

/// One submitted field. `content_type` is only ever set for multipart parts.
#[derive(Debug)]
pub struct FormField {
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Named fields of a form submission. A repeated name keeps its last value.
#[derive(Debug, Default)]
pub struct FormFields {
    fields: HashMap<String, FormField>,
}

impl FormFields {
    /// Removes and returns a field, typically a file upload.
    pub fn take(&mut self, name: &str) -> Option<FormField> {
        self.fields.remove(name)
    }

    /// A required, non-blank text field.
    pub fn text(&self, name: &str) -> Result<String, AppError> {
        let field = self
            .fields
            .get(name)
            .ok_or_else(|| AppError::Validation(format!("{name} is required")))?;
        let value = std::str::from_utf8(&field.data)
            .map_err(|_| AppError::Validation(format!("{name} must be UTF-8 text")))?;
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{name} cannot be empty")));
        }
        Ok(value.to_string())
    }

    fn insert(&mut self, name: String, content_type: Option<String>, data: Bytes) {
        self.fields.insert(name, FormField { content_type, data });
    }
}

#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(&req) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            read_multipart(multipart).await
        } else {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;

            let mut form = FormFields::default();
            for (name, value) in pairs {
                form.insert(name, None, Bytes::from(value));
            }
            Ok(form)
        }
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| {
            ct.trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        })
}

async fn read_multipart(mut multipart: Multipart) -> Result<FormFields, AppError> {
    let mut form = FormFields::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        // Unnamed parts are drained and ignored.
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        form.insert(name, content_type, data);
    }

    Ok(form)
}
