//! Custom Axum extractors

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use url::form_urlencoded;

use super::error::ApiError;
use crate::models::{parse_todo_id, TodoId, TodoTitle, ValidationError};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const MULTIPART_CONTENT_TYPE: &str = "multipart/form-data";

/// Form fields from the request body and the query string.
///
/// The body may be urlencoded or multipart (file parts are skipped). Works
/// for every method, including DELETE. When a key appears in both body and
/// query, the body value wins; within one source the first value wins.
#[derive(Debug, Default)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Required non-blank `title` field
    pub fn title(&self) -> Result<TodoTitle, ValidationError> {
        TodoTitle::new(self.get("title").unwrap_or_default())
    }

    /// Required integer `id` field
    pub fn id(&self) -> Result<TodoId, ValidationError> {
        parse_todo_id(self.get("id"))
    }

    fn insert_first_wins(&mut self, key: String, value: String) {
        self.0.entry(key).or_insert(value);
    }

    fn extend_first_wins(&mut self, pairs: impl IntoIterator<Item = (String, String)>) {
        for (key, value) in pairs {
            self.insert_first_wins(key, value);
        }
    }

    async fn read_multipart(&mut self, mut multipart: Multipart) -> Result<(), ApiError> {
        while let Some(field) = multipart.next_field().await? {
            if field.file_name().is_some() {
                continue;
            }
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            let value = field.text().await?;
            self.insert_first_wins(name, value);
        }
        Ok(())
    }
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let query = req.uri().query().map(str::to_owned);

        let mut fields = Self::default();
        if content_type.starts_with(MULTIPART_CONTENT_TYPE) {
            let multipart = Multipart::from_request(req, state).await?;
            fields.read_multipart(multipart).await?;
        } else {
            let body = Bytes::from_request(req, state).await?;
            if content_type.starts_with(FORM_CONTENT_TYPE) {
                fields.extend_first_wins(form_urlencoded::parse(&body).into_owned());
            }
        }
        if let Some(query) = query {
            fields.extend_first_wins(form_urlencoded::parse(query.as_bytes()).into_owned());
        }

        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    async fn extract(req: Request) -> FormFields {
        FormFields::from_request(req, &()).await.unwrap()
    }

    #[tokio::test]
    async fn reads_urlencoded_body() {
        let req = Request::builder()
            .method("DELETE")
            .uri("/todos")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded; charset=UTF-8")
            .body(Body::from("id=12&title=Buy+milk"))
            .unwrap();

        let fields = extract(req).await;
        assert_eq!(fields.id(), Ok(12));
        assert_eq!(fields.title().unwrap().as_str(), "Buy milk");
    }

    #[tokio::test]
    async fn body_wins_over_query() {
        let req = Request::builder()
            .method("PUT")
            .uri("/todos?id=1&title=query")
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(Body::from("id=2"))
            .unwrap();

        let fields = extract(req).await;
        assert_eq!(fields.id(), Ok(2));
        assert_eq!(fields.get("title"), Some("query"));
    }

    #[tokio::test]
    async fn reads_multipart_text_fields() {
        let body = concat!(
            "--XX\r\n",
            "Content-Disposition: form-data; name=\"title\"\r\n\r\n",
            "Buy milk\r\n",
            "--XX\r\n",
            "Content-Disposition: form-data; name=\"id\"; filename=\"id.txt\"\r\n",
            "Content-Type: text/plain\r\n\r\n",
            "7\r\n",
            "--XX\r\n",
            "Content-Disposition: form-data; name=\"title\"\r\n\r\n",
            "second\r\n",
            "--XX--\r\n",
        );
        let req = Request::builder()
            .method("POST")
            .uri("/todos?id=3")
            .header(CONTENT_TYPE, "multipart/form-data; boundary=XX")
            .body(Body::from(body))
            .unwrap();

        let fields = extract(req).await;
        assert_eq!(fields.title().unwrap().as_str(), "Buy milk");
        // file part skipped, query fills in
        assert_eq!(fields.id(), Ok(3));
    }

    #[tokio::test]
    async fn ignores_non_form_body() {
        let req = Request::builder()
            .method("POST")
            .uri("/todos")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"title":"x"}"#))
            .unwrap();

        let fields = extract(req).await;
        assert!(matches!(
            fields.title(),
            Err(ValidationError::Empty { field: "title" })
        ));
    }
}
