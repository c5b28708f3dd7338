//! HTML rendering for the index page

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::models::Todo;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

#[derive(Serialize)]
struct IndexContext<'a> {
    todos: &'a [Todo],
}

/// Render the index page. Values are HTML-escaped.
pub fn render_index(todos: &[Todo]) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.add_template("index", INDEX_TEMPLATE)?;
    tt.render("index", &IndexContext { todos })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn todo(id: i32, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            title: title.into(),
            completed,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn renders_each_todo() {
        let html = render_index(&[todo(2, "Walk dog", true), todo(1, "Buy milk", false)]).unwrap();
        assert!(html.contains(r#"data-id="2""#));
        assert!(html.contains("Walk dog"));
        assert!(html.contains("Buy milk"));
        assert!(html.contains("checked"));
        assert!(!html.contains("Nothing to do."));
    }

    #[test]
    fn escapes_titles() {
        let html = render_index(&[todo(1, "<script>alert(1)</script>", false)]).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_list_message() {
        let html = render_index(&[]).unwrap();
        assert!(html.contains("Nothing to do."));
        assert!(!html.contains("todo-list\""));
    }
}
