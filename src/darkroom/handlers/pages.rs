//! The home and editor pages.
//!
//! Both render without an authentication check; the pages decide client side
//! what to show a signed-out visitor via `GET /session`.

use askama_axum::Template;
use axum::response::Redirect;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {}

#[derive(Template)]
#[template(path = "editor.html")]
pub struct EditorPage {}

pub async fn index() -> Redirect {
    Redirect::to("/home")
}

pub async fn home() -> HomePage {
    HomePage {}
}

pub async fn editor() -> EditorPage {
    EditorPage {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_page_renders() {
        let html = HomePage {}.render().unwrap();
        assert!(html.contains("/editor"));
    }

    #[test]
    fn test_editor_page_renders_filter_controls() {
        let html = EditorPage {}.render().unwrap();
        for control in [
            "saturate",
            "brightness",
            "contrast",
            "grayscale",
            "sepia",
            "blur",
            "hue",
        ] {
            assert!(html.contains(control), "missing control: {control}");
        }
        assert!(html.contains("/static/editor.js"));
    }
}
