// ABOUTME: HTML pages for the landing page and the three tool forms
// ABOUTME: Templates are compiled into the binary and only the site title is substituted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

use axum::response::Html;

const TITLE_PLACEHOLDER: &str = "{{title}}";

/// HTML pages served by the GET routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Landing page linking to every tool
    Home,
    /// Family planner form
    PlannerForm,
    /// Meal planner form
    MealsForm,
    /// Emotional check-in form
    EmotionsForm,
}

impl Page {
    const fn template(self) -> &'static str {
        match self {
            Self::Home => include_str!("../templates/home.html"),
            Self::PlannerForm => include_str!("../templates/planner_form.html"),
            Self::MealsForm => include_str!("../templates/meals_form.html"),
            Self::EmotionsForm => include_str!("../templates/emotions_form.html"),
        }
    }

    /// Render the page with an HTML-escaped site title
    #[must_use]
    pub fn render(self, site_title: &str) -> Html<String> {
        let title = html_escape::encode_text(site_title);
        Html(self.template().replace(TITLE_PLACEHOLDER, &title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_escaped() {
        let Html(body) = Page::Home.render("Tom & Jerry <Family>");
        assert!(body.contains("<title>Tom &amp; Jerry &lt;Family&gt;</title>"));
        assert!(!body.contains(TITLE_PLACEHOLDER));
    }

    #[test]
    fn test_forms_post_to_their_routes() {
        for (page, action) in [
            (Page::PlannerForm, "action=\"/planner\""),
            (Page::MealsForm, "action=\"/meals\""),
            (Page::EmotionsForm, "action=\"/emotions\""),
        ] {
            let Html(body) = page.render("Suite");
            assert!(body.contains(action), "{page:?} should post to {action}");
        }
    }
}
