//! Page chrome around a rendered page.
//!
//! Wraps the page body in a complete XHTML document: language, the page's `<title>` for search
//! engines and browser tabs, and an optional stylesheet.

use super::html::to_html;
use super::tree::Node;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout<'a> {
    /// BCP 47 language code of the document
    pub language: &'a str,
    /// Plain text document title
    pub seo_title: &'a str,
    /// Stylesheet href, if any
    pub stylesheet: Option<&'a str>,
}

impl Layout<'_> {
    /// Wrap the page body into a full XHTML document
    pub fn wrap(&self, body: &Node) -> String {
        let stylesheet = match self.stylesheet {
            Some(href) => format!(
                r#"
    <link rel="stylesheet" type="text/css" href="{}"/>"#,
                html_escape::encode_double_quoted_attribute(href)
            ),
            None => String::new(),
        };

        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN" "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">
<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="{lang}">
<head>
    <meta http-equiv="Content-Type" content="text/html; charset=UTF-8"/>
    <title>{title}</title>{stylesheet}
</head>
<body>
{body}
</body>
</html>
"#,
            lang = html_escape::encode_double_quoted_attribute(self.language),
            title = html_escape::encode_text(self.seo_title),
            stylesheet = stylesheet,
            body = to_html(body),
        )
    }
}
