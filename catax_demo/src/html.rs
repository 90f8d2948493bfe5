// Copyright 2025 the Catax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-page HTML report embedding one SVG per demo.

use crate::svg::escape_xml;

#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: String,
    pub(crate) svg: String,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let title = escape_xml(title);
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{title}</title>\n"));
    out.push_str(
        "<style>body{font-family:sans-serif;margin:2em}section{margin-bottom:2em}\
         svg{border:1px solid #ddd}</style>\n",
    );
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{title}</h1>\n"));
    for section in sections {
        out.push_str("<section>\n");
        out.push_str(&format!("<h2>{}</h2>\n", escape_xml(&section.title)));
        out.push_str(&section.svg);
        out.push_str("</section>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}
