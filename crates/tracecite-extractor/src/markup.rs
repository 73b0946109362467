//! Compiled patterns for the markup grammar embedded in traces and answers
//!
//! The grammar is case-sensitive and must match what the agent emits:
//!
//! ```text
//! <cite id="ID[,ID]*">TEXT</cite>
//! <snippet id=ID> Title: ... URL: ... Snippet: ... </snippet>
//! <call_tool name="NAME" attr="val" ...>BODY</call_tool>
//! <tool_output>BODY</tool_output>
//! ```

use regex::Regex;
use std::sync::OnceLock;

pub(crate) fn cite_re() -> &'static Regex {
    static CITE_RE: OnceLock<Regex> = OnceLock::new();
    CITE_RE.get_or_init(|| {
        Regex::new(r#"(?s)<cite id="([^"]*)">(.*?)</cite>"#).expect("valid cite regex")
    })
}

pub(crate) fn snippet_re() -> &'static Regex {
    static SNIPPET_RE: OnceLock<Regex> = OnceLock::new();
    SNIPPET_RE.get_or_init(|| {
        Regex::new(
            r#"(?s)<snippet id=([^\s>"']+)>\s*Title:([^\n]*)\n\s*URL:([^\n]*)\n\s*Snippet:(.*?)</snippet>"#,
        )
        .expect("valid snippet regex")
    })
}

pub(crate) fn call_tool_re() -> &'static Regex {
    static CALL_TOOL_RE: OnceLock<Regex> = OnceLock::new();
    CALL_TOOL_RE.get_or_init(|| {
        Regex::new(
            r#"(?s)<call_tool\s+name="([^"]+)"((?:[^>"]|"[^"]*")*)>(.*?)</call_tool>"#,
        )
        .expect("valid call_tool regex")
    })
}

pub(crate) fn attribute_re() -> &'static Regex {
    static ATTRIBUTE_RE: OnceLock<Regex> = OnceLock::new();
    ATTRIBUTE_RE.get_or_init(|| {
        Regex::new(r#"([\w-]+)="([^"]*)""#).expect("valid attribute regex")
    })
}

pub(crate) fn tool_output_re() -> &'static Regex {
    static TOOL_OUTPUT_RE: OnceLock<Regex> = OnceLock::new();
    TOOL_OUTPUT_RE.get_or_init(|| {
        Regex::new(r"(?s)<tool_output>(.*?)</tool_output>").expect("valid tool_output regex")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cite_is_case_sensitive() {
        assert!(cite_re().is_match(r#"<cite id="a">x</cite>"#));
        assert!(!cite_re().is_match(r#"<CITE id="a">x</CITE>"#));
    }

    #[test]
    fn test_snippet_id_must_be_bare() {
        let quoted = "<snippet id=\"a\">\nTitle: T\nURL: U\nSnippet: S\n</snippet>";
        let spaced = "<snippet id= a>\nTitle: T\nURL: U\nSnippet: S\n</snippet>";
        assert!(!snippet_re().is_match(quoted));
        assert!(!snippet_re().is_match(spaced));
    }

    #[test]
    fn test_call_tool_requires_name_first() {
        assert!(call_tool_re().is_match(r#"<call_tool name="s" q="1">b</call_tool>"#));
        assert!(!call_tool_re().is_match(r#"<call_tool q="1" name="s">b</call_tool>"#));
    }

    #[test]
    fn test_attribute_values_may_contain_angle_brackets() {
        let caps = call_tool_re()
            .captures(r#"<call_tool name="s" query="a > b">body</call_tool>"#)
            .unwrap();
        assert_eq!(&caps[3], "body");
    }

    #[test]
    fn test_unquoted_attributes_do_not_reject_the_block() {
        let caps = call_tool_re()
            .captures(r#"<call_tool name="s" limit=5 k='v' q = "x">body</call_tool>"#)
            .unwrap();
        assert_eq!(&caps[1], "s");
        assert_eq!(&caps[3], "body");
    }
}
