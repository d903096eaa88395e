#![allow(clippy::module_inception)]

#[cfg(test)]
mod bbcode_tests {
    use proptest::prelude::*;
    use crate::bbcode::bbcode::render_bbcode;

    #[test]
    fn test_bold_and_italic_with_newline() {
        assert_eq!(render_bbcode("[b]hi[/b]\n[i]x[/i]"), "<strong>hi</strong><br><em>x</em>");
    }

    #[test]
    fn test_quote_tag() {
        assert_eq!(render_bbcode("[quote]sourced[/quote]"), "<blockquote>sourced</blockquote>");
    }

    #[test]
    fn test_quote_spans_newlines() {
        assert_eq!(
            render_bbcode("[quote]line one\nline two[/quote]"),
            "<blockquote>line one<br>line two</blockquote>"
        );
    }

    #[test]
    fn test_unmatched_tags_stay_literal() {
        assert_eq!(render_bbcode("[b]hi"), "[b]hi");
        assert_eq!(render_bbcode("bye[/i]"), "bye[/i]");
        assert_eq!(render_bbcode("[unknown]x[/unknown]"), "[unknown]x[/unknown]");
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert_eq!(render_bbcode("[B]hi[/B]"), "[B]hi[/B]");
    }

    #[test]
    fn test_repeated_tags() {
        assert_eq!(
            render_bbcode("[b]a[/b] and [b]c[/b]"),
            "<strong>a</strong> and <strong>c</strong>"
        );
    }

    #[test]
    fn test_html_is_escaped() {
        assert_eq!(
            render_bbcode("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_ampersand_is_escaped() {
        assert_eq!(render_bbcode("fish & chips"), "fish &amp; chips");
    }

    #[test]
    fn test_escaped_content_inside_tags() {
        assert_eq!(render_bbcode("[i]a < b[/i]"), "<em>a &lt; b</em>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_bbcode(""), "");
    }

    proptest! {
        #[test]
        fn test_output_has_no_markup_outside_the_tag_set(input in "\\PC*") {
            let rendered = render_bbcode(&input);
            let stripped = rendered
                .replace("<strong>", "").replace("</strong>", "")
                .replace("<em>", "").replace("</em>", "")
                .replace("<blockquote>", "").replace("</blockquote>", "")
                .replace("<br>", "");
            prop_assert!(!stripped.contains('<'));
            prop_assert!(!stripped.contains('>'));
        }
    }
}
