use md_image_reply::{build_reply, contains_image, parse, ReplyConfig, Segment};
use proptest::prelude::*;

/// Text that can never form or complete an image: no `!`, brackets or parens.
const GAP: &str = "[a-zA-Z0-9 \n\t.,:猫见图很可爱]{0,12}";

fn image_literal() -> impl Strategy<Value = (String, String)> {
    ("[a-z猫 ]{0,6}", "https://a\\.com/[a-z0-9]{1,6}\\.png")
}

fn render(segment: &Segment) -> String {
    match segment {
        Segment::Text { content } => content.clone(),
        Segment::Image { alt, url } => format!("![{}]({})", alt, url),
    }
}

proptest! {
    /// Any input without a Markdown image is never rewritten.
    #[test]
    fn no_image_means_no_reply(s in "\\PC*") {
        prop_assume!(!contains_image(&s));
        prop_assert_eq!(build_reply(&s, &ReplyConfig::default()), None);
        let configured = ReplyConfig::new(Some("https://cdn.example.com"));
        prop_assert_eq!(build_reply(&s, &configured), None);
    }

    /// Near-miss syntax built from the delimiter characters stays literal.
    #[test]
    fn near_miss_syntax_is_no_reply(s in "[!\\[\\]() a/]{0,16}") {
        prop_assume!(!contains_image(&s));
        prop_assert_eq!(build_reply(&s, &ReplyConfig::default()), None);
    }

    /// Segments come back in input order and rebuild the input once blank
    /// gaps are dropped.
    #[test]
    fn segments_rebuild_input_in_order(
        lead in GAP,
        body in proptest::collection::vec((image_literal(), GAP), 1..5),
    ) {
        let mut input = lead.clone();
        let mut expected = Vec::new();
        let mut kept = String::new();

        if !lead.trim().is_empty() {
            expected.push(Segment::Text { content: lead.clone() });
            kept.push_str(&lead);
        }
        for ((alt, url), gap) in &body {
            let literal = format!("![{}]({})", alt, url);
            input.push_str(&literal);
            input.push_str(gap);
            kept.push_str(&literal);
            expected.push(Segment::Image { alt: alt.clone(), url: url.clone() });
            if !gap.trim().is_empty() {
                expected.push(Segment::Text { content: gap.clone() });
                kept.push_str(gap);
            }
        }

        let segments = parse(&input, None);
        prop_assert_eq!(&segments, &expected);

        let rebuilt: String = segments.iter().map(render).collect();
        prop_assert_eq!(rebuilt, kept);

        let parts = build_reply(&input, &ReplyConfig::default());
        prop_assert_eq!(parts.map(|p| p.len()), Some(expected.len()));
    }
}
