//! Embedded sample dataset.
//!
//! Five short posts: one clearly positive, one clearly negative, one mildly
//! positive with an emoticon, one neutral and one uncertain.

/// CSV block with a single quoted `text` column
pub const SAMPLE_CSV: &str = r#"text
"I love the new design of your website!"
"The flight was delayed and it was so frustrating."
"Looking forward to the weekend :)"
"The customer service was okay, nothing special."
"I'm not sure how I feel about this new update."
"#;
