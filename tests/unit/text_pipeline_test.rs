// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use content_studio::domain::services::{ad_copy_cleaner, hashtag_extractor};
use std::collections::HashSet;

const CAPTIONS: &[&str] = &[
    "",
    "a ab abc abcd abcde",
    "there is a dog dog dog dog dog dog sitting",
    "Café société naïve résumé façade entrée",
    "  two  spaces between   words here  ",
    "the quick brown fox jumps over the lazy sleeping hound tonight",
    "emoji 🐶🐶🐶🐶 and punctuation!!! (brackets) [more]",
];

#[test]
fn test_hashtags_are_bounded_and_unique() {
    for caption in CAPTIONS {
        let tags = hashtag_extractor::extract(caption);
        assert!(tags.len() <= 7, "too many tags for {:?}: {:?}", caption, tags);
        assert_eq!(&tags[tags.len() - 2..], ["#photography", "#ai"]);

        let computed = &tags[..tags.len() - 2];
        let unique: HashSet<&String> = computed.iter().collect();
        assert_eq!(unique.len(), computed.len(), "duplicates for {:?}", caption);

        for tag in computed {
            let body = tag.strip_prefix('#').expect("tag starts with #");
            assert!(
                body.chars().all(|c| c.is_ascii_alphanumeric()),
                "unexpected characters in {:?}",
                tag
            );
        }
    }
}

#[test]
fn test_cleaner_leaves_plain_copy_untouched() {
    let inputs = [
        "Fresh coffee, delivered daily.",
        "Save 20% today only. Shop the collection now!",
        "Line one\nLine two",
    ];

    for input in inputs {
        let once = ad_copy_cleaner::clean(input);
        assert_eq!(once, input.trim());
        assert_eq!(ad_copy_cleaner::clean(&once), once);
    }
}

#[test]
fn test_cleaner_strips_every_bold_span() {
    let cleaned = ad_copy_cleaner::clean("**New** shoes for **every** runner");
    assert_eq!(cleaned, "shoes for  runner");
}
