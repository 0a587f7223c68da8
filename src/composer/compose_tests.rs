//! Tests for `MessageComposer` and `compose_with`.

use std::time::{Duration, SystemTime};

use chrono::FixedOffset;

use super::compose::{Composer, MessageComposer, compose_with};
use crate::message::{Block, BlockKind, Message, TextElement};
use crate::metadata::Metadata;
use crate::time::FixedClock;

// 2023-04-30 14:05:09 UTC
const SAMPLE_SECS: u64 = 1_682_863_509;

fn metadata() -> Metadata {
    Metadata::new("iOS 17.2", "iPhone 15")
}

fn composer(metadata: Metadata) -> MessageComposer<FixedClock> {
    MessageComposer::new(metadata)
        .with_clock(FixedClock(SystemTime::UNIX_EPOCH + Duration::from_secs(SAMPLE_SECS)))
}

fn blocks(message: &Message) -> &[Block] {
    &message.attachments[0].blocks
}

fn context_texts(message: &Message) -> Vec<&str> {
    blocks(message)[0]
        .elements()
        .iter()
        .map(|e| e.text.as_str())
        .collect()
}

fn count_kind(message: &Message, kind: BlockKind) -> usize {
    message.blocks().filter(|b| b.kind() == kind).count()
}

mod layout {
    use super::*;

    #[test]
    fn produces_single_attachment() {
        let message = composer(metadata()).compose("Nice app", None, None);

        assert_eq!(message.attachments.len(), 1);
    }

    #[test]
    fn orders_context_divider_section() {
        let message = composer(metadata()).compose("Nice app", None, None);
        let kinds: Vec<_> = blocks(&message).iter().map(Block::kind).collect();

        assert_eq!(
            kinds,
            vec![BlockKind::Context, BlockKind::Divider, BlockKind::Section]
        );
    }

    #[test]
    fn feedback_is_emphasized_without_emoji() {
        let message = composer(metadata()).compose("Crashes on launch", None, None);

        assert_eq!(
            blocks(&message)[2].text(),
            Some(&TextElement::markdown("*Crashes on launch*"))
        );
    }

    #[test]
    fn exactly_one_divider_and_one_section_for_any_feedback() {
        for feedback in ["a", "multi\nline", "emoji :tada:", "*already bold*", "  padded  "] {
            let message = composer(metadata()).compose(feedback, None, None);

            assert_eq!(count_kind(&message, BlockKind::Divider), 1, "{feedback:?}");
            assert_eq!(count_kind(&message, BlockKind::Section), 1, "{feedback:?}");
            let section = message
                .blocks()
                .find(|b| b.kind() == BlockKind::Section)
                .and_then(Block::text)
                .unwrap();
            assert_eq!(section.text, format!("*{feedback}*"));
        }
    }

    #[test]
    fn blank_feedback_is_not_rejected() {
        let message = composer(metadata()).compose("", None, None);

        assert_eq!(blocks(&message)[2].text().unwrap().text, "**");
    }
}

mod info_context {
    use super::*;

    #[test]
    fn without_app_version_has_three_elements() {
        let message = composer(metadata()).compose("x", None, None);

        assert_eq!(
            context_texts(&message),
            vec![
                "*:iphone:\tiPhone 15*",
                "*:minidisc:\tiOS 17.2*",
                "*:calendar:\t04/30/2023 14:05*",
            ]
        );
    }

    #[test]
    fn app_version_is_third_and_date_last() {
        let message = composer(metadata().with_app_version("3.4.1")).compose("x", None, None);
        let texts = context_texts(&message);

        assert_eq!(texts.len(), 4);
        assert_eq!(texts[2], "*:cd:\t3.4.1*");
        assert_eq!(texts[3], "*:calendar:\t04/30/2023 14:05*");
    }

    #[test]
    fn user_id_is_appended_last() {
        let message = composer(metadata()).compose("x", Some("U123"), None);
        let texts = context_texts(&message);

        assert_eq!(texts.len(), 4);
        assert_eq!(texts.last(), Some(&"*:bust_in_silhouette:\tU123*"));
    }

    #[test]
    fn user_id_follows_app_version_and_date() {
        let message =
            composer(metadata().with_app_version("1.0")).compose("x", Some("U123"), None);
        let texts = context_texts(&message);

        assert_eq!(texts.len(), 5);
        assert_eq!(texts[2], "*:cd:\t1.0*");
        assert_eq!(texts[3], "*:calendar:\t04/30/2023 14:05*");
        assert_eq!(texts[4], "*:bust_in_silhouette:\tU123*");
    }

    #[test]
    fn date_uses_configured_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let message = composer(metadata())
            .with_offset(offset)
            .compose("x", None, None);

        assert_eq!(context_texts(&message)[2], "*:calendar:\t04/30/2023 16:05*");
    }
}

mod contact_email {
    use super::*;

    #[test]
    fn email_section_is_appended_after_feedback() {
        let message = composer(metadata()).compose("Love it", None, Some("jo@example.com"));
        let blocks = blocks(&message);

        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[2].text().unwrap().text, "*Love it*");
        assert_eq!(blocks[3].text().unwrap().text, "*jo@example.com*");
    }

    #[test]
    fn email_does_not_change_context() {
        let with = composer(metadata()).compose("x", None, Some("jo@example.com"));
        let without = composer(metadata()).compose("x", None, None);

        assert_eq!(blocks(&with)[0], blocks(&without)[0]);
    }
}

mod determinism {
    use super::*;

    #[test]
    fn fixed_clock_gives_identical_messages() {
        let composer = composer(metadata());

        assert_eq!(
            composer.compose("same", Some("U1"), Some("a@b.c")),
            composer.compose("same", Some("U1"), Some("a@b.c"))
        );
    }

    #[test]
    fn composer_matches_pure_function() {
        let metadata = metadata().with_app_version("2.0");
        let composed = composer(metadata.clone()).compose("x", Some("U9"), Some("e@x.io"));
        let pure = compose_with("x", Some("U9"), Some("e@x.io"), &metadata, "04/30/2023 14:05");

        assert_eq!(composed, pure);
    }

    #[test]
    fn json_round_trip_preserves_tree() {
        let message = composer(metadata().with_app_version("2.0")).compose(
            "Round trip",
            Some("U1"),
            Some("a@b.c"),
        );

        let parsed: Message = serde_json::from_slice(&message.to_json().unwrap()).unwrap();

        assert_eq!(parsed, message);
    }

    #[test]
    fn exposes_metadata() {
        let composer = composer(metadata());

        assert_eq!(composer.metadata(), &metadata());
    }

    #[test]
    fn composer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MessageComposer>();
    }
}
