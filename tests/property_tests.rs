// Property tests for the command interpreter

mod common;

use common::harness::TerminalHarness;
use innohacks::commands::CommandRegistry;
use innohacks::model::LineKind;
use proptest::prelude::*;

/// Inputs that are not a known command, in any casing
fn unknown_command() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 _./-]{1,24}".prop_filter("must not be a known command", |s| {
        let trimmed = s.trim();
        !trimmed.is_empty() && CommandRegistry::new().find(trimmed).is_none()
    })
}

/// A known command name with random casing and padding
fn known_command() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["help", "about", "tracks", "whoami", "register"]),
        prop::collection::vec(any::<bool>(), 8),
        " {0,3}",
        " {0,3}",
    )
        .prop_map(|(name, upper, pad_l, pad_r)| {
            let cased: String = name
                .chars()
                .zip(upper.iter().cycle())
                .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
                .collect();
            format!("{pad_l}{cased}{pad_r}")
        })
}

proptest! {
    /// Unknown input yields exactly an echo plus an error naming the input
    #[test]
    fn unknown_input_appends_echo_and_error(input in unknown_command()) {
        let mut h = TerminalHarness::seeded();
        h.submit(&input);

        let trimmed = input.trim();
        let kinds = h.kinds();
        let texts = h.texts();
        prop_assert_eq!(h.len(), 4);
        prop_assert_eq!(&kinds[2..], &[LineKind::Command, LineKind::Error][..]);
        prop_assert!(texts[2].ends_with(trimmed));
        prop_assert!(texts[3].contains(trimmed));
    }

    /// Whitespace-only input never changes the session
    #[test]
    fn whitespace_input_is_noop(input in "[ \t\n\r]{0,10}") {
        let mut h = TerminalHarness::seeded();
        h.submit(&input);
        prop_assert_eq!(h.len(), 2);
        prop_assert!(h.session.history().is_empty());
    }

    /// Casing never changes which handler runs
    #[test]
    fn dispatch_ignores_case(input in known_command()) {
        let mut upper = TerminalHarness::new();
        let mut lower = TerminalHarness::new();
        upper.submit(&input);
        lower.submit(&input.trim().to_lowercase());

        let upper_texts = upper.texts();
        let lower_texts = lower.texts();
        prop_assert_eq!(upper.kinds(), lower.kinds());
        prop_assert_eq!(&upper_texts[1..], &lower_texts[1..]);
        prop_assert_eq!(&upper_texts[0], &format!("user@innohacks:~$ {}", input.trim()));
    }

    /// Every non-blank submission lands in history, in order, and clear
    /// never removes any
    #[test]
    fn history_records_every_submission(
        inputs in prop::collection::vec(prop_oneof!["clear", unknown_command(), known_command()], 1..20)
    ) {
        let mut h = TerminalHarness::new();
        for input in &inputs {
            h.submit(input);
        }

        let expected: Vec<String> = inputs.iter().map(|s| s.trim().to_string()).collect();
        prop_assert_eq!(h.session.history().entries(), &expected[..]);
        prop_assert_eq!(h.session.pending_input(), "");
    }

    /// Recalling back then forward the same number of steps returns to the
    /// live position with an empty input
    #[test]
    fn recall_round_trip_returns_to_live(count in 1usize..10, steps in 1usize..15) {
        let mut h = TerminalHarness::new();
        for i in 0..count {
            h.submit(&format!("cmd{i}"));
        }

        for _ in 0..steps {
            h.session.recall_previous();
        }
        let depth = steps.min(count);
        prop_assert_eq!(h.session.pending_input(), format!("cmd{}", count - depth));

        for _ in 0..depth {
            h.session.recall_next();
        }
        prop_assert_eq!(h.session.pending_input(), "");
        prop_assert_eq!(h.session.history().cursor(), None);
    }

    /// N register submissions fire N close and N navigate requests
    #[test]
    fn register_fires_once_per_submission(n in 1usize..8) {
        let mut h = TerminalHarness::new();
        for _ in 0..n {
            h.submit("register");
        }
        prop_assert_eq!(h.advance_ms(1000), n);
        prop_assert_eq!(h.host.close_count(), n);
        prop_assert_eq!(h.host.navigations().len(), n);
    }
}
