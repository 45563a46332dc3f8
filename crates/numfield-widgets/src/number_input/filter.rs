//! The keystroke filter: one decision table over [`KeyIntent`].

use super::config::NumberInputConfig;
use crate::key::KeyIntent;

/// Whether the host may apply a keystroke's default behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject,
}

impl Verdict {
    fn from_bool(accept: bool) -> Self {
        if accept {
            Verdict::Accept
        } else {
            Verdict::Reject
        }
    }

    pub fn is_accept(self) -> bool {
        self == Verdict::Accept
    }
}

/// Decide whether `intent` may be applied to `value`.
///
/// `has_negative_symbol` is the value's cached leading-sign flag. The filter
/// never mutates anything; commit detection is the caller's job.
pub fn verdict(
    intent: KeyIntent,
    value: &str,
    has_negative_symbol: bool,
    config: &NumberInputConfig,
) -> Verdict {
    match intent {
        KeyIntent::Navigation(_) | KeyIntent::Clipboard(_) | KeyIntent::Commit(_) => {
            Verdict::Accept
        }
        KeyIntent::DecimalPoint => {
            Verdict::from_bool(config.allow_decimal && !value.contains('.'))
        }
        KeyIntent::NegativeSign => {
            Verdict::from_bool(config.allow_negative && !has_negative_symbol)
        }
        // Without decimals, a digit can only keep the value whole if there is
        // no `.` already (one may survive a config change or an assignment).
        KeyIntent::Digit(_) => Verdict::from_bool(config.allow_decimal || !value.contains('.')),
        KeyIntent::Other => Verdict::Reject,
    }
}

/// Whether `value` is reachable by accepted keystrokes under `config`:
/// `-?\d*(\.\d*)?`, without the sign when negatives are off and without the
/// fraction when decimals are off.
pub fn is_in_progress(value: &str, config: &NumberInputConfig) -> bool {
    let unsigned = match value.strip_prefix('-') {
        Some(rest) if config.allow_negative => rest,
        Some(_) => return false,
        None => value,
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some(parts) if config.allow_decimal => parts,
        Some(_) => return false,
        None => (unsigned, ""),
    };
    whole.bytes().all(|b| b.is_ascii_digit()) && fraction.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `value` is a finished number under `config`:
/// `-?(0|[1-9]\d*)(\.\d+)?`, narrowed the same way. The empty string counts.
pub fn is_complete(value: &str, config: &NumberInputConfig) -> bool {
    if value.is_empty() {
        return true;
    }
    if !is_in_progress(value, config) {
        return false;
    }
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (unsigned, None),
    };
    let whole_ok = whole == "0" || (!whole.is_empty() && !whole.starts_with('0'));
    let fraction_ok = fraction.is_none_or(|f| !f.is_empty());
    whole_ok && fraction_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{ClipboardAction, CommitKey, NavigationKey};

    fn config(allow_negative: bool, allow_decimal: bool) -> NumberInputConfig {
        NumberInputConfig {
            allow_negative,
            allow_decimal,
            ..NumberInputConfig::default()
        }
    }

    fn check(intent: KeyIntent, value: &str, cfg: &NumberInputConfig) -> Verdict {
        verdict(intent, value, value.starts_with('-'), cfg)
    }

    #[test]
    fn passthrough_keys_always_accept() {
        let cfg = config(false, false);
        for intent in [
            KeyIntent::Navigation(NavigationKey::Backspace),
            KeyIntent::Navigation(NavigationKey::Function(12)),
            KeyIntent::Clipboard(ClipboardAction::Paste),
            KeyIntent::Commit(CommitKey::Enter),
            KeyIntent::Commit(CommitKey::Tab),
        ] {
            assert_eq!(check(intent, "1.5", &cfg), Verdict::Accept, "{intent:?}");
        }
    }

    #[test]
    fn other_always_rejects() {
        assert_eq!(check(KeyIntent::Other, "", &config(true, true)), Verdict::Reject);
    }

    #[test]
    fn one_decimal_point() {
        let cfg = config(true, true);
        assert_eq!(check(KeyIntent::DecimalPoint, "5", &cfg), Verdict::Accept);
        assert_eq!(check(KeyIntent::DecimalPoint, "5.2", &cfg), Verdict::Reject);
        assert_eq!(check(KeyIntent::DecimalPoint, "", &cfg), Verdict::Accept);
    }

    #[test]
    fn decimal_point_needs_permission() {
        assert_eq!(
            check(KeyIntent::DecimalPoint, "5", &config(true, false)),
            Verdict::Reject
        );
    }

    #[test]
    fn one_negative_sign() {
        let cfg = config(true, true);
        assert_eq!(check(KeyIntent::NegativeSign, "", &cfg), Verdict::Accept);
        assert_eq!(check(KeyIntent::NegativeSign, "5", &cfg), Verdict::Accept);
        assert_eq!(check(KeyIntent::NegativeSign, "-5", &cfg), Verdict::Reject);
        assert_eq!(
            check(KeyIntent::NegativeSign, "", &config(false, true)),
            Verdict::Reject
        );
    }

    #[test]
    fn digits_accept() {
        let cfg = config(true, true);
        assert_eq!(check(KeyIntent::Digit(0), "", &cfg), Verdict::Accept);
        assert_eq!(check(KeyIntent::Digit(9), "-1.5", &cfg), Verdict::Accept);
    }

    #[test]
    fn whole_numbers_reject_digits_after_a_stray_point() {
        let cfg = config(true, false);
        assert_eq!(check(KeyIntent::Digit(1), "12", &cfg), Verdict::Accept);
        assert_eq!(check(KeyIntent::Digit(1), "1.2", &cfg), Verdict::Reject);
    }

    #[test]
    fn in_progress_forms() {
        let cfg = config(true, true);
        for value in ["", "-", ".", "-.", "5.", "007", "-0.50", ".5"] {
            assert!(is_in_progress(value, &cfg), "{value:?}");
        }
        for value in ["--1", "1-", "1.2.3", "a", "1e5", " 1"] {
            assert!(!is_in_progress(value, &cfg), "{value:?}");
        }
    }

    #[test]
    fn in_progress_narrowed_by_config() {
        assert!(!is_in_progress("-1", &config(false, true)));
        assert!(!is_in_progress("1.", &config(true, false)));
        assert!(is_in_progress("-12", &config(true, false)));
    }

    #[test]
    fn complete_forms() {
        let cfg = config(true, true);
        for value in ["", "0", "-0", "42", "-3.25", "0.5"] {
            assert!(is_complete(value, &cfg), "{value:?}");
        }
        for value in ["-", ".", "5.", "007", ".5", "-."] {
            assert!(!is_complete(value, &cfg), "{value:?}");
        }
    }
}
