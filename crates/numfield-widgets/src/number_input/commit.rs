use super::value::ValueStore;

/// Emit the committed number if the value changed since the last commit.
///
/// Returns `None`, and leaves the store untouched, when nothing changed.
pub(crate) fn take_commit(store: &mut ValueStore) -> Option<f64> {
    if !store.take_dirty() {
        return None;
    }
    Some(parse_number(store.get()))
}

/// Parse a value the keystroke filter let through.
///
/// Forms with no digits at all (`""`, `"-"`, `"."`, `"-."`) count as zero;
/// a trailing or leading point is read as `5.` = 5 and `.5` = 0.5.
pub fn parse_number(value: &str) -> f64 {
    if !value.bytes().any(|b| b.is_ascii_digit()) {
        return 0.0;
    }
    match value.parse::<f64>() {
        Ok(n) => n,
        Err(err) => {
            log::warn!("uncommittable value {value:?} ({err}), committing 0");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers() {
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("-3.25"), -3.25);
        assert_eq!(parse_number("007"), 7.0);
        assert_eq!(parse_number("5."), 5.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("-.5"), -0.5);
    }

    #[test]
    fn digitless_forms_are_zero() {
        for value in ["", "-", ".", "-."] {
            assert_eq!(parse_number(value), 0.0, "{value:?}");
        }
    }

    #[test]
    fn commit_only_when_dirty() {
        let mut store = ValueStore::new();
        assert_eq!(take_commit(&mut store), None);

        store.set("42");
        assert_eq!(take_commit(&mut store), Some(42.0));
        assert_eq!(take_commit(&mut store), None);
        assert_eq!(store.get(), "42");
    }

    #[test]
    fn empty_commits_zero() {
        let mut store = ValueStore::new();
        store.set("");
        assert_eq!(take_commit(&mut store), Some(0.0));
    }
}
