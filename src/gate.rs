/// Whether the compare action may run, and what to tell the user if not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateState {
    pub enabled: bool,
    pub hint: Option<&'static str>,
}

pub fn gate(has_original: bool, has_modified: bool) -> GateState {
    let hint = match (has_original, has_modified) {
        (true, true) => None,
        (false, false) => Some("Select both documents to compare"),
        (false, true) => Some("Select the original document"),
        (true, false) => Some("Select the modified document"),
    };

    GateState {
        enabled: hint.is_none(),
        hint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_enable_only_when_both_slots_are_occupied() {
        for has_a in [false, true] {
            for has_b in [false, true] {
                let state = gate(has_a, has_b);
                assert_eq!(state.enabled, has_a && has_b, "a={has_a} b={has_b}");
                assert_eq!(state.hint.is_none(), state.enabled);
            }
        }
    }

    #[test]
    fn should_describe_missing_documents() {
        assert_eq!(
            gate(false, false).hint,
            Some("Select both documents to compare")
        );
        assert_eq!(gate(false, true).hint, Some("Select the original document"));
        assert_eq!(gate(true, false).hint, Some("Select the modified document"));
    }
}
