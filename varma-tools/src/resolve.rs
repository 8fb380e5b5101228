use varma_core::{MatchOutcome, MatchPolicy, Matcher, normalize};

fn join_ids(outcome: &MatchOutcome) -> String {
    outcome
        .renderer_ids()
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One line per name: the raw name, its key and what it resolved to.
pub fn describe(matcher: &Matcher, name: &str, policy: MatchPolicy) -> String {
    let outcome = matcher.explain(name, policy);
    let key = normalize(name);
    match &outcome {
        MatchOutcome::RendererId(id) => format!("{name:?} -> renderer id {id}"),
        MatchOutcome::Exact { concept, .. } if *concept != key => format!(
            "{name:?} -> key '{key}' -> override '{concept}' -> {}",
            join_ids(&outcome)
        ),
        MatchOutcome::Exact { .. } => format!("{name:?} -> key '{key}' -> {}", join_ids(&outcome)),
        MatchOutcome::Fallback { concept, .. } => format!(
            "{name:?} -> key '{key}' -> fallback '{concept}' -> {}",
            join_ids(&outcome)
        ),
        MatchOutcome::Ambiguous { candidates, .. } => {
            let candidates: Vec<&str> = candidates.iter().map(|c| c.as_str()).collect();
            format!(
                "{name:?} -> key '{key}' -> ambiguous between {}",
                candidates.join(", ")
            )
        }
        MatchOutcome::Unmatched { .. } => format!("{name:?} -> key '{key}' -> no match"),
        MatchOutcome::Unmatchable => format!("{name:?} -> unmatchable"),
    }
}

/// Describe every name, followed by the union the batch resolves to.
pub fn report(matcher: &Matcher, names: &[String], policy: MatchPolicy) -> Vec<String> {
    let mut lines: Vec<String> = names
        .iter()
        .map(|name| describe(matcher, name, policy))
        .collect();
    let matched = names
        .iter()
        .filter(|name| matcher.explain(name, policy).is_match())
        .count();
    let resolved = matcher.resolve_with(names, policy);
    lines.push(format!(
        "{matched} of {} names resolved to {} objects",
        names.len(),
        resolved.len()
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use varma_core::AliasRegistry;

    fn matcher() -> Matcher {
        Matcher::new(AliasRegistry::builtin().expect("built-in table"))
    }

    #[test]
    fn describes_each_step() {
        let matcher = matcher();
        assert_eq!(
            describe(&matcher, "Porchai", MatchPolicy::EXACT),
            r#""Porchai" -> key 'porchai' -> 6_Porchai_L, 6_Porchai_R"#
        );
        assert_eq!(
            describe(&matcher, "1_UtchiVarmam", MatchPolicy::EXACT),
            r#""1_UtchiVarmam" -> renderer id 1_UtchiVarmam"#
        );
        assert_eq!(
            describe(&matcher, "Zzyzx", MatchPolicy::EXACT),
            r#""Zzyzx" -> key 'zzyzx' -> no match"#
        );
        assert_eq!(
            describe(&matcher, "42", MatchPolicy::EXACT),
            r#""42" -> unmatchable"#
        );
    }

    #[test]
    fn fuzzy_changes_the_outcome() {
        let matcher = matcher();
        let exact = describe(&matcher, "Manibanth", MatchPolicy::EXACT);
        let fuzzy = describe(&matcher, "Manibanth", MatchPolicy::WITH_FALLBACK);
        assert!(exact.ends_with("no match"));
        assert!(fuzzy.contains("fallback 'manibantha'"));
    }

    #[test]
    fn report_ends_with_summary() {
        let names = vec!["Thilartha Kalam".to_string(), "Zzyzx".to_string()];
        let lines = report(&matcher(), &names, MatchPolicy::EXACT);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "1 of 2 names resolved to 1 objects");
    }
}
