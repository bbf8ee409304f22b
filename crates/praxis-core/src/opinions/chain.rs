//! Resolution chain: candidate document paths for a context, general to specific.
//!
//! ```text
//! _shared/first-principles.md
//! {domain}/README.md
//! {domain}/principles.md
//! {domain}/{stage}.md
//! {domain}/subtypes/{seg1}/README.md
//! {domain}/subtypes/{seg1}/principles.md
//! {domain}/subtypes/{seg1}/{stage}.md
//! {domain}/subtypes/{seg1}/{seg2}/README.md
//! ...
//! ```
//!
//! The order of the output is the precedence order: later entries refine
//! earlier ones.

/// The domain-independent document every chain starts with.
pub const SHARED_FIRST_PRINCIPLES: &str = "_shared/first-principles.md";

/// Split a subtype into its nesting segments.
///
/// `.` and `-` are equivalent separators, so `cli-python` and
/// `cli.python` both give `["cli", "python"]`. Empty segments are dropped.
pub fn subtype_segments(subtype: &str) -> Vec<String> {
    subtype
        .trim()
        .replace('.', "-")
        .split('-')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the ordered candidate list for `(domain, stage, subtype)`.
///
/// Pure; performs no I/O. Empty `stage` or `subtype` strings count as absent.
pub fn build_chain(domain: &str, stage: Option<&str>, subtype: Option<&str>) -> Vec<String> {
    let stage = stage.map(str::trim).filter(|s| !s.is_empty());

    let mut chain = vec![SHARED_FIRST_PRINCIPLES.to_string()];
    push_level(&mut chain, domain, stage);

    if let Some(subtype) = subtype {
        let mut level = format!("{domain}/subtypes");
        for segment in subtype_segments(subtype) {
            level.push('/');
            level.push_str(&segment);
            push_level(&mut chain, &level, stage);
        }
    }

    chain
}

fn push_level(chain: &mut Vec<String>, dir: &str, stage: Option<&str>) {
    chain.push(format!("{dir}/README.md"));
    chain.push(format!("{dir}/principles.md"));
    if let Some(stage) = stage {
        chain.push(format!("{dir}/{stage}.md"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_domain_only() {
        assert_eq!(
            build_chain("code", None, None),
            vec![
                "_shared/first-principles.md",
                "code/README.md",
                "code/principles.md",
            ]
        );
    }

    #[test]
    fn test_stage_and_nested_subtype() {
        assert_eq!(
            build_chain("code", Some("formalize"), Some("cli-python")),
            vec![
                "_shared/first-principles.md",
                "code/README.md",
                "code/principles.md",
                "code/formalize.md",
                "code/subtypes/cli/README.md",
                "code/subtypes/cli/principles.md",
                "code/subtypes/cli/formalize.md",
                "code/subtypes/cli/python/README.md",
                "code/subtypes/cli/python/principles.md",
                "code/subtypes/cli/python/formalize.md",
            ]
        );
    }

    #[rstest]
    #[case("cli-python", "cli.python")]
    #[case("web", "web")]
    #[case("a.b-c", "a-b.c")]
    fn test_separator_equivalence(#[case] left: &str, #[case] right: &str) {
        assert_eq!(
            build_chain("code", Some("execute"), Some(left)),
            build_chain("code", Some("execute"), Some(right))
        );
    }

    #[test]
    fn test_subtype_without_stage() {
        assert_eq!(
            build_chain("write", None, Some("blog")),
            vec![
                "_shared/first-principles.md",
                "write/README.md",
                "write/principles.md",
                "write/subtypes/blog/README.md",
                "write/subtypes/blog/principles.md",
            ]
        );
    }

    #[test]
    fn test_degenerate_subtypes() {
        assert_eq!(subtype_segments("cli--python."), vec!["cli", "python"]);
        assert!(subtype_segments("").is_empty());
        assert_eq!(build_chain("code", Some(""), Some("")).len(), 3);
    }
}
