use tailwind_merge::{ClassExplanation, TwMerge};

pub struct ExplainResult {
    pub explanations: Vec<ClassExplanation>,
}

/// Explains every whitespace separated token in `tokens`.
pub fn execute(engine: &TwMerge, tokens: &[String]) -> ExplainResult {
    let explanations = tokens
        .iter()
        .flat_map(|token| token.split_whitespace())
        .map(|class| engine.explain(class))
        .collect();
    ExplainResult { explanations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn test_explain_tokens() {
        let engine = TwMerge::default();
        let result = execute(
            &engine,
            &["hover:px-2 bg-red-500/50".to_string(), "my-widget".to_string()],
        );
        let output = result
            .explanations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        expect![[r#"
            class=hover:px-2 group=px modifiers=hover conflicts=pr,pl
            class=bg-red-500/50 group=bg-color postfix=50
            class=my-widget group=none"#]]
        .assert_eq(&output);
    }
}
