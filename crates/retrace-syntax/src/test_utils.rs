//! Snapshot helpers for parser tests.

/// Snapshot test for the tree dump of a traditional-syntax pattern.
#[macro_export]
macro_rules! shot_ast {
    ($pattern:literal, @$snapshot:literal) => {{
        let ast = $crate::parse($pattern, $crate::SyntaxOptions::TRADITIONAL)
            .expect("pattern should parse");
        insta::assert_snapshot!(ast.dump(), @$snapshot);
    }};
}

/// Parse a traditional-syntax pattern that must fail.
pub fn parse_error(pattern: &str) -> crate::ParseError {
    match crate::parse(pattern, crate::SyntaxOptions::TRADITIONAL) {
        Ok(ast) => panic!("expected a parse error for {pattern:?}, got:\n{}", ast.dump()),
        Err(err) => err,
    }
}
