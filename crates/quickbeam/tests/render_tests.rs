use pretty_assertions::assert_eq;
use quickbeam::{render_to_string, RenderError, Term};

// Helper to render a term that is expected to succeed
fn render(term: &Term) -> String {
    render_to_string(term).unwrap()
}

// Helper asserting balanced delimiter counts in generated text
fn assert_balanced(text: &str) {
    let count = |c: char| text.chars().filter(|&ch| ch == c).count();
    assert_eq!(count('('), count(')'), "unbalanced parens in: {text}");
    assert_eq!(count('{'), count('}'), "unbalanced braces in: {text}");
}

// ═══════════════════════════════════════════════════════════════════════
// Expression Rendering
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_render_empty_is_nothing() {
    assert_eq!(render(&Term::Empty), "");
}

#[test]
fn test_render_int_exact_decimal() {
    assert_eq!(render(&Term::int(0)), "0");
    assert_eq!(render(&Term::int(42)), "42");
    assert_eq!(render(&Term::int(-13)), "-13");
}

#[test]
fn test_render_str_double_quoted() {
    assert_eq!(render(&Term::string("pos")), "\"pos\"");
    assert_eq!(render(&Term::string("")), "\"\"");
}

#[test]
fn test_render_var_verbatim() {
    assert_eq!(render(&Term::var("counter")), "counter");
}

#[test]
fn test_render_binary_add() {
    let term = Term::binary("Add", Term::int(2), Term::int(3));
    assert_eq!(render(&term), "2 + 3");
}

#[test]
fn test_render_binary_nested() {
    let term = Term::binary(
        "Mul",
        Term::binary("Add", Term::int(1), Term::int(2)),
        Term::var("x"),
    );
    assert_eq!(render(&term), "1 + 2 * x");
}

#[test]
fn test_render_every_operator() {
    for (tag, symbol) in [
        ("Add", "+"),
        ("Sub", "-"),
        ("Mul", "*"),
        ("Div", "/"),
        ("Rem", "%"),
        ("Eq", "=="),
        ("Neq", "!="),
        ("Lt", "<"),
        ("Gt", ">"),
        ("Lte", "<="),
        ("Gte", ">="),
        ("And", "&&"),
        ("Or", "||"),
    ] {
        let term = Term::binary(tag, Term::var("a"), Term::var("b"));
        assert_eq!(render(&term), format!("a {symbol} b"));
    }
}

#[test]
fn test_render_unknown_operator_fails() {
    let term = Term::binary("Xor", Term::int(1), Term::int(2));
    assert_eq!(
        render_to_string(&term).unwrap_err(),
        RenderError::UnknownOperator {
            op: "Xor".to_string()
        }
    );
}

#[test]
fn test_render_call_comma_rule() {
    let term = Term::call(Term::var("f"), vec![Term::int(1), Term::int(2)]);
    assert_eq!(render(&term), "f(1,2)");

    let term = Term::call(Term::var("g"), vec![]);
    assert_eq!(render(&term), "g()");

    let term = Term::call(Term::var("h"), vec![Term::var("x")]);
    assert_eq!(render(&term), "h(x)");
}

// ═══════════════════════════════════════════════════════════════════════
// Statement Rendering
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_render_print() {
    let term = Term::print(Term::string("hi"));
    assert_eq!(render(&term), "System.Console.WriteLine(\"hi\");\n");
}

#[test]
fn test_render_let_value_binding() {
    let term = Term::binding("x", Term::int(5), None);
    assert_eq!(render(&term), "var x = 5;\n");
}

#[test]
fn test_render_let_chained_to_print() {
    let term = Term::binding("x", Term::int(5), Some(Term::print(Term::var("x"))));
    assert_eq!(render(&term), "var x = 5;\nSystem.Console.WriteLine(x);\n");
}

#[test]
fn test_render_if_with_else() {
    let term = Term::If {
        condition: Box::new(Term::binary("Gt", Term::var("a"), Term::int(0))),
        then: Box::new(Term::string("pos")),
        otherwise: Some(Box::new(Term::string("neg"))),
        next: None,
    };
    let text = render(&term);
    assert_eq!(
        text,
        "if (a > 0)\n{\nreturn \"pos\";\n}\nelse\n{\nreturn \"neg\";\n}\n"
    );
    assert_balanced(&text);
}

#[test]
fn test_render_if_without_else() {
    let term = Term::If {
        condition: Box::new(Term::var("c")),
        then: Box::new(Term::int(1)),
        otherwise: None,
        next: None,
    };
    let text = render(&term);
    assert_eq!(text, "if (c)\n{\nreturn 1;\n}\n");
    assert!(!text.contains("else"));
}

#[test]
fn test_render_if_successor_outside_block() {
    let term = Term::If {
        condition: Box::new(Term::var("c")),
        then: Box::new(Term::int(1)),
        otherwise: None,
        next: Some(Box::new(Term::binding("x", Term::int(2), None))),
    };
    let text = render(&term);
    assert!(text.ends_with("}\nvar x = 2;\n"));
}

#[test]
fn test_render_function_literal() {
    let term = Term::Function {
        parameters: vec!["a".to_string(), "b".to_string()],
        body: Box::new(Term::binary("Add", Term::var("a"), Term::var("b"))),
        next: None,
    };
    assert_eq!(render(&term), "(int a, int b)\n{\na + b\n}\n");
}

#[test]
fn test_render_function_no_parameters() {
    let term = Term::Function {
        parameters: vec![],
        body: Box::new(Term::int(1)),
        next: None,
    };
    assert_eq!(render(&term), "()\n{\n1\n}\n");
}

#[test]
fn test_render_let_function_is_named_declaration() {
    let function = Term::Function {
        parameters: vec!["a".to_string(), "b".to_string()],
        body: Box::new(Term::binary("Add", Term::var("a"), Term::var("b"))),
        next: None,
    };
    let term = Term::binding("add", function, None);
    let text = render(&term);
    assert_eq!(text, "int add(int a, int b)\n{\na + b\n}\n");
    assert!(!text.contains('='));
}

// ═══════════════════════════════════════════════════════════════════════
// Structural Properties
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_render_is_idempotent() {
    let term = Term::binding(
        "add",
        Term::Function {
            parameters: vec!["a".to_string(), "b".to_string()],
            body: Box::new(Term::If {
                condition: Box::new(Term::binary("Gt", Term::var("a"), Term::var("b"))),
                then: Box::new(Term::var("a")),
                otherwise: Some(Box::new(Term::var("b"))),
                next: None,
            }),
            next: None,
        },
        Some(Term::print(Term::call(
            Term::var("add"),
            vec![Term::int(1), Term::int(2)],
        ))),
    );

    let first = render(&term);
    let second = render(&term);
    assert_eq!(first, second);
}

#[test]
fn test_render_balanced_delimiters() {
    let terms = [
        Term::call(Term::var("f"), vec![Term::int(1), Term::int(2)]),
        Term::print(Term::binary("Add", Term::int(1), Term::int(2))),
        Term::If {
            condition: Box::new(Term::var("c")),
            then: Box::new(Term::call(Term::var("f"), vec![Term::var("c")])),
            otherwise: Some(Box::new(Term::int(0))),
            next: Some(Box::new(Term::print(Term::var("c")))),
        },
        Term::binding(
            "t",
            Term::Tuple {
                first: Box::new(Term::int(1)),
                second: Box::new(Term::int(2)),
                next: None,
            },
            Some(Term::print(Term::First(Box::new(Term::var("t"))))),
        ),
    ];

    for term in &terms {
        assert_balanced(&render(term));
    }
}

#[test]
fn test_render_tuple_binding_and_projection() {
    let term = Term::binding(
        "t",
        Term::Tuple {
            first: Box::new(Term::int(1)),
            second: Box::new(Term::int(2)),
            next: None,
        },
        Some(Term::print(Term::Second(Box::new(Term::var("t"))))),
    );
    assert_eq!(
        render(&term),
        "var t = (1, 2);\nSystem.Console.WriteLine(t.Item2);\n"
    );
}
