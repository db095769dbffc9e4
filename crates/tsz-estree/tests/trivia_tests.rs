use serde_json::{Value as Json, json};
use tsz_estree::*;
use tsz_scanner::SyntaxKind;
use tsz_syntax::*;

fn convert_full(arena: &NodeArena, root: NodeIndex) -> Json {
    convert_with(arena, root, ConvertOptions::full())
}

fn convert_with(arena: &NodeArena, root: NodeIndex, options: ConvertOptions) -> Json {
    let mut maps = NodeMaps::new();
    let converted = convert_source_file(arena, root, &options, &mut maps).expect("conversion should succeed");
    serde_json::to_value(&converted).expect("program should serialize")
}

/// `(type, value)` for every token.
fn token_summary(program: &Json) -> Vec<(String, String)> {
    program["tokens"]
        .as_array()
        .expect("tokens requested")
        .iter()
        .map(|token| {
            (
                token["type"].as_str().unwrap_or_default().to_string(),
                token["value"].as_str().unwrap_or_default().to_string(),
            )
        })
        .collect()
}

fn tokens(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(ty, value)| (ty.to_string(), value.to_string()))
        .collect()
}

/// ``const t = `a${b}/c//d`;``
fn template_with_slashes() -> (NodeArena, NodeIndex) {
    let mut b = TreeBuilder::new("const t = `a${b}/c//d`;");
    let start = b.tok("const");
    let t = b.ident("t");
    b.tok("=");
    let head = b.template_part(SyntaxKind::TemplateHead, "`a${");
    let substitution = b.ident("b");
    let tail = b.template_part(SyntaxKind::TemplateTail, "}/c//d`");
    let span_pos = b.pos_of(substitution);
    let span = b.node(
        SyntaxKind::TemplateSpan,
        span_pos,
        TemplateSpanData {
            expression: substitution,
            literal: tail,
        },
    );
    let template_spans = b.list(vec![span]);
    let head_pos = b.pos_of(head);
    let template = b.node(
        SyntaxKind::TemplateExpression,
        head_pos,
        TemplateExprData { head, template_spans },
    );
    let decl = b.variable_declaration(t, NodeIndex::NONE, template);
    let stmt = b.variable_statement(start, node_flags::CONST, vec![decl]);
    b.finish(vec![stmt])
}

#[test]
fn close_brace_continues_template() {
    let (arena, root) = template_with_slashes();
    let program = convert_full(&arena, root);

    assert_eq!(
        token_summary(&program),
        tokens(&[
            ("Keyword", "const"),
            ("Identifier", "t"),
            ("Punctuator", "="),
            ("Template", "`a${"),
            ("Identifier", "b"),
            ("Template", "}/c//d`"),
            ("Punctuator", ";"),
        ])
    );
    assert_eq!(program["comments"], json!([]), "`//` inside a template is not a comment");
}

#[test]
fn template_literal_quasis_and_expressions() {
    let (arena, root) = template_with_slashes();
    let program = convert_with(&arena, root, ConvertOptions::default());
    let template = &program["body"][0]["declarations"][0]["init"];

    assert_eq!(template["type"], "TemplateLiteral");
    assert_eq!(template["expressions"][0]["name"], "b");
    let quasis = template["quasis"].as_array().expect("quasis");
    assert_eq!(quasis.len(), 2);
    assert_eq!(quasis[0]["type"], "TemplateElement");
    assert_eq!(quasis[0]["value"]["raw"], "a");
    assert_eq!(quasis[0]["value"]["cooked"], "a");
    assert_eq!(quasis[0]["tail"], false);
    assert_eq!(quasis[1]["value"]["raw"], "/c//d");
    assert_eq!(quasis[1]["tail"], true);
}

#[test]
fn slash_starting_a_regex_is_rescanned() {
    // r = /[/]\/+/gi;
    let mut b = TreeBuilder::new(r"r = /[/]\/+/gi;");
    let r = b.ident("r");
    b.tok("=");
    let regex = b.regex(r"/[/]\/+/gi");
    let assign = b.binary(r, SyntaxKind::EqualsToken, regex);
    let stmt = b.expression_statement(assign);
    let (arena, root) = b.finish(vec![stmt]);

    let program = convert_full(&arena, root);
    let regex_token = &program["tokens"][2];
    assert_eq!(regex_token["type"], "RegularExpression");
    assert_eq!(regex_token["value"], r"/[/]\/+/gi");
    assert_eq!(regex_token["regex"], json!({"pattern": r"[/]\/+", "flags": "gi"}));
    assert_eq!(program["tokens"].as_array().map(Vec::len), Some(4));

    let literal = &program["body"][0]["expression"]["right"];
    assert_eq!(literal["type"], "Literal");
    assert_eq!(literal["value"], Json::Null);
    assert_eq!(literal["regex"]["pattern"], r"[/]\/+");
    assert_eq!(literal["regex"]["flags"], "gi");
}

#[test]
fn division_stays_a_punctuator() {
    // n = a / b;
    let mut b = TreeBuilder::new("n = a / b;");
    let n = b.ident("n");
    b.tok("=");
    let a = b.ident("a");
    b.tok("/");
    let divisor = b.ident("b");
    let division = b.binary(a, SyntaxKind::SlashToken, divisor);
    let assign = b.binary(n, SyntaxKind::EqualsToken, division);
    let stmt = b.expression_statement(assign);
    let (arena, root) = b.finish(vec![stmt]);

    let program = convert_full(&arena, root);
    assert_eq!(
        token_summary(&program),
        tokens(&[
            ("Identifier", "n"),
            ("Punctuator", "="),
            ("Identifier", "a"),
            ("Punctuator", "/"),
            ("Identifier", "b"),
            ("Punctuator", ";"),
        ])
    );
    assert_eq!(program["body"][0]["expression"]["right"]["type"], "BinaryExpression");
    assert_eq!(program["body"][0]["expression"]["right"]["operator"], "/");
}

#[test]
fn shift_operators_are_one_token() {
    // x = a >> b;
    let mut b = TreeBuilder::new("x = a >> b;");
    let x = b.ident("x");
    b.tok("=");
    let a = b.ident("a");
    b.tok(">>");
    let amount = b.ident("b");
    let shift = b.binary(a, SyntaxKind::GreaterThanGreaterThanToken, amount);
    let assign = b.binary(x, SyntaxKind::EqualsToken, shift);
    let stmt = b.expression_statement(assign);
    let (arena, root) = b.finish(vec![stmt]);

    let program = convert_full(&arena, root);
    let shift_token = &program["tokens"][3];
    assert_eq!(shift_token["value"], ">>");
    assert_eq!(shift_token["range"], json!([6, 8]));
    assert_eq!(program["tokens"].as_array().map(Vec::len), Some(6));
}

#[test]
fn comments_are_collected_in_order() {
    // /** doc */ a; // end
    let mut b = TreeBuilder::new("/** doc */ a; // end");
    let a = b.ident("a");
    let stmt = b.expression_statement(a);
    let (arena, root) = b.finish(vec![stmt]);

    let program = convert_full(&arena, root);
    assert_eq!(
        program["comments"],
        json!([
            {
                "type": "Block",
                "value": "* doc ",
                "range": [0, 10],
                "loc": {"start": {"line": 1, "column": 0}, "end": {"line": 1, "column": 10}},
            },
            {
                "type": "Line",
                "value": " end",
                "range": [14, 20],
                "loc": {"start": {"line": 1, "column": 14}, "end": {"line": 1, "column": 20}},
            },
        ])
    );
    // Comments never show up as tokens.
    assert_eq!(token_summary(&program), tokens(&[("Identifier", "a"), ("Punctuator", ";")]));
}

#[test]
fn unterminated_block_comment_runs_to_end() {
    let mut b = TreeBuilder::new("a; /* open");
    let a = b.ident("a");
    let stmt = b.expression_statement(a);
    let (arena, root) = b.finish(vec![stmt]);

    let program = convert_full(&arena, root);
    let comments = program["comments"].as_array().expect("comments requested");
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["type"], "Block");
    assert_eq!(comments[0]["range"], json!([3, 10]));
}

/// `<p>it's // fine</p>;`
fn jsx_with_text() -> (NodeArena, NodeIndex) {
    let mut b = TreeBuilder::new("<p>it's // fine</p>;").with_file_name("input.tsx");
    let open = b.tok("<");
    let tag = b.ident("p");
    b.tok(">");
    let opening = b.node(
        SyntaxKind::JsxOpeningElement,
        open,
        JsxOpeningData {
            tag_name: tag,
            type_arguments: None,
            attributes: NodeIndex::NONE,
        },
    );
    let text = b.jsx_text("it's // fine");
    let close = b.tok("</");
    let closing_tag = b.ident("p");
    b.tok(">");
    let closing = b.node(SyntaxKind::JsxClosingElement, close, JsxClosingData { tag_name: closing_tag });
    let children = b.list(vec![text]);
    let element = b.node(
        SyntaxKind::JsxElement,
        open,
        JsxElementData {
            opening_element: opening,
            children,
            closing_element: closing,
        },
    );
    let stmt = b.expression_statement(element);
    b.finish(vec![stmt])
}

#[test]
fn jsx_text_is_a_single_token() {
    let (arena, root) = jsx_with_text();
    let program = convert_full(&arena, root);

    assert_eq!(
        token_summary(&program),
        tokens(&[
            ("Punctuator", "<"),
            ("JSXIdentifier", "p"),
            ("Punctuator", ">"),
            ("JSXText", "it's // fine"),
            ("Punctuator", "</"),
            ("JSXIdentifier", "p"),
            ("Punctuator", ">"),
            ("Punctuator", ";"),
        ])
    );
    assert_eq!(program["comments"], json!([]), "`//` inside JSX text is not a comment");
}

#[test]
fn jsx_text_node_kind_follows_options() {
    let (arena, root) = jsx_with_text();

    let program = convert_with(&arena, root, ConvertOptions::default());
    let element = &program["body"][0]["expression"];
    assert_eq!(element["type"], "JSXElement");
    assert_eq!(element["openingElement"]["attributes"], json!([]));
    assert_eq!(element["closingElement"]["name"]["name"], "p");
    assert_eq!(element["children"][0]["type"], "Literal");
    assert_eq!(element["children"][0]["value"], "it's // fine");
    assert_eq!(element["children"][0]["raw"], "it's // fine");

    let options = ConvertOptions {
        use_literal_text_node_for_markup_text: true,
        ..ConvertOptions::default()
    };
    let program = convert_with(&arena, root, options);
    assert_eq!(program["body"][0]["expression"]["children"][0]["type"], "JSXText");
}
