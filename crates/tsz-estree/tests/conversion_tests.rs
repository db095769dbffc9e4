use serde_json::{Value as Json, json};
use tsz_common::Diagnostic;
use tsz_estree::*;
use tsz_scanner::SyntaxKind;
use tsz_syntax::*;

fn convert_with(arena: &NodeArena, root: NodeIndex, options: ConvertOptions) -> Result<ConvertedProgram, ConvertError> {
    let mut maps = NodeMaps::new();
    convert_source_file(arena, root, &options, &mut maps)
}

fn convert(arena: &NodeArena, root: NodeIndex) -> Json {
    let program = convert_with(arena, root, ConvertOptions::default()).expect("conversion should succeed");
    serde_json::to_value(&program).expect("program should serialize")
}

fn first_statement(program: &Json) -> &Json {
    &program["body"][0]
}

fn range(node: &Json) -> [u64; 2] {
    [
        node["range"][0].as_u64().expect("range start"),
        node["range"][1].as_u64().expect("range end"),
    ]
}

/// `const x = 1;`
fn const_declaration() -> (NodeArena, NodeIndex, NodeIndex) {
    let mut b = TreeBuilder::new("const x = 1;");
    let start = b.tok("const");
    let x = b.ident("x");
    b.tok("=");
    let one = b.num("1");
    let decl = b.variable_declaration(x, NodeIndex::NONE, one);
    let stmt = b.variable_statement(start, node_flags::CONST, vec![decl]);
    let (arena, root) = b.finish(vec![stmt]);
    (arena, root, x)
}

#[test]
fn converts_const_declaration() {
    let (arena, root, _) = const_declaration();
    let program = convert(&arena, root);

    assert_eq!(program["type"], "Program");
    assert_eq!(program["sourceType"], "script");
    assert_eq!(range(&program), [0, 12]);

    let decl = first_statement(&program);
    assert_eq!(decl["type"], "VariableDeclaration");
    assert_eq!(decl["kind"], "const");
    assert_eq!(range(decl), [0, 12]);

    let declarator = &decl["declarations"][0];
    assert_eq!(declarator["type"], "VariableDeclarator");
    assert_eq!(range(declarator), [6, 11]);
    assert_eq!(declarator["id"]["type"], "Identifier");
    assert_eq!(declarator["id"]["name"], "x");
    assert_eq!(range(&declarator["id"]), [6, 7]);
    assert_eq!(declarator["init"]["type"], "Literal");
    assert_eq!(declarator["init"]["value"], json!(1));
    assert_eq!(declarator["init"]["raw"], "1");
}

#[test]
fn locations_use_one_based_lines() {
    let (arena, root, _) = const_declaration();
    let program = convert(&arena, root);
    let id = &first_statement(&program)["declarations"][0]["id"];
    assert_eq!(id["loc"]["start"], json!({"line": 1, "column": 6}));
    assert_eq!(id["loc"]["end"], json!({"line": 1, "column": 7}));
}

#[test]
fn assignment_target_array_becomes_pattern() {
    // [a = 1, ...rest] = c;
    let mut b = TreeBuilder::new("[a = 1, ...rest] = c;");
    let open = b.tok("[");
    let a = b.ident("a");
    b.tok("=");
    let one = b.num("1");
    let default = b.binary(a, SyntaxKind::EqualsToken, one);
    b.tok(",");
    let dots = b.tok("...");
    let rest = b.ident("rest");
    let spread = b.node(
        SyntaxKind::SpreadElement,
        dots,
        UnaryExprDataEx {
            expression: rest,
            asterisk_token: false,
        },
    );
    b.tok("]");
    let elements = b.list(vec![default, spread]);
    let array = b.node(
        SyntaxKind::ArrayLiteralExpression,
        open,
        LiteralExprData {
            elements,
            multi_line: false,
        },
    );
    b.tok("=");
    let c = b.ident("c");
    let assign = b.binary(array, SyntaxKind::EqualsToken, c);
    let stmt = b.expression_statement(assign);
    let (arena, root) = b.finish(vec![stmt]);

    let program = convert(&arena, root);
    let expression = &first_statement(&program)["expression"];
    assert_eq!(expression["type"], "AssignmentExpression");
    assert_eq!(expression["operator"], "=");

    let left = &expression["left"];
    assert_eq!(left["type"], "ArrayPattern", "assignment target should be a pattern");
    assert_eq!(left["elements"][0]["type"], "AssignmentPattern");
    assert_eq!(left["elements"][0]["left"]["name"], "a");
    assert_eq!(left["elements"][1]["type"], "RestElement");
    assert_eq!(left["elements"][1]["argument"]["name"], "rest");
    assert_eq!(expression["right"]["type"], "Identifier");
}

#[test]
fn array_literal_stays_expression_outside_patterns() {
    // x = [a];
    let mut b = TreeBuilder::new("x = [a];");
    let x = b.ident("x");
    b.tok("=");
    let open = b.tok("[");
    let a = b.ident("a");
    b.tok("]");
    let elements = b.list(vec![a]);
    let array = b.node(
        SyntaxKind::ArrayLiteralExpression,
        open,
        LiteralExprData {
            elements,
            multi_line: false,
        },
    );
    let assign = b.binary(x, SyntaxKind::EqualsToken, array);
    let stmt = b.expression_statement(assign);
    let (arena, root) = b.finish(vec![stmt]);

    let program = convert(&arena, root);
    assert_eq!(first_statement(&program)["expression"]["right"]["type"], "ArrayExpression");
}

#[test]
fn converts_for_of_with_declaration() {
    // for (const k of obj) {}
    let mut b = TreeBuilder::new("for (const k of obj) {}");
    let start = b.tok("for");
    b.tok("(");
    let list_pos = b.tok("const");
    let k = b.ident("k");
    let decl = b.variable_declaration(k, NodeIndex::NONE, NodeIndex::NONE);
    let declarations = b.list(vec![decl]);
    let list = b.node(
        SyntaxKind::VariableDeclarationList,
        list_pos,
        VariableListData { declarations },
    );
    b.set_flags(list, node_flags::CONST);
    b.tok("of");
    let obj = b.ident("obj");
    b.tok(")");
    let open = b.tok("{");
    let body = b.block(open, vec![]);
    let stmt = b.node(
        SyntaxKind::ForOfStatement,
        start,
        ForInOfData {
            await_modifier: false,
            initializer: list,
            expression: obj,
            statement: body,
        },
    );
    let (arena, root) = b.finish(vec![stmt]);

    let program = convert(&arena, root);
    let for_of = first_statement(&program);
    assert_eq!(for_of["type"], "ForOfStatement");
    assert_eq!(for_of["await"], false);
    assert_eq!(for_of["left"]["type"], "VariableDeclaration");
    assert_eq!(for_of["left"]["kind"], "const");
    assert_eq!(for_of["left"]["declarations"].as_array().map(Vec::len), Some(1));
    assert_eq!(for_of["right"]["name"], "obj");
    assert_eq!(for_of["body"]["type"], "BlockStatement");
}

/// `let v = x satisfies T;`
fn satisfies_declaration() -> (NodeArena, NodeIndex) {
    let mut b = TreeBuilder::new("let v = x satisfies T;");
    let start = b.tok("let");
    let v = b.ident("v");
    b.tok("=");
    let x = b.ident("x");
    b.tok("satisfies");
    let t = b.ident("T");
    let t_pos = b.pos_of(t);
    let reference = b.node(
        SyntaxKind::TypeReference,
        t_pos,
        TypeRefData {
            type_name: t,
            type_arguments: None,
        },
    );
    let x_pos = b.pos_of(x);
    let satisfies = b.node(
        SyntaxKind::SatisfiesExpression,
        x_pos,
        TypeAssertionData {
            expression: x,
            type_node: reference,
        },
    );
    let decl = b.variable_declaration(v, NodeIndex::NONE, satisfies);
    let stmt = b.variable_statement(start, node_flags::LET, vec![decl]);
    b.finish(vec![stmt])
}

#[test]
fn unknown_kinds_fall_back_to_synthesized_names() {
    let (arena, root) = satisfies_declaration();
    let program = convert(&arena, root);
    let init = &first_statement(&program)["declarations"][0]["init"];

    assert_eq!(init["type"], "TSSatisfiesExpression");
    assert_eq!(init["expression"]["name"], "x");
    assert_eq!(init["typeAnnotation"]["type"], "TSTypeAnnotation");
    assert_eq!(init["typeAnnotation"]["typeAnnotation"]["type"], "TSTypeReference");
    assert_eq!(init["typeAnnotation"]["typeAnnotation"]["typeName"]["name"], "T");
    assert!(init.get("type_node").is_none(), "raw field names must not leak");
}

#[test]
fn strict_mode_rejects_synthesized_names() {
    let (arena, root) = satisfies_declaration();
    let err = convert_with(&arena, root, ConvertOptions::strict()).unwrap_err();
    assert_eq!(err, ConvertError::UnknownNodeType("TSSatisfiesExpression".to_string()));
    assert_eq!(err.to_string(), r#"Unknown AST_NODE_TYPE: "TSSatisfiesExpression""#);
}

#[test]
fn type_alias_becomes_type_declaration() {
    // type T = string;
    let mut b = TreeBuilder::new("type T = string;");
    let start = b.tok("type");
    let t = b.ident("T");
    b.tok("=");
    let string = b.token(SyntaxKind::StringKeyword);
    b.semicolon();
    let alias = b.node(
        SyntaxKind::TypeAliasDeclaration,
        start,
        TypeAliasData {
            name: t,
            type_node: string,
            ..Default::default()
        },
    );
    let (arena, root) = b.finish(vec![alias]);

    // Type keywords are in the vocabulary, so strict mode accepts them.
    let program = convert_with(&arena, root, ConvertOptions::strict()).expect("strict conversion");
    let program = serde_json::to_value(&program).unwrap();
    let decl = first_statement(&program);
    assert_eq!(decl["type"], "VariableDeclaration");
    assert_eq!(decl["kind"], "type");
    assert_eq!(decl["declarations"][0]["id"]["name"], "T");
    assert_eq!(decl["declarations"][0]["init"]["type"], "TSStringKeyword");
}

#[test]
fn parameter_annotations_extend_identifier_range() {
    // function f(a: number = 1): void {}
    let mut b = TreeBuilder::new("function f(a: number = 1): void {}");
    let start = b.tok("function");
    let f = b.ident("f");
    b.tok("(");
    let a = b.ident("a");
    b.tok(":");
    let number = b.token(SyntaxKind::NumberKeyword);
    b.tok("=");
    let one = b.num("1");
    let a_pos = b.pos_of(a);
    let param = b.node(
        SyntaxKind::Parameter,
        a_pos,
        ParameterData {
            name: a,
            type_annotation: number,
            initializer: one,
            ..Default::default()
        },
    );
    b.tok(")");
    b.tok(":");
    let void = b.token(SyntaxKind::VoidKeyword);
    let open = b.tok("{");
    let body = b.block(open, vec![]);
    let parameters = b.list(vec![param]);
    let func = b.node(
        SyntaxKind::FunctionDeclaration,
        start,
        FunctionData {
            name: f,
            parameters,
            type_annotation: void,
            body,
            ..Default::default()
        },
    );
    let (arena, root) = b.finish(vec![func]);

    let program = convert(&arena, root);
    let func = first_statement(&program);
    assert_eq!(func["type"], "FunctionDeclaration");
    assert_eq!(func["id"]["name"], "f");

    let param = &func["params"][0];
    assert_eq!(param["type"], "AssignmentPattern");
    assert_eq!(range(param), [11, 24]);
    assert_eq!(param["left"]["name"], "a");
    assert_eq!(range(&param["left"]), [11, 20], "identifier should cover its annotation");
    assert_eq!(param["left"]["typeAnnotation"]["type"], "TSTypeAnnotation");
    assert_eq!(range(&param["left"]["typeAnnotation"]), [12, 20]);
    assert_eq!(param["left"]["typeAnnotation"]["typeAnnotation"]["type"], "TSNumberKeyword");
    assert_eq!(param["right"]["value"], json!(1));

    assert_eq!(range(&func["returnType"]), [25, 31]);
    assert_eq!(func["returnType"]["typeAnnotation"]["type"], "TSVoidKeyword");
}

/// `class A extends B {}` or with a second base.
fn class_with_bases(text: &str, bases: &[&str]) -> (NodeArena, NodeIndex) {
    let mut b = TreeBuilder::new(text);
    let start = b.tok("class");
    let name = b.ident("A");
    let extends = b.tok("extends");
    let mut types = Vec::new();
    for (i, base) in bases.iter().enumerate() {
        if i > 0 {
            b.tok(",");
        }
        let ident = b.ident(base);
        let pos = b.pos_of(ident);
        types.push(b.node(
            SyntaxKind::ExpressionWithTypeArguments,
            pos,
            ExprWithTypeArgsData {
                expression: ident,
                type_arguments: None,
            },
        ));
    }
    let types = b.list(types);
    let clause = b.node(
        SyntaxKind::HeritageClause,
        extends,
        HeritageData {
            token: SyntaxKind::ExtendsKeyword,
            types,
        },
    );
    b.tok("{");
    b.tok("}");
    let heritage_clauses = b.list(vec![clause]);
    let class = b.node(
        SyntaxKind::ClassDeclaration,
        start,
        ClassData {
            name,
            heritage_clauses: Some(heritage_clauses),
            ..Default::default()
        },
    );
    b.finish(vec![class])
}

#[test]
fn converts_class_with_superclass() {
    let (arena, root) = class_with_bases("class A extends B {}", &["B"]);
    let program = convert(&arena, root);
    let class = first_statement(&program);
    assert_eq!(class["type"], "ClassDeclaration");
    assert_eq!(class["id"]["name"], "A");
    assert_eq!(class["superClass"]["name"], "B");
    assert_eq!(class["body"]["type"], "ClassBody");
    assert_eq!(range(&class["body"]), [18, 20]);
    assert_eq!(class["body"]["body"], json!([]));
}

#[test]
fn multiple_extends_is_a_structure_error() {
    let (arena, root) = class_with_bases("class A extends B, C {}", &["B", "C"]);
    let err = convert_with(&arena, root, ConvertOptions::default()).unwrap_err();
    assert_eq!(
        err,
        ConvertError::Structure {
            index: 19,
            line_number: 1,
            column: 19,
            message: "Classes can only extend a single class.".to_string(),
        }
    );
    assert_eq!(err.index(), Some(19));
}

#[test]
fn parse_diagnostics_abort_conversion() {
    let b = TreeBuilder::new("let = ;").with_diagnostic(Diagnostic::error(
        "input.ts",
        4,
        1,
        "Variable declaration expected.",
        1134,
    ));
    let (arena, root) = b.finish(vec![]);
    let err = convert_with(&arena, root, ConvertOptions::default()).unwrap_err();
    assert_eq!(
        err,
        ConvertError::Parse {
            index: 4,
            line_number: 1,
            column: 4,
            message: "Variable declaration expected.".to_string(),
        }
    );
    assert_eq!(err.to_string(), "Variable declaration expected. (1:4)");
}

#[test]
fn export_modifier_wraps_declaration() {
    // export const x = 1;
    let mut b = TreeBuilder::new("export const x = 1;");
    let export = b.token(SyntaxKind::ExportKeyword);
    let start = b.tok("const");
    let x = b.ident("x");
    b.tok("=");
    let one = b.num("1");
    let decl = b.variable_declaration(x, NodeIndex::NONE, one);
    let declarations = b.list(vec![decl]);
    let list = b.node(
        SyntaxKind::VariableDeclarationList,
        start,
        VariableListData { declarations },
    );
    b.set_flags(list, node_flags::CONST);
    b.semicolon();
    let modifiers = b.list(vec![export]);
    let stmt = b.node(
        SyntaxKind::VariableStatement,
        0,
        VariableStatementData {
            modifiers: Some(modifiers),
            declaration_list: list,
        },
    );
    let (arena, root) = b.finish(vec![stmt]);

    let program = convert(&arena, root);
    assert_eq!(program["sourceType"], "module");
    let export = first_statement(&program);
    assert_eq!(export["type"], "ExportNamedDeclaration");
    assert_eq!(range(export), [0, 19]);
    assert_eq!(export["specifiers"], json!([]));
    assert_eq!(export["source"], Json::Null);
    assert_eq!(export["declaration"]["type"], "VariableDeclaration");
    assert_eq!(range(&export["declaration"]), [7, 19], "declaration should start after the keyword");
}

#[test]
fn converts_default_and_named_imports() {
    // import d, { a as b } from "m";
    let mut b = TreeBuilder::new(r#"import d, { a as b } from "m";"#);
    let start = b.tok("import");
    let d = b.ident("d");
    b.tok(",");
    let open = b.tok("{");
    let a = b.ident("a");
    b.tok("as");
    let local = b.ident("b");
    let a_pos = b.pos_of(a);
    let specifier = b.node(
        SyntaxKind::ImportSpecifier,
        a_pos,
        SpecifierData {
            is_type_only: false,
            property_name: a,
            name: local,
        },
    );
    b.tok("}");
    let elements = b.list(vec![specifier]);
    let named = b.node(SyntaxKind::NamedImports, open, NamedImportsData { elements });
    let d_pos = b.pos_of(d);
    let clause = b.node(
        SyntaxKind::ImportClause,
        d_pos,
        ImportClauseData {
            is_type_only: false,
            name: d,
            named_bindings: named,
        },
    );
    b.tok("from");
    let source = b.string(r#""m""#);
    b.semicolon();
    let import = b.node(
        SyntaxKind::ImportDeclaration,
        start,
        ImportDeclData {
            modifiers: None,
            import_clause: clause,
            module_specifier: source,
        },
    );
    let (arena, root) = b.finish(vec![import]);

    let program = convert(&arena, root);
    assert_eq!(program["sourceType"], "module");
    let import = first_statement(&program);
    assert_eq!(import["type"], "ImportDeclaration");
    assert_eq!(import["source"]["value"], "m");
    assert_eq!(import["source"]["raw"], r#""m""#);

    let specifiers = import["specifiers"].as_array().expect("specifiers");
    assert_eq!(specifiers.len(), 2);
    assert_eq!(specifiers[0]["type"], "ImportDefaultSpecifier");
    assert_eq!(specifiers[0]["local"]["name"], "d");
    assert_eq!(range(&specifiers[0]), [7, 8]);
    assert_eq!(specifiers[1]["type"], "ImportSpecifier");
    assert_eq!(specifiers[1]["local"]["name"], "b");
    assert_eq!(specifiers[1]["imported"]["name"], "a");
}

#[test]
fn converts_self_closing_jsx_member_tag() {
    // <A.B c="x &amp; y" />;
    let mut b = TreeBuilder::new(r#"<A.B c="x &amp; y" />;"#).with_file_name("input.tsx");
    let open = b.tok("<");
    let a = b.ident("A");
    b.tok(".");
    let member = b.ident("B");
    let tag = b.property_access(a, member);
    let c = b.ident("c");
    b.tok("=");
    let value = b.string(r#""x &amp; y""#);
    let c_pos = b.pos_of(c);
    let attribute = b.node(
        SyntaxKind::JsxAttribute,
        c_pos,
        JsxAttributeData {
            name: c,
            initializer: value,
        },
    );
    let properties = b.list(vec![attribute]);
    let attributes = b.node(SyntaxKind::JsxAttributes, c_pos, JsxAttributesData { properties });
    b.tok("/>");
    let element = b.node(
        SyntaxKind::JsxSelfClosingElement,
        open,
        JsxOpeningData {
            tag_name: tag,
            type_arguments: None,
            attributes,
        },
    );
    let stmt = b.expression_statement(element);
    let (arena, root) = b.finish(vec![stmt]);

    let program = convert(&arena, root);
    let element = &first_statement(&program)["expression"];
    assert_eq!(element["type"], "JSXElement");
    assert_eq!(element["closingElement"], Json::Null);
    assert_eq!(element["children"], json!([]));

    let opening = &element["openingElement"];
    assert_eq!(opening["type"], "JSXOpeningElement");
    assert_eq!(opening["selfClosing"], true);
    assert_eq!(opening["name"]["type"], "JSXMemberExpression");
    assert_eq!(opening["name"]["object"]["type"], "JSXIdentifier");
    assert_eq!(opening["name"]["object"]["name"], "A");
    assert_eq!(opening["name"]["property"]["name"], "B");

    let attribute = &opening["attributes"][0];
    assert_eq!(attribute["type"], "JSXAttribute");
    assert_eq!(attribute["name"]["type"], "JSXIdentifier");
    assert_eq!(attribute["name"]["name"], "c");
    assert_eq!(attribute["value"]["type"], "Literal");
    assert_eq!(attribute["value"]["value"], "x & y", "entities should be decoded in attribute strings");
    assert_eq!(attribute["value"]["raw"], r#""x &amp; y""#);
}

#[test]
fn correspondence_maps_link_both_directions() {
    let (arena, root, x) = const_declaration();
    let options = ConvertOptions {
        provide_correspondence_maps: true,
        ..ConvertOptions::default()
    };
    let mut maps = NodeMaps::new();
    let converted = convert_source_file(&arena, root, &options, &mut maps).expect("conversion");

    assert!(!maps.is_empty());
    assert_eq!(maps.ts_to_es_entries().len(), maps.es_to_ts_entries().len());
    assert_eq!(maps.es_node_for(root), Some(converted.program.id));
    assert_eq!(maps.ts_node_for(converted.program.id), Some(root));

    let es_x = maps.es_node_for(x).expect("identifier should be mapped");
    assert_eq!(maps.ts_node_for(es_x), Some(x));
}

#[test]
fn maps_stay_empty_unless_requested() {
    let (arena, root, _) = const_declaration();
    let mut maps = NodeMaps::new();
    convert_source_file(&arena, root, &ConvertOptions::default(), &mut maps).expect("conversion");
    assert!(maps.is_empty());
    assert_eq!(maps.len(), 0);
}

#[test]
fn optional_collections_are_omitted_by_default() {
    let (arena, root, _) = const_declaration();
    let program = convert(&arena, root);
    assert!(program.get("tokens").is_none());
    assert!(program.get("comments").is_none());

    let full = convert_with(&arena, root, ConvertOptions::full()).expect("conversion");
    let full = serde_json::to_value(&full).unwrap();
    assert!(full["tokens"].is_array());
    assert_eq!(full["comments"], json!([]));
}

/// `let a;` preceded by whatever trivia `text` starts with.
fn let_after_trivia(text: &str) -> (NodeArena, NodeIndex) {
    let mut b = TreeBuilder::new(text);
    let start = b.tok("let");
    let a = b.ident("a");
    let decl = b.variable_declaration(a, NodeIndex::NONE, NodeIndex::NONE);
    let stmt = b.variable_statement(start, node_flags::LET, vec![decl]);
    b.finish(vec![stmt])
}

#[test]
fn program_starts_at_first_token() {
    let (arena, root) = let_after_trivia("// c\nlet a;");
    let program = convert(&arena, root);
    assert_eq!(range(&program), [5, 11], "leading comment is outside the program");
    assert_eq!(program["loc"]["start"], json!({"line": 2, "column": 0}));

    let (arena, root) = let_after_trivia("  \n/* c */ let a;");
    let program = convert(&arena, root);
    assert_eq!(range(&program), [11, 17], "leading whitespace is outside the program");
    assert_eq!(range(first_statement(&program)), [11, 17]);
}

#[test]
fn trivia_only_program_is_empty_at_end() {
    let (arena, root) = TreeBuilder::new("// only").finish(vec![]);
    let program = convert(&arena, root);
    assert_eq!(range(&program), [7, 7]);
    assert_eq!(program["body"], json!([]));
}

#[test]
fn comma_chain_flattens_into_one_sequence() {
    // a, b, c;
    let mut b = TreeBuilder::new("a, b, c;");
    let a = b.ident("a");
    b.tok(",");
    let second = b.ident("b");
    let left = b.binary(a, SyntaxKind::CommaToken, second);
    b.tok(",");
    let c = b.ident("c");
    let chain = b.binary(left, SyntaxKind::CommaToken, c);
    let stmt = b.expression_statement(chain);
    let (arena, root) = b.finish(vec![stmt]);

    let program = convert(&arena, root);
    let sequence = &first_statement(&program)["expression"];
    assert_eq!(sequence["type"], "SequenceExpression");
    assert_eq!(range(sequence), [0, 7]);
    let expressions = sequence["expressions"].as_array().expect("expressions");
    assert_eq!(expressions.len(), 3, "nested commas should not nest sequences");
    let names: Vec<&str> = expressions.iter().filter_map(|e| e["name"].as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

/// `m() {}`, `get x() {}` and `set x(v) {}`, optionally comma separated.
fn method_members(b: &mut TreeBuilder, separated: bool) -> Vec<NodeIndex> {
    let empty_body = |b: &mut TreeBuilder| {
        let open = b.tok("{");
        b.block(open, vec![])
    };

    let m = b.ident("m");
    b.tok("(");
    b.tok(")");
    let body = empty_body(b);
    let parameters = b.list(vec![]);
    let m_pos = b.pos_of(m);
    let method = b.node(
        SyntaxKind::MethodDeclaration,
        m_pos,
        FunctionData {
            name: m,
            parameters,
            body,
            ..Default::default()
        },
    );
    if separated {
        b.tok(",");
    }

    let get_pos = b.tok("get");
    let x = b.ident("x");
    b.tok("(");
    b.tok(")");
    let body = empty_body(b);
    let parameters = b.list(vec![]);
    let getter = b.node(
        SyntaxKind::GetAccessor,
        get_pos,
        FunctionData {
            name: x,
            parameters,
            body,
            ..Default::default()
        },
    );
    if separated {
        b.tok(",");
    }

    let set_pos = b.tok("set");
    let x = b.ident("x");
    b.tok("(");
    let v = b.ident("v");
    let v_pos = b.pos_of(v);
    let param = b.node(
        SyntaxKind::Parameter,
        v_pos,
        ParameterData {
            name: v,
            ..Default::default()
        },
    );
    b.tok(")");
    let body = empty_body(b);
    let parameters = b.list(vec![param]);
    let setter = b.node(
        SyntaxKind::SetAccessor,
        set_pos,
        FunctionData {
            name: x,
            parameters,
            body,
            ..Default::default()
        },
    );
    vec![method, getter, setter]
}

#[test]
fn class_members_become_method_definitions() {
    let mut b = TreeBuilder::new("class A { constructor() {} m() {} get x() {} set x(v) {} }");
    let start = b.tok("class");
    let name = b.ident("A");
    b.tok("{");
    let ctor_pos = b.tok("constructor");
    b.tok("(");
    b.tok(")");
    let open = b.tok("{");
    let body = b.block(open, vec![]);
    let parameters = b.list(vec![]);
    let constructor = b.node(
        SyntaxKind::Constructor,
        ctor_pos,
        FunctionData {
            parameters,
            body,
            ..Default::default()
        },
    );
    let mut members = vec![constructor];
    members.extend(method_members(&mut b, false));
    b.tok("}");
    let members = b.list(members);
    let class = b.node(
        SyntaxKind::ClassDeclaration,
        start,
        ClassData {
            name,
            members,
            ..Default::default()
        },
    );
    let (arena, root) = b.finish(vec![class]);

    let program = convert(&arena, root);
    let members = first_statement(&program)["body"]["body"].as_array().expect("class members").clone();
    assert_eq!(members.len(), 4);
    for member in &members {
        assert_eq!(member["type"], "MethodDefinition");
        assert_eq!(member["static"], false);
        assert_eq!(member["value"]["type"], "FunctionExpression");
    }
    let kinds: Vec<&str> = members.iter().filter_map(|m| m["kind"].as_str()).collect();
    assert_eq!(kinds, ["constructor", "method", "get", "set"]);
    assert_eq!(members[0]["key"]["name"], "constructor");
    assert_eq!(range(&members[0]["key"]), [10, 21]);
    assert_eq!(range(&members[0]["value"]), [21, 26], "method value starts at its parameters");
    assert_eq!(members[3]["value"]["params"][0]["name"], "v");
}

#[test]
fn object_literal_methods_become_properties() {
    // o = { m() {}, get x() {}, set x(v) {} };
    let mut b = TreeBuilder::new("o = { m() {}, get x() {}, set x(v) {} };");
    let o = b.ident("o");
    b.tok("=");
    let open = b.tok("{");
    let members = method_members(&mut b, true);
    b.tok("}");
    let elements = b.list(members);
    let object = b.node(
        SyntaxKind::ObjectLiteralExpression,
        open,
        LiteralExprData {
            elements,
            multi_line: false,
        },
    );
    let assign = b.binary(o, SyntaxKind::EqualsToken, object);
    let stmt = b.expression_statement(assign);
    let (arena, root) = b.finish(vec![stmt]);

    let program = convert(&arena, root);
    let object = &first_statement(&program)["expression"]["right"];
    assert_eq!(object["type"], "ObjectExpression");
    let properties = object["properties"].as_array().expect("properties");
    assert_eq!(properties.len(), 3);
    for property in properties {
        assert_eq!(property["type"], "Property");
        assert_eq!(property["shorthand"], false);
        assert_eq!(property["value"]["type"], "FunctionExpression");
        assert!(property.get("static").is_none(), "object members carry no static flag");
    }

    assert_eq!(properties[0]["kind"], "init");
    assert_eq!(properties[0]["method"], true);
    assert_eq!(properties[1]["kind"], "get");
    assert_eq!(properties[1]["method"], false);
    assert_eq!(properties[2]["kind"], "set");
    assert_eq!(properties[2]["method"], false);
    assert_eq!(properties[2]["value"]["params"][0]["name"], "v");
}

#[test]
fn object_assignment_target_collects_rest() {
    // ({a, ...r} = o);
    let mut b = TreeBuilder::new("({a, ...r} = o);");
    let paren = b.tok("(");
    let open = b.tok("{");
    let a = b.ident("a");
    let a_pos = b.pos_of(a);
    let shorthand = b.node(
        SyntaxKind::ShorthandPropertyAssignment,
        a_pos,
        ShorthandPropertyData {
            name: a,
            object_assignment_initializer: NodeIndex::NONE,
        },
    );
    b.tok(",");
    let dots = b.tok("...");
    let r = b.ident("r");
    let rest = b.node(
        SyntaxKind::SpreadAssignment,
        dots,
        UnaryExprDataEx {
            expression: r,
            asterisk_token: false,
        },
    );
    b.tok("}");
    let elements = b.list(vec![shorthand, rest]);
    let object = b.node(
        SyntaxKind::ObjectLiteralExpression,
        open,
        LiteralExprData {
            elements,
            multi_line: false,
        },
    );
    b.tok("=");
    let o = b.ident("o");
    let assign = b.binary(object, SyntaxKind::EqualsToken, o);
    b.tok(")");
    let parenthesized = b.node(
        SyntaxKind::ParenthesizedExpression,
        paren,
        ParenthesizedData { expression: assign },
    );
    let stmt = b.expression_statement(parenthesized);
    let (arena, root) = b.finish(vec![stmt]);

    let program = convert(&arena, root);
    let expression = &first_statement(&program)["expression"];
    assert_eq!(expression["type"], "AssignmentExpression");
    let pattern = &expression["left"];
    assert_eq!(pattern["type"], "ObjectPattern");
    assert_eq!(pattern["properties"][0]["type"], "Property");
    assert_eq!(pattern["properties"][0]["shorthand"], true);
    assert_eq!(pattern["properties"][0]["value"]["name"], "a");
    assert_eq!(pattern["properties"][1]["type"], "RestElement");
    assert_eq!(pattern["properties"][1]["argument"]["name"], "r");
    assert_eq!(range(&pattern["properties"][1]), [5, 9]);
}

#[test]
fn property_values_of_targets_are_patterns() {
    // ({a: [b]} = o);
    let mut b = TreeBuilder::new("({a: [b]} = o);");
    let paren = b.tok("(");
    let open = b.tok("{");
    let a = b.ident("a");
    b.tok(":");
    let bracket = b.tok("[");
    let inner = b.ident("b");
    b.tok("]");
    let elements = b.list(vec![inner]);
    let array = b.node(
        SyntaxKind::ArrayLiteralExpression,
        bracket,
        LiteralExprData {
            elements,
            multi_line: false,
        },
    );
    let a_pos = b.pos_of(a);
    let property = b.node(
        SyntaxKind::PropertyAssignment,
        a_pos,
        PropertyAssignmentData {
            name: a,
            question_token: false,
            initializer: array,
        },
    );
    b.tok("}");
    let elements = b.list(vec![property]);
    let object = b.node(
        SyntaxKind::ObjectLiteralExpression,
        open,
        LiteralExprData {
            elements,
            multi_line: false,
        },
    );
    b.tok("=");
    let o = b.ident("o");
    let assign = b.binary(object, SyntaxKind::EqualsToken, o);
    b.tok(")");
    let parenthesized = b.node(
        SyntaxKind::ParenthesizedExpression,
        paren,
        ParenthesizedData { expression: assign },
    );
    let stmt = b.expression_statement(parenthesized);
    let (arena, root) = b.finish(vec![stmt]);

    let program = convert(&arena, root);
    let pattern = &first_statement(&program)["expression"]["left"];
    assert_eq!(pattern["type"], "ObjectPattern");
    let value = &pattern["properties"][0]["value"];
    assert_eq!(value["type"], "ArrayPattern", "nested literal in a target should be a pattern");
    assert_eq!(value["elements"][0]["name"], "b");
}

#[test]
fn spreads_outside_patterns_stay_spread_elements() {
    // f(...xs); y = [...xs];
    let mut b = TreeBuilder::new("f(...xs); y = [...xs];");
    let f = b.ident("f");
    b.tok("(");
    let dots = b.tok("...");
    let xs = b.ident("xs");
    let argument = b.node(
        SyntaxKind::SpreadElement,
        dots,
        UnaryExprDataEx {
            expression: xs,
            asterisk_token: false,
        },
    );
    let call = b.call(f, vec![argument]);
    let call_stmt = b.expression_statement(call);

    let y = b.ident("y");
    b.tok("=");
    let bracket = b.tok("[");
    let dots = b.tok("...");
    let xs = b.ident("xs");
    let element = b.node(
        SyntaxKind::SpreadElement,
        dots,
        UnaryExprDataEx {
            expression: xs,
            asterisk_token: false,
        },
    );
    b.tok("]");
    let elements = b.list(vec![element]);
    let array = b.node(
        SyntaxKind::ArrayLiteralExpression,
        bracket,
        LiteralExprData {
            elements,
            multi_line: false,
        },
    );
    let assign = b.binary(y, SyntaxKind::EqualsToken, array);
    let array_stmt = b.expression_statement(assign);
    let (arena, root) = b.finish(vec![call_stmt, array_stmt]);

    let program = convert(&arena, root);
    let call = &program["body"][0]["expression"];
    assert_eq!(call["type"], "CallExpression");
    assert_eq!(call["arguments"][0]["type"], "SpreadElement");
    assert_eq!(call["arguments"][0]["argument"]["name"], "xs");
    assert_eq!(range(&call["arguments"][0]), [2, 7]);

    let array = &program["body"][1]["expression"]["right"];
    assert_eq!(array["type"], "ArrayExpression");
    assert_eq!(array["elements"][0]["type"], "SpreadElement");
    assert_eq!(range(&array["elements"][0]), [15, 20]);
}

#[test]
fn for_of_array_target_becomes_pattern() {
    // for ([k, v] of m) {}
    let mut b = TreeBuilder::new("for ([k, v] of m) {}");
    let start = b.tok("for");
    b.tok("(");
    let bracket = b.tok("[");
    let k = b.ident("k");
    b.tok(",");
    let v = b.ident("v");
    b.tok("]");
    let elements = b.list(vec![k, v]);
    let target = b.node(
        SyntaxKind::ArrayLiteralExpression,
        bracket,
        LiteralExprData {
            elements,
            multi_line: false,
        },
    );
    b.tok("of");
    let m = b.ident("m");
    b.tok(")");
    let open = b.tok("{");
    let body = b.block(open, vec![]);
    let stmt = b.node(
        SyntaxKind::ForOfStatement,
        start,
        ForInOfData {
            await_modifier: false,
            initializer: target,
            expression: m,
            statement: body,
        },
    );
    let (arena, root) = b.finish(vec![stmt]);

    let program = convert(&arena, root);
    let left = &first_statement(&program)["left"];
    assert_eq!(left["type"], "ArrayPattern");
    assert_eq!(range(left), [5, 11]);
    assert_eq!(left["elements"][0]["name"], "k");
    assert_eq!(left["elements"][1]["name"], "v");
}

#[test]
fn shorthand_binding_default_spans_name_to_initializer() {
    // const {a = 1} = o;
    let mut b = TreeBuilder::new("const {a = 1} = o;");
    let start = b.tok("const");
    let open = b.tok("{");
    let a = b.ident("a");
    b.tok("=");
    let one = b.num("1");
    let a_pos = b.pos_of(a);
    let element = b.node(
        SyntaxKind::BindingElement,
        a_pos,
        BindingElementData {
            name: a,
            initializer: one,
            ..Default::default()
        },
    );
    b.tok("}");
    let elements = b.list(vec![element]);
    let pattern = b.node(SyntaxKind::ObjectBindingPattern, open, BindingPatternData { elements });
    b.tok("=");
    let o = b.ident("o");
    let decl = b.variable_declaration(pattern, NodeIndex::NONE, o);
    let stmt = b.variable_statement(start, node_flags::CONST, vec![decl]);
    let (arena, root) = b.finish(vec![stmt]);

    let program = convert(&arena, root);
    let id = &first_statement(&program)["declarations"][0]["id"];
    assert_eq!(id["type"], "ObjectPattern");
    let property = &id["properties"][0];
    assert_eq!(property["shorthand"], true);
    assert_eq!(property["key"]["name"], "a");
    assert_eq!(range(&property["key"]), [7, 8]);

    let value = &property["value"];
    assert_eq!(value["type"], "AssignmentPattern");
    assert_eq!(range(value), [7, 12]);
    assert_eq!(value["left"]["name"], "a");
    assert_eq!(value["right"]["value"], json!(1));
}
