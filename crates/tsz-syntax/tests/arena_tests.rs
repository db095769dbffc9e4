use tsz_common::ScriptTarget;
use tsz_scanner::SyntaxKind;
use tsz_syntax::*;

fn assignment() -> (NodeArena, NodeIndex, [NodeIndex; 4]) {
    let mut b = TreeBuilder::new("a = b.c;");
    let a = b.ident("a");
    b.tok("=");
    let obj = b.ident("b");
    b.tok(".");
    let c = b.ident("c");
    let access = b.property_access(obj, c);
    let assign = b.binary(a, SyntaxKind::EqualsToken, access);
    let statement = b.expression_statement(assign);
    let (arena, root) = b.finish(vec![statement]);
    (arena, root, [a, access, assign, statement])
}

#[test]
fn builder_locates_spans() {
    let (arena, root, [a, access, assign, statement]) = assignment();
    let span = |i: NodeIndex| {
        let node = arena.get(i).unwrap();
        (node.pos, node.end)
    };
    assert_eq!(span(a), (0, 1));
    assert_eq!(span(access), (4, 7));
    assert_eq!(span(assign), (0, 7));
    assert_eq!(span(statement), (0, 8));
    assert_eq!(span(root), (0, 8));
}

#[test]
fn children_are_linked_to_parents() {
    let (arena, root, [a, access, assign, statement]) = assignment();
    assert_eq!(arena.parent(a), assign);
    assert_eq!(arena.parent(access), assign);
    assert_eq!(arena.parent(assign), statement);
    assert_eq!(arena.parent(statement), root);
    assert!(arena.parent(root).is_none());
    assert_eq!(arena.children(assign).as_slice(), &[a, access]);
}

#[test]
fn source_file_children_end_with_eof() {
    let (arena, root, [_, _, _, statement]) = assignment();
    let children = arena.children(root);
    assert_eq!(children[0], statement);
    assert_eq!(arena.kind(children[1]), Some(SyntaxKind::EndOfFileToken));
    let file = arena.source_file(root).unwrap();
    assert!(!file.external_module_indicator);
    assert_eq!(&*file.text, "a = b.c;");
    assert_eq!(file.language_version, ScriptTarget::ESNext);
}

#[test]
fn node_containing_finds_deepest() {
    let (arena, root, [a, access, _, _]) = assignment();
    assert_eq!(arena.node_containing(root, 0, 1), Some(a));
    let inner = arena.node_containing(root, 6, 7).unwrap();
    assert_eq!(arena.parent(inner), access);
    assert_eq!(arena.identifier_text(inner), Some("c"));
    assert_eq!(arena.node_containing(root, 7, 8).map(|i| arena.kind(i)), Some(Some(SyntaxKind::ExpressionStatement)));
}

#[test]
fn find_ancestor_walks_up() {
    let (arena, _, [a, _, _, statement]) = assignment();
    let found = arena.find_ancestor(a, |_, node| node.kind == SyntaxKind::ExpressionStatement);
    assert_eq!(found, Some(statement));
    assert_eq!(arena.find_ancestor(a, |_, node| node.kind == SyntaxKind::Block), None);
}

#[test]
fn json_round_trip_rebuilds_parents() {
    let (arena, _, [a, _, assign, _]) = assignment();
    let json = serde_json::to_string(&arena).unwrap();
    let mut loaded: NodeArena = serde_json::from_str(&json).unwrap();
    assert!(loaded.parent(a).is_none());
    loaded.rebuild_parents();
    assert_eq!(loaded.parent(a), assign);
    assert_eq!(loaded.len(), arena.len());
}

#[test]
fn typed_getters_check_the_pool() {
    let (arena, _, [a, _, assign, _]) = assignment();
    let node = arena.get(a).unwrap();
    assert!(arena.get_identifier(node).is_some());
    assert!(arena.get_binary_expr(node).is_none());
    let assign_node = arena.get(assign).unwrap();
    assert_eq!(
        arena.get_binary_expr(assign_node).map(|d| d.operator_token),
        Some(SyntaxKind::EqualsToken)
    );
}

#[test]
fn modifiers_and_module_indicator() {
    let mut b = TreeBuilder::new("export declare const x = 1;");
    let export = b.token(SyntaxKind::ExportKeyword);
    let declare = b.token(SyntaxKind::DeclareKeyword);
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
    let modifiers = b.list(vec![export, declare]);
    let statement = b.node(
        SyntaxKind::VariableStatement,
        0,
        VariableStatementData {
            modifiers: Some(modifiers),
            declaration_list: list,
        },
    );
    let (arena, root) = b.finish(vec![statement]);

    let flags = arena.modifier_flags(arena.modifiers_of(statement));
    assert!(flags.contains(ModifierFlags::EXPORT | ModifierFlags::AMBIENT));
    assert!(!flags.intersects(ModifierFlags::ACCESSIBILITY));
    assert!(arena.get(list).unwrap().has_flag(node_flags::CONST));
    assert!(arena.source_file(root).unwrap().external_module_indicator);
    assert_eq!(arena.parent(export), statement);
}

#[test]
fn do_statement_children_start_with_body() {
    let mut b = TreeBuilder::new("do {} while (x);");
    let start = b.tok("do");
    let open = b.tok("{");
    let body = b.block(open, vec![]);
    b.tok("while");
    let x = b.ident("x");
    b.tok(")");
    b.semicolon();
    let statement = b.node(
        SyntaxKind::DoStatement,
        start,
        LoopData {
            statement: body,
            condition: x,
            ..LoopData::default()
        },
    );
    let (arena, _) = b.finish(vec![statement]);
    assert_eq!(arena.children(statement).as_slice(), &[body, x]);
}

#[test]
fn string_literals_are_cooked() {
    let mut b = TreeBuilder::new(r#"'a\'b\n'"#);
    let lit = b.string(r#"'a\'b\n'"#);
    let (arena, _) = b.finish(vec![]);
    let node = arena.get(lit).unwrap();
    assert_eq!(arena.get_literal(node).unwrap().text, "a'b\n");
}
