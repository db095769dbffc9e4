//! Concrete tree to ESTree conversion.
//!
//! One [`Converter`] is built per run and owns everything the run needs:
//! options, the correspondence maps, the location resolver and the lazily
//! built token index. Handlers are split by syntactic family into the
//! submodules below, all as `impl Converter` blocks.

mod classes;
mod expressions;
mod fallback;
mod functions;
mod jsx;
mod modules;
mod patterns;
mod statements;
mod typescript;

pub use fallback::{FALLBACK_TABLE, FallbackEntry, FieldRole, FieldSpec, FieldValue, fallback_entry, fallback_type_name};
pub use patterns::LiteralRole;

use crate::ast_node_type::AstNodeType;
use crate::error::ConvertError;
use crate::es_node::{EsNode, EsType, Value};
use crate::location::{EsNodeBuilder, LocationResolver};
use crate::maps::NodeMaps;
use crate::options::ConvertOptions;
use crate::token_walker::{TokenIndex, TriviaScan, walk_source};
use once_cell::unsync::OnceCell;
use tsz_common::ScriptTarget;
use tsz_scanner::SyntaxKind;
use tsz_syntax::{ModifierFlags, Node, NodeArena, NodeIndex, NodeList, PoolData};

pub(crate) type Result<T> = std::result::Result<T, ConvertError>;

pub struct Converter<'a> {
    arena: &'a NodeArena,
    root: NodeIndex,
    options: ConvertOptions,
    maps: &'a mut NodeMaps,
    resolver: LocationResolver<'a>,
    target: ScriptTarget,
    trivia: OnceCell<TriviaScan>,
    token_index: OnceCell<TokenIndex>,
}

impl<'a> Converter<'a> {
    pub fn new(
        arena: &'a NodeArena,
        root: NodeIndex,
        text: &'a str,
        target: ScriptTarget,
        options: ConvertOptions,
        maps: &'a mut NodeMaps,
    ) -> Self {
        Converter {
            arena,
            root,
            options,
            maps,
            resolver: LocationResolver::new(text),
            target,
            trivia: OnceCell::new(),
            token_index: OnceCell::new(),
        }
    }

    pub fn resolver(&self) -> &LocationResolver<'a> {
        &self.resolver
    }

    /// Tokens and comments of the whole file, scanned on first use.
    pub fn trivia(&self) -> &TriviaScan {
        self.trivia
            .get_or_init(|| walk_source(self.arena, self.root, self.resolver.text(), self.target))
    }

    fn tokens(&self) -> &TokenIndex {
        self.token_index.get_or_init(|| TokenIndex::new(&self.trivia().tokens))
    }

    /// Convert `index` and record the pair in the maps.
    ///
    /// `Ok(None)` means the node is intentionally elided.
    pub fn convert(&mut self, index: NodeIndex) -> Result<Option<EsNode>> {
        let Some(node) = self.arena.get(index) else {
            return Ok(None);
        };
        let converted = self.convert_node(index, node)?;
        if let Some(es) = &converted {
            self.register(index, es);
        }
        Ok(converted)
    }

    fn register(&mut self, index: NodeIndex, es: &EsNode) {
        if self.options.provide_correspondence_maps {
            self.maps.register(index, es.id);
        }
    }

    fn convert_node(&mut self, index: NodeIndex, node: &'a Node) -> Result<Option<EsNode>> {
        use SyntaxKind as K;
        let converted = match node.kind {
            K::SourceFile => self.convert_program(index, node)?,

            // Names and literals
            K::Identifier => self.convert_identifier(index, node)?,
            K::PrivateIdentifier => self.convert_private_identifier(index, node)?,
            K::StringLiteral => self.convert_string_literal(index, node)?,
            K::NumericLiteral => self.convert_numeric_literal(index, node)?,
            K::BigIntLiteral => self.convert_bigint_literal(index, node)?,
            K::RegularExpressionLiteral => self.convert_regex_literal(index, node)?,
            K::NoSubstitutionTemplateLiteral => self.convert_no_substitution_template(index, node)?,
            K::TemplateHead | K::TemplateMiddle | K::TemplateTail => self.convert_template_element(index, node)?,
            K::TemplateExpression => self.convert_template_expression(index, node)?,
            K::TaggedTemplateExpression => self.convert_tagged_template(index, node)?,
            K::TrueKeyword | K::FalseKeyword => self.convert_boolean_literal(node),
            K::NullKeyword => self.convert_null(index, node),
            K::ThisKeyword => self.bare(AstNodeType::ThisExpression, node),
            K::SuperKeyword => self.bare(AstNodeType::Super, node),
            K::ImportKeyword => self.bare(AstNodeType::Import, node),
            K::ComputedPropertyName => self.convert_computed_property_name(index, node)?,

            // Expressions
            K::BinaryExpression => self.convert_binary(index, node)?,
            K::PrefixUnaryExpression | K::PostfixUnaryExpression => self.convert_unary(index, node)?,
            K::DeleteExpression | K::TypeOfExpression | K::VoidExpression => {
                self.convert_keyword_unary(index, node)?
            }
            K::AwaitExpression => self.convert_await(index, node)?,
            K::YieldExpression => self.convert_yield(index, node)?,
            K::ConditionalExpression => self.convert_conditional(index, node)?,
            K::CallExpression => self.convert_call(index, node)?,
            K::NewExpression => self.convert_new(index, node)?,
            K::PropertyAccessExpression | K::ElementAccessExpression => self.convert_member(index, node)?,
            K::ParenthesizedExpression => self.convert_parenthesized(index, node)?,
            K::MetaProperty => self.convert_meta_property(index, node)?,
            K::OmittedExpression => None,

            // Literals that may be destructuring targets
            K::ArrayLiteralExpression => self.convert_array_literal(index, node)?,
            K::ObjectLiteralExpression => self.convert_object_literal(index, node)?,
            K::PropertyAssignment => self.convert_property_assignment(index, node)?,
            K::ShorthandPropertyAssignment => self.convert_shorthand_property(index, node)?,
            K::SpreadElement | K::SpreadAssignment => self.convert_spread(index, node)?,
            K::ObjectBindingPattern | K::ArrayBindingPattern => self.convert_binding_pattern(index, node)?,
            K::BindingElement => self.convert_binding_element(index, node)?,

            // Functions
            K::FunctionDeclaration => self.convert_function_declaration(index, node)?,
            K::FunctionExpression => self.convert_function_expression(index, node)?,
            K::ArrowFunction => self.convert_arrow_function(index, node)?,
            K::Parameter => self.convert_parameter(index, node)?,

            // Classes
            K::ClassDeclaration | K::ClassExpression => self.convert_class(index, node)?,
            K::PropertyDeclaration => self.convert_property_declaration(index, node)?,
            K::MethodDeclaration | K::GetAccessor | K::SetAccessor => self.convert_method(index, node)?,
            K::Constructor => self.convert_constructor(index, node)?,
            K::Decorator => self.convert_decorator(index, node)?,
            K::SemicolonClassElement | K::HeritageClause => None,

            // Statements
            K::Block => self.convert_block(index, node)?,
            K::VariableStatement => self.convert_variable_statement(index, node)?,
            K::VariableDeclarationList => self.convert_variable_declaration_list(index, node)?,
            K::VariableDeclaration => self.convert_variable_declarator(index, node)?,
            K::ExpressionStatement => self.convert_expression_statement(index, node)?,
            K::IfStatement => self.convert_if(index, node)?,
            K::DoStatement | K::WhileStatement | K::ForStatement => self.convert_loop(index, node)?,
            K::ForInStatement | K::ForOfStatement => self.convert_for_in_of(index, node)?,
            K::ContinueStatement | K::BreakStatement => self.convert_jump(index, node)?,
            K::ReturnStatement | K::ThrowStatement => self.convert_return_or_throw(index, node)?,
            K::WithStatement => self.convert_with(index, node)?,
            K::SwitchStatement => self.convert_switch(index, node)?,
            K::CaseClause | K::DefaultClause => self.convert_case_clause(index, node)?,
            K::LabeledStatement => self.convert_labeled(index, node)?,
            K::TryStatement => self.convert_try(index, node)?,
            K::CatchClause => self.convert_catch_clause(index, node)?,
            K::DebuggerStatement => self.bare(AstNodeType::DebuggerStatement, node),
            K::EmptyStatement => self.bare(AstNodeType::EmptyStatement, node),
            K::CaseBlock | K::EndOfFileToken => None,

            // Modules
            K::ImportDeclaration => self.convert_import_declaration(index, node)?,
            K::ImportSpecifier => self.convert_import_specifier(index, node)?,
            K::NamespaceImport => self.convert_namespace_import(index, node)?,
            K::ExportDeclaration => self.convert_export_declaration(index, node)?,
            K::ExportSpecifier => self.convert_export_specifier(index, node)?,
            K::ExportAssignment => self.convert_export_assignment(index, node)?,
            K::ImportClause | K::NamedImports | K::NamedExports | K::NamespaceExport => None,

            // TypeScript declarations
            K::TypeParameter => self.convert_type_parameter(index, node)?,
            K::TypeAliasDeclaration => self.convert_type_alias(index, node)?,
            K::InterfaceDeclaration => self.convert_interface(index, node)?,
            K::MethodSignature => self.convert_method_signature(index, node)?,
            K::PropertySignature => self.convert_property_signature(index, node)?,
            K::IndexSignature => self.convert_index_signature(index, node)?,
            K::ConstructSignature => self.convert_construct_signature(index, node)?,
            K::TypePredicate => self.convert_type_predicate(index, node)?,
            K::ImportType => self.convert_import_type(index, node)?,
            K::TypeOperator => self.convert_type_operator(index, node)?,
            K::QualifiedName => self.convert_qualified_name(index, node)?,
            K::EnumDeclaration => self.convert_enum(index, node)?,
            K::EnumMember => self.convert_enum_member(index, node)?,
            K::ModuleDeclaration => self.convert_module(index, node)?,
            K::ModuleBlock => self.convert_module_block(index, node)?,
            K::AbstractKeyword => self.bare(AstNodeType::TSAbstractKeyword, node),

            // JSX
            K::JsxElement => self.convert_jsx_element(index, node)?,
            K::JsxSelfClosingElement => self.convert_jsx_self_closing_element(index, node)?,
            K::JsxOpeningElement => Some(self.convert_jsx_opening_element(index, node, false)?),
            K::JsxClosingElement => self.convert_jsx_closing_element(index, node)?,
            K::JsxFragment => self.convert_jsx_fragment(index, node)?,
            K::JsxOpeningFragment => self.bare(AstNodeType::JSXOpeningFragment, node),
            K::JsxClosingFragment => self.bare(AstNodeType::JSXClosingFragment, node),
            K::JsxAttribute => self.convert_jsx_attribute(index, node)?,
            K::JsxSpreadAttribute => self.convert_jsx_spread_attribute(index, node)?,
            K::JsxExpression => self.convert_jsx_expression(index, node)?,
            K::JsxText | K::JsxTextAllWhiteSpaces => self.convert_jsx_text(node),
            K::JsxAttributes => None,

            _ => Some(self.convert_fallback(index, node)?),
        };
        Ok(converted)
    }

    // =========================================================================
    // Shared helpers
    // =========================================================================

    fn get(&self, index: NodeIndex) -> Option<&'a Node> {
        self.arena.get(index)
    }

    /// Typed data of `node`, or a `MissingData` error.
    fn data<T: PoolData>(&self, index: NodeIndex, node: &Node) -> Result<&'a T> {
        let arena: &'a NodeArena = self.arena;
        arena.node_data::<T>(node).ok_or(ConvertError::MissingData {
            kind: node.kind,
            index: index.0,
        })
    }

    fn kind_of(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.arena.kind(index)
    }

    fn builder(&self, ty: impl Into<EsType>, node: &Node) -> EsNodeBuilder {
        self.resolver.builder(ty, node.pos, node.end)
    }

    fn builder_span(&self, ty: impl Into<EsType>, start: u32, end: u32) -> EsNodeBuilder {
        self.resolver.builder(ty, start, end)
    }

    fn finish(&self, builder: EsNodeBuilder) -> EsNode {
        builder.finish(&self.resolver)
    }

    /// A node with no fields besides its position.
    fn bare(&self, ty: AstNodeType, node: &Node) -> Option<EsNode> {
        Some(self.finish(self.builder(ty, node)))
    }

    fn text(&self, start: u32, end: u32) -> &'a str {
        self.resolver.slice(start, end)
    }

    fn node_text(&self, node: &Node) -> &'a str {
        self.text(node.pos, node.end)
    }

    /// Converted child, `null` when absent or elided.
    fn child(&mut self, index: NodeIndex) -> Result<Value> {
        Ok(self.convert(index)?.into())
    }

    /// Converted child, or `None` so the field can be omitted.
    fn child_opt(&mut self, index: NodeIndex) -> Result<Option<EsNode>> {
        if index.is_none() {
            return Ok(None);
        }
        self.convert(index)
    }

    /// Converted list; elided entries become `null` holes.
    fn list(&mut self, list: &NodeList) -> Result<Value> {
        let mut items = Vec::with_capacity(list.len());
        for index in list.iter() {
            items.push(self.child(index)?);
        }
        Ok(Value::Array(items))
    }

    fn list_opt(&mut self, list: Option<&NodeList>) -> Result<Value> {
        match list {
            Some(list) => self.list(list),
            None => Ok(Value::Array(Vec::new())),
        }
    }

    /// Converted statement list; elided statements are dropped.
    fn statements(&mut self, list: &NodeList) -> Result<Value> {
        let mut items = Vec::with_capacity(list.len());
        for index in list.iter() {
            if let Some(es) = self.convert(index)? {
                items.push(Value::from(es));
            }
        }
        Ok(Value::Array(items))
    }

    /// Start of the first token at or after `pos`.
    fn token_start_at_or_after(&self, pos: u32) -> u32 {
        self.tokens().at_or_after(pos).map_or(pos, |token| token.start)
    }

    /// Flags of whichever modifier list the declaration at `index` carries.
    fn modifier_flags(&self, index: NodeIndex) -> ModifierFlags {
        self.arena.modifier_flags(self.arena.modifiers_of(index))
    }

    fn has_modifier(&self, modifiers: Option<&NodeList>, kind: SyntaxKind) -> bool {
        self.arena.has_modifier(modifiers, kind)
    }

    fn structure_error(&self, pos: u32, message: impl Into<String>) -> ConvertError {
        let at = self.resolver.line_and_column(pos);
        ConvertError::Structure {
            index: pos,
            line_number: at.line,
            column: at.column,
            message: message.into(),
        }
    }

    /// Wrap an exported declaration.
    ///
    /// With `export` as first modifier the declaration is moved behind an
    /// `ExportNamedDeclaration` (or `ExportDefaultDeclaration` with
    /// `default`); the wrapped declaration then starts at the token after
    /// `export`/`default`.
    fn fix_exports(&self, modifiers: Option<&NodeList>, result: EsNode) -> EsNode {
        let Some(list) = modifiers else {
            return result;
        };
        let Some(export) = list.first().and_then(|first| self.get(first)) else {
            return result;
        };
        if export.kind != SyntaxKind::ExportKeyword {
            return result;
        }
        let default = list
            .nodes
            .get(1)
            .and_then(|&second| self.get(second))
            .filter(|second| second.kind == SyntaxKind::DefaultKeyword);
        let anchor = default.map_or(export.end, |node| node.end);
        let start = self.token_start_at_or_after(anchor);
        let declaration = self.finish(result.into_builder().start_at(start));
        let end = declaration.end();
        let wrapper = if default.is_some() {
            self.builder_span(AstNodeType::ExportDefaultDeclaration, export.pos, end)
                .prop("declaration", declaration)
        } else {
            self.builder_span(AstNodeType::ExportNamedDeclaration, export.pos, end)
                .prop("declaration", declaration)
                .prop("specifiers", Value::Array(Vec::new()))
                .prop("source", Value::Null)
        };
        self.finish(wrapper)
    }
}
