//! Thin node headers and typed data pools.
//!
//! Each node is a small header (`kind`, `flags`, `pos`, `end`) plus a
//! `(pool, data_index)` pair pointing into one of the typed pools below.
//! Structurally similar kinds share a pool: `AsExpression`,
//! `SatisfiesExpression` and `TypeAssertionExpression` all store a
//! [`TypeAssertionData`], `ForStatement`/`WhileStatement`/`DoStatement` a
//! [`LoopData`], and so on. Token kinds (keywords used as modifiers, `this`,
//! `EndOfFileToken`, ...) carry no data at all.

use crate::base::{NodeIndex, NodeList};
use crate::children::NodeChildren;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tsz_common::{Diagnostic, ScriptTarget};
use tsz_scanner::SyntaxKind;

/// A node header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub kind: SyntaxKind,
    #[serde(default)]
    pub flags: u16,
    /// Token start (leading trivia excluded).
    pub pos: u32,
    pub end: u32,
    #[serde(default)]
    pub pool: DataPool,
    #[serde(default)]
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    pub fn token(kind: SyntaxKind, pos: u32, end: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            pool: DataPool::None,
            data_index: Self::NO_DATA,
        }
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.pool != DataPool::None
    }

    #[inline]
    pub fn has_flag(&self, flag: u16) -> bool {
        self.flags & flag != 0
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.end.saturating_sub(self.pos)
    }
}

/// Side table entry, one per node. Not serialized; rebuilt on load.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExtendedNodeInfo {
    pub parent: NodeIndex,
}

/// Typed access to a pool.
pub trait PoolData: NodeChildren + Sized {
    const POOL: DataPool;
    fn pool(arena: &NodeArena) -> &[Self];
    fn pool_mut(arena: &mut NodeArena) -> &mut Vec<Self>;
}

macro_rules! define_pools {
    ($($variant:ident => $field:ident: $ty:ident, $getter:ident, $adder:ident;)*) => {
        /// Which typed pool a node's data lives in.
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum DataPool {
            #[default]
            None,
            $($variant),*
        }

        /// Arena owning every node of one source file.
        #[derive(Clone, Debug, Default, Serialize, Deserialize)]
        pub struct NodeArena {
            pub nodes: Vec<Node>,
            #[serde(skip)]
            pub extended_info: Vec<ExtendedNodeInfo>,
            $(
                #[serde(default, skip_serializing_if = "Vec::is_empty")]
                pub $field: Vec<$ty>,
            )*
        }

        $(
            impl PoolData for $ty {
                const POOL: DataPool = DataPool::$variant;

                #[inline]
                fn pool(arena: &NodeArena) -> &[Self] {
                    &arena.$field
                }

                #[inline]
                fn pool_mut(arena: &mut NodeArena) -> &mut Vec<Self> {
                    &mut arena.$field
                }
            }
        )*

        impl NodeArena {
            $(
                #[inline]
                pub fn $getter(&self, node: &Node) -> Option<&$ty> {
                    self.node_data::<$ty>(node)
                }

                pub fn $adder(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: $ty) -> NodeIndex {
                    self.add_node(kind, pos, end, data)
                }
            )*

            /// Visit the children of `node` in source order.
            pub fn visit_children(&self, node: &Node, f: &mut dyn FnMut(NodeIndex)) {
                let index = node.data_index as usize;
                match node.pool {
                    DataPool::None => {}
                    $(
                        DataPool::$variant => {
                            if let Some(data) = self.$field.get(index) {
                                data.for_each_child(node.kind, f);
                            }
                        }
                    )*
                }
            }

            pub(crate) fn clear_pools(&mut self) {
                $(self.$field.clear();)*
            }
        }
    };
}

define_pools! {
    Identifier => identifiers: IdentifierData, get_identifier, add_identifier;
    Literal => literals: LiteralData, get_literal, add_literal;
    QualifiedName => qualified_names: QualifiedNameData, get_qualified_name, add_qualified_name;
    ComputedProperty => computed_properties: ComputedPropertyData, get_computed_property, add_computed_property;
    Binary => binary_exprs: BinaryExprData, get_binary_expr, add_binary_expr;
    Unary => unary_exprs: UnaryExprData, get_unary_expr, add_unary_expr;
    UnaryEx => unary_exprs_ex: UnaryExprDataEx, get_unary_expr_ex, add_unary_expr_ex;
    Call => call_exprs: CallExprData, get_call_expr, add_call_expr;
    Access => access_exprs: AccessExprData, get_access_expr, add_access_expr;
    Conditional => conditional_exprs: ConditionalExprData, get_conditional_expr, add_conditional_expr;
    LiteralExpr => literal_exprs: LiteralExprData, get_literal_expr, add_literal_expr;
    Parenthesized => parenthesized: ParenthesizedData, get_parenthesized, add_parenthesized;
    TypeAssertion => type_assertions: TypeAssertionData, get_type_assertion, add_type_assertion;
    TemplateExpr => template_exprs: TemplateExprData, get_template_expr, add_template_expr;
    TemplateSpan => template_spans: TemplateSpanData, get_template_span, add_template_span;
    TaggedTemplate => tagged_templates: TaggedTemplateData, get_tagged_template, add_tagged_template;
    MetaProperty => meta_properties: MetaPropertyData, get_meta_property, add_meta_property;
    Function => functions: FunctionData, get_function, add_function;
    Class => classes: ClassData, get_class, add_class;
    HeritageClause => heritage_clauses: HeritageData, get_heritage_clause, add_heritage_clause;
    ExprWithTypeArgs => expr_with_type_args: ExprWithTypeArgsData, get_expr_with_type_args, add_expr_with_type_args;
    PropertyDecl => property_decls: PropertyDeclData, get_property_decl, add_property_decl;
    Parameter => parameters: ParameterData, get_parameter, add_parameter;
    TypeParameter => type_parameters: TypeParameterData, get_type_parameter, add_type_parameter;
    Decorator => decorators: DecoratorData, get_decorator, add_decorator;
    Block => blocks: BlockData, get_block, add_block;
    VariableStatement => variable_statements: VariableStatementData, get_variable_statement, add_variable_statement;
    VariableList => variable_lists: VariableListData, get_variable_list, add_variable_list;
    VariableDeclaration => variable_declarations: VariableDeclarationData, get_variable_declaration, add_variable_declaration;
    If => if_statements: IfStatementData, get_if_statement, add_if_statement;
    Loop => loops: LoopData, get_loop, add_loop;
    ForInOf => for_in_of: ForInOfData, get_for_in_of, add_for_in_of;
    Return => return_data: ReturnData, get_return_statement, add_return_statement;
    ExprStatement => expr_statements: ExprStatementData, get_expression_statement, add_expression_statement;
    Jump => jump_data: JumpData, get_jump_data, add_jump;
    Labeled => labeled_data: LabeledData, get_labeled_statement, add_labeled_statement;
    With => with_data: WithData, get_with_statement, add_with_statement;
    Switch => switch_data: SwitchData, get_switch, add_switch;
    CaseClause => case_clauses: CaseClauseData, get_case_clause, add_case_clause;
    Try => try_data: TryData, get_try, add_try;
    CatchClause => catch_clauses: CatchClauseData, get_catch_clause, add_catch_clause;
    TypeRef => type_refs: TypeRefData, get_type_ref, add_type_ref;
    CompositeType => composite_types: CompositeTypeData, get_composite_type, add_composite_type;
    ArrayType => array_types: ArrayTypeData, get_array_type, add_array_type;
    WrappedType => wrapped_types: WrappedTypeData, get_wrapped_type, add_wrapped_type;
    TypeOperator => type_operators: TypeOperatorData, get_type_operator, add_type_operator;
    IndexedAccessType => indexed_access_types: IndexedAccessTypeData, get_indexed_access_type, add_indexed_access_type;
    ConditionalType => conditional_types: ConditionalTypeData, get_conditional_type, add_conditional_type;
    InferType => infer_types: InferTypeData, get_infer_type, add_infer_type;
    MappedType => mapped_types: MappedTypeData, get_mapped_type, add_mapped_type;
    LiteralType => literal_types: LiteralTypeData, get_literal_type, add_literal_type;
    TypeQuery => type_queries: TypeQueryData, get_type_query, add_type_query;
    TypeLiteral => type_literals: TypeLiteralData, get_type_literal, add_type_literal;
    TypePredicate => type_predicates: TypePredicateData, get_type_predicate, add_type_predicate;
    ImportType => import_types: ImportTypeData, get_import_type, add_import_type;
    NamedTupleMember => named_tuple_members: NamedTupleMemberData, get_named_tuple_member, add_named_tuple_member;
    SignatureType => signature_types: SignatureData, get_signature, add_signature;
    IndexSignature => index_signatures: IndexSignatureData, get_index_signature, add_index_signature;
    PropertySignature => property_signatures: PropertySignatureData, get_property_signature, add_property_signature;
    ImportDecl => import_decls: ImportDeclData, get_import_decl, add_import_decl;
    ImportClause => import_clauses: ImportClauseData, get_import_clause, add_import_clause;
    NamedImports => named_imports: NamedImportsData, get_named_imports, add_named_imports;
    Specifier => specifiers: SpecifierData, get_specifier, add_specifier;
    ExportDecl => export_decls: ExportDeclData, get_export_decl, add_export_decl;
    ExportAssignment => export_assignments: ExportAssignmentData, get_export_assignment, add_export_assignment;
    ImportEquals => import_equals: ImportEqualsData, get_import_equals, add_import_equals;
    ExternalModuleRef => external_module_refs: ExternalModuleRefData, get_external_module_ref, add_external_module_ref;
    NamespaceExportDecl => namespace_export_decls: NamespaceExportDeclData, get_namespace_export_decl, add_namespace_export_decl;
    Enum => enums: EnumData, get_enum, add_enum;
    EnumMember => enum_members: EnumMemberData, get_enum_member, add_enum_member;
    Module => modules: ModuleData, get_module, add_module;
    TypeAlias => type_aliases: TypeAliasData, get_type_alias, add_type_alias;
    BindingPattern => binding_patterns: BindingPatternData, get_binding_pattern, add_binding_pattern;
    BindingElement => binding_elements: BindingElementData, get_binding_element, add_binding_element;
    PropertyAssignment => property_assignments: PropertyAssignmentData, get_property_assignment, add_property_assignment;
    ShorthandProperty => shorthand_properties: ShorthandPropertyData, get_shorthand_property, add_shorthand_property;
    JsxElement => jsx_elements: JsxElementData, get_jsx_element, add_jsx_element;
    JsxOpening => jsx_openings: JsxOpeningData, get_jsx_opening, add_jsx_opening;
    JsxClosing => jsx_closings: JsxClosingData, get_jsx_closing, add_jsx_closing;
    JsxAttributes => jsx_attribute_lists: JsxAttributesData, get_jsx_attributes, add_jsx_attributes;
    JsxAttribute => jsx_attributes: JsxAttributeData, get_jsx_attribute, add_jsx_attribute;
    JsxSpreadAttribute => jsx_spread_attributes: JsxSpreadAttributeData, get_jsx_spread_attribute, add_jsx_spread_attribute;
    JsxExpression => jsx_expressions: JsxExpressionData, get_jsx_expression, add_jsx_expression;
    SourceFile => source_files: SourceFileData, get_source_file, add_source_file;
}

// =============================================================================
// Names and literals
// =============================================================================

/// Identifier and PrivateIdentifier (`escaped_text` keeps the `#`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// String, numeric, bigint, regex, template pieces and JSX text.
///
/// `text` is the compiler's cooked value. For numeric and bigint literals
/// it is the source spelling; for regular expressions the whole
/// `/pattern/flags` text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiteralData {
    pub text: String,
    pub is_unterminated: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualifiedNameData {
    pub left: NodeIndex,
    pub right: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputedPropertyData {
    pub expression: NodeIndex,
}

// =============================================================================
// Expressions
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator_token: SyntaxKind,
    pub right: NodeIndex,
}

/// Prefix and postfix unary expressions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnaryExprData {
    pub operator: SyntaxKind,
    pub operand: NodeIndex,
}

/// Single-operand keyword/punctuation forms: spread, await, yield, delete,
/// typeof, void, non-null, spread assignment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnaryExprDataEx {
    pub expression: NodeIndex,
    /// `yield*`
    pub asterisk_token: bool,
}

/// CallExpression and NewExpression.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub question_dot_token: bool,
    pub type_arguments: Option<NodeList>,
    /// `None` for `new Foo` without parentheses.
    pub arguments: Option<NodeList>,
}

/// PropertyAccessExpression and ElementAccessExpression.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub question_dot_token: bool,
    pub name_or_argument: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionalExprData {
    pub condition: NodeIndex,
    pub when_true: NodeIndex,
    pub when_false: NodeIndex,
}

/// ArrayLiteralExpression and ObjectLiteralExpression.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiteralExprData {
    pub elements: NodeList,
    pub multi_line: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParenthesizedData {
    pub expression: NodeIndex,
}

/// AsExpression, SatisfiesExpression and `<T>x` TypeAssertionExpression.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeAssertionData {
    pub expression: NodeIndex,
    pub type_node: NodeIndex,
}

/// TemplateExpression and TemplateLiteralType.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateExprData {
    pub head: NodeIndex,
    pub template_spans: NodeList,
}

/// TemplateSpan and TemplateLiteralTypeSpan (`expression` is a type there).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSpanData {
    pub expression: NodeIndex,
    pub literal: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggedTemplateData {
    pub tag: NodeIndex,
    pub type_arguments: Option<NodeList>,
    pub template: NodeIndex,
}

/// `new.target`, `import.meta`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaPropertyData {
    pub keyword_token: SyntaxKind,
    pub name: NodeIndex,
}

// =============================================================================
// Functions and classes
// =============================================================================

/// Function declarations/expressions, arrows, methods, accessors,
/// constructors and method signatures.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionData {
    pub decorators: Option<NodeList>,
    pub modifiers: Option<NodeList>,
    pub asterisk_token: bool,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
    pub body: NodeIndex,
}

/// ClassDeclaration, ClassExpression and InterfaceDeclaration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassData {
    pub decorators: Option<NodeList>,
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub heritage_clauses: Option<NodeList>,
    pub members: NodeList,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeritageData {
    /// `ExtendsKeyword` or `ImplementsKeyword`.
    pub token: SyntaxKind,
    pub types: NodeList,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExprWithTypeArgsData {
    pub expression: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

/// Class property declarations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyDeclData {
    pub decorators: Option<NodeList>,
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub question_token: bool,
    pub exclamation_token: bool,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterData {
    pub decorators: Option<NodeList>,
    pub modifiers: Option<NodeList>,
    pub dot_dot_dot_token: bool,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeParameterData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub constraint: NodeIndex,
    pub default: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoratorData {
    pub expression: NodeIndex,
}

// =============================================================================
// Statements
// =============================================================================

/// Block, ModuleBlock and CaseBlock.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockData {
    pub statements: NodeList,
    pub multi_line: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariableStatementData {
    pub modifiers: Option<NodeList>,
    pub declaration_list: NodeIndex,
}

/// `let`/`const` live in the node flags.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariableListData {
    pub declarations: NodeList,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariableDeclarationData {
    pub name: NodeIndex,
    pub exclamation_token: bool,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IfStatementData {
    pub expression: NodeIndex,
    pub then_statement: NodeIndex,
    pub else_statement: NodeIndex,
}

/// ForStatement, WhileStatement and DoStatement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopData {
    pub initializer: NodeIndex,
    pub condition: NodeIndex,
    pub incrementor: NodeIndex,
    pub statement: NodeIndex,
}

/// ForInStatement and ForOfStatement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForInOfData {
    pub await_modifier: bool,
    pub initializer: NodeIndex,
    pub expression: NodeIndex,
    pub statement: NodeIndex,
}

/// ReturnStatement and ThrowStatement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReturnData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExprStatementData {
    pub expression: NodeIndex,
}

/// BreakStatement and ContinueStatement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpData {
    pub label: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabeledData {
    pub label: NodeIndex,
    pub statement: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WithData {
    pub expression: NodeIndex,
    pub statement: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchData {
    pub expression: NodeIndex,
    pub case_block: NodeIndex,
}

/// CaseClause and DefaultClause (`expression` is NONE for `default`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseClauseData {
    pub expression: NodeIndex,
    pub statements: NodeList,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TryData {
    pub try_block: NodeIndex,
    pub catch_clause: NodeIndex,
    pub finally_block: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatchClauseData {
    pub variable_declaration: NodeIndex,
    pub block: NodeIndex,
}

// =============================================================================
// Types
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeRefData {
    pub type_name: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

/// UnionType, IntersectionType and TupleType.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeTypeData {
    pub types: NodeList,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayTypeData {
    pub element_type: NodeIndex,
}

/// OptionalType, RestType and ParenthesizedType.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrappedTypeData {
    pub type_node: NodeIndex,
}

/// `keyof T`, `unique symbol`, `readonly T[]`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeOperatorData {
    pub operator: SyntaxKind,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexedAccessTypeData {
    pub object_type: NodeIndex,
    pub index_type: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionalTypeData {
    pub check_type: NodeIndex,
    pub extends_type: NodeIndex,
    pub true_type: NodeIndex,
    pub false_type: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferTypeData {
    pub type_parameter: NodeIndex,
}

/// `{ readonly [K in T as N]?: V }`. The modifier tokens are nodes so that
/// `+`/`-` prefixes survive.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappedTypeData {
    pub readonly_token: NodeIndex,
    pub type_parameter: NodeIndex,
    pub name_type: NodeIndex,
    pub question_token: NodeIndex,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiteralTypeData {
    pub literal: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeQueryData {
    pub expr_name: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

/// TypeLiteral members.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeLiteralData {
    pub members: NodeList,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypePredicateData {
    pub asserts_modifier: bool,
    pub parameter_name: NodeIndex,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportTypeData {
    pub is_type_of: bool,
    pub argument: NodeIndex,
    pub qualifier: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedTupleMemberData {
    pub dot_dot_dot_token: bool,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_node: NodeIndex,
}

/// FunctionType, ConstructorType, CallSignature and ConstructSignature.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureData {
    pub modifiers: Option<NodeList>,
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexSignatureData {
    pub modifiers: Option<NodeList>,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertySignatureData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

// =============================================================================
// Modules
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportDeclData {
    pub modifiers: Option<NodeList>,
    pub import_clause: NodeIndex,
    pub module_specifier: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportClauseData {
    pub is_type_only: bool,
    pub name: NodeIndex,
    /// NamespaceImport or NamedImports.
    pub named_bindings: NodeIndex,
}

/// NamedImports and NamedExports.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedImportsData {
    pub elements: NodeList,
}

/// ImportSpecifier, ExportSpecifier, NamespaceImport and NamespaceExport.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecifierData {
    pub is_type_only: bool,
    pub property_name: NodeIndex,
    pub name: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportDeclData {
    pub modifiers: Option<NodeList>,
    pub is_type_only: bool,
    /// NamedExports, NamespaceExport, or NONE for `export *`.
    pub export_clause: NodeIndex,
    pub module_specifier: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportAssignmentData {
    pub modifiers: Option<NodeList>,
    pub is_export_equals: bool,
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportEqualsData {
    pub decorators: Option<NodeList>,
    pub modifiers: Option<NodeList>,
    pub is_type_only: bool,
    pub name: NodeIndex,
    pub module_reference: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalModuleRefData {
    pub expression: NodeIndex,
}

/// `export as namespace Foo;`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceExportDeclData {
    pub name: NodeIndex,
}

// =============================================================================
// Declarations
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub members: NodeList,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumMemberData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// `namespace A.B {}` nests: the outer body is another ModuleDeclaration
/// flagged `NESTED_NAMESPACE`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub body: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeAliasData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub type_node: NodeIndex,
}

// =============================================================================
// Patterns and object members
// =============================================================================

/// ObjectBindingPattern and ArrayBindingPattern.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingPatternData {
    pub elements: NodeList,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingElementData {
    pub dot_dot_dot_token: bool,
    pub property_name: NodeIndex,
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyAssignmentData {
    pub name: NodeIndex,
    pub question_token: bool,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShorthandPropertyData {
    pub name: NodeIndex,
    /// `{ a = 1 } = obj`
    pub object_assignment_initializer: NodeIndex,
}

// =============================================================================
// JSX
// =============================================================================

/// JsxElement and JsxFragment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsxElementData {
    pub opening_element: NodeIndex,
    pub children: NodeList,
    pub closing_element: NodeIndex,
}

/// JsxOpeningElement and JsxSelfClosingElement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsxOpeningData {
    pub tag_name: NodeIndex,
    pub type_arguments: Option<NodeList>,
    pub attributes: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsxClosingData {
    pub tag_name: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsxAttributesData {
    pub properties: NodeList,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsxAttributeData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsxSpreadAttributeData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsxExpressionData {
    pub dot_dot_dot_token: bool,
    pub expression: NodeIndex,
}

// =============================================================================
// Source file
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFileData {
    pub statements: NodeList,
    pub end_of_file_token: NodeIndex,
    pub file_name: String,
    pub text: Arc<str>,
    pub language_version: ScriptTarget,
    /// True iff the file has a top-level import or export.
    pub external_module_indicator: bool,
    pub parse_diagnostics: Vec<Diagnostic>,
}
