//! The recognized ESTree node type vocabulary.
//!
//! Names are the public `type` strings. Anything the converter synthesizes
//! outside this list is an `EsType::Synthesized` name and is rejected in
//! strict mode.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};
use std::fmt;

macro_rules! ast_node_types {
    ($($name:ident),* $(,)?) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum AstNodeType {
            $($name),*
        }

        impl AstNodeType {
            pub const ALL: &'static [AstNodeType] = &[$(AstNodeType::$name),*];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(AstNodeType::$name => stringify!($name)),*
                }
            }
        }
    };
}

ast_node_types! {
    ArrayExpression,
    ArrayPattern,
    ArrowFunctionExpression,
    AssignmentExpression,
    AssignmentPattern,
    AwaitExpression,
    BigIntLiteral,
    BinaryExpression,
    BlockStatement,
    BreakStatement,
    CallExpression,
    CatchClause,
    ClassBody,
    ClassDeclaration,
    ClassExpression,
    ClassImplements,
    ClassProperty,
    ConditionalExpression,
    ContinueStatement,
    DebuggerStatement,
    DeclareFunction,
    Decorator,
    DoWhileStatement,
    EmptyStatement,
    ExportAllDeclaration,
    ExportDefaultDeclaration,
    ExportNamedDeclaration,
    ExportSpecifier,
    ExpressionStatement,
    ForInStatement,
    ForOfStatement,
    ForStatement,
    FunctionDeclaration,
    FunctionExpression,
    Identifier,
    IfStatement,
    Import,
    ImportDeclaration,
    ImportDefaultSpecifier,
    ImportNamespaceSpecifier,
    ImportSpecifier,
    JSXAttribute,
    JSXClosingElement,
    JSXClosingFragment,
    JSXElement,
    JSXEmptyExpression,
    JSXExpressionContainer,
    JSXFragment,
    JSXIdentifier,
    JSXMemberExpression,
    JSXOpeningElement,
    JSXOpeningFragment,
    JSXSpreadAttribute,
    JSXSpreadChild,
    JSXText,
    LabeledStatement,
    Literal,
    LogicalExpression,
    MemberExpression,
    MetaProperty,
    MethodDefinition,
    NewExpression,
    ObjectExpression,
    ObjectPattern,
    PrivateIdentifier,
    Program,
    Property,
    RestElement,
    ReturnStatement,
    SequenceExpression,
    SpreadElement,
    Super,
    SwitchCase,
    SwitchStatement,
    TaggedTemplateExpression,
    TemplateElement,
    TemplateLiteral,
    ThisExpression,
    ThrowStatement,
    TryStatement,
    UnaryExpression,
    UpdateExpression,
    VariableDeclaration,
    VariableDeclarator,
    WhileStatement,
    WithStatement,
    YieldExpression,
    // TypeScript extensions
    TSAbstractClassDeclaration,
    TSAbstractClassProperty,
    TSAbstractKeyword,
    TSAbstractMethodDefinition,
    TSAnyKeyword,
    TSArrayType,
    TSAsExpression,
    TSAsyncKeyword,
    TSBigIntKeyword,
    TSBooleanKeyword,
    TSCallSignature,
    TSConditionalType,
    TSConstructorType,
    TSConstructSignature,
    TSDeclareFunction,
    TSDeclareKeyword,
    TSEnumDeclaration,
    TSEnumMember,
    TSExportAssignment,
    TSExportKeyword,
    TSExternalModuleReference,
    TSFunctionType,
    TSImportEqualsDeclaration,
    TSImportType,
    TSIndexedAccessType,
    TSIndexSignature,
    TSInferType,
    TSInterfaceBody,
    TSInterfaceDeclaration,
    TSInterfaceHeritage,
    TSIntersectionType,
    TSLiteralType,
    TSMappedType,
    TSMethodSignature,
    TSMinusToken,
    TSModuleBlock,
    TSModuleDeclaration,
    TSNamespaceExportDeclaration,
    TSNeverKeyword,
    TSNonNullExpression,
    TSNullKeyword,
    TSNumberKeyword,
    TSObjectKeyword,
    TSOptionalType,
    TSParameterProperty,
    TSParenthesizedType,
    TSPlusToken,
    TSPrivateKeyword,
    TSPropertySignature,
    TSProtectedKeyword,
    TSPublicKeyword,
    TSQualifiedName,
    TSQuestionToken,
    TSReadonlyKeyword,
    TSRestType,
    TSStaticKeyword,
    TSStringKeyword,
    TSSymbolKeyword,
    TSThisType,
    TSTupleType,
    TSTypeAnnotation,
    TSTypeAssertion,
    TSTypeLiteral,
    TSTypeOperator,
    TSTypeParameter,
    TSTypeParameterDeclaration,
    TSTypeParameterInstantiation,
    TSTypePredicate,
    TSTypeQuery,
    TSTypeReference,
    TSUndefinedKeyword,
    TSUnionType,
    TSUnknownKeyword,
    TSVoidKeyword,
}

static BY_NAME: Lazy<FxHashMap<&'static str, AstNodeType>> = Lazy::new(|| {
    AstNodeType::ALL
        .iter()
        .map(|&ty| (ty.as_str(), ty))
        .collect()
});

impl AstNodeType {
    /// Look a type up by its public name.
    pub fn from_name(name: &str) -> Option<AstNodeType> {
        BY_NAME.get(name).copied()
    }
}

impl fmt::Display for AstNodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AstNodeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
