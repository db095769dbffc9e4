//! Keyword and punctuation spellings.

use crate::syntax_kind::SyntaxKind;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

const KEYWORDS: &[(&str, SyntaxKind)] = &[
    ("abstract", SyntaxKind::AbstractKeyword),
    ("accessor", SyntaxKind::AccessorKeyword),
    ("any", SyntaxKind::AnyKeyword),
    ("as", SyntaxKind::AsKeyword),
    ("asserts", SyntaxKind::AssertsKeyword),
    ("assert", SyntaxKind::AssertKeyword),
    ("async", SyntaxKind::AsyncKeyword),
    ("await", SyntaxKind::AwaitKeyword),
    ("bigint", SyntaxKind::BigIntKeyword),
    ("boolean", SyntaxKind::BooleanKeyword),
    ("break", SyntaxKind::BreakKeyword),
    ("case", SyntaxKind::CaseKeyword),
    ("catch", SyntaxKind::CatchKeyword),
    ("class", SyntaxKind::ClassKeyword),
    ("const", SyntaxKind::ConstKeyword),
    ("constructor", SyntaxKind::ConstructorKeyword),
    ("continue", SyntaxKind::ContinueKeyword),
    ("debugger", SyntaxKind::DebuggerKeyword),
    ("declare", SyntaxKind::DeclareKeyword),
    ("default", SyntaxKind::DefaultKeyword),
    ("delete", SyntaxKind::DeleteKeyword),
    ("do", SyntaxKind::DoKeyword),
    ("else", SyntaxKind::ElseKeyword),
    ("enum", SyntaxKind::EnumKeyword),
    ("export", SyntaxKind::ExportKeyword),
    ("extends", SyntaxKind::ExtendsKeyword),
    ("false", SyntaxKind::FalseKeyword),
    ("finally", SyntaxKind::FinallyKeyword),
    ("for", SyntaxKind::ForKeyword),
    ("from", SyntaxKind::FromKeyword),
    ("function", SyntaxKind::FunctionKeyword),
    ("get", SyntaxKind::GetKeyword),
    ("global", SyntaxKind::GlobalKeyword),
    ("if", SyntaxKind::IfKeyword),
    ("implements", SyntaxKind::ImplementsKeyword),
    ("import", SyntaxKind::ImportKeyword),
    ("in", SyntaxKind::InKeyword),
    ("infer", SyntaxKind::InferKeyword),
    ("instanceof", SyntaxKind::InstanceOfKeyword),
    ("interface", SyntaxKind::InterfaceKeyword),
    ("intrinsic", SyntaxKind::IntrinsicKeyword),
    ("is", SyntaxKind::IsKeyword),
    ("keyof", SyntaxKind::KeyOfKeyword),
    ("let", SyntaxKind::LetKeyword),
    ("module", SyntaxKind::ModuleKeyword),
    ("namespace", SyntaxKind::NamespaceKeyword),
    ("never", SyntaxKind::NeverKeyword),
    ("new", SyntaxKind::NewKeyword),
    ("null", SyntaxKind::NullKeyword),
    ("number", SyntaxKind::NumberKeyword),
    ("object", SyntaxKind::ObjectKeyword),
    ("of", SyntaxKind::OfKeyword),
    ("out", SyntaxKind::OutKeyword),
    ("override", SyntaxKind::OverrideKeyword),
    ("package", SyntaxKind::PackageKeyword),
    ("private", SyntaxKind::PrivateKeyword),
    ("protected", SyntaxKind::ProtectedKeyword),
    ("public", SyntaxKind::PublicKeyword),
    ("readonly", SyntaxKind::ReadonlyKeyword),
    ("require", SyntaxKind::RequireKeyword),
    ("return", SyntaxKind::ReturnKeyword),
    ("satisfies", SyntaxKind::SatisfiesKeyword),
    ("set", SyntaxKind::SetKeyword),
    ("static", SyntaxKind::StaticKeyword),
    ("string", SyntaxKind::StringKeyword),
    ("super", SyntaxKind::SuperKeyword),
    ("switch", SyntaxKind::SwitchKeyword),
    ("symbol", SyntaxKind::SymbolKeyword),
    ("this", SyntaxKind::ThisKeyword),
    ("throw", SyntaxKind::ThrowKeyword),
    ("true", SyntaxKind::TrueKeyword),
    ("try", SyntaxKind::TryKeyword),
    ("type", SyntaxKind::TypeKeyword),
    ("typeof", SyntaxKind::TypeOfKeyword),
    ("undefined", SyntaxKind::UndefinedKeyword),
    ("unique", SyntaxKind::UniqueKeyword),
    ("unknown", SyntaxKind::UnknownKeyword),
    ("using", SyntaxKind::UsingKeyword),
    ("var", SyntaxKind::VarKeyword),
    ("void", SyntaxKind::VoidKeyword),
    ("while", SyntaxKind::WhileKeyword),
    ("with", SyntaxKind::WithKeyword),
    ("yield", SyntaxKind::YieldKeyword),
];

const PUNCTUATION: &[(&str, SyntaxKind)] = &[
    ("{", SyntaxKind::OpenBraceToken),
    ("}", SyntaxKind::CloseBraceToken),
    ("(", SyntaxKind::OpenParenToken),
    (")", SyntaxKind::CloseParenToken),
    ("[", SyntaxKind::OpenBracketToken),
    ("]", SyntaxKind::CloseBracketToken),
    (".", SyntaxKind::DotToken),
    ("...", SyntaxKind::DotDotDotToken),
    (";", SyntaxKind::SemicolonToken),
    (",", SyntaxKind::CommaToken),
    ("?.", SyntaxKind::QuestionDotToken),
    ("<", SyntaxKind::LessThanToken),
    ("</", SyntaxKind::LessThanSlashToken),
    (">", SyntaxKind::GreaterThanToken),
    ("<=", SyntaxKind::LessThanEqualsToken),
    (">=", SyntaxKind::GreaterThanEqualsToken),
    ("==", SyntaxKind::EqualsEqualsToken),
    ("!=", SyntaxKind::ExclamationEqualsToken),
    ("===", SyntaxKind::EqualsEqualsEqualsToken),
    ("!==", SyntaxKind::ExclamationEqualsEqualsToken),
    ("=>", SyntaxKind::EqualsGreaterThanToken),
    ("+", SyntaxKind::PlusToken),
    ("-", SyntaxKind::MinusToken),
    ("*", SyntaxKind::AsteriskToken),
    ("**", SyntaxKind::AsteriskAsteriskToken),
    ("/", SyntaxKind::SlashToken),
    ("%", SyntaxKind::PercentToken),
    ("++", SyntaxKind::PlusPlusToken),
    ("--", SyntaxKind::MinusMinusToken),
    ("<<", SyntaxKind::LessThanLessThanToken),
    (">>", SyntaxKind::GreaterThanGreaterThanToken),
    (">>>", SyntaxKind::GreaterThanGreaterThanGreaterThanToken),
    ("&", SyntaxKind::AmpersandToken),
    ("|", SyntaxKind::BarToken),
    ("^", SyntaxKind::CaretToken),
    ("!", SyntaxKind::ExclamationToken),
    ("~", SyntaxKind::TildeToken),
    ("&&", SyntaxKind::AmpersandAmpersandToken),
    ("||", SyntaxKind::BarBarToken),
    ("?", SyntaxKind::QuestionToken),
    (":", SyntaxKind::ColonToken),
    ("@", SyntaxKind::AtToken),
    ("??", SyntaxKind::QuestionQuestionToken),
    ("`", SyntaxKind::BacktickToken),
    ("#", SyntaxKind::HashToken),
    ("=", SyntaxKind::EqualsToken),
    ("+=", SyntaxKind::PlusEqualsToken),
    ("-=", SyntaxKind::MinusEqualsToken),
    ("*=", SyntaxKind::AsteriskEqualsToken),
    ("**=", SyntaxKind::AsteriskAsteriskEqualsToken),
    ("/=", SyntaxKind::SlashEqualsToken),
    ("%=", SyntaxKind::PercentEqualsToken),
    ("<<=", SyntaxKind::LessThanLessThanEqualsToken),
    (">>=", SyntaxKind::GreaterThanGreaterThanEqualsToken),
    (">>>=", SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken),
    ("&=", SyntaxKind::AmpersandEqualsToken),
    ("|=", SyntaxKind::BarEqualsToken),
    ("||=", SyntaxKind::BarBarEqualsToken),
    ("&&=", SyntaxKind::AmpersandAmpersandEqualsToken),
    ("??=", SyntaxKind::QuestionQuestionEqualsToken),
    ("^=", SyntaxKind::CaretEqualsToken),
];

static TEXT_TO_KEYWORD: Lazy<FxHashMap<&'static str, SyntaxKind>> =
    Lazy::new(|| KEYWORDS.iter().copied().collect());

static TOKEN_TO_TEXT: Lazy<FxHashMap<SyntaxKind, &'static str>> = Lazy::new(|| {
    KEYWORDS
        .iter()
        .chain(PUNCTUATION)
        .map(|&(text, kind)| (kind, text))
        .collect()
});

/// Map identifier text to its keyword kind, if it is one.
pub fn text_to_keyword(text: &str) -> Option<SyntaxKind> {
    TEXT_TO_KEYWORD.get(text).copied()
}

/// The fixed spelling of a keyword or punctuation kind.
pub fn token_to_string(kind: SyntaxKind) -> Option<&'static str> {
    TOKEN_TO_TEXT.get(&kind).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_kind_has_text() {
        for &kind in SyntaxKind::ALL.iter().filter(|k| k.is_keyword()) {
            let text = token_to_string(kind).unwrap_or_else(|| panic!("{kind:?} has no text"));
            assert_eq!(text_to_keyword(text), Some(kind));
        }
    }

    #[test]
    fn every_punctuation_kind_has_text() {
        for &kind in SyntaxKind::ALL.iter().filter(|k| k.is_punctuation()) {
            assert!(token_to_string(kind).is_some(), "{kind:?} has no text");
        }
    }

    #[test]
    fn identifiers_are_not_keywords() {
        assert_eq!(text_to_keyword("foo"), None);
        assert_eq!(text_to_keyword("Class"), None);
    }
}
