//! Node and modifier flags.

use bitflags::bitflags;

/// Flags stored in [`Node::flags`](crate::Node::flags).
pub mod node_flags {
    pub const NONE: u16 = 0;
    pub const LET: u16 = 1 << 0;
    pub const CONST: u16 = 1 << 1;
    pub const NESTED_NAMESPACE: u16 = 1 << 2;
    pub const USING: u16 = 1 << 3;
    pub const NAMESPACE: u16 = 1 << 4;
    pub const OPTIONAL_CHAIN: u16 = 1 << 5;
    /// `declare global { ... }`
    pub const GLOBAL_AUGMENTATION: u16 = 1 << 10;

    pub const BLOCK_SCOPED: u16 = LET | CONST | USING;
}

bitflags! {
    /// Modifier keywords present on a declaration.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u32 {
        const EXPORT = 1 << 0;
        const AMBIENT = 1 << 1;
        const PUBLIC = 1 << 2;
        const PRIVATE = 1 << 3;
        const PROTECTED = 1 << 4;
        const STATIC = 1 << 5;
        const READONLY = 1 << 6;
        const ABSTRACT = 1 << 7;
        const ASYNC = 1 << 8;
        const DEFAULT = 1 << 9;
        const CONST = 1 << 10;
        const OVERRIDE = 1 << 11;
        const ACCESSOR = 1 << 12;
        const IN = 1 << 13;
        const OUT = 1 << 14;

        const ACCESSIBILITY = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
        /// Modifiers that turn a constructor parameter into a parameter property.
        const PARAMETER_PROPERTY = Self::ACCESSIBILITY.bits() | Self::READONLY.bits() | Self::OVERRIDE.bits();
    }
}

impl ModifierFlags {
    pub fn from_keyword(kind: tsz_scanner::SyntaxKind) -> ModifierFlags {
        use tsz_scanner::SyntaxKind;
        match kind {
            SyntaxKind::ExportKeyword => ModifierFlags::EXPORT,
            SyntaxKind::DeclareKeyword => ModifierFlags::AMBIENT,
            SyntaxKind::PublicKeyword => ModifierFlags::PUBLIC,
            SyntaxKind::PrivateKeyword => ModifierFlags::PRIVATE,
            SyntaxKind::ProtectedKeyword => ModifierFlags::PROTECTED,
            SyntaxKind::StaticKeyword => ModifierFlags::STATIC,
            SyntaxKind::ReadonlyKeyword => ModifierFlags::READONLY,
            SyntaxKind::AbstractKeyword => ModifierFlags::ABSTRACT,
            SyntaxKind::AsyncKeyword => ModifierFlags::ASYNC,
            SyntaxKind::DefaultKeyword => ModifierFlags::DEFAULT,
            SyntaxKind::ConstKeyword => ModifierFlags::CONST,
            SyntaxKind::OverrideKeyword => ModifierFlags::OVERRIDE,
            SyntaxKind::AccessorKeyword => ModifierFlags::ACCESSOR,
            SyntaxKind::InKeyword => ModifierFlags::IN,
            SyntaxKind::OutKeyword => ModifierFlags::OUT,
            _ => ModifierFlags::empty(),
        }
    }
}
