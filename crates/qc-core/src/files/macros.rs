//! Macro para declarar tipos de archivo sin boilerplate.
//!
//! `typed_file!(Name => Variant);` genera un wrapper nominal sobre
//! `BaseFile` cuyo constructor sólo delega (kind = `FileKind::Variant`),
//! además de `FileArtifact`, `TypedFile` y las conversiones con `AnyFile`.
//! `Variant` debe existir tanto en `FileKind` como en `AnyFile`.

#[macro_export]
macro_rules! typed_file {
    ($(#[$meta:meta])* $name:ident => $variant:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
        #[serde(transparent)]
        pub struct $name($crate::model::BaseFile);

        impl $name {
            pub fn new(helper: &$crate::model::ConstructionHelper) -> Result<Self, $crate::errors::FileError> {
                $crate::model::BaseFile::new($crate::model::FileKind::$variant, helper).map(Self)
            }
            pub fn as_base(&self) -> &$crate::model::BaseFile { &self.0 }
            pub fn into_base(self) -> $crate::model::BaseFile { self.0 }
        }

        impl AsRef<$crate::model::BaseFile> for $name {
            fn as_ref(&self) -> &$crate::model::BaseFile { &self.0 }
        }

        impl $crate::files::FileArtifact for $name {
            fn base(&self) -> &$crate::model::BaseFile { &self.0 }
        }

        impl $crate::files::TypedFile for $name {
            const KIND: $crate::model::FileKind = $crate::model::FileKind::$variant;

            fn construct(helper: &$crate::model::ConstructionHelper) -> Result<Self, $crate::errors::FileError> {
                Self::new(helper)
            }

            fn from_any(any: &$crate::files::AnyFile) -> Option<&Self> {
                match any {
                    $crate::files::AnyFile::$variant(f) => Some(f),
                    _ => None,
                }
            }
        }

        impl From<$name> for $crate::files::AnyFile {
            fn from(f: $name) -> Self { $crate::files::AnyFile::$variant(f) }
        }

        impl TryFrom<$crate::files::AnyFile> for $name {
            type Error = $crate::errors::FileError;

            fn try_from(any: $crate::files::AnyFile) -> Result<Self, Self::Error> {
                match any {
                    $crate::files::AnyFile::$variant(f) => Ok(f),
                    other => Err($crate::errors::FileError::KindMismatch {
                        expected: $crate::model::FileKind::$variant,
                        found: $crate::files::FileArtifact::kind(&other),
                    }),
                }
            }
        }
    };
}
