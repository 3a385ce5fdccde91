//! Platform code to portable key translation
//!
//! ## Philosophy
//!
//! - **Deterministic mapping**: Same platform code always produces the same `Key`
//! - **Explicit sentinel fallback**: Unmapped codes return `Key::None`
//! - **Static data**: Tables are fixed at compile time, never built at runtime

use core::fmt::Debug;
use key_types::Key;

/// Translates platform key codes into portable keys
///
/// Implementations must be total: every value of `Code` maps to some `Key`,
/// with `Key::None` standing for "not recognized".
pub trait KeyTranslator {
    /// Platform key-code type
    type Code: Copy + Debug;

    /// Looks up a platform code
    fn translate(&self, code: Self::Code) -> Key;

    /// Returns true if the code maps to a real key
    fn is_mapped(&self, code: Self::Code) -> bool {
        !self.translate(code).is_none()
    }
}

impl<T: KeyTranslator + ?Sized> KeyTranslator for &T {
    type Code = T::Code;

    fn translate(&self, code: Self::Code) -> Key {
        (**self).translate(code)
    }
}
