// glspin/src/macros.rs
//
//! The macro that turns a list of OpenGL entry points into a function table.

/// Declares a table of OpenGL function pointers, one field per entry point.
///
/// Each line names the method, the symbol the resolver is asked for, and the C signature:
///
/// ```ignore
/// gl_function_table! {
///     pub struct Gl {
///         fn CreateShader = "glCreateShader"(shader_type: GLenum) -> GLuint;
///     }
/// }
/// ```
///
/// The generated struct has private, non-nullable fields and no constructor other than
/// `load_with`, so a table only exists once every entry point has been resolved. Symbols are
/// resolved in the order they're listed; the first one the resolver can't find aborts the load.
macro_rules! gl_function_table {
    (
        $(#[$table_meta:meta])*
        $vis:vis struct $table:ident {
            $(
                $(#[$fn_meta:meta])*
                fn $name:ident = $symbol:literal ($($arg:ident : $arg_ty:ty),* $(,)?)
                    $(-> $ret:ty)?;
            )*
        }
    ) => {
        $(#[$table_meta])*
        #[allow(non_snake_case)]
        $vis struct $table {
            $($name: unsafe extern "system" fn($($arg_ty),*) $(-> $ret)?,)*
        }

        #[allow(non_snake_case, dead_code, clippy::too_many_arguments)]
        impl $table {
            /// The entry points this table resolves, in resolution order.
            pub const SYMBOLS: &'static [&'static str] = &[$($symbol),*];

            /// Resolves every entry point through `loader`.
            ///
            /// `loader` receives each symbol name and returns its address, or null if the symbol
            /// is unavailable. A rendering context must be current on the calling thread.
            ///
            /// The addresses are trusted to have the signatures declared for their names; the
            /// loader has no way of checking that.
            pub fn load_with<F>(mut loader: F) -> Result<$table, $crate::error::Error>
            where
                F: FnMut(&'static str) -> *const std::os::raw::c_void,
            {
                // Struct fields are evaluated in source order, so resolution follows the list.
                let table = $table {
                    $($name: unsafe { $crate::loader::resolve(&mut loader, $symbol)? },)*
                };
                log::debug!(
                    "resolved {} OpenGL entry points for `{}`",
                    Self::SYMBOLS.len(),
                    stringify!($table)
                );
                Ok(table)
            }

            /// Returns the resolved address of `symbol`, if this table has an entry for it.
            pub fn address_of(&self, symbol: &str) -> Option<*const std::os::raw::c_void> {
                self.addresses()
                    .find(|&(name, _)| name == symbol)
                    .map(|(_, address)| address)
            }

            /// Iterates over `(symbol, address)` pairs in resolution order.
            pub fn addresses(
                &self,
            ) -> impl Iterator<Item = (&'static str, *const std::os::raw::c_void)> {
                let addresses = [$(self.$name as *const std::os::raw::c_void),*];
                Self::SYMBOLS.iter().copied().zip(addresses)
            }

            $(
                $(#[$fn_meta])*
                #[inline]
                pub unsafe fn $name(&self, $($arg: $arg_ty),*) $(-> $ret)? {
                    (self.$name)($($arg),*)
                }
            )*
        }

        impl std::fmt::Debug for $table {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_map().entries(self.addresses()).finish()
            }
        }
    };
}
