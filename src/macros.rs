// glbinder/src/macros.rs
//
//! The macro that declares the function table.

/// Declares the `Gl` function table.
///
/// Functions in the `bootstrap` block are loaded before the version is known, without looking at
/// any requirements. Every other function is preceded by its list of stacked `Requirement`s;
/// an empty list marks a function that every context provides.
///
/// ```ignore
/// gl_functions! {
///     bootstrap {
///         fn GetError() -> GLenum;
///     }
///     [] fn Flush() -> ();
///     [gl(3, 0).gles(3, 0).extension("GL_ARB_vertex_array_object")]
///     fn BindVertexArray(array: GLuint) -> ();
/// }
/// ```
macro_rules! gl_functions {
    (
        bootstrap {
            $(fn $boot_name:ident($($boot_arg:ident: $boot_ty:ty),*) -> $boot_ret:ty;)*
        }
        $([$($requirement:expr),*] fn $name:ident($($arg:ident: $ty:ty),*) -> $ret:ty;)*
    ) => {
        /// The loaded OpenGL functions.
        ///
        /// Every method forwards to the driver's entry point. If the function couldn't be loaded,
        /// the method panics with a message explaining why; use `status()` to find out
        /// beforehand.
        #[allow(non_snake_case)]
        pub struct Gl {
            $($boot_name: $crate::stub::Slot<
                unsafe extern "system" fn($($boot_ty),*) -> $boot_ret
            >,)*
            $($name: $crate::stub::Slot<unsafe extern "system" fn($($ty),*) -> $ret>,)*
        }

        #[allow(non_snake_case, clippy::unused_unit, clippy::too_many_arguments)]
        impl Gl {
            /// Functions loaded unconditionally to negotiate the version and extensions.
            pub const BOOTSTRAP: &'static [$crate::requirement::SymbolInfo] = &[
                $($crate::requirement::SymbolInfo {
                    name: concat!("gl", stringify!($boot_name)),
                    requirements: &[],
                },)*
            ];

            /// Every other function, with its requirements.
            pub const FUNCTIONS: &'static [$crate::requirement::SymbolInfo] = &[
                $($crate::requirement::SymbolInfo {
                    name: concat!("gl", stringify!($name)),
                    requirements: &[$($requirement),*],
                },)*
            ];

            pub(crate) fn unresolved() -> Gl {
                Gl {
                    $($boot_name: $crate::stub::Slot::Unresolved,)*
                    $($name: $crate::stub::Slot::Unresolved,)*
                }
            }

            pub(crate) fn clear(&mut self) {
                *self = Gl::unresolved();
            }

            #[allow(unused_assignments, unused_mut, unused_variables)]
            pub(crate) fn bind_bootstrap<F>(&mut self, mut resolve: F)
            where
                F: FnMut(&'static $crate::requirement::SymbolInfo) -> $crate::resolver::Resolution,
            {
                let mut index = 0;
                $(
                    let symbol = &Gl::BOOTSTRAP[index];
                    index += 1;
                    self.$boot_name = match resolve(symbol) {
                        $crate::resolver::Resolution::Bound(pointer) => {
                            $crate::stub::Slot::Bound(unsafe {
                                ::std::mem::transmute::<
                                    *const ::std::os::raw::c_void,
                                    unsafe extern "system" fn($($boot_ty),*) -> $boot_ret,
                                >(pointer)
                            })
                        }
                        $crate::resolver::Resolution::Stubbed(reason) => {
                            $crate::stub::Slot::Stub($crate::stub::Stub::new(symbol.name, reason))
                        }
                    };
                )*
            }

            #[allow(unused_assignments, unused_mut, unused_variables)]
            pub(crate) fn bind_functions<F>(&mut self, mut resolve: F)
            where
                F: FnMut(&'static $crate::requirement::SymbolInfo) -> $crate::resolver::Resolution,
            {
                let mut index = 0;
                $(
                    let symbol = &Gl::FUNCTIONS[index];
                    index += 1;
                    self.$name = match resolve(symbol) {
                        $crate::resolver::Resolution::Bound(pointer) => {
                            $crate::stub::Slot::Bound(unsafe {
                                ::std::mem::transmute::<
                                    *const ::std::os::raw::c_void,
                                    unsafe extern "system" fn($($ty),*) -> $ret,
                                >(pointer)
                            })
                        }
                        $crate::resolver::Resolution::Stubbed(reason) => {
                            $crate::stub::Slot::Stub($crate::stub::Stub::new(symbol.name, reason))
                        }
                    };
                )*
            }

            /// Returns the load state of the function with the given canonical name, or `None` if
            /// the table has no such function.
            pub fn status(&self, name: &str) -> Option<$crate::stub::SymbolStatus> {
                match name {
                    $(concat!("gl", stringify!($boot_name)) => Some(self.$boot_name.status()),)*
                    $(concat!("gl", stringify!($name)) => Some(self.$name.status()),)*
                    _ => None,
                }
            }

            /// Returns true if the function with the given canonical name was loaded from the
            /// driver.
            #[inline]
            pub fn is_loaded(&self, name: &str) -> bool {
                self.status(name) == Some($crate::stub::SymbolStatus::Bound)
            }

            $(
                #[inline]
                pub unsafe fn $boot_name(&self, $($boot_arg: $boot_ty),*) -> $boot_ret {
                    (self.$boot_name.get(concat!("gl", stringify!($boot_name))))($($boot_arg),*)
                }
            )*

            $(
                #[inline]
                pub unsafe fn $name(&self, $($arg: $ty),*) -> $ret {
                    (self.$name.get(concat!("gl", stringify!($name))))($($arg),*)
                }
            )*
        }
    };
}
