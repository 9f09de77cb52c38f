//! Module-wide bytecode option flags.

bitflags::bitflags! {
    /// Flags stored in the last meaningful byte of the file header.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct BytecodeOptions: u8 {
        /// Builtin calls were resolved at compile time.
        const STATIC_BUILTINS = 1 << 0;
        /// The module table uses the static (function index only) encoding.
        const CJS_MODULES_STATICALLY_RESOLVED = 1 << 1;
    }
}
