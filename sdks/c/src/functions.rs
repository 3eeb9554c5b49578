//! Generated by `symbridge-codegen generate interface/functions.yml`.

symbridge_ffi::bindings! {
    function fn Symbolic_addU32(a: u32, b: u32) -> u32 {
        u32::wrapping_add(a, b)
    }
    /// Print sin(x+2*y)+3*z+41+1 to stdout.
    function fn Symbolic_printSample() -> () {
        crate::print_sample();
    }
    function fn Symbolic_initLogging() -> () {
        symbridge_ffi::logging::init_from_env();
    }
}
