/// Number formatting and scanning helpers.
///
/// This module converts results back into text that can re-enter the
/// expression buffer, and reads the numeric prefix of a buffer for the
/// memory-store command. Both follow the conventions of the calculator's
/// original host environment so displayed results look the same.
pub mod num;
