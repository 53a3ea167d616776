//! Per-toolchain command-line assembly.
//!
//! Consumes a finished, validated `BuildConfig` and produces the single
//! compiler invocation to run.  This is the only place that knows about
//! host-platform file extensions; the front end never does.

pub mod gnu;
pub mod msvc;

use crate::config::{BuildConfig, Compiler};

pub fn assemble(config: &BuildConfig) -> String {
    match config.compiler {
        Compiler::Gcc | Compiler::Clang => gnu::assemble(config),
        Compiler::Cl | Compiler::ClangCl => msvc::assemble(config),
    }
}

pub(crate) fn executable_extension() -> &'static str {
    if cfg!(target_os = "windows") { ".exe" } else { "" }
}

pub(crate) fn shared_library_extension() -> &'static str {
    if cfg!(target_os = "windows") { ".dll" } else { ".so" }
}

pub(crate) fn object_extension() -> &'static str {
    if cfg!(target_os = "windows") { ".obj" } else { ".o" }
}

pub(crate) fn static_library_extension() -> &'static str {
    if cfg!(target_os = "windows") { ".lib" } else { ".a" }
}
