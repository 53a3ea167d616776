//! Command assembly for the gcc and clang drivers.

use super::{executable_extension, object_extension, shared_library_extension};
use crate::config::{BuildConfig, BuildType, Compiler, OutputType};

pub fn assemble(config: &BuildConfig) -> String {
    let mut parts: Vec<String> = Vec::new();

    match config.compiler {
        Compiler::Clang => {
            parts.push("clang".into());
            parts.push("-mno-incremental-linker-compatible".into());
        }
        _ => parts.push("gcc".into()),
    }

    parts.push("-Wall".into());
    parts.push(format!("-std={}", config.language_version));

    match config.build_type {
        BuildType::Release => parts.push("-O2".into()),
        BuildType::Debug => {
            parts.push("-O0".into());
            parts.push("-g".into());
        }
    }
    parts.push(format!("-m{}", config.target_arch));

    parts.extend(config.compiler_flags.iter().cloned());
    parts.extend(config.constants.iter().map(|c| format!("-D{c}")));
    parts.extend(config.include_paths.iter().map(|p| format!("-I{p}")));
    parts.extend(config.files.iter().cloned());
    parts.extend(config.source_paths.iter().cloned());

    match config.output_type {
        OutputType::Executable => {
            parts.push("-o".into());
            parts.push(format!("{}{}", config.project_name, executable_extension()));
            parts.extend(config.linker_flags.iter().cloned());
            parts.extend(config.libraries.iter().map(|l| link_argument(l)));
        }
        OutputType::Shared => {
            parts.push("-shared".into());
            parts.push("-o".into());
            parts.push(format!(
                "{}{}",
                config.project_name,
                shared_library_extension()
            ));
            parts.extend(config.linker_flags.iter().cloned());
            parts.extend(config.libraries.iter().map(|l| link_argument(l)));
        }
        OutputType::Object => parts.push("-c".into()),
    }

    parts.join(" ")
}

/// Libraries handed over as object files are passed through untouched;
/// everything else goes through `-l`.
fn link_argument(library: &str) -> String {
    if library.ends_with(object_extension()) {
        library.to_string()
    } else {
        format!("-l{library}")
    }
}
