//! Command assembly for the cl and clang-cl drivers.

use super::{executable_extension, shared_library_extension, static_library_extension};
use crate::config::{BuildConfig, BuildType, Compiler, OutputType};

pub fn assemble(config: &BuildConfig) -> String {
    let mut parts: Vec<String> = Vec::new();

    match config.compiler {
        Compiler::ClangCl => {
            parts.push("clang-cl".into());
            parts.push("/FC".into());
            parts.push("/W4".into());
            // clang-cl only understands -std through the clang frontend
            parts.push("-Xclang".into());
            parts.push(format!("-std={}", config.language_version));
            parts.push(format!("-m{}", config.target_arch));
        }
        _ => {
            parts.push("cl".into());
            parts.push("/FC".into());
            parts.push("/W4".into());
            parts.push(format!("/std:{}", config.language_version));
        }
    }

    match config.build_type {
        BuildType::Release => {
            parts.push("/O2".into());
            parts.push("/Oi".into());
            parts.push("/fp:fast".into());
        }
        BuildType::Debug => {
            parts.push("/Od".into());
            parts.push("/Zi".into());
        }
    }

    parts.extend(config.compiler_flags.iter().cloned());
    parts.extend(config.constants.iter().map(|c| format!("-D{c}")));
    parts.extend(config.include_paths.iter().map(|p| format!("-I{p}")));
    parts.extend(config.files.iter().cloned());
    parts.extend(config.source_paths.iter().cloned());

    match config.output_type {
        OutputType::Executable => link(config, &mut parts, false),
        OutputType::Shared => link(config, &mut parts, true),
        OutputType::Object => parts.push("/c".into()),
    }

    parts.join(" ")
}

fn link(config: &BuildConfig, parts: &mut Vec<String>, shared: bool) {
    let output = format!(
        "{}{}",
        config.project_name,
        if shared {
            shared_library_extension()
        } else {
            executable_extension()
        }
    );

    if config.compiler == Compiler::ClangCl {
        parts.push("/o".into());
        parts.push(output.clone());
    }

    parts.push("/link".into());
    parts.push("/INCREMENTAL:NO".into());
    parts.push("/OPT:REF".into());
    parts.extend(config.linker_flags.iter().cloned());
    parts.extend(
        config
            .libraries
            .iter()
            .map(|l| format!("{l}{}", static_library_extension())),
    );

    if shared {
        parts.push("/DLL".into());
    }
    if config.compiler != Compiler::ClangCl {
        parts.push(format!("/OUT:{output}"));
    }
}
