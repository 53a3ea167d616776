//! The in-memory build configuration one build file parses into.
//!
//! Scalar settings are closed enums so a configuration can never hold a
//! value outside its legal set; the parser validates the raw lexeme and
//! leaves the field untouched on a miss.  List settings accumulate across
//! repeated commands, preserving order and duplicates.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Compiler {
    #[default]
    Gcc,
    Cl,
    Clang,
    #[serde(rename = "clang-cl")]
    ClangCl,
}

impl Compiler {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "gcc" => Some(Self::Gcc),
            "cl" => Some(Self::Cl),
            "clang" => Some(Self::Clang),
            "clang-cl" => Some(Self::ClangCl),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gcc => "gcc",
            Self::Cl => "cl",
            Self::Clang => "clang",
            Self::ClangCl => "clang-cl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageVersion {
    C89,
    #[default]
    C99,
    C11,
    C17,
}

impl LanguageVersion {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "c89" => Some(Self::C89),
            "c99" => Some(Self::C99),
            "c11" => Some(Self::C11),
            "c17" => Some(Self::C17),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::C89 => "c89",
            Self::C99 => "c99",
            Self::C11 => "c11",
            Self::C17 => "c17",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TargetArch {
    #[serde(rename = "32")]
    Bits32,
    #[default]
    #[serde(rename = "64")]
    Bits64,
}

impl TargetArch {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "32" => Some(Self::Bits32),
            "64" => Some(Self::Bits64),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bits32 => "32",
            Self::Bits64 => "64",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    Shared,
    Object,
    #[default]
    Executable,
}

impl OutputType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "shared" => Some(Self::Shared),
            "object" => Some(Self::Object),
            "executable" => Some(Self::Executable),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shared => "shared",
            Self::Object => "object",
            Self::Executable => "executable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildType {
    Debug,
    #[default]
    Release,
}

impl BuildType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "debug" => Some(Self::Debug),
            "release" => Some(Self::Release),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }
}

macro_rules! display_via_as_str {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    )*};
}

display_via_as_str!(Compiler, LanguageVersion, TargetArch, OutputType, BuildType);

/// Everything one build file can say, with the documented defaults.
///
/// Created empty at parse start, mutated in place by each recognised
/// command, then handed read-only to the command assembler.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub project_name: String,
    pub compiler: Compiler,
    pub language_version: LanguageVersion,
    pub target_arch: TargetArch,
    pub output_type: OutputType,
    pub build_type: BuildType,
    pub files: Vec<String>,
    pub source_paths: Vec<String>,
    pub constants: Vec<String>,
    pub include_paths: Vec<String>,
    pub libraries: Vec<String>,
    pub object_files: Vec<String>,
    pub compiler_flags: Vec<String>,
    pub linker_flags: Vec<String>,
}
