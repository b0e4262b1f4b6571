//! Static tool catalog.
//!
//! The catalog is the ground truth raw binaries are matched against. It is
//! loaded once, never mutated by a scan, and passed explicitly into the
//! scanner so tests can substitute their own tables.

use serde::Serialize;

/// One known tool: how to find it, how to ask it for its version.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    /// Stable identifier, also the key into package-manager mappings.
    pub id: &'static str,

    /// Canonical display name.
    pub name: &'static str,

    /// Category label.
    pub category: &'static str,

    /// Candidate executable names on Unix-like systems, in preference order.
    pub unix_executables: &'static [&'static str],

    /// Candidate executable names on Windows, in preference order.
    pub windows_executables: &'static [&'static str],

    /// Arguments for the version query.
    pub version_args: &'static [&'static str],

    /// Pattern whose first capture group is the version token.
    pub version_pattern: &'static str,

    /// Whether cross-referencing should look up updates for this tool.
    pub update_check: bool,

    /// Substrings of typical install paths, used as categorizer tie-breaks.
    pub path_hints: &'static [&'static str],
}

impl ToolSpec {
    /// Candidate executable names for the current platform.
    pub fn candidates(&self) -> &'static [&'static str] {
        if cfg!(windows) {
            self.windows_executables
        } else {
            self.unix_executables
        }
    }
}

/// The built-in tool catalog.
pub const TOOL_CATALOG: &[ToolSpec] = &[
    ToolSpec {
        id: "python",
        name: "Python",
        category: "Language",
        unix_executables: &["python3", "python"],
        windows_executables: &["python.exe", "python3.exe"],
        version_args: &["--version"],
        version_pattern: r"Python\s+([0-9][0-9.]*)",
        update_check: true,
        path_hints: &["python", "Python"],
    },
    ToolSpec {
        id: "pip",
        name: "pip",
        category: "Package Manager",
        unix_executables: &["pip3", "pip"],
        windows_executables: &["pip.exe", "pip3.exe"],
        version_args: &["--version"],
        version_pattern: r"pip\s+([0-9][0-9.]*)",
        update_check: false,
        path_hints: &["python", "Python"],
    },
    ToolSpec {
        id: "git",
        name: "Git",
        category: "VCS",
        unix_executables: &["git"],
        windows_executables: &["git.exe"],
        version_args: &["--version"],
        version_pattern: r"git version\s+([0-9][0-9.]*)",
        update_check: true,
        path_hints: &["git", "Git"],
    },
    ToolSpec {
        id: "node",
        name: "Node.js",
        category: "Runtime",
        unix_executables: &["node"],
        windows_executables: &["node.exe"],
        version_args: &["--version"],
        version_pattern: r"v([0-9][0-9.]*)",
        update_check: true,
        path_hints: &["node", "nvm", "nodejs"],
    },
    ToolSpec {
        id: "npm",
        name: "npm",
        category: "Package Manager",
        unix_executables: &["npm"],
        windows_executables: &["npm.cmd", "npm"],
        version_args: &["--version"],
        version_pattern: r"([0-9][0-9.]*)",
        update_check: false,
        path_hints: &["node", "npm"],
    },
    ToolSpec {
        id: "ruby",
        name: "Ruby",
        category: "Language",
        unix_executables: &["ruby"],
        windows_executables: &["ruby.exe"],
        version_args: &["--version"],
        version_pattern: r"ruby\s+([0-9][0-9.]*)",
        update_check: true,
        path_hints: &["rbenv", "rubies", "ruby"],
    },
    ToolSpec {
        id: "go",
        name: "Go",
        category: "Language",
        unix_executables: &["go"],
        windows_executables: &["go.exe"],
        version_args: &["version"],
        version_pattern: r"go version go([0-9][0-9.]*)",
        update_check: true,
        path_hints: &["go", "golang"],
    },
    ToolSpec {
        id: "rustc",
        name: "Rust",
        category: "Language",
        unix_executables: &["rustc"],
        windows_executables: &["rustc.exe"],
        version_args: &["--version"],
        version_pattern: r"rustc\s+([0-9][0-9.]*)",
        update_check: false,
        path_hints: &["cargo", "rustup", ".rustup"],
    },
    ToolSpec {
        id: "cargo",
        name: "Cargo",
        category: "Package Manager",
        unix_executables: &["cargo"],
        windows_executables: &["cargo.exe"],
        version_args: &["--version"],
        version_pattern: r"cargo\s+([0-9][0-9.]*)",
        update_check: false,
        path_hints: &["cargo", ".cargo"],
    },
    ToolSpec {
        id: "java",
        name: "Java",
        category: "Language",
        unix_executables: &["java"],
        windows_executables: &["java.exe"],
        version_args: &["-version"],
        version_pattern: r#"version "?([0-9][0-9._]*)"#,
        update_check: false,
        path_hints: &["java", "jdk", "jvm", "Java"],
    },
    ToolSpec {
        id: "docker",
        name: "Docker",
        category: "Container Tool",
        unix_executables: &["docker"],
        windows_executables: &["docker.exe"],
        version_args: &["--version"],
        version_pattern: r"Docker version ([0-9][0-9.]*)",
        update_check: true,
        path_hints: &["docker", "Docker"],
    },
    ToolSpec {
        id: "kubectl",
        name: "kubectl",
        category: "Infrastructure",
        unix_executables: &["kubectl"],
        windows_executables: &["kubectl.exe"],
        version_args: &["version", "--client"],
        version_pattern: r"v([0-9][0-9.]*)",
        update_check: true,
        path_hints: &["kube", "kubernetes"],
    },
    ToolSpec {
        id: "terraform",
        name: "Terraform",
        category: "Infrastructure",
        unix_executables: &["terraform"],
        windows_executables: &["terraform.exe"],
        version_args: &["--version"],
        version_pattern: r"Terraform v([0-9][0-9.]*)",
        update_check: true,
        path_hints: &["terraform", "hashicorp"],
    },
    ToolSpec {
        id: "vscode",
        name: "Visual Studio Code",
        category: "Editor",
        unix_executables: &["code"],
        windows_executables: &["code.cmd", "Code.exe"],
        version_args: &["--version"],
        version_pattern: r"([0-9][0-9.]*)",
        update_check: true,
        path_hints: &["VS Code", "vscode", "Visual Studio Code"],
    },
    ToolSpec {
        id: "gcc",
        name: "GCC",
        category: "Compiler",
        unix_executables: &["gcc"],
        windows_executables: &["gcc.exe"],
        version_args: &["--version"],
        version_pattern: r"gcc[^\n]*?\s([0-9]+\.[0-9][0-9.]*)",
        update_check: false,
        path_hints: &["gcc", "mingw"],
    },
    ToolSpec {
        id: "clang",
        name: "Clang",
        category: "Compiler",
        unix_executables: &["clang"],
        windows_executables: &["clang.exe"],
        version_args: &["--version"],
        version_pattern: r"clang version ([0-9][0-9.]*)",
        update_check: false,
        path_hints: &["llvm", "clang"],
    },
    ToolSpec {
        id: "make",
        name: "Make",
        category: "Build Tool",
        unix_executables: &["make", "gmake"],
        windows_executables: &["make.exe", "mingw32-make.exe"],
        version_args: &["--version"],
        version_pattern: r"GNU Make ([0-9][0-9.]*)",
        update_check: false,
        path_hints: &[],
    },
    ToolSpec {
        id: "cmake",
        name: "CMake",
        category: "Build Tool",
        unix_executables: &["cmake"],
        windows_executables: &["cmake.exe"],
        version_args: &["--version"],
        version_pattern: r"cmake version ([0-9][0-9.]*)",
        update_check: true,
        path_hints: &["cmake", "CMake"],
    },
    ToolSpec {
        id: "maven",
        name: "Maven",
        category: "Build Tool",
        unix_executables: &["mvn"],
        windows_executables: &["mvn.cmd", "mvn.bat"],
        version_args: &["--version"],
        version_pattern: r"Apache Maven ([0-9][0-9.]*)",
        update_check: false,
        path_hints: &["maven", "m2"],
    },
    ToolSpec {
        id: "gradle",
        name: "Gradle",
        category: "Build Tool",
        unix_executables: &["gradle"],
        windows_executables: &["gradle.bat"],
        version_args: &["--version"],
        version_pattern: r"Gradle ([0-9][0-9.]*)",
        update_check: false,
        path_hints: &["gradle"],
    },
    ToolSpec {
        id: "php",
        name: "PHP",
        category: "Language",
        unix_executables: &["php"],
        windows_executables: &["php.exe"],
        version_args: &["--version"],
        version_pattern: r"PHP ([0-9][0-9.]*)",
        update_check: true,
        path_hints: &["php"],
    },
    ToolSpec {
        id: "dotnet",
        name: ".NET SDK",
        category: "SDK",
        unix_executables: &["dotnet"],
        windows_executables: &["dotnet.exe"],
        version_args: &["--version"],
        version_pattern: r"([0-9][0-9.]*)",
        update_check: false,
        path_hints: &["dotnet", ".NET"],
    },
];

/// Look up a catalog entry by its identifier.
pub fn find_by_id(id: &str) -> Option<&'static ToolSpec> {
    TOOL_CATALOG.iter().find(|spec| spec.id == id)
}

/// Look up a catalog entry by its canonical display name.
pub fn find_by_name<'a>(catalog: &'a [ToolSpec], name: &str) -> Option<&'a ToolSpec> {
    catalog.iter().find(|spec| spec.name == name)
}
