//! Tool-to-package name mappings.
//!
//! Package names rarely match tool identifiers — `python` is `python3` on
//! Debian and `Python.Python.3` in winget. An unmapped tool/manager pair
//! is a normal outcome, not an error.

/// Static mapping: tool id → (manager id, package name) pairs.
const TOOL_PACKAGE_MAP: &[(&str, &[(&str, &str)])] = &[
    (
        "python",
        &[
            ("apt", "python3"),
            ("dnf", "python3"),
            ("pacman", "python"),
            ("brew", "python"),
            ("winget", "Python.Python.3"),
            ("choco", "python"),
        ],
    ),
    (
        "git",
        &[
            ("apt", "git"),
            ("dnf", "git"),
            ("pacman", "git"),
            ("brew", "git"),
            ("winget", "Git.Git"),
            ("choco", "git"),
            ("scoop", "git"),
        ],
    ),
    (
        "node",
        &[
            ("apt", "nodejs"),
            ("dnf", "nodejs"),
            ("pacman", "nodejs"),
            ("brew", "node"),
            ("snap", "node"),
            ("winget", "OpenJS.NodeJS"),
            ("choco", "nodejs"),
        ],
    ),
    (
        "ruby",
        &[
            ("apt", "ruby-full"),
            ("dnf", "ruby"),
            ("pacman", "ruby"),
            ("brew", "ruby"),
            ("choco", "ruby"),
        ],
    ),
    (
        "go",
        &[
            ("apt", "golang-go"),
            ("dnf", "golang"),
            ("pacman", "go"),
            ("brew", "go"),
            ("snap", "go"),
            ("winget", "GoLang.Go"),
            ("choco", "golang"),
        ],
    ),
    (
        "docker",
        &[
            ("apt", "docker.io"),
            ("dnf", "docker"),
            ("pacman", "docker"),
            ("brew", "docker"),
            ("winget", "Docker.DockerDesktop"),
            ("choco", "docker-desktop"),
        ],
    ),
    (
        "kubectl",
        &[
            ("apt", "kubectl"),
            ("brew", "kubernetes-cli"),
            ("snap", "kubectl"),
            ("winget", "Kubernetes.kubectl"),
            ("choco", "kubernetes-cli"),
        ],
    ),
    (
        "terraform",
        &[
            ("brew", "terraform"),
            ("snap", "terraform"),
            ("winget", "Hashicorp.Terraform"),
            ("choco", "terraform"),
        ],
    ),
    (
        "vscode",
        &[
            ("snap", "code"),
            ("brew", "visual-studio-code"),
            ("winget", "Microsoft.VisualStudioCode"),
            ("choco", "vscode"),
        ],
    ),
    (
        "cmake",
        &[
            ("apt", "cmake"),
            ("dnf", "cmake"),
            ("pacman", "cmake"),
            ("brew", "cmake"),
            ("snap", "cmake"),
            ("winget", "Kitware.CMake"),
            ("choco", "cmake"),
        ],
    ),
    (
        "php",
        &[
            ("apt", "php"),
            ("dnf", "php"),
            ("pacman", "php"),
            ("brew", "php"),
            ("choco", "php"),
        ],
    ),
];

/// The package name for `tool_id` under `manager_id`, if mapped.
pub fn pm_package_name(tool_id: &str, manager_id: &str) -> Option<&'static str> {
    TOOL_PACKAGE_MAP
        .iter()
        .find(|(tool, _)| *tool == tool_id)
        .and_then(|(_, entries)| {
            entries
                .iter()
                .find(|(manager, _)| *manager == manager_id)
                .map(|(_, package)| *package)
        })
}
