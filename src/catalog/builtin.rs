//! The compiled-in license dataset

use super::license::{Category, License};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build the built-in license list in display order
pub(super) fn licenses() -> Vec<License> {
    vec![
        License {
            id: "mit".to_string(),
            name: "MIT License".to_string(),
            short_name: "MIT".to_string(),
            category: Category::Permissive,
            freedom_level: 95,
            description: "One of the most permissive and popular licenses. Allows commercial \
                          use, modification and distribution with minimal restrictions."
                .to_string(),
            pros: strings(&[
                "Very short and simple",
                "Highly permissive",
                "Compatible with almost every other license",
                "Unrestricted commercial use",
                "Does not require disclosing source code",
            ]),
            cons: strings(&[
                "No explicit patent grant",
                "No trademark protection",
                "Little protection for the original authors",
            ]),
            key_points: strings(&[
                "The copyright notice must be included",
                "Software is provided \"as is\" without warranty",
                "Allows sublicensing under other terms",
            ]),
            compatibility: "Compatible with GPL, Apache, BSD and most other licenses".to_string(),
            examples: strings(&["React", "Node.js", "jQuery", "Rails", ".NET Core"]),
        },
        License {
            id: "apache".to_string(),
            name: "Apache License 2.0".to_string(),
            short_name: "Apache 2.0".to_string(),
            category: Category::Permissive,
            freedom_level: 90,
            description: "Permissive license with an explicit patent grant. Popular in \
                          enterprise projects."
                .to_string(),
            pros: strings(&[
                "Explicit patent protection",
                "Allows commercial use",
                "Allows sublicensing",
                "Well established in corporate environments",
                "Requires documenting significant changes",
            ]),
            cons: strings(&[
                "More complex than MIT",
                "Incompatible with GPLv2",
                "Requires more change documentation",
            ]),
            key_points: strings(&[
                "Grants an explicit patent license",
                "Modified files must carry a change notice",
                "Allows shipping a NOTICE file",
            ]),
            compatibility: "Compatible with GPLv3, MIT, BSD. Incompatible with GPLv2".to_string(),
            examples: strings(&[
                "Android",
                "Apache HTTP Server",
                "Kubernetes",
                "Swift",
                "TensorFlow",
            ]),
        },
        License {
            id: "gpl3".to_string(),
            name: "GNU General Public License v3".to_string(),
            short_name: "GPL-3.0".to_string(),
            category: Category::StrongCopyleft,
            freedom_level: 70,
            description: "Strong copyleft license requiring derivative works to be released \
                          as open source under the GPL as well."
                .to_string(),
            pros: strings(&[
                "Guarantees the software stays free",
                "Protects the freedoms of end users",
                "Anti-tivoization protection",
                "Better compatibility than GPLv2",
                "Patent protection",
            ]),
            cons: strings(&[
                "Cannot be used in proprietary software",
                "May limit commercial adoption",
                "Legal complexity",
                "Incompatible with Apple's App Store",
            ]),
            key_points: strings(&[
                "Derived code must be GPL",
                "Source code must be provided",
                "Includes anti-tivoization terms",
                "License terminates on patent aggression",
            ]),
            compatibility: "Compatible with Apache 2.0, LGPL. Incompatible with proprietary \
                            licenses"
                .to_string(),
            examples: strings(&["Linux Kernel (GPLv2)", "GIMP", "Bash", "GCC", "WordPress"]),
        },
        License {
            id: "lgpl".to_string(),
            name: "GNU Lesser General Public License".to_string(),
            short_name: "LGPL".to_string(),
            category: Category::WeakCopyleft,
            freedom_level: 80,
            description: "More permissive variant of the GPL that allows linking from \
                          proprietary software."
                .to_string(),
            pros: strings(&[
                "Allows linking from proprietary software",
                "Keeps the library code free",
                "More flexible than the GPL",
                "Well suited to libraries",
            ]),
            cons: strings(&[
                "More complex than permissive licenses",
                "Less protection than the full GPL",
                "Obligations can be confusing",
            ]),
            key_points: strings(&[
                "Changes to the library must be LGPL",
                "Applications using the library may be proprietary",
                "Must allow relinking against the library",
            ]),
            compatibility: "Compatible with GPL, allows linking with proprietary code".to_string(),
            examples: strings(&[
                "Qt (open source edition)",
                "GTK+",
                "GNU C Library",
                "FFmpeg",
            ]),
        },
        License {
            id: "bsd".to_string(),
            name: "BSD 3-Clause License".to_string(),
            short_name: "BSD-3".to_string(),
            category: Category::Permissive,
            freedom_level: 93,
            description: "Permissive license requiring attribution and forbidding use of the \
                          project name for promotion."
                .to_string(),
            pros: strings(&[
                "Very permissive",
                "Simple and clear",
                "Protects the project name",
                "Allows commercial use",
            ]),
            cons: strings(&[
                "No patent protection",
                "No warranty clause",
                "The non-endorsement clause can be a problem",
            ]),
            key_points: strings(&[
                "The copyright notice must be kept",
                "The project name may not be used for promotion without permission",
                "No warranty of any kind",
            ]),
            compatibility: "Highly compatible with most licenses".to_string(),
            examples: strings(&["FreeBSD", "NetBSD", "Nginx", "Pure-FTPd"]),
        },
        License {
            id: "mpl".to_string(),
            name: "Mozilla Public License 2.0".to_string(),
            short_name: "MPL-2.0".to_string(),
            category: Category::WeakCopyleft,
            freedom_level: 75,
            description: "Weak, file-level copyleft. MPL files must stay MPL but can be \
                          combined with proprietary code."
                .to_string(),
            pros: strings(&[
                "File-level copyleft",
                "Can be mixed with proprietary code",
                "Patent protection",
                "Compatible with GPL and LGPL",
            ]),
            cons: strings(&[
                "Complex to track in large projects",
                "Less well known than GPL or MIT",
                "Requires tracking which files are MPL",
            ]),
            key_points: strings(&[
                "Copyleft applies only to MPL files",
                "Modified MPL files must remain MPL",
                "Can be combined with files under other licenses",
            ]),
            compatibility: "Compatible with GPL, LGPL and Apache".to_string(),
            examples: strings(&["Firefox", "Thunderbird", "LibreOffice (partially)"]),
        },
    ]
}
