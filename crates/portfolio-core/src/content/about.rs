use super::{CardBody, CardEntry, CardGridPage, CategoryChoice, DisclosureStyle};

const CATEGORIES: &[CategoryChoice] = &[
    CategoryChoice { id: "all", label: "All Systems", color: "#00d4ff" },
    CategoryChoice { id: "personal", label: "Personal", color: "#ff6b6b" },
    CategoryChoice { id: "technical", label: "Technical", color: "#00ff7f" },
    CategoryChoice { id: "academic", label: "Academic", color: "#00d4aa" },
    CategoryChoice { id: "professional", label: "Professional", color: "#9d4edd" },
];

/// Morphing About page with category filter.
pub const ABOUT: CardGridPage = CardGridPage {
    title: "System Profile",
    subtitle: "Personal data fragments reconstructing... Select a pattern to access details.",
    style: DisclosureStyle::Inline,
    categories: CATEGORIES,
    entries: &[
        CardEntry {
            id: "core_functions",
            title: "Core Functions",
            subtitle: None,
            summary: "Primary operational parameters and system capabilities",
            body: CardBody::List(&[
                "Full-stack development on the MERN stack",
                "IoT integration: ESP32, Arduino, sensor networks",
                "Databases: MongoDB, MySQL, Firebase",
                "Version control and collaborative development with Git",
                "Analytical problem solving and debugging",
            ]),
            tags: &["mern", "iot"],
            accent_color: "#00d4ff",
            icon: "\u{2699}",
            category: "technical",
            links: &[],
        },
        CardEntry {
            id: "technical_specs",
            title: "Technical Specifications",
            subtitle: None,
            summary: "Hardware and software compatibility matrix",
            body: CardBody::List(&[
                "Languages: JavaScript, Python, PHP, C++",
                "Frontend: React, Vue, HTML5, CSS3",
                "Backend: Node.js, Express, REST APIs",
                "IoT platforms: ESP32, Arduino, Raspberry Pi",
                "Operating systems: Windows, Linux",
            ]),
            tags: &["languages", "frameworks"],
            accent_color: "#00ff7f",
            icon: "\u{1F527}",
            category: "technical",
            links: &[],
        },
        CardEntry {
            id: "personal_data",
            title: "Personal Data",
            subtitle: None,
            summary: "Background information",
            body: CardBody::List(&[
                "Location: Karnataka, India",
                "Education: BCA graduate with distinction",
                "Languages: English, Hindi, Kannada",
                "Interests: IoT, web development, technology innovation",
            ]),
            tags: &["about"],
            accent_color: "#ff6b6b",
            icon: "\u{1F464}",
            category: "personal",
            links: &[],
        },
        CardEntry {
            id: "mission_statement",
            title: "Mission Statement",
            subtitle: None,
            summary: "Primary objectives and operational directives",
            body: CardBody::List(&[
                "Build IoT solutions for real-world problems",
                "Create user-centric web applications",
                "Bridge hardware and software integration",
                "Contribute to open source",
            ]),
            tags: &["goals"],
            accent_color: "#ffa500",
            icon: "\u{1F3AF}",
            category: "professional",
            links: &[],
        },
        CardEntry {
            id: "current_status",
            title: "Current Status",
            subtitle: None,
            summary: "Active processes and ongoing operations",
            body: CardBody::List(&[
                "Status: active development mode",
                "Role: full-stack developer intern",
                "Focus: MERN stack and IoT integration",
                "Next objective: advanced React and IoT specialization",
            ]),
            tags: &["now"],
            accent_color: "#9d4edd",
            icon: "\u{1F4CA}",
            category: "professional",
            links: &[],
        },
        CardEntry {
            id: "education_matrix",
            title: "Education Matrix",
            subtitle: None,
            summary: "Academic credentials and learning achievements",
            body: CardBody::List(&[
                "Bachelor of Computer Applications, 2025",
                "Pre-University Course (Science), 2022",
                "Secondary School Leaving Certificate, 2020",
                "Specialized training: MERN stack, IoT development",
            ]),
            tags: &["education"],
            accent_color: "#00d4aa",
            icon: "\u{1F393}",
            category: "academic",
            links: &[],
        },
    ],
};

/// Classic About page: four cards, each opening a popup overlay.
pub const ABOUT_CLASSIC: CardGridPage = CardGridPage {
    title: "About Me",
    subtitle: "Select a card to open its details.",
    style: DisclosureStyle::Popup,
    categories: &[],
    entries: &[
        CardEntry {
            id: "core",
            title: "Core",
            subtitle: None,
            summary: "Who I am",
            body: CardBody::Text(
                "A developer who enjoys working where hardware meets software, \
                 from sensor networks to the dashboards that visualize them.",
            ),
            tags: &[],
            accent_color: "#00d4ff",
            icon: "\u{1F464}",
            category: "personal",
            links: &[],
        },
        CardEntry {
            id: "tech",
            title: "Tech",
            subtitle: None,
            summary: "What I build with",
            body: CardBody::Text(
                "React and Node.js on the web, ESP32 and LoRa in the field, \
                 MongoDB and MySQL underneath.",
            ),
            tags: &[],
            accent_color: "#00ff7f",
            icon: "\u{1F4BB}",
            category: "technical",
            links: &[],
        },
        CardEntry {
            id: "mission",
            title: "Mission",
            subtitle: None,
            summary: "What drives me",
            body: CardBody::Text(
                "Practical, efficient technology that solves problems people \
                 actually have.",
            ),
            tags: &[],
            accent_color: "#ffa500",
            icon: "\u{1F3AF}",
            category: "professional",
            links: &[],
        },
        CardEntry {
            id: "status",
            title: "Status",
            subtitle: None,
            summary: "What I am doing now",
            body: CardBody::Text("Interning as a full-stack and IoT developer."),
            tags: &[],
            accent_color: "#9d4edd",
            icon: "\u{1F4CA}",
            category: "professional",
            links: &[],
        },
    ],
};
