use super::{CardBody, CardEntry, CardGridPage, CategoryChoice, DisclosureStyle};

const CATEGORIES: &[CategoryChoice] = &[
    CategoryChoice { id: "all", label: "All", color: "#00d4ff" },
    CategoryChoice { id: "current", label: "Current", color: "#00ff7f" },
];

pub const EXPERIENCE: CardGridPage = CardGridPage {
    title: "EXPERIENCE.LOG",
    subtitle: "Career timeline. Select an entry for details, Escape to close.",
    style: DisclosureStyle::Inline,
    categories: CATEGORIES,
    entries: &[
        CardEntry {
            id: "fullstack_intern",
            title: "Full Stack Development Intern",
            subtitle: Some("Software services company \u{2022} Feb 2025 - Mar 2025"),
            summary: "Built a college grievance management site with secure \
                      authentication and database-driven complaint handling.",
            body: CardBody::List(&[
                "Developed a grievance management system",
                "Implemented authentication and secure data handling",
                "Made the resolution process transparent",
            ]),
            tags: &["React.js", "Node.js", "Express.js", "MySQL"],
            accent_color: "#00d4ff",
            icon: "\u{1F4BC}",
            category: "current",
            links: &[],
        },
        CardEntry {
            id: "iot_intern",
            title: "IoT Developer Intern",
            subtitle: Some("Embedded systems company \u{2022} Feb 2025 - Apr 2025"),
            summary: "Developed a LoRa-based smart irrigation system with remote \
                      water pump control.",
            body: CardBody::List(&[
                "Built an ESP32 irrigation controller",
                "Implemented LoRa remote pump control",
                "Integrated real-time weather data",
                "Created a monitoring dashboard",
            ]),
            tags: &["ESP32", "LoRa", "HTML", "Sensors", "Weather API"],
            accent_color: "#00ff7f",
            icon: "\u{1F331}",
            category: "current",
            links: &[],
        },
        CardEntry {
            id: "additional",
            title: "Additional Projects",
            subtitle: Some("Independent \u{2022} ongoing"),
            summary: "Exploring new technologies and working on side projects.",
            body: CardBody::List(&[
                "Advanced IoT concepts",
                "New embedded systems",
                "Experiments with machine learning",
            ]),
            tags: &["IoT", "Embedded Systems", "AI"],
            accent_color: "#ffd93d",
            icon: "\u{1F504}",
            category: "current",
            links: &[],
        },
    ],
};
