use super::{CardBody, CardEntry, CardGridPage, CardLink, CategoryChoice, DisclosureStyle};

const GITHUB: &str = "https://github.com/";

const CATEGORIES: &[CategoryChoice] = &[
    CategoryChoice { id: "all", label: "All", color: "#00d4ff" },
    CategoryChoice { id: "iot", label: "IoT", color: "#00ff7f" },
    CategoryChoice { id: "web", label: "Web", color: "#00d4ff" },
    CategoryChoice { id: "mobile", label: "Mobile", color: "#ff6b6b" },
    CategoryChoice { id: "fullstack", label: "Full Stack", color: "#ffd93d" },
];

pub const PROJECTS: CardGridPage = CardGridPage {
    title: "PROJECT.PORTFOLIO",
    subtitle: "// Interactive selection of my development work",
    style: DisclosureStyle::Inline,
    categories: CATEGORIES,
    entries: &[
        CardEntry {
            id: "agrosense",
            title: "Smart AgroSense",
            subtitle: Some("LoRa-based smart irrigation and remote pump control"),
            summary: "ESP32 soil moisture sensing combined with live weather data to \
                      optimize irrigation, with LoRa remote pump control and a web dashboard.",
            body: CardBody::List(&[
                "ESP32 microcontroller integration",
                "Soil moisture sensor network",
                "Real-time weather data processing",
                "LoRa long-range communication",
                "Remote water pump control",
            ]),
            tags: &["ESP32", "LoRa", "HTML", "Sensors", "Weather API"],
            accent_color: "#00ff7f",
            icon: "\u{1F33E}",
            category: "iot",
            links: &[
                CardLink { label: "GitHub", url: GITHUB },
                CardLink { label: "Demo", url: "#" },
            ],
        },
        CardEntry {
            id: "emergigo",
            title: "EmergiGo",
            subtitle: None,
            summary: "Traffic signal control that prioritizes emergency vehicles and \
                      adapts to vehicle density.",
            body: CardBody::List(&[
                "Emergency vehicle detection",
                "Traffic density monitoring",
                "Dynamic signal control",
                "Priority clearance for emergencies",
            ]),
            tags: &["React", "Node.js", "GPS API", "Real-time DB"],
            accent_color: "#ff6b6b",
            icon: "\u{1F691}",
            category: "mobile",
            links: &[
                CardLink { label: "GitHub", url: GITHUB },
                CardLink { label: "Demo", url: "#" },
            ],
        },
        CardEntry {
            id: "streamflix",
            title: "StreamFlix",
            subtitle: None,
            summary: "Streaming-service style responsive frontend with dynamic movie browsing.",
            body: CardBody::List(&[
                "Responsive, mobile-first layout",
                "Movie database integration",
                "Dynamic browsing and watchlist",
            ]),
            tags: &["React", "CSS3", "JavaScript", "API Integration"],
            accent_color: "#00d4ff",
            icon: "\u{1F3A5}",
            category: "web",
            links: &[
                CardLink { label: "GitHub", url: GITHUB },
                CardLink { label: "Demo", url: "#" },
            ],
        },
        CardEntry {
            id: "grievance",
            title: "College Grievance App",
            subtitle: None,
            summary: "MERN application for student grievances with complaint tracking, \
                      an admin dashboard and notifications.",
            body: CardBody::List(&[
                "Student complaint portal",
                "Multi-level approval workflow",
                "Status tracking and notifications",
                "JWT authentication with role-based access",
            ]),
            tags: &["MongoDB", "Express.js", "React", "Node.js"],
            accent_color: "#ffd93d",
            icon: "\u{1F3EB}",
            category: "fullstack",
            links: &[
                CardLink { label: "GitHub", url: GITHUB },
                CardLink { label: "Demo", url: "#" },
            ],
        },
    ],
};
