use super::{Certification, EducationEntry};

pub const DEGREES: &[EducationEntry] = &[
    EducationEntry {
        degree: "Bachelor of Computer Applications (BCA)",
        institution: "College of Commerce (Autonomous)",
        duration: "2022 - 2025",
        description: "Programming, web development, database management and \
                      emerging technologies, with a focus on project-based learning.",
        subjects: &[
            "Python Programming",
            "C Programming Language",
            "Web Technologies",
            "Database Management Systems",
            "Data Structures & Algorithms",
            "Software Engineering",
            "Computer Networks",
            "Object-Oriented Programming",
        ],
    },
    EducationEntry {
        degree: "Pre-University Course (PUC) - Science",
        institution: "PU College",
        duration: "2020 - 2022",
        description: "Physics, Chemistry, Mathematics and Biology.",
        subjects: &["Mathematics", "Physics", "Chemistry", "Biology"],
    },
    EducationEntry {
        degree: "Secondary School Leaving Certificate (SSLC)",
        institution: "High School",
        duration: "2019 - 2020",
        description: "Where the interest in technology and programming started.",
        subjects: &["Mathematics", "Science", "Social Studies", "English", "Kannada", "Hindi"],
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification { name: "Python 101 for Data Science", issuer: "Cognitive Class", date: "Aug 2024" },
    Certification { name: "C Programming Language", issuer: "Tuition Center", date: "May 2023" },
    Certification { name: "IoT & Embedded Systems", issuer: "College Projects", date: "2025" },
    Certification { name: "Web Development Fundamentals", issuer: "Self-Learning", date: "2025" },
    Certification { name: "MERN Stack Development", issuer: "Internship Training", date: "2025" },
];
