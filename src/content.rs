//! Static copy for the landing page.

pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub struct Course {
    pub title: &'static str,
    pub duration: &'static str,
    pub summary: &'static str,
}

pub struct Internship {
    pub title: &'static str,
    pub company: &'static str,
    pub category: &'static str,
    pub location: &'static str,
    pub stipend: &'static str,
}

/// `(value, label)` pairs for selects and filter buttons.
pub type Choice = (&'static str, &'static str);

pub const HERO_CARDS: &[&str] = &["📈 Track applications", "🎓 Learn by building", "💼 Land the role"];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "🧭",
        title: "Guided Tracks",
        text: "Structured learning paths from first commit to production project.",
    },
    Highlight {
        icon: "🤝",
        title: "Industry Mentors",
        text: "Weekly reviews with engineers who hire interns themselves.",
    },
    Highlight {
        icon: "📋",
        title: "Application Tracker",
        text: "Every internship you apply to, with status and follow-ups in one place.",
    },
    Highlight {
        icon: "🏅",
        title: "Verified Certificates",
        text: "Project-based certificates employers can check online.",
    },
];

pub const COURSES: &[Course] = &[
    Course {
        title: "Full Stack Web Development",
        duration: "12 weeks",
        summary: "HTML, CSS, JavaScript, APIs and deployment.",
    },
    Course {
        title: "AI & Machine Learning",
        duration: "10 weeks",
        summary: "Python, data wrangling, models and evaluation.",
    },
    Course {
        title: "Embedded Systems & IoT",
        duration: "8 weeks",
        summary: "Microcontrollers, sensors and connected devices.",
    },
    Course {
        title: "Digital Marketing",
        duration: "6 weeks",
        summary: "SEO, content, analytics and paid campaigns.",
    },
];

pub const INTERNSHIPS: &[Internship] = &[
    Internship {
        title: "Frontend Developer Intern",
        company: "PixelForge",
        category: "webdev",
        location: "Remote",
        stipend: "₹10,000 / month",
    },
    Internship {
        title: "Machine Learning Intern",
        company: "DataNest",
        category: "ai",
        location: "Bengaluru",
        stipend: "₹15,000 / month",
    },
    Internship {
        title: "IoT Hardware Intern",
        company: "CircuitWorks",
        category: "electronics",
        location: "Pune",
        stipend: "₹12,000 / month",
    },
    Internship {
        title: "Backend Developer Intern",
        company: "StackLane",
        category: "webdev",
        location: "Hyderabad",
        stipend: "₹12,000 / month",
    },
    Internship {
        title: "PCB Design Intern",
        company: "VoltLabs",
        category: "electronics",
        location: "Noida",
        stipend: "₹8,000 / month",
    },
    Internship {
        title: "Growth Marketing Intern",
        company: "BrightReach",
        category: "marketing",
        location: "Remote",
        stipend: "₹7,000 / month",
    },
];

pub const FILTERS: &[Choice] = &[
    ("all", "All"),
    ("webdev", "Web Development"),
    ("ai", "AI / ML"),
    ("electronics", "Electronics"),
    ("marketing", "Marketing"),
];

pub const COURSE_CHOICES: &[Choice] = &[
    ("webdev", "Full Stack Web Development"),
    ("ai", "AI & Machine Learning"),
    ("electronics", "Embedded Systems & IoT"),
    ("marketing", "Digital Marketing"),
];

pub const INTEREST_CHOICES: &[Choice] = &[
    ("webdev", "Web Development"),
    ("ai", "AI / ML"),
    ("electronics", "Electronics"),
    ("marketing", "Marketing"),
    ("placement", "Internship Placement"),
];

pub const TIME_CHOICES: &[Choice] = &[
    ("morning", "Morning (9 AM - 12 PM)"),
    ("afternoon", "Afternoon (12 PM - 4 PM)"),
    ("evening", "Evening (4 PM - 8 PM)"),
];

pub fn internship_tags() -> impl Iterator<Item = &'static str> {
    INTERNSHIPS.iter().map(|internship| internship.category)
}
