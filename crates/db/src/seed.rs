//! Built-in seed data loaded at startup
//!
//! Profiles start with default gamification state. Badges are granted on top
//! of these records by the processor, which owns the award rules.

use chrono::{DateTime, Duration, Utc};
use common::models::{Feedback, Profile, Project, ProjectStatus, Role};

fn days_from_now(days: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(days)
}

struct ProjectSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    budget: f64,
    deadline_in_days: i64,
    category_icon: &'static str,
    client_id: &'static str,
    client: Option<(&'static str, &'static str)>,
    status: ProjectStatus,
    freelancer_id: Option<&'static str>,
}

impl ProjectSeed {
    fn build(self) -> Project {
        Project {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            budget: self.budget,
            deadline: days_from_now(self.deadline_in_days),
            category_icon: self.category_icon.to_string(),
            client_id: self.client_id.to_string(),
            client_name: self.client.map(|(name, _)| name.to_string()),
            client_avatar_url: self
                .client
                .map(|(_, tag)| format!("https://picsum.photos/40/40?random={}", tag)),
            status: self.status,
            freelancer_id: self.freelancer_id.map(str::to_string),
        }
    }
}

/// Completed work that seed feedback refers to
fn past_project(
    id: &'static str,
    title: &'static str,
    budget: f64,
    category_icon: &'static str,
    client_id: &'static str,
    freelancer_id: &'static str,
) -> Project {
    ProjectSeed {
        id,
        title,
        description: "...",
        budget,
        deadline_in_days: 0,
        category_icon,
        client_id,
        client: None,
        status: ProjectStatus::Completed,
        freelancer_id: Some(freelancer_id),
    }
    .build()
}

pub fn projects() -> Vec<Project> {
    let listed = [
        ProjectSeed {
            id: "1",
            title: "Build a Responsive E-commerce Website",
            description: "Need a modern e-commerce site with payment gateway integration (Stripe/PayPal). Must be mobile-friendly. Key requirements: Shopify integration or custom build, secure checkout, product filtering, user accounts.",
            budget: 5000.0,
            deadline_in_days: 10,
            category_icon: "ShoppingCart",
            client_id: "client-abc",
            client: Some(("Global Mart Inc.", "clientA")),
            status: ProjectStatus::Open,
            freelancer_id: None,
        },
        ProjectSeed {
            id: "2",
            title: "Develop a Mobile App for Task Management",
            description: "Create a cross-platform mobile app (iOS & Android) using React Native for managing daily tasks. Requirements: User authentication (Firebase Auth), task creation/editing/deletion, push notifications (Firebase Cloud Messaging), offline storage.",
            budget: 8000.0,
            deadline_in_days: 20,
            category_icon: "Smartphone",
            client_id: "client-def",
            client: Some(("Productivity Co.", "clientB")),
            status: ProjectStatus::Open,
            freelancer_id: None,
        },
        ProjectSeed {
            id: "3",
            title: "Design a Logo and Brand Identity",
            description: "Looking for a creative designer to craft a unique logo and comprehensive branding guidelines for a new tech startup. Deliverables: Logo files (vector SVG, PNG), color palette, typography guidelines, brand style guide document.",
            budget: 1500.0,
            deadline_in_days: 7,
            category_icon: "Palette",
            client_id: "client-ghi",
            client: Some(("Innovate Solutions", "clientC")),
            status: ProjectStatus::Completed,
            freelancer_id: Some("freelancer1"),
        },
        ProjectSeed {
            id: "4",
            title: "Write Blog Content for Tech Startup",
            description: "Need engaging, high-quality blog posts about AI, machine learning, and data science trends. 4 posts per month, approx. 1000-1500 words each. Requirements: SEO optimized (keywords provided), original content, target audience: tech professionals.",
            budget: 1000.0,
            deadline_in_days: 14,
            category_icon: "PenTool",
            client_id: "client-jkl",
            client: Some(("Future Tech Blog", "clientD")),
            status: ProjectStatus::InProgress,
            freelancer_id: Some("freelancerC"),
        },
        ProjectSeed {
            id: "5",
            title: "Data Analysis for Marketing Campaign",
            description: "Analyze marketing campaign data (Google Analytics, social media insights) to provide actionable insights on performance and ROI. Requires experience with SQL, Python (Pandas), and data visualization tools (Tableau/PowerBI). Deliverable: Detailed report with findings and recommendations.",
            budget: 3000.0,
            deadline_in_days: 12,
            category_icon: "BarChart",
            client_id: "client-mno",
            client: Some(("Ad Insights Ltd.", "clientE")),
            status: ProjectStatus::Open,
            freelancer_id: None,
        },
        ProjectSeed {
            id: "6",
            title: "Setup CI/CD Pipeline for NodeJS App",
            description: "Configure a continuous integration and deployment (CI/CD) pipeline using GitHub Actions and AWS (Elastic Beanstalk/ECR). App is a standard NodeJS/Express application. Requires experience with Docker, GitHub Actions YAML, and basic AWS services.",
            budget: 2000.0,
            deadline_in_days: 5,
            category_icon: "Cog",
            client_id: "client-pqr",
            client: Some(("DevOps Experts", "clientF")),
            status: ProjectStatus::Open,
            freelancer_id: None,
        },
    ];

    let mut projects: Vec<Project> = listed.into_iter().map(ProjectSeed::build).collect();
    projects.extend([
        past_project("projA", "Project A", 100.0, "Briefcase", "client1", "mock-user-id"),
        past_project("projB", "Project B", 200.0, "Briefcase", "client2", "mock-user-id"),
        past_project("projC", "Project C", 300.0, "Briefcase", "client1", "mock-user-id"),
        past_project("projD", "Project D - Logo Design", 400.0, "Palette", "client-ghi", "freelancer1"),
    ]);
    projects
}

fn profile(
    id: &str,
    name: &str,
    email: &str,
    bio: &str,
    skills: &[&str],
    avatar: Option<&str>,
) -> Profile {
    let mut p = Profile::new(id, name, email);
    p.bio = Some(bio.to_string());
    p.skills = skills.iter().map(|s| s.to_string()).collect();
    p.avatar_url = avatar.map(|tag| format!("https://picsum.photos/100/100?random={}", tag));
    p
}

/// Seed profiles with default gamification state
pub fn profiles() -> Vec<Profile> {
    vec![
        profile(
            "mock-user-id",
            "Alice Developer",
            "alice.dev@example.com",
            "Experienced full-stack web developer specializing in modern frontend frameworks (React/Next.js) and Node.js backends. Passionate about creating intuitive, performant, and accessible user interfaces. Familiar with cloud platforms like Firebase and Vercel.",
            &["React", "Next.js", "TypeScript", "Tailwind CSS", "Node.js", "Firebase"],
            Some("alice"),
        ),
        profile(
            "freelancer1",
            "Bob Designer",
            "bob.design@example.com",
            "Creative UI/UX designer with a strong focus on user-centered design principles. Proficient in Figma and Adobe Creative Suite. Experience in creating branding guidelines and visually appealing interfaces.",
            &["UI/UX Design", "Figma", "Adobe XD", "Brand Identity", "Logo Design", "Graphic Design"],
            Some("bob"),
        ),
        profile("freelancerA", "Charlie Coder", "charlie@example.com", "Data analyst.", &["Python", "Data Analysis", "SQL"], None),
        profile("freelancerB", "Diana DevOps", "diana@example.com", "DevOps Engineer.", &["AWS", "Docker", "CI/CD", "GitHub Actions"], None),
        profile("freelancerC", "Ethan Writer", "ethan@example.com", "Content writer.", &["Content Writing", "SEO", "Blog Writing"], None),
        profile("client-abc", "Global Mart Inc.", "contact@globalmart.com", "Retail company.", &[], None),
        profile("client-def", "Productivity Co.", "hello@prodco.com", "Software company.", &[], None),
        profile("client-ghi", "Innovate Solutions", "info@innovate.com", "Tech startup consulting.", &[], None),
        profile("client-jkl", "Future Tech Blog", "editor@futuretech.com", "Technology publication.", &[], None),
        profile("client-mno", "Ad Insights Ltd.", "analyze@adinsights.com", "Marketing analytics firm.", &[], None),
        profile("client-pqr", "DevOps Experts", "support@devopsexperts.com", "DevOps consulting agency.", &[], None),
        profile("client1", "Client One Inc.", "client1@example.com", "Client company.", &[], None),
        profile("client2", "Client Two Co.", "client2@example.com", "Another client company.", &[], None),
    ]
}

#[allow(clippy::too_many_arguments)]
fn review(
    id: &str,
    project_id: &str,
    author_id: &str,
    recipient_id: &str,
    rating: u8,
    comment: &str,
    days_ago: i64,
    author_role: Role,
) -> Feedback {
    Feedback {
        id: id.to_string(),
        project_id: project_id.to_string(),
        author_id: author_id.to_string(),
        recipient_id: recipient_id.to_string(),
        rating,
        comment: comment.to_string(),
        submitted_at: days_from_now(-days_ago),
        author_role,
    }
}

pub fn feedback() -> Vec<Feedback> {
    vec![
        review(
            "fb1",
            "projA",
            "client1",
            "mock-user-id",
            5,
            "Excellent work on Project A, Alice delivered ahead of schedule!",
            2,
            Role::Client,
        ),
        review(
            "fb2",
            "projB",
            "client2",
            "mock-user-id",
            4,
            "Good communication and quality results on Project B.",
            5,
            Role::Client,
        ),
        review(
            "fb3",
            "projC",
            "mock-user-id",
            "client1",
            5,
            "Great client (Client One Inc.), clear requirements and prompt payment for Project C.",
            10,
            Role::Freelancer,
        ),
        review(
            "fb4",
            "projD",
            "client-ghi",
            "freelancer1",
            5,
            "Bob did an amazing job designing our logo!",
            3,
            Role::Client,
        ),
        review(
            "cfb1",
            "1",
            "freelancerA",
            "client-abc",
            5,
            "Clear communication, paid promptly. A pleasure to work with Global Mart!",
            3,
            Role::Freelancer,
        ),
        review(
            "cfb2",
            "2",
            "freelancerB",
            "client-def",
            4,
            "Project scope was well-defined by Productivity Co. Some minor delays in providing assets.",
            15,
            Role::Freelancer,
        ),
    ]
}
