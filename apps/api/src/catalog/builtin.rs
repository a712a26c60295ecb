// Built-in role definitions served when no ROLE_CATALOG_PATH is configured.

pub struct BuiltinRole {
    pub name: &'static str,
    pub skills: &'static [&'static str],
    pub description: &'static str,
}

pub const BUILTIN_ROLES: &[BuiltinRole] = &[
    BuiltinRole {
        name: "Backend Developer",
        skills: &[
            "Java",
            "Spring Boot",
            "REST",
            "MySQL",
            "Docker",
            "Git",
            "Microservices",
            "Python",
            "AWS",
            "Kubernetes",
        ],
        description: r#"
        Backend Developer should know Java, Spring Boot,
        REST APIs, MySQL, Docker, Git, Microservices, Python, AWS, and Kubernetes.
        We are looking for strong system design principles and database management.
        "#,
    },
    BuiltinRole {
        name: "Frontend Developer",
        skills: &[
            "HTML",
            "CSS",
            "JavaScript",
            "React",
            "Redux",
            "TypeScript",
            "Tailwind",
            "Vite",
        ],
        description: r#"
        Frontend Developer should be proficient in HTML, CSS, JavaScript, React,
        Redux, TypeScript, and modern build tools like Vite. Experience with UI libraries
        like Tailwind CSS is a huge plus.
        "#,
    },
    BuiltinRole {
        name: "Full Stack Developer",
        skills: &[
            "JavaScript",
            "React",
            "Node.js",
            "Express",
            "MongoDB",
            "SQL",
            "Git",
            "Docker",
            "AWS",
        ],
        description: r#"
        Full Stack Developer requires expertise across the stack. Key skills include
        JavaScript, React, Node.js, Express, databases like MongoDB and SQL, along
        with version control (Git) and deployment (Docker, AWS).
        "#,
    },
    BuiltinRole {
        name: "Data Scientist",
        skills: &[
            "Python",
            "R",
            "SQL",
            "Machine Learning",
            "Pandas",
            "Scikit-Learn",
            "TensorFlow",
            "Data Visualization",
        ],
        description: r#"
        Data Scientist should be an expert in Python or R for data analysis.
        Requires strong SQL skills, experience with Machine Learning models using
        Scikit-Learn or TensorFlow, and manipulating data with Pandas.
        "#,
    },
];
