use {
    crate::{SkillDefinition, SkillTreeDefinition},
    skill_components::{QuizQuestion, SkillCategory, SkillPosition},
};

fn skill(id: &str, name: &str, category: SkillCategory, level: u8, x: f32, y: f32) -> SkillDefinition {
    SkillDefinition {
        id: id.to_string(),
        name: name.to_string(),
        category,
        level,
        position: SkillPosition::new(x, y),
    }
}

fn question(skill_id: &str, prompt: &str, options: [&str; 4], answer: &str) -> QuizQuestion {
    QuizQuestion {
        skill_id: skill_id.to_string(),
        prompt: prompt.to_string(),
        options: options.iter().map(ToString::to_string).collect(),
        answer: answer.to_string(),
    }
}

pub(crate) fn definition() -> SkillTreeDefinition {
    use SkillCategory::*;

    SkillTreeDefinition {
        seed: "react".to_string(),
        skills: vec![
            skill("react", "React.js", Frontend, 90, 30.0, 20.0),
            skill("redux", "Redux", Frontend, 85, 20.0, 30.0),
            skill("js", "JavaScript", Frontend, 90, 40.0, 30.0),
            skill("html", "HTML5", Frontend, 95, 15.0, 40.0),
            skill("css", "CSS3", Frontend, 90, 25.0, 40.0),
            skill("tailwind", "Tailwind", Frontend, 85, 35.0, 40.0),
            skill("node", "Node.js", Backend, 80, 70.0, 20.0),
            skill("express", "Express.js", Backend, 75, 60.0, 30.0),
            skill("mongo", "MongoDB", Backend, 70, 80.0, 30.0),
            skill("sql", "SQL", Backend, 65, 65.0, 40.0),
            skill("figma", "Figma", Design, 75, 50.0, 60.0),
            skill("seo", "SEO", Other, 70, 40.0, 70.0),
            skill("git", "Git/GitHub", Other, 85, 60.0, 70.0),
        ],
        quiz: vec![
            question(
                "react",
                "Which hook keeps local state in a function component?",
                ["useState", "useMemo", "useRef", "useContext"],
                "useState",
            ),
            question(
                "redux",
                "What is the only way to change state in a Redux store?",
                ["Dispatch an action", "Mutate the store", "Call setState", "Reload the page"],
                "Dispatch an action",
            ),
            question(
                "js",
                "Which keyword declares a block-scoped variable that cannot be reassigned?",
                ["const", "var", "let", "static"],
                "const",
            ),
            question(
                "html",
                "Which element marks up the main navigation links of a page?",
                ["<nav>", "<menu>", "<links>", "<header>"],
                "<nav>",
            ),
            question(
                "css",
                "Which display value turns an element into a flex container?",
                ["flex", "block", "inline", "grid-flow"],
                "flex",
            ),
            question(
                "tailwind",
                "Which Tailwind class adds padding on all sides?",
                ["p-4", "m-4", "pad-4", "space-4"],
                "p-4",
            ),
            question(
                "node",
                "Which object holds the environment variables of a Node.js process?",
                ["process.env", "global.env", "require.env", "os.env"],
                "process.env",
            ),
            question(
                "express",
                "Which Express method registers middleware for every request?",
                ["app.use", "app.all", "app.listen", "app.route"],
                "app.use",
            ),
            question(
                "mongo",
                "What is a single record in a MongoDB collection called?",
                ["Document", "Row", "Tuple", "Node"],
                "Document",
            ),
            question(
                "sql",
                "Which clause filters rows before they are grouped?",
                ["WHERE", "HAVING", "ORDER BY", "LIMIT"],
                "WHERE",
            ),
            question(
                "figma",
                "What are reusable design elements called in Figma?",
                ["Components", "Layers", "Frames", "Plugins"],
                "Components",
            ),
            question(
                "seo",
                "Which tag provides the page summary search engines show in results?",
                ["meta description", "title alt", "link canonical", "h6"],
                "meta description",
            ),
            question(
                "git",
                "Which command records staged changes in the repository?",
                ["git commit", "git push", "git add", "git fetch"],
                "git commit",
            ),
        ],
        settings: None,
    }
}
