use {
    bevy::prelude::*,
    serde::{Deserialize, Serialize},
};

pub struct SkillComponentsPlugin;

impl Plugin for SkillComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SkillCategory>()
            .register_type::<SkillPosition>()
            .register_type::<SkillRecord>()
            .register_type::<AdjacencyPolicy>()
            .register_type::<AdjacencyRule>()
            .register_type::<QuizQuestion>();
    }
}

/// Default per-axis distance under which two skills count as neighbours.
pub const DEFAULT_PROXIMITY: f32 = 15.0;

/// Closed set of skill groupings shown as the four corners of the tree.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Design,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Design,
        SkillCategory::Other,
    ];

    /// Visual descriptor for this category, resolved by whatever renders the tree.
    pub fn style(self) -> CategoryStyle {
        match self {
            SkillCategory::Frontend => CategoryStyle {
                label: "Frontend",
                accent: Color::srgb(0.97, 0.44, 0.44),
                bar: Color::srgb(0.94, 0.27, 0.27),
            },
            SkillCategory::Backend => CategoryStyle {
                label: "Backend",
                accent: Color::srgb(0.98, 0.80, 0.08),
                bar: Color::srgb(0.92, 0.70, 0.03),
            },
            SkillCategory::Design => CategoryStyle {
                label: "Design",
                accent: Color::srgb(0.13, 0.83, 0.93),
                bar: Color::srgb(0.02, 0.71, 0.83),
            },
            SkillCategory::Other => CategoryStyle {
                label: "Other",
                accent: Color::srgb(0.29, 0.87, 0.50),
                bar: Color::srgb(0.13, 0.77, 0.37),
            },
        }
    }
}

/// Colors and label a renderer uses for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryStyle {
    pub label: &'static str,
    /// Text color of an unlocked node.
    pub accent: Color,
    /// Fill color of the proficiency bar.
    pub bar: Color,
}

/// Node coordinates in the normalized 0..=100 plane.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SkillPosition {
    pub x: f32,
    pub y: f32,
}

impl SkillPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True if both axes differ by at most `threshold`.
    pub fn within(&self, other: &SkillPosition, threshold: f32) -> bool {
        (self.x - other.x).abs() <= threshold && (self.y - other.y).abs() <= threshold
    }

    pub fn is_in_plane(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

/// One entry of the skill catalog.
///
/// The unlock flag is monotonic: the only mutator is [`SkillRecord::mark_unlocked`].
#[derive(Reflect, Debug, Clone, PartialEq)]
pub struct SkillRecord {
    /// Unique, stable identifier (e.g. "react", "sql").
    pub id: String,
    /// Display label.
    pub name: String,
    pub category: SkillCategory,
    /// Cosmetic proficiency percentage, nothing computes with it.
    pub level: u8,
    pub position: SkillPosition,
    unlocked: bool,
}

impl SkillRecord {
    /// Creates a locked record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: SkillCategory,
        level: u8,
        position: SkillPosition,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            level,
            position,
            unlocked: false,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Marks the record unlocked. Returns `false` if it already was.
    pub fn mark_unlocked(&mut self) -> bool {
        let was_locked = !self.unlocked;
        self.unlocked = true;
        was_locked
    }
}

/// How "next to" is interpreted when deciding whether a click may unlock a skill.
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdjacencyPolicy {
    /// Same category OR spatially close.
    #[default]
    Either,
    /// Same category AND spatially close.
    Both,
    CategoryOnly,
    ProximityOnly,
}

#[derive(Reflect, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjacencyRule {
    pub policy: AdjacencyPolicy,
    /// Maximum per-axis distance for the proximity check.
    pub proximity: f32,
}

impl Default for AdjacencyRule {
    fn default() -> Self {
        Self {
            policy: AdjacencyPolicy::default(),
            proximity: DEFAULT_PROXIMITY,
        }
    }
}

impl AdjacencyRule {
    pub fn new(policy: AdjacencyPolicy) -> Self {
        Self {
            policy,
            ..default()
        }
    }

    pub fn is_adjacent(&self, a: &SkillRecord, b: &SkillRecord) -> bool {
        let same_category = a.category == b.category;
        let near = a.position.within(&b.position, self.proximity);

        match self.policy {
            AdjacencyPolicy::Either => same_category || near,
            AdjacencyPolicy::Both => same_category && near,
            AdjacencyPolicy::CategoryOnly => same_category,
            AdjacencyPolicy::ProximityOnly => near,
        }
    }
}

/// What a node in the tree currently offers the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Unlocked,
    /// Locked, but a click will unlock it.
    Unlockable,
    Locked,
}

impl NodeStatus {
    /// Caption shown under a node. Unlocked nodes show their level instead.
    pub fn label(&self, record: &SkillRecord) -> String {
        match self {
            NodeStatus::Unlocked => format!("{}%", record.level),
            NodeStatus::Unlockable => "Click to unlock".to_string(),
            NodeStatus::Locked => "Locked".to_string(),
        }
    }
}

/// A quiz question guarding exactly one skill.
#[derive(Reflect, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Skill unlocked by a correct answer.
    pub skill_id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl QuizQuestion {
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, category: SkillCategory, x: f32, y: f32) -> SkillRecord {
        SkillRecord::new(id, id, category, 50, SkillPosition::new(x, y))
    }

    #[test]
    fn test_position_within_checks_both_axes() {
        let origin = SkillPosition::new(30.0, 20.0);

        assert!(origin.within(&SkillPosition::new(45.0, 35.0), 15.0));
        assert!(!origin.within(&SkillPosition::new(46.0, 20.0), 15.0));
        assert!(!origin.within(&SkillPosition::new(30.0, 36.0), 15.0));
    }

    #[test]
    fn test_adjacency_policies() {
        let react = record("react", SkillCategory::Frontend, 30.0, 20.0);
        // same category, far away
        let html = record("html", SkillCategory::Frontend, 15.0, 40.0);
        // other category, close by
        let figma = record("figma", SkillCategory::Design, 40.0, 30.0);
        // other category, far away
        let mongo = record("mongo", SkillCategory::Backend, 80.0, 30.0);

        let either = AdjacencyRule::new(AdjacencyPolicy::Either);
        assert!(either.is_adjacent(&react, &html));
        assert!(either.is_adjacent(&react, &figma));
        assert!(!either.is_adjacent(&react, &mongo));

        let both = AdjacencyRule::new(AdjacencyPolicy::Both);
        assert!(!both.is_adjacent(&react, &html));
        assert!(!both.is_adjacent(&react, &figma));

        let category = AdjacencyRule::new(AdjacencyPolicy::CategoryOnly);
        assert!(category.is_adjacent(&react, &html));
        assert!(!category.is_adjacent(&react, &figma));

        let proximity = AdjacencyRule::new(AdjacencyPolicy::ProximityOnly);
        assert!(!proximity.is_adjacent(&react, &html));
        assert!(proximity.is_adjacent(&react, &figma));
    }

    #[test]
    fn test_mark_unlocked_is_monotonic() {
        let mut skill = record("sql", SkillCategory::Backend, 65.0, 40.0);
        assert!(!skill.is_unlocked());

        assert!(skill.mark_unlocked());
        assert!(!skill.mark_unlocked());
        assert!(skill.is_unlocked());
    }

    #[test]
    fn test_node_status_labels() {
        let skill = record("git", SkillCategory::Other, 60.0, 70.0);

        assert_eq!(NodeStatus::Unlocked.label(&skill), "50%");
        assert_eq!(NodeStatus::Unlockable.label(&skill), "Click to unlock");
        assert_eq!(NodeStatus::Locked.label(&skill), "Locked");
    }

    #[test]
    fn test_every_category_has_distinct_style() {
        let labels: Vec<_> = SkillCategory::ALL.iter().map(|c| c.style().label).collect();
        assert_eq!(labels, ["Frontend", "Backend", "Design", "Other"]);
        assert_ne!(
            SkillCategory::Frontend.style().accent,
            SkillCategory::Backend.style().accent
        );
    }

    #[test]
    fn test_quiz_answer_is_exact_match() {
        let question = QuizQuestion {
            skill_id: "sql".into(),
            prompt: "Which clause filters rows?".into(),
            options: vec!["WHERE".into(), "ORDER BY".into()],
            answer: "WHERE".into(),
        };

        assert!(question.is_correct("WHERE"));
        assert!(!question.is_correct("where"));
        assert!(!question.is_correct("ORDER BY"));
    }
}
