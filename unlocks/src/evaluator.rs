use {
    skill_components::{AdjacencyRule, NodeStatus},
    skill_resources::SkillCatalog,
};

/// Whether a click on `skill_id` would unlock it right now.
///
/// A locked skill is eligible when some other unlocked skill is adjacent to it under `rule`.
/// Unknown and already unlocked skills are never eligible.
pub fn is_eligible(catalog: &SkillCatalog, skill_id: &str, rule: &AdjacencyRule) -> bool {
    let Some(target) = catalog.get(skill_id) else {
        return false;
    };
    if target.is_unlocked() {
        return false;
    }

    catalog
        .iter()
        .filter(|skill| skill.id != target.id && skill.is_unlocked())
        .any(|unlocked| rule.is_adjacent(unlocked, target))
}

/// Ids of every skill a click would unlock, in catalog order.
pub fn eligible_skills<'a>(catalog: &'a SkillCatalog, rule: &AdjacencyRule) -> Vec<&'a str> {
    catalog
        .locked_ids()
        .filter(|id| is_eligible(catalog, id, rule))
        .collect()
}

pub fn node_status(catalog: &SkillCatalog, skill_id: &str, rule: &AdjacencyRule) -> Option<NodeStatus> {
    let skill = catalog.get(skill_id)?;

    let status = if skill.is_unlocked() {
        NodeStatus::Unlocked
    } else if is_eligible(catalog, skill_id, rule) {
        NodeStatus::Unlockable
    } else {
        NodeStatus::Locked
    };
    Some(status)
}

/// Pairs of unlocked skills joined by a line on the tree, each pair listed once.
///
/// Lines follow a looser rule than unlocking: same category, or horizontally within
/// `rule.proximity` regardless of vertical distance.
pub fn connections<'a>(catalog: &'a SkillCatalog, rule: &AdjacencyRule) -> Vec<(&'a str, &'a str)> {
    let unlocked: Vec<_> = catalog.iter().filter(|skill| skill.is_unlocked()).collect();

    let mut pairs = Vec::new();
    for (i, a) in unlocked.iter().enumerate() {
        for b in &unlocked[i + 1..] {
            let same_category = a.category == b.category;
            let in_column = (a.position.x - b.position.x).abs() <= rule.proximity;
            if same_category || in_column {
                pairs.push((a.id.as_str(), b.id.as_str()));
            }
        }
    }
    pairs
}
