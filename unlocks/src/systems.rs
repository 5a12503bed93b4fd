use {
    crate::is_eligible,
    bevy::prelude::*,
    skill_events::{GrantSkillUnlock, SkillTreeCompleted, SkillUnlocked, UnlockSkillRequest, UnlockSource},
    skill_resources::{SkillCatalog, SkillTreeSettings},
};

/// Observer for node clicks. Only eligible skills are forwarded as grants.
pub fn on_unlock_request(
    trigger: On<UnlockSkillRequest>,
    catalog: Res<SkillCatalog>,
    settings: Res<SkillTreeSettings>,
    mut commands: Commands,
) {
    let event = trigger.event();

    if !is_eligible(&catalog, &event.skill_id, &settings.adjacency) {
        debug!(skill_id = %event.skill_id, "ignoring click on a skill that cannot be unlocked");
        return;
    }

    commands.trigger(GrantSkillUnlock {
        skill_id: event.skill_id.clone(),
        source: UnlockSource::Adjacency,
    });
}

/// Observer that applies grants to the catalog and reports completion once.
pub fn apply_skill_grant(
    trigger: On<GrantSkillUnlock>,
    mut catalog: ResMut<SkillCatalog>,
    mut commands: Commands,
) {
    let event = trigger.event();

    if !catalog.unlock(&event.skill_id) {
        trace!(skill_id = %event.skill_id, source = ?event.source, "grant had no effect");
        return;
    }

    let name = catalog
        .get(&event.skill_id)
        .map(|skill| skill.name.clone())
        .unwrap_or_default();
    let unlocked = catalog.unlocked_count();
    let total = catalog.len();

    info!(skill_id = %event.skill_id, source = ?event.source, %unlocked, %total, "skill unlocked");
    commands.trigger(SkillUnlocked {
        skill_id: event.skill_id.clone(),
        name,
        source: event.source,
        unlocked,
        total,
    });

    if catalog.take_completion() {
        info!(%total, "all skills unlocked");
        commands.trigger(SkillTreeCompleted { total });
    }
}
