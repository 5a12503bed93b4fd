use {crate::*, skill_components::QuizQuestion, skill_resources::SkillTreeSettings};

#[test]
fn test_builtin_definition_is_valid() {
    let definition = SkillTreeDefinition::builtin();

    assert_eq!(definition.validate(), Ok(()));
    assert_eq!(definition.skills.len(), 13);
    assert_eq!(definition.quiz.len(), definition.skills.len());
}

#[test]
fn test_built_catalog_unlocks_only_the_seed() {
    let catalog = SkillTreeDefinition::builtin()
        .build_catalog()
        .expect("builtin definition should be valid");

    assert_eq!(catalog.len(), 13);
    assert_eq!(catalog.unlocked_count(), 1);
    assert!(catalog.is_unlocked("react"));
}

#[test]
fn test_rejects_empty_tree() {
    let mut definition = SkillTreeDefinition::builtin();
    definition.skills.clear();

    assert_eq!(definition.validate(), Err(DefinitionError::Empty));
}

#[test]
fn test_rejects_duplicate_skill() {
    let mut definition = SkillTreeDefinition::builtin();
    let copy = definition.skills[3].clone();
    definition.skills.push(copy);

    assert_eq!(
        definition.validate(),
        Err(DefinitionError::DuplicateSkill("html".into()))
    );
}

#[test]
fn test_rejects_unknown_seed() {
    let mut definition = SkillTreeDefinition::builtin();
    definition.seed = "cobol".into();

    assert_eq!(
        definition.build_catalog().map(|_| ()),
        Err(DefinitionError::UnknownSeed("cobol".into()))
    );
}

#[test]
fn test_rejects_out_of_range_values() {
    let mut definition = SkillTreeDefinition::builtin();
    definition.skills[0].level = 101;
    assert_eq!(
        definition.validate(),
        Err(DefinitionError::LevelOutOfRange {
            id: "react".into(),
            level: 101
        })
    );

    let mut definition = SkillTreeDefinition::builtin();
    definition.skills[1].position.x = -5.0;
    assert_eq!(
        definition.validate(),
        Err(DefinitionError::PositionOutOfRange { id: "redux".into() })
    );
}

#[test]
fn test_rejects_bad_quiz_questions() {
    let orphan = QuizQuestion {
        skill_id: "cobol".into(),
        prompt: "?".into(),
        options: vec!["a".into()],
        answer: "a".into(),
    };
    let mut definition = SkillTreeDefinition::builtin();
    definition.quiz.push(orphan);
    assert_eq!(
        definition.validate(),
        Err(DefinitionError::UnknownQuizTarget("cobol".into()))
    );

    let mut definition = SkillTreeDefinition::builtin();
    let repeat = definition.quiz[2].clone();
    definition.quiz.push(repeat);
    assert_eq!(
        definition.validate(),
        Err(DefinitionError::DuplicateQuizTarget("js".into()))
    );

    let mut definition = SkillTreeDefinition::builtin();
    definition.quiz[9].answer = "GROUP BY".into();
    assert_eq!(
        definition.build_quiz_bank().map(|_| ()),
        Err(DefinitionError::AnswerNotInOptions("sql".into()))
    );
}

#[test]
fn test_rejects_memory_match_settings_that_cannot_finish() {
    let mut definition = SkillTreeDefinition::builtin();
    let mut settings = SkillTreeSettings::default();

    settings.memory_match.pairs = 0;
    definition.settings = Some(settings.clone());
    assert_eq!(definition.validate(), Err(DefinitionError::NoMemoryPairs));

    settings.memory_match.pairs = 4;
    settings.memory_match.reward_count = 0;
    definition.settings = Some(settings.clone());
    assert_eq!(definition.validate(), Err(DefinitionError::NoMemoryReward));

    settings.memory_match.reward_count = 2;
    definition.settings = Some(settings);
    assert_eq!(definition.validate(), Ok(()));
}

#[test]
fn test_error_messages_name_the_skill() {
    let error = DefinitionError::LevelOutOfRange {
        id: "git".into(),
        level: 120,
    };
    assert_eq!(error.to_string(), "skill `git` has level 120, expected 0-100");
}
