use {
    crate::{FlipOutcome, MemoryBoard},
    bevy::prelude::*,
    skill_events::{
        CardPairResolved, ExitMiniGame, FlipCard, GrantSkillUnlock, MemoryMatchCompleted, MemoryMatchRewarded,
        MemoryMatchStarted, StartMemoryMatch, UnlockSource,
    },
    skill_resources::{SkillCatalog, SkillRng, SkillTreeSettings},
    states::MiniGameState,
    std::time::Duration,
};

/// A revealed pair waiting for its delay. Spawned as a child of the board entity,
/// so despawning the board drops it.
#[derive(Component, Debug)]
pub struct PendingResolution {
    pub timer: Timer,
}

pub fn start_memory_match(
    _trigger: On<StartMemoryMatch>,
    state: Res<State<MiniGameState>>,
    mut next_state: ResMut<NextState<MiniGameState>>,
    catalog: Res<SkillCatalog>,
    settings: Res<SkillTreeSettings>,
    mut rng: ResMut<SkillRng>,
    stale: Query<Entity, With<MemoryBoard>>,
    mut commands: Commands,
) {
    if *state.get() == MiniGameState::MemoryMatch {
        warn!("memory match already running, ignoring start");
        return;
    }

    for entity in stale.iter() {
        commands.entity(entity).despawn();
    }

    let ids: Vec<String> = catalog.ids().map(String::from).collect();
    let memory = &settings.memory_match;
    let mut board = MemoryBoard::deal(&ids, memory.pairs, memory.shuffle, &mut rng);
    let cards = board.cards().len();
    // nothing was dealt, so no pair resolution will ever report the win
    let cleared_on_deal = board.claim_completion();

    commands.spawn((Name::new("Memory match"), board));
    next_state.set(MiniGameState::MemoryMatch);

    debug!(%cards, shuffle = ?memory.shuffle, "memory match dealt");
    commands.trigger(MemoryMatchStarted { cards });

    if cleared_on_deal {
        warn!(pairs = %memory.pairs, "memory match dealt an empty board");
        commands.trigger(MemoryMatchCompleted { pairs: 0, moves: 0 });
    }
}

pub fn flip_card(
    trigger: On<FlipCard>,
    mut boards: Query<(Entity, &mut MemoryBoard)>,
    settings: Res<SkillTreeSettings>,
    mut commands: Commands,
) {
    let index = trigger.event().index;

    let Ok((board_entity, mut board)) = boards.single_mut() else {
        debug!(%index, "flip without an active board");
        return;
    };

    match board.flip(index) {
        FlipOutcome::Ignored => {
            trace!(%index, phase = ?board.phase(), "flip ignored");
        }
        FlipOutcome::Revealed { index } => {
            trace!(%index, "first card revealed");
        }
        FlipOutcome::PairRevealed {
            first,
            second,
            matched,
        } => {
            let memory = &settings.memory_match;
            let delay_ms = if matched {
                memory.match_delay_ms
            } else {
                memory.mismatch_delay_ms
            };

            debug!(%first, %second, %matched, %delay_ms, "pair revealed");
            commands.spawn((
                Name::new("Pending pair"),
                PendingResolution {
                    timer: Timer::new(Duration::from_millis(delay_ms), TimerMode::Once),
                },
                ChildOf(board_entity),
            ));
        }
    }
}

pub fn tick_pending_resolutions(
    time: Res<Time>,
    mut pending: Query<(Entity, &mut PendingResolution, &ChildOf)>,
    mut boards: Query<&mut MemoryBoard>,
    mut commands: Commands,
) {
    for (entity, mut resolution, child_of) in pending.iter_mut() {
        resolution.timer.tick(time.delta());
        if !resolution.timer.is_finished() {
            continue;
        }

        commands.entity(entity).despawn();

        let Ok(mut board) = boards.get_mut(child_of.parent()) else {
            continue;
        };

        if let Some(resolved) = board.resolve() {
            commands.trigger(CardPairResolved {
                first: resolved.first,
                second: resolved.second,
                matched: resolved.matched,
            });
        }

        if board.claim_completion() {
            info!(pairs = %board.total_pairs(), moves = %board.moves(), "memory match cleared");
            commands.trigger(MemoryMatchCompleted {
                pairs: board.total_pairs(),
                moves: board.moves(),
            });
        }
    }
}

/// Grants random locked skills for a cleared board, at least one, then closes the game.
pub fn grant_match_reward(
    _trigger: On<MemoryMatchCompleted>,
    catalog: Res<SkillCatalog>,
    settings: Res<SkillTreeSettings>,
    mut rng: ResMut<SkillRng>,
    mut next_state: ResMut<NextState<MiniGameState>>,
    boards: Query<Entity, With<MemoryBoard>>,
    mut commands: Commands,
) {
    let locked: Vec<String> = catalog.locked_ids().map(String::from).collect();
    let skill_ids = rng.sample(&locked, settings.memory_match.reward_count.max(1));

    if skill_ids.is_empty() {
        debug!("memory match cleared with nothing left to unlock");
    }

    for skill_id in &skill_ids {
        commands.trigger(GrantSkillUnlock {
            skill_id: skill_id.clone(),
            source: UnlockSource::MemoryMatch,
        });
    }
    commands.trigger(MemoryMatchRewarded { skill_ids });

    for entity in boards.iter() {
        commands.entity(entity).despawn();
    }
    next_state.set(MiniGameState::Closed);
}

pub fn exit_memory_match(
    _trigger: On<ExitMiniGame>,
    boards: Query<Entity, With<MemoryBoard>>,
    mut next_state: ResMut<NextState<MiniGameState>>,
    mut commands: Commands,
) {
    if boards.is_empty() {
        return;
    }

    for entity in boards.iter() {
        commands.entity(entity).despawn();
    }
    debug!("memory match closed");
    next_state.set(MiniGameState::Closed);
}

/// Runs when the state leaves `MemoryMatch`, whichever way it left.
pub fn teardown_memory_match(boards: Query<Entity, With<MemoryBoard>>, mut commands: Commands) {
    for entity in boards.iter() {
        commands.entity(entity).despawn();
    }
}
