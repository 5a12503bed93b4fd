//! Toast notifications for the skill tree.
//! Keeps the active stack and its timers; a renderer draws whatever `Notification` entities exist.
//! Handles unlocks, wrong quiz answers, memory match rewards and tree completion.


use {
    bevy::prelude::*,
    skill_events::{MemoryMatchRewarded, QuizAnswerRejected, SkillTreeCompleted, SkillUnlocked, UnlockSource},
    states::SessionState,
};

/// Duration in seconds to show each notification
pub const NOTIFICATION_DURATION: f32 = 5.0;
/// Height of each notification in pixels
const NOTIFICATION_HEIGHT: f32 = 50.0;
/// Gap between notifications
const NOTIFICATION_GAP: f32 = 8.0;
/// Top offset for the first notification
const NOTIFICATION_TOP_OFFSET: f32 = 10.0;
/// Maximum number of concurrent notifications
pub const MAX_NOTIFICATIONS: usize = 5;

pub struct NotificationUiPlugin;

impl Plugin for NotificationUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NotificationQueue>()
            .init_state::<SessionState>()
            .add_observer(on_skill_unlocked)
            .add_observer(on_answer_rejected)
            .add_observer(on_match_rewarded)
            .add_observer(on_tree_completed)
            .add_systems(
                Update,
                (
                    spawn_pending_notifications,
                    update_notification_slots,
                    despawn_expired_notifications,
                )
                    .chain()
                    .run_if(not(in_state(SessionState::Loading))),
            );
    }
}

// ============================================================================
// Types
// ============================================================================

/// Data for a pending notification
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationData {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

/// What a toast reports; a renderer picks its styling from this
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Unlock,
    Warning,
}

// ============================================================================
// Resources and Components
// ============================================================================

/// Resource managing active and pending notifications
#[derive(Resource, Default)]
pub struct NotificationQueue {
    /// Entities of currently displayed notifications (in order, oldest first)
    active: Vec<Entity>,
    /// Pending notifications to spawn (when space is available)
    pending: Vec<NotificationData>,
}

impl NotificationQueue {
    /// Queue a new notification to be displayed
    pub fn push(&mut self, data: NotificationData) {
        self.pending.push(data);
    }

    pub fn active(&self) -> &[Entity] {
        &self.active
    }

    pub fn pending(&self) -> &[NotificationData] {
        &self.pending
    }
}

/// A displayed toast. `slot` is its index in the stack, oldest on top.
#[derive(Component, Debug)]
pub struct Notification {
    pub data: NotificationData,
    pub slot: usize,
    timer: Timer,
}

impl Notification {
    /// Distance from the top of the screen in pixels.
    pub fn top_offset(&self) -> f32 {
        calculate_top_position(self.slot)
    }
}

// ============================================================================
// Event Observers
// ============================================================================

fn on_skill_unlocked(trigger: On<SkillUnlocked>, mut queue: ResMut<NotificationQueue>) {
    let event = trigger.event();
    let title = match event.source {
        UnlockSource::Adjacency => "Unlocked",
        UnlockSource::MemoryMatch => "Memory Match Reward",
        UnlockSource::Quiz => "Quiz Reward",
    };

    queue.push(NotificationData {
        title: title.to_string(),
        message: format!("{} ({}/{})", event.name, event.unlocked, event.total),
        kind: NotificationKind::Unlock,
    });
}

fn on_answer_rejected(_trigger: On<QuizAnswerRejected>, mut queue: ResMut<NotificationQueue>) {
    queue.push(NotificationData {
        title: "Wrong Answer".to_string(),
        message: "Try again".to_string(),
        kind: NotificationKind::Warning,
    });
}

/// Only the empty reward gets its own toast, granted skills announce themselves.
fn on_match_rewarded(trigger: On<MemoryMatchRewarded>, mut queue: ResMut<NotificationQueue>) {
    if !trigger.event().skill_ids.is_empty() {
        return;
    }

    queue.push(NotificationData {
        title: "Memory Match Cleared".to_string(),
        message: "Nothing left to unlock".to_string(),
        kind: NotificationKind::Info,
    });
}

fn on_tree_completed(trigger: On<SkillTreeCompleted>, mut queue: ResMut<NotificationQueue>) {
    queue.push(NotificationData {
        title: "Skill Tree Complete".to_string(),
        message: format!("All {} skills unlocked", trigger.event().total),
        kind: NotificationKind::Info,
    });
}

// ============================================================================
// Systems
// ============================================================================

/// Spawns pending notifications if we have room
fn spawn_pending_notifications(mut commands: Commands, mut queue: ResMut<NotificationQueue>) {
    while !queue.pending.is_empty() && queue.active.len() < MAX_NOTIFICATIONS {
        let data = queue.pending.remove(0);
        debug!(title = %data.title, message = %data.message, "showing notification");

        let entity = commands
            .spawn((
                Name::new("Notification"),
                Notification {
                    data,
                    slot: queue.active.len(),
                    timer: Timer::from_seconds(NOTIFICATION_DURATION, TimerMode::Once),
                },
            ))
            .id();
        queue.active.push(entity);
    }
}

fn update_notification_slots(queue: Res<NotificationQueue>, mut query: Query<&mut Notification>) {
    for (index, &entity) in queue.active.iter().enumerate() {
        if let Ok(mut notification) = query.get_mut(entity) {
            notification.slot = index;
        }
    }
}

/// Despawns notifications after their timer expires and reindexes the queue
fn despawn_expired_notifications(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Notification)>,
    mut queue: ResMut<NotificationQueue>,
) {
    let mut expired = Vec::new();
    for (entity, mut notification) in query.iter_mut() {
        notification.timer.tick(time.delta());
        if notification.timer.is_finished() {
            expired.push(entity);
        }
    }

    for entity in expired {
        queue.active.retain(|&e| e != entity);
        commands.entity(entity).despawn();
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn calculate_top_position(index: usize) -> f32 {
    NOTIFICATION_TOP_OFFSET + (index as f32) * (NOTIFICATION_HEIGHT + NOTIFICATION_GAP)
}
