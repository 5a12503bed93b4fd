mod autoplay;

use {
    autoplay::AutoplayPlugin,
    bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*, state::app::StatesPlugin},
    clap::Parser,
    loading::SkillTreeSource,
    skill_resources::SkillRng,
    skill_tree_core::CorePlugin,
    std::time::Duration,
};

#[derive(Parser, Debug)]
#[command(name = "skill_tree")]
#[command(about = "Plays a skill tree session headlessly until every skill is unlocked")]
#[command(version)]
struct Cli {
    /// Asset path of a `.skilltree.ron` definition (the builtin tree when omitted)
    #[arg(short, long)]
    definition: Option<String>,

    /// Seed for card dealing, rewards and question order
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> AppExit {
    let cli = Cli::parse();

    let mut app = App::new();
    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / 60.0,
        ))),
    )
    .add_plugins((
        LogPlugin {
            filter: "error,skill_tree=info,\
                loading=info,\
                unlocks=debug,\
                memory_match=debug,\
                quiz=debug,\
                notification_ui=info,\
                skill_tree_core=info"
                .into(),
            level: bevy::log::Level::TRACE,
            ..Default::default()
        },
        AssetPlugin::default(),
        StatesPlugin,
    ))
    .insert_resource(match cli.definition {
        Some(path) => SkillTreeSource::Asset(path),
        None => SkillTreeSource::Builtin,
    })
    .add_plugins(CorePlugin)
    .add_plugins(AutoplayPlugin);

    if let Some(seed) = cli.seed {
        app.insert_resource(SkillRng::seeded(seed));
    }

    app.run()
}
