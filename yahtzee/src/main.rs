use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yahtzee::{
    execute, game_views, get_game, Category, Combination, Command, CommandOutcome,
    InMemoryEventStore,
};

/// Plays one unattended game between two players: every turn is a single
/// roll followed by scoring the first open combination.
fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yahtzee=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut store = InMemoryEventStore::new();

    let game = match execute(&mut store, &Command::CreateGame) {
        Ok(CommandOutcome::Created { game }) => game,
        other => panic!("expected a created game, got {:?}", other),
    };
    tracing::info!("Created game {}", game);

    for player in ["alice", "bob"] {
        execute(
            &mut store,
            &Command::AddPlayer {
                game,
                player: player.to_string(),
            },
        )
        .expect("adding a uniquely named player to a pending game works");
    }
    execute(&mut store, &Command::StartGame { game })
        .expect("starting a game with players works");

    loop {
        let aggregate = get_game(&store, game);
        let player = match aggregate.board.playing_player() {
            Some(player) => player.name.clone(),
            None => break,
        };

        execute(
            &mut store,
            &Command::RollDices {
                game,
                player: player.clone(),
            },
        )
        .expect("the first roll of a turn is always allowed");

        let aggregate = get_game(&store, game);
        let scorer = aggregate
            .board
            .get_player(&player)
            .expect("the playing player is part of the game");
        let combination = Combination::ALL
            .into_iter()
            .find(|combination| scorer.can_score(Category::from(*combination)))
            .expect("an unfinished scorecard has an open combination");

        execute(
            &mut store,
            &Command::Score {
                game,
                player,
                combination,
            },
        )
        .expect("scoring an open combination works");
    }

    let views = game_views(&store, game);
    for player in views.players() {
        tracing::info!("{} finished with {} points", player.name, player.scorecard.total);
    }

    let summary =
        serde_json::to_string_pretty(&views.players()).expect("player views always serialize");
    println!("{}", summary);
}
