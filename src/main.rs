use clap::Parser;
use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::info;
use user_directory_sync::directory::RestDirectory;
use user_directory_sync::helpers::format_user;
use user_directory_sync::models::{Args, Command, Config, DraftCreate, DraftUpdate};
use user_directory_sync::store::UserListSynchronizer;

#[tokio::main]
async fn main() {
    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let config: Config = Figment::new()
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("USERS_"))
        .extract()
        .unwrap();
    info!("Using user directory at {}", config.api_base_url);
    let directory = RestDirectory::new(reqwest::Client::new(), config.api_base_url);

    /* Load the current roster */
    let mut store = UserListSynchronizer::new();
    store.load(&directory).await;

    /* Apply the requested mutation */
    match args.command {
        Command::List => (),
        Command::Create { name, email } => {
            store.draft_create = DraftCreate { name, email };
            store.create(&directory).await;
        }
        Command::Update { id, name, email } => {
            store.draft_update = DraftUpdate { id, name, email };
            store.update(&directory).await;
        }
        Command::Delete { id } => {
            store.remove(&directory, id).await;
        }
    }

    /* Print the resulting local roster, newest first */
    for user in store.users().iter() {
        println!("{}", format_user(user));
    }
}
