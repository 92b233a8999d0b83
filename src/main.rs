use std::sync::Arc;

use sqlx::PgPool;

use todo_api::config;
use todo_api::routes;
use todo_api::state::AppState;
use todo_api::store::PgTodoStore;

#[tokio::main]
async fn main() {
    let config = config::Config::from_env();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL missing, it is required");
    let db = PgPool::connect(&database_url)
        .await
        .expect("Error connecting DB");

    sqlx::migrate!()
        .run(&db)
        .await
        .expect("Error running migrations");

    let state = AppState {
        store: Arc::new(PgTodoStore::new(db)),
    };

    let app = routes::routes().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.addr()).await.unwrap();

    println!("server is chilling at http://{}", config.addr());

    axum::serve(listener, app).await.unwrap();
}
